#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.
#![allow(
    clippy::arithmetic_side_effects,
    reason = "operation counters in tests never come close to overflowing"
)]

//! Private helpers for testing and examples in the `inline_slot` package.
//!
//! The centerpiece is [`Tracked`], a value type that records every construction, copy, move,
//! assignment and drop it goes through in a [`Ledger`]. Each test creates its own ledger, so
//! tests stay independent of each other even when run in parallel.
//!
//! # Example
//!
//! ```rust
//! use testing::{Counts, Ledger, Tracked};
//!
//! let ledger = Ledger::new();
//!
//! {
//!     let original = Tracked::new(&ledger);
//!     let _copy = original.clone();
//!
//!     assert_eq!(ledger.live(), 2);
//! }
//!
//! assert_eq!(
//!     ledger.counts(),
//!     Counts {
//!         constructed: 1,
//!         copy_constructed: 1,
//!         destructed: 2,
//!         shared_updates: 1,
//!         ..Counts::default()
//!     }
//! );
//! ```

mod ledger;
mod tracked;

pub use ledger::*;
pub use tracked::*;
