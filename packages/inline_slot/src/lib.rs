#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! An inline optional value with explicit lifecycle control.
//!
//! This package provides [`Slot<T>`], a container that holds zero or one `T` in storage that
//! is part of the slot itself, with no heap allocation. It is a close relative of [`Option<T>`]
//! with a different emphasis: every state transition is funneled through exactly one
//! [`Clone::clone`], [`Clone::clone_from`], move or drop of the contained value, so code that
//! counts or otherwise observes these operations sees exactly what it expects.
//!
//! # Key features
//!
//! - **Inline storage**: the value lives in a cell sized and aligned for `T`.
//! - **Exact lifecycle**: constructing, assigning, emplacing, resetting and dropping each touch
//!   the value through a single primitive operation.
//! - **Checked and unchecked access**: [`Slot::value()`] and friends report [`BadAccess`] on an
//!   empty slot, [`Deref`][std::ops::Deref] panics, and the `unsafe` `*_unchecked()` accessors
//!   skip the check entirely for callers who already know the slot is engaged.
//! - **Copy-aware assignment**: assigning over an engaged slot from a reference uses
//!   [`Clone::clone_from`], reusing the existing value instead of dropping and rebuilding it.
//!
//! # Example
//!
//! ```
//! use inline_slot::{BadAccess, Slot};
//!
//! let mut flight = Slot::<String>::empty();
//! assert_eq!(flight.value(), Err(BadAccess));
//!
//! flight.assign("SU-274".to_string());
//! assert_eq!(flight.as_str(), "SU-274");
//!
//! // Copying into an engaged slot reuses the existing value.
//! flight.assign_ref(&"SU-275".to_string());
//! assert_eq!(flight.as_str(), "SU-275");
//!
//! // Moving the value out consumes the slot.
//! let name = flight.into_value().unwrap();
//! assert_eq!(name, "SU-275");
//! ```

mod error;
mod slot;

pub use error::*;
pub use slot::*;
