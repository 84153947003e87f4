//! UI tests for compile-time error checking.
//!
//! This package uses the `trybuild` test harness to verify that misuse of the `inline_slot`
//! API is rejected by the compiler instead of failing at runtime.
//!
//! All cases run from a single test function because `trybuild` does not support parallel
//! test execution. New cases go under `tests/ui/{package}/compile_fail/` and are picked up
//! automatically. Do NOT add additional `#[test]` functions to this package.
