//! UI tests for compile-time error checking.
//!
//! This module contains a single test function that runs all UI tests sequentially.
//! This is required because `trybuild` does not support parallel test execution.
//!
//! # Only failing tests
//!
//! The only purpose to have UI tests is to verify that compilation fails.
//! Do not add tests for successful cases - use regular unit/integration tests for that.

#[test]
#[cfg_attr(miri, ignore)] // Miri and trybuild do not go together.
#[cfg_attr(careful, ignore)] // Careful is nightly build, may have different expected output.
fn ui() {
    let t = trybuild::TestCases::new();

    t.compile_fail("tests/ui/*/compile_fail/*.rs");
}
