use thiserror::Error;

/// Returned by the checked accessors of [`Slot`][crate::Slot] when the slot is empty.
///
/// This is the only failure mode of the container. It carries no payload because the only
/// thing that can go wrong is asking for a value that is not there.
///
/// # Examples
///
/// ```
/// use inline_slot::{BadAccess, Slot};
///
/// let slot = Slot::<u32>::empty();
///
/// assert_eq!(slot.value(), Err(BadAccess));
/// ```
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("bad slot access: the slot is empty")]
#[expect(
    clippy::exhaustive_structs,
    reason = "a unit error that callers compare against and construct in tests"
)]
pub struct BadAccess;
