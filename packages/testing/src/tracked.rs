use std::mem;

use crate::{Counts, Ledger};

/// A value that reports every lifecycle operation it goes through to a [`Ledger`].
///
/// The operations map onto the counters of [`Counts`] as follows:
///
/// | Operation | Counter | Update path |
/// |---|---|---|
/// | [`new()`][Self::new], [`with_payload()`][Self::with_payload] | `constructed` | |
/// | [`Clone::clone`] | `copy_constructed` | shared, on the source |
/// | [`moved_from()`][Self::moved_from] | `move_constructed` | transfer |
/// | [`Clone::clone_from`] | `copy_assigned` | shared, on the source |
/// | [`move_assign_from()`][Self::move_assign_from] | `move_assigned` | transfer |
/// | [`Drop`] | `destructed` | |
///
/// Each instance carries a payload, which is the only thing compared by [`PartialEq`]. A move
/// leaves the source alive with a zero payload, so the source is still dropped later.
#[derive(Debug)]
pub struct Tracked<'a> {
    ledger: &'a Ledger,
    payload: u64,
}

impl<'a> Tracked<'a> {
    /// Creates an instance with a zero payload.
    #[must_use]
    pub fn new(ledger: &'a Ledger) -> Self {
        Self::with_payload(ledger, 0)
    }

    /// Creates an instance with the given payload.
    #[must_use]
    pub fn with_payload(ledger: &'a Ledger, payload: u64) -> Self {
        ledger.record(|counts| counts.constructed += 1);

        Self { ledger, payload }
    }

    /// Creates an instance by transferring the payload out of `source`.
    ///
    /// The source stays alive with a zero payload and is dropped whenever its owner drops it.
    #[must_use]
    pub fn moved_from(source: &mut Self) -> Self {
        let payload = source.transfer();
        source.ledger.record(|counts| counts.move_constructed += 1);

        Self {
            ledger: source.ledger,
            payload,
        }
    }

    /// Replaces this payload with the payload transferred out of `source`.
    ///
    /// This is the counted form of a move assignment. No `Slot` operation reaches it, see
    /// [`Counts::move_assigned`][crate::Counts::move_assigned].
    pub fn move_assign_from(&mut self, source: &mut Self) {
        self.payload = source.transfer();
        self.ledger.record(|counts| counts.move_assigned += 1);
    }

    /// The payload of this instance.
    #[must_use]
    pub fn payload(&self) -> u64 {
        self.payload
    }

    /// Invokes the update path that only requires a shared reference.
    pub fn touch(&self) {
        self.ledger.record(|counts| counts.shared_updates += 1);
    }

    /// Invokes the update path that requires an exclusive reference.
    pub fn touch_mut(&mut self) {
        self.ledger.record(|counts| counts.mutable_updates += 1);
    }

    /// The transfer update path: takes the payload, leaving zero behind.
    fn transfer(&mut self) -> u64 {
        self.ledger.record(|counts| counts.transfer_updates += 1);

        mem::take(&mut self.payload)
    }

    /// Shorthand for the counters of the ledger this instance reports to.
    #[must_use]
    pub fn counts(&self) -> Counts {
        self.ledger.counts()
    }
}

impl<'a> From<&'a Ledger> for Tracked<'a> {
    fn from(ledger: &'a Ledger) -> Self {
        Self::new(ledger)
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        self.touch();
        self.ledger.record(|counts| counts.copy_constructed += 1);

        Self {
            ledger: self.ledger,
            payload: self.payload,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        source.touch();
        self.ledger.record(|counts| counts.copy_assigned += 1);

        self.payload = source.payload;
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.ledger.record(|counts| counts.destructed += 1);
    }
}

impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl Eq for Tracked<'_> {}
