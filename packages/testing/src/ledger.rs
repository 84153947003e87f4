use std::cell::Cell;

/// A snapshot of the operations recorded by a [`Ledger`].
///
/// Compare a whole snapshot against an expected value to assert that an operation performed
/// exactly the expected set of lifecycle steps and nothing else.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counts {
    /// Fresh constructions that are neither copies nor moves.
    pub constructed: usize,

    /// Constructions via [`Clone::clone`].
    pub copy_constructed: usize,

    /// Constructions via [`Tracked::moved_from()`][crate::Tracked::moved_from].
    pub move_constructed: usize,

    /// Assignments via [`Clone::clone_from`].
    pub copy_assigned: usize,

    /// Assignments via [`Tracked::move_assign_from()`][crate::Tracked::move_assign_from].
    ///
    /// No `Slot` operation ever moves by assignment: assigning an owned value over an engaged
    /// slot is a Rust place assignment, which drops the old value and writes the new one
    /// bitwise. Slot tests therefore expect this counter to stay at zero.
    pub move_assigned: usize,

    /// Drops.
    pub destructed: usize,

    /// Calls into the update path that requires an exclusive reference.
    pub mutable_updates: usize,

    /// Calls into the update path that only requires a shared reference.
    pub shared_updates: usize,

    /// Calls into the update path that transfers the contents of the instance elsewhere.
    pub transfer_updates: usize,
}

/// Records the lifecycle operations of [`Tracked`][crate::Tracked] instances.
///
/// A ledger is an explicit object that each tracked instance borrows, so every test gets its
/// own isolated set of counters. It is single-threaded, like the instances that report to it.
#[derive(Debug, Default)]
pub struct Ledger {
    counts: Cell<Counts>,
}

impl Ledger {
    /// Creates a ledger with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of all counters.
    #[must_use]
    pub fn counts(&self) -> Counts {
        self.counts.get()
    }

    /// Number of instances constructed and not yet dropped.
    ///
    /// # Panics
    ///
    /// Panics if more drops than constructions have been recorded, which means some value was
    /// dropped twice.
    #[must_use]
    pub fn live(&self) -> usize {
        let counts = self.counts.get();

        counts
            .constructed
            .checked_add(counts.copy_constructed)
            .and_then(|n| n.checked_add(counts.move_constructed))
            .and_then(|n| n.checked_sub(counts.destructed))
            .expect("more drops recorded than constructions - some value was dropped twice")
    }

    /// Sets all counters back to zero.
    pub fn reset(&self) {
        self.counts.set(Counts::default());
    }

    /// Emits the current counters as a single structured `DEBUG` event.
    #[cfg_attr(test, mutants::skip)] // Log output is not asserted on - manually tested.
    pub fn log_summary(&self) {
        let counts = self.counts.get();

        tracing::debug!(
            constructed = counts.constructed,
            copy_constructed = counts.copy_constructed,
            move_constructed = counts.move_constructed,
            copy_assigned = counts.copy_assigned,
            move_assigned = counts.move_assigned,
            destructed = counts.destructed,
            mutable_updates = counts.mutable_updates,
            shared_updates = counts.shared_updates,
            transfer_updates = counts.transfer_updates,
            live = self.live(),
            "ledger summary"
        );
    }

    pub(crate) fn record(&self, f: impl FnOnce(&mut Counts)) {
        let mut counts = self.counts.get();
        f(&mut counts);
        self.counts.set(counts);
    }
}
