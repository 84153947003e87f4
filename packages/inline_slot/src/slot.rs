use std::fmt;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};

use crate::BadAccess;

/// Holds zero or one `T` inline, without heap allocation.
///
/// The value lives in a cell sized and aligned for `T` inside the slot itself. A flag records
/// whether the cell currently holds a live value ("engaged") or is uninitialized ("empty").
///
/// Every state transition maps onto exactly one primitive of `T`:
///
/// * constructing from a reference or from another slot calls [`Clone::clone`] once;
/// * assigning a reference over an engaged slot calls [`Clone::clone_from`] once, without
///   dropping and reconstructing the value;
/// * constructing or assigning from an owned `T` moves it, with no clones;
/// * [`reset()`][Self::reset], [`emplace()`][Self::emplace] over a value and dropping an
///   engaged slot each drop the old value exactly once.
///
/// This makes the type suitable for code that needs to reason about the exact number of
/// copies and drops of the contained value.
///
/// # Access modes
///
/// | | Shared | Exclusive | Consuming |
/// |---|---|---|---|
/// | Checked, returns [`BadAccess`] | [`value()`][Self::value] | [`value_mut()`][Self::value_mut] | [`into_value()`][Self::into_value] |
/// | Checked, panics | [`Deref`] | [`DerefMut`] | n/a |
/// | Unchecked, `unsafe` | [`get_unchecked()`][Self::get_unchecked] | [`get_unchecked_mut()`][Self::get_unchecked_mut] | [`into_value_unchecked()`][Self::into_value_unchecked] |
///
/// # Thread safety
///
/// The slot is thread-mobile and thread-safe exactly when `T` is. It performs no
/// synchronization of its own; wrap it in a lock to mutate it from multiple threads.
///
/// # Examples
///
/// An empty slot gives the compiler nothing to infer `T` from, so name the type up front with
/// `Slot::<T>::empty()` when the first use is a method call.
///
/// ```
/// use inline_slot::Slot;
///
/// let mut slot = Slot::<i32>::empty();
/// assert!(!slot.has_value());
///
/// slot.assign(777);
/// assert!(slot.has_value());
/// assert_eq!(slot.value(), Ok(&777));
///
/// slot.reset();
/// assert!(!slot.has_value());
/// ```
pub struct Slot<T> {
    /// Initialized if and only if `engaged` is `true`.
    cell: MaybeUninit<T>,

    engaged: bool,
}

impl<T> Slot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cell: MaybeUninit::uninit(),
            engaged: false,
        }
    }

    /// Creates an engaged slot by moving `value` into the cell.
    ///
    /// No clone or drop of `T` takes place.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            cell: MaybeUninit::new(value),
            engaged: true,
        }
    }

    /// Creates an engaged slot holding a clone of `value`.
    ///
    /// Calls [`Clone::clone`] exactly once.
    #[must_use]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone())
    }

    /// Whether the slot currently holds a value.
    #[must_use]
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    /// Returns a shared reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] if the slot is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadAccess> {
        if self.engaged {
            // SAFETY: We just checked that the slot is engaged.
            Ok(unsafe { self.get_unchecked() })
        } else {
            Err(BadAccess)
        }
    }

    /// Returns an exclusive reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] if the slot is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadAccess> {
        if self.engaged {
            // SAFETY: We just checked that the slot is engaged.
            Ok(unsafe { self.get_unchecked_mut() })
        } else {
            Err(BadAccess)
        }
    }

    /// Consumes the slot and moves the value out of it.
    ///
    /// The value is transferred to the caller, so the slot does not drop it.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] if the slot is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, BadAccess> {
        if self.engaged {
            // SAFETY: We just checked that the slot is engaged.
            Ok(unsafe { self.into_value_unchecked() })
        } else {
            Err(BadAccess)
        }
    }

    /// Returns a shared reference to the value without checking that there is one.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the slot is engaged.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.engaged, "get_unchecked() called on an empty slot");

        // SAFETY: Forwarding the guarantee from the caller that the cell is initialized.
        unsafe { self.cell.assume_init_ref() }
    }

    /// Returns an exclusive reference to the value without checking that there is one.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the slot is engaged.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.engaged, "get_unchecked_mut() called on an empty slot");

        // SAFETY: Forwarding the guarantee from the caller that the cell is initialized.
        unsafe { self.cell.assume_init_mut() }
    }

    /// Consumes the slot and moves the value out of it without checking that there is one.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the slot is engaged.
    #[must_use]
    #[inline]
    pub unsafe fn into_value_unchecked(self) -> T {
        debug_assert!(self.engaged, "into_value_unchecked() called on an empty slot");

        // Ownership of the value passes to the caller, so our own drop logic must not run.
        let this = ManuallyDrop::new(self);

        // SAFETY: Forwarding the guarantee from the caller that the cell is initialized.
        // The slot is never dropped, so this is the only read of the value.
        unsafe { this.cell.assume_init_read() }
    }

    /// Moves `value` into the slot.
    ///
    /// If the slot is engaged, `value` is assigned over the existing value in place. Rust
    /// assignment drops the previous value exactly once as part of this. If the slot is
    /// empty, `value` is moved into the cell and the slot becomes engaged.
    pub fn assign(&mut self, value: T) {
        if self.engaged {
            // SAFETY: We just checked that the slot is engaged.
            let current = unsafe { self.get_unchecked_mut() };
            *current = value;
        } else {
            self.cell.write(value);
            self.engaged = true;
        }
    }

    /// Copies `value` into the slot.
    ///
    /// If the slot is engaged, the existing value is updated with [`Clone::clone_from`], so
    /// no drop or fresh construction takes place. If the slot is empty, a single
    /// [`Clone::clone`] is written into the cell.
    pub fn assign_ref(&mut self, value: &T)
    where
        T: Clone,
    {
        if self.engaged {
            // SAFETY: We just checked that the slot is engaged.
            let current = unsafe { self.get_unchecked_mut() };
            current.clone_from(value);
        } else {
            self.cell.write(value.clone());
            self.engaged = true;
        }
    }

    /// Makes this slot mirror the occupancy and value of `other`, copying the value.
    ///
    /// | self | other | effect |
    /// |---|---|---|
    /// | engaged | engaged | [`Clone::clone_from`] onto the existing value |
    /// | empty | engaged | [`Clone::clone`] into the cell |
    /// | engaged | empty | [`reset()`][Self::reset] |
    /// | empty | empty | nothing |
    ///
    /// Assigning a slot to itself cannot be expressed because `other` is borrowed while
    /// `self` is borrowed exclusively, so the value being read is never dropped first.
    ///
    /// ```compile_fail,E0502
    /// use inline_slot::Slot;
    ///
    /// let mut slot = Slot::new(String::from("SU-274"));
    /// slot.assign_from(&slot);
    /// ```
    ///
    /// The same holds for [`Clone::clone_from`], which forwards here:
    ///
    /// ```compile_fail,E0502
    /// use inline_slot::Slot;
    ///
    /// let mut slot = Slot::new(String::from("SU-274"));
    /// slot.clone_from(&slot);
    /// ```
    pub fn assign_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        match other.value() {
            Ok(value) => self.assign_ref(value),
            Err(BadAccess) => self.reset(),
        }
    }

    /// Makes this slot mirror the occupancy and value of `other`, consuming `other`.
    ///
    /// | self | other | effect |
    /// |---|---|---|
    /// | engaged | engaged | other's value is assigned over the existing value |
    /// | empty | engaged | other's value is moved into the cell |
    /// | engaged | empty | [`reset()`][Self::reset] |
    /// | empty | empty | nothing |
    pub fn assign_slot(&mut self, other: Self) {
        match other.into_value() {
            Ok(value) => self.assign(value),
            Err(BadAccess) => self.reset(),
        }
    }

    /// Constructs a new value in the slot from `args` via [`From`].
    ///
    /// If the slot is engaged, the old value is dropped before the new one is constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use inline_slot::Slot;
    ///
    /// let mut slot = Slot::<String>::new("old".to_string());
    ///
    /// slot.emplace("new");
    ///
    /// assert_eq!(slot.value().map(String::as_str), Ok("new"));
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Constructs a new value in the slot by calling `f`.
    ///
    /// If the slot is engaged, the old value is dropped before `f` is called. If `f` panics,
    /// the slot is left empty.
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();

        let value = self.cell.write(f());
        self.engaged = true;

        value
    }

    /// Drops the value, if there is one, leaving the slot empty.
    pub fn reset(&mut self) {
        if self.engaged {
            // Cleared first so a panic in the drop logic cannot lead to a second drop.
            self.engaged = false;

            // SAFETY: The slot was engaged, so the cell holds a live value that
            // nothing can reach anymore now that the flag is cleared.
            unsafe {
                self.cell.assume_init_drop();
            }
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Slot<T> {
    fn clone(&self) -> Self {
        match self.value() {
            Ok(value) => Self::from_ref(value),
            Err(BadAccess) => Self::empty(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

/// Panics with [`BadAccess`] if the slot is empty.
impl<T> Deref for Slot<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self.value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Panics with [`BadAccess`] if the slot is empty.
impl<T> DerefMut for Slot<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.value_mut() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(value) => f.debug_tuple("Slot").field(value).finish(),
            Err(BadAccess) => f.write_str("Slot(<empty>)"),
        }
    }
}
