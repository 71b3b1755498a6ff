/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cell
//!
//! A single generic cell covering scalar, pointer and boolean values. The
//! operation groups available on a cell follow from the value-shape traits
//! its element type implements.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;

use crate::atomic::backend::{
    AtomicBackend,
    DefaultBackend,
};
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::primitive::{
    bits_eq,
    Primitive,
};
use crate::atomic::sealed::Sealed;
use crate::atomic::traits::{
    AtomicArithmetic,
    AtomicBitwise,
    AtomicValue,
};

type Storage<T> = <<T as AtomicValue>::Repr as Primitive>::Storage;

/// Atomic cell over a value of type `T`.
///
/// Every read and write of the stored representation goes through the
/// backend `B`. All operations take `&self` and may be called from any
/// number of threads without external locking.
///
/// # Operation Groups
///
/// - **All values**: `load`, `store`, `exchange`, `assign`,
///   `compare_exchange_weak`, `compare_exchange_strong`, `is_lock_free`.
/// - **Integers and pointers** ([`AtomicArithmetic`]): `fetch_add`,
///   `fetch_sub`, pre/post increment and decrement, `add_assign`,
///   `sub_assign`. Pointer deltas are element counts.
/// - **Integers and booleans** ([`AtomicBitwise`]): `fetch_and`,
///   `fetch_or`, `fetch_xor`, `and_assign`, `or_assign`, `xor_assign`.
///
/// # Memory Ordering
///
/// Every operation has a form without an ordering argument, which requests
/// [`MemoryOrder::SeqCst`], and an `_explicit` form taking a
/// [`MemoryOrder`]. The backend may run a stronger ordering than requested:
/// [`IntrinsicBackend`](crate::IntrinsicBackend) runs everything as
/// `SeqCst`.
///
/// # Copying
///
/// A cell is neither `Clone` nor `Copy`. A new cell can only be made from a
/// plain value, never from another cell.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicI32;
///
/// let atomic = AtomicI32::new(1);
/// assert_eq!(atomic.fetch_add(2), 1);
/// assert_eq!(atomic.load(), 3);
///
/// let mut expected = 3;
/// assert!(atomic.compare_exchange_weak(&mut expected, 5));
/// assert_eq!(atomic.load(), 5);
///
/// let mut stale = 3;
/// assert!(!atomic.compare_exchange_weak(&mut stale, 7));
/// assert_eq!(stale, 5);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicCell<T: AtomicValue, B: AtomicBackend = DefaultBackend> {
    storage: Storage<T>,
    _marker: PhantomData<(T, B)>,
}

impl<T: AtomicValue, B: AtomicBackend> AtomicCell<T, B> {
    /// Always `true`: a cell never falls back to a lock.
    pub const IS_ALWAYS_LOCK_FREE: bool = true;

    /// Creates a new cell.
    ///
    /// Initialization is not an atomic operation; no other thread can see
    /// the cell before it is shared.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicU8;
    ///
    /// let atomic = AtomicU8::new(42);
    /// assert_eq!(atomic.load(), 42);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            storage: <T::Repr as Primitive>::new_storage(value.into_repr()),
            _marker: PhantomData,
        }
    }

    /// Returns whether operations on this cell are lock-free.
    ///
    /// Always `true`. A target without the needed primitive fails to build
    /// instead of degrading to a blocking implementation.
    #[inline]
    pub fn is_lock_free(&self) -> bool {
        Self::IS_ALWAYS_LOCK_FREE
    }

    /// Reports the ordering the backend of this cell actually applies when
    /// `order` is requested for a read-modify-write operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::{AtomicCell, IntrinsicBackend, MemoryOrder};
    ///
    /// type Cell = AtomicCell<u32, IntrinsicBackend>;
    /// assert_eq!(Cell::effective_order(MemoryOrder::Relaxed), MemoryOrder::SeqCst);
    /// ```
    #[inline]
    pub fn effective_order(order: MemoryOrder) -> MemoryOrder {
        B::effective_order(order)
    }

    /// Loads the current value with `SeqCst` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self) -> T {
        self.load_explicit(MemoryOrder::SeqCst)
    }

    /// Loads the current value.
    ///
    /// # Parameters
    ///
    /// * `order` - The requested memory order.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load_explicit(&self, order: MemoryOrder) -> T {
        T::from_repr(B::load::<T::Repr>(&self.storage, order))
    }

    /// Reads the value, as a conversion from the cell to a plain value.
    ///
    /// Same as [`load`](Self::load).
    #[inline]
    pub fn get(&self) -> T {
        self.load()
    }

    /// Stores a value with `SeqCst` ordering, discarding the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn store(&self, value: T) {
        self.store_explicit(value, MemoryOrder::SeqCst);
    }

    /// Stores a value, discarding the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    /// * `order` - The requested memory order.
    #[inline]
    pub fn store_explicit(&self, value: T, order: MemoryOrder) {
        B::store::<T::Repr>(&self.storage, value.into_repr(), order);
    }

    /// Assigns a plain value to the cell.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The assigned value, not the previous one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicI16;
    ///
    /// let atomic = AtomicI16::new(1);
    /// assert_eq!(atomic.assign(9), 9);
    /// assert_eq!(atomic.load(), 9);
    /// ```
    #[inline]
    pub fn assign(&self, value: T) -> T {
        self.store(value);
        value
    }

    /// Swaps in a new value with `SeqCst` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The value held immediately before the swap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(!flag.exchange(true));
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn exchange(&self, value: T) -> T {
        self.exchange_explicit(value, MemoryOrder::SeqCst)
    }

    /// Swaps in a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    /// * `order` - The requested memory order.
    ///
    /// # Returns
    ///
    /// The value held immediately before the swap.
    #[inline]
    pub fn exchange_explicit(&self, value: T, order: MemoryOrder) -> T {
        T::from_repr(B::exchange::<T::Repr>(&self.storage, value.into_repr(), order))
    }

    /// Single compare-and-swap attempt with `SeqCst` ordering.
    ///
    /// If the cell holds `*expected`, replaces it with `desired` and returns
    /// `true`. Otherwise writes the value actually found into `expected` and
    /// returns `false`.
    ///
    /// May fail spuriously, i.e. return `false` although the cell held
    /// `*expected`. The intrinsic backend never does.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the cell is expected to hold; receives the
    ///   observed value on failure.
    /// * `desired` - The value to store on success.
    ///
    /// # Returns
    ///
    /// `true` if the swap happened.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicU32;
    ///
    /// let atomic = AtomicU32::new(10);
    /// let mut current = atomic.load();
    /// loop {
    ///     let doubled = current * 2;
    ///     if atomic.compare_exchange_weak(&mut current, doubled) {
    ///         break;
    ///     }
    /// }
    /// assert_eq!(atomic.load(), 20);
    /// ```
    #[inline]
    pub fn compare_exchange_weak(&self, expected: &mut T, desired: T) -> bool {
        self.compare_exchange_weak_explicit(expected, desired, MemoryOrder::SeqCst)
    }

    /// Single compare-and-swap attempt.
    ///
    /// See [`compare_exchange_weak`](Self::compare_exchange_weak).
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected value; receives the observed value on
    ///   failure.
    /// * `desired` - The value to store on success.
    /// * `order` - The requested memory order, for success and failure.
    #[inline]
    pub fn compare_exchange_weak_explicit(
        &self,
        expected: &mut T,
        desired: T,
        order: MemoryOrder,
    ) -> bool {
        match B::compare_exchange_weak::<T::Repr>(
            &self.storage,
            expected.into_repr(),
            desired.into_repr(),
            order,
        ) {
            Ok(_) => true,
            Err(actual) => {
                *expected = T::from_repr(actual);
                false
            }
        }
    }

    /// Single compare-and-swap attempt with separate success and failure
    /// orders.
    ///
    /// The failure order is accepted for compatibility and ignored; this
    /// behaves exactly like
    /// [`compare_exchange_weak_explicit`](Self::compare_exchange_weak_explicit)
    /// with `success`.
    #[inline]
    pub fn compare_exchange_weak_orders(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        _failure: MemoryOrder,
    ) -> bool {
        self.compare_exchange_weak_explicit(expected, desired, success)
    }

    /// Compare-and-swap with `SeqCst` ordering that never fails spuriously.
    ///
    /// Same contract as
    /// [`compare_exchange_weak`](Self::compare_exchange_weak), except that
    /// `false` is only returned when the cell held a value whose bit pattern
    /// differs from `*expected`.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected value; receives the observed value on
    ///   failure.
    /// * `desired` - The value to store on success.
    ///
    /// # Returns
    ///
    /// `true` if the swap happened.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicI64;
    ///
    /// let atomic = AtomicI64::new(1);
    /// let mut expected = 2;
    /// assert!(!atomic.compare_exchange_strong(&mut expected, 3));
    /// assert_eq!(expected, 1);
    /// assert!(atomic.compare_exchange_strong(&mut expected, 3));
    /// assert_eq!(atomic.load(), 3);
    /// ```
    #[inline]
    pub fn compare_exchange_strong(&self, expected: &mut T, desired: T) -> bool {
        self.compare_exchange_strong_explicit(expected, desired, MemoryOrder::SeqCst)
    }

    /// Compare-and-swap that never fails spuriously.
    ///
    /// Retries the weak primitive for as long as it fails while observing
    /// the same bit pattern as `*expected`. The retry loop has no backoff
    /// and, under pathological contention, no iteration bound; on a backend
    /// without spurious failure it runs exactly once.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected value; receives the observed value on
    ///   failure.
    /// * `desired` - The value to store on success.
    /// * `order` - The requested memory order, for success and failure.
    pub fn compare_exchange_strong_explicit(
        &self,
        expected: &mut T,
        desired: T,
        order: MemoryOrder,
    ) -> bool {
        let wanted = expected.into_repr();
        let new = desired.into_repr();
        let mut current = wanted;
        loop {
            match B::compare_exchange_weak::<T::Repr>(&self.storage, current, new, order) {
                Ok(_) => return true,
                Err(actual) => {
                    if !bits_eq(&actual, &wanted) {
                        *expected = T::from_repr(actual);
                        return false;
                    }
                    current = actual;
                }
            }
        }
    }

    /// Compare-and-swap that never fails spuriously, with separate success
    /// and failure orders.
    ///
    /// The failure order is accepted for compatibility and ignored.
    #[inline]
    pub fn compare_exchange_strong_orders(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        _failure: MemoryOrder,
    ) -> bool {
        self.compare_exchange_strong_explicit(expected, desired, success)
    }

    /// Consumes the cell and returns the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        // Ownership rules out concurrent access; a relaxed load suffices.
        self.load_explicit(MemoryOrder::Relaxed)
    }
}

impl<T: AtomicArithmetic, B: AtomicBackend> AtomicCell<T, B> {
    /// Adds a delta with `SeqCst` ordering.
    ///
    /// For pointer cells `delta` is an element count, scaled by the pointee
    /// size.
    ///
    /// # Parameters
    ///
    /// * `delta` - The amount to add, wrapping on overflow.
    ///
    /// # Returns
    ///
    /// The value immediately before the add.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicU64;
    ///
    /// let atomic = AtomicU64::new(1);
    /// assert_eq!(atomic.fetch_add(2), 1);
    /// assert_eq!(atomic.load(), 3);
    /// ```
    #[inline]
    pub fn fetch_add(&self, delta: T::Delta) -> T {
        self.fetch_add_explicit(delta, MemoryOrder::SeqCst)
    }

    /// Adds a delta.
    ///
    /// # Parameters
    ///
    /// * `delta` - The amount to add, wrapping on overflow.
    /// * `order` - The requested memory order.
    ///
    /// # Returns
    ///
    /// The value immediately before the add.
    #[inline]
    pub fn fetch_add_explicit(&self, delta: T::Delta, order: MemoryOrder) -> T {
        T::from_repr(B::fetch_add::<T::Repr>(&self.storage, T::scale_delta(delta), order))
    }

    /// Subtracts a delta with `SeqCst` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The amount to subtract, wrapping on overflow.
    ///
    /// # Returns
    ///
    /// The value immediately before the subtraction.
    #[inline]
    pub fn fetch_sub(&self, delta: T::Delta) -> T {
        self.fetch_sub_explicit(delta, MemoryOrder::SeqCst)
    }

    /// Subtracts a delta.
    ///
    /// # Parameters
    ///
    /// * `delta` - The amount to subtract, wrapping on overflow.
    /// * `order` - The requested memory order.
    ///
    /// # Returns
    ///
    /// The value immediately before the subtraction.
    #[inline]
    pub fn fetch_sub_explicit(&self, delta: T::Delta, order: MemoryOrder) -> T {
        T::from_repr(B::fetch_sub::<T::Repr>(&self.storage, T::scale_delta(delta), order))
    }

    /// Adds a delta, returning the new value (`cell += delta`).
    #[inline]
    pub fn add_assign(&self, delta: T::Delta) -> T {
        let addend = T::scale_delta(delta);
        let previous = B::fetch_add::<T::Repr>(&self.storage, addend, MemoryOrder::SeqCst);
        T::from_repr(previous.wrapping_add(addend))
    }

    /// Subtracts a delta, returning the new value (`cell -= delta`).
    #[inline]
    pub fn sub_assign(&self, delta: T::Delta) -> T {
        let subtrahend = T::scale_delta(delta);
        let previous = B::fetch_sub::<T::Repr>(&self.storage, subtrahend, MemoryOrder::SeqCst);
        T::from_repr(previous.wrapping_sub(subtrahend))
    }

    /// Increments by one, returning the new value (`++cell`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicPtr;
    ///
    /// let mut data = [1_i32, 2, 3, 4];
    /// let cell = AtomicPtr::new(data.as_mut_ptr());
    /// cell.pre_increment();
    /// assert_eq!(cell.pre_increment(), data.as_mut_ptr().wrapping_add(2));
    /// ```
    #[inline]
    pub fn pre_increment(&self) -> T {
        self.add_assign(T::UNIT)
    }

    /// Increments by one, returning the previous value (`cell++`).
    #[inline]
    pub fn post_increment(&self) -> T {
        self.fetch_add(T::UNIT)
    }

    /// Decrements by one, returning the new value (`--cell`).
    #[inline]
    pub fn pre_decrement(&self) -> T {
        self.sub_assign(T::UNIT)
    }

    /// Decrements by one, returning the previous value (`cell--`).
    #[inline]
    pub fn post_decrement(&self) -> T {
        self.fetch_sub(T::UNIT)
    }
}

impl<T: AtomicBitwise, B: AtomicBackend> AtomicCell<T, B> {
    /// Bitwise AND with `SeqCst` ordering, returning the previous value.
    ///
    /// For boolean cells this is logical AND.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicU8;
    ///
    /// let atomic = AtomicU8::new(0b1111);
    /// assert_eq!(atomic.fetch_and(0b1100), 0b1111);
    /// assert_eq!(atomic.load(), 0b1100);
    /// ```
    #[inline]
    pub fn fetch_and(&self, value: T) -> T {
        self.fetch_and_explicit(value, MemoryOrder::SeqCst)
    }

    /// Bitwise AND, returning the previous value.
    #[inline]
    pub fn fetch_and_explicit(&self, value: T, order: MemoryOrder) -> T {
        T::from_repr(B::fetch_and::<T::Repr>(&self.storage, value.into_repr(), order))
    }

    /// Bitwise OR with `SeqCst` ordering, returning the previous value.
    #[inline]
    pub fn fetch_or(&self, value: T) -> T {
        self.fetch_or_explicit(value, MemoryOrder::SeqCst)
    }

    /// Bitwise OR, returning the previous value.
    #[inline]
    pub fn fetch_or_explicit(&self, value: T, order: MemoryOrder) -> T {
        T::from_repr(B::fetch_or::<T::Repr>(&self.storage, value.into_repr(), order))
    }

    /// Bitwise XOR with `SeqCst` ordering, returning the previous value.
    #[inline]
    pub fn fetch_xor(&self, value: T) -> T {
        self.fetch_xor_explicit(value, MemoryOrder::SeqCst)
    }

    /// Bitwise XOR, returning the previous value.
    #[inline]
    pub fn fetch_xor_explicit(&self, value: T, order: MemoryOrder) -> T {
        T::from_repr(B::fetch_xor::<T::Repr>(&self.storage, value.into_repr(), order))
    }

    /// Bitwise AND, returning the new value (`cell &= value`).
    #[inline]
    pub fn and_assign(&self, value: T) -> T {
        let operand = value.into_repr();
        let previous = B::fetch_and::<T::Repr>(&self.storage, operand, MemoryOrder::SeqCst);
        T::from_repr(previous.bit_and(operand))
    }

    /// Bitwise OR, returning the new value (`cell |= value`).
    #[inline]
    pub fn or_assign(&self, value: T) -> T {
        let operand = value.into_repr();
        let previous = B::fetch_or::<T::Repr>(&self.storage, operand, MemoryOrder::SeqCst);
        T::from_repr(previous.bit_or(operand))
    }

    /// Bitwise XOR, returning the new value (`cell ^= value`).
    #[inline]
    pub fn xor_assign(&self, value: T) -> T {
        let operand = value.into_repr();
        let previous = B::fetch_xor::<T::Repr>(&self.storage, operand, MemoryOrder::SeqCst);
        T::from_repr(previous.bit_xor(operand))
    }
}

// SAFETY: the only state is the native atomic storage, and every access to
// it is atomic. Values of `T` are copied in and out and never shared by
// reference, so raw-pointer values are as safe to share as in `AtomicPtr`.
// Any `T` is rebuilt from a plain integer by `from_repr`; a type that is
// bound to one thread can only be rebuilt that way by unsafe code in its
// own `AtomicValue` impl, which takes on the cross-thread obligation.
unsafe impl<T: AtomicValue, B: AtomicBackend> Send for AtomicCell<T, B> {}
unsafe impl<T: AtomicValue, B: AtomicBackend> Sync for AtomicCell<T, B> {}

// Only the built-in shapes: a user `from_repr` need not accept zero.
impl<T: AtomicValue + Sealed, B: AtomicBackend> Default for AtomicCell<T, B> {
    /// Zero, null or `false`, depending on the value shape.
    #[inline]
    fn default() -> Self {
        Self::new(T::from_repr(<T::Repr as Primitive>::ZERO))
    }
}

impl<T: AtomicValue, B: AtomicBackend> From<T> for AtomicCell<T, B> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: AtomicValue + fmt::Debug, B: AtomicBackend> fmt::Debug for AtomicCell<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell")
            .field("value", &self.load())
            .field("backend", &B::NAME)
            .finish()
    }
}

impl<T: AtomicValue + fmt::Display, B: AtomicBackend> fmt::Display for AtomicCell<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
