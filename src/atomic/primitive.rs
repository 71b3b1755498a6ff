/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Primitive Representations
//!
//! Binds each supported bit width to its native atomic storage type and
//! exposes the raw operations the backends are built from.
//!
//! Only widths the target can operate on atomically are implemented. There
//! is deliberately no 128-bit representation: a cell over a double-width
//! value does not compile.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use bytemuck::Pod;

use crate::atomic::sealed::Sealed;
use crate::atomic::sync::Ordering;

/// An integer representation with a native atomic storage type.
///
/// This trait is sealed. It is implemented for `u8`, `u16`, `u32`, `u64`,
/// `usize` and their signed counterparts, each only when the target has
/// atomics of that width.
///
/// The `atomic_*` functions are thin forwards to the storage type and take
/// the platform ordering as is. Backends decide which ordering to pass.
pub trait Primitive: Copy + Eq + fmt::Debug + Pod + Send + Sync + 'static + Sealed {
    /// The native atomic type holding this representation.
    type Storage: Send + Sync;

    /// The all-zero bit pattern.
    const ZERO: Self;

    /// Creates storage holding `value`.
    fn new_storage(value: Self) -> Self::Storage;

    /// Plain atomic load.
    fn atomic_load(storage: &Self::Storage, ordering: Ordering) -> Self;

    /// Plain atomic store.
    fn atomic_store(storage: &Self::Storage, value: Self, ordering: Ordering);

    /// Atomic swap, returning the previous value.
    fn atomic_swap(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self;

    /// Single compare-and-swap that never fails spuriously.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` on failure.
    fn atomic_compare_exchange(
        storage: &Self::Storage,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;

    /// Single compare-and-swap that may fail spuriously.
    fn atomic_compare_exchange_weak(
        storage: &Self::Storage,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;

    /// Wrapping fetch-and-add.
    fn atomic_fetch_add(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self;

    /// Wrapping fetch-and-subtract.
    fn atomic_fetch_sub(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self;

    /// Fetch-and-AND.
    fn atomic_fetch_and(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self;

    /// Fetch-and-OR.
    fn atomic_fetch_or(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self;

    /// Fetch-and-XOR.
    fn atomic_fetch_xor(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self;

    /// Non-atomic wrapping addition, used to derive post-images.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Non-atomic wrapping subtraction, used to derive post-images.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Non-atomic bitwise AND.
    fn bit_and(self, rhs: Self) -> Self;

    /// Non-atomic bitwise OR.
    fn bit_or(self, rhs: Self) -> Self;

    /// Non-atomic bitwise XOR.
    fn bit_xor(self, rhs: Self) -> Self;
}

/// Compares two representations byte by byte.
///
/// This is the equality used to tell a spurious weak-CAS failure from a
/// real one. It never consults a semantic `==` of the stored type.
#[inline]
pub fn bits_eq<P: Primitive>(a: &P, b: &P) -> bool {
    bytemuck::bytes_of(a) == bytemuck::bytes_of(b)
}

/// Macro to implement [`Primitive`] for one integer width.
///
/// # Parameters
///
/// * `$value_type` - The integer type (e.g., `u32`)
/// * `$storage` - The atomic storage type from the sync shim (e.g.,
///   `AtomicU32`)
macro_rules! impl_primitive {
    ($value_type:ty, $storage:ident) => {
        impl Sealed for $value_type {}

        impl Primitive for $value_type {
            type Storage = crate::atomic::sync::$storage;

            const ZERO: Self = 0;

            #[inline]
            fn new_storage(value: Self) -> Self::Storage {
                <Self::Storage>::new(value)
            }

            #[inline]
            fn atomic_load(storage: &Self::Storage, ordering: Ordering) -> Self {
                storage.load(ordering)
            }

            #[inline]
            fn atomic_store(storage: &Self::Storage, value: Self, ordering: Ordering) {
                storage.store(value, ordering);
            }

            #[inline]
            fn atomic_swap(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self {
                storage.swap(value, ordering)
            }

            #[inline]
            fn atomic_compare_exchange(
                storage: &Self::Storage,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                storage.compare_exchange(current, new, success, failure)
            }

            #[inline]
            fn atomic_compare_exchange_weak(
                storage: &Self::Storage,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                storage.compare_exchange_weak(current, new, success, failure)
            }

            #[inline]
            fn atomic_fetch_add(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self {
                storage.fetch_add(value, ordering)
            }

            #[inline]
            fn atomic_fetch_sub(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self {
                storage.fetch_sub(value, ordering)
            }

            #[inline]
            fn atomic_fetch_and(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self {
                storage.fetch_and(value, ordering)
            }

            #[inline]
            fn atomic_fetch_or(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self {
                storage.fetch_or(value, ordering)
            }

            #[inline]
            fn atomic_fetch_xor(storage: &Self::Storage, value: Self, ordering: Ordering) -> Self {
                storage.fetch_xor(value, ordering)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$value_type>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$value_type>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn bit_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }
        }
    };
}

#[cfg(target_has_atomic = "8")]
impl_primitive!(u8, AtomicU8);
#[cfg(target_has_atomic = "8")]
impl_primitive!(i8, AtomicI8);
#[cfg(target_has_atomic = "16")]
impl_primitive!(u16, AtomicU16);
#[cfg(target_has_atomic = "16")]
impl_primitive!(i16, AtomicI16);
#[cfg(target_has_atomic = "32")]
impl_primitive!(u32, AtomicU32);
#[cfg(target_has_atomic = "32")]
impl_primitive!(i32, AtomicI32);
#[cfg(target_has_atomic = "64")]
impl_primitive!(u64, AtomicU64);
#[cfg(target_has_atomic = "64")]
impl_primitive!(i64, AtomicI64);
#[cfg(target_has_atomic = "ptr")]
impl_primitive!(usize, AtomicUsize);
#[cfg(target_has_atomic = "ptr")]
impl_primitive!(isize, AtomicIsize);
