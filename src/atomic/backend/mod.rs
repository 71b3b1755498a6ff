/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Backends
//!
//! A backend turns a requested [`MemoryOrder`] and a primitive
//! representation into the actual machine operation. Two backends ship with
//! the crate and implement the same value semantics:
//!
//! - [`IntrinsicBackend`] builds every operation from full-barrier
//!   compare-and-swap and read-modify-write primitives and runs everything
//!   as `SeqCst`, whatever tag is requested.
//! - [`NativeBackend`] forwards the requested tag to the native atomic type.
//!
//! The backend is a type parameter of the cell, so the choice is made at
//! build time and every call site is monomorphic. [`DefaultBackend`] is
//! selected by the `intrinsic-backend` cargo feature.
//!
//! # Author
//!
//! Haixing Hu

mod intrinsic;
mod native;

pub use intrinsic::IntrinsicBackend;
pub use native::NativeBackend;

use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::primitive::Primitive;

/// The primitive operation set a cell is built on.
///
/// Implementations are zero-sized marker types; every function is an
/// associated function over a primitive representation. A backend may run
/// an operation with a stronger ordering than requested, never a weaker one.
///
/// Strong compare-exchange is not part of this trait: the cell derives it
/// from [`AtomicBackend::compare_exchange_weak`] for every backend.
pub trait AtomicBackend: 'static {
    /// Human-readable backend name.
    const NAME: &'static str;

    /// Reports the ordering a read-modify-write operation actually runs
    /// with when `order` is requested.
    fn effective_order(order: MemoryOrder) -> MemoryOrder;

    /// Atomically reads the representation.
    fn load<P: Primitive>(storage: &P::Storage, order: MemoryOrder) -> P;

    /// Atomically replaces the representation.
    fn store<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder);

    /// Atomically replaces the representation, returning the previous one.
    fn exchange<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P;

    /// One compare-and-swap attempt.
    ///
    /// Returns `Ok(previous)` when the stored value equalled `current` and
    /// was replaced by `new`, or `Err(actual)` otherwise. May fail
    /// spuriously, in which case `actual == current`.
    fn compare_exchange_weak<P: Primitive>(
        storage: &P::Storage,
        current: P,
        new: P,
        order: MemoryOrder,
    ) -> Result<P, P>;

    /// Wrapping add, returning the previous value.
    fn fetch_add<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P;

    /// Wrapping subtract, returning the previous value.
    fn fetch_sub<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P;

    /// Bitwise AND, returning the previous value.
    fn fetch_and<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P;

    /// Bitwise OR, returning the previous value.
    fn fetch_or<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P;

    /// Bitwise XOR, returning the previous value.
    fn fetch_xor<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P;
}

/// Backend used by the cell aliases.
#[cfg(feature = "intrinsic-backend")]
pub type DefaultBackend = IntrinsicBackend;

/// Backend used by the cell aliases.
#[cfg(not(feature = "intrinsic-backend"))]
pub type DefaultBackend = NativeBackend;
