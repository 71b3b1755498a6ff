/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Intrinsic Backend
//!
//! Every operation is a single full-barrier primitive:
//!
//! | operation     | primitive                          |
//! |---------------|------------------------------------|
//! | `load`        | fetch-and-add of zero              |
//! | `store`       | swap, previous value discarded     |
//! | `exchange`    | swap                               |
//! | weak CAS      | value-returning compare-and-swap   |
//! | `fetch_*`     | hardware read-modify-write         |
//!
//! The requested tag is accepted and ignored.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::backend::AtomicBackend;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::primitive::Primitive;
use crate::atomic::sync::Ordering;

const FULL: Ordering = Ordering::SeqCst;

/// Backend that runs every operation as `SeqCst`.
///
/// Its compare-and-swap never fails spuriously, so strong compare-exchange
/// on this backend completes in one attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntrinsicBackend;

impl AtomicBackend for IntrinsicBackend {
    const NAME: &'static str = "intrinsic";

    #[inline]
    fn effective_order(_order: MemoryOrder) -> MemoryOrder {
        MemoryOrder::SeqCst
    }

    #[inline]
    fn load<P: Primitive>(storage: &P::Storage, _order: MemoryOrder) -> P {
        // A plain read of a multi-byte value is not atomic on every target.
        P::atomic_fetch_add(storage, P::ZERO, FULL)
    }

    #[inline]
    fn store<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) {
        P::atomic_swap(storage, value, FULL);
    }

    #[inline]
    fn exchange<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) -> P {
        P::atomic_swap(storage, value, FULL)
    }

    #[inline]
    fn compare_exchange_weak<P: Primitive>(
        storage: &P::Storage,
        current: P,
        new: P,
        _order: MemoryOrder,
    ) -> Result<P, P> {
        P::atomic_compare_exchange(storage, current, new, FULL, FULL)
    }

    #[inline]
    fn fetch_add<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) -> P {
        P::atomic_fetch_add(storage, value, FULL)
    }

    #[inline]
    fn fetch_sub<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) -> P {
        P::atomic_fetch_sub(storage, value, FULL)
    }

    #[inline]
    fn fetch_and<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) -> P {
        P::atomic_fetch_and(storage, value, FULL)
    }

    #[inline]
    fn fetch_or<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) -> P {
        P::atomic_fetch_or(storage, value, FULL)
    }

    #[inline]
    fn fetch_xor<P: Primitive>(storage: &P::Storage, value: P, _order: MemoryOrder) -> P {
        P::atomic_fetch_xor(storage, value, FULL)
    }
}
