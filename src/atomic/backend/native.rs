/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Native Backend
//!
//! Pass-through to the native atomic type with the requested tag.
//!
//! Tags that are meaningless for an operation class are legalised upwards:
//! a load asked for `Release` or `AcqRel` and a store asked for `Consume`,
//! `Acquire` or `AcqRel` run as `SeqCst`. `Consume` always runs as
//! `Acquire`. The failure order of a compare-exchange is derived from the
//! single requested order.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::backend::AtomicBackend;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::primitive::Primitive;

/// Backend that forwards the requested memory order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NativeBackend;

impl AtomicBackend for NativeBackend {
    const NAME: &'static str = "native";

    #[inline]
    fn effective_order(order: MemoryOrder) -> MemoryOrder {
        match order {
            MemoryOrder::Consume => MemoryOrder::Acquire,
            other => other,
        }
    }

    #[inline]
    fn load<P: Primitive>(storage: &P::Storage, order: MemoryOrder) -> P {
        P::atomic_load(storage, order.for_load())
    }

    #[inline]
    fn store<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) {
        P::atomic_store(storage, value, order.for_store());
    }

    #[inline]
    fn exchange<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        P::atomic_swap(storage, value, order.for_rmw())
    }

    #[inline]
    fn compare_exchange_weak<P: Primitive>(
        storage: &P::Storage,
        current: P,
        new: P,
        order: MemoryOrder,
    ) -> Result<P, P> {
        P::atomic_compare_exchange_weak(
            storage,
            current,
            new,
            order.for_rmw(),
            order.for_cas_failure(),
        )
    }

    #[inline]
    fn fetch_add<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        P::atomic_fetch_add(storage, value, order.for_rmw())
    }

    #[inline]
    fn fetch_sub<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        P::atomic_fetch_sub(storage, value, order.for_rmw())
    }

    #[inline]
    fn fetch_and<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        P::atomic_fetch_and(storage, value, order.for_rmw())
    }

    #[inline]
    fn fetch_or<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        P::atomic_fetch_or(storage, value, order.for_rmw())
    }

    #[inline]
    fn fetch_xor<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        P::atomic_fetch_xor(storage, value, order.for_rmw())
    }
}
