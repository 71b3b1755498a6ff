/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Order Tags
//!
//! Defines the closed set of memory-order levels accepted by every cell
//! operation.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::sync::Ordering;

/// Memory-order level requested for an atomic operation.
///
/// A tag expresses intent only. A backend may run an operation with a
/// stronger ordering than requested, never a weaker one. The intrinsic
/// backend runs everything as [`MemoryOrder::SeqCst`]; the native backend
/// forwards the tag to the platform atomic.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::{AtomicI32, MemoryOrder};
///
/// let atomic = AtomicI32::new(1);
/// atomic.store_explicit(2, MemoryOrder::Release);
/// assert_eq!(atomic.load_explicit(MemoryOrder::Acquire), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemoryOrder {
    /// Atomicity only, no ordering with other memory operations.
    Relaxed,
    /// Data-dependent acquire. Always run as [`MemoryOrder::Acquire`].
    Consume,
    /// Later reads and writes cannot move before this operation.
    Acquire,
    /// Earlier reads and writes cannot move after this operation.
    Release,
    /// Both [`MemoryOrder::Acquire`] and [`MemoryOrder::Release`].
    AcqRel,
    /// Acquire/release plus a single total order over all `SeqCst`
    /// operations.
    #[default]
    SeqCst,
}

impl MemoryOrder {
    /// All six tags, weakest first.
    pub const ALL: [MemoryOrder; 6] = [
        MemoryOrder::Relaxed,
        MemoryOrder::Consume,
        MemoryOrder::Acquire,
        MemoryOrder::Release,
        MemoryOrder::AcqRel,
        MemoryOrder::SeqCst,
    ];

    /// Returns the C-family name of this tag, e.g. `memory_order_seq_cst`.
    pub const fn name(self) -> &'static str {
        match self {
            MemoryOrder::Relaxed => "memory_order_relaxed",
            MemoryOrder::Consume => "memory_order_consume",
            MemoryOrder::Acquire => "memory_order_acquire",
            MemoryOrder::Release => "memory_order_release",
            MemoryOrder::AcqRel => "memory_order_acq_rel",
            MemoryOrder::SeqCst => "memory_order_seq_cst",
        }
    }

    /// Ordering for a read-modify-write operation.
    #[inline]
    pub(crate) fn for_rmw(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering for a pure load.
    ///
    /// A release component has no meaning on a load, so `Release` and
    /// `AcqRel` fall back to `SeqCst`.
    #[inline]
    pub(crate) fn for_load(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release | MemoryOrder::AcqRel | MemoryOrder::SeqCst => {
                Ordering::SeqCst
            }
        }
    }

    /// Ordering for a pure store.
    ///
    /// An acquire component has no meaning on a store, so `Consume`,
    /// `Acquire` and `AcqRel` fall back to `SeqCst`.
    #[inline]
    pub(crate) fn for_store(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::Consume
            | MemoryOrder::Acquire
            | MemoryOrder::AcqRel
            | MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Failure ordering of a compare-exchange derived from its single
    /// requested order.
    #[inline]
    pub(crate) fn for_cas_failure(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Release => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire | MemoryOrder::AcqRel => {
                Ordering::Acquire
            }
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }
}

impl From<MemoryOrder> for Ordering {
    #[inline]
    fn from(order: MemoryOrder) -> Self {
        order.for_rmw()
    }
}

impl From<Ordering> for MemoryOrder {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Relaxed => MemoryOrder::Relaxed,
            Ordering::Acquire => MemoryOrder::Acquire,
            Ordering::Release => MemoryOrder::Release,
            Ordering::AcqRel => MemoryOrder::AcqRel,
            // `Ordering` is non-exhaustive.
            _ => MemoryOrder::SeqCst,
        }
    }
}

impl fmt::Display for MemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
