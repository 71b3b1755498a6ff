/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cells
//!
//! Provides a single atomic cell type over integers, pointers and booleans,
//! with the full C-family atomic operation set and per-call memory-order
//! tags, running on one of two interchangeable backends.
//!
//! # Features
//!
//! - `load`/`store`/`exchange`, weak and strong compare-exchange
//! - Hardware read-modify-write `fetch_*` operations
//! - Pointer arithmetic scaled by the pointee size
//! - Build-time backend selection with identical observable values
//!
//! # Author
//!
//! Haixing Hu

mod sealed {
    /// Restricts the representation and operation-group traits to the
    /// shapes this crate supports.
    pub trait Sealed {}
}

mod backend;
#[cfg(target_has_atomic = "8")]
mod boolean;
mod cell;
mod integer;
mod memory_order;
#[cfg(target_has_atomic = "ptr")]
mod pointer;
mod primitive;
mod sync;
mod traits;
mod types;

pub use backend::{
    AtomicBackend,
    DefaultBackend,
    IntrinsicBackend,
    NativeBackend,
};
pub use cell::AtomicCell;
pub use memory_order::MemoryOrder;
pub use primitive::{
    bits_eq,
    Primitive,
};
pub use traits::{
    AtomicArithmetic,
    AtomicBitwise,
    AtomicValue,
};
pub use types::*;
