/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-cell
//!
//! Portable atomic cell with interchangeable backends.
//!
//! `AtomicCell<T, B>` gives the same observable behavior whichever backend
//! `B` it runs on:
//!
//! - [`IntrinsicBackend`] builds every operation from full-barrier
//!   compare-and-swap and read-modify-write primitives. Every memory-order
//!   tag runs as `SeqCst`.
//! - [`NativeBackend`] forwards the requested memory-order tag to the
//!   platform's native atomic type.
//!
//! The fixed-width aliases (`AtomicI32`, `AtomicPtr<T>`, `AtomicBool`, ...)
//! use [`DefaultBackend`], which is `IntrinsicBackend` when the
//! `intrinsic-backend` feature is enabled and `NativeBackend` otherwise.
//!
//! ## Design Goals
//!
//! - **Identical values on both backends**: same loads, same
//!   compare-exchange results, same `expected` updates
//! - **Lock-free only**: unsupported widths fail to compile
//! - **No heap allocation**, no blocking, no runtime backend switch
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_cell::{AtomicI32, AtomicPtr};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicI32::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     handles.push(thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.post_increment();
//!         }
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.load(), 1000);
//!
//! let mut data = [0_u32; 4];
//! let cursor = AtomicPtr::new(data.as_mut_ptr());
//! cursor.fetch_add(2);
//! assert_eq!(cursor.load(), data.as_mut_ptr().wrapping_add(2));
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export the cell, its backends and the aliases
pub use atomic::*;
