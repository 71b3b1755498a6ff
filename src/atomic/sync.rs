/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Storage shim.
//!
//! Under `--cfg loom` the native atomic storage types come from loom so the
//! cells can be model-checked; otherwise they are the `core` atomics.

#[cfg(loom)]
pub(crate) use loom::sync::atomic::Ordering;

#[cfg(all(loom, target_has_atomic = "8"))]
pub(crate) use loom::sync::atomic::{AtomicI8, AtomicU8};
#[cfg(all(loom, target_has_atomic = "16"))]
pub(crate) use loom::sync::atomic::{AtomicI16, AtomicU16};
#[cfg(all(loom, target_has_atomic = "32"))]
pub(crate) use loom::sync::atomic::{AtomicI32, AtomicU32};
#[cfg(all(loom, target_has_atomic = "64"))]
pub(crate) use loom::sync::atomic::{AtomicI64, AtomicU64};
#[cfg(all(loom, target_has_atomic = "ptr"))]
pub(crate) use loom::sync::atomic::{AtomicIsize, AtomicUsize};

#[cfg(not(loom))]
pub(crate) use core::sync::atomic::Ordering;

#[cfg(all(not(loom), target_has_atomic = "8"))]
pub(crate) use core::sync::atomic::{AtomicI8, AtomicU8};
#[cfg(all(not(loom), target_has_atomic = "16"))]
pub(crate) use core::sync::atomic::{AtomicI16, AtomicU16};
#[cfg(all(not(loom), target_has_atomic = "32"))]
pub(crate) use core::sync::atomic::{AtomicI32, AtomicU32};
#[cfg(all(not(loom), target_has_atomic = "64"))]
pub(crate) use core::sync::atomic::{AtomicI64, AtomicU64};
#[cfg(all(not(loom), target_has_atomic = "ptr"))]
pub(crate) use core::sync::atomic::{AtomicIsize, AtomicUsize};
