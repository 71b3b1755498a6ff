/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fixed-Width Aliases
//!
//! Cells named by exact bit width, all on the [`DefaultBackend`].
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::backend::DefaultBackend;
use crate::atomic::cell::AtomicCell;

/// Atomic boolean.
#[cfg(target_has_atomic = "8")]
pub type AtomicBool = AtomicCell<bool, DefaultBackend>;

/// Atomic 8-bit signed integer.
#[cfg(target_has_atomic = "8")]
pub type AtomicI8 = AtomicCell<i8, DefaultBackend>;
/// Atomic 8-bit unsigned integer.
#[cfg(target_has_atomic = "8")]
pub type AtomicU8 = AtomicCell<u8, DefaultBackend>;
/// Atomic 16-bit signed integer.
#[cfg(target_has_atomic = "16")]
pub type AtomicI16 = AtomicCell<i16, DefaultBackend>;
/// Atomic 16-bit unsigned integer.
#[cfg(target_has_atomic = "16")]
pub type AtomicU16 = AtomicCell<u16, DefaultBackend>;
/// Atomic 32-bit signed integer.
#[cfg(target_has_atomic = "32")]
pub type AtomicI32 = AtomicCell<i32, DefaultBackend>;
/// Atomic 32-bit unsigned integer.
#[cfg(target_has_atomic = "32")]
pub type AtomicU32 = AtomicCell<u32, DefaultBackend>;
/// Atomic 64-bit signed integer.
#[cfg(target_has_atomic = "64")]
pub type AtomicI64 = AtomicCell<i64, DefaultBackend>;
/// Atomic 64-bit unsigned integer.
#[cfg(target_has_atomic = "64")]
pub type AtomicU64 = AtomicCell<u64, DefaultBackend>;
/// Atomic pointer-sized signed integer.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicIsize = AtomicCell<isize, DefaultBackend>;
/// Atomic pointer-sized unsigned integer.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicUsize = AtomicCell<usize, DefaultBackend>;

/// Atomic pointer difference.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicPtrdiff = AtomicCell<isize, DefaultBackend>;
/// Atomic object size.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicSize = AtomicCell<usize, DefaultBackend>;
/// Atomic signed integer wide enough for an address.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicIntPtr = AtomicCell<isize, DefaultBackend>;
/// Atomic unsigned integer wide enough for an address.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicUintPtr = AtomicCell<usize, DefaultBackend>;
/// Atomic widest signed integer.
#[cfg(target_has_atomic = "64")]
pub type AtomicIntMax = AtomicCell<i64, DefaultBackend>;
/// Atomic widest unsigned integer.
#[cfg(target_has_atomic = "64")]
pub type AtomicUintMax = AtomicCell<u64, DefaultBackend>;

/// Atomic mutable pointer; arithmetic moves by whole elements.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicPtr<T> = AtomicCell<*mut T, DefaultBackend>;
/// Atomic const pointer; arithmetic moves by whole elements.
#[cfg(target_has_atomic = "ptr")]
pub type AtomicConstPtr<T> = AtomicCell<*const T, DefaultBackend>;

/// Macro to declare a `least`/`fast` alias family.
///
/// Every width is native here, so both families map to the exact width.
macro_rules! width_aliases {
    ($($cfg:tt => $name:ident = $value_type:ty;)*) => {
        $(
            #[doc = concat!("Atomic `", stringify!($value_type), "` (", stringify!($name), ").")]
            #[cfg(target_has_atomic = $cfg)]
            pub type $name = AtomicCell<$value_type, DefaultBackend>;
        )*
    };
}

width_aliases! {
    "8" => AtomicIntLeast8 = i8;
    "8" => AtomicUintLeast8 = u8;
    "16" => AtomicIntLeast16 = i16;
    "16" => AtomicUintLeast16 = u16;
    "32" => AtomicIntLeast32 = i32;
    "32" => AtomicUintLeast32 = u32;
    "64" => AtomicIntLeast64 = i64;
    "64" => AtomicUintLeast64 = u64;
    "8" => AtomicIntFast8 = i8;
    "8" => AtomicUintFast8 = u8;
    "16" => AtomicIntFast16 = i16;
    "16" => AtomicUintFast16 = u16;
    "32" => AtomicIntFast32 = i32;
    "32" => AtomicUintFast32 = u32;
    "64" => AtomicIntFast64 = i64;
    "64" => AtomicUintFast64 = u64;
}
