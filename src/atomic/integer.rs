/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Integer Values
//!
//! Scalar cells: every fixed-width integer is its own representation and
//! supports both the arithmetic and the bitwise operation groups.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::traits::{
    AtomicArithmetic,
    AtomicBitwise,
    AtomicValue,
};

/// Macro to implement the value-shape traits for an integer type.
///
/// # Parameters
///
/// * `$value_type` - The integer type (e.g., `i32`)
macro_rules! impl_atomic_integer {
    ($value_type:ty) => {
        impl AtomicValue for $value_type {
            type Repr = $value_type;

            #[inline]
            fn into_repr(self) -> $value_type {
                self
            }

            #[inline]
            fn from_repr(repr: $value_type) -> Self {
                repr
            }
        }

        impl AtomicArithmetic for $value_type {
            type Delta = $value_type;

            const UNIT: $value_type = 1;

            #[inline]
            fn scale_delta(delta: $value_type) -> $value_type {
                delta
            }
        }

        impl AtomicBitwise for $value_type {}
    };
}

#[cfg(target_has_atomic = "8")]
impl_atomic_integer!(u8);
#[cfg(target_has_atomic = "8")]
impl_atomic_integer!(i8);
#[cfg(target_has_atomic = "16")]
impl_atomic_integer!(u16);
#[cfg(target_has_atomic = "16")]
impl_atomic_integer!(i16);
#[cfg(target_has_atomic = "32")]
impl_atomic_integer!(u32);
#[cfg(target_has_atomic = "32")]
impl_atomic_integer!(i32);
#[cfg(target_has_atomic = "64")]
impl_atomic_integer!(u64);
#[cfg(target_has_atomic = "64")]
impl_atomic_integer!(i64);
#[cfg(target_has_atomic = "ptr")]
impl_atomic_integer!(usize);
#[cfg(target_has_atomic = "ptr")]
impl_atomic_integer!(isize);
