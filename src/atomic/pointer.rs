/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Pointer Values
//!
//! Pointer cells keep the address as a `usize`. Arithmetic takes an element
//! count and moves the address by `count * size_of::<T>()` bytes, the same
//! as `pointer::wrapping_offset`.
//!
//! # Author
//!
//! Haixing Hu

use std::mem;

use crate::atomic::sealed::Sealed;
use crate::atomic::traits::{
    AtomicArithmetic,
    AtomicValue,
};

/// Byte offset of `count` elements of `T`, wrapped to the address width.
#[inline]
fn element_offset<T>(count: isize) -> usize {
    (count as usize).wrapping_mul(mem::size_of::<T>())
}

impl<T> Sealed for *mut T {}

impl<T> AtomicValue for *mut T {
    type Repr = usize;

    #[inline]
    fn into_repr(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_repr(repr: usize) -> Self {
        repr as *mut T
    }
}

impl<T> AtomicArithmetic for *mut T {
    type Delta = isize;

    const UNIT: isize = 1;

    #[inline]
    fn scale_delta(count: isize) -> usize {
        element_offset::<T>(count)
    }
}

impl<T> Sealed for *const T {}

impl<T> AtomicValue for *const T {
    type Repr = usize;

    #[inline]
    fn into_repr(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_repr(repr: usize) -> Self {
        repr as *const T
    }
}

impl<T> AtomicArithmetic for *const T {
    type Delta = isize;

    const UNIT: isize = 1;

    #[inline]
    fn scale_delta(count: isize) -> usize {
        element_offset::<T>(count)
    }
}
