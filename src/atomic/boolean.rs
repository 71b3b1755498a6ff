/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Boolean Values
//!
//! Boolean cells keep a single byte. `true` is stored as `1` and `false` as
//! `0`; conversion happens only at the public boundary.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::sealed::Sealed;
use crate::atomic::traits::{
    AtomicBitwise,
    AtomicValue,
};

impl Sealed for bool {}

impl AtomicValue for bool {
    type Repr = u8;

    #[inline]
    fn into_repr(self) -> u8 {
        u8::from(self)
    }

    #[inline]
    fn from_repr(repr: u8) -> Self {
        repr != 0
    }
}

// AND/OR/XOR of two canonical bytes is again 0 or 1.
impl AtomicBitwise for bool {}
