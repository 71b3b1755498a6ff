/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Value Shape Traits
//!
//! Defines how a value type maps onto an atomic representation, and which
//! operation groups are available for it.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::primitive::Primitive;
use crate::atomic::sealed::Sealed;

/// A value that can live in an [`AtomicCell`](crate::AtomicCell).
///
/// The crate implements it for every fixed-width integer, `bool` (stored as
/// one byte), `*mut T` and `*const T` (stored as an address-width integer).
/// A type without an implementation cannot instantiate a cell, which is how
/// unsupported element types are rejected at compile time.
///
/// Fieldless enumerations can be stored by implementing this trait over
/// their discriminant type. Only values produced by `into_repr` ever reach
/// `from_repr`, so the mapping only has to be total on those. For the same
/// reason a cell over a user type has no `Default`; it is always built
/// from a value with `new` or `From`.
///
/// A cell is `Send + Sync` whatever `Self` is, because values travel
/// between threads as their representation. An implementation for a type
/// tied to one thread accepts that its values may be rebuilt on another.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::{AtomicCell, AtomicValue};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// #[repr(u8)]
/// enum State {
///     Idle = 0,
///     Running = 1,
/// }
///
/// impl AtomicValue for State {
///     type Repr = u8;
///
///     fn into_repr(self) -> u8 {
///         self as u8
///     }
///
///     fn from_repr(repr: u8) -> Self {
///         match repr {
///             1 => State::Running,
///             _ => State::Idle,
///         }
///     }
/// }
///
/// let state: AtomicCell<State> = AtomicCell::new(State::Idle);
/// assert_eq!(state.exchange(State::Running), State::Idle);
/// ```
pub trait AtomicValue: Copy {
    /// The bit pattern the cell operates on.
    type Repr: Primitive;

    /// Converts a value into its representation.
    fn into_repr(self) -> Self::Repr;

    /// Converts a representation back into a value.
    fn from_repr(repr: Self::Repr) -> Self;
}

/// Values supporting atomic add/subtract.
///
/// Sealed. Integers add their own type; pointers add an element count that
/// is scaled by the pointee size before it reaches the representation.
pub trait AtomicArithmetic: AtomicValue + Sealed {
    /// The operand type of `fetch_add`/`fetch_sub`.
    type Delta: Copy;

    /// A delta of one unit: `1` for integers, one element for pointers.
    const UNIT: Self::Delta;

    /// Converts a delta into the representation-level addend.
    fn scale_delta(delta: Self::Delta) -> Self::Repr;
}

/// Values supporting atomic AND/OR/XOR.
///
/// Sealed. Implemented for integers and `bool`.
pub trait AtomicBitwise: AtomicValue + Sealed {}
