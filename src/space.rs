//! Predefined footprint types.
//!
//! A footprint type contributes nothing but its size and alignment; it is
//! never read, written, or dropped. The `S*` presets below are sized in
//! machine words, so their alignment always accommodates the boxed fallback
//! slot. Any other type works as well; see the crate docs for custom
//! footprints.
//!
//! `S4` (four words, the size of four pointers) is the default footprint of
//! [`Handle`](crate::Handle).

use core::mem;

use static_assertions::const_assert_eq;

/// Footprint of 1 machine word.
pub struct S1 {
    _inner: [usize; 1],
}

/// Footprint of 2 machine words.
pub struct S2 {
    _inner: [usize; 2],
}

/// Footprint of 4 machine words. The default.
pub struct S4 {
    _inner: [usize; 4],
}

/// Footprint of 8 machine words.
pub struct S8 {
    _inner: [usize; 8],
}

/// Footprint of 16 machine words.
pub struct S16 {
    _inner: [usize; 16],
}

/// Footprint of 32 machine words.
pub struct S32 {
    _inner: [usize; 32],
}

/// Footprint of 64 machine words.
pub struct S64 {
    _inner: [usize; 64],
}

const_assert_eq!(mem::size_of::<S1>(), mem::size_of::<usize>());
const_assert_eq!(mem::size_of::<S4>(), 4 * mem::size_of::<usize>());
const_assert_eq!(mem::size_of::<S64>(), 64 * mem::size_of::<usize>());
const_assert_eq!(mem::align_of::<S4>(), mem::align_of::<usize>());
