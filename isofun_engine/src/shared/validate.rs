//! Debug-only sanity checks for values flowing through the evaluation interface.
//!
//! All of these compile down to nothing in release builds.

use crate::core::types::Number;
use approx::relative_eq;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

/// Asserts that a point slice has the dimensionality the function was initialised with
#[inline(always)]
#[track_caller]
pub fn point(x: &[Number], dims: usize) {
    debug_assert_only!();

    assert_eq!(x.len(), dims, "point has wrong dimensionality; x: {x:?}");
    assert!(x.iter().all(|c| !c.is_nan()), "should not be nan; x: {x:?}");
}

/// Asserts that an output buffer is large enough to hold a gradient of `dims` components
#[inline(always)]
#[track_caller]
pub fn out_buffer(out: &[Number], dims: usize) {
    debug_assert_only!();

    assert!(
        out.len() >= dims,
        "output buffer too small; len: {}, need: {dims}",
        out.len()
    );
}

/// Asserts the vector is either unit length, or exactly zero (the fallback for degenerate points)
#[inline(always)]
#[track_caller]
pub fn normal_or_zero(n: &[Number]) {
    debug_assert_only!();

    let len = n.iter().map(|c| c * c).sum::<Number>().sqrt();
    assert!(
        len == 0. || relative_eq!(len, 1., epsilon = EPSILON, max_relative = RELATIVE),
        "should be normalised or zero; vec: {n:?}, len: {len}"
    );
}

/// Asserts that a function has been initialised before being evaluated
#[inline(always)]
#[track_caller]
pub fn initialised(is_init: bool, kind: &str) {
    debug_assert_only!();

    assert!(is_init, "`{kind}` evaluated before a successful `init`");
}
