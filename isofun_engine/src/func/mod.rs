//! # Module [crate::func]
//!
//! This module contains the evaluation interface ([Func]) shared by every function kind, along with the
//! submodules for the concrete kinds.
//!
//! ## Related
//! - [Func]
//! - [FuncInstance]
//! - [registry]
//! - [cdist]
//!
//! # DEV: Code Structure
//!
//! ## Lifecycle
//! Functions are created empty by an [registry::Allocator], and then configured *once* through [Func::init].
//! Only after a successful `init` may the evaluation methods be called. Evaluation never mutates the function,
//! so an initialised function can be shared between threads freely.
//!
//! ## Adding a kind
//! Considering a "Cdist" function:
//!
//! - File: `./cdist.rs`
//! - Add module: `pub mod cdist;`
//! - Struct: `CdistFunc`, where `CdistFunc: Func + Default`
//! - Add an entry to [FuncInstance] for static-dispatch
//! - Add an entry to [registry::BUILTIN_ALLOCATORS]
//!
//! Kinds defined outside this crate go through [DynamicFunc] instead.

use crate::core::types::Number;
use crate::param::Prms;
use dyn_clone::DynClone;
use enum_dispatch::enum_dispatch;
use std::fmt::Debug;
use thiserror::Error;
use valuable::Valuable;
// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{cdist::CdistFunc, dynamic::DynamicFunc};

pub mod cdist;
pub mod dynamic;
pub mod registry;

// NOTE: We have to use [`DynClone`] instead of plain old [`Clone`],
// Since we will be using `Box<dyn Func>` and we need to clone those boxes
dyn_clone::clone_trait_object!(Func);
/// A simple marker trait that enforces a few other traits we need for functions
pub trait FuncRequirement: DynClone + Debug + Send + Sync {}
impl<T: DynClone + Debug + Send + Sync> FuncRequirement for T {}

// region Func trait

/// A scalar field `y = F(t, x)` in time `t` and space `x`, along with its derivatives
///
/// The spatial argument `x` is a slice of `2` or `3` coordinates, and must match the dimensionality the
/// function was initialised with.
#[enum_dispatch]
pub trait Func: FuncRequirement {
    /// The key this kind is registered under (e.g. `"cdist"`)
    fn kind(&self) -> &'static str;

    /// Configures the function from the given parameters
    ///
    /// # Errors
    /// Fails if a parameter is not recognised by this kind, or its value is invalid. On failure the function is
    /// left uninitialised, and `init` may be called again with corrected parameters.
    fn init(&mut self, prms: &Prms) -> Result<(), FuncInitError>;

    /// Returns `y = F(t, x)`
    fn f(&self, t: Number, x: &[Number]) -> Number;

    /// Returns `∂y/∂t` with `x` held constant
    fn g(&self, t: Number, x: &[Number]) -> Number;

    /// Returns `∂²y/∂t²` with `x` held constant
    fn h(&self, t: Number, x: &[Number]) -> Number;

    /// Writes the spatial gradient `∇F = ∂y/∂x` into `out`
    ///
    /// Exactly `x.len()` components of `out` are written.
    fn grad(&self, out: &mut [Number], t: Number, x: &[Number]);
}

/// An optimised implementation of [Func], using static dispatch for the builtin kinds.
#[enum_dispatch(Func)]
#[derive(Clone, Debug)]
pub enum FuncInstance {
    CdistFunc,
    DynamicFunc,
}

// endregion Func trait

#[derive(Error, Clone, Debug, PartialEq, Valuable)]
pub enum FuncInitError {
    /// A parameter name that the function kind doesn't know about was passed in
    #[error("{func}: parameter named `{name}` is invalid")]
    InvalidParameter { func: &'static str, name: String },
    /// The radius was too small (or negative)
    #[error("{func}: radius must be greater than {min:e}")]
    InvalidRadius { func: &'static str, min: Number },
    /// A centre coordinate was infinite or `NaN`
    #[error("{func}: centre coordinates must be finite")]
    InvalidCentre { func: &'static str },
    /// `init` was called on a function that had already been successfully initialised
    #[error("{func}: function is already initialised")]
    AlreadyInitialised { func: &'static str },
}
