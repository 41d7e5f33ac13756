//! String-keyed table of function allocators
//!
//! Callers look up a kind by name, allocate an empty function, and then [Func::init] it. [Registry::create] does
//! all three in one step.
//!
//! The process-wide table is available through [registry()]. It is built once from [BUILTIN_ALLOCATORS], in list
//! order, and is read-only afterwards so it can be shared between threads without locking. Crates that add their own
//! kinds should build their own [Registry] instead.

use crate::core::targets::REGISTRY;
use crate::func::cdist::{self, CdistFunc};
use crate::func::{Func, FuncInitError, FuncInstance};
use crate::param::Prms;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};
use valuable::Valuable;

/// Creates a new, uninitialised function of a given kind
pub type Allocator = fn() -> FuncInstance;

#[derive(Error, Clone, Debug, PartialEq, Valuable)]
pub enum RegistryError {
    /// No allocator was registered under the given key
    #[error("cannot find function kind named `{0}`")]
    UnknownKind(String),
    /// The function was allocated, but initialising it failed
    #[error("failed to initialise function of kind `{kind}`")]
    Init {
        kind: String,
        #[source]
        source: FuncInitError,
    },
}

/// Ordered list of the kinds built into this crate
pub const BUILTIN_ALLOCATORS: &[(&str, Allocator)] = &[(cdist::KIND, CdistFunc::alloc as Allocator)];

#[derive(Clone, Debug, Default)]
pub struct Registry {
    allocators: HashMap<String, Allocator>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self { Self::default() }

    /// Creates a registry containing all the [BUILTIN_ALLOCATORS]
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        for &(key, alloc) in BUILTIN_ALLOCATORS {
            reg.register(key, alloc);
        }
        reg
    }

    /// Registers an allocator under `key`.
    ///
    /// If the key was already taken, the new allocator replaces it, and the old one is returned.
    pub fn register(&mut self, key: impl Into<String>, alloc: Allocator) -> Option<Allocator> {
        let key = key.into();
        debug!(target: REGISTRY, %key, "register function kind");
        if self.allocators.contains_key(&key) {
            warn!(target: REGISTRY, %key, "function kind registered twice, replacing previous allocator");
        }
        self.allocators.insert(key, alloc)
    }

    pub fn contains(&self, key: &str) -> bool { self.allocators.contains_key(key) }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<&str> { self.allocators.keys().map(String::as_str).sorted().collect() }

    /// Finds the allocator registered under `key`
    pub fn lookup(&self, key: &str) -> Result<Allocator, RegistryError> {
        self.allocators
            .get(key)
            .copied()
            .ok_or_else(|| RegistryError::UnknownKind(key.to_owned()))
    }

    /// Allocates a function of the given kind, and initialises it from `prms`
    pub fn create(&self, key: &str, prms: &Prms) -> Result<FuncInstance, RegistryError> {
        let mut func = self.lookup(key)?();
        func.init(prms).map_err(|source| RegistryError::Init {
            kind: key.to_owned(),
            source,
        })?;
        Ok(func)
    }
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::with_builtins);

/// The process-wide registry, containing the [BUILTIN_ALLOCATORS]
pub fn registry() -> &'static Registry { &GLOBAL }
