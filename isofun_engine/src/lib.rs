//! Implicit (level-set) functions of time and space, constructed by name from a flat parameter list.
//!
//! ```
//! use isofun_engine::func::{registry::registry, Func};
//! use isofun_engine::prms;
//!
//! let circle = registry().create("cdist", &prms! { "xc" => 1.0, "yc" => 1.0, "r" => 2.0 }).unwrap();
//! assert_eq!(circle.f(0.0, &[1.0, 1.0]), -2.0);
//! ```

pub mod core;
pub mod func;
pub mod param;
pub mod shared;
