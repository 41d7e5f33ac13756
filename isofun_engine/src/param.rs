//! # Module [crate::param]
//!
//! Named scalar parameters, used as the configuration payload handed to [crate::func::Func::init].
//!
//! A [Prms] list is ordered and may contain duplicate names. Lookups through [Prms::find] return the
//! *last* parameter with a matching name, which is the same parameter that wins when a function walks
//! the list during initialisation.

use crate::core::targets::PARAM;
use crate::core::types::Number;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::trace;
use valuable::Valuable;

/// A single named parameter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prm {
    /// Name of the parameter, e.g. `"xc"`
    pub n: String,
    /// Value of the parameter
    pub v: Number,
    /// Optional lower bound, see [Prms::check_limits]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    /// Optional upper bound, see [Prms::check_limits]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    /// Units, only used for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,
    /// Free-form data for consumers that need more than a scalar
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

impl Prm {
    pub fn new(name: impl Into<String>, value: Number) -> Self {
        Self {
            n: name.into(),
            v: value,
            min: None,
            max: None,
            u: None,
            extra: String::new(),
        }
    }

    pub fn with_limits(self, min: Number, max: Number) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub fn with_unit(self, unit: impl Into<String>) -> Self {
        Self {
            u: Some(unit.into()),
            ..self
        }
    }
}

impl Display for Prm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.n, self.v)?;
        if let Some(u) = &self.u {
            write!(f, " [{u}]")?;
        }
        Ok(())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Valuable)]
pub enum PrmError {
    #[error("parameter `{name}` = {value} is below its minimum {min}")]
    BelowMin { name: String, value: Number, min: Number },
    #[error("parameter `{name}` = {value} is above its maximum {max}")]
    AboveMax { name: String, value: Number, max: Number },
}

/// An ordered list of parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prms(Vec<Prm>);

impl Prms {
    pub fn new() -> Self { Self(Vec::new()) }

    pub fn push(&mut self, prm: Prm) { self.0.push(prm) }

    pub fn iter(&self) -> std::slice::Iter<'_, Prm> { self.0.iter() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Finds the last parameter named `name`
    pub fn find(&self, name: &str) -> Option<&Prm> { self.0.iter().rev().find(|p| p.n == name) }

    /// Looks up the values for several names at once, in the same order as `names`
    pub fn values(&self, names: &[&str]) -> Vec<Option<Number>> {
        names.iter().map(|&n| self.find(n).map(|p| p.v)).collect()
    }

    /// Checks each bounded parameter is within its `min..=max` limits
    ///
    /// # Errors
    /// Returns the first violation found, in list order
    pub fn check_limits(&self) -> Result<(), PrmError> {
        for p in &self.0 {
            if let Some(min) = p.min {
                if p.v < min {
                    trace!(target: PARAM, name = %p.n, value = p.v, min, "parameter below minimum");
                    return Err(PrmError::BelowMin {
                        name: p.n.clone(),
                        value: p.v,
                        min,
                    });
                }
            }
            if let Some(max) = p.max {
                if p.v > max {
                    trace!(target: PARAM, name = %p.n, value = p.v, max, "parameter above maximum");
                    return Err(PrmError::AboveMax {
                        name: p.n.clone(),
                        value: p.v,
                        max,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Display for Prms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0.iter().join("\n")) }
}

impl From<Vec<Prm>> for Prms {
    fn from(value: Vec<Prm>) -> Self { Self(value) }
}

impl FromIterator<Prm> for Prms {
    fn from_iter<I: IntoIterator<Item = Prm>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

impl<'a> IntoIterator for &'a Prms {
    type Item = &'a Prm;
    type IntoIter = std::slice::Iter<'a, Prm>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Builds a [Prms] list from `name => value` pairs, keeping their order
///
/// ```
/// let prms = isofun_engine::prms! { "xc" => 1.0, "yc" => 1.0, "r" => 2.0 };
/// assert_eq!(prms.len(), 3);
/// ```
#[macro_export]
macro_rules! prms {
    {$( $name:expr => $val:expr ),* $(,)?} => {
        $crate::param::Prms::from(vec![$( $crate::param::Prm::new($name, $val) ),*])
    };
}
