//! Per-call indicator parameters keyed by name.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Immutable name → value parameter set for one indicator call.
///
/// This is the loosely-typed form a chart layer persists per overlay, for
/// example `{"period": 20, "std_dev_multiplier": 2}`. Each indicator turns it
/// into its own typed config.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::IndicatorParams;
///
/// let params = IndicatorParams::new().with("period", 20.0).with("std_dev_multiplier", 2.0);
/// assert_eq!(params.get("period"), Some(20.0));
/// assert!(params.ensure_known("BOLL", &["period", "std_dev_multiplier"]).is_ok());
/// assert!(params.ensure_known("SMA", &["period"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndicatorParams {
    values: IndexMap<String, f64>,
}

impl IndicatorParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `name` set to `value` (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Look up a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every supplied name is one the indicator accepts.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::UnknownParameter`] for the first name not in
    /// `accepted`.
    pub fn ensure_known(&self, indicator: &str, accepted: &[&str]) -> Result<()> {
        match self.names().find(|name| !accepted.contains(name)) {
            Some(name) => Err(IndicatorError::UnknownParameter {
                indicator: indicator.to_string(),
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for IndicatorParams {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
