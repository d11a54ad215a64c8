//! Named, aligned output lines with deterministic ordering.
//!
//! Indicators that draw more than one line (Bollinger upper/middle/lower, MACD
//! macd/signal/histogram, KDJ k/d/j) expose their result as a [`MultiSeries`].

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::series::Series;

/// A record of named series that all share the same length.
///
/// Lines iterate in insertion order, so serialized results and test output are
/// reproducible.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::{MultiSeries, Series};
///
/// let lines: MultiSeries<f64> = MultiSeries::from_lines(vec![
///     ("upper".to_string(), Series::from_vec(vec![f64::NAN, 12.0])),
///     ("lower".to_string(), Series::from_vec(vec![f64::NAN, 8.0])),
/// ])
/// .unwrap();
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines.line_names(), vec!["upper", "lower"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = "T: TaFloat"))]
pub struct MultiSeries<T: TaFloat> {
    lines: IndexMap<String, Series<T>>,
}

impl<T: TaFloat> Default for MultiSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> MultiSeries<T> {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: IndexMap::new(),
        }
    }

    /// Build a record from (name, series) pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines differ in length or a name repeats.
    pub fn from_lines(lines: Vec<(String, Series<T>)>) -> Result<Self> {
        let mut record = Self::new();
        for (name, series) in lines {
            record.add_line(name, series)?;
        }
        Ok(record)
    }

    /// Number of rows (aligned positions) in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.values().next().map_or(0, Series::len)
    }

    /// Returns `true` if the record has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line names in insertion order.
    #[must_use]
    pub fn line_names(&self) -> Vec<&str> {
        self.lines.keys().map(String::as_str).collect()
    }

    /// Get a line by name.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&Series<T>> {
        self.lines.get(name)
    }

    /// Append a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the name already exists or the length differs from
    /// the lines already present.
    pub fn add_line(&mut self, name: String, series: Series<T>) -> Result<()> {
        if self.lines.contains_key(&name) {
            return Err(IndicatorError::DuplicateLine(name));
        }
        if !self.lines.is_empty() && series.len() != self.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: series.len(),
            });
        }
        self.lines.insert(name, series);
        Ok(())
    }

    /// Iterate over (name, series) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.lines.iter().map(|(name, series)| (name.as_str(), series))
    }
}
