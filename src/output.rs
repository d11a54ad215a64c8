//! Facade output: one line or a named record of lines.

use serde::Serialize;

use kline_ta_core::{MultiSeries, Series};

/// Result of one facade call, always the length of the input candles.
///
/// Serializes untagged: a single line as a JSON array, several lines as an
/// object keyed by line name. NaN positions serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IndicatorOutput {
    /// Single-line indicators (SMA, EMA, SAR, KAMA, RSI, WR, CCI, OBV, ATR).
    Single(Series<f64>),
    /// Multi-line indicators (BOLL, MACD, KDJ).
    Multi(MultiSeries<f64>),
}

impl IndicatorOutput {
    /// Number of aligned positions.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(series) => series.len(),
            Self::Multi(lines) => lines.len(),
        }
    }

    /// Returns `true` for output over an empty series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The line of a single-line output.
    #[must_use]
    pub fn as_single(&self) -> Option<&Series<f64>> {
        match self {
            Self::Single(series) => Some(series),
            Self::Multi(_) => None,
        }
    }

    /// The record of a multi-line output.
    #[must_use]
    pub fn as_multi(&self) -> Option<&MultiSeries<f64>> {
        match self {
            Self::Single(_) => None,
            Self::Multi(lines) => Some(lines),
        }
    }

    /// A named line of a multi-line output.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&Series<f64>> {
        self.as_multi().and_then(|lines| lines.line(name))
    }

    /// Returns `true` if no position holds a value.
    #[must_use]
    pub fn is_all_nan(&self) -> bool {
        match self {
            Self::Single(series) => series.is_all_nan(),
            Self::Multi(lines) => lines.iter().all(|(_, series)| series.is_all_nan()),
        }
    }
}

impl From<Series<f64>> for IndicatorOutput {
    fn from(series: Series<f64>) -> Self {
        Self::Single(series)
    }
}

impl From<MultiSeries<f64>> for IndicatorOutput {
    fn from(lines: MultiSeries<f64>) -> Self {
        Self::Multi(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_serializes_as_array() {
        let output = IndicatorOutput::from(Series::from_vec(vec![f64::NAN, 1.5]));
        assert_eq!(serde_json::to_string(&output).unwrap(), "[null,1.5]");
        assert_eq!(output.len(), 2);
        assert!(output.line("upper").is_none());
    }

    #[test]
    fn test_multi_serializes_as_object() {
        let lines = MultiSeries::from_lines(vec![
            ("k".to_string(), Series::from_vec(vec![f64::NAN])),
            ("d".to_string(), Series::from_vec(vec![2.0])),
        ])
        .unwrap();
        let output = IndicatorOutput::from(lines);
        assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"k":[null],"d":[2.0]}"#);
        assert!(!output.is_all_nan());
        assert_eq!(output.line("d").map(|s| s[0]), Some(2.0));
    }
}
