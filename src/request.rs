//! Persisted indicator selections.

use serde::{Deserialize, Serialize};

use kline_ta_core::IndicatorParams;

/// One indicator selection as the chart layer stores it.
///
/// ```rust
/// use kline_ta::IndicatorRequest;
///
/// let request: IndicatorRequest =
///     serde_json::from_str(r#"{"name": "BOLL", "params": {"period": 20, "std_dev_multiplier": 2}}"#).unwrap();
/// assert_eq!(request.name, "BOLL");
/// assert_eq!(request.params.get("period"), Some(20.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRequest {
    /// Registry name, matched case-insensitively.
    pub name: String,
    /// Parameter overrides; anything missing takes the indicator default.
    #[serde(default)]
    pub params: IndicatorParams,
}

impl IndicatorRequest {
    /// Request `name` with default parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: IndicatorParams::new(),
        }
    }

    /// Return a copy with one parameter overridden (builder pattern).
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params = self.params.with(name, value);
        self
    }
}
