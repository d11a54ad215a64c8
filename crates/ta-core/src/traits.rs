//! Core trait definitions for indicators.

use core::fmt::Debug;

use crate::num::TaFloat;
use crate::price::PriceSeries;

/// How the facade treats NaN/infinite values in caller-supplied candles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NanMode {
    /// Let non-finite values flow through as NaN in every window that
    /// contains them. This is the default behavior.
    #[default]
    Propagate,
    /// Refuse the whole series with an error before computing anything.
    Reject,
}

/// Configuration trait bounds for indicator configurations.
pub trait IndicatorConfig: Clone + Debug + Default + Send + Sync {}

impl<T> IndicatorConfig for T where T: Clone + Debug + Default + Send + Sync {}

/// Core trait for technical indicators.
///
/// Every indicator is a pure function of its configuration and the input
/// candles: `calculate` reads the series, allocates fresh output aligned to
/// it, and keeps nothing between calls.
///
/// # Associated Types
///
/// - `Output` - [`Series`](crate::Series) for single-line indicators, a typed
///   record of series for multi-line ones
/// - `Config` - immutable per-call parameters
///
/// # Example
///
/// ```rust,ignore
/// use kline_ta_core::{Indicator, PriceSeries, Series, TaFloat};
///
/// impl<T: TaFloat> Indicator<T> for Sma<T> {
///     type Output = Series<T>;
///     type Config = SmaConfig;
///
///     fn new(config: Self::Config) -> Self { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
///     fn min_periods(&self) -> usize { self.config.period }
///     fn calculate(&self, data: &PriceSeries<T>) -> Series<T> { /* ... */ }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Number of candles needed before every output line has a value.
    fn min_periods(&self) -> usize;

    /// Compute the indicator over the whole series.
    ///
    /// Never fails: invalid parameters and short input yield NaN output of
    /// the input's length.
    fn calculate(&self, data: &PriceSeries<T>) -> Self::Output;
}
