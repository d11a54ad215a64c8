//! Name → indicator dispatch for the chart layer.

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use kline_ta_core::{
    IndicatorError, IndicatorParams, MultiSeries, NanMode, PriceSeries, Result, Series,
};
use kline_ta_core::traits::Indicator;
use kline_ta_indicators::prelude::*;

use crate::config::FromParams;
use crate::output::IndicatorOutput;
use crate::request::IndicatorRequest;

/// Computes one indicator over the candles with the given parameters.
pub type ComputeFn = fn(&PriceSeries<f64>, &IndicatorParams) -> Result<IndicatorOutput>;

/// Warm-up length for the given parameters.
pub type MinPeriodsFn = fn(&IndicatorParams) -> usize;

/// Everything the registry knows about one indicator.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    /// The computation.
    pub compute: ComputeFn,
    /// Its warm-up length.
    pub min_periods: MinPeriodsFn,
    /// Accepted parameter names.
    pub params: &'static [&'static str],
}

impl RegistryEntry {
    /// Entry for a single-line indicator.
    #[must_use]
    pub fn single<I>() -> Self
    where
        I: Indicator<f64, Output = Series<f64>>,
        I::Config: FromParams,
    {
        Self {
            compute: compute_single::<I>,
            min_periods: min_periods::<I>,
            params: I::Config::PARAMS,
        }
    }

    /// Entry for a multi-line indicator.
    #[must_use]
    pub fn multi<I>() -> Self
    where
        I: Indicator<f64>,
        I::Output: IntoLines,
        I::Config: FromParams,
    {
        Self {
            compute: compute_multi::<I>,
            min_periods: min_periods::<I>,
            params: I::Config::PARAMS,
        }
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry").field("params", &self.params).finish_non_exhaustive()
    }
}

/// Typed multi-line outputs that flatten into a [`MultiSeries`].
pub trait IntoLines {
    /// Flatten into named lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines differ in length.
    fn into_lines(self) -> Result<MultiSeries<f64>>;
}

impl IntoLines for BollingerSeries<f64> {
    fn into_lines(self) -> Result<MultiSeries<f64>> {
        self.into_multi()
    }
}

impl IntoLines for MacdSeries<f64> {
    fn into_lines(self) -> Result<MultiSeries<f64>> {
        self.into_multi()
    }
}

impl IntoLines for KdjSeries<f64> {
    fn into_lines(self) -> Result<MultiSeries<f64>> {
        self.into_multi()
    }
}

fn build<I>(params: &IndicatorParams) -> I
where
    I: Indicator<f64>,
    I::Config: FromParams,
{
    I::new(I::Config::from_params(params))
}

fn compute_single<I>(series: &PriceSeries<f64>, params: &IndicatorParams) -> Result<IndicatorOutput>
where
    I: Indicator<f64, Output = Series<f64>>,
    I::Config: FromParams,
{
    Ok(IndicatorOutput::Single(build::<I>(params).calculate(series)))
}

fn compute_multi<I>(series: &PriceSeries<f64>, params: &IndicatorParams) -> Result<IndicatorOutput>
where
    I: Indicator<f64>,
    I::Output: IntoLines,
    I::Config: FromParams,
{
    Ok(IndicatorOutput::Multi(build::<I>(params).calculate(series).into_lines()?))
}

fn min_periods<I>(params: &IndicatorParams) -> usize
where
    I: Indicator<f64>,
    I::Config: FromParams,
{
    build::<I>(params).min_periods()
}

/// Stable, insertion-ordered registry of indicators by name.
///
/// Names are matched case-insensitively. The registry is immutable once
/// built, so one instance can serve every chart concurrently.
///
/// # Example
///
/// ```rust
/// use kline_ta::{IndicatorRegistry, IndicatorRequest};
/// use kline_ta_core::{PricePoint, PriceSeries};
///
/// let candles: PriceSeries<f64> = (0..30)
///     .map(|i| {
///         let c = 10.0 + f64::from(i);
///         PricePoint::new(i64::from(i) * 60_000, c, c + 0.5, c - 0.5, c, 100.0)
///     })
///     .collect();
///
/// let registry = IndicatorRegistry::new();
/// let request = IndicatorRequest::new("sma").with_param("period", 5.0);
/// let output = registry.compute(&candles, &request).unwrap();
/// assert_eq!(output.len(), 30);
/// assert_eq!(output.as_single().unwrap()[4], 12.0);
/// ```
#[derive(Clone, Debug)]
pub struct IndicatorRegistry {
    entries: IndexMap<&'static str, RegistryEntry>,
    nan_mode: NanMode,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorRegistry {
    /// Registry holding every built-in indicator, in `NanMode::Propagate`.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register("SMA", RegistryEntry::single::<Sma<f64>>());
        registry.register("EMA", RegistryEntry::single::<Ema<f64>>());
        registry.register("BOLL", RegistryEntry::multi::<BollingerBands<f64>>());
        registry.register("SAR", RegistryEntry::single::<ParabolicSar<f64>>());
        registry.register("KAMA", RegistryEntry::single::<Kama<f64>>());
        registry.register("MACD", RegistryEntry::multi::<Macd<f64>>());
        registry.register("RSI", RegistryEntry::single::<Rsi<f64>>());
        registry.register("KDJ", RegistryEntry::multi::<Kdj<f64>>());
        registry.register("WR", RegistryEntry::single::<WilliamsR<f64>>());
        registry.register("CCI", RegistryEntry::single::<Cci<f64>>());
        registry.register("OBV", RegistryEntry::single::<Obv<f64>>());
        registry.register("ATR", RegistryEntry::single::<Atr<f64>>());

        registry
    }

    /// Registry with no indicators.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
            nan_mode: NanMode::default(),
        }
    }

    /// Set how non-finite candle values are handled (builder pattern).
    #[must_use]
    pub fn with_nan_mode(mut self, nan_mode: NanMode) -> Self {
        self.nan_mode = nan_mode;
        self
    }

    /// The current NaN policy.
    #[must_use]
    pub fn nan_mode(&self) -> NanMode {
        self.nan_mode
    }

    /// Register an indicator, replacing any entry with the same name.
    pub fn register(&mut self, name: &'static str, entry: RegistryEntry) {
        self.entries.insert(name, entry);
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Look up an entry, returning its canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::UnknownIndicator`] if no name matches.
    pub fn get(&self, name: &str) -> Result<(&'static str, &RegistryEntry)> {
        self.entries
            .iter()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
            .map(|(&registered, entry)| (registered, entry))
            .ok_or_else(|| IndicatorError::UnknownIndicator(name.to_string()))
    }

    /// Accepted parameter names for an indicator.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::UnknownIndicator`] if no name matches.
    pub fn params(&self, name: &str) -> Result<&'static [&'static str]> {
        self.get(name).map(|(_, entry)| entry.params)
    }

    /// Warm-up length of a request.
    ///
    /// # Errors
    ///
    /// Fails for an unknown indicator or parameter name.
    pub fn min_periods(&self, request: &IndicatorRequest) -> Result<usize> {
        let (name, entry) = self.get(&request.name)?;
        request.params.ensure_known(name, entry.params)?;
        Ok((entry.min_periods)(&request.params))
    }

    /// Compute one indicator over the candles.
    ///
    /// # Errors
    ///
    /// Fails for an unknown indicator or parameter name, and under
    /// [`NanMode::Reject`] for candles that do not pass
    /// [`PriceSeries::validate`]. Bad parameter values and short input are
    /// not errors: they produce NaN output.
    pub fn compute(&self, series: &PriceSeries<f64>, request: &IndicatorRequest) -> Result<IndicatorOutput> {
        self.check_candles(series)?;
        self.dispatch(series, request)
    }

    /// Compute several indicators over the same candles, in request order.
    ///
    /// # Errors
    ///
    /// Stops at the first request that fails; see [`compute`](Self::compute).
    pub fn compute_all(
        &self,
        series: &PriceSeries<f64>,
        requests: &[IndicatorRequest],
    ) -> Result<Vec<IndicatorOutput>> {
        self.check_candles(series)?;
        requests.iter().map(|request| self.dispatch(series, request)).collect()
    }

    fn check_candles(&self, series: &PriceSeries<f64>) -> Result<()> {
        match self.nan_mode {
            NanMode::Propagate => Ok(()),
            NanMode::Reject => series.validate(),
        }
    }

    fn dispatch(&self, series: &PriceSeries<f64>, request: &IndicatorRequest) -> Result<IndicatorOutput> {
        let (name, entry) = self.get(&request.name)?;
        request.params.ensure_known(name, entry.params)?;

        debug!(indicator = name, candles = series.len(), "computing indicator");
        let output = (entry.compute)(series, &request.params)?;

        let warm_up = (entry.min_periods)(&request.params);
        if !series.is_empty() && series.len() >= warm_up && output.is_all_nan() {
            warn!(indicator = name, params = ?request.params, "indicator produced no values");
        }
        Ok(output)
    }
}
