//! Loose name → number parameters into typed indicator configs.

use tracing::warn;

use kline_ta_core::IndicatorParams;
use kline_ta_indicators::prelude::*;

/// Builds a typed config from facade parameters.
///
/// Missing names take the config's default. Values that cannot be a period
/// become 0, which the indicators answer with an all-NaN series.
pub trait FromParams: Sized {
    /// Parameter names the indicator accepts, in display order.
    const PARAMS: &'static [&'static str];

    /// Build the config.
    fn from_params(params: &IndicatorParams) -> Self;
}

/// Read a period: a non-negative whole number.
///
/// Values beyond `usize::MAX` saturate; no input is that long, so the
/// indicator answers with an all-NaN series.
pub(crate) fn period(params: &IndicatorParams, name: &str, default: usize) -> usize {
    match params.get(name) {
        None => default,
        Some(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => value as usize,
        Some(value) => {
            warn!(parameter = name, value, "period is not a whole non-negative number, output will be empty");
            0
        }
    }
}

/// Read a real-valued parameter.
pub(crate) fn number(params: &IndicatorParams, name: &str, default: f64) -> f64 {
    let value = params.get(name).unwrap_or(default);
    if !value.is_finite() {
        warn!(parameter = name, value, "parameter is not finite, output will be empty");
    }
    value
}

impl FromParams for SmaConfig {
    const PARAMS: &'static [&'static str] = &["period"];

    fn from_params(params: &IndicatorParams) -> Self {
        Self::new(period(params, "period", Self::default().period))
    }
}

impl FromParams for EmaConfig {
    const PARAMS: &'static [&'static str] = &["period"];

    fn from_params(params: &IndicatorParams) -> Self {
        Self::new(period(params, "period", Self::default().period))
    }
}

impl FromParams for BollingerConfig {
    const PARAMS: &'static [&'static str] = &["period", "std_dev_multiplier"];

    fn from_params(params: &IndicatorParams) -> Self {
        let defaults = Self::default();
        Self::new(
            period(params, "period", defaults.period),
            number(params, "std_dev_multiplier", defaults.std_dev_multiplier),
        )
    }
}

impl FromParams for SarConfig {
    const PARAMS: &'static [&'static str] = &["acceleration_step", "acceleration_max"];

    fn from_params(params: &IndicatorParams) -> Self {
        let defaults = Self::default();
        Self::new(
            number(params, "acceleration_step", defaults.acceleration_step),
            number(params, "acceleration_max", defaults.acceleration_max),
        )
    }
}

impl FromParams for KamaConfig {
    const PARAMS: &'static [&'static str] = &["period", "fast_period", "slow_period"];

    fn from_params(params: &IndicatorParams) -> Self {
        let defaults = Self::default();
        Self::new(
            period(params, "period", defaults.period),
            period(params, "fast_period", defaults.fast_period),
            period(params, "slow_period", defaults.slow_period),
        )
    }
}

impl FromParams for MacdConfig {
    const PARAMS: &'static [&'static str] = &["fast_period", "slow_period", "signal_period"];

    fn from_params(params: &IndicatorParams) -> Self {
        let defaults = Self::default();
        Self::new(
            period(params, "fast_period", defaults.fast_period),
            period(params, "slow_period", defaults.slow_period),
            period(params, "signal_period", defaults.signal_period),
        )
    }
}

impl FromParams for RsiConfig {
    const PARAMS: &'static [&'static str] = &["period"];

    fn from_params(params: &IndicatorParams) -> Self {
        Self::new(period(params, "period", Self::default().period))
    }
}

impl FromParams for KdjConfig {
    const PARAMS: &'static [&'static str] = &["period", "k_smooth", "d_smooth"];

    fn from_params(params: &IndicatorParams) -> Self {
        let defaults = Self::default();
        Self::new(
            period(params, "period", defaults.period),
            period(params, "k_smooth", defaults.k_smooth),
            period(params, "d_smooth", defaults.d_smooth),
        )
    }
}

impl FromParams for WilliamsRConfig {
    const PARAMS: &'static [&'static str] = &["period"];

    fn from_params(params: &IndicatorParams) -> Self {
        Self::new(period(params, "period", Self::default().period))
    }
}

impl FromParams for CciConfig {
    const PARAMS: &'static [&'static str] = &["period"];

    fn from_params(params: &IndicatorParams) -> Self {
        Self::new(period(params, "period", Self::default().period))
    }
}

impl FromParams for ObvConfig {
    const PARAMS: &'static [&'static str] = &[];

    fn from_params(_params: &IndicatorParams) -> Self {
        ObvConfig
    }
}

impl FromParams for AtrConfig {
    const PARAMS: &'static [&'static str] = &["period"];

    fn from_params(params: &IndicatorParams) -> Self {
        Self::new(period(params, "period", Self::default().period))
    }
}
