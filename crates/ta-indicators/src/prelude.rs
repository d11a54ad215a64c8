//! Prelude for kline-ta-indicators.
//!
//! This module re-exports all indicator types and their configurations.

// Trend indicators
pub use crate::trend::{
    BollingerBands, BollingerConfig, BollingerSeries,
    Ema, EmaConfig,
    Kama, KamaConfig,
    ParabolicSar, SarConfig,
    Sma, SmaConfig,
};

// Oscillator indicators
pub use crate::oscillator::{
    Atr, AtrConfig,
    Cci, CciConfig,
    Kdj, KdjConfig, KdjSeries,
    Macd, MacdConfig, MacdSeries,
    Obv, ObvConfig,
    Rsi, RsiConfig,
    WilliamsR, WilliamsRConfig,
};
