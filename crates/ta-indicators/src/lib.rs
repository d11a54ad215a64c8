//! # kline-ta-indicators
//!
//! Technical indicators for candlestick charts.
//!
//! Every indicator is available two ways: as a free function over plain
//! slices (`sma(&closes, 20)`) and as a configured [`Indicator`] that reads
//! the columns it needs from a [`PriceSeries`]. Outputs always have the
//! input's length, with NaN before the warm-up.
//!
//! - **Trend**: SMA, EMA, Bollinger Bands, Parabolic SAR, KAMA
//! - **Oscillator**: MACD, RSI, KDJ, Williams %R, CCI, OBV, ATR
//!
//! # Example
//!
//! ```
//! use kline_ta_core::prelude::*;
//! use kline_ta_indicators::prelude::*;
//!
//! let candles: PriceSeries<f64> = (0..30)
//!     .map(|i| {
//!         let c = 100.0 + f64::from(i);
//!         PricePoint::new(i64::from(i) * 60_000, c, c + 1.0, c - 1.0, c, 1000.0)
//!     })
//!     .collect();
//!
//! let rsi = Rsi::<f64>::new(RsiConfig::default());
//! let values = rsi.calculate(&candles);
//! assert_eq!(values.len(), 30);
//! assert_eq!(values.first_valid_index(), Some(rsi.min_periods() - 1));
//! ```
//!
//! [`Indicator`]: kline_ta_core::Indicator
//! [`PriceSeries`]: kline_ta_core::PriceSeries

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod oscillator;
pub mod trend;

pub mod prelude;

pub use prelude::*;
