//! Trend indicators.
//!
//! Moving averages and the overlays built on them, drawn on the price pane.

mod bollinger;
mod ema;
mod kama;
mod sar;
mod sma;

pub use bollinger::{bollinger, BollingerBands, BollingerConfig, BollingerSeries};
pub use ema::{ema, Ema, EmaConfig};
pub use kama::{kama, Kama, KamaConfig};
pub use sar::{parabolic_sar, ParabolicSar, SarConfig};
pub use sma::{sma, Sma, SmaConfig};
