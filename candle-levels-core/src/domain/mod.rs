//! Domain types: candles, the indexable series, and chart colors.

pub mod candle;
pub mod color;

pub use candle::{Candle, CandleSeries};
pub use color::{Color, ColorPalette, ParseColorError};
