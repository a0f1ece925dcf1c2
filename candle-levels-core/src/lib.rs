//! Candle Levels core — domain types, level parsing, chart abstraction, renderer.
//!
//! The indicator draws horizontal retracement lines inside the high/low range
//! of a past candle:
//! - Domain types (candles, indexable series, colors, the five-slot palette)
//! - Level-string parsing and price arithmetic
//! - `ChartSink`, the seam to the host's drawing surface, plus an in-memory
//!   recording implementation for tests and replay tooling
//! - `LevelRenderer`, the per-bar clear-then-redraw lifecycle

pub mod chart;
pub mod config;
pub mod domain;
pub mod levels;
pub mod renderer;

pub use chart::{ChartSink, LineStyle, RecordingChart};
pub use config::{ConfigError, LevelConfig};
pub use domain::{Candle, CandleSeries, Color, ColorPalette};
pub use levels::LevelSpec;
pub use renderer::LevelRenderer;
