//! Property tests for level parsing and the redraw lifecycle.
//!
//! Uses proptest to verify:
//! 1. Parsing is total — arbitrary input never panics and always yields an
//!    ascending fraction list.
//! 2. Numeric-only input loses no tokens.
//! 3. After any host-style index walk, the chart holds exactly one object set
//!    (or none, if no index ever cleared the guard).

use candle_levels_core::chart::RecordingChart;
use candle_levels_core::config::LevelConfig;
use candle_levels_core::domain::{Candle, CandleSeries};
use candle_levels_core::levels::LevelSpec;
use candle_levels_core::renderer::LevelRenderer;
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use std::cmp::Ordering;

fn synthetic_series(n: usize) -> CandleSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut series = CandleSeries::new();
    for i in 0..n {
        let low = 100.0 + (i % 7) as f64;
        series.push(Candle {
            open_time: start + Duration::hours(i as i64),
            open: low,
            high: low + 5.0,
            low,
            close: low + 5.0,
        });
    }
    series
}

proptest! {
    /// Parsing never panics and the result is ascending under total order.
    #[test]
    fn parse_is_total_and_sorted(input in ".{0,64}") {
        let spec = LevelSpec::parse(&input);
        for pair in spec.fractions().windows(2) {
            prop_assert_ne!(pair[0].total_cmp(&pair[1]), Ordering::Greater);
        }
    }

    /// Every numeric token survives, divided by 100.
    #[test]
    fn numeric_tokens_are_all_kept(values in prop::collection::vec(-1000.0..1000.0f64, 0..8)) {
        let input = values
            .iter()
            .map(|v| format!("{v}"))
            .collect::<Vec<_>>()
            .join(",");
        let spec = LevelSpec::parse(&input);
        prop_assert_eq!(spec.len(), values.len());

        let mut expected: Vec<f64> = values.iter().map(|v| v / 100.0).collect();
        expected.sort_by(f64::total_cmp);
        for (got, want) in spec.fractions().iter().zip(&expected) {
            prop_assert!((got - want).abs() < 1e-12);
        }
    }

    /// For any non-decreasing index walk, the chart ends with exactly one
    /// full object set once any index clears the guard, and stays empty
    /// otherwise. Names are reused across passes, so stale objects would
    /// show up as a count mismatch.
    #[test]
    fn index_walks_leave_exactly_one_object_set(
        steps in prop::collection::vec(0usize..3, 1..20),
        look_back in 1usize..4,
    ) {
        let bars = synthetic_series(64);
        let config = LevelConfig {
            look_back,
            ..LevelConfig::default()
        };
        let mut renderer = LevelRenderer::new(&config);
        let mut chart = RecordingChart::new();

        let mut index = 0usize;
        let mut drew = false;
        for step in steps {
            renderer.calculate(&bars, index, &mut chart);
            if index >= look_back {
                drew = true;
            }
            index += step;
        }

        let expected = if drew { 10 } else { 0 };
        prop_assert_eq!(chart.len(), expected);
    }
}
