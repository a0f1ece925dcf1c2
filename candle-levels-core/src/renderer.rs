//! The level renderer: per-bar clear-then-redraw lifecycle.

use crate::chart::{ChartSink, LineStyle};
use crate::config::LevelConfig;
use crate::domain::{CandleSeries, ColorPalette};
use crate::levels::{level_price, percentage, LevelSpec};
use log::{debug, trace};

/// Computes level prices for a look-back candle and keeps the drawn chart
/// objects in sync with them.
///
/// Drawn state is cleared and rebuilt wholesale on every qualifying update:
/// after a pass, the objects on the chart are exactly the current levels
/// evaluated against the current target candle. Nothing is validated about
/// the candle geometry — an inverted or zero range draws degenerate lines.
#[derive(Debug)]
pub struct LevelRenderer {
    levels: LevelSpec,
    palette: ColorPalette,
    look_back: usize,
    show_level_text: bool,
    line_thickness: u8,
    line_style: LineStyle,
    line_names: Vec<String>,
    label_names: Vec<String>,
    last_processed_index: Option<usize>,
}

impl LevelRenderer {
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            levels: LevelSpec::parse(&config.custom_levels),
            palette: ColorPalette::new(config.level_colors),
            look_back: config.look_back,
            show_level_text: config.show_level_text,
            line_thickness: config.line_thickness,
            line_style: config.line_style,
            line_names: Vec::new(),
            label_names: Vec::new(),
            last_processed_index: None,
        }
    }

    /// Parsed level fractions, ascending.
    pub fn levels(&self) -> &LevelSpec {
        &self.levels
    }

    /// Index handled by the most recent non-guarded update.
    pub fn last_processed_index(&self) -> Option<usize> {
        self.last_processed_index
    }

    /// Per-bar update hook, invoked by the host once per bar-stream event.
    ///
    /// No-op when there is not enough history for the look-back, or when
    /// `index` was already processed — hosts re-deliver the same index for
    /// intra-bar tick updates before the bar closes. The guard does not
    /// defend against out-of-order delivery; the host contract is
    /// non-decreasing indices.
    pub fn calculate(
        &mut self,
        bars: &CandleSeries,
        index: usize,
        chart: &mut impl ChartSink,
    ) {
        if index < self.look_back || self.last_processed_index == Some(index) {
            trace!("skipping update for index {index}");
            return;
        }
        self.last_processed_index = Some(index);

        let target = index - self.look_back;
        // target + 1 <= index, so both candles exist in any series the host
        // has actually delivered `index` for. A shorter series clears and
        // draws nothing.
        let (Some(candle), Some(next)) = (bars.get(target), bars.get(target + 1)) else {
            self.clear_all(chart);
            return;
        };

        self.clear_all(chart);
        debug!(
            "redraw: target={target} low={} range={} levels={}",
            candle.low,
            candle.range(),
            self.levels.len()
        );

        for (i, &fraction) in self.levels.fractions().iter().enumerate() {
            let price = level_price(candle.low, candle.high, fraction);
            let color = self.palette.color_for(i);

            let line_name = format!("Level_{i}");
            chart.draw_trend_line(
                &line_name,
                candle.open_time,
                price,
                next.open_time,
                price,
                color,
                self.line_thickness,
                self.line_style,
            );
            self.line_names.push(line_name);

            if self.show_level_text {
                let label_name = format!("LevelText_{i}");
                let text = format!("{}%", percentage(fraction));
                chart.draw_text(&label_name, &text, next.open_time, price, color);
                self.label_names.push(label_name);
            }
        }
    }

    /// Removes every previously drawn object (lines, then labels) and
    /// empties both handle lists.
    pub fn clear_all(&mut self, chart: &mut impl ChartSink) {
        for name in self.line_names.drain(..) {
            chart.remove_object(&name);
        }
        for name in self.label_names.drain(..) {
            chart.remove_object(&name);
        }
    }
}
