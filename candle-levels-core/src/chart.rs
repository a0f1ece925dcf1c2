//! Chart drawing surface — the seam between the renderer and the host
//! platform.
//!
//! The host owns the real chart; this crate only needs three operations from
//! it. `RecordingChart` is the in-repo implementation used by tests and by
//! the replay driver.

use crate::domain::Color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Line style forwarded verbatim to the host drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    DotsRare,
    #[default]
    DotsVeryRare,
}

/// Host chart surface.
///
/// All calls are infallible by contract: the host either performs the
/// operation or ignores it (removing an unknown name is a no-op). Objects are
/// identified by name, and drawing with an existing name replaces the
/// previous object.
pub trait ChartSink {
    /// Draw (or replace) a trend line between two time/price anchor points.
    #[allow(clippy::too_many_arguments)]
    fn draw_trend_line(
        &mut self,
        name: &str,
        start: DateTime<Utc>,
        y0: f64,
        end: DateTime<Utc>,
        y1: f64,
        color: Color,
        thickness: u8,
        style: LineStyle,
    );

    /// Draw (or replace) a text label anchored at a time/price point.
    fn draw_text(&mut self, name: &str, text: &str, at: DateTime<Utc>, y: f64, color: Color);

    /// Remove a named object. Unknown names are ignored.
    fn remove_object(&mut self, name: &str);
}

/// A drawn object as recorded by [`RecordingChart`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartObject {
    TrendLine {
        start: DateTime<Utc>,
        y0: f64,
        end: DateTime<Utc>,
        y1: f64,
        color: Color,
        thickness: u8,
        style: LineStyle,
    },
    Text {
        text: String,
        at: DateTime<Utc>,
        y: f64,
        color: Color,
    },
}

/// In-memory chart: records the currently-live objects by name.
///
/// A `BTreeMap` keeps iteration order stable so printed and asserted output
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingChart {
    objects: BTreeMap<String, ChartObject>,
}

impl RecordingChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, name: &str) -> Option<&ChartObject> {
        self.objects.get(name)
    }

    /// Live objects in name order.
    pub fn objects(&self) -> impl Iterator<Item = (&str, &ChartObject)> {
        self.objects.iter().map(|(name, obj)| (name.as_str(), obj))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ChartSink for RecordingChart {
    #[allow(clippy::too_many_arguments)]
    fn draw_trend_line(
        &mut self,
        name: &str,
        start: DateTime<Utc>,
        y0: f64,
        end: DateTime<Utc>,
        y1: f64,
        color: Color,
        thickness: u8,
        style: LineStyle,
    ) {
        self.objects.insert(
            name.to_string(),
            ChartObject::TrendLine {
                start,
                y0,
                end,
                y1,
                color,
                thickness,
                style,
            },
        );
    }

    fn draw_text(&mut self, name: &str, text: &str, at: DateTime<Utc>, y: f64, color: Color) {
        self.objects.insert(
            name.to_string(),
            ChartObject::Text {
                text: text.to_string(),
                at,
                y,
                color,
            },
        );
    }

    fn remove_object(&mut self, name: &str) {
        self.objects.remove(name);
    }
}
