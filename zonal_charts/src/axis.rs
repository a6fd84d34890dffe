// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is regenerated from its scale on every redraw. Tick segments and
//! labels are keyed by tick *value*, so reconciliation matches a persisting
//! tick across domain changes and the transition layer slides it to its new
//! position; ticks whose value left the domain exit, new values enter.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::smallvec;
use zonal_core::{Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};

use crate::scale::ScaleLinear;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule: rule.clone(),
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush,
            title_font_size: 11.0,
        }
    }
}

/// Axis placement relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// An axis specification for a continuous linear scale.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark derives a deterministic id from
    /// this base and its role/tick value.
    pub id_base: u64,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from the plot edge to the title anchor.
    pub title_offset: f64,
}

// Role discriminants folded into mark ids so an axis's families never collide.
const ROLE_DOMAIN: u64 = 0;
const ROLE_TICK: u64 = 1;
const ROLE_LABEL: u64 = 2;
const ROLE_TITLE: u64 = 3;

impl AxisSpec {
    /// Creates an axis specification with sensible defaults.
    pub fn new(id_base: u64, orient: AxisOrient) -> Self {
        Self {
            id_base,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            title: None,
            title_offset: 40.0,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64) -> Self {
        Self::new(id_base, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64) -> Self {
        Self::new(id_base, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title offset in scene coordinates.
    pub fn with_title_offset(mut self, title_offset: f64) -> Self {
        self.title_offset = title_offset;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// The id of the tick segment for a tick value.
    pub fn tick_id(&self, value: f64) -> MarkId {
        MarkId::for_key(self.group(ROLE_TICK), value.to_bits())
    }

    /// Generates all marks for this axis against a fitted scale.
    ///
    /// The scale must already be fitted to the current subset; the axis never
    /// refits it.
    pub fn marks(&self, scale: &ScaleLinear, plot: Rect) -> Vec<Mark> {
        let ticks = scale.ticks(self.tick_count);
        let step = scale.tick_step(self.tick_count);
        let rule = &self.style.rule;

        let mut out = Vec::with_capacity(2 * ticks.len() + 2);
        out.push(self.domain_mark(plot, rule));

        for &value in &ticks {
            let along = scale.map(value);
            out.push(self.tick_mark(value, along, plot, rule));
            out.push(self.label_mark(value, along, plot, step));
        }

        if let Some(title) = &self.title {
            out.push(self.title_mark(title, plot));
        }
        out
    }

    fn group(&self, role: u64) -> u64 {
        self.id_base.wrapping_mul(8).wrapping_add(role)
    }

    fn domain_mark(&self, plot: Rect, rule: &StrokeStyle) -> Mark {
        let (p0, p1) = match self.orient {
            AxisOrient::Bottom => (Point::new(plot.x0, plot.y1), Point::new(plot.x1, plot.y1)),
            AxisOrient::Left => (Point::new(plot.x0, plot.y0), Point::new(plot.x0, plot.y1)),
        };
        Mark::new(
            MarkId::for_key(self.group(ROLE_DOMAIN), 0),
            MarkPayload::Path(PathMark {
                points: smallvec![p0, p1],
                stroke: rule.brush.clone(),
                stroke_width: rule.stroke_width,
            }),
        )
        .with_z_index(z_order::AXIS_RULES)
    }

    fn tick_mark(&self, value: f64, along: f64, plot: Rect, rule: &StrokeStyle) -> Mark {
        let (p0, p1) = match self.orient {
            AxisOrient::Bottom => (
                Point::new(along, plot.y1),
                Point::new(along, plot.y1 + self.tick_size),
            ),
            AxisOrient::Left => (
                Point::new(plot.x0 - self.tick_size, along),
                Point::new(plot.x0, along),
            ),
        };
        Mark::new(
            self.tick_id(value),
            MarkPayload::Path(PathMark {
                points: smallvec![p0, p1],
                stroke: rule.brush.clone(),
                stroke_width: rule.stroke_width,
            }),
        )
        .with_z_index(z_order::AXIS_RULES)
    }

    fn label_mark(&self, value: f64, along: f64, plot: Rect, step: f64) -> Mark {
        let (pos, anchor, baseline) = match self.orient {
            AxisOrient::Bottom => (
                Point::new(along, plot.y1 + self.tick_size + self.tick_padding),
                TextAnchor::Middle,
                TextBaseline::Hanging,
            ),
            AxisOrient::Left => (
                Point::new(plot.x0 - self.tick_size - self.tick_padding, along),
                TextAnchor::End,
                TextBaseline::Middle,
            ),
        };
        Mark::new(
            MarkId::for_key(self.group(ROLE_LABEL), value.to_bits()),
            MarkPayload::Text(TextMark {
                pos,
                text: format_tick(value, step),
                font_size: self.style.label_font_size,
                angle: 0.0,
                anchor,
                baseline,
                fill: self.style.label_fill.clone(),
            }),
        )
        .with_z_index(z_order::AXIS_LABELS)
    }

    fn title_mark(&self, title: &str, plot: Rect) -> Mark {
        let (pos, angle) = match self.orient {
            AxisOrient::Bottom => (
                Point::new(plot.x0 + plot.width() / 2.0, plot.y1 + self.title_offset),
                0.0,
            ),
            AxisOrient::Left => (
                Point::new(plot.x0 - self.title_offset, plot.y0 + plot.height() / 2.0),
                -90.0,
            ),
        };
        Mark::new(
            MarkId::for_key(self.group(ROLE_TITLE), 0),
            MarkPayload::Text(TextMark {
                pos,
                text: String::from(title),
                font_size: self.style.title_font_size,
                angle,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: self.style.title_fill.clone(),
            }),
        )
        .with_z_index(z_order::AXIS_TITLES)
    }
}

/// Formats a tick value with decimals derived from the tick step.
///
/// Every label on an axis shares the step's precision, so `[0, 0.5, 1]`
/// renders as `0.0 / 0.5 / 1.0` rather than mixing widths.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step <= 0.0 || step >= 1.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped below 7 before the cast"
        )]
        {
            (-step.log10()).ceil().clamp(0.0, 6.0) as usize
        }
    };
    let mut text = alloc::format!("{value:.decimals$}");
    // Normalize "-0" so an axis never shows a signed zero.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    text
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 720.0, 430.0)
    }

    #[test]
    fn bottom_axis_places_ticks_below_plot() {
        let axis = AxisSpec::bottom(1);
        let scale = ScaleLinear::new((-90.0, 90.0), (0.0, 720.0));
        let marks = axis.marks(&scale, plot());

        let tick = marks
            .iter()
            .find(|m| m.id == axis.tick_id(0.0))
            .expect("tick at 0 exists");
        let MarkPayload::Path(p) = &tick.payload else {
            panic!("ticks are path marks");
        };
        assert_eq!(p.points[0], Point::new(360.0, 430.0));
        assert_eq!(p.points[1], Point::new(360.0, 436.0));
    }

    #[test]
    fn tick_ids_are_stable_across_refits() {
        let axis = AxisSpec::left(2);
        let a = ScaleLinear::fit(Some((-40.0, 15.0)), (430.0, 0.0), 10);
        let b = ScaleLinear::fit(Some((-38.0, 20.0)), (430.0, 0.0), 10);
        // A tick value present under both domains keeps its identity.
        assert_eq!(axis.tick_id(-20.0), axis.tick_id(-20.0));
        let ids_a: std::vec::Vec<_> = axis.marks(&a, plot()).iter().map(|m| m.id).collect();
        let ids_b: std::vec::Vec<_> = axis.marks(&b, plot()).iter().map(|m| m.id).collect();
        assert!(ids_b.contains(&axis.tick_id(-20.0)), "shared tick persists");
        assert!(ids_a.contains(&axis.tick_id(-20.0)), "shared tick persists");
    }

    #[test]
    fn roles_do_not_collide() {
        let axis = AxisSpec::bottom(1);
        let scale = ScaleLinear::new((0.0, 10.0), (0.0, 720.0));
        let marks = axis.marks(&scale, plot());
        let mut ids: std::vec::Vec<_> = marks.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), marks.len(), "every axis mark id is unique");
    }

    #[test]
    fn step_precision_formatting() {
        assert_eq!(format_tick(5.0, 5.0), "5");
        assert_eq!(format_tick(-20.0, 10.0), "-20");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(-0.0, 0.5), "0.0");
    }
}
