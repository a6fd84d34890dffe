// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use zonal_core::{Mark, MarkId, MarkPayload, PathMark, PathPoints};

use crate::axis::StrokeStyle;
use crate::scale::ScaleLinear;
use crate::z_order;

/// A single polyline through a series, ordered by x value.
///
/// Unlike the circle series, the line is not reconciled per datum: it keeps
/// one stable id and its whole geometry is regenerated every redraw.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable id for the mark emitted by this spec.
    pub id: MarkId,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark spec with a black stroke at width 1.
    pub fn new(id: MarkId, x_scale: ScaleLinear, y_scale: ScaleLinear) -> Self {
        Self {
            id,
            x_scale,
            y_scale,
            stroke: StrokeStyle::default(),
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the line mark through `(x, y)` data, sorted by x.
    ///
    /// The input order does not matter; the path always runs left to right.
    /// An empty series yields an empty (invisible) polyline rather than no
    /// mark, so the line's identity persists through empty subsets.
    pub fn mark(&self, data: impl IntoIterator<Item = (f64, f64)>) -> Mark {
        let mut data: Vec<(f64, f64)> = data.into_iter().collect();
        data.sort_by(|a, b| a.0.total_cmp(&b.0));

        let points: PathPoints = data
            .iter()
            .map(|&(x, y)| Point::new(self.x_scale.map(x), self.y_scale.map(y)))
            .collect();

        Mark::new(
            self.id,
            MarkPayload::Path(PathMark {
                points,
                stroke: self.stroke.brush.clone(),
                stroke_width: self.stroke.stroke_width,
            }),
        )
        .with_z_index(self.z_index)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn points_are_sorted_by_x() {
        let spec = LineMarkSpec::new(
            MarkId::from_raw(1),
            ScaleLinear::new((-90.0, 90.0), (0.0, 720.0)),
            ScaleLinear::new((0.0, 10.0), (430.0, 0.0)),
        );
        let mark = spec.mark(vec![(90.0, 0.0), (-90.0, 10.0), (0.0, 5.0)]);
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("line emits a path mark");
        };
        assert_eq!(p.points.len(), 3);
        assert!(p.points[0].x < p.points[1].x && p.points[1].x < p.points[2].x);
    }

    #[test]
    fn empty_series_keeps_the_mark() {
        let spec = LineMarkSpec::new(
            MarkId::from_raw(1),
            ScaleLinear::new((-90.0, 90.0), (0.0, 720.0)),
            ScaleLinear::new((0.0, 10.0), (430.0, 0.0)),
        );
        let mark = spec.mark(Vec::new());
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("line emits a path mark");
        };
        assert!(p.points.is_empty());
    }
}
