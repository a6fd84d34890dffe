// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle series generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use zonal_core::{CircleMark, Mark, MarkId, MarkPayload};

use crate::scale::ScaleLinear;
use crate::z_order;

/// A circle-per-datum series.
///
/// Mark identity is derived from `(id_group, x-value bits)`, so a datum whose
/// x value reappears in a later subset keeps its visual object across
/// redraws — the identity key is the x value, not the subset it came from.
#[derive(Clone, Debug)]
pub struct CircleSeriesSpec {
    /// Identity namespace for this series.
    pub id_group: u64,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Circle radius in scene coordinates.
    pub radius: f64,
    /// Fill paint for the circles.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl CircleSeriesSpec {
    /// Creates a circle series spec with a radius of 4 and a default fill.
    pub fn new(id_group: u64, x_scale: ScaleLinear, y_scale: ScaleLinear) -> Self {
        Self {
            id_group,
            x_scale,
            y_scale,
            radius: 4.0,
            fill: Brush::default(),
            z_index: z_order::SERIES_POINTS,
        }
    }

    /// Sets the circle radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The stable id for the datum with x value `x`.
    pub fn id_for(&self, x: f64) -> MarkId {
        MarkId::for_key(self.id_group, x.to_bits())
    }

    /// Generates one circle mark per `(x, y)` datum.
    ///
    /// Both scales must already be fitted; positions are computed eagerly so
    /// every generated mark reads the same published scales.
    pub fn marks(&self, data: impl IntoIterator<Item = (f64, f64)>) -> Vec<Mark> {
        data.into_iter()
            .map(|(x, y)| {
                Mark::new(
                    self.id_for(x),
                    MarkPayload::Circle(CircleMark {
                        center: Point::new(self.x_scale.map(x), self.y_scale.map(y)),
                        radius: self.radius,
                        fill: self.fill.clone(),
                    }),
                )
                .with_z_index(self.z_index)
            })
            .collect()
    }
}
