// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identity and retained payloads.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use smallvec::SmallVec;

/// Stable identity for a mark.
///
/// Reconciliation matches old and new marks by this id, never by position in
/// the generated list, so a datum keeps its visual object across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value (singleton marks, guide elements).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id from a group and a per-datum key.
    ///
    /// The group separates mark families (series circles, axis ticks, labels)
    /// that key on overlapping value spaces. The mix is a fixed avalanche
    /// permutation, so ids are deterministic across runs.
    pub const fn for_key(group: u64, key: u64) -> Self {
        Self(mix(group.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(key)))
    }
}

/// `splitmix64` finalizer.
const fn mix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Inline-friendly polyline storage.
///
/// Guide marks (ticks, domain lines) are two-point segments; only series
/// lines spill to the heap.
pub type PathPoints = SmallVec<[Point; 4]>;

/// A circle glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// A stroked polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Vertices in scene coordinates, in draw order.
    pub points: PathPoints,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    Start,
    /// Anchor at the center of the text.
    Middle,
    /// Anchor at the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Center the text vertically on the anchor.
    Middle,
    /// Conventional alphabetic baseline.
    Alphabetic,
    /// Hang the text below the anchor.
    Hanging,
}

/// A text label (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The retained attribute state of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A circle glyph.
    Circle(CircleMark),
    /// A stroked polyline.
    Path(PathMark),
    /// A text label.
    Text(TextMark),
}

impl MarkPayload {
    /// Interpolates between two payload states at parameter `t` in `[0, 1]`.
    ///
    /// Positions and sizes lerp; paints and text content snap to the target at
    /// `t > 0`. Polylines lerp pointwise; when vertex counts differ, the
    /// shorter endpoint is padded with its trailing vertex so the path still
    /// animates. An empty polyline endpoint snaps. Mismatched payload kinds
    /// snap to the target.
    pub fn interp(from: &Self, to: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return to.clone();
        }
        match (from, to) {
            (Self::Circle(a), Self::Circle(b)) => Self::Circle(CircleMark {
                center: lerp_point(a.center, b.center, t),
                radius: lerp(a.radius, b.radius, t),
                fill: b.fill.clone(),
            }),
            (Self::Path(a), Self::Path(b)) => Self::Path(PathMark {
                points: lerp_path(&a.points, &b.points, t),
                stroke: b.stroke.clone(),
                stroke_width: lerp(a.stroke_width, b.stroke_width, t),
            }),
            (Self::Text(a), Self::Text(b)) => Self::Text(TextMark {
                pos: lerp_point(a.pos, b.pos, t),
                font_size: lerp(a.font_size, b.font_size, t),
                angle: lerp(a.angle, b.angle, t),
                ..b.clone()
            }),
            _ => to.clone(),
        }
    }

    /// Returns whether `pos` hits this mark.
    ///
    /// Only circles participate in hit-testing; guide paths and labels are
    /// inert. `slop` widens the hit radius for comfortable pointing.
    pub fn hit(&self, pos: Point, slop: f64) -> bool {
        match self {
            Self::Circle(c) => {
                let dx = pos.x - c.center.x;
                let dy = pos.y - c.center.y;
                let r = c.radius + slop;
                dx * dx + dy * dy <= r * r
            }
            Self::Path(_) | Self::Text(_) => false,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Pointwise polyline lerp; the shorter side repeats its last vertex.
fn lerp_path(a: &PathPoints, b: &PathPoints, t: f64) -> PathPoints {
    if a.is_empty() || b.is_empty() {
        return b.clone();
    }
    let n = a.len().max(b.len());
    let mut points = PathPoints::with_capacity(n);
    for i in 0..n {
        let p = a[i.min(a.len() - 1)];
        let q = b[i.min(b.len() - 1)];
        points.push(lerp_point(p, q, t));
    }
    points
}

/// A mark: identity, render order, and retained payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Attribute state.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark with the default z-index of 0.
    pub fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            payload,
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use peniko::Color;
    use smallvec::smallvec;

    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> MarkPayload {
        MarkPayload::Circle(CircleMark {
            center: Point::new(x, y),
            radius: r,
            fill: Brush::Solid(Color::from_rgba8(255, 165, 0, 255)),
        })
    }

    #[test]
    fn for_key_separates_groups() {
        let key = (-90.0_f64).to_bits();
        assert_ne!(MarkId::for_key(1, key), MarkId::for_key(2, key));
        assert_eq!(MarkId::for_key(1, key), MarkId::for_key(1, key));
    }

    #[test]
    fn circle_interp_moves_center_linearly() {
        let a = circle(0.0, 0.0, 4.0);
        let b = circle(10.0, 20.0, 4.0);
        let MarkPayload::Circle(mid) = MarkPayload::interp(&a, &b, 0.5) else {
            panic!("kind preserved");
        };
        assert_eq!(mid.center, Point::new(5.0, 10.0));
        assert_eq!(mid.radius, 4.0);
    }

    fn path(points: PathPoints) -> MarkPayload {
        MarkPayload::Path(PathMark {
            points,
            stroke: Brush::default(),
            stroke_width: 2.0,
        })
    }

    #[test]
    fn path_interp_pads_shorter_side_with_trailing_vertex() {
        let short = path(smallvec![Point::ZERO, Point::new(1.0, 0.0)]);
        let long = path(smallvec![
            Point::ZERO,
            Point::new(1.0, 0.0),
            Point::new(2.0, 5.0),
        ]);

        // Growing: the virtual third vertex starts at (1, 0) and heads out.
        let MarkPayload::Path(mid) = MarkPayload::interp(&short, &long, 0.5) else {
            panic!("kind preserved");
        };
        assert_eq!(mid.points.len(), 3);
        assert_eq!(mid.points[2], Point::new(1.5, 2.5));

        // Shrinking: the doomed vertex converges onto the target's last one.
        let MarkPayload::Path(mid) = MarkPayload::interp(&long, &short, 0.5) else {
            panic!("kind preserved");
        };
        assert_eq!(mid.points.len(), 3);
        assert_eq!(mid.points[2], Point::new(1.5, 2.5));
        assert_eq!(MarkPayload::interp(&long, &short, 1.0), short);
    }

    #[test]
    fn path_interp_snaps_through_empty_endpoints() {
        let some = path(smallvec![Point::ZERO, Point::new(1.0, 0.0)]);
        let none = path(PathPoints::new());
        assert_eq!(MarkPayload::interp(&some, &none, 0.25), none);
        assert_eq!(MarkPayload::interp(&none, &some, 0.25), some);
    }

    #[test]
    fn kind_mismatch_snaps_to_target() {
        let a = circle(0.0, 0.0, 4.0);
        let b = MarkPayload::Text(TextMark {
            pos: Point::ZERO,
            text: "x".to_string(),
            font_size: 10.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
        });
        assert_eq!(MarkPayload::interp(&a, &b, 0.1), b);
    }

    #[test]
    fn circle_hit_uses_radius_plus_slop() {
        let c = circle(10.0, 10.0, 4.0);
        assert!(c.hit(Point::new(13.0, 10.0), 0.0));
        assert!(!c.hit(Point::new(15.0, 10.0), 0.0));
        assert!(c.hit(Point::new(15.0, 10.0), 2.0));
    }
}
