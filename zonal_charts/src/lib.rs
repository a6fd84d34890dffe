// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `zonal_core`.
//!
//! This crate is a small, reusable layer above `zonal_core`:
//! - **Scales** map data values into screen coordinates, including the
//!   per-redraw "fit" that rounds a data extent outward to nice tick
//!   boundaries.
//! - **Guides and series** (axes, circle series, lines) are built by
//!   generating `zonal_core::Mark`s with stable identities, so a scene can
//!   reconcile and animate them incrementally.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

#![no_std]

extern crate alloc;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod line_mark;
mod month;
mod point_mark;
mod scale;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle, format_tick};
pub use line_mark::LineMarkSpec;
pub use month::month_name;
pub use point_mark::CircleSeriesSpec;
pub use scale::{ScaleLinear, extent_of};
pub use z_order::*;
