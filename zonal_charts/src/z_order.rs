// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `zonal_core` marks carry an explicit `z_index` for render ordering. The
//! chart layer sets z-indexes consistently so callers don't have to hand-tune
//! paint order per chart.
//!
//! These values are intentionally coarse. Renderers should sort by
//! `(z_index, MarkId)` for a deterministic tie-break.

/// Stroked series marks (lines).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;
