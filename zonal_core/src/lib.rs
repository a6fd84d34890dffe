// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-scene runtime for incremental charts.
//!
//! This crate holds the stateful half of a chart:
//! - **Marks** are small value objects (circle, polyline, text) carrying their
//!   *current* attribute values — a retained scene-graph model rather than a
//!   declarative attribute chain.
//! - The [`Scene`] reconciles a freshly generated mark set against the live one
//!   by stable identity ([`MarkId`]), yielding enter/update/exit diffs.
//! - [`Transitions`] advances mark attributes toward per-mark targets over
//!   elapsed time. Scheduling over an in-flight tween retargets it from the
//!   currently interpolated value (last-writer-wins, nothing is queued).
//!
//! What changed (the diff) and how it transitions (the tween) are deliberately
//! decoupled; callers decide which diffs animate.

#![no_std]

extern crate alloc;

mod mark;
mod scene;
mod transition;

pub use mark::{
    CircleMark, Mark, MarkId, MarkPayload, PathMark, PathPoints, TextAnchor, TextBaseline,
    TextMark,
};
pub use scene::{MarkDiff, MarkNode, Scene};
pub use transition::{Easing, Transitions};
