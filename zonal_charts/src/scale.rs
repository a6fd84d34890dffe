// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales.
//!
//! Two scales drive the chart: a fixed one for the independent axis
//! (latitude) and a dynamic one for the dependent axis (temperature), refit
//! from the visible subset on every redraw via [`ScaleLinear::fit`].

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Fits a scale to a data extent, rounding the domain outward to nice
    /// tick boundaries.
    ///
    /// Niceing only widens: the returned domain always contains `extent`.
    /// A degenerate extent (`min == max`) is padded by one unit on each side
    /// before niceing so the mapping never divides by zero; an absent extent
    /// (empty subset) falls back to a unit domain around zero.
    pub fn fit(extent: Option<(f64, f64)>, range: (f64, f64), tick_count: usize) -> Self {
        let Some((mut min, mut max)) = extent else {
            return Self::new((-1.0, 1.0), range);
        };
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        let step = nice_step((max - min) / tick_count.max(1) as f64);
        if step > 0.0 {
            min = (min / step).floor() * step;
            max = (max / step).ceil() * step;
        }
        Self::new((min, max), range)
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (y - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns the tick step used by [`ScaleLinear::ticks`] for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        nice_step((max - min) / count.max(1) as f64)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step = nice_step(span / count.max(1) as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Ticks stay inside the domain; fitting widens the domain, not the ticks.
    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Rounds a raw step to the nearest 1/2/5 × 10^k value.
fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Infers a `(min, max)` extent from numeric values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are
/// present.
pub fn extent_of(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
