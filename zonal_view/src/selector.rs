// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interchangeable month selectors.
//!
//! A selector widget owns the selected month and normalizes raw control
//! input (a clicked list entry, a dragged slider position) into month keys.
//! The chart depends only on [`MonthSelector`]; the host event loop calls
//! [`MonthSelector::select`] and forwards any returned key to
//! `ChartController::redraw`.

use zonal_charts::month_name;

use crate::dataset::MonthKey;

/// Errors from building a selector.
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// The dataset yielded no months to select from.
    #[error("no months to select from")]
    NoMonths,
}

/// The capability every month control provides.
pub trait MonthSelector {
    /// The currently selected month.
    fn current(&self) -> MonthKey;

    /// Feeds a raw control value in; returns the new month only if the
    /// selection changed.
    fn select(&mut self, raw: i64) -> Option<MonthKey>;

    /// Human-readable label for the current month.
    fn label(&self) -> &'static str {
        month_name(self.current()).unwrap_or("?")
    }
}

/// Variant A: a discrete list with one entry per distinct month.
#[derive(Clone, Debug)]
pub struct MonthDropdown {
    months: Vec<MonthKey>,
    index: usize,
}

impl MonthDropdown {
    /// Builds a dropdown over the distinct months, selecting the first.
    pub fn new(months: &[MonthKey]) -> Result<Self, SelectorError> {
        if months.is_empty() {
            return Err(SelectorError::NoMonths);
        }
        Ok(Self {
            months: months.to_vec(),
            index: 0,
        })
    }

    /// The list entries, as `(month, label)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (MonthKey, &'static str)> + '_ {
        self.months
            .iter()
            .map(|&m| (m, month_name(m).unwrap_or("?")))
    }
}

impl MonthSelector for MonthDropdown {
    fn current(&self) -> MonthKey {
        self.months[self.index]
    }

    fn select(&mut self, raw: i64) -> Option<MonthKey> {
        let index = self
            .months
            .iter()
            .position(|&m| i64::from(m) == raw)?;
        if index == self.index {
            return None;
        }
        self.index = index;
        Some(self.current())
    }
}

/// Variant B: a continuous integer slider with a tick per known month.
///
/// The slider spans `[min(months), max(months)]` with step 1; values are
/// clamped, so dragging past the ends pins to the boundary months.
#[derive(Clone, Debug)]
pub struct MonthSlider {
    min: MonthKey,
    max: MonthKey,
    value: MonthKey,
    months: Vec<MonthKey>,
}

impl MonthSlider {
    /// Builds a slider over the distinct months, positioned on the first.
    pub fn new(months: &[MonthKey]) -> Result<Self, SelectorError> {
        let (Some(&min), Some(&max)) = (months.first(), months.last()) else {
            return Err(SelectorError::NoMonths);
        };
        Ok(Self {
            min,
            max,
            value: min,
            months: months.to_vec(),
        })
    }

    /// The slider bounds.
    pub fn range(&self) -> (MonthKey, MonthKey) {
        (self.min, self.max)
    }

    /// Tick entries, as `(month, label)` pairs for every known month.
    pub fn ticks(&self) -> impl Iterator<Item = (MonthKey, &'static str)> + '_ {
        self.months
            .iter()
            .map(|&m| (m, month_name(m).unwrap_or("?")))
    }
}

impl MonthSelector for MonthSlider {
    fn current(&self) -> MonthKey {
        self.value
    }

    fn select(&mut self, raw: i64) -> Option<MonthKey> {
        let clamped = raw.clamp(i64::from(self.min), i64::from(self.max));
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped into the u32 month range"
        )]
        let value = clamped as MonthKey;
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_starts_on_first_month() {
        let d = MonthDropdown::new(&[1, 2, 6]).unwrap();
        assert_eq!(d.current(), 1);
        assert_eq!(d.label(), "January");
    }

    #[test]
    fn dropdown_ignores_unknown_and_unchanged_values() {
        let mut d = MonthDropdown::new(&[1, 2, 6]).unwrap();
        assert_eq!(d.select(6), Some(6));
        assert_eq!(d.select(6), None, "reselecting is not a change");
        assert_eq!(d.select(4), None, "month 4 is not in the list");
        assert_eq!(d.current(), 6);
    }

    #[test]
    fn slider_clamps_and_steps_by_one() {
        let mut s = MonthSlider::new(&[3, 4, 5, 6]).unwrap();
        assert_eq!(s.range(), (3, 6));
        assert_eq!(s.current(), 3);
        assert_eq!(s.select(99), Some(6));
        assert_eq!(s.select(-5), Some(3));
        assert_eq!(s.select(3), None);
        assert_eq!(s.label(), "March");
    }

    #[test]
    fn slider_ticks_label_every_known_month() {
        let s = MonthSlider::new(&[1, 2]).unwrap();
        let ticks: Vec<_> = s.ticks().collect();
        assert_eq!(ticks, vec![(1, "January"), (2, "February")]);
    }

    #[test]
    fn empty_months_fail_construction() {
        assert!(MonthDropdown::new(&[]).is_err());
        assert!(MonthSlider::new(&[]).is_err());
    }
}
