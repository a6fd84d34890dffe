// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive temperature-vs-latitude chart.
//!
//! This crate wires the engine crates into a working chart:
//! - [`DatasetStore`] loads a `month,lat,tas` table once and answers
//!   month-keyed queries over the immutable records.
//! - [`MonthSelector`] is the seam for interchangeable month controls
//!   (dropdown, slider); both reduce to "emit the newly selected month".
//! - [`ChartController`] owns the scene and is the single mutating entry
//!   point: `redraw(month)` refits the temperature scale, regenerates guide
//!   and series marks, reconciles, and schedules transitions.
//!
//! Initialization order is explicit: load the dataset, build a selector from
//! its months, construct the controller, then perform the first redraw. A
//! failed load is fatal — no chart object exists to redraw.

mod controller;
mod dataset;
mod selector;
mod tooltip;

#[cfg(test)]
mod scenario_tests;

pub use controller::{ChartController, ChartGeometry, Margins, ViewState};
pub use dataset::{DatasetError, DatasetStore, MonthKey, Record};
pub use selector::{MonthDropdown, MonthSelector, MonthSlider, SelectorError};
pub use tooltip::Tooltip;
