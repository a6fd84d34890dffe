// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart orchestration.
//!
//! [`ChartController::redraw`] is the only mutating entry point. One call
//! runs the synchronous pipeline — filter, refit the temperature scale,
//! regenerate guide and series marks, reconcile — and schedules transitions
//! for the asynchronous tail. Repeated rapid calls are safe: each one
//! retargets whatever is still in flight, it never queues.

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use peniko::color::palette::css;
use tracing::debug;

use zonal_charts::{
    AxisSpec, CircleSeriesSpec, LineMarkSpec, ScaleLinear, StrokeStyle, extent_of,
};
use zonal_core::{Easing, MarkDiff, MarkId, Scene, Transitions};

use crate::dataset::{DatasetStore, MonthKey, Record};
use crate::tooltip::Tooltip;

/// Duration of axis and mark transitions.
const TRANSITION_MS: f64 = 500.0;

/// Extra hit radius around circles for hover.
const HOVER_SLOP: f64 = 2.0;

/// Approximate tick count for both axes.
const TICK_COUNT: usize = 10;

// Identity namespaces for the mark families this chart generates.
const X_AXIS_ID: u64 = 1;
const Y_AXIS_ID: u64 = 2;
const SERIES_GROUP: u64 = 3;
const LINE_ID: u64 = 0x4c49_4e45;

/// Outer chart margins in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Space above the plot area.
    pub top: f64,
    /// Space right of the plot area.
    pub right: f64,
    /// Space below the plot area (bottom axis and title).
    pub bottom: f64,
    /// Space left of the plot area (left axis and title).
    pub left: f64,
}

/// Overall chart geometry: outer size and margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Outer width in scene coordinates.
    pub width: f64,
    /// Outer height in scene coordinates.
    pub height: f64,
    /// Margins reserved for guides.
    pub margin: Margins,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: Margins {
                top: 20.0,
                right: 30.0,
                bottom: 50.0,
                left: 50.0,
            },
        }
    }
}

impl ChartGeometry {
    /// The plot (data) rectangle inside the margins.
    pub fn plot(&self) -> Rect {
        Rect::new(
            self.margin.left,
            self.margin.top,
            self.width - self.margin.right,
            self.height - self.margin.bottom,
        )
    }
}

/// The per-redraw view state, replaced atomically before any visual change.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// The selected month.
    pub month: MonthKey,
    /// Records visible for the selected month, in dataset order.
    pub subset: Vec<Record>,
    /// The fitted (niced) temperature domain.
    pub temperature_domain: (f64, f64),
}

/// The chart: dataset, scales, retained scene, transitions, tooltip.
#[derive(Debug)]
pub struct ChartController {
    dataset: DatasetStore,
    geometry: ChartGeometry,
    x_scale: ScaleLinear,
    y_scale: ScaleLinear,
    x_axis: AxisSpec,
    y_axis: AxisSpec,
    scene: Scene,
    transitions: Transitions,
    view: Option<ViewState>,
    live_records: HashMap<MarkId, Record>,
    hovered: Option<MarkId>,
    tooltip: Tooltip,
}

impl ChartController {
    /// Builds a chart over a loaded dataset with the default geometry.
    ///
    /// The chart starts empty; callers perform the first redraw with their
    /// selector's initial month. The dataset is loaded (and non-empty) by
    /// construction, so no redraw can precede a successful load.
    pub fn new(dataset: DatasetStore) -> Self {
        Self::with_geometry(dataset, ChartGeometry::default())
    }

    /// Builds a chart with explicit geometry.
    pub fn with_geometry(dataset: DatasetStore, geometry: ChartGeometry) -> Self {
        let plot = geometry.plot();
        let x_scale = ScaleLinear::new((-90.0, 90.0), (plot.x0, plot.x1));
        // Placeholder until the first redraw fits it; published per redraw.
        let y_scale = ScaleLinear::fit(None, (plot.y1, plot.y0), TICK_COUNT);
        Self {
            dataset,
            geometry,
            x_scale,
            y_scale,
            x_axis: AxisSpec::bottom(X_AXIS_ID).with_title("Latitude"),
            y_axis: AxisSpec::left(Y_AXIS_ID).with_title("Surface Temperature (°C)"),
            scene: Scene::new(),
            transitions: Transitions::new(),
            view: None,
            live_records: HashMap::new(),
            hovered: None,
            tooltip: Tooltip::default(),
        }
    }

    /// Redraws the chart for `month`.
    ///
    /// The synchronous portion replaces the view state atomically (subset and
    /// fitted domain together, before any visual mutation), then reconciles:
    /// - entering marks appear directly at their target position,
    /// - persisting marks tween to their new position over 500 ms (a redraw
    ///   mid-flight retargets them),
    /// - exiting marks are removed immediately, their tweens cancelled and
    ///   their hover registrations dropped.
    ///
    /// An unknown month yields an empty subset and an empty series — the
    /// domain fit falls back rather than failing.
    pub fn redraw(&mut self, month: MonthKey) {
        let plot = self.geometry.plot();
        let subset = self.dataset.records_for(month);

        // Fit and publish the temperature scale before any mark position is
        // computed, so axis and series read identical coordinates.
        self.y_scale = ScaleLinear::fit(
            extent_of(subset.iter().map(|r| r.tas)),
            (plot.y1, plot.y0),
            TICK_COUNT,
        );
        self.view = Some(ViewState {
            month,
            subset: subset.clone(),
            temperature_domain: (self.y_scale.domain_min(), self.y_scale.domain_max()),
        });
        debug!(
            month,
            subset = subset.len(),
            domain = ?self.view.as_ref().map(|v| v.temperature_domain),
            "redraw"
        );

        let circles = CircleSeriesSpec::new(SERIES_GROUP, self.x_scale, self.y_scale)
            .with_fill(css::ORANGE);
        let line = LineMarkSpec::new(MarkId::from_raw(LINE_ID), self.x_scale, self.y_scale)
            .with_stroke(StrokeStyle::solid(css::STEEL_BLUE, 2.0));

        let series: Vec<(f64, f64)> = subset.iter().map(|r| (r.lat, r.tas)).collect();
        let by_id: HashMap<MarkId, Record> = subset
            .iter()
            .map(|&r| (circles.id_for(r.lat), r))
            .collect();

        let mut marks = self.x_axis.marks(&self.x_scale, plot);
        marks.extend(self.y_axis.marks(&self.y_scale, plot));
        marks.push(line.mark(series.iter().copied()));
        marks.extend(circles.marks(series));

        for diff in self.scene.reconcile(marks) {
            match diff {
                MarkDiff::Enter { id, .. } => {
                    if let Some(record) = by_id.get(&id) {
                        self.live_records.insert(id, *record);
                    }
                }
                MarkDiff::Update { id, old, new, .. } => {
                    if let Some(record) = by_id.get(&id) {
                        self.live_records.insert(id, *record);
                    }
                    if old == new && !self.transitions.is_active(id) {
                        continue;
                    }
                    self.transitions
                        .schedule(id, old, new, TRANSITION_MS, Easing::CubicInOut);
                }
                MarkDiff::Exit { id, .. } => {
                    self.transitions.cancel(id);
                    self.live_records.remove(&id);
                    if self.hovered == Some(id) {
                        self.hovered = None;
                        self.tooltip.hide();
                    }
                }
            }
        }
    }

    /// Advances in-flight transitions by `dt_ms`.
    ///
    /// Returns `true` while any transition remains in flight; hosts keep
    /// requesting animation frames until it returns `false`.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.transitions.advance(dt_ms, &mut self.scene)
    }

    /// Whether any transition is in flight.
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Routes a pointer position to the tooltip side-channel.
    ///
    /// Hovering a circle populates the shared overlay with that record;
    /// anywhere else hides it. Exited marks cannot be hit — reconciliation
    /// removed them from the scene.
    pub fn pointer_moved(&mut self, pos: Point) {
        match self
            .scene
            .pick(pos, HOVER_SLOP)
            .and_then(|id| self.live_records.get(&id).map(|r| (id, *r)))
        {
            Some((id, record)) => {
                self.hovered = Some(id);
                self.tooltip.show(pos, &record);
            }
            None => {
                self.hovered = None;
                self.tooltip.hide();
            }
        }
    }

    /// The pointer left the chart; hides the tooltip.
    pub fn pointer_left(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
    }

    /// The stable mark id for the circle keyed by `lat`.
    pub fn circle_id(&self, lat: f64) -> MarkId {
        MarkId::for_key(SERIES_GROUP, lat.to_bits())
    }

    /// Latitudes of the live circle marks, sorted ascending.
    ///
    /// After reconciliation this equals the latitude set of the visible
    /// subset, one entry per latitude.
    pub fn live_latitudes(&self) -> Vec<f64> {
        let mut lats: Vec<f64> = self.live_records.values().map(|r| r.lat).collect();
        lats.sort_by(f64::total_cmp);
        lats
    }

    /// The loaded dataset.
    pub fn dataset(&self) -> &DatasetStore {
        &self.dataset
    }

    /// The chart geometry.
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// The fixed latitude scale.
    pub fn x_scale(&self) -> &ScaleLinear {
        &self.x_scale
    }

    /// The temperature scale as fitted by the latest redraw.
    pub fn y_scale(&self) -> &ScaleLinear {
        &self.y_scale
    }

    /// The view state of the latest redraw, if any.
    pub fn view(&self) -> Option<&ViewState> {
        self.view.as_ref()
    }

    /// The retained scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The shared tooltip overlay.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}
