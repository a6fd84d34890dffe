// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end redraw scenarios over a small fixture dataset.

use kurbo::Point;
use zonal_core::MarkPayload;

use crate::controller::ChartController;
use crate::dataset::{DatasetStore, Record};

fn record(month: u32, lat: f64, tas: f64) -> Record {
    Record { month, lat, tas }
}

/// Two months sharing the lat = -90 sample; lats 0 and 90 exist only in
/// January.
fn fixture() -> DatasetStore {
    DatasetStore::from_records(vec![
        record(1, -90.0, -40.0),
        record(1, 0.0, 15.0),
        record(1, 90.0, -35.0),
        record(2, -90.0, -38.0),
    ])
    .unwrap()
}

fn chart() -> ChartController {
    ChartController::new(fixture())
}

fn settle(chart: &mut ChartController) {
    // Well past the 500 ms transition.
    while chart.advance(100.0) {}
}

fn circle_center(chart: &ChartController, lat: f64) -> Point {
    match chart
        .scene()
        .payload(chart.circle_id(lat))
        .expect("circle is live")
    {
        MarkPayload::Circle(c) => c.center,
        other => panic!("expected a circle, got {other:?}"),
    }
}

#[test]
fn first_redraw_fits_and_populates() {
    let mut chart = chart();
    chart.redraw(1);

    let view = chart.view().unwrap();
    assert_eq!(view.month, 1);
    assert_eq!(view.subset.len(), 3);
    let (lo, hi) = view.temperature_domain;
    assert!(lo <= -40.0 && hi >= 15.0, "niceing only widens");

    assert_eq!(chart.live_latitudes(), vec![-90.0, 0.0, 90.0]);
    // Inverted range: the warmest sample sits highest (smallest y).
    assert!(circle_center(&chart, 0.0).y < circle_center(&chart, -90.0).y);
}

#[test]
fn month_switch_reconciles_by_latitude() {
    let mut chart = chart();
    chart.redraw(1);
    settle(&mut chart);
    let persistent = chart.circle_id(-90.0);
    let january_y = circle_center(&chart, -90.0).y;

    chart.redraw(2);
    // The shared latitude persists and tweens; the others are gone already.
    assert_eq!(chart.live_latitudes(), vec![-90.0]);
    assert!(chart.scene().contains(persistent));
    assert!(!chart.scene().contains(chart.circle_id(0.0)));
    assert!(!chart.scene().contains(chart.circle_id(90.0)));
    assert!(chart.is_animating());

    settle(&mut chart);
    let february_y = circle_center(&chart, -90.0).y;
    assert_ne!(january_y, february_y, "y retargeted to the new month");
    let y = chart.y_scale();
    assert!((february_y - y.map(-38.0)).abs() < 1e-9);
}

#[test]
fn redraw_is_idempotent() {
    let mut a = chart();
    a.redraw(1);
    settle(&mut a);

    let mut b = chart();
    b.redraw(1);
    b.redraw(1);
    settle(&mut b);

    assert_eq!(a.view(), b.view());
    assert_eq!(a.live_latitudes(), b.live_latitudes());
    for lat in [-90.0, 0.0, 90.0] {
        assert_eq!(circle_center(&a, lat), circle_center(&b, lat));
    }
}

#[test]
fn rapid_redraws_retarget_without_queueing() {
    let mut chart = chart();
    chart.redraw(1);
    settle(&mut chart);
    let start = circle_center(&chart, -90.0).y;

    chart.redraw(2);
    chart.advance(100.0);
    let mid = circle_center(&chart, -90.0).y;
    assert_ne!(mid, start, "tween under way");

    // Supersede the in-flight transition; it must continue from `mid`.
    chart.redraw(1);
    chart.advance(0.0);
    let resumed = circle_center(&chart, -90.0).y;
    assert!((resumed - mid).abs() < 1e-9, "no jump on retarget");

    settle(&mut chart);
    assert!((circle_center(&chart, -90.0).y - start).abs() < 1e-9);
    assert_eq!(
        chart.live_latitudes(),
        vec![-90.0, 0.0, 90.0],
        "key set settles on the final month's subset"
    );
    assert!(!chart.is_animating());
}

#[test]
fn single_record_month_has_nonzero_domain() {
    let mut chart = chart();
    chart.redraw(2);
    let (lo, hi) = chart.view().unwrap().temperature_domain;
    assert!(hi > lo, "degenerate subset still spans");
    assert!(lo <= -38.0 && hi >= -38.0);
    assert!(circle_center(&chart, -90.0).y.is_finite());
}

#[test]
fn unknown_month_renders_empty_without_error() {
    let mut chart = chart();
    chart.redraw(1);
    settle(&mut chart);
    chart.redraw(7);
    assert!(chart.live_latitudes().is_empty());
    assert!(chart.view().unwrap().subset.is_empty());
    let (lo, hi) = chart.view().unwrap().temperature_domain;
    assert!(hi > lo);
    settle(&mut chart);
}

#[test]
fn hover_shows_and_hides_the_tooltip() {
    let mut chart = chart();
    chart.redraw(1);
    settle(&mut chart);

    chart.pointer_moved(circle_center(&chart, -90.0));
    assert!(chart.tooltip().is_visible());
    assert_eq!(chart.tooltip().text(), "Lat: -90°\nTemp: -40.00°C");

    chart.pointer_moved(Point::new(5.0, 5.0));
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn hovered_mark_exiting_hides_the_tooltip() {
    let mut chart = chart();
    chart.redraw(1);
    settle(&mut chart);
    chart.pointer_moved(circle_center(&chart, 0.0));
    assert!(chart.tooltip().is_visible());

    // lat = 0 is absent in February; its hover registration dies with it.
    chart.redraw(2);
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn guides_outlive_the_series_across_month_switches() {
    let mut chart = chart();
    chart.redraw(1);
    let before = chart.scene().len();
    assert!(before > 4, "axes and series are populated");

    chart.redraw(2);
    let after = chart.scene().len();
    assert!(after < before, "two circles left the scene");
    assert!(after > 1, "axis rules, labels and titles persist");
    settle(&mut chart);
    assert!(!chart.is_animating());
}
