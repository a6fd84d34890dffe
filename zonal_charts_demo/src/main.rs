// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo driver for the temperature-vs-latitude chart.
//!
//! Loads a `month,lat,tas` CSV (or synthesizes a dataset when no path is
//! given), sweeps a slider selector through every month, and writes an HTML
//! report with an SVG snapshot per month plus one mid-transition snapshot to
//! show marks in flight.

mod svg;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use kurbo::{Point, Rect};
use tracing::info;
use zonal_view::{
    ChartController, DatasetStore, MonthDropdown, MonthSelector, MonthSlider, Record,
};

const FRAME_MS: f64 = 16.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dataset = match std::env::args().nth(1) {
        Some(path) => {
            DatasetStore::from_path(&path).with_context(|| format!("loading {path}"))?
        }
        None => synthetic_dataset()?,
    };

    let dropdown = MonthDropdown::new(dataset.distinct_months())?;
    info!(
        entries = dropdown.entries().count(),
        initial = dropdown.label(),
        "dropdown populated"
    );

    let mut slider = MonthSlider::new(dataset.distinct_months())?;
    let mut chart = ChartController::new(dataset);
    let view = {
        let g = chart.geometry();
        Rect::new(0.0, 0.0, g.width, g.height)
    };

    chart.redraw(dropdown.current());
    while chart.advance(FRAME_MS) {}

    let mut sections: Vec<(String, String)> = Vec::new();
    sections.push((
        format!("{} (initial)", dropdown.label()),
        svg::scene_to_svg(chart.scene(), view),
    ));

    let (_, last_month) = slider.range();
    for raw in (slider.current() + 1)..=last_month {
        let Some(month) = slider.select(i64::from(raw)) else {
            continue;
        };
        let label = slider.label().to_string();
        chart.redraw(month);

        // One snapshot a quarter second in, while circles are mid-flight.
        let mut elapsed = 0.0;
        let mut animating = true;
        while animating && elapsed < 250.0 {
            animating = chart.advance(FRAME_MS);
            elapsed += FRAME_MS;
        }
        sections.push((
            format!("{label} (transitioning)"),
            svg::scene_to_svg(chart.scene(), view),
        ));

        while chart.advance(FRAME_MS) {}
        sections.push((label, svg::scene_to_svg(chart.scene(), view)));
    }

    hover_demo(&mut chart);

    let html = render_report("Zonal chart demo", &sections);
    std::fs::write("zonal_charts_demo.html", html).context("write zonal_charts_demo.html")?;
    println!("wrote zonal_charts_demo.html");
    Ok(())
}

/// Moves the pointer over the first circle of the current month and logs the
/// tooltip content.
fn hover_demo(chart: &mut ChartController) {
    let Some(record) = chart.view().and_then(|v| v.subset.first().copied()) else {
        return;
    };
    let center = Point::new(
        chart.x_scale().map(record.lat),
        chart.y_scale().map(record.tas),
    );
    chart.pointer_moved(center);
    info!(
        visible = chart.tooltip().is_visible(),
        text = chart.tooltip().text(),
        "hover"
    );
    chart.pointer_left();
}

/// A smooth zonal-mean temperature field: warm equator, cold poles, and a
/// seasonal swing that is strongest at high latitudes.
fn synthetic_dataset() -> Result<DatasetStore> {
    let mut records = Vec::new();
    for month in 1..=12_u32 {
        let season = (f64::from(month - 1) / 12.0 * std::f64::consts::TAU).cos();
        for lat in (-90..=90).step_by(10) {
            let lat = f64::from(lat);
            let phi = lat.to_radians();
            let tas = 32.0 * phi.cos() - 18.0 - 14.0 * season * phi.sin();
            records.push(Record { month, lat, tas });
        }
    }
    Ok(DatasetStore::from_records(records)?)
}

fn render_report(title: &str, sections: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str("<style>body{font-family:sans-serif;margin:2em;}h2{margin-top:2em;}</style>\n");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{title}</h1>");
    for (heading, svg) in sections {
        let _ = writeln!(out, "<h2>{heading}</h2>\n{svg}");
    }
    out.push_str("</body>\n</html>\n");
    out
}
