// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a retained scene.
//!
//! This is a snapshot renderer for demos and eyeballing: it walks the live
//! marks in render order and emits one element per mark. Animation shows up
//! simply by dumping the scene again after advancing transitions.

use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use zonal_core::{MarkPayload, Scene, TextAnchor, TextBaseline};

pub(crate) fn scene_to_svg(scene: &Scene, view_box: Rect) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = write!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    );
    out.push('\n');

    for (_id, node) in scene.ordered() {
        match &node.payload {
            MarkPayload::Circle(c) => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    c.center.x, c.center.y, c.radius
                );
                write_paint_attr(&mut out, "fill", &c.fill);
                out.push_str("/>\n");
            }
            MarkPayload::Path(p) => {
                if p.points.len() < 2 {
                    continue;
                }
                let points = p
                    .points
                    .iter()
                    .map(|pt| format!("{},{}", pt.x, pt.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(out, r#"<polyline points="{points}" fill="none""#);
                write_paint_attr(&mut out, "stroke", &p.stroke);
                let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
                out.push_str("/>\n");
            }
            MarkPayload::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                    t.pos.x, t.pos.y, t.font_size, baseline
                );
                if t.angle != 0.0 {
                    let _ = write!(
                        out,
                        r#" transform="rotate({} {} {})""#,
                        t.angle, t.pos.x, t.pos.y
                    );
                }
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
