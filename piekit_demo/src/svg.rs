// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `piekit_demo`.

use kurbo::Rect;
use peniko::Color;
use piekit_view::{PieChartView, RenderItem};

#[derive(Debug)]
pub(crate) struct SvgScene {
    id_prefix: String,
    view_box: Rect,
    items: Vec<(RenderItem, f32)>,
}

impl SvgScene {
    /// Captures the view's last layout together with its current highlight opacities.
    pub(crate) fn from_view(id_prefix: &str, view: &PieChartView) -> Self {
        let bounds = view.spec().bounds;
        let mut view_box = Rect::new(0.0, 0.0, bounds.width, bounds.height);
        let mut items = Vec::new();
        for item in view.items() {
            if item.label.should_draw() {
                view_box = view_box.union(item.label.frame);
            }
            items.push((item.clone(), view.opacity(item.index)));
        }
        Self {
            id_prefix: id_prefix.to_string(),
            view_box,
            items,
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        out.push_str("<defs>\n");
        for (item, _opacity) in &self.items {
            if item.is_visible && item.stops.len() > 1 {
                self.write_gradient(&mut out, item);
            }
        }
        out.push_str("</defs>\n");

        for (item, opacity) in &self.items {
            if !item.is_visible {
                continue;
            }
            out.push_str(&format!(r#"<path d="{}""#, item.outline.to_svg()));
            match item.stops.as_slice() {
                [] => out.push_str(r#" fill="none""#),
                [color] => write_color_attr(&mut out, "fill", *color),
                _ => out.push_str(&format!(
                    r#" fill="url(#{})""#,
                    self.gradient_id(item.index)
                )),
            }
            if *opacity < 1.0 {
                out.push_str(&format!(r#" opacity="{opacity}""#));
            }
            out.push_str("/>\n");
        }

        for (item, _opacity) in &self.items {
            let label = &item.label;
            if !label.should_draw() {
                continue;
            }
            // Labels are left-aligned and vertically centered in their frame.
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" text-anchor="start""#,
                label.frame.x0,
                label.frame.center().y,
                label.font_size,
            ));
            write_color_attr(&mut out, "fill", label.color);
            out.push('>');
            out.push_str(&escape_xml(&label.text));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn gradient_id(&self, index: usize) -> String {
        format!("{}-g{index}", self.id_prefix)
    }

    fn write_gradient(&self, out: &mut String, item: &RenderItem) {
        let line = item.gradient_line;
        out.push_str(&format!(
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            self.gradient_id(item.index),
            line.p0.x,
            line.p0.y,
            line.p1.x,
            line.p1.y,
        ));
        out.push('\n');
        let last = (item.stops.len() - 1) as f64;
        for (k, color) in item.stops.iter().enumerate() {
            out.push_str(&format!(r#"<stop offset="{}""#, k as f64 / last));
            write_color_attr(out, "stop-color", *color);
            out.push_str("/>\n");
        }
        out.push_str("</linearGradient>\n");
    }
}

fn svg_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (hex, opacity)
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_color(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        // `stop-color` pairs with `stop-opacity`, everything else with `<name>-opacity`.
        let opacity_name = name.strip_suffix("-color").unwrap_or(name);
        out.push_str(&format!(r#" {opacity_name}-opacity="{o}""#));
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
