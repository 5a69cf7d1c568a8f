// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demos for `piekit_layout` and `piekit_view`.
mod html;
mod svg;

use kurbo::{Point, Vec2};
use peniko::color::palette::css;
use piekit_layout::{ChartSpec, GradientStops, screen_angle};
use piekit_view::{GradientDirection, LabelMode, LabelStyle, PieChartView, TouchResponse};

fn main() {
    let sections = vec![
        sample_app_demo(),
        partial_fill_demo(),
        touch_demo(),
        edge_case_demo(),
        gradient_direction_demo(),
    ];

    let html = html::render_report("piekit pie chart demo", &sections);
    std::fs::write("piekit_demo.html", html).expect("write piekit_demo.html");
    println!("wrote piekit_demo.html");
}

fn stops(colors: &[peniko::Color]) -> GradientStops {
    colors.iter().copied().collect()
}

fn sample_styles() -> Vec<GradientStops> {
    vec![
        stops(&[css::LIGHT_SKY_BLUE, css::MEDIUM_PURPLE]),
        stops(&[css::GOLD, css::ORANGE]),
        stops(&[css::LIGHT_SALMON, css::TOMATO]),
    ]
}

/// The chart the sample app shows on launch.
fn sample_view() -> PieChartView {
    let spec = ChartSpec::new((300.0, 300.0))
        .with_segments([30.0, 30.0, 40.0])
        .with_fill_ratios([1.0, 1.0, 1.0])
        .with_corner_radii(8.0, 6.0)
        .with_style_groups(sample_styles());
    PieChartView::new(spec)
        .with_label_style(LabelStyle::default().with_visible(true))
        .with_highlight_on_touch(true)
}

/// Lays out `view`, prints one summary line per segment and returns its SVG.
fn render_view(id_prefix: &str, view: &mut PieChartView) -> String {
    view.layout();
    for d in view.segments() {
        println!(
            "{id_prefix}: segment {} {:>3}% {:>7.2}..{:>7.2} deg r={:>6.2} {:?}{}",
            d.index,
            d.proportion_pct,
            d.start_angle_deg,
            d.end_angle_deg,
            d.outer_radius,
            d.shape,
            if d.fill_visible { "" } else { " (hidden)" },
        );
    }
    svg::SvgScene::from_view(id_prefix, view).to_svg_string()
}

fn sample_app_demo() -> html::HtmlSection {
    let mut view = sample_view();
    let svg = render_view("sample", &mut view);
    html::HtmlSection {
        title: "Sample app",
        description: "Segments [30, 30, 40] at full fill with 8/6 corner rounding, top-to-bottom gradients and segment labels.",
        svg,
    }
}

fn partial_fill_demo() -> html::HtmlSection {
    let mut view = sample_view();
    view.update_spec(|spec| {
        spec.segments = vec![25.0, 15.0, 35.0, 25.0];
        spec.fill_ratios = vec![0.9, 0.5, 0.3, 0.0];
        spec.style_groups = vec![
            stops(&[css::LIGHT_SKY_BLUE, css::MEDIUM_PURPLE]),
            stops(&[css::GOLD, css::ORANGE]),
            stops(&[css::LIGHT_SALMON, css::TOMATO]),
            stops(&[css::PALE_GREEN, css::SEA_GREEN]),
        ];
    });
    view.set_label_style(
        LabelStyle::default()
            .with_visible(true)
            .with_mode(LabelMode::Fill)
            .with_color(css::DARK_SLATE_GRAY),
    );
    let svg = render_view("fill", &mut view);
    html::HtmlSection {
        title: "Partial fills",
        description: "Fill ratios [0.9, 0.5, 0.3, 0] shrink each wedge radially (never below 30% of the base radius); a zero fill hides the wedge but keeps its label. Labels show the fill ratio.",
        svg,
    }
}

fn touch_demo() -> html::HtmlSection {
    let mut view = sample_view();
    view.layout();

    let center = view.spec().center();
    let target = &view.segments()[2];
    let theta = screen_angle(target.span().bisector_deg());
    let point = center + Vec2::new(theta.cos(), theta.sin()) * (target.outer_radius * 0.6);

    let response = view.touch(point);
    println!("touch: ({:.1}, {:.1}) -> {response:?}", point.x, point.y);
    if let TouchResponse::Hit(index) = response {
        println!("touch: highlighted segment {index}");
    }
    let missed = view.touch(Point::new(-10.0, -10.0));
    println!("touch: (-10.0, -10.0) -> {missed:?}");
    view.touch(point);

    let svg = render_view("touch", &mut view);
    html::HtmlSection {
        title: "Touch highlight",
        description: "A simulated touch on the largest segment dims the others to 30% opacity.",
        svg,
    }
}

fn edge_case_demo() -> html::HtmlSection {
    let mut full = sample_view();
    full.update_spec(|spec| {
        spec.segments = vec![0.0, 10.0, 0.0];
    });
    let mut svg = render_view("full", &mut full);

    let mut sliver = sample_view();
    sliver.update_spec(|spec| {
        spec.segments = vec![1.0, 49.0, 50.0];
    });
    svg.push_str(&render_view("sliver", &mut sliver));

    html::HtmlSection {
        title: "Edge cases",
        description: "Left: a single non-zero segment draws a full circle and zero-share segments draw nothing. Right: a 1% sliver narrower than twice the rim rounding falls back to a plain wedge.",
        svg,
    }
}

fn gradient_direction_demo() -> html::HtmlSection {
    let directions = [
        ("dir-lr", GradientDirection::LeftRight),
        ("dir-bt", GradientDirection::BottomTop),
        ("dir-tlbr", GradientDirection::TopLeftBottomRight),
        ("dir-bltr", GradientDirection::BottomLeftTopRight),
    ];
    let mut svg = String::new();
    for (id_prefix, direction) in directions {
        let mut view = sample_view()
            .with_gradient_direction(direction)
            .with_label_style(LabelStyle::default());
        view.update_spec(|spec| spec.bounds = (160.0, 160.0).into());
        svg.push_str(&render_view(id_prefix, &mut view));
    }
    html::HtmlSection {
        title: "Gradient directions",
        description: "Left-right, bottom-top, top-left to bottom-right and bottom-left to top-right, each stretched over the wedge bounds.",
        svg,
    }
}
