// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage labels.
//!
//! Text shaping is out of scope: labels carry an unshaped string, a font size and a fixed-size
//! frame whose top-left corner sits on the segment's label anchor.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;
use piekit_layout::fill_collapses;

/// Which percentage a label shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// The segment's input weight, printed as a percentage.
    #[default]
    Segment,
    /// The segment's fill ratio times 100.
    Fill,
}

/// Label styling shared by every segment of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Whether labels are shown at all. Hidden labels are still laid out.
    pub visible: bool,
    /// Which percentage to print.
    pub mode: LabelMode,
    /// Font size in drawing units.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
    /// Size of the label frame.
    pub frame_size: Size,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            visible: false,
            mode: LabelMode::Segment,
            font_size: 12.0,
            color: css::BLACK,
            frame_size: Size::new(100.0, 50.0),
        }
    }
}

impl LabelStyle {
    /// Shows or hides labels.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the label mode.
    pub fn with_mode(mut self, mode: LabelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Formats the label text for one segment.
    ///
    /// Values are rounded to whole numbers, half to even. A fill that collapses the wedge
    /// (zero or NaN) reads as `0%`.
    pub fn text(&self, weight: f64, fill_ratio: f64) -> String {
        let value = match self.mode {
            LabelMode::Segment => weight,
            LabelMode::Fill if fill_collapses(fill_ratio) => 0.0,
            LabelMode::Fill => fill_ratio * 100.0,
        };
        alloc::format!("{value:.0}%")
    }
}

/// A positioned, unshaped label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelItem {
    /// Top-left corner of the frame.
    pub anchor: Point,
    /// The label frame.
    pub frame: Rect,
    /// Text content.
    pub text: String,
    /// Font size in drawing units.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
    /// Whether the label belongs to the rendered set (non-zero share).
    pub is_visible: bool,
    /// Whether the label is hidden by [`LabelStyle::visible`].
    pub hidden: bool,
}

impl LabelItem {
    /// Whether a renderer should draw this label.
    pub fn should_draw(&self) -> bool {
        self.is_visible && !self.hidden
    }
}
