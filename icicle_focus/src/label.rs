// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label sizing and visibility.

use icicle_layout::{DisplayedRect, Extent};

/// Typographic inputs for label placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelMetrics {
    /// Unscaled font size.
    pub font_size: f64,
    /// A label needs strictly more displayed breadth than this to be shown.
    pub min_label_breadth: f64,
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width_ratio: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            min_label_breadth: 15.0,
            glyph_width_ratio: 2.0 / 3.0,
        }
    }
}

/// Whether a label is drawn. Hidden labels stay in the frame, fully transparent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LabelOpacity {
    /// Opacity 0.
    Hidden,
    /// Opacity 1.
    Visible,
}

impl LabelOpacity {
    /// Numeric opacity, `0.0` or `1.0`.
    pub fn value(self) -> f64 {
        match self {
            Self::Hidden => 0.0,
            Self::Visible => 1.0,
        }
    }

    /// Whether this is [`LabelOpacity::Visible`].
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Label policy for one tree.
///
/// The max label width is the number of glyphs that fit in one depth band:
/// `depth_extent / (glyph_width_ratio * font_size) / tree_height`. Long names
/// are shrunk so their length never exceeds it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelPolicy {
    font_size: f64,
    min_breadth: f64,
    max_width: f64,
}

impl LabelPolicy {
    /// Policy for a tree of height `tree_height` laid out in `extent`.
    ///
    /// A lone root (height 0) is treated as height 1.
    pub fn new(metrics: LabelMetrics, extent: Extent, tree_height: u32) -> Self {
        let levels = f64::from(tree_height.max(1));
        let glyph = metrics.glyph_width_ratio * metrics.font_size;
        let max_width = if glyph > 0.0 {
            extent.depth / glyph / levels
        } else {
            0.0
        };
        Self {
            font_size: metrics.font_size,
            min_breadth: metrics.min_label_breadth,
            max_width,
        }
    }

    /// Longest label, in glyphs, drawn at full size.
    pub fn max_label_width(&self) -> f64 {
        self.max_width
    }

    /// Font size for `label`, scaled down when the label is too long.
    pub fn font_size(&self, label: &str) -> f64 {
        let len = label.chars().count() as f64;
        let room = self.max_width.max(len);
        if room > 0.0 {
            self.font_size * (self.max_width / room)
        } else {
            self.font_size
        }
    }

    /// Visibility of `label` on a node displayed at `rect`.
    ///
    /// Visible only if the displayed breadth exceeds the minimum and the
    /// scaled font size fits the max label width.
    pub fn opacity(&self, label: &str, rect: &DisplayedRect) -> LabelOpacity {
        if rect.breadth() > self.min_breadth && self.font_size(label) <= self.max_width {
            LabelOpacity::Visible
        } else {
            LabelOpacity::Hidden
        }
    }
}
