// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill colors: palettes and the top-level-category color policy.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use icicle_tree::{NodeId, Tree};

/// An opaque sRGB color with 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// The neutral fill used for the root.
    pub const NEUTRAL: Self = Self::from_rgb_u32(0x33_33_33);

    /// Create a color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. The top byte is ignored.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to 8 bits before the cast."
    )]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

/// Formats as a lowercase `#rrggbb` token.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An ordered categorical palette. Lookups wrap around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// The eight-color "Accent" qualitative scheme.
    pub const ACCENT: [Color; 8] = [
        Color::from_rgb_u32(0x7f_c9_7f),
        Color::from_rgb_u32(0xbe_ae_d4),
        Color::from_rgb_u32(0xfd_c0_86),
        Color::from_rgb_u32(0xff_ff_99),
        Color::from_rgb_u32(0x38_6c_b0),
        Color::from_rgb_u32(0xf0_02_7f),
        Color::from_rgb_u32(0xbf_5b_17),
        Color::from_rgb_u32(0x66_66_66),
    ];

    /// A palette over `colors`.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// The `i`-th color, wrapping; `None` for an empty palette.
    pub fn color(&self, i: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[i % self.colors.len()])
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::ACCENT)
    }
}

/// Fill policy: every node takes the color of its top-level category.
///
/// Top-level categories (depth 1) are keyed by name and assigned palette
/// entries in child order, once, when the scheme is built. Two nodes under
/// categories with the same name therefore always share a color, whatever the
/// focus. The root, and anything that is not in the tree, uses the root color.
#[derive(Clone, Debug)]
pub struct ColorScheme {
    root: Color,
    by_name: HashMap<String, Color>,
}

impl ColorScheme {
    /// Assign palette colors to the top-level categories of `tree`.
    pub fn new(tree: &Tree, palette: &Palette, root: Color) -> Self {
        let mut by_name = HashMap::new();
        for &top in tree.children_of(tree.root()) {
            let name = tree[top].name();
            if by_name.contains_key(name) {
                continue;
            }
            let color = palette.color(by_name.len()).unwrap_or(root);
            by_name.insert(String::from(name), color);
        }
        Self { root, by_name }
    }

    /// Fill color of `id`.
    pub fn fill(&self, tree: &Tree, id: NodeId) -> Color {
        tree.top_level_ancestor(id)
            .and_then(|top| self.by_name.get(tree[top].name()))
            .copied()
            .unwrap_or(self.root)
    }

    /// Color used for the root.
    pub fn root_color(&self) -> Color {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use icicle_tree::Record;

    fn pets() -> Tree {
        Tree::build(vec![
            Record::root("0", "Pet Supplies"),
            Record::child("1", "0", "Dogs"),
            Record::child("2", "1", "Leashes"),
            Record::child("3", "2", "Retractable"),
            Record::child("4", "0", "Cats"),
            Record::child("5", "4", "Litter"),
            Record::child("6", "0", "Dogs"),
        ])
        .unwrap()
    }

    #[test]
    fn descendants_inherit_top_level_color() {
        let tree = pets();
        let scheme = ColorScheme::new(&tree, &Palette::default(), Color::NEUTRAL);
        let fill = |key: &str| scheme.fill(&tree, tree.find(key).unwrap());

        assert_eq!(fill("0"), Color::NEUTRAL);
        assert_eq!(fill("1"), Palette::ACCENT[0]);
        assert_eq!(fill("3"), Palette::ACCENT[0]);
        assert_eq!(fill("4"), Palette::ACCENT[1]);
        assert_eq!(fill("5"), Palette::ACCENT[1]);
        // Same name, same color.
        assert_eq!(fill("6"), fill("1"));
    }

    #[test]
    fn palette_wraps_and_empty_palette_falls_back() {
        let palette = Palette::new(vec![Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)]);
        assert_eq!(palette.color(3), Some(Color::rgb(4, 5, 6)));

        let tree = pets();
        let scheme = ColorScheme::new(&tree, &Palette::new(Vec::new()), Color::NEUTRAL);
        assert_eq!(scheme.fill(&tree, tree.find("5").unwrap()), Color::NEUTRAL);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::NEUTRAL.to_string(), "#333333");
        assert_eq!(Palette::ACCENT[5].to_string(), "#f0027f");
    }
}
