// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-relative projection of partition rectangles.

use alloc::vec::Vec;

use icicle_tree::NodeId;
use kurbo::Rect;

use crate::{Extent, PartitionLayout};

/// A node rectangle as displayed for the current focus.
///
/// Same axis convention as [`PartitionLayout`]: `x` is breadth and `y` is
/// depth. Nodes outside the focus subtree may project off-canvas, including
/// to negative coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayedRect(pub Rect);

impl DisplayedRect {
    /// Displayed breadth (`x1 - x0`).
    pub fn breadth(&self) -> f64 {
        self.0.width()
    }

    /// Displayed depth (`y1 - y0`).
    pub fn depth(&self) -> f64 {
        self.0.height()
    }

    /// Screen-space rectangle with depth running left to right.
    ///
    /// The origin is `(y0, x0)`. One unit is trimmed from the depth span, and
    /// `min(1, breadth / 2)` from the breadth span, to leave separators between
    /// neighbors. Sizes never go negative.
    pub fn screen_rect(&self) -> Rect {
        let r = self.0;
        let breadth = r.width().max(0.0);
        let width = (r.height() - 1.0).max(0.0);
        let height = breadth - (breadth / 2.0).min(1.0);
        Rect::new(r.y0, r.x0, r.y0 + width, r.x0 + height)
    }
}

/// The transform that zooms a partition onto one focus node.
///
/// Breadth is translated so the focus starts at zero and rescaled so the focus
/// spans the full breadth extent. Depth is only translated, by the focus `y0`.
///
/// ```rust
/// use icicle_layout::{Extent, Projection};
/// use kurbo::Rect;
///
/// let extent = Extent::new(300.0, 90.0);
/// let focus = Rect::new(30.0, 100.0, 60.0, 200.0);
/// let proj = Projection::new(focus, extent);
///
/// let shown = proj.apply(Rect::new(45.0, 200.0, 60.0, 300.0));
/// assert_eq!(shown.0, Rect::new(45.0, 100.0, 90.0, 200.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    origin_x: f64,
    origin_y: f64,
    scale: f64,
}

impl Projection {
    /// Projection for a focus node whose static rectangle is `focus`.
    ///
    /// A focus with no breadth collapses every node to the breadth origin
    /// rather than producing non-finite coordinates.
    pub fn new(focus: Rect, extent: Extent) -> Self {
        let width = focus.width();
        let scale = if width > 0.0 {
            extent.breadth / width
        } else {
            0.0
        };
        Self {
            origin_x: focus.x0,
            origin_y: focus.y0,
            scale,
        }
    }

    /// Projection for the node `focus` of `layout`, or `None` if out of range.
    pub fn onto(layout: &PartitionLayout, focus: NodeId) -> Option<Self> {
        Some(Self::new(layout.rect(focus)?, layout.extent()))
    }

    /// Project one static rectangle.
    pub fn apply(&self, rect: Rect) -> DisplayedRect {
        DisplayedRect(Rect::new(
            (rect.x0 - self.origin_x) * self.scale,
            rect.y0 - self.origin_y,
            (rect.x1 - self.origin_x) * self.scale,
            rect.y1 - self.origin_y,
        ))
    }

    /// Project every rectangle of `layout`, in pre-order.
    pub fn apply_all(&self, layout: &PartitionLayout) -> Vec<DisplayedRect> {
        layout.rects().iter().map(|&r| self.apply(r)).collect()
    }
}

/// Project `node` relative to `focus`, both taken from `layout`.
///
/// Returns `None` only if either id is out of range for `layout`.
pub fn project(layout: &PartitionLayout, node: NodeId, focus: NodeId) -> Option<DisplayedRect> {
    let proj = Projection::onto(layout, focus)?;
    Some(proj.apply(layout.rect(node)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition;
    use alloc::vec;
    use icicle_tree::{Record, Tree};

    fn scenario() -> Tree {
        Tree::build(vec![
            Record::root("0", "root"),
            Record::child("1", "0", "Dogs"),
            Record::child("2", "1", "Leashes"),
            Record::child("3", "0", "Cats"),
        ])
        .unwrap()
    }

    const EXTENT: Extent = Extent::new(300.0, 90.0);

    #[test]
    fn root_focus_is_identity() {
        let tree = scenario();
        let layout = partition(&tree, EXTENT);
        let shown = Projection::onto(&layout, tree.root())
            .unwrap()
            .apply_all(&layout);
        let expected: Vec<DisplayedRect> = layout.rects().iter().copied().map(DisplayedRect).collect();
        assert_eq!(shown, expected);
    }

    #[test]
    fn focus_spans_full_breadth_and_shifts_depth() {
        let tree = scenario();
        let layout = partition(&tree, EXTENT);
        let dogs = tree.find("1").unwrap();
        let leashes = tree.find("2").unwrap();
        let cats = tree.find("3").unwrap();

        let focus = project(&layout, dogs, dogs).unwrap();
        assert_eq!(focus.0, Rect::new(0.0, 0.0, 90.0, 100.0));

        let child = project(&layout, leashes, dogs).unwrap();
        assert_eq!(child.0, Rect::new(0.0, 100.0, 90.0, 200.0));

        // Off-branch and ancestor nodes are still projected, off-canvas.
        let sibling = project(&layout, cats, dogs).unwrap();
        assert_eq!(sibling.0, Rect::new(90.0, 0.0, 135.0, 100.0));
        let root = project(&layout, tree.root(), dogs).unwrap();
        assert_eq!(root.0, Rect::new(0.0, -100.0, 135.0, 0.0));
    }

    #[test]
    fn zero_breadth_focus_stays_finite() {
        let proj = Projection::new(Rect::new(5.0, 0.0, 5.0, 10.0), EXTENT);
        let shown = proj.apply(Rect::new(0.0, 10.0, 20.0, 20.0));
        assert_eq!(shown.0, Rect::new(0.0, 10.0, 0.0, 20.0));
    }

    #[test]
    fn screen_rect_swaps_axes_and_trims_separators() {
        let shown = DisplayedRect(Rect::new(10.0, 100.0, 40.0, 200.0));
        assert_eq!(shown.screen_rect(), Rect::new(100.0, 10.0, 199.0, 39.0));

        // Thin slivers lose half their breadth, never more.
        let thin = DisplayedRect(Rect::new(0.0, 0.0, 1.0, 50.0));
        assert_eq!(thin.screen_rect().height(), 0.5);
    }

    #[test]
    fn unknown_ids_do_not_project() {
        let tree = scenario();
        let layout = partition(&tree, EXTENT);
        let other = Tree::build((0..10).map(|i| {
            if i == 0 {
                Record::root("0", "r")
            } else {
                Record::child(alloc::format!("{i}"), "0", "x")
            }
        }))
        .unwrap();
        let far = other.find("9").unwrap();
        assert!(project(&layout, far, tree.root()).is_none());
        assert!(project(&layout, tree.root(), far).is_none());
    }
}
