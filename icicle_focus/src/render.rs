// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract with the drawing layer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::time::Duration;

use icicle_layout::{DisplayedRect, PartitionLayout, Projection};
use icicle_tree::{Node, NodeId, Tree};
use kurbo::Rect;

use crate::{Breadcrumb, Color, ColorScheme, LabelOpacity, LabelPolicy};

/// Tooltip facts about one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeSummary<'a> {
    /// Category name.
    pub name: &'a str,
    /// Number of categories below this one.
    pub subcategories: usize,
    /// Products filed under this category, if the source carried a count.
    pub products: Option<u64>,
}

/// Everything the drawing layer needs for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem<'a> {
    /// Node this item draws.
    pub id: NodeId,
    /// Label text.
    pub label: &'a str,
    /// Target rectangle for the current focus.
    pub rect: DisplayedRect,
    /// Fill color.
    pub fill: Color,
    /// Whether the label is shown.
    pub label_opacity: LabelOpacity,
    /// Label font size, already scaled for long names.
    pub font_size: f64,
    /// Tooltip facts.
    pub summary: NodeSummary<'a>,
}

/// One complete render pass.
///
/// Items cover every node, in pre-order, including nodes projected outside
/// the visible extent. The drawing layer animates from whatever it drew last
/// to these targets over [`Frame::duration`].
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Per-node render data.
    pub items: Vec<RenderItem<'a>>,
    /// Path from the root to the focus.
    pub breadcrumb: &'a Breadcrumb,
    /// Suggested transition duration; zero for the initial render.
    pub duration: Duration,
}

impl<'a> Frame<'a> {
    /// Assemble the frame for `focus`.
    pub(crate) fn build(
        tree: &'a Tree,
        layout: &PartitionLayout,
        focus: NodeId,
        breadcrumb: &'a Breadcrumb,
        colors: &ColorScheme,
        labels: &LabelPolicy,
        duration: Duration,
    ) -> Self {
        let extent = layout.extent();
        let projection = Projection::onto(layout, focus)
            .unwrap_or_else(|| Projection::new(Rect::new(0.0, 0.0, extent.breadth, 0.0), extent));

        let items = tree
            .iter()
            .map(|(id, node)| {
                // A partitioner that skipped this node still gets an item,
                // collapsed to an empty rect so its label stays hidden.
                let rect = layout
                    .rect(id)
                    .map_or(DisplayedRect(Rect::ZERO), |r| projection.apply(r));
                let label = node.name();
                RenderItem {
                    id,
                    label,
                    rect,
                    fill: colors.fill(tree, id),
                    label_opacity: labels.opacity(label, &rect),
                    font_size: labels.font_size(label),
                    summary: NodeSummary::of(node),
                }
            })
            .collect();

        Self {
            items,
            breadcrumb,
            duration,
        }
    }

    /// The item for `id`, if present.
    pub fn item(&self, id: NodeId) -> Option<&RenderItem<'a>> {
        // Items are in pre-order, so the id usually indexes directly.
        match self.items.get(id.index()) {
            Some(item) if item.id == id => Some(item),
            _ => self.items.iter().find(|item| item.id == id),
        }
    }

    /// Breadcrumb display text.
    pub fn breadcrumb_text(&self) -> String {
        self.breadcrumb.to_string()
    }
}

impl<'a> NodeSummary<'a> {
    fn of(node: &'a Node) -> Self {
        Self {
            name: node.name(),
            subcategories: node.subtree_size() - 1,
            products: node.product_count(),
        }
    }
}

/// Tooltip facts for `id`, or `None` if it is not in `tree`.
pub fn summarize(tree: &Tree, id: NodeId) -> Option<NodeSummary<'_>> {
    tree.get(id).map(NodeSummary::of)
}

/// The drawing layer.
///
/// Called once when a session starts and once after every transition. The
/// frame borrows session state, so implementations copy out whatever they
/// need to keep.
pub trait Canvas {
    /// Draw (or start animating toward) `frame`.
    fn render(&mut self, frame: &Frame<'_>);
}

impl<F> Canvas for F
where
    F: FnMut(&Frame<'_>),
{
    fn render(&mut self, frame: &Frame<'_>) {
        self(frame);
    }
}
