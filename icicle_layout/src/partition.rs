// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static icicle partition: one rectangle per node, computed once per tree.

use alloc::vec;
use alloc::vec::Vec;

use icicle_tree::{NodeId, Tree};
use kurbo::Rect;

/// Total size of the layout space.
///
/// `depth` is the extent of the axis along which tree levels are stacked;
/// `breadth` is the extent shared out among siblings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    /// Extent of the depth axis (rect `y`).
    pub depth: f64,
    /// Extent of the breadth axis (rect `x`).
    pub breadth: f64,
}

impl Extent {
    /// Create an extent.
    pub const fn new(depth: f64, breadth: f64) -> Self {
        Self { depth, breadth }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(1150.0, 750.0)
    }
}

/// How a parent's breadth is shared with its own unit of weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParentShare {
    /// Children divide the whole parent interval in proportion to their
    /// subtree sizes, leaving no gap.
    #[default]
    Distribute,
    /// Each child gets `child_size / parent_size` of the parent interval, so the
    /// parent's own unit stays uncovered after its last child.
    Reserve,
}

/// The static rectangle of every node of one tree.
///
/// Rectangles use `x` for breadth and `y` for depth: `x0..x1` is the node's
/// share of its parent's breadth, `y0..y1` is its depth band.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionLayout {
    rects: Vec<Rect>,
    extent: Extent,
}

impl PartitionLayout {
    /// Wrap precomputed rectangles, indexed by [`NodeId::index`].
    ///
    /// Intended for custom [`Partitioner`] implementations; `rects` should hold
    /// exactly one entry per tree node.
    pub fn from_rects(rects: Vec<Rect>, extent: Extent) -> Self {
        Self { rects, extent }
    }

    /// The static rectangle of `id`, or `None` if `id` is out of range.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.rects.get(id.index()).copied()
    }

    /// All rectangles in pre-order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// The extent this layout was computed for.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether there are no rectangles.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// A layout collaborator that assigns every node its static rectangle.
pub trait Partitioner {
    /// Lay out `tree` within `extent`.
    fn partition(&self, tree: &Tree, extent: Extent) -> PartitionLayout;
}

/// The standard icicle partition.
///
/// - Depth: the extent is cut into `height + 1` equal bands and a node at
///   depth `d` occupies band `d`.
/// - Breadth: the root spans the whole extent; each node's children are laid
///   out contiguously from its `x0`, in child order, with widths proportional
///   to their subtree sizes (see [`ParentShare`]).
///
/// The result depends only on the tree and the extent.
#[derive(Copy, Clone, Debug, Default)]
pub struct IciclePartition {
    /// Whether the parent's own unit takes part of the breadth.
    pub parent_share: ParentShare,
}

impl Partitioner for IciclePartition {
    fn partition(&self, tree: &Tree, extent: Extent) -> PartitionLayout {
        let band = extent.depth / f64::from(tree.height() + 1);
        let mut rects = vec![Rect::ZERO; tree.len()];
        rects[0] = Rect::new(0.0, 0.0, extent.breadth, band);

        // Pre-order guarantees a parent's rect is final before its children.
        for (id, node) in tree.iter() {
            let children = node.children();
            let Some(&last) = children.last() else {
                continue;
            };
            let parent = rects[id.index()];
            let total = match self.parent_share {
                ParentShare::Distribute => children.iter().map(|&c| tree[c].subtree_size()).sum(),
                ParentShare::Reserve => node.subtree_size(),
            };
            let k = parent.width() / total as f64;
            let y0 = f64::from(node.depth() + 1) * band;
            let y1 = y0 + band;

            let mut x = parent.x0;
            for &child in children {
                let x1 = if child == last && self.parent_share == ParentShare::Distribute {
                    // Pin to the parent edge so rounding never leaves a sliver.
                    parent.x1
                } else {
                    x + tree[child].subtree_size() as f64 * k
                };
                rects[child.index()] = Rect::new(x, y0, x1, y1);
                x = x1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = rects.len(),
            band,
            share = ?self.parent_share,
            "computed icicle partition"
        );

        PartitionLayout { rects, extent }
    }
}

/// Lay out `tree` with the default [`IciclePartition`].
pub fn partition(tree: &Tree, extent: Extent) -> PartitionLayout {
    IciclePartition::default().partition(tree, extent)
}
