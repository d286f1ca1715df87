// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icicle Layout: static partition and focus-relative projection.
//!
//! An icicle diagram gives every node a rectangle whose breadth encodes its
//! subtree size and whose depth band encodes its level in the tree. This crate
//! splits that into two stages:
//!
//! - [`Partitioner`] / [`IciclePartition`]: computed once per tree. Produces a
//!   [`PartitionLayout`] of static rectangles in which siblings tile their
//!   parent's breadth in child order and share one depth band.
//! - [`Projection`]: computed on every focus change. Maps each static rectangle
//!   into a [`DisplayedRect`] relative to the focus node, which is stretched to
//!   the full breadth and moved to depth zero.
//!
//! Projection never re-partitions. Every node is projected, including
//! ancestors and off-branch siblings of the focus; those simply land outside
//! the visible extent.
//!
//! ## Axes
//!
//! Rectangles are [`kurbo::Rect`]s with `x` as breadth and `y` as depth.
//! Drawing depth horizontally is a presentation decision; see
//! [`DisplayedRect::screen_rect`].
//!
//! ## Minimal example
//!
//! ```rust
//! use icicle_layout::{Extent, Projection, partition};
//! use icicle_tree::{Record, Tree};
//!
//! let tree = Tree::build(vec![
//!     Record::root("0", "root"),
//!     Record::child("1", "0", "Dogs"),
//!     Record::child("2", "0", "Cats"),
//! ])
//! .unwrap();
//!
//! let layout = partition(&tree, Extent::new(200.0, 90.0));
//! let dogs = tree.find("1").unwrap();
//!
//! // Dogs holds one of the root's two child units: half the breadth.
//! assert_eq!(layout.rect(dogs).unwrap().width(), 45.0);
//!
//! // Zoomed onto Dogs, it spans the full breadth at depth zero.
//! let shown = Projection::onto(&layout, dogs).unwrap().apply_all(&layout);
//! assert_eq!(shown[dogs.index()].breadth(), 90.0);
//! assert_eq!(shown[dogs.index()].0.y0, 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits a `tracing` event when a partition is computed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod partition;
mod project;

pub use partition::{Extent, IciclePartition, ParentShare, PartitionLayout, Partitioner, partition};
pub use project::{DisplayedRect, Projection, project};
