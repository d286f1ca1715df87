// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icicle Tree: single-rooted category trees built from flat records.
//!
//! This crate turns a table of `{id, parent, name}` rows into an immutable
//! [`Tree`]. It is the first stage of the icicle pipeline:
//!
//! - [`Record`]: one flat input row. `parent` is absent (or empty) only for the root.
//! - [`RecordSource`]: where records come from. Implemented for `Vec<Record>` and,
//!   with the `json` feature, for [`JsonRecords`].
//! - [`Tree::build`]: validates connectivity and computes per-node depth and
//!   [`Node::subtree_size`] in linear time.
//! - [`NodeId`]: dense pre-order handle. The root is [`NodeId::ROOT`], and a
//!   subtree always occupies one contiguous id range.
//!
//! Every node weighs one unit, so a node's subtree size is the number of
//! records at or below it. That size drives partition widths downstream.
//!
//! ## Errors
//!
//! - [`MalformedTreeError`]: no root, several roots, duplicate ids, dangling
//!   parents, or parent cycles. No partial tree is returned.
//! - [`DataLoadError`]: the source could not be read or parsed, or its records
//!   are malformed.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Record`].
//! - `json`: enables [`JsonRecords`], backed by `serde_json`.
//! - `tracing`: emits `tracing` events for load and build summaries.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod record;
mod tree;

pub use error::{DataLoadError, MalformedTreeError};
#[cfg(feature = "json")]
pub use record::JsonRecords;
pub use record::{Record, RecordSource};
pub use tree::{Ancestors, Node, NodeId, NodePath, Tree};
