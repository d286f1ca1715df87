// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icicle Focus: click-to-zoom and search navigation for icicle diagrams.
//!
//! This crate owns the interactive half of an icicle diagram. Given a built
//! [`icicle_tree::Tree`] and its static [`icicle_layout::PartitionLayout`], it
//! tracks which node is in focus and turns every user event into a complete,
//! freshly computed frame for a drawing layer.
//!
//! - [`FocusState`]: the state machine. Clicking a node zooms into it, clicking
//!   the focus zooms out one level, and the root is a floor that cannot be left
//!   upward. Each transition recomputes the [`Breadcrumb`].
//! - [`SearchMemory`] / [`QueryContinuation`]: case-insensitive substring search
//!   over node names in pre-order. Resubmitting a query steps to the next match;
//!   when none are left, nothing happens.
//! - [`ColorScheme`] and [`LabelPolicy`]: presentation policy. Fill comes from the
//!   top-level category and is focus-independent; labels show only where the
//!   displayed breadth leaves room.
//! - [`Canvas`] / [`Frame`]: the render contract. A frame carries every node's
//!   [`icicle_layout::DisplayedRect`], fill, label opacity and tooltip facts, the
//!   breadcrumb, and a transition duration hint.
//! - [`Session`]: ties it all together over one tree, one focus and one canvas.
//!
//! ## Minimal example
//!
//! ```rust
//! use icicle_focus::{Frame, IcicleConfig, Session};
//! use icicle_tree::Record;
//!
//! let records = vec![
//!     Record::root("0", "root"),
//!     Record::child("1", "0", "Dogs"),
//!     Record::child("2", "1", "Leashes"),
//!     Record::child("3", "0", "Cats"),
//! ];
//!
//! let mut crumbs = Vec::new();
//! let canvas = |frame: &Frame<'_>| crumbs.push(frame.breadcrumb_text());
//! let mut session = Session::load(&mut records.clone(), IcicleConfig::default(), canvas).unwrap();
//!
//! let dogs = session.tree().find("1").unwrap();
//! session.click(dogs);
//! session.click(dogs);
//! session.search("leash");
//! drop(session);
//!
//! assert_eq!(crumbs, ["root", "root>Dogs", "root", "root>Dogs>Leashes"]);
//! ```
//!
//! ## Timing
//!
//! Transitions are synchronous and run to completion. The focus state changes
//! as soon as an event is handled, not when an animation ends; the canvas is
//! responsible for interpolating from what it last drew toward each new frame
//! over [`Frame::duration`], and for retargeting when a new frame arrives
//! mid-animation.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` events for session start, transitions and searches.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breadcrumb;
mod color;
mod config;
mod label;
mod render;
mod search;
mod session;
mod state;

pub use breadcrumb::{Breadcrumb, SEPARATOR};
pub use color::{Color, ColorScheme, Palette};
pub use config::IcicleConfig;
pub use label::{LabelMetrics, LabelOpacity, LabelPolicy};
pub use render::{Canvas, Frame, NodeSummary, RenderItem, summarize};
pub use search::{QueryContinuation, SearchMemory};
pub use session::Session;
pub use state::{Direction, FocusState, Transition};

pub use icicle_layout::{DisplayedRect, Extent, ParentShare};
