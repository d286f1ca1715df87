// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.

use core::time::Duration;

use icicle_layout::{Extent, ParentShare};

use crate::{Color, LabelMetrics, Palette, QueryContinuation};

/// Tunables for one icicle session.
///
/// Defaults reproduce the classic pet-supplies icicle: a 1150 × 750 layout,
/// 8px labels hidden below 15px of breadth, the Accent palette over a dark
/// neutral root, and 750 ms transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct IcicleConfig {
    /// Layout space.
    pub extent: Extent,
    /// Whether a parent keeps a share of breadth for itself.
    pub parent_share: ParentShare,
    /// Label sizing inputs.
    pub label: LabelMetrics,
    /// Transition duration hint passed with every post-initial frame.
    pub transition: Duration,
    /// Colors for top-level categories.
    pub palette: Palette,
    /// Fill of the root.
    pub root_color: Color,
    /// When a resubmitted query steps to the next match.
    pub continuation: QueryContinuation,
}

impl Default for IcicleConfig {
    fn default() -> Self {
        Self {
            extent: Extent::default(),
            parent_share: ParentShare::default(),
            label: LabelMetrics::default(),
            transition: Duration::from_millis(750),
            palette: Palette::default(),
            root_color: Color::NEUTRAL,
            continuation: QueryContinuation::default(),
        }
    }
}
