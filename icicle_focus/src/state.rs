// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus state machine: click and search transitions.

use icicle_tree::{NodeId, Tree};

use crate::{Breadcrumb, QueryContinuation, SearchMemory};

/// How the focus moved in a [`Transition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// To an ancestor of the previous focus.
    Up,
    /// Into the previous focus's subtree.
    Down,
    /// Anywhere else in the tree.
    Lateral,
    /// Focus did not change (clicking the root while it is focused).
    Stay,
}

/// The outcome of one click or search transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Focus before the event.
    pub previous: NodeId,
    /// Focus after the event.
    pub focus: NodeId,
    /// Classification of the move.
    pub direction: Direction,
}

/// Focus, breadcrumb and search memory for one visualization session.
///
/// All mutation goes through [`FocusState::on_node_clicked`] and
/// [`FocusState::on_search_submitted`]; the breadcrumb is derived from the
/// focus on every transition and never edited independently.
///
/// ```rust
/// use icicle_focus::FocusState;
/// use icicle_tree::{Record, Tree};
///
/// let tree = Tree::build(vec![
///     Record::root("0", "root"),
///     Record::child("1", "0", "Dogs"),
///     Record::child("2", "1", "Leashes"),
///     Record::child("3", "0", "Cats"),
/// ])
/// .unwrap();
/// let dogs = tree.find("1").unwrap();
///
/// let mut state = FocusState::new(&tree);
/// state.on_node_clicked(&tree, dogs);
/// assert_eq!(state.focus(), dogs);
/// assert_eq!(state.breadcrumb().segments(), ["root", "Dogs"]);
///
/// // Clicking the focus again zooms back out.
/// state.on_node_clicked(&tree, dogs);
/// assert_eq!(state.focus(), tree.root());
/// assert_eq!(state.breadcrumb().segments(), ["root"]);
/// ```
#[derive(Clone, Debug)]
pub struct FocusState {
    focus: NodeId,
    breadcrumb: Breadcrumb,
    search: SearchMemory,
}

impl FocusState {
    /// Initial state: focused on the root, with no search memory.
    pub fn new(tree: &Tree) -> Self {
        Self {
            focus: tree.root(),
            breadcrumb: Breadcrumb::root(tree),
            search: SearchMemory::default(),
        }
    }

    /// The focused node.
    pub fn focus(&self) -> NodeId {
        self.focus
    }

    /// Names from the root to the focus.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// Search memory.
    pub fn search(&self) -> &SearchMemory {
        &self.search
    }

    /// Handle a click on `p`.
    ///
    /// - Clicking the focus moves up to its parent.
    /// - Clicking any other node focuses it.
    /// - Clicking the root always focuses the root, so upward moves stop there.
    ///
    /// Returns `None`, changing nothing, if `p` is not in `tree`.
    pub fn on_node_clicked(&mut self, tree: &Tree, p: NodeId) -> Option<Transition> {
        let clicked = tree.get(p)?;
        let previous = self.focus;
        let next = match clicked.parent() {
            None => p,
            Some(parent) if previous == p => parent,
            Some(_) => p,
        };

        let previous_parent = tree.parent_of(previous);
        if next == tree.root() {
            self.breadcrumb = Breadcrumb::root(tree);
        } else if previous_parent == Some(next) {
            self.breadcrumb.pop();
        } else {
            self.breadcrumb = Breadcrumb::to(tree, next);
        }
        self.focus = next;
        debug_assert_eq!(
            self.breadcrumb,
            Breadcrumb::to(tree, next),
            "breadcrumb must match the path to the focus"
        );

        let direction = if next == previous {
            Direction::Stay
        } else if tree.is_ancestor(next, previous) {
            Direction::Up
        } else if tree.is_ancestor(previous, next) {
            Direction::Down
        } else {
            Direction::Lateral
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = tree[previous].key(),
            to = tree[next].key(),
            ?direction,
            "focus transition"
        );

        Some(Transition {
            previous,
            focus: next,
            direction,
        })
    }

    /// Handle a submitted search query.
    ///
    /// The next unvisited match (see [`SearchMemory::next_match`]) is treated
    /// exactly like a click on that node. With no match, nothing changes and
    /// `None` is returned.
    pub fn on_search_submitted(
        &mut self,
        tree: &Tree,
        query: &str,
        continuation: QueryContinuation,
    ) -> Option<Transition> {
        let hit = self.search.next_match(tree, query, continuation)?;
        self.on_node_clicked(tree, hit)
    }
}
