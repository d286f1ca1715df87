// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query-to-node resolution with "find next" memory.

use alloc::string::String;

use hashbrown::HashSet;
use icicle_tree::{NodeId, Tree};

/// Rule deciding whether a new query continues the remembered one.
///
/// Continuing keeps the set of already-visited matches, so resubmitting steps
/// to the next match. Otherwise the memory is reset to the new query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueryContinuation {
    /// Continue only when the query is unchanged.
    #[default]
    Exact,
    /// Continue when the query extends the remembered one (`"do"` then `"dog"`).
    /// The remembered query becomes the extended one.
    Refinement,
    /// Continue when the new query is a substring of the remembered one. The
    /// remembered query is only replaced on reset.
    Legacy,
}

impl QueryContinuation {
    /// Whether `query` continues `remembered`. Both are already lowercase.
    ///
    /// Nothing continues an empty memory.
    pub fn continues(self, remembered: &str, query: &str) -> bool {
        if remembered.is_empty() {
            return false;
        }
        match self {
            Self::Exact => remembered == query,
            Self::Refinement => query.starts_with(remembered),
            Self::Legacy => remembered.contains(query),
        }
    }
}

/// Remembered query text and the matches already visited for it.
#[derive(Clone, Debug, Default)]
pub struct SearchMemory {
    query: String,
    matched: HashSet<NodeId>,
}

impl SearchMemory {
    /// Remembered query, lowercase.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether `id` was already visited for the remembered query.
    pub fn is_matched(&self, id: NodeId) -> bool {
        self.matched.contains(&id)
    }

    /// Number of visited matches.
    pub fn matched_len(&self) -> usize {
        self.matched.len()
    }

    /// Forget the query and all visited matches.
    pub fn reset(&mut self) {
        self.query.clear();
        self.matched.clear();
    }

    /// Resolve `query` to the next unvisited matching node.
    ///
    /// The query is lowercased and compared to the remembered one with
    /// `continuation`; if it does not continue, memory resets first. Nodes are
    /// scanned in pre-order and the first whose lowercase name contains the
    /// query, and that was not visited yet, is recorded and returned.
    ///
    /// An empty query, or one with no unvisited match, returns `None` and
    /// leaves memory untouched beyond any reset.
    pub fn next_match(
        &mut self,
        tree: &Tree,
        query: &str,
        continuation: QueryContinuation,
    ) -> Option<NodeId> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return None;
        }
        if !continuation.continues(&self.query, &query) {
            self.matched.clear();
            self.query.clone_from(&query);
        } else if continuation == QueryContinuation::Refinement {
            self.query.clone_from(&query);
        }

        let hit = tree
            .iter()
            .find(|(id, node)| {
                !self.matched.contains(id) && node.name().to_lowercase().contains(query.as_str())
            })
            .map(|(id, _)| id);

        match hit {
            Some(id) => {
                self.matched.insert(id);
                #[cfg(feature = "tracing")]
                tracing::debug!(query = %query, node = tree[id].key(), "search matched");
                Some(id)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(query = %query, "search found no unvisited match");
                None
            }
        }
    }
}
