// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root-to-focus name path.

use alloc::string::String;
use core::fmt;

use icicle_tree::{NodeId, Tree};
use smallvec::SmallVec;

/// Separator used when a [`Breadcrumb`] is displayed.
pub const SEPARATOR: &str = ">";

/// Names from the root down to the focus, root first.
///
/// Stored as segments so names containing [`SEPARATOR`] survive truncation;
/// text is only produced at the display boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Breadcrumb {
    segments: SmallVec<[String; 8]>,
}

impl Breadcrumb {
    /// The breadcrumb for a focus on the root.
    pub fn root(tree: &Tree) -> Self {
        Self::to(tree, tree.root())
    }

    /// The breadcrumb for a focus on `id`, rebuilt from tree structure.
    ///
    /// Empty if `id` is not in `tree`.
    pub fn to(tree: &Tree, id: NodeId) -> Self {
        Self {
            segments: tree
                .path_to(id)
                .iter()
                .map(|&n| String::from(tree[n].name()))
                .collect(),
        }
    }

    /// Segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Name of the focus.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Drop the last segment, for a move to the focus's parent.
    ///
    /// The root segment is never removed.
    pub(crate) fn pop(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop();
        }
    }

    /// Display text with `separator` between segments.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(seg);
        }
        out
    }
}

/// Formats the segments joined by [`SEPARATOR`].
impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use icicle_tree::Record;

    #[test]
    fn names_with_separator_survive() {
        let tree = Tree::build(vec![
            Record::root("0", "root"),
            Record::child("1", "0", "Food > Dry"),
            Record::child("2", "1", "Kibble"),
        ])
        .unwrap();
        let mut crumb = Breadcrumb::to(&tree, tree.find("2").unwrap());
        assert_eq!(crumb.segments(), ["root", "Food > Dry", "Kibble"]);
        assert_eq!(crumb.to_string(), "root>Food > Dry>Kibble");

        crumb.pop();
        assert_eq!(crumb.last(), Some("Food > Dry"));
        crumb.pop();
        crumb.pop();
        assert_eq!(crumb, Breadcrumb::root(&tree));
        assert_eq!(crumb.join(" / "), "root");
    }
}
