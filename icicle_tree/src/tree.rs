// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction from records, and structural queries.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{MalformedTreeError, Record};

/// Identifier for a node in a [`Tree`].
///
/// Ids are dense and follow pre-order: the root is always index 0 and a
/// node's descendants directly follow it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    /// Position of this node in pre-order, usable as a dense array index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A root-to-node path, short enough to stay inline for typical category depths.
pub type NodePath = SmallVec<[NodeId; 8]>;

/// One category entry of a built [`Tree`].
#[derive(Clone, Debug)]
pub struct Node {
    key: String,
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: u32,
    subtree_size: usize,
    product_count: Option<u64>,
}

impl Node {
    /// The id assigned by the source data.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent node, `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in first-seen record order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Units this node contributes on its own. Every node counts as one.
    pub fn leaf_weight(&self) -> usize {
        1
    }

    /// Sum of [`Node::leaf_weight`] over this node and all descendants.
    pub fn subtree_size(&self) -> usize {
        self.subtree_size
    }

    /// Product count carried by the source record, if any.
    pub fn product_count(&self) -> Option<u64> {
        self.product_count
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Node ids are `u32`, so a tree holds at most `u32::MAX` records.
fn check_len(len: usize) -> Result<u32, MalformedTreeError> {
    u32::try_from(len).map_err(|_| MalformedTreeError::TooManyRecords(len))
}

/// An immutable, single-rooted tree of category nodes.
///
/// ## Example
///
/// ```rust
/// use icicle_tree::{Record, Tree};
///
/// let tree = Tree::build(vec![
///     Record::root("0", "root"),
///     Record::child("1", "0", "Dogs"),
///     Record::child("2", "1", "Leashes"),
///     Record::child("3", "0", "Cats"),
/// ])
/// .unwrap();
///
/// assert_eq!(tree.root_node().subtree_size(), 4);
/// let dogs = tree.find("1").unwrap();
/// assert_eq!(tree[dogs].subtree_size(), 2);
/// assert_eq!(tree.height(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Tree {
    /// Nodes in pre-order.
    nodes: Vec<Node>,
    by_key: HashMap<String, NodeId>,
    height: u32,
}

impl Tree {
    /// Build a tree from flat records.
    ///
    /// Children keep the order in which their records appear. Construction
    /// runs in linear time with a parent-lookup map and an explicit stack,
    /// so deep or looping inputs cannot exhaust the call stack.
    ///
    /// Fails if there is not exactly one parentless record, if ids repeat,
    /// if a parent id does not resolve, or if parent links form a cycle.
    pub fn build<I>(records: I) -> Result<Self, MalformedTreeError>
    where
        I: IntoIterator<Item = Record>,
    {
        let records: Vec<Record> = records.into_iter().collect();
        if records.is_empty() {
            return Err(MalformedTreeError::Empty);
        }
        check_len(records.len())?;

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
        for (i, rec) in records.iter().enumerate() {
            if index.insert(rec.id.as_str(), i).is_some() {
                return Err(MalformedTreeError::DuplicateId(rec.id.clone()));
            }
        }

        let mut root: Option<usize> = None;
        let mut children: Vec<Vec<usize>> = alloc::vec![Vec::new(); records.len()];
        for (i, rec) in records.iter().enumerate() {
            match rec.parent_id() {
                None => {
                    if let Some(first) = root {
                        return Err(MalformedTreeError::MultipleRoots {
                            first: records[first].id.clone(),
                            second: rec.id.clone(),
                        });
                    }
                    root = Some(i);
                }
                Some(parent) => {
                    let Some(&p) = index.get(parent) else {
                        return Err(MalformedTreeError::DanglingParent {
                            id: rec.id.clone(),
                            parent: parent.into(),
                        });
                    };
                    children[p].push(i);
                }
            }
        }
        let root = root.ok_or(MalformedTreeError::MissingRoot)?;
        drop(index);

        // Pre-order walk from the root. Every parent resolves and there is a
        // single root, so anything left unvisited sits on a parent cycle.
        let mut order: Vec<(usize, Option<NodeId>, u32)> = Vec::with_capacity(records.len());
        let mut visited = alloc::vec![false; records.len()];
        let mut stack = alloc::vec![(root, None, 0_u32)];
        while let Some((i, parent, depth)) = stack.pop() {
            visited[i] = true;
            order.push((i, parent, depth));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "`check_len` rejected record counts above u32::MAX."
            )]
            let me = NodeId((order.len() - 1) as u32);
            for &c in children[i].iter().rev() {
                stack.push((c, Some(me), depth + 1));
            }
        }
        if let Some(i) = visited.iter().position(|v| !v) {
            return Err(MalformedTreeError::Cycle {
                id: records[i].id.clone(),
            });
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(order.len());
        let mut by_key = HashMap::with_capacity(order.len());
        let mut height = 0;
        let mut records: Vec<Option<Record>> = records.into_iter().map(Some).collect();
        for (pos, &(i, parent, depth)) in order.iter().enumerate() {
            let Some(rec) = records[i].take() else {
                unreachable!("each record is visited exactly once");
            };
            #[allow(
                clippy::cast_possible_truncation,
                reason = "`check_len` rejected record counts above u32::MAX."
            )]
            let id = NodeId(pos as u32);
            if let Some(p) = parent {
                nodes[p.index()].children.push(id);
            }
            height = height.max(depth);
            by_key.insert(rec.id.clone(), id);
            nodes.push(Node {
                key: rec.id,
                name: rec.name,
                parent,
                children: Vec::new(),
                depth,
                subtree_size: 1,
                product_count: rec.product_count,
            });
        }

        // Reverse pre-order visits every child before its parent.
        for pos in (1..nodes.len()).rev() {
            let size = nodes[pos].subtree_size;
            if let Some(p) = nodes[pos].parent {
                nodes[p.index()].subtree_size += size;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(nodes = nodes.len(), height, "built category tree");

        Ok(Self {
            nodes,
            by_key,
            height,
        })
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The root node.
    pub fn root_node(&self) -> &Node {
        &self.nodes[0]
    }

    /// Number of nodes, which equals the number of source records.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a built tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Greatest node depth (0 for a lone root).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up a node, or `None` if `id` belongs to a different, larger tree.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Resolve a source id to a node.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    /// Parent of `id`, or `None` for the root and unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of `id`, or an empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// All nodes in pre-order, which is also record order among siblings.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "`check_len` rejected record counts above u32::MAX."
            )]
            (NodeId(i as u32), n)
        })
    }

    /// Walk from `id` (inclusive) up to the root (inclusive).
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).map(|_| id),
        }
    }

    /// Node ids from the root down to `id`, both inclusive.
    ///
    /// Empty for unknown ids.
    pub fn path_to(&self, id: NodeId) -> NodePath {
        let mut path: NodePath = self.ancestors(id).collect();
        path.reverse();
        path
    }

    /// The ancestor of `id` directly under the root (depth 1).
    ///
    /// Returns `id` itself for depth-1 nodes and `None` for the root.
    pub fn top_level_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .find(|&a| self.nodes[a.index()].depth == 1)
    }

    /// Whether `ancestor` lies on the path from the root to `id` (inclusive).
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        // Pre-order ids place a subtree in one contiguous range.
        match (self.get(ancestor), self.get(id)) {
            (Some(a), Some(_)) => {
                ancestor.index() <= id.index() && id.index() < ancestor.index() + a.subtree_size
            }
            _ => false,
        }
    }
}

impl core::ops::Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

/// Iterator over a node and its ancestors, nearest first.
///
/// Returned by [`Tree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}
