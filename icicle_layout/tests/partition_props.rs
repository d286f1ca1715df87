// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for partition completeness and subtree additivity.

use icicle_layout::{Extent, IciclePartition, ParentShare, Partitioner, Projection, partition};
use icicle_tree::{Record, Tree};
use proptest::prelude::*;
use proptest::sample::Index;

/// Build a random tree where node `i` hangs under one of the nodes before it.
fn random_tree(parents: &[Index]) -> Tree {
    let mut records = vec![Record::root("n0", "root")];
    for (offset, pick) in parents.iter().enumerate() {
        let i = offset + 1;
        let parent = pick.index(i);
        records.push(Record::child(
            format!("n{i}"),
            format!("n{parent}"),
            format!("node {i}"),
        ));
    }
    Tree::build(records).expect("generated records always form a tree")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn prop_children_tile_parent(parents in prop::collection::vec(any::<Index>(), 0..64)) {
        let tree = random_tree(&parents);
        let layout = partition(&tree, Extent::new(1150.0, 750.0));

        for (id, node) in tree.iter() {
            let Some(&first) = node.children().first() else { continue };
            let parent = layout.rect(id).unwrap();
            let first = layout.rect(first).unwrap();
            prop_assert!(close(first.x0, parent.x0));

            let mut cursor = parent.x0;
            let mut total = 0.0;
            for &c in node.children() {
                let r = layout.rect(c).unwrap();
                prop_assert!(close(r.x0, cursor), "gap or overlap between siblings");
                prop_assert!(r.width() > 0.0);
                cursor = r.x1;
                total += r.width();
            }
            prop_assert!(close(cursor, parent.x1));
            prop_assert!(close(total, parent.width()));
        }
    }

    #[test]
    fn prop_subtree_sizes_add_up(parents in prop::collection::vec(any::<Index>(), 0..64)) {
        let tree = random_tree(&parents);
        prop_assert_eq!(tree.root_node().subtree_size(), parents.len() + 1);
        for (_, node) in tree.iter() {
            let below: usize = node.children().iter().map(|&c| tree[c].subtree_size()).sum();
            prop_assert_eq!(node.subtree_size(), 1 + below);
        }
    }

    #[test]
    fn prop_depth_bands_follow_parents(parents in prop::collection::vec(any::<Index>(), 0..64)) {
        let tree = random_tree(&parents);
        let extent = Extent::new(600.0, 400.0);
        let layout = IciclePartition { parent_share: ParentShare::Reserve }.partition(&tree, extent);

        for (id, node) in tree.iter() {
            let r = layout.rect(id).unwrap();
            prop_assert!(r.y1 <= extent.depth + 1e-9);
            if let Some(p) = node.parent() {
                let pr = layout.rect(p).unwrap();
                prop_assert!(close(r.y0, pr.y1));
                prop_assert!(close(r.height(), pr.height()));
                prop_assert!(r.x0 >= pr.x0 - 1e-9 && r.x1 <= pr.x1 + 1e-9);
            }
        }
    }

    #[test]
    fn prop_focus_maps_to_full_breadth(
        parents in prop::collection::vec(any::<Index>(), 0..64),
        pick in any::<Index>(),
    ) {
        let tree = random_tree(&parents);
        let extent = Extent::new(1150.0, 750.0);
        let layout = partition(&tree, extent);
        let (focus, _) = tree.iter().nth(pick.index(tree.len())).unwrap();

        let shown = Projection::onto(&layout, focus).unwrap().apply_all(&layout);
        let f = shown[focus.index()].0;
        prop_assert!(close(f.x0, 0.0));
        prop_assert!(close(f.x1, extent.breadth));
        prop_assert!(close(f.y0, 0.0));
        prop_assert!(shown.iter().all(|d| d.0.x0.is_finite() && d.0.y1.is_finite()));
    }
}
