// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the icicle demos.

/// A small pet-supplies category table in the JSON record format.
///
/// Product counts are per subtree, as exported by the catalog.
pub const PET_SUPPLIES: &str = r#"[
    {"id": "0", "parent": "", "name": "Pet Supplies", "subtreeProductCount": 412},
    {"id": "1", "parent": "0", "name": "Dogs", "subtreeProductCount": 230},
    {"id": "2", "parent": "1", "name": "Leashes & Collars", "subtreeProductCount": 81},
    {"id": "3", "parent": "2", "name": "Retractable Leashes", "subtreeProductCount": 19},
    {"id": "4", "parent": "1", "name": "Dog Food", "subtreeProductCount": 149},
    {"id": "5", "parent": "4", "name": "Dry", "subtreeProductCount": 97},
    {"id": "6", "parent": "4", "name": "Wet", "subtreeProductCount": 52},
    {"id": "7", "parent": "0", "name": "Cats", "subtreeProductCount": 141},
    {"id": "8", "parent": "7", "name": "Cat Food", "subtreeProductCount": 88},
    {"id": "9", "parent": "7", "name": "Litter", "subtreeProductCount": 53},
    {"id": "10", "parent": "0", "name": "Fish", "subtreeProductCount": 41}
]"#;
