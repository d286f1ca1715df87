// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while loading records and building a [`Tree`](crate::Tree).

use alloc::string::String;
use core::fmt;

/// The records do not describe a single, connected, acyclic tree.
///
/// Returned by [`Tree::build`](crate::Tree::build). No partial tree is ever
/// produced alongside this error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedTreeError {
    /// There were no records at all.
    Empty,
    /// No record has an absent parent.
    MissingRoot,
    /// More than one record has an absent parent.
    MultipleRoots {
        /// Id of the first parentless record, in record order.
        first: String,
        /// Id of the second parentless record, in record order.
        second: String,
    },
    /// Two records share the same id.
    DuplicateId(String),
    /// A record names a parent id that no record carries.
    DanglingParent {
        /// Id of the record holding the reference.
        id: String,
        /// The parent id that could not be resolved.
        parent: String,
    },
    /// A record is not reachable from the root because its ancestry loops.
    Cycle {
        /// Id of the first record (in record order) caught in a cycle.
        id: String,
    },
    /// There are more records than node ids can address.
    TooManyRecords(usize),
}

impl fmt::Display for MalformedTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no records to build a tree from"),
            Self::MissingRoot => f.write_str("no record without a parent"),
            Self::MultipleRoots { first, second } => {
                write!(f, "more than one root record: `{first}` and `{second}`")
            }
            Self::DuplicateId(id) => write!(f, "duplicate record id `{id}`"),
            Self::DanglingParent { id, parent } => {
                write!(f, "record `{id}` references missing parent `{parent}`")
            }
            Self::Cycle { id } => write!(f, "record `{id}` is part of a parent cycle"),
            Self::TooManyRecords(len) => write!(f, "{len} records exceed the u32 node id range"),
        }
    }
}

impl core::error::Error for MalformedTreeError {}

/// The record source could not produce a usable tree.
///
/// This is fatal to a session: nothing is laid out or rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataLoadError {
    /// The source could not be reached or read.
    Unavailable(String),
    /// The source was read but its contents could not be parsed into records.
    Parse(String),
    /// The records parsed fine but do not form a valid tree.
    Malformed(MalformedTreeError),
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "data source unavailable: {msg}"),
            Self::Parse(msg) => write!(f, "failed to parse records: {msg}"),
            Self::Malformed(_) => f.write_str("records do not form a tree"),
        }
    }
}

impl core::error::Error for DataLoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MalformedTreeError> for DataLoadError {
    fn from(err: MalformedTreeError) -> Self {
        Self::Malformed(err)
    }
}
