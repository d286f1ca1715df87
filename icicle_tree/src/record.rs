// Copyright 2025 the Icicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat input records and the [`RecordSource`] seam.

use alloc::string::String;
use alloc::vec::Vec;

use crate::DataLoadError;

/// One flat row of the category table.
///
/// `parent` is `None` (or an empty string, as CSV exports produce) only for
/// the single root record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Unique id assigned by the source data.
    pub id: String,
    /// Id of the parent record, if any.
    #[cfg_attr(feature = "serde", serde(default, alias = "parentId"))]
    pub parent: Option<String>,
    /// Display label.
    pub name: String,
    /// Number of products filed under this category and its descendants.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            rename = "subtreeProductCount",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub product_count: Option<u64>,
}

impl Record {
    /// A parentless record.
    pub fn root(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            name: name.into(),
            product_count: None,
        }
    }

    /// A record filed under `parent`.
    pub fn child(id: impl Into<String>, parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.into()),
            name: name.into(),
            product_count: None,
        }
    }

    /// Attach a product count.
    #[must_use]
    pub fn with_products(mut self, count: u64) -> Self {
        self.product_count = Some(count);
        self
    }

    /// The parent id with empty strings treated as absent.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

/// A source of flat records, read once at session start.
///
/// Hosts implement this for whatever transport they use (file, network,
/// embedded table). Errors are fatal: a session that fails to load never
/// lays out or renders anything.
pub trait RecordSource {
    /// Produce every record, in source order.
    fn load(&mut self) -> Result<Vec<Record>, DataLoadError>;
}

impl RecordSource for Vec<Record> {
    fn load(&mut self) -> Result<Vec<Record>, DataLoadError> {
        Ok(core::mem::take(self))
    }
}

/// Records held in a JSON array of objects.
///
/// Each object needs `id` and `name`; `parent` (or `parentId`) and
/// `subtreeProductCount` are optional. Unknown keys are ignored.
///
/// ```rust
/// use icicle_tree::{JsonRecords, RecordSource};
///
/// let mut source = JsonRecords::new(
///     r#"[{"id": "0", "name": "Pets"}, {"id": "1", "parent": "0", "name": "Dogs"}]"#,
/// );
/// let records = source.load().unwrap();
/// assert_eq!(records[1].parent_id(), Some("0"));
/// ```
#[cfg(feature = "json")]
#[derive(Clone, Debug)]
pub struct JsonRecords<'a> {
    text: &'a str,
}

#[cfg(feature = "json")]
impl<'a> JsonRecords<'a> {
    /// Wrap JSON text.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

#[cfg(feature = "json")]
impl RecordSource for JsonRecords<'_> {
    fn load(&mut self) -> Result<Vec<Record>, DataLoadError> {
        use alloc::string::ToString;

        let records: Vec<Record> =
            serde_json::from_str(self.text).map_err(|e| DataLoadError::Parse(e.to_string()))?;
        #[cfg(feature = "tracing")]
        tracing::info!(records = records.len(), "loaded records from json");
        Ok(records)
    }
}
