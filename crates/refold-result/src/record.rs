//! Result records as returned by a query response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RawFields;

/// One search hit.
///
/// `parent_result` is a lookup key (the parent's `unique_id`), never an owning
/// reference. `attachments` and `child_results` are filled in by folding; on a
/// freshly deserialized top result `child_results` holds the flat list of
/// related records to fold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultRecord {
    /// Identity of the record, unique within one query response.
    pub unique_id: String,
    /// Display title.
    pub title: String,
    /// Location of the underlying document.
    pub uri: String,
    /// Text excerpt.
    pub excerpt: String,
    /// Open-ended field payload.
    pub raw: RawFields,
    /// `unique_id` of the record this one is subordinate to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_result: Option<String>,
    /// Records that are parts of this record's document.
    pub attachments: Vec<Self>,
    /// Separate documents grouped with this record (top results only).
    pub child_results: Vec<Self>,
    /// Server-reported number of related records; may exceed what was returned.
    pub total_number_of_child_results: usize,
    /// Highlight ranges in the title.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title_highlights: Vec<Highlight>,
    /// Highlight ranges in the excerpt.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excerpt_highlights: Vec<Highlight>,
}

impl ResultRecord {
    /// Creates an empty record with the given identity.
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            ..Self::default()
        }
    }

    /// Sets the parent back-reference.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_result = Some(parent_id.into());
        self
    }

    /// Counts every record folded below this one.
    pub fn folded_len(&self) -> usize {
        self.attachments
            .iter()
            .chain(&self.child_results)
            .map(|r| 1 + r.folded_len())
            .sum()
    }

    /// Returns true if the server reported related records beyond those folded here.
    pub fn has_unfetched_children(&self) -> bool {
        self.total_number_of_child_results > self.folded_len()
    }
}

/// A highlighted span: byte offset and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Start offset.
    pub offset: usize,
    /// Length of the span.
    pub length: usize,
}

/// A deserialized query response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultSet {
    /// Top results in response order.
    pub results: Vec<ResultRecord>,
    /// Total number of matches reported by the server.
    pub total_count: usize,
    /// Group-level related record count, when the response carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_number_of_child_results: Option<usize>,
    /// Query terms and their expansions to highlight.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub terms_to_highlight: BTreeMap<String, Vec<String>>,
    /// Query phrases and their expansions to highlight.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub phrases_to_highlight: BTreeMap<String, Vec<String>>,
}
