//! Page and aggregate types

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// One decoded response from the external tool: a single slice of a
/// paginated collection.
///
/// Unknown response fields are ignored; a response without a
/// `resources` array does not deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Result items carried by this page
    pub resources: Vec<JsonValue>,

    /// Link to the next page; `null` or absent ends pagination
    #[serde(default)]
    pub next_url: Option<String>,

    /// Total page count as reported by the API, used only for progress
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl Page {
    /// Decode a raw response body fetched from `path`.
    ///
    /// Anything that does not deserialize into a page object (invalid
    /// JSON, JSON `null`, a non-object, a missing `resources` array)
    /// is a parse error.
    pub fn parse(path: &str, raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::broken_response(path, e))
    }

    /// Number of resources on this page
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether this page carries no resources
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}

/// The merged virtual single-page response combining all pages.
///
/// Struct field order here is the serialized key order.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregate {
    /// Length of the accumulated resource sequence
    pub total_results: usize,

    /// Always `1`: the output presents itself as a single page
    pub total_pages: u32,

    /// Always `null`
    pub prev_url: Option<String>,

    /// Always `null`
    pub next_url: Option<String>,

    /// Concatenation of all pages' resources, in fetch order
    pub resources: Vec<JsonValue>,
}

impl Aggregate {
    /// Build the aggregate from accumulated resources.
    pub fn from_resources(resources: Vec<JsonValue>) -> Self {
        Self {
            total_results: resources.len(),
            total_pages: 1,
            prev_url: None,
            next_url: None,
            resources,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
