//! Listing response types
//!
//! These mirror the JSON body of a Nexus2 content listing. Every entry field
//! is required: a response missing one is rejected rather than defaulted,
//! so upstream schema changes surface as decode errors.

use serde::Deserialize;

/// Body of `GET .../content/{path}` with `Accept: application/json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingResponse {
    pub data: Vec<ContentEntry>,
}

/// One child of a listed path
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Absolute URL of the resource on the server
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,

    /// Path inside the repository, with a leading separator
    pub relative_path: String,

    /// Display name
    pub text: String,

    /// True for artifacts, false for directories
    pub leaf: bool,

    pub last_modified: String,

    /// Bytes on disk. Only meaningful for leaves.
    pub size_on_disk: i64,
}

impl ContentEntry {
    /// Check if this entry is a directory to descend into
    pub fn is_branch(&self) -> bool {
        !self.leaf
    }

    /// Relative path without its leading separator
    pub fn normalized_path(&self) -> &str {
        normalize_path(&self.relative_path)
    }
}

/// Strip one leading `/` from a repository path.
///
/// Normalized paths are used as request paths, dedup keys and output
/// file names. The repository root normalizes to the empty string.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
