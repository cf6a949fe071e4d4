//! In-memory listing source
//!
//! Serves a fixed tree from a map of normalized path -> entries and records
//! every path it is asked for. Used to drive the walker without a server.

use crate::error::{RemoteError, RemoteResult};
use crate::nexus::client::Listing;
use crate::nexus::types::{normalize_path, ContentEntry};
use std::cell::RefCell;
use std::collections::HashMap;

/// Listing backed by a map, recording each request in order
#[derive(Debug, Default)]
pub struct MemoryListing {
    dirs: HashMap<String, Vec<ContentEntry>>,
    failures: HashMap<String, RemoteError>,
    requests: RefCell<Vec<String>>,
}

impl MemoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the children of `path`
    pub fn dir(mut self, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.dirs.insert(normalize_path(path).to_string(), entries);
        self
    }

    /// Make listing `path` fail with `error`
    pub fn fail(mut self, path: &str, error: RemoteError) -> Self {
        self.failures.insert(normalize_path(path).to_string(), error);
        self
    }

    /// Paths requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Number of times `path` was requested
    pub fn request_count(&self, path: &str) -> usize {
        let path = normalize_path(path);
        self.requests.borrow().iter().filter(|p| *p == path).count()
    }
}

impl Listing for MemoryListing {
    fn list(&self, path: &str) -> RemoteResult<Vec<ContentEntry>> {
        let path = normalize_path(path);
        self.requests.borrow_mut().push(path.to_string());

        if let Some(err) = self.failures.get(path) {
            return Err(err.clone());
        }

        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| RemoteError::Status {
                path: path.to_string(),
                status: 404,
                body: format!("Item not found on path \"/{}\"!", path),
            })
    }
}

/// Directory entry with a leading-separator relative path
pub fn branch(relative_path: &str) -> ContentEntry {
    ContentEntry {
        resource_uri: format!("memory://content{}", relative_path),
        relative_path: relative_path.to_string(),
        text: entry_name(relative_path),
        leaf: false,
        last_modified: String::new(),
        size_on_disk: -1,
    }
}

/// Artifact entry with a leading-separator relative path
pub fn leaf(relative_path: &str, size: i64) -> ContentEntry {
    ContentEntry {
        resource_uri: format!("memory://content{}", relative_path),
        relative_path: relative_path.to_string(),
        text: entry_name(relative_path),
        leaf: true,
        last_modified: String::new(),
        size_on_disk: size,
    }
}

fn entry_name(relative_path: &str) -> String {
    relative_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
