//! Set of branch paths already expanded during one walk

use std::collections::HashSet;

/// Normalized branch paths that have been listed (or are being listed).
///
/// Grows monotonically for the lifetime of one walk. A path is inserted
/// before it is listed, so a cross-link back to any ancestor or a
/// repeated listing entry is never expanded twice.
#[derive(Debug, Default)]
pub struct VisitedSet {
    paths: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as visited. Returns false if it already was.
    pub fn insert(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }
}
