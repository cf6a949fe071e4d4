//! Depth-first walker over a repository content tree
//!
//! The walker lists the start path, writes every leaf it sees to the sink
//! and descends into every branch it has not expanded yet. Listing order is
//! preserved: output is a pre-order traversal, and a branch's whole subtree
//! is written before the branch's next sibling is looked at.
//!
//! Pending work is an explicit stack of listing frames rather than call
//! recursion, so repository depth is bounded by memory, not by the thread's
//! stack.
//!
//! ```text
//!   stack                      listing(path)
//!   ┌──────────────┐           ┌──────────────┐
//!   │ releases/org/│ ◄──push── │ branch entry │  (not yet visited)
//!   ├──────────────┤           ├──────────────┤
//!   │ releases/    │           │ leaf entry   │ ──► sink.append
//!   ├──────────────┤           └──────────────┘
//!   │ "" (root)    │
//!   └──────────────┘
//! ```
//!
//! The first error of any kind ends the walk and is returned unchanged.

use crate::error::{Result, WalkerError};
use crate::nexus::types::{normalize_path, ContentEntry};
use crate::nexus::Listing;
use crate::output::{OutputRecord, RecordSink};
use crate::walker::visited::VisitedSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a completed walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Paths listed, the start path included
    pub dirs: u64,
    /// Leaf records written
    pub files: u64,
    /// Sum of leaf sizes
    pub bytes: u64,
    /// Leaves reported with size zero
    pub zero_size: u64,
    /// Branch entries skipped because their path was already expanded
    pub duplicates: u64,
    /// Deepest stack of open listings
    pub max_depth: usize,
    pub duration: Duration,
}

/// Progress snapshot passed to the observer after each listing
#[derive(Debug, Clone, Default)]
pub struct WalkProgress {
    pub dirs: u64,
    pub files: u64,
    pub bytes: u64,
    pub zero_size: u64,
    /// Listings currently open on the stack
    pub depth: usize,
    pub elapsed: Duration,
}

impl WalkProgress {
    pub fn files_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.files as f64 / secs
        } else {
            0.0
        }
    }
}

/// Children of one listed path still waiting to be processed
struct Frame {
    path: String,
    entries: std::vec::IntoIter<ContentEntry>,
}

/// One traversal session.
///
/// Owns the visited set and drives the listing source and sink. Consumed by
/// [`TreeWalker::walk`], so state never outlives a single traversal.
pub struct TreeWalker<'a, L: Listing, S: RecordSink> {
    listing: L,
    sink: S,
    visited: VisitedSet,
    stats: WalkStats,
    observer: Option<Box<dyn FnMut(&WalkProgress) + 'a>>,
}

impl<'a, L: Listing, S: RecordSink> TreeWalker<'a, L, S> {
    pub fn new(listing: L, sink: S) -> Self {
        Self {
            listing,
            sink,
            visited: VisitedSet::new(),
            stats: WalkStats::default(),
            observer: None,
        }
    }

    /// Call `observer` with a progress snapshot after every listing
    pub fn with_observer(mut self, observer: impl FnMut(&WalkProgress) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Walk everything reachable from `start`.
    ///
    /// The start path counts as visited, so a listing that links back to it
    /// does not cause a second request. It is normalized the same way as
    /// branch `relativePath`s, so `/releases/` and a branch `releases/` share
    /// one key.
    pub fn walk(mut self, start: &str) -> Result<WalkStats> {
        let started = Instant::now();
        let start = normalize_path(start);
        info!(path = %display_path(start), "Starting walk");

        let mut stack: Vec<Frame> = Vec::new();
        self.visited.insert(start);
        let root = self.open(start, stack.len(), started)?;
        stack.push(root);

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.entries.next(),
                None => break,
            };

            let Some(entry) = next else {
                if let Some(done) = stack.pop() {
                    debug!(path = %display_path(&done.path), "done");
                }
                continue;
            };

            if entry.leaf {
                self.emit(&entry)?;
                continue;
            }

            let path = entry.normalized_path();
            if !self.visited.insert(path) {
                debug!(path = %display_path(path), "already visited, skipping");
                self.stats.duplicates += 1;
                continue;
            }

            let frame = self.open(path, stack.len(), started)?;
            stack.push(frame);
        }

        self.stats.duration = started.elapsed();
        info!(
            dirs = self.stats.dirs,
            files = self.stats.files,
            bytes = self.stats.bytes,
            "Walk finished"
        );
        Ok(self.stats)
    }

    /// List `path` and turn the response into a frame
    fn open(&mut self, path: &str, depth: usize, started: Instant) -> Result<Frame> {
        debug!(path = %display_path(path), "iterate");
        let entries = self.listing.list(path)?;

        self.stats.dirs += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth + 1);
        self.notify(depth + 1, started);

        Ok(Frame {
            path: path.to_string(),
            entries: entries.into_iter(),
        })
    }

    /// Validate a leaf and append its record
    fn emit(&mut self, entry: &ContentEntry) -> Result<()> {
        let size = u64::try_from(entry.size_on_disk).map_err(|_| WalkerError::NegativeSize {
            resource: entry.resource_uri.clone(),
            size: entry.size_on_disk,
        })?;

        if size == 0 {
            warn!(resource = %entry.resource_uri, "sizeOnDisk == 0");
            self.stats.zero_size += 1;
        }

        self.sink.append(&OutputRecord {
            file: entry.normalized_path().to_string(),
            size,
        })?;

        self.stats.files += 1;
        self.stats.bytes = self.stats.bytes.saturating_add(size);
        Ok(())
    }

    fn notify(&mut self, depth: usize, started: Instant) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&WalkProgress {
                dirs: self.stats.dirs,
                files: self.stats.files,
                bytes: self.stats.bytes,
                zero_size: self.stats.zero_size,
                depth,
                elapsed: started.elapsed(),
            });
        }
    }
}

/// Walk `start` with a fresh session
pub fn walk<L: Listing, S: RecordSink>(listing: L, sink: S, start: &str) -> Result<WalkStats> {
    TreeWalker::new(listing, sink).walk(start)
}

/// Root shows as `/` in logs
fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
