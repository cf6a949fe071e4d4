//! Repository tree walker
//!
//! This module implements a sequential depth-first walk over the content
//! listing API. One `TreeWalker` is one traversal session: it owns the
//! visited set and writes leaves to the sink as they are discovered.
//!
//! # Architecture
//!
//! ```text
//!                     ┌─────────────────────────┐
//!                     │       TreeWalker        │
//!                     │  - frame stack (DFS)    │
//!                     │  - VisitedSet           │
//!                     └───────────┬─────────────┘
//!                                 │
//!              ┌──────────────────┴──────────────────┐
//!              │                                     │
//!        ┌─────▼─────┐                         ┌─────▼─────┐
//!        │  Listing  │                         │RecordSink │
//!        │  (HTTP)   │                         │  (NDJSON) │
//!        └───────────┘                         └───────────┘
//! ```

pub mod tree;
pub mod visited;

pub use tree::{walk, TreeWalker, WalkProgress, WalkStats};
pub use visited::VisitedSet;
