//! nexus-walker - Nexus2 Repository Inventory
//!
//! Walks the content tree of a Nexus2 repository through its REST listing
//! API and writes a flat inventory of every artifact (path and size) as
//! newline-delimited JSON.
//!
//! # Features
//!
//! - **Exactly-once expansion**: every directory path is listed at most
//!   once, even when listings contain duplicates or links back to an
//!   ancestor.
//!
//! - **Deterministic output**: records are written in depth-first pre-order
//!   of the server's listing order, so the same tree always yields the same
//!   file.
//!
//! - **Fail-fast**: the first transport, protocol, validation or write error
//!   ends the walk; records written before it are kept.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Nexus2 Server                             │
//! │      GET /service/local/repositories/{repo}/content/{path}       │
//! └─────────────────────────────┬───────────────────────────────────┘
//!                               │ JSON listing
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         TreeWalker                               │
//! │   leaf ──► validate size ──► OutputRecord                        │
//! │   branch ──► VisitedSet? ──► push listing frame                  │
//! └─────────────────────────────┬───────────────────────────────────┘
//!                               │
//!                               ▼
//!                    ┌──────────────────┐
//!                    │   JsonlWriter    │
//!                    │  (output.jsonl)  │
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Whole repository
//! nexus-walker --url https://nexus.example.com/nexus --repository releases
//!
//! # One group, authenticated, custom output
//! nexus-walker --url https://nexus.example.com/nexus --repository releases \
//!     --prefix /com/example -u ci -P secret -o example.jsonl
//!
//! # Largest artifacts
//! jq -s 'sort_by(-.size) | .[:10]' output.jsonl
//! ```

pub mod config;
pub mod error;
pub mod nexus;
pub mod output;
pub mod progress;
pub mod walker;

pub use config::{CliArgs, RepositoryUrl, WalkConfig};
pub use error::{Result, WalkerError};
pub use walker::{TreeWalker, WalkStats};
