//! Nexus2 content listing module
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     TreeWalker                       │
//! └──────────────────────────┬──────────────────────────┘
//!                            │ Listing::list(path)
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//! ┌────────────────────────┐  ┌────────────────────────┐
//! │      NexusClient       │  │     MemoryListing      │
//! │  GET .../content/path  │  │  fixed tree, records   │
//! │  Accept: json, basic   │  │  every request         │
//! └────────────────────────┘  └────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use nexus_walker::config::RepositoryUrl;
//! use nexus_walker::nexus::{Listing, NexusClient};
//! use std::time::Duration;
//!
//! let url = RepositoryUrl::new("https://nexus.example.com/nexus", "releases").unwrap();
//! let client = NexusClient::new(url, None, Duration::from_secs(30));
//!
//! for entry in client.list("/com/example/").unwrap() {
//!     println!("{} leaf={} size={}", entry.relative_path, entry.leaf, entry.size_on_disk);
//! }
//! ```

pub mod client;
pub mod memory;
pub mod types;

pub use client::{Listing, NexusClient};
pub use memory::MemoryListing;
pub use types::{normalize_path, ContentEntry, ListingResponse};
