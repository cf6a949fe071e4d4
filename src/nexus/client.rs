//! HTTP listing client for the Nexus2 content API
//!
//! One blocking request per listed path. The client does not retry,
//! so the first failure is returned to the walker as-is.
//!
//! Error mapping:
//! - no response (DNS, connect, timeout, broken body) -> `RemoteError::Transport`
//! - non-2xx status -> `RemoteError::Status` with the body verbatim
//! - 2xx body not matching the listing schema -> `RemoteError::Decode`

use crate::config::{Credentials, RepositoryUrl, WalkConfig};
use crate::error::{RemoteError, RemoteResult};
use crate::nexus::types::{normalize_path, ContentEntry, ListingResponse};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::time::Duration;
use tracing::trace;

/// Source of directory listings for the walker
pub trait Listing {
    /// Return the children of `path`, in server order.
    ///
    /// `path` is normalized (no leading separator); the empty string is
    /// the repository root.
    fn list(&self, path: &str) -> RemoteResult<Vec<ContentEntry>>;
}

impl<T: Listing + ?Sized> Listing for &T {
    fn list(&self, path: &str) -> RemoteResult<Vec<ContentEntry>> {
        (**self).list(path)
    }
}

/// Blocking client for one repository's content listings
pub struct NexusClient {
    agent: ureq::Agent,
    repository_url: RepositoryUrl,
    /// Precomputed `Authorization` header value
    authorization: Option<String>,
}

impl NexusClient {
    /// Create a client for a repository content root
    pub fn new(
        repository_url: RepositoryUrl,
        credentials: Option<&Credentials>,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent,
            repository_url,
            authorization: credentials.map(basic_auth),
        }
    }

    /// Create a client from validated configuration
    pub fn from_config(config: &WalkConfig) -> Self {
        Self::new(
            config.repository_url.clone(),
            config.credentials.as_ref(),
            config.timeout,
        )
    }

    /// Repository content root this client lists
    pub fn repository_url(&self) -> &RepositoryUrl {
        &self.repository_url
    }
}

impl Listing for NexusClient {
    fn list(&self, path: &str) -> RemoteResult<Vec<ContentEntry>> {
        let path = normalize_path(path);
        let url = self.repository_url.listing_url(path);
        trace!(url = %url, "GET");

        let mut request = self
            .agent
            .get(url.as_str())
            .set("Accept", "application/json");
        if let Some(auth) = &self.authorization {
            request = request.set("Authorization", auth);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
                return Err(RemoteError::Status {
                    path: path.to_string(),
                    status,
                    body,
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(RemoteError::Transport {
                    path: path.to_string(),
                    reason: transport.to_string(),
                });
            }
        };

        let listing: ListingResponse =
            serde_json::from_reader(response.into_reader()).map_err(|e| {
                if e.is_io() {
                    RemoteError::Transport {
                        path: path.to_string(),
                        reason: e.to_string(),
                    }
                } else {
                    RemoteError::Decode {
                        path: path.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        Ok(listing.data)
    }
}

/// `Authorization` header value for HTTP basic auth
fn basic_auth(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", BASE64.encode(raw))
}
