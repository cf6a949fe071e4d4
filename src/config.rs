//! Configuration types for nexus-walker
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation
//! - Repository content URL construction

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Path segments between the base URL and the repository name
const CONTENT_PREFIX: [&str; 3] = ["service", "local", "repositories"];

/// Nexus2 repository walker with NDJSON output
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nexus-walker",
    version,
    about = "Nexus2 repository walker with NDJSON output",
    long_about = "Walks the content tree of a Nexus2 repository through its REST listing API \
                  and writes one JSON record per artifact (file path and size).",
    after_help = "EXAMPLES:\n    \
        nexus-walker --url https://nexus.example.com/nexus --repository releases\n    \
        nexus-walker --url http://10.0.0.5:8081/nexus --repository thirdparty -o thirdparty.jsonl\n    \
        nexus-walker --url https://nexus/nexus --repository releases --prefix /com/example -u ci -P secret"
)]
pub struct CliArgs {
    /// Output file (NDJSON, created or truncated)
    #[arg(short, long, default_value = "output.jsonl", value_name = "FILE")]
    pub output: PathBuf,

    /// Nexus2 base URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Repository to walk
    #[arg(short, long, value_name = "NAME")]
    pub repository: Option<String>,

    /// Username for HTTP basic auth
    #[arg(short, long, default_value = "", value_name = "USER")]
    pub username: String,

    /// Password for HTTP basic auth
    #[arg(short = 'P', long, default_value = "", value_name = "PASS")]
    pub password: String,

    /// Path to start walking from
    #[arg(long, default_value = "/", value_name = "PATH")]
    pub prefix: String,

    /// Concurrency to fetch (accepted, the walk is sequential)
    #[arg(
        short = 'c',
        long,
        default_value = "5",
        value_name = "NUM",
        allow_negative_numbers = true
    )]
    pub concurrency: i64,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Quiet mode - suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (log every listing request)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// HTTP basic auth credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Content root of one repository:
/// `{base}/service/local/repositories/{repository}/content`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    content: Url,
    repository: String,
}

impl RepositoryUrl {
    /// Build the content root from a base URL and repository name
    pub fn new(base: &str, repository: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: base.to_string(),
            reason,
        };

        let mut content = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;

        if content.scheme() != "http" && content.scheme() != "https" {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                content.scheme()
            )));
        }

        content.set_query(None);
        content.set_fragment(None);

        content
            .path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(CONTENT_PREFIX)
            .push(repository)
            .push("content");

        Ok(Self {
            content,
            repository: repository.to_string(),
        })
    }

    /// Content root URL
    pub fn content_url(&self) -> &Url {
        &self.content
    }

    /// Repository name
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// URL listing the given normalized path
    ///
    /// Each `/`-separated segment is percent-encoded on its own, so a
    /// trailing slash (directory listing) survives as an empty last segment.
    /// The empty path lists the repository root (`.../content/`).
    pub fn listing_url(&self, path: &str) -> Url {
        let mut url = self.content.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(path.split('/'));
        }
        url
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Repository content root
    pub repository_url: RepositoryUrl,

    /// Basic auth credentials (only when a username was given)
    pub credentials: Option<Credentials>,

    /// Output NDJSON path
    pub output_path: PathBuf,

    /// Path to start walking from, as given
    pub prefix: String,

    /// Clamped concurrency. Not consulted by the walk.
    pub concurrency: usize,

    /// Per-request timeout
    pub timeout: Duration,

    /// Show progress indicator
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl WalkConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let url = args
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let repository = args
            .repository
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or(ConfigError::MissingRepository)?;

        let repository_url = RepositoryUrl::new(url, repository)?;

        if args.timeout == 0 {
            return Err(ConfigError::InvalidTimeout { secs: args.timeout });
        }

        // Validate output path
        if let Some(parent) = args.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ConfigError::InvalidOutputPath {
                    path: args.output.clone(),
                    reason: format!("Parent directory '{}' does not exist", parent.display()),
                });
            }
        }

        let credentials = if args.username.is_empty() {
            None
        } else {
            Some(Credentials {
                username: args.username,
                password: args.password,
            })
        };

        Ok(Self {
            repository_url,
            credentials,
            output_path: args.output,
            prefix: args.prefix,
            concurrency: clamp_concurrency(args.concurrency),
            timeout: Duration::from_secs(args.timeout),
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }
}

fn clamp_concurrency(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["nexus-walker"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let a = args(&[]);
        assert_eq!(a.output, PathBuf::from("output.jsonl"));
        assert_eq!(a.prefix, "/");
        assert_eq!(a.concurrency, 5);
        assert_eq!(a.timeout, 30);
        assert!(a.url.is_none());
        assert!(a.repository.is_none());
    }

    #[test]
    fn test_missing_url() {
        let err = WalkConfig::from_args(args(&["--repository", "releases"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl));

        let err =
            WalkConfig::from_args(args(&["--url", "", "--repository", "releases"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl));
    }

    #[test]
    fn test_missing_repository() {
        let err = WalkConfig::from_args(args(&["--url", "http://nexus"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRepository));
    }

    #[test]
    fn test_concurrency_clamped() {
        let config = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
            "--concurrency=-3",
        ]))
        .unwrap();
        assert_eq!(config.concurrency, 1);

        let config = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
            "--concurrency",
            "0",
        ]))
        .unwrap();
        assert_eq!(config.concurrency, 1);

        let config = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
        ]))
        .unwrap();
        assert_eq!(config.concurrency, 5);
    }

    #[test]
    fn test_credentials_only_with_username() {
        let config = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
            "--password",
            "ignored",
        ]))
        .unwrap();
        assert!(config.credentials.is_none());

        let config = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
            "--username",
            "ci",
        ]))
        .unwrap();
        let creds = config.credentials.unwrap();
        assert_eq!(creds.username, "ci");
        assert_eq!(creds.password, "");
        assert!(format!("{:?}", creds).contains("<redacted>"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
            "--timeout",
            "0",
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { secs: 0 }));
    }

    #[test]
    fn test_missing_output_parent() {
        let err = WalkConfig::from_args(args(&[
            "--url",
            "http://nexus",
            "--repository",
            "releases",
            "--output",
            "/definitely/not/here/out.jsonl",
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOutputPath { .. }));
    }

    #[test]
    fn test_content_url() {
        let url = RepositoryUrl::new("https://repo.example.com/nexus", "releases").unwrap();
        assert_eq!(
            url.content_url().as_str(),
            "https://repo.example.com/nexus/service/local/repositories/releases/content"
        );
        assert_eq!(url.repository(), "releases");

        // Trailing slash on the base does not double up
        let url = RepositoryUrl::new("https://repo.example.com/nexus/", "releases").unwrap();
        assert_eq!(
            url.content_url().as_str(),
            "https://repo.example.com/nexus/service/local/repositories/releases/content"
        );
    }

    #[test]
    fn test_listing_url() {
        let url = RepositoryUrl::new("http://nexus:8081/nexus", "releases").unwrap();
        assert_eq!(
            url.listing_url("").as_str(),
            "http://nexus:8081/nexus/service/local/repositories/releases/content/"
        );
        assert_eq!(
            url.listing_url("com/example/").as_str(),
            "http://nexus:8081/nexus/service/local/repositories/releases/content/com/example/"
        );
        assert_eq!(
            url.listing_url("a b/c#d").as_str(),
            "http://nexus:8081/nexus/service/local/repositories/releases/content/a%20b/c%23d"
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert!(RepositoryUrl::new("not a url", "releases").is_err());
        assert!(RepositoryUrl::new("ftp://nexus/", "releases").is_err());
        assert!(RepositoryUrl::new("mailto:ops@example.com", "releases").is_err());
    }
}
