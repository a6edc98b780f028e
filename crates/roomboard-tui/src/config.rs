//! Command-line configuration.
//!
//! Every flag has an environment fallback so the binary can be configured
//! from a `.env`-style launcher. Parsed [`Args`] are validated into a
//! [`Config`] before any terminal or network setup happens.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use roomboard_app::ThreadRefresh;
use thiserror::Error;

/// Roomboard terminal client
#[derive(Parser, Debug, Clone)]
#[command(name = "roomboard")]
#[command(about = "Terminal client for feedback rooms backed by a GraphQL API")]
#[command(version)]
pub struct Args {
    /// GraphQL endpoint of the data API
    #[arg(long, env = "ROOMBOARD_GRAPHQL_URL")]
    pub graphql_url: Option<String>,

    /// Base URL of the hosted authentication service
    #[arg(long, env = "ROOMBOARD_AUTH_URL")]
    pub auth_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "ROOMBOARD_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    #[arg(long, env = "ROOMBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory for the log file
    #[arg(long, env = "ROOMBOARD_LOG_DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Refresh the open thread after each refetch
    #[arg(long)]
    pub follow_thread: bool,

    /// Run against an in-memory backend; any credentials are accepted
    #[arg(long)]
    pub demo: bool,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required URL was not provided.
    #[error("missing --{flag} (or {env}); pass --demo to run without a backend")]
    MissingUrl {
        /// Flag name.
        flag: &'static str,
        /// Environment variable name.
        env: &'static str,
    },

    /// A URL is not http(s).
    #[error("invalid --{flag}: {url:?} is not an http(s) URL")]
    InvalidUrl {
        /// Flag name.
        flag: &'static str,
        /// Offending value.
        url: String,
    },

    /// Timeout of zero seconds.
    #[error("--timeout-secs must be greater than zero")]
    ZeroTimeout,
}

/// Where data and sessions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Remote GraphQL API and hosted auth.
    Remote {
        /// GraphQL endpoint.
        graphql_url: String,
        /// Auth service base URL.
        auth_url: String,
    },
    /// Seeded in-memory backend.
    Demo,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Data and auth backend.
    pub backend: Backend,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Default log filter.
    pub log_level: String,
    /// Log file directory.
    pub log_dir: PathBuf,
    /// Open-thread refresh policy.
    pub refresh: ThreadRefresh,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let backend = if args.demo {
            Backend::Demo
        } else {
            Backend::Remote {
                graphql_url: require_url(args.graphql_url, "graphql-url", "ROOMBOARD_GRAPHQL_URL")?,
                auth_url: require_url(args.auth_url, "auth-url", "ROOMBOARD_AUTH_URL")?,
            }
        };

        let refresh =
            if args.follow_thread { ThreadRefresh::Follow } else { ThreadRefresh::Stale };

        Ok(Self {
            backend,
            timeout: Duration::from_secs(args.timeout_secs),
            log_level: args.log_level,
            log_dir: args.log_dir,
            refresh,
        })
    }
}

fn require_url(
    value: Option<String>,
    flag: &'static str,
    env: &'static str,
) -> Result<String, ConfigError> {
    let url = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let Some(url) = url else {
        return Err(ConfigError::MissingUrl { flag, env });
    };
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { flag, url });
    }
    Ok(url)
}
