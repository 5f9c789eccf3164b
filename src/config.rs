//! Mailbox and matcher configuration loaded from the environment

use crate::error::FetchError;
use crate::normalize::DEFAULT_DECIMAL_SEPARATORS;
use crate::total::{DEFAULT_MARKER, TotalExtractor};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Default dotenv file read by the binary
pub const ENV_FILE: &str = "local.env";

const DEFAULT_PORT: u16 = 993;
const DEFAULT_MAILBOX: &str = "INBOX";
const DEFAULT_MESSAGE_OFFSET: u32 = 3;

/// Connection settings and matching options
#[derive(Clone)]
pub struct ImapConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,

    /// Mailbox to select
    pub mailbox: String,

    /// How many messages to step back from the newest one
    pub message_offset: u32,

    pub matching: MatchConfig,
}

/// Marker word and decimal separators used for total extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Word preceding the total
    pub marker: String,

    /// Characters rewritten to `.` before matching
    pub decimal_separators: Vec<char>,
}

impl MatchConfig {
    /// Read `TOTAL_MARKER` and `TOTAL_DECIMAL_SEPARATORS` from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            marker: get("TOTAL_MARKER").unwrap_or_else(|| DEFAULT_MARKER.to_string()),
            decimal_separators: get("TOTAL_DECIMAL_SEPARATORS").map_or_else(
                || DEFAULT_DECIMAL_SEPARATORS.to_vec(),
                |v| v.chars().filter(|c| !c.is_whitespace()).collect(),
            ),
        }
    }

    /// Matcher and normalizer configured by these settings
    pub fn extractor(&self) -> Result<TotalExtractor, FetchError> {
        Ok(TotalExtractor::from_marker(
            &self.marker,
            self.decimal_separators.clone(),
        )?)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            decimal_separators: DEFAULT_DECIMAL_SEPARATORS.to_vec(),
        }
    }
}

impl ImapConfig {
    /// Build the config from process environment variables
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup.
    ///
    /// `IMAP_SERVER`, `IMAP_YA_USERNAME` and `IMAP_YA_PASSWORD` are
    /// required; everything else has a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = get("IMAP_SERVER").ok_or_else(|| missing("IMAP_SERVER"))?;
        let username = get("IMAP_YA_USERNAME").ok_or_else(|| missing("IMAP_YA_USERNAME"))?;
        let password = get("IMAP_YA_PASSWORD").ok_or_else(|| missing("IMAP_YA_PASSWORD"))?;
        let (host, port) = parse_server(&server)?;

        let message_offset = match get("IMAP_MESSAGE_OFFSET") {
            Some(value) => value.trim().parse().map_err(|_| FetchError::Config {
                key: "IMAP_MESSAGE_OFFSET".into(),
                details: format!("not a number: {value}"),
            })?,
            None => DEFAULT_MESSAGE_OFFSET,
        };

        Ok(Self {
            host,
            port,
            username,
            password,
            mailbox: get("IMAP_MAILBOX").unwrap_or_else(|| DEFAULT_MAILBOX.to_string()),
            message_offset,
            matching: MatchConfig::from_lookup(&lookup),
        })
    }
}

impl fmt::Debug for ImapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImapConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("mailbox", &self.mailbox)
            .field("message_offset", &self.message_offset)
            .field("matching", &self.matching)
            .finish()
    }
}

/// Load variables from a dotenv file if it exists.
///
/// Variables already set in the environment win. A missing file is not an
/// error; a malformed one is logged and ignored.
pub fn load_env_file(path: impl AsRef<Path>) {
    let path = path.as_ref();
    match dotenvy::from_filename(path) {
        Ok(loaded) => debug!(path = %loaded.display(), "Loaded environment file"),
        Err(e) if e.not_found() => debug!(path = %path.display(), "No environment file"),
        Err(e) => warn!(path = %path.display(), error = %e, "Ignoring environment file"),
    }
}

fn parse_server(server: &str) -> Result<(String, u16), FetchError> {
    let server = server.trim();
    match server.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse().map_err(|_| FetchError::Config {
                key: "IMAP_SERVER".into(),
                details: format!("invalid port in {server}"),
            })?;
            if host.is_empty() {
                return Err(FetchError::Config {
                    key: "IMAP_SERVER".into(),
                    details: format!("missing host in {server}"),
                });
            }
            Ok((host.to_string(), port))
        }
        None => Ok((server.to_string(), DEFAULT_PORT)),
    }
}

fn missing(key: &str) -> FetchError {
    FetchError::Config {
        key: key.into(),
        details: "not set".into(),
    }
}
