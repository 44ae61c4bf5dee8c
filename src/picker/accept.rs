//! Accepted-type pattern sets (`image/*`, `image/png, image/jpeg`, ...)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCEPT: &str = "image/*";

/// A comma-separated list of MIME types or `type/*` wildcards
///
/// The raw string is kept for error messages so users see exactly what was
/// configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct AcceptSet {
    raw: String,
    patterns: Vec<String>,
}

impl AcceptSet {
    pub fn new(raw: &str) -> Self {
        let patterns = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            raw: raw.to_string(),
            patterns,
        }
    }

    /// Whether a MIME type is accepted: exact match, or a `type/*` wildcard
    /// whose `type/` prefix starts the MIME type
    pub fn accepts(&self, mime: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            pattern == mime
                || pattern
                    .strip_suffix('*')
                    .filter(|prefix| prefix.ends_with('/'))
                    .is_some_and(|prefix| mime.starts_with(prefix))
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Default for AcceptSet {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPT)
    }
}

impl fmt::Display for AcceptSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for AcceptSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for AcceptSet {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<AcceptSet> for String {
    fn from(set: AcceptSet) -> Self {
        set.raw
    }
}
