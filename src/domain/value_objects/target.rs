//! Target value object - one controller receiving a deployment

use serde::{Deserialize, Serialize};

/// Opaque host identifier (address, name, or `user@host`)
///
/// Targets are not deduplicated; listing a host twice redeploys it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier already carries a `user@` prefix
    pub fn has_user(&self) -> bool {
        self.0.contains('@')
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(host: &str) -> Self {
        Self::new(host)
    }
}

impl From<String> for Target {
    fn from(host: String) -> Self {
        Self(host)
    }
}
