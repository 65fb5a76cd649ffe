//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::FailurePolicy;
use crate::error::{DeployError, DeployResult};

use super::types::Config;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "PLC_DEPLOY_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the config file the CLI points at
///
/// A missing file is an error only when the user named it explicitly;
/// otherwise built-in defaults apply. Relative paths in the file resolve
/// against the file's directory. Environment overrides are applied last.
pub fn load_or_default(path: &Path, explicit: bool) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        if explicit {
            return Err(DeployError::Config {
                file: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok((with_env_overrides(Config::default()), Vec::new()));
    }

    let (config, warnings) = load_with_warnings(path)?;
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = config.resolve_paths(base);

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (PLC_DEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable lookup
pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));

    // PLC_DEPLOY_REMOTE_ROOT
    if let Some(root) = var("REMOTE_ROOT").filter(|v| !v.trim().is_empty()) {
        config.remote.root = root;
    }

    // PLC_DEPLOY_REMOTE_USER
    if let Some(user) = var("REMOTE_USER").filter(|v| !v.trim().is_empty()) {
        config.remote.user = Some(user);
    }

    // PLC_DEPLOY_FAILURE_POLICY
    if let Some(value) = var("FAILURE_POLICY") {
        match FailurePolicy::parse(&value) {
            Some(policy) => config.deploy.failure_policy = policy,
            None => tracing::warn!(value = %value, "ignoring unknown failure policy override"),
        }
    }

    // PLC_DEPLOY_HOSTS_FILE
    if let Some(hosts) = var("HOSTS_FILE").filter(|v| !v.trim().is_empty()) {
        config.deploy.hosts_file = PathBuf::from(hosts);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote",
        "root",
        "user",
        "port",
        "identity_file",
        "batch_mode",
        "connect_timeout",
        "artifacts",
        "project_file",
        "app_files",
        "visu_dir",
        "deploy",
        "hosts_file",
        "failure_policy",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
