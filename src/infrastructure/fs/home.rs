//! Home directory resolution with test isolation support.
//!
//! `home_dir()` checks `PLC_DEPLOY_TEST_HOME` first, then falls back to
//! `dirs::home_dir()`. On Windows `dirs` ignores `HOME`/`USERPROFILE`, so
//! tests set the override instead.

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of home directory.
pub const TEST_HOME_VAR: &str = "PLC_DEPLOY_TEST_HOME";

/// Home directory used for `~` expansion in configured paths
pub fn home_dir() -> Option<PathBuf> {
    std::env::var(TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` or `~/` in a user-supplied path
///
/// Paths without a tilde, or with `~user`, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let rest = if text == "~" {
        ""
    } else if let Some(rest) = text.strip_prefix("~/") {
        rest
    } else {
        return path.to_path_buf();
    };

    match home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_respects_test_home_env_var() {
        // SAFETY: single test touching this variable; restored below
        unsafe {
            std::env::set_var(TEST_HOME_VAR, "/test/fake/home");
        }

        let key = expand_home(Path::new("~/.ssh/plc_ed25519"));
        let bare = expand_home(Path::new("~"));

        unsafe {
            std::env::remove_var(TEST_HOME_VAR);
        }

        assert_eq!(key, PathBuf::from("/test/fake/home/.ssh/plc_ed25519"));
        assert_eq!(bare, PathBuf::from("/test/fake/home"));
    }

    #[test]
    fn paths_without_tilde_are_untouched() {
        assert_eq!(
            expand_home(Path::new("/etc/plc/key")),
            PathBuf::from("/etc/plc/key")
        );
        assert_eq!(
            expand_home(Path::new("~operator/key")),
            PathBuf::from("~operator/key")
        );
    }
}
