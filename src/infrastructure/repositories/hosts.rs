//! Hosts File Repository
//!
//! Reads the target list: one host per line, `#` starts a comment.

use std::path::Path;

use crate::domain::ports::HostRepository;
use crate::domain::value_objects::Target;
use crate::error::{DeployError, DeployResult};

/// Host repository backed by a plain text file
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHostRepository;

impl FsHostRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HostRepository for FsHostRepository {
    fn load_hosts(&self, path: &Path) -> DeployResult<Vec<Target>> {
        if !path.is_file() {
            return Err(DeployError::invalid_input(format!(
                "hosts file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(parse_hosts(&content))
    }
}

/// Parse a hosts list, keeping order and duplicates
pub fn parse_hosts(content: &str) -> Vec<Target> {
    content
        .lines()
        .map(|line| match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Target::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn hosts(content: &str) -> Vec<String> {
        parse_hosts(content)
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# line 3\n10.0.0.1\n\n   \n# spare\n10.0.0.2\n";
        assert_eq!(hosts(content), vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn strips_trailing_comments_and_whitespace() {
        let content = "  plc-01   # hall A\nadmin@plc-02\t\n";
        assert_eq!(hosts(content), vec!["plc-01", "admin@plc-02"]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(hosts("b\na\nb\n"), vec!["b", "a", "b"]);
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(hosts("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn empty_file_has_no_targets() {
        assert!(hosts("# nothing yet\n").is_empty());
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let dir = tempdir().unwrap();
        let err = FsHostRepository::new()
            .load_hosts(&dir.path().join("hosts.txt"))
            .unwrap_err();
        assert!(matches!(err, DeployError::LocalInputInvalid { .. }));
    }

    #[test]
    fn loads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hosts.txt");
        std::fs::write(&path, "plc-01\n#plc-02\nplc-03\n").unwrap();

        let targets = FsHostRepository::new().load_hosts(&path).unwrap();
        assert_eq!(targets, vec![Target::new("plc-01"), Target::new("plc-03")]);
    }
}
