//! Remote layout value object
//!
//! Every controller uses the same directory layout, derived from one
//! configured root path.

use serde::Serialize;

/// File name of the boot project on the controller
pub const BOOT_PROJECT_FILE: &str = "Archive.prj";

const UPDATES_DIR: &str = "Updates";
const VISU_DIR: &str = "Visu";

/// Destination paths on a controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteLayout {
    root: String,
    updates_dir: String,
    visu_dir: String,
    boot_project: String,
}

impl RemoteLayout {
    /// Root used when none is configured
    pub const DEFAULT_ROOT: &'static str = "/opt/plc";

    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let base = root.trim_end_matches('/');
        let join = |name: &str| {
            if base.is_empty() && root.starts_with('/') {
                format!("/{}", name)
            } else if base.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", base, name)
            }
        };

        Self {
            updates_dir: join(UPDATES_DIR),
            visu_dir: join(VISU_DIR),
            boot_project: join(BOOT_PROJECT_FILE),
            root,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Directory receiving app/crc files
    pub fn updates_dir(&self) -> &str {
        &self.updates_dir
    }

    /// Directory receiving visualization items
    pub fn visu_dir(&self) -> &str {
        &self.visu_dir
    }

    /// Fixed destination of the project archive
    pub fn boot_project(&self) -> &str {
        &self.boot_project
    }

    pub fn updates_file(&self, name: &str) -> String {
        format!("{}/{}", self.updates_dir, name)
    }

    pub fn visu_file(&self, name: &str) -> String {
        format!("{}/{}", self.visu_dir, name)
    }
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_from_root() {
        let layout = RemoteLayout::new("/opt/plc");
        assert_eq!(layout.updates_dir(), "/opt/plc/Updates");
        assert_eq!(layout.visu_dir(), "/opt/plc/Visu");
        assert_eq!(layout.boot_project(), "/opt/plc/Archive.prj");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let layout = RemoteLayout::new("/opt/plc/");
        assert_eq!(layout.updates_dir(), "/opt/plc/Updates");
        assert_eq!(layout.root(), "/opt/plc/");
    }

    #[test]
    fn filesystem_root_does_not_double_slash() {
        let layout = RemoteLayout::new("/");
        assert_eq!(layout.boot_project(), "/Archive.prj");
        assert_eq!(layout.visu_dir(), "/Visu");
    }

    #[test]
    fn relative_root_stays_relative() {
        let layout = RemoteLayout::new("plc");
        assert_eq!(layout.updates_file("a.app"), "plc/Updates/a.app");
        assert_eq!(layout.visu_file("index.html"), "plc/Visu/index.html");
    }
}
