//! Test fixtures - artifact bundles and config files.

use super::env::TestEnv;

/// Config pointing at the bundle written by `write_bundle`
pub const CONFIG: &str = r#"
[remote]
root = "/opt/plc"
connect_timeout = 2

[artifacts]
project_file = "build/Archive.prj"
app_files = ["build/Control.app"]
visu_dir = "visu"
"#;

/// Project file, one app/crc pair and a two-item visu directory
pub fn write_bundle(env: &TestEnv) {
    env.write("plc-deploy.toml", CONFIG);
    env.write("build/Archive.prj", "project");
    env.write("build/Control.app", "binary");
    env.write("build/Control.crc", "crc");
    env.write("visu/index.html", "<html/>");
    env.write("visu/assets/logo.png", "png");
}
