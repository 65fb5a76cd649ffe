//! File system helpers

mod home;

pub use home::{expand_home, home_dir, TEST_HOME_VAR};
