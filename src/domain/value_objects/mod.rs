//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod remote_layout;
mod target;

pub use remote_layout::{RemoteLayout, BOOT_PROJECT_FILE};
pub use target::Target;
