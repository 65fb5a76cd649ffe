//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `repositories`: artifact bundle and hosts file on the local disk
//! - `remote`: OpenSSH-backed remote channel
//! - `events`: NDJSON event sink

pub mod events;
pub mod fs;
pub mod remote;
pub mod repositories;

pub use events::JsonEventSink;
pub use remote::{SshChannel, SshOptions};
pub use repositories::{FsArtifactRepository, FsHostRepository};
