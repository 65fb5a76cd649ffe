//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod artifact;
mod hosts;

pub use artifact::{FsArtifactRepository, CHECKSUM_EXTENSION};
pub use hosts::{parse_hosts, FsHostRepository};
