//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_repository;
pub mod deploy_events;
pub mod host_repository;
pub mod remote_channel;

pub use artifact_repository::ArtifactRepository;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use host_repository::HostRepository;
pub use remote_channel::{ChannelError, ErrorKind, RemoteChannel};
