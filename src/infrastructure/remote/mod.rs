//! Remote channel over OpenSSH

mod classify;
mod ssh;

pub use classify::{classify, Operation, SSH_ERROR_STATUS};
pub use ssh::{SshChannel, SshOptions};
