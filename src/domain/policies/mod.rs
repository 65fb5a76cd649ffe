//! Domain Policies
//!
//! Rules that shape how a deploy run behaves, selected by the caller.

mod failure_policy;

pub use failure_policy::FailurePolicy;
