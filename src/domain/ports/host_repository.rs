//! HostRepository port - abstraction for loading the target list

use std::path::Path;

use crate::domain::value_objects::Target;
use crate::error::DeployResult;

/// Abstract repository for the ordered list of deployment targets
pub trait HostRepository {
    /// Load targets in file order, with comments and blank lines removed
    fn load_hosts(&self, path: &Path) -> DeployResult<Vec<Target>>;
}
