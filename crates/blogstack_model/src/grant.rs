//! Permission grants.
//!
//! A grant is a directed edge from a compute function to a storage or table
//! resource, labeled with an access level. Grants are declarative and
//! additive only - there is no revocation.

use crate::name::LogicalId;
use serde::Serialize;
use std::fmt;

/// The access level carried by a grant.
///
/// A function receives exactly the level its operation requires and never
/// more; writers do not get read access for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AccessLevel {
    /// Read-only access.
    Read,
    /// Write-only access.
    Write,
    /// Combined read and write access.
    ReadWrite,
}

impl AccessLevel {
    /// Returns whether this level permits reads.
    #[must_use]
    pub const fn allows_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Returns whether this level permits writes.
    #[must_use]
    pub const fn allows_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "read-write",
        };
        f.write_str(s)
    }
}

/// A permission edge from a function to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    /// The function receiving access.
    pub function: LogicalId,
    /// The resource being accessed.
    pub resource: LogicalId,
    /// The granted access level.
    pub access: AccessLevel,
}

impl Grant {
    /// Creates a grant edge.
    #[must_use]
    pub fn new(function: &LogicalId, resource: &LogicalId, access: AccessLevel) -> Self {
        Self {
            function: function.clone(),
            resource: resource.clone(),
            access,
        }
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.function, self.resource, self.access)
    }
}
