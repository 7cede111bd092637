//! Identity and naming types.
//!
//! Every physical resource name and exported output name is derived from the
//! stack name plus a fixed suffix. Derivation is pure string work, so a given
//! stack name produces the same identities on every build.

use crate::error::{ModelError, ModelResult};
use serde::Serialize;
use std::fmt;

/// The name of a deployable stack.
///
/// Stack names must start with an ASCII letter and may contain ASCII
/// letters, digits, and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StackName(String);

impl StackName {
    /// Creates a validated stack name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` if the name is empty, does not start with a
    /// letter, or contains a character outside `[A-Za-z0-9-]`.
    pub fn new(name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        validate_identity(&name, true)?;
        Ok(Self(name))
    }

    /// Returns the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives a physical resource name: `{stack}-{suffix}`.
    #[must_use]
    pub fn child(&self, suffix: &str) -> String {
        format!("{}-{}", self.0, suffix)
    }

    /// Derives a lowercased physical resource name: `{stack}-{suffix}`
    /// lowercased. Object store names must be lowercase.
    #[must_use]
    pub fn child_lower(&self, suffix: &str) -> String {
        self.child(suffix).to_ascii_lowercase()
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-stack construct identifier (`PostsBucket`, `CreatePost`, `HttpApi`).
///
/// Logical IDs are unique within one stack and stable across builds. They
/// may contain only ASCII letters and digits and must start with a letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LogicalId(String);

impl LogicalId {
    /// Creates a validated logical ID.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` if the ID is empty, does not start with a
    /// letter, or contains a character outside `[A-Za-z0-9]`.
    pub fn new(id: impl Into<String>) -> ModelResult<Self> {
        let id = id.into();
        validate_identity(&id, false)?;
        Ok(Self(id))
    }

    /// Returns the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of an exported deployment-time output: `{stack}-{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ExportName(String);

impl ExportName {
    /// Derives an export name from a stack name and a fixed suffix.
    #[must_use]
    pub fn new(stack: &StackName, suffix: &str) -> Self {
        Self(stack.child(suffix))
    }

    /// Returns the raw export name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to another stack's exported output.
///
/// The value is resolved by the deployment engine, not by this layer; the
/// description only records which export is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedValue(String);

impl ImportedValue {
    /// Creates a reference to the named export.
    #[must_use]
    pub fn new(export_name: impl Into<String>) -> Self {
        Self(export_name.into())
    }

    /// Returns the referenced export name.
    #[must_use]
    pub fn export_name(&self) -> &str {
        &self.0
    }

    /// Renders the reference as a deterministic placeholder string.
    #[must_use]
    pub fn render(&self) -> String {
        format!("import:{}", self.0)
    }
}

fn validate_identity(name: &str, allow_hyphen: bool) -> ModelResult<()> {
    if name.is_empty() {
        return Err(ModelError::invalid_identity(name, "must not be empty"));
    }

    let first = name.chars().next().unwrap_or('0');
    if !first.is_ascii_alphabetic() {
        return Err(ModelError::invalid_identity(
            name,
            "must start with an ASCII letter",
        ));
    }

    for c in name.chars() {
        let ok = c.is_ascii_alphanumeric() || (allow_hyphen && c == '-');
        if !ok {
            return Err(ModelError::invalid_identity(
                name,
                format!("contains illegal character `{c}`"),
            ));
        }
    }

    Ok(())
}
