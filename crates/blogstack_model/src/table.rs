//! Key-value table descriptor.

use crate::error::{ModelError, ModelResult};
use crate::name::LogicalId;
use crate::types::RemovalPolicy;
use serde::Serialize;

/// Scalar type of a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeKind {
    /// UTF-8 string.
    String,
    /// Number.
    Number,
    /// Raw bytes.
    Binary,
}

impl AttributeKind {
    /// Returns the provider's single-letter type tag.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::String => "S",
            Self::Number => "N",
            Self::Binary => "B",
        }
    }
}

/// A named, typed key attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDef {
    /// Attribute name.
    pub name: String,
    /// Attribute type.
    pub kind: AttributeKind,
}

impl AttributeDef {
    /// Creates a string-typed attribute.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::String,
        }
    }

    /// Creates a number-typed attribute.
    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Number,
        }
    }
}

/// A key-value table.
///
/// Every table in this topology has exactly one partition key and one sort
/// key; secondary indexes are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Per-stack construct identifier.
    pub logical_id: LogicalId,
    /// Physical (deployed) table name.
    pub table_name: String,
    /// Partition key definition.
    pub partition_key: AttributeDef,
    /// Sort key definition.
    pub sort_key: AttributeDef,
    /// Removal policy on stack destruction.
    pub removal_policy: RemovalPolicy,
}

impl Table {
    /// Creates a table descriptor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` if the physical name or either key name is
    /// empty.
    pub fn new(
        logical_id: LogicalId,
        table_name: impl Into<String>,
        partition_key: AttributeDef,
        sort_key: AttributeDef,
    ) -> ModelResult<Self> {
        let table_name = table_name.into();
        if table_name.is_empty() {
            return Err(ModelError::invalid_identity(
                table_name,
                "table name must not be empty",
            ));
        }
        if partition_key.name.is_empty() || sort_key.name.is_empty() {
            return Err(ModelError::invalid_identity(
                table_name,
                "key attribute names must not be empty",
            ));
        }

        Ok(Self {
            logical_id,
            table_name,
            partition_key,
            sort_key,
            removal_policy: RemovalPolicy::Destroy,
        })
    }

    /// Sets the removal policy.
    #[must_use]
    pub const fn removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Returns the deterministic resource identifier for this table.
    ///
    /// The deployment engine assigns the real identifier at deploy time;
    /// this placeholder carries no account or region context.
    #[must_use]
    pub fn arn(&self) -> String {
        format!("arn:aws:dynamodb:::table/{}", self.table_name)
    }
}
