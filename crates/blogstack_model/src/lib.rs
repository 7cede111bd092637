//! # Blogstack Model
//!
//! Resource descriptors for the blog backend topology.
//!
//! This crate provides the leaf-level vocabulary of the description layer:
//! identity types, resource descriptors, and permission grants. Descriptors
//! are **immutable values** - they carry no provider client handles and have
//! no runtime behavior. Factories in `blogstack_core` construct them and the
//! assembler wires them together.
//!
//! ## Design Principles
//!
//! - Identities are derived deterministically from the stack name; the same
//!   stack name always yields the same identity strings.
//! - Construction validates eagerly and returns `Err` on malformed input;
//!   a bad descriptor never exists.
//! - Environment variables form a closed record of named fields, not an open
//!   string map - a missing or misnamed reference is a compile error.
//!
//! ## Descriptor Types
//!
//! - [`Bucket`] - object store for post content
//! - [`Table`] - key-value metadata store
//! - [`Function`] - deployable compute unit for one API operation
//! - [`Route`] - gateway route binding
//! - [`Grant`] - permission edge from a function to a resource

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bucket;
mod error;
mod function;
mod grant;
mod name;
mod route;
mod table;
mod types;

pub use bucket::{Bucket, BucketCorsRule};
pub use error::{ModelError, ModelResult};
pub use function::{
    Authorizer, AuthorizerResponseType, Environment, Function, Runtime, ENV_AUTH_TABLE_NAME,
    ENV_DEFAULT_PAGE_SIZE, ENV_JWT_SECRET, ENV_POST_METADATA_TABLE_NAME, ENV_S3_BUCKET_NAME,
    ENV_S3_URL_EXPIRY_SECONDS,
};
pub use grant::{AccessLevel, Grant};
pub use name::{ExportName, ImportedValue, LogicalId, StackName};
pub use route::{CorsPreflight, Route, RoutePath};
pub use table::{AttributeDef, AttributeKind, Table};
pub use types::{HttpMethod, RemovalPolicy};
