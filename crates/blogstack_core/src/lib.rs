//! # Blogstack Core
//!
//! Factories and the stack assembler for the blog backend topology.
//!
//! This crate turns a [`StackConfig`] into a [`Synthesis`]: the complete,
//! validated description of one deployable stack. The pass is single
//! threaded and linear, and its ordering is the core invariant of the
//! whole system:
//!
//! 1. Storage factory - the posts bucket
//! 2. Table factory - post metadata table, optional auth table
//! 3. Compute factory - one function per API operation, optional authorizer
//! 4. Gateway factory - the HTTP API and its route table
//! 5. Permission grants - storage and table access edges
//!
//! Steps consume the previous steps' results as explicit parameters, so a
//! reordering does not compile. Any factory error aborts the whole
//! synthesis; there is no partial result.
//!
//! ## Example
//!
//! ```rust
//! use blogstack_core::{synthesize, StackConfig};
//!
//! let synthesis = synthesize(&StackConfig::new("BlogBackendStack")).unwrap();
//! assert_eq!(synthesis.bucket.bucket_name, "blogbackendstack-postsbucket");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod compute;
mod config;
mod error;
mod gateway;
mod output;
mod stack;
mod storage;
mod table;

pub use compute::{api_functions, make_authorizer, ApiFunctions};
pub use config::StackConfig;
pub use error::{CoreError, CoreResult};
pub use gateway::{blog_api, endpoint_output, HttpApi, HttpApiBuilder};
pub use output::Output;
pub use stack::{synthesize, Synthesis};
pub use storage::{grant_storage, storage_resources, StorageResources, LOCAL_DEV_ORIGIN};
pub use table::{grant_tables, table_resources, TableResources};

/// Crate version, surfaced by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
