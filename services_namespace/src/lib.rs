//! # Namespace Service
//!
//! This service owns an in-memory tree of drives, folders, zip files and text
//! files, and keeps every entity's size correct after each mutation.
//!
//! ## Philosophy
//!
//! - Validate first, then mutate: a failed operation leaves the tree untouched
//! - Sizes are cached and eagerly maintained, never computed on read
//! - Propagation walks the ancestor chain only, never the whole tree
//! - Identity is the [`EntityId`](core_types::EntityId); moving keeps it
//!
//! ## Operations
//!
//! - `resolve(path)`: Look up an entity by path
//! - `create(kind, name, parent_path)`: Add an entity under a container
//! - `delete(path)`: Remove an entity and everything below it
//! - `move_entity(source, dest)`: Re-home an entity, optionally renaming it
//! - `write(path, content)`: Replace a text file's content
//! - `stat(path)` / `list(path)`: Read-only metadata queries

pub mod config;
pub mod error;
pub mod operations;
pub mod service;

pub use config::{load_config_safe, ConfigError, NamespaceConfig};
pub use error::NamespaceError;
pub use operations::{NamespaceOperations, StatInfo};
pub use service::Namespace;
