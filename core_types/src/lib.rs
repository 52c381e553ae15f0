//! # Core Types
//!
//! This crate defines the fundamental types shared by every namespace crate.
//!
//! ## Philosophy
//!
//! - **Identity is explicit**: Every entity carries an [`EntityId`] that survives
//!   renames and moves. Paths are addresses, ids are identity.
//! - **Closed set of kinds**: [`EntityKind`] is a fixed enumeration. Capabilities
//!   (holding children, holding content) are queried on the kind, never inferred.
//!
//! ## Key Types
//!
//! - [`EntityId`]: Unique identifier for a namespace entity
//! - [`EntityKind`]: Drive, Folder, TextFile or ZipFile

pub mod ids;
pub mod kind;

pub use ids::EntityId;
pub use kind::EntityKind;
