//! # Namespace Model
//!
//! This crate defines what a single node of the namespace looks like and how its
//! size is computed. It knows nothing about the tree as a whole; walking the tree
//! and keeping sizes consistent is the job of `services_namespace`.
//!
//! ## Design
//!
//! - There is one [`Entity`] type for all four kinds. What an entity can do is
//!   decided by its [`EntityKind`](core_types::EntityKind): containers expose a
//!   [`Container`], text files expose a [`Leaf`].
//! - Children are referenced by [`EntityId`](core_types::EntityId), parents are
//!   referenced the same way. Nothing here owns another entity.
//! - Size is cached on the entity and only changes through
//!   [`Entity::recompute_size`]. Adding or removing a child never touches size.
//! - Paths are plain strings joined by a configurable separator, see
//!   [`PathSyntax`].

pub mod entity;
pub mod path;
pub mod size;

pub use entity::{Container, Entity, EntityBody, Leaf};
pub use path::{PathError, PathSyntax};
pub use size::ZipRounding;
