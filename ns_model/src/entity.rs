//! Entity, container and leaf types
//!
//! This module defines how a single node of the namespace is represented.

use crate::size::ZipRounding;
use core_types::{EntityId, EntityKind};
use indexmap::IndexMap;

/// Children of a container entity
///
/// Maps child names to child ids. Iteration follows insertion order, so a
/// tree printed twice prints the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    children: IndexMap<String, EntityId>,
}

impl Container {
    /// Creates an empty container
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Adds a child
    ///
    /// Returns true if the child was added, false if the name is taken.
    pub fn add_child(&mut self, name: String, id: EntityId) -> bool {
        if self.children.contains_key(&name) {
            return false;
        }
        self.children.insert(name, id);
        true
    }

    /// Removes a child by name
    ///
    /// Returns the removed child's id if it existed. The remaining children
    /// keep their relative order.
    pub fn remove_child(&mut self, name: &str) -> Option<EntityId> {
        self.children.shift_remove(name)
    }

    /// Gets a child id by name
    pub fn get_child(&self, name: &str) -> Option<EntityId> {
        self.children.get(name).copied()
    }

    /// Returns true if a child with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Iterates children as `(name, id)` in insertion order
    pub fn children(&self) -> impl Iterator<Item = (&str, EntityId)> + '_ {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Iterates child ids in insertion order
    pub fn child_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.children.values().copied()
    }

    /// Counts the children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Content of a leaf entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    content: String,
}

impl Leaf {
    /// Creates an empty leaf
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    /// Returns the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the content, returning the previous content
    pub fn set_content(&mut self, content: String) -> String {
        std::mem::replace(&mut self.content, content)
    }

    /// Length of the content in characters
    pub fn len(&self) -> u64 {
        self.content.chars().count() as u64
    }

    /// Returns true if the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Kind-specific part of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityBody {
    /// Drive, Folder and ZipFile
    Container(Container),
    /// TextFile
    Leaf(Leaf),
}

impl EntityBody {
    /// Creates the empty body for a kind
    pub fn for_kind(kind: EntityKind) -> Self {
        if kind.is_container() {
            EntityBody::Container(Container::new())
        } else {
            EntityBody::Leaf(Leaf::new())
        }
    }
}

/// A node in the namespace
///
/// Every kind shares `id`, `kind`, `name`, `path`, `size` and `parent`.
/// Containers additionally expose their children through
/// [`Entity::as_container`], text files their content through
/// [`Entity::as_leaf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    name: String,
    path: String,
    size: u64,
    parent: Option<EntityId>,
    body: EntityBody,
}

impl Entity {
    /// Creates a new, empty entity
    ///
    /// The size starts at zero, which is correct for every kind while the
    /// entity has no children and no content.
    pub fn new(kind: EntityKind, name: String, path: String, parent: Option<EntityId>) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            name,
            path,
            size: 0,
            parent,
            body: EntityBody::for_kind(kind),
        }
    }

    /// Creates a drive; its path is its name
    pub fn new_drive(name: String) -> Self {
        let path = name.clone();
        Self::new(EntityKind::Drive, name, path, None)
    }

    /// Returns the entity id
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the entity kind
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the cached size
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the parent id, `None` for drives
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// Returns true if this entity holds children
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Returns true if this entity holds content
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Returns the children, if this entity is a container
    pub fn as_container(&self) -> Option<&Container> {
        match &self.body {
            EntityBody::Container(container) => Some(container),
            EntityBody::Leaf(_) => None,
        }
    }

    /// Returns the children mutably, if this entity is a container
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.body {
            EntityBody::Container(container) => Some(container),
            EntityBody::Leaf(_) => None,
        }
    }

    /// Returns the content, if this entity is a text file
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match &self.body {
            EntityBody::Leaf(leaf) => Some(leaf),
            EntityBody::Container(_) => None,
        }
    }

    /// Returns the content mutably, if this entity is a text file
    pub fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match &mut self.body {
            EntityBody::Leaf(leaf) => Some(leaf),
            EntityBody::Container(_) => None,
        }
    }

    /// Returns the kind-specific body
    pub fn body(&self) -> &EntityBody {
        &self.body
    }

    /// Size this entity should have, given the sum of its children's sizes
    ///
    /// `children_total` is ignored for text files.
    pub fn expected_size(&self, children_total: u64, rounding: ZipRounding) -> u64 {
        match (&self.kind, &self.body) {
            (EntityKind::ZipFile, _) => rounding.halve(children_total),
            (_, EntityBody::Leaf(leaf)) => leaf.len(),
            _ => children_total,
        }
    }

    /// Recomputes and stores the size, returning the new value
    pub fn recompute_size(&mut self, children_total: u64, rounding: ZipRounding) -> u64 {
        self.size = self.expected_size(children_total, rounding);
        self.size
    }

    /// Moves this entity under a new parent with a new name and path
    ///
    /// Only this entity changes. The caller rewrites descendant paths and
    /// updates both parents' children.
    pub fn relocate(&mut self, parent: EntityId, name: String, path: String) {
        self.parent = Some(parent);
        self.name = name;
        self.path = path;
    }

    /// Replaces the stored path
    pub fn set_path(&mut self, path: String) {
        self.path = path;
    }
}
