//! Namespace operations
//!
//! This module defines the operations provided by the namespace service.

use crate::error::NamespaceError;
use core_types::{EntityId, EntityKind};
use ns_model::Entity;

/// Metadata about an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatInfo {
    /// Entity ID
    pub id: EntityId,
    /// Entity kind
    pub kind: EntityKind,
    /// Full path
    pub path: String,
    /// Cached size
    pub size: u64,
    /// Child count (for containers)
    pub entry_count: Option<usize>,
}

impl StatInfo {
    /// Builds stat info from an entity
    pub fn of(entity: &Entity) -> Self {
        Self {
            id: entity.id(),
            kind: entity.kind(),
            path: entity.path().to_string(),
            size: entity.size(),
            entry_count: entity.as_container().map(|c| c.len()),
        }
    }
}

/// Namespace operations trait
///
/// Mutating operations validate everything before changing anything, and
/// return only after every affected size has been recomputed.
pub trait NamespaceOperations {
    /// Resolve a path
    ///
    /// Returns the entity at the given path, or `None` if any segment is
    /// missing or the path is malformed. Never mutates.
    fn resolve(&self, path: &str) -> Option<&Entity>;

    /// Create an entity
    ///
    /// Creates an empty entity of `kind` named `name` under the container at
    /// `parent_path`.
    fn create(
        &mut self,
        kind: EntityKind,
        name: &str,
        parent_path: &str,
    ) -> Result<&Entity, NamespaceError>;

    /// Delete an entity
    ///
    /// Removes the entity at the given path together with its subtree.
    fn delete(&mut self, path: &str) -> Result<(), NamespaceError>;

    /// Move an entity
    ///
    /// Re-homes the entity at `source_path` so it lives at `dest_path`. The
    /// final segment of `dest_path` becomes its new name. Content, children
    /// and identity are kept.
    fn move_entity(&mut self, source_path: &str, dest_path: &str)
        -> Result<&Entity, NamespaceError>;

    /// Write to a text file
    ///
    /// Replaces the content of the text file at the given path.
    fn write(&mut self, path: &str, content: &str) -> Result<&Entity, NamespaceError>;

    /// Get entity metadata
    fn stat(&self, path: &str) -> Result<StatInfo, NamespaceError>;

    /// List a container's children in insertion order
    fn list(&self, path: &str) -> Result<Vec<&Entity>, NamespaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_info_of_container() {
        let mut drive = Entity::new_drive("C:".to_string());
        drive
            .as_container_mut()
            .unwrap()
            .add_child("docs".to_string(), EntityId::new());

        let stat = StatInfo::of(&drive);
        assert_eq!(stat.id, drive.id());
        assert_eq!(stat.kind, EntityKind::Drive);
        assert_eq!(stat.path, "C:");
        assert_eq!(stat.size, 0);
        assert_eq!(stat.entry_count, Some(1));
    }

    #[test]
    fn test_stat_info_of_leaf() {
        let file = Entity::new(
            EntityKind::TextFile,
            "a.txt".to_string(),
            "C:\\a.txt".to_string(),
            None,
        );

        let stat = StatInfo::of(&file);
        assert_eq!(stat.kind, EntityKind::TextFile);
        assert_eq!(stat.entry_count, None);
    }
}
