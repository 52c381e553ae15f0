//! Entity kinds
//!
//! The namespace knows exactly four kinds of entity. Callers pass a kind in;
//! the engine decides what the kind is allowed to do by asking it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a namespace entity
///
/// Fixed at creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Root of a tree. Holds children, has no parent.
    Drive,
    /// Holds children. Size is the sum of its children.
    Folder,
    /// Holds text content. Size is the length of the content.
    TextFile,
    /// Holds children. Size is half the sum of its children.
    ZipFile,
}

impl EntityKind {
    /// All kinds, in declaration order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Drive,
        EntityKind::Folder,
        EntityKind::TextFile,
        EntityKind::ZipFile,
    ];

    /// Returns true if entities of this kind own a children map
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            EntityKind::Drive | EntityKind::Folder | EntityKind::ZipFile
        )
    }

    /// Returns true if entities of this kind hold content directly
    pub fn is_leaf(&self) -> bool {
        matches!(self, EntityKind::TextFile)
    }

    /// Returns true if entities of this kind are roots (never contained)
    pub fn is_root(&self) -> bool {
        matches!(self, EntityKind::Drive)
    }

    /// Returns the lowercase name, as used by the console and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Drive => "drive",
            EntityKind::Folder => "folder",
            EntityKind::TextFile => "text_file",
            EntityKind::ZipFile => "zip_file",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Drive => write!(f, "Drive"),
            EntityKind::Folder => write!(f, "Folder"),
            EntityKind::TextFile => write!(f, "TextFile"),
            EntityKind::ZipFile => write!(f, "ZipFile"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_kinds() {
        assert!(EntityKind::Drive.is_container());
        assert!(EntityKind::Folder.is_container());
        assert!(EntityKind::ZipFile.is_container());
        assert!(!EntityKind::TextFile.is_container());
    }

    #[test]
    fn test_leaf_and_root_kinds() {
        assert!(EntityKind::TextFile.is_leaf());
        assert!(EntityKind::Drive.is_root());
        for kind in EntityKind::ALL {
            if kind != EntityKind::TextFile {
                assert!(!kind.is_leaf(), "{} should not be a leaf", kind);
            }
            if kind != EntityKind::Drive {
                assert!(!kind.is_root(), "{} should not be a root", kind);
            }
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::ZipFile.to_string(), "ZipFile");
        assert_eq!(EntityKind::TextFile.as_str(), "text_file");
    }
}
