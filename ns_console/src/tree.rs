//! Tree rendering
//!
//! Prints a subtree with one line per entity:
//!
//! ```text
//! - C: (5)
//!    |- docs (5)
//!    |  - a.txt (5)
//!    - empty (0)
//! ```
//!
//! The last child of a container is marked `- `, the others `|- `.

use core_types::EntityId;
use services_namespace::Namespace;
use std::fmt::Write;

/// Renders the subtree rooted at `id`
///
/// Returns an empty string for unknown ids.
pub fn render_tree(namespace: &Namespace, id: EntityId) -> String {
    let mut out = String::new();
    render_node(namespace, id, "", true, &mut out);
    out
}

fn render_node(namespace: &Namespace, id: EntityId, prefix: &str, last: bool, out: &mut String) {
    let Some(entity) = namespace.get(id) else {
        return;
    };

    let marker = if last { "- " } else { "|- " };
    let _ = writeln!(out, "{}{}{} ({})", prefix, marker, entity.name(), entity.size());

    let child_prefix = format!("{}{}", prefix, if last { "   " } else { "|  " });
    let children: Vec<EntityId> = namespace.children(id).map(|child| child.id()).collect();
    let count = children.len();

    for (index, child) in children.into_iter().enumerate() {
        render_node(namespace, child, &child_prefix, index + 1 == count, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::EntityKind;
    use services_namespace::NamespaceOperations;

    #[test]
    fn test_render_single_drive() {
        let ns = Namespace::default();
        assert_eq!(render_tree(&ns, ns.root().id()), "- C: (0)\n");
    }

    #[test]
    fn test_render_nested() {
        let mut ns = Namespace::default();
        ns.create(EntityKind::Folder, "docs", "C:").unwrap();
        ns.create(EntityKind::TextFile, "a.txt", "C:\\docs").unwrap();
        ns.create(EntityKind::Folder, "empty", "C:").unwrap();
        ns.write("C:\\docs\\a.txt", "hello").unwrap();

        let expected = "\
- C: (5)
   |- docs (5)
   |  - a.txt (5)
   - empty (0)
";
        assert_eq!(render_tree(&ns, ns.root().id()), expected);
    }

    #[test]
    fn test_render_subtree() {
        let mut ns = Namespace::default();
        ns.create(EntityKind::ZipFile, "arc", "C:").unwrap();
        ns.create(EntityKind::TextFile, "x", "C:\\arc").unwrap();
        ns.create(EntityKind::TextFile, "y", "C:\\arc").unwrap();

        let arc = ns.resolve_id("C:\\arc").unwrap();
        assert_eq!(render_tree(&ns, arc), "- arc (0)\n   |- x (0)\n   - y (0)\n");
    }

    #[test]
    fn test_render_unknown_id() {
        let ns = Namespace::default();
        assert_eq!(render_tree(&ns, EntityId::new()), "");
    }
}
