//! Path syntax
//!
//! This module handles splitting and joining namespace paths. A path is a
//! sequence of names joined by a single separator character; the first name
//! is a drive.

use thiserror::Error;

/// Errors that can occur while parsing a path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Path is empty or malformed
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Path names a drive, which has no parent
    #[error("Path has no parent: {0}")]
    NoParent(String),
}

/// Path syntax for one namespace
///
/// Every namespace uses exactly one separator. `/` and `\` are not
/// interchangeable: with the default `\` separator, `C:/docs` is a single
/// name, not two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSyntax {
    separator: char,
}

impl PathSyntax {
    /// The separator used when none is configured
    pub const DEFAULT_SEPARATOR: char = '\\';

    /// Creates a path syntax with the given separator
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Returns the separator character
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Splits a path into its names
    ///
    /// # Examples
    ///
    /// ```
    /// use ns_model::PathSyntax;
    ///
    /// let syntax = PathSyntax::new('/');
    /// let components = syntax.split("C:/docs/todo.txt").unwrap();
    /// assert_eq!(components, vec!["C:", "docs", "todo.txt"]);
    ///
    /// let components = syntax.split("C:").unwrap();
    /// assert_eq!(components, vec!["C:"]);
    /// ```
    pub fn split<'a>(&self, path: &'a str) -> Result<Vec<&'a str>, PathError> {
        let trimmed = path.trim_matches(self.separator);

        if trimmed.is_empty() {
            return Err(PathError::InvalidPath("Empty path".to_string()));
        }

        let components: Vec<&str> = trimmed.split(self.separator).collect();

        for component in &components {
            if component.is_empty() {
                return Err(PathError::InvalidPath(format!(
                    "Path contains empty component: {}",
                    path
                )));
            }
            if *component == "." || *component == ".." {
                return Err(PathError::InvalidPath(format!(
                    "Relative path components (. or ..) are not supported: {}",
                    path
                )));
            }
        }

        Ok(components)
    }

    /// Splits a path into its parent path and final name
    ///
    /// The parent path is rebuilt from the components, so redundant leading or
    /// trailing separators do not survive.
    pub fn split_parent<'a>(&self, path: &'a str) -> Result<(String, &'a str), PathError> {
        let components = self.split(path)?;
        match components.split_last() {
            Some((name, parent)) if !parent.is_empty() => {
                let parent_path = parent.join(&self.separator.to_string());
                Ok((parent_path, name))
            }
            _ => Err(PathError::NoParent(path.to_string())),
        }
    }

    /// Joins a parent path and a child name
    pub fn join(&self, parent: &str, name: &str) -> String {
        let mut joined = String::with_capacity(parent.len() + name.len() + 1);
        joined.push_str(parent);
        joined.push(self.separator);
        joined.push_str(name);
        joined
    }

    /// Validates a single name
    ///
    /// Returns true if the name can be used for an entity.
    pub fn is_valid_name(&self, name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(self.separator)
            && !name.contains('\0')
    }
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slash() -> PathSyntax {
        PathSyntax::new('/')
    }

    #[test]
    fn test_split_drive_only() {
        let result = slash().split("C:").unwrap();
        assert_eq!(result, vec!["C:"]);
    }

    #[test]
    fn test_split_nested_path() {
        let result = slash().split("C:/docs/notes/todo.txt").unwrap();
        assert_eq!(result, vec!["C:", "docs", "notes", "todo.txt"]);
    }

    #[test]
    fn test_split_default_backslash() {
        let result = PathSyntax::default().split("C:\\docs\\a.txt").unwrap();
        assert_eq!(result, vec!["C:", "docs", "a.txt"]);
    }

    #[test]
    fn test_other_separator_is_part_of_name() {
        let result = PathSyntax::default().split("C:/docs").unwrap();
        assert_eq!(result, vec!["C:/docs"]);
    }

    #[test]
    fn test_split_trailing_separator() {
        let result = slash().split("C:/docs/").unwrap();
        assert_eq!(result, vec!["C:", "docs"]);
    }

    #[test]
    fn test_empty_path() {
        let result = slash().split("");
        assert!(matches!(result, Err(PathError::InvalidPath(_))));
    }

    #[test]
    fn test_only_separators() {
        let result = slash().split("///");
        assert!(matches!(result, Err(PathError::InvalidPath(_))));
    }

    #[test]
    fn test_double_separator() {
        let result = slash().split("C://notes.txt");
        assert!(matches!(result, Err(PathError::InvalidPath(_))));
    }

    #[test]
    fn test_relative_components() {
        assert!(matches!(
            slash().split("C:/./notes.txt"),
            Err(PathError::InvalidPath(_))
        ));
        assert!(matches!(
            slash().split("C:/docs/../notes.txt"),
            Err(PathError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_split_parent() {
        let (parent, name) = slash().split_parent("C:/docs/a.txt").unwrap();
        assert_eq!(parent, "C:/docs");
        assert_eq!(name, "a.txt");
    }

    #[test]
    fn test_split_parent_of_drive() {
        let result = slash().split_parent("C:");
        assert_eq!(result, Err(PathError::NoParent("C:".to_string())));
    }

    #[test]
    fn test_join() {
        assert_eq!(slash().join("C:/docs", "a.txt"), "C:/docs/a.txt");
        assert_eq!(PathSyntax::default().join("C:", "docs"), "C:\\docs");
    }

    #[test]
    fn test_is_valid_name() {
        let syntax = slash();
        assert!(syntax.is_valid_name("todo.txt"));
        assert!(syntax.is_valid_name("my folder"));
        assert!(syntax.is_valid_name("back\\slash"));

        assert!(!syntax.is_valid_name(""));
        assert!(!syntax.is_valid_name("."));
        assert!(!syntax.is_valid_name(".."));
        assert!(!syntax.is_valid_name("has/slash"));
        assert!(!syntax.is_valid_name("has\0null"));
    }
}
