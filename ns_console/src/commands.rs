//! # Console Commands
//!
//! Line-oriented commands over a [`Namespace`].
//!
//! ## Command Set
//!
//! - `mkdir <parent> <name>` - Create a folder
//! - `touch <parent> <name>` - Create an empty text file
//! - `zip <parent> <name>` - Create a zip file
//! - `drive <name>` - Add a drive
//! - `rm <path>` - Delete an entity and everything below it
//! - `mv <src> <dst>` - Move or rename an entity
//! - `write <path> <text...>` - Replace a text file's content
//! - `cat <path>` - Print a text file's content
//! - `stat <path>` - Show entity details
//! - `ls <path>` - List a container's children
//! - `tree [path]` - Print a subtree with sizes
//! - `log` - Print the operation log
//!
//! ## Philosophy
//!
//! - One command per line, arguments split on whitespace
//! - Paths never contain spaces; only `write` keeps the rest of the line
//! - Commands only call the namespace; they hold no state of their own

use crate::tree::render_tree;
use core_types::EntityKind;
use services_namespace::{ConfigError, Namespace, NamespaceConfig, NamespaceError, NamespaceOperations};
use thiserror::Error;

/// Console command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Create an entity of `kind` named `name` under `parent`
    Create {
        kind: EntityKind,
        parent: String,
        name: String,
    },

    /// Add a drive
    Drive { name: String },

    /// Delete an entity
    Remove { path: String },

    /// Move an entity
    Move { source: String, dest: String },

    /// Replace a text file's content
    Write { path: String, text: String },

    /// Print a text file's content
    Cat { path: String },

    /// Show entity details
    Stat { path: String },

    /// List children
    List { path: String },

    /// Print a subtree; the main drive when no path is given
    Tree { path: Option<String> },

    /// Print the operation log
    Log,
}

/// Console command parser
pub struct ConsoleCommandParser;

impl ConsoleCommandParser {
    /// Parses a command line
    pub fn parse(input: &str) -> Result<ConsoleCommand, CommandError> {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Err(CommandError::EmptyCommand);
        };
        let cmd = first.to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "mkdir" => Self::parse_create(EntityKind::Folder, args),
            "touch" => Self::parse_create(EntityKind::TextFile, args),
            "zip" => Self::parse_create(EntityKind::ZipFile, args),
            "drive" => Ok(ConsoleCommand::Drive {
                name: Self::arg(args, 0, "drive name")?,
            }),
            "rm" => Ok(ConsoleCommand::Remove {
                path: Self::arg(args, 0, "path")?,
            }),
            "mv" => Ok(ConsoleCommand::Move {
                source: Self::arg(args, 0, "source path")?,
                dest: Self::arg(args, 1, "destination path")?,
            }),
            "write" => Ok(ConsoleCommand::Write {
                path: Self::arg(args, 0, "path")?,
                text: Self::rest_of_line(input, 2),
            }),
            "cat" => Ok(ConsoleCommand::Cat {
                path: Self::arg(args, 0, "path")?,
            }),
            "stat" => Ok(ConsoleCommand::Stat {
                path: Self::arg(args, 0, "path")?,
            }),
            "ls" => Ok(ConsoleCommand::List {
                path: Self::arg(args, 0, "path")?,
            }),
            "tree" => Ok(ConsoleCommand::Tree {
                path: args.first().map(|path| path.to_string()),
            }),
            "log" => Ok(ConsoleCommand::Log),
            _ => Err(CommandError::UnknownCommand(cmd)),
        }
    }

    fn parse_create(kind: EntityKind, args: &[&str]) -> Result<ConsoleCommand, CommandError> {
        Ok(ConsoleCommand::Create {
            kind,
            parent: Self::arg(args, 0, "parent path")?,
            name: Self::arg(args, 1, "name")?,
        })
    }

    fn arg(args: &[&str], index: usize, what: &str) -> Result<String, CommandError> {
        args.get(index)
            .map(|arg| arg.to_string())
            .ok_or_else(|| CommandError::MissingArgument(what.to_string()))
    }

    /// Returns the line after its first `skip` words, inner spacing intact
    fn rest_of_line(input: &str, skip: usize) -> String {
        let mut rest = input;
        for _ in 0..skip {
            rest = rest.trim_start();
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            rest = &rest[end..];
        }
        rest.trim().to_string()
    }
}

/// Console command handler
#[derive(Default)]
pub struct CommandHandler {
    /// The namespace commands operate on
    namespace: Namespace,
}

impl CommandHandler {
    /// Creates a new command handler over a fresh namespace
    pub fn new(config: NamespaceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            namespace: Namespace::new(config)?,
        })
    }

    /// Returns the namespace
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the namespace mutably
    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    /// Parses and executes one line
    ///
    /// Blank lines and `#` comments produce no output.
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let command = ConsoleCommandParser::parse(line)?;
        self.execute(command).map(Some)
    }

    /// Executes a parsed command and returns its output
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<String, CommandError> {
        match command {
            ConsoleCommand::Create { kind, parent, name } => self.create(kind, &parent, &name),
            ConsoleCommand::Drive { name } => self.drive(&name),
            ConsoleCommand::Remove { path } => self.rm(&path),
            ConsoleCommand::Move { source, dest } => self.mv(&source, &dest),
            ConsoleCommand::Write { path, text } => self.write(&path, &text),
            ConsoleCommand::Cat { path } => self.cat(&path),
            ConsoleCommand::Stat { path } => self.stat(&path),
            ConsoleCommand::List { path } => self.ls(&path),
            ConsoleCommand::Tree { path } => self.tree(path.as_deref()),
            ConsoleCommand::Log => Ok(self.log()),
        }
    }

    /// Creates an entity
    ///
    /// Example: `mkdir C:\docs projects`
    pub fn create(&mut self, kind: EntityKind, parent: &str, name: &str) -> Result<String, CommandError> {
        let entity = self.namespace.create(kind, name, parent)?;
        Ok(format!("Created {}: {}", entity.kind().as_str(), entity.path()))
    }

    /// Adds a drive
    ///
    /// Example: `drive D:`
    pub fn drive(&mut self, name: &str) -> Result<String, CommandError> {
        let drive = self.namespace.create_drive(name)?;
        Ok(format!("Created drive: {}", drive.path()))
    }

    /// Deletes an entity
    ///
    /// Example: `rm C:\docs\old.txt`
    pub fn rm(&mut self, path: &str) -> Result<String, CommandError> {
        self.namespace.delete(path)?;
        Ok(format!("Deleted: {}", path))
    }

    /// Moves an entity
    ///
    /// Example: `mv C:\docs\a.txt C:\archive\a.txt`
    pub fn mv(&mut self, source: &str, dest: &str) -> Result<String, CommandError> {
        let moved = self.namespace.move_entity(source, dest)?;
        Ok(format!("Moved {} -> {}", source, moved.path()))
    }

    /// Replaces a text file's content
    ///
    /// Example: `write C:\docs\a.txt hello world`
    pub fn write(&mut self, path: &str, text: &str) -> Result<String, CommandError> {
        let file = self.namespace.write(path, text)?;
        Ok(format!("Wrote {} chars to {}", file.size(), file.path()))
    }

    /// Prints a text file's content
    pub fn cat(&self, path: &str) -> Result<String, CommandError> {
        Ok(self.namespace.read(path)?.to_string())
    }

    /// Displays entity details
    pub fn stat(&self, path: &str) -> Result<String, CommandError> {
        let stat = self.namespace.stat(path)?;

        let mut output = format!("Path: {}\n", stat.path);
        output.push_str(&format!("Kind: {}\n", stat.kind.as_str()));
        output.push_str(&format!("Size: {}\n", stat.size));
        if let Some(count) = stat.entry_count {
            output.push_str(&format!("Entries: {}\n", count));
        }
        output.push_str(&format!("ID: {}", stat.id));
        Ok(output)
    }

    /// Lists a container's children, one `name (size)` per line
    pub fn ls(&self, path: &str) -> Result<String, CommandError> {
        let lines: Vec<String> = self
            .namespace
            .list(path)?
            .into_iter()
            .map(|entity| {
                let suffix = if entity.is_container() { "/" } else { "" };
                format!("{}{} ({})", entity.name(), suffix, entity.size())
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Renders a subtree
    pub fn tree(&self, path: Option<&str>) -> Result<String, CommandError> {
        let id = match path {
            Some(path) => self
                .namespace
                .resolve_id(path)
                .ok_or_else(|| NamespaceError::NotFound(path.to_string()))?,
            None => self.namespace.root().id(),
        };
        Ok(render_tree(&self.namespace, id).trim_end().to_string())
    }

    /// Renders the operation log, one entry per line
    pub fn log(&self) -> String {
        self.namespace
            .log()
            .entries()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
