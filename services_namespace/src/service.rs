//! Namespace service implementation
//!
//! This module provides the service that owns the tree and implements the
//! namespace operations.

use crate::config::{ConfigError, NamespaceConfig};
use crate::error::NamespaceError;
use crate::operations::{NamespaceOperations, StatInfo};
use core_types::{EntityId, EntityKind};
use indexmap::IndexMap;
use ns_model::{Container, Entity, PathError, PathSyntax};
use services_logger::{LogEntry, LogLevel, LogSink, MemoryLog};
use std::collections::HashMap;

/// The Namespace Service
///
/// Owns every entity in an arena keyed by [`EntityId`]. Containers refer to
/// their children by id and children refer back to their parent by id, so
/// removing an entity from the arena is the only way it stops existing.
#[derive(Debug, Clone)]
pub struct Namespace {
    /// Active configuration
    config: NamespaceConfig,
    /// Path syntax derived from the configuration
    syntax: PathSyntax,
    /// All entities, indexed by EntityId
    entities: HashMap<EntityId, Entity>,
    /// Drives by name, in creation order
    drives: IndexMap<String, EntityId>,
    /// The drive created with the namespace
    main_drive: EntityId,
    /// Structured operation log
    log: MemoryLog,
}

impl Namespace {
    /// Creates a namespace holding only the configured main drive
    pub fn new(config: NamespaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: NamespaceConfig) -> Self {
        let drive = Entity::new_drive(config.main_drive.clone());
        let main_drive = drive.id();

        let mut entities = HashMap::new();
        let mut drives = IndexMap::new();
        drives.insert(drive.name().to_string(), main_drive);
        entities.insert(main_drive, drive);

        Self {
            syntax: config.path_syntax(),
            log: config.build_log(),
            config,
            entities,
            drives,
            main_drive,
        }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &NamespaceConfig {
        &self.config
    }

    /// Returns the path syntax
    pub fn syntax(&self) -> PathSyntax {
        self.syntax
    }

    /// Returns the operation log
    pub fn log(&self) -> &MemoryLog {
        &self.log
    }

    /// Returns the log mutably (to clear it)
    pub fn log_mut(&mut self) -> &mut MemoryLog {
        &mut self.log
    }

    /// Returns the main drive
    pub fn root(&self) -> &Entity {
        &self.entities[&self.main_drive]
    }

    /// Gets a drive by name
    pub fn drive(&self, name: &str) -> Option<&Entity> {
        self.drives.get(name).and_then(|id| self.entities.get(id))
    }

    /// Iterates drives in creation order
    pub fn drives(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.drives.values().filter_map(move |id| self.entities.get(id))
    }

    /// Gets an entity by ID
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Iterates a container's children in insertion order
    ///
    /// Yields nothing for text files and unknown ids.
    pub fn children(&self, id: EntityId) -> impl Iterator<Item = &Entity> + '_ {
        self.entities
            .get(&id)
            .and_then(Entity::as_container)
            .into_iter()
            .flat_map(|container| container.child_ids())
            .filter_map(move |child| self.entities.get(&child))
    }

    /// Counts every entity, drives included
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Resolves a path to an entity ID
    pub fn resolve_id(&self, path: &str) -> Option<EntityId> {
        let components = self.syntax.split(path).ok()?;
        let (drive, rest) = components.split_first()?;

        let mut current = *self.drives.get(*drive)?;
        for name in rest {
            current = self.entities.get(&current)?.as_container()?.get_child(name)?;
        }
        Some(current)
    }

    /// Reads a text file's content
    pub fn read(&self, path: &str) -> Result<&str, NamespaceError> {
        let entity = self
            .resolve(path)
            .ok_or_else(|| NamespaceError::NotFound(path.to_string()))?;
        entity
            .as_leaf()
            .map(|leaf| leaf.content())
            .ok_or_else(|| NamespaceError::NotATextFile(path.to_string()))
    }

    /// Adds another drive
    pub fn create_drive(&mut self, name: &str) -> Result<&Entity, NamespaceError> {
        let result = if !self.syntax.is_valid_name(name) {
            Err(NamespaceError::IllegalOperation(format!(
                "invalid drive name: {:?}",
                name
            )))
        } else if self.drives.contains_key(name) {
            Err(NamespaceError::AlreadyExists(name.to_string()))
        } else {
            let drive = Entity::new_drive(name.to_string());
            let id = drive.id();
            self.drives.insert(name.to_string(), id);
            self.entities.insert(id, drive);
            Ok(id)
        };
        self.finish("create_drive", name, result)
    }

    /// Verifies every cached size and path against the tree
    ///
    /// Operations keep the tree consistent on their own; this walks the whole
    /// tree and is meant for tests and diagnostics.
    pub fn check_consistency(&self) -> Result<(), NamespaceError> {
        let mut reachable = 0;
        let mut stack: Vec<EntityId> = self.drives.values().copied().collect();

        while let Some(id) = stack.pop() {
            reachable += 1;
            let entity = self.entity(id)?;

            let expected_path = match entity.parent() {
                None => entity.name().to_string(),
                Some(parent_id) => {
                    let parent = self.entity(parent_id)?;
                    let listed = parent
                        .as_container()
                        .and_then(|c| c.get_child(entity.name()));
                    if listed != Some(id) {
                        return Err(NamespaceError::Inconsistent(format!(
                            "{} is not listed by its parent",
                            entity.path()
                        )));
                    }
                    self.syntax.join(parent.path(), entity.name())
                }
            };
            if entity.path() != expected_path {
                return Err(NamespaceError::Inconsistent(format!(
                    "{} should be at {}",
                    entity.path(),
                    expected_path
                )));
            }

            let expected_size =
                entity.expected_size(self.children_total(id), self.config.zip_rounding);
            if entity.size() != expected_size {
                return Err(NamespaceError::Inconsistent(format!(
                    "{} has size {}, expected {}",
                    entity.path(),
                    entity.size(),
                    expected_size
                )));
            }

            if let Some(container) = entity.as_container() {
                for (name, child) in container.children() {
                    if self.entity(child)?.parent() != Some(id) {
                        return Err(NamespaceError::Inconsistent(format!(
                            "{} does not point back to {}",
                            name,
                            entity.path()
                        )));
                    }
                    stack.push(child);
                }
            }
        }

        if reachable != self.entities.len() {
            return Err(NamespaceError::Inconsistent(format!(
                "{} entities reachable, {} stored",
                reachable,
                self.entities.len()
            )));
        }
        Ok(())
    }

    fn entity(&self, id: EntityId) -> Result<&Entity, NamespaceError> {
        self.entities
            .get(&id)
            .ok_or_else(|| NamespaceError::Inconsistent(format!("dangling reference to {}", id)))
    }

    fn container_mut(&mut self, id: EntityId) -> Option<&mut Container> {
        self.entities.get_mut(&id).and_then(Entity::as_container_mut)
    }

    fn children_total(&self, id: EntityId) -> u64 {
        self.entities
            .get(&id)
            .and_then(Entity::as_container)
            .map(|container| {
                container
                    .child_ids()
                    .filter_map(|child| self.entities.get(&child))
                    .map(Entity::size)
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Returns true if `candidate` is `ancestor` or lies below it
    fn is_within(&self, candidate: EntityId, ancestor: EntityId) -> bool {
        let mut cursor = Some(candidate);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.entities.get(&id).and_then(Entity::parent);
        }
        false
    }

    /// Recomputes sizes from `start` up to its drive
    fn propagate_from(&mut self, start: EntityId) {
        let rounding = self.config.zip_rounding;
        let mut cursor = Some(start);

        while let Some(id) = cursor {
            let total = self.children_total(id);
            let Some(entity) = self.entities.get_mut(&id) else {
                break;
            };
            let size = entity.recompute_size(total, rounding);
            cursor = entity.parent();

            let entry = LogEntry::new(LogLevel::Debug, "size recomputed")
                .with_subject(id)
                .with_field("path", entity.path())
                .with_field("size", size);
            self.log.record(entry);
        }
    }

    /// Rewrites the paths of everything below `root` from `root`'s path
    fn rewrite_paths(&mut self, root: EntityId) {
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let Some(entity) = self.entities.get(&id) else {
                continue;
            };
            let parent_path = entity.path().to_string();
            let children: Vec<(String, EntityId)> = entity
                .as_container()
                .map(|c| c.children().map(|(name, child)| (name.to_string(), child)).collect())
                .unwrap_or_default();

            for (name, child) in children {
                let path = self.syntax.join(&parent_path, &name);
                if let Some(entity) = self.entities.get_mut(&child) {
                    entity.set_path(path);
                }
                stack.push(child);
            }
        }
    }

    /// Removes `root` and everything below it from the arena
    fn release_subtree(&mut self, root: EntityId) -> usize {
        let mut released = 0;
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if let Some(entity) = self.entities.remove(&id) {
                released += 1;
                if let Some(container) = entity.as_container() {
                    stack.extend(container.child_ids());
                }
            }
        }
        released
    }

    fn try_create(
        &mut self,
        kind: EntityKind,
        name: &str,
        parent_path: &str,
    ) -> Result<EntityId, NamespaceError> {
        let parent_id = self
            .resolve_id(parent_path)
            .ok_or_else(|| NamespaceError::NotFound(parent_path.to_string()))?;
        let parent = self.entity(parent_id)?;
        let path = self.syntax.join(parent.path(), name);

        match parent.as_container() {
            Some(children) if children.contains(name) => {
                return Err(NamespaceError::AlreadyExists(path));
            }
            Some(_) => {}
            None => {
                return Err(NamespaceError::IllegalOperation(format!(
                    "{} cannot contain other entities",
                    parent.path()
                )));
            }
        }
        if kind.is_root() {
            return Err(NamespaceError::IllegalOperation(format!(
                "{} is a drive and cannot be placed inside {}",
                name,
                parent.path()
            )));
        }
        if !self.syntax.is_valid_name(name) {
            return Err(NamespaceError::IllegalOperation(format!(
                "invalid name: {:?}",
                name
            )));
        }

        let entity = Entity::new(kind, name.to_string(), path, Some(parent_id));
        let id = entity.id();
        self.entities.insert(id, entity);
        if let Some(children) = self.container_mut(parent_id) {
            children.add_child(name.to_string(), id);
        }
        self.propagate_from(parent_id);
        Ok(id)
    }

    fn try_delete(&mut self, path: &str) -> Result<usize, NamespaceError> {
        let (parent_path, name) = match self.syntax.split_parent(path) {
            Ok(split) => split,
            Err(PathError::NoParent(_)) if self.resolve_id(path).is_some() => {
                return Err(NamespaceError::IllegalOperation(format!(
                    "drive {} cannot be deleted",
                    path
                )));
            }
            Err(err) => return Err(err.into()),
        };

        let not_found = || NamespaceError::NotFound(path.to_string());
        let parent_id = self.resolve_id(&parent_path).ok_or_else(not_found)?;
        let child_id = self
            .entity(parent_id)?
            .as_container()
            .and_then(|c| c.get_child(name))
            .ok_or_else(not_found)?;

        if let Some(children) = self.container_mut(parent_id) {
            children.remove_child(name);
        }
        let released = self.release_subtree(child_id);
        self.propagate_from(parent_id);
        Ok(released)
    }

    fn try_move(&mut self, source_path: &str, dest_path: &str) -> Result<EntityId, NamespaceError> {
        let dest_not_found = || NamespaceError::NotFound(dest_path.to_string());

        let source_id = self
            .resolve_id(source_path)
            .ok_or_else(|| NamespaceError::NotFound(source_path.to_string()))?;
        let (dest_parent_path, dest_name) = self
            .syntax
            .split_parent(dest_path)
            .map_err(|_| dest_not_found())?;
        let dest_parent_id = self
            .resolve_id(&dest_parent_path)
            .ok_or_else(dest_not_found)?;

        let source = self.entity(source_id)?;
        let Some(source_parent_id) = source.parent() else {
            return Err(NamespaceError::IllegalOperation(format!(
                "drive {} cannot be moved",
                source.path()
            )));
        };
        if self.is_within(dest_parent_id, source_id) {
            return Err(NamespaceError::IllegalOperation(format!(
                "cannot move {} into itself",
                source.path()
            )));
        }

        let dest_parent = self.entity(dest_parent_id)?;
        let Some(dest_children) = dest_parent.as_container() else {
            return Err(NamespaceError::IllegalOperation(format!(
                "{} cannot contain other entities",
                dest_parent.path()
            )));
        };
        if !self.syntax.is_valid_name(dest_name) {
            return Err(NamespaceError::IllegalOperation(format!(
                "invalid name: {:?}",
                dest_name
            )));
        }
        if dest_children.contains(dest_name) {
            return Err(NamespaceError::AlreadyExists(dest_path.to_string()));
        }

        let source_name = source.name().to_string();
        let new_path = self.syntax.join(dest_parent.path(), dest_name);

        if let Some(children) = self.container_mut(source_parent_id) {
            children.remove_child(&source_name);
        }
        if let Some(entity) = self.entities.get_mut(&source_id) {
            entity.relocate(dest_parent_id, dest_name.to_string(), new_path);
        }
        if let Some(children) = self.container_mut(dest_parent_id) {
            children.add_child(dest_name.to_string(), source_id);
        }
        self.rewrite_paths(source_id);

        self.propagate_from(source_parent_id);
        self.propagate_from(dest_parent_id);
        Ok(source_id)
    }

    fn try_write(&mut self, path: &str, content: &str) -> Result<EntityId, NamespaceError> {
        let id = self
            .resolve_id(path)
            .ok_or_else(|| NamespaceError::NotFound(path.to_string()))?;
        let leaf = self
            .entities
            .get_mut(&id)
            .and_then(Entity::as_leaf_mut)
            .ok_or_else(|| NamespaceError::NotATextFile(path.to_string()))?;

        leaf.set_content(content.to_string());
        self.propagate_from(id);
        Ok(id)
    }

    /// Logs the outcome of an operation and hands back the affected entity
    fn finish(
        &mut self,
        op: &str,
        path: &str,
        result: Result<EntityId, NamespaceError>,
    ) -> Result<&Entity, NamespaceError> {
        match result {
            Ok(id) => {
                let entity = self.entity(id)?;
                let entry = LogEntry::new(LogLevel::Info, format!("{} succeeded", op))
                    .with_subject(id)
                    .with_field("op", op)
                    .with_field("path", entity.path())
                    .with_field("kind", entity.kind())
                    .with_field("size", entity.size());
                self.log.record(entry);
                self.entity(id)
            }
            Err(err) => {
                self.record_failure(op, path, &err);
                Err(err)
            }
        }
    }

    fn record_failure(&mut self, op: &str, path: &str, err: &NamespaceError) {
        let entry = LogEntry::new(LogLevel::Warn, format!("{} failed", op))
            .with_field("op", op)
            .with_field("path", path)
            .with_field("error", err);
        self.log.record(entry);
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::build(NamespaceConfig::default())
    }
}

impl NamespaceOperations for Namespace {
    fn resolve(&self, path: &str) -> Option<&Entity> {
        self.resolve_id(path).and_then(|id| self.entities.get(&id))
    }

    fn create(
        &mut self,
        kind: EntityKind,
        name: &str,
        parent_path: &str,
    ) -> Result<&Entity, NamespaceError> {
        let result = self.try_create(kind, name, parent_path);
        self.finish("create", parent_path, result)
    }

    fn delete(&mut self, path: &str) -> Result<(), NamespaceError> {
        match self.try_delete(path) {
            Ok(released) => {
                let entry = LogEntry::new(LogLevel::Info, "delete succeeded")
                    .with_field("op", "delete")
                    .with_field("path", path)
                    .with_field("released", released);
                self.log.record(entry);
                Ok(())
            }
            Err(err) => {
                self.record_failure("delete", path, &err);
                Err(err)
            }
        }
    }

    fn move_entity(
        &mut self,
        source_path: &str,
        dest_path: &str,
    ) -> Result<&Entity, NamespaceError> {
        let result = self.try_move(source_path, dest_path);
        self.finish("move", source_path, result)
    }

    fn write(&mut self, path: &str, content: &str) -> Result<&Entity, NamespaceError> {
        let result = self.try_write(path, content);
        self.finish("write", path, result)
    }

    fn stat(&self, path: &str) -> Result<StatInfo, NamespaceError> {
        self.resolve(path)
            .map(StatInfo::of)
            .ok_or_else(|| NamespaceError::NotFound(path.to_string()))
    }

    fn list(&self, path: &str) -> Result<Vec<&Entity>, NamespaceError> {
        let entity = self
            .resolve(path)
            .ok_or_else(|| NamespaceError::NotFound(path.to_string()))?;
        if !entity.is_container() {
            return Err(NamespaceError::IllegalOperation(format!(
                "{} has no children",
                path
            )));
        }
        Ok(self.children(entity.id()).collect())
    }
}
