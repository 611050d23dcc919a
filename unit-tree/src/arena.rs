//! Flat id-indexed storage for the unit hierarchy
//!
//! Nodes keep their children as id lists, so appending a unit costs one path
//! copy (O(depth)) instead of rebuilding the whole forest.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::unit::{validate_forest, Badge, Unit, UnitKind};

/// A unit stored in a [`UnitArena`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaNode {
    pub id: String,
    pub name: String,
    pub kind: UnitKind,
    pub path: Vec<String>,
    pub parent_id: Option<String>,
    pub children: Vec<String>,
    pub badge: Option<Badge>,
}

impl ArenaNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Fields supplied by the caller when creating a unit; the path and parent
/// link are derived by the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUnit {
    pub id: String,
    pub name: String,
    pub kind: UnitKind,
    pub badge: Option<Badge>,
}

impl NewUnit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: UnitKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitArena {
    nodes: HashMap<String, ArenaNode>,
    roots: Vec<String>,
}

impl UnitArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a nested forest. The forest is validated first, so duplicate
    /// ids and broken paths are rejected.
    pub fn from_forest(forest: &[Unit]) -> TreeResult<Self> {
        validate_forest(forest)?;
        let mut arena = Self::new();
        for root in forest {
            arena.roots.push(root.id.clone());
            arena.index_subtree(root);
        }
        log::debug!(
            "indexed {} units under {} roots",
            arena.nodes.len(),
            arena.roots.len()
        );
        Ok(arena)
    }

    fn index_subtree(&mut self, unit: &Unit) {
        let node = ArenaNode {
            id: unit.id.clone(),
            name: unit.name.clone(),
            kind: unit.kind.clone(),
            path: unit.path.clone(),
            parent_id: if unit.path.len() > 1 {
                unit.path.get(unit.path.len() - 2).cloned()
            } else {
                None
            },
            children: unit.children.iter().map(|c| c.id.clone()).collect(),
            badge: unit.badge.clone(),
        };
        self.nodes.insert(unit.id.clone(), node);
        for child in &unit.children {
            self.index_subtree(child);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ArenaNode> {
        self.nodes.get(id)
    }

    /// Root ids in display order
    pub fn root_ids(&self) -> &[String] {
        &self.roots
    }

    pub fn roots(&self) -> impl Iterator<Item = &ArenaNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Children of `id` in display order; empty for unknown ids
    pub fn children(&self, id: &str) -> impl Iterator<Item = &ArenaNode> {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|cid| self.nodes.get(cid))
    }

    /// Ancestor ids of `id`, root first, excluding `id` itself
    pub fn ancestors(&self, id: &str) -> &[String] {
        match self.nodes.get(id) {
            Some(node) => &node.path[..node.path.len().saturating_sub(1)],
            None => &[],
        }
    }

    /// Add a root unit
    pub fn insert_root(&mut self, unit: NewUnit) -> TreeResult<&ArenaNode> {
        if self.nodes.contains_key(&unit.id) {
            log::warn!("rejected root '{}': duplicate id", unit.id);
            return Err(TreeError::DuplicateId(unit.id));
        }
        let id = unit.id.clone();
        self.roots.push(id.clone());
        self.nodes.insert(
            id.clone(),
            ArenaNode {
                path: vec![id.clone()],
                id: id.clone(),
                name: unit.name,
                kind: unit.kind,
                parent_id: None,
                children: Vec::new(),
                badge: unit.badge,
            },
        );
        Ok(&self.nodes[&id])
    }

    /// Append a unit as the last child of `parent_id`.
    ///
    /// The child's path is `parent.path + [id]`. Ids are unique across the
    /// arena, which together with append-only mutation keeps the hierarchy
    /// acyclic.
    pub fn insert_child(&mut self, parent_id: &str, unit: NewUnit) -> TreeResult<&ArenaNode> {
        if self.nodes.contains_key(&unit.id) {
            log::warn!("rejected unit '{}': duplicate id", unit.id);
            return Err(TreeError::DuplicateId(unit.id));
        }
        let parent = self
            .nodes
            .get_mut(parent_id)
            .ok_or_else(|| TreeError::UnitNotFound(parent_id.to_string()))?;

        let mut path = Vec::with_capacity(parent.path.len() + 1);
        path.extend_from_slice(&parent.path);
        path.push(unit.id.clone());
        parent.children.push(unit.id.clone());

        let id = unit.id.clone();
        log::debug!("appended unit '{}' under '{}'", id, parent_id);
        self.nodes.insert(
            id.clone(),
            ArenaNode {
                id: id.clone(),
                name: unit.name,
                kind: unit.kind,
                path,
                parent_id: Some(parent_id.to_string()),
                children: Vec::new(),
                badge: unit.badge,
            },
        );
        Ok(&self.nodes[&id])
    }

    /// Rebuild the nested representation of one subtree
    pub fn subtree(&self, id: &str) -> Option<Unit> {
        let node = self.nodes.get(id)?;
        Some(Unit {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.clone(),
            path: node.path.clone(),
            parent_id: node.parent_id.clone(),
            children: node
                .children
                .iter()
                .filter_map(|cid| self.subtree(cid))
                .collect(),
            badge: node.badge.clone(),
        })
    }

    /// Rebuild the nested forest
    pub fn to_forest(&self) -> Vec<Unit> {
        self.roots.iter().filter_map(|id| self.subtree(id)).collect()
    }

    /// Depth-first walk in display order
    pub fn walk(&self) -> Vec<&ArenaNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<&str> = self.roots.iter().rev().map(String::as_str).collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push(node);
                stack.extend(node.children.iter().rev().map(String::as_str));
            }
        }
        out
    }
}
