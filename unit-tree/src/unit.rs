//! Unit - a node in the organizational hierarchy

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

/// Organizational level of a unit.
///
/// The set is open: unknown strings are kept verbatim in [`UnitKind::Other`].
/// The kind only drives presentation (icon, label, suggested child kind).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitKind {
    University,
    School,
    Faculty,
    Cycle,
    Department,
    Level,
    Degree,
    Class,
    Semester,
    Other(String),
}

impl UnitKind {
    /// All well-known kinds, in hierarchy order
    pub const KNOWN: [UnitKind; 9] = [
        UnitKind::University,
        UnitKind::School,
        UnitKind::Faculty,
        UnitKind::Cycle,
        UnitKind::Department,
        UnitKind::Level,
        UnitKind::Degree,
        UnitKind::Class,
        UnitKind::Semester,
    ];

    /// Wire name, as found in the `type` field
    pub fn as_str(&self) -> &str {
        match self {
            UnitKind::University => "university",
            UnitKind::School => "school",
            UnitKind::Faculty => "faculty",
            UnitKind::Cycle => "cycle",
            UnitKind::Department => "department",
            UnitKind::Level => "level",
            UnitKind::Degree => "degree",
            UnitKind::Class => "class",
            UnitKind::Semester => "semester",
            UnitKind::Other(raw) => raw,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &str {
        match self {
            UnitKind::University => "University",
            UnitKind::School => "School",
            UnitKind::Faculty => "Faculty",
            UnitKind::Cycle => "Cycle",
            UnitKind::Department => "Department",
            UnitKind::Level => "Level",
            UnitKind::Degree => "Degree",
            UnitKind::Class => "Class",
            UnitKind::Semester => "Semester",
            UnitKind::Other(raw) => raw,
        }
    }

    /// Icon glyph; unrecognized kinds fall back to a folder
    pub fn icon(&self) -> &'static str {
        match self {
            UnitKind::University => "🏛",
            UnitKind::School => "🏫",
            UnitKind::Faculty => "🎓",
            UnitKind::Cycle => "🔁",
            UnitKind::Department => "🏢",
            UnitKind::Level => "📶",
            UnitKind::Degree => "📜",
            UnitKind::Class => "👥",
            UnitKind::Semester => "🗓",
            UnitKind::Other(_) => "📁",
        }
    }

    /// Kind pre-filled when adding a child under a unit of this kind
    pub fn suggested_child_kind(&self) -> UnitKind {
        match self {
            UnitKind::University => UnitKind::Faculty,
            UnitKind::School => UnitKind::Cycle,
            UnitKind::Faculty => UnitKind::Department,
            UnitKind::Cycle => UnitKind::Level,
            UnitKind::Department => UnitKind::Degree,
            UnitKind::Level => UnitKind::Class,
            UnitKind::Degree => UnitKind::Class,
            UnitKind::Class => UnitKind::Semester,
            UnitKind::Semester | UnitKind::Other(_) => UnitKind::Class,
        }
    }
}

impl From<&str> for UnitKind {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "university" => UnitKind::University,
            "school" => UnitKind::School,
            "faculty" => UnitKind::Faculty,
            "cycle" => UnitKind::Cycle,
            "department" => UnitKind::Department,
            "level" => UnitKind::Level,
            "degree" => UnitKind::Degree,
            "class" => UnitKind::Class,
            "semester" => UnitKind::Semester,
            _ => UnitKind::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for UnitKind {
    fn from(raw: String) -> Self {
        UnitKind::from(raw.as_str())
    }
}

impl From<UnitKind> for String {
    fn from(kind: UnitKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Small annotation shown next to a unit name (member count, status...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(u32),
    Text(String),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Count(n) => write!(f, "{n}"),
            Badge::Text(s) => f.write_str(s),
        }
    }
}

/// A node of the organizational hierarchy.
///
/// `path` lists ancestor ids from the root down to and including `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UnitKind,
    pub path: Vec<String>,
    #[serde(default, rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl Unit {
    /// Create a root unit
    pub fn root(id: impl Into<String>, name: impl Into<String>, kind: UnitKind) -> Self {
        let id = id.into();
        Self {
            path: vec![id.clone()],
            id,
            name: name.into(),
            kind,
            parent_id: None,
            children: Vec::new(),
            badge: None,
        }
    }

    /// Create a unit positioned under `parent`, deriving its path.
    ///
    /// The new unit is not attached; see [`Unit::push_child`] and
    /// [`append_child`].
    pub fn child_of(
        parent: &Unit,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: UnitKind,
    ) -> Self {
        let id = id.into();
        let mut path = parent.path.clone();
        path.push(id.clone());
        Self {
            id,
            name: name.into(),
            kind,
            path,
            parent_id: Some(parent.id.clone()),
            children: Vec::new(),
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Build a child with [`Unit::child_of`], let `build` decorate it, and attach it
    pub fn with_child(
        mut self,
        id: &str,
        name: &str,
        kind: UnitKind,
        build: impl FnOnce(Unit) -> Unit,
    ) -> Self {
        let child = build(Unit::child_of(&self, id, name, kind));
        self.children.push(child);
        self
    }

    /// Attach an already built child; its path must extend ours
    pub fn push_child(&mut self, child: Unit) -> TreeResult<()> {
        check_child_path(self, &child)?;
        self.children.push(child);
        Ok(())
    }

    /// A leaf has no children (absent or empty list)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth from the root; roots are at depth 0
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Find a unit by id in this subtree
    pub fn find(&self, id: &str) -> Option<&Unit> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of units in this subtree, self included
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Unit::subtree_len).sum::<usize>()
    }

    /// Check the path invariant over the whole subtree
    pub fn validate(&self) -> TreeResult<()> {
        let mut seen = HashSet::new();
        validate_subtree(self, &mut seen)
    }
}

fn check_child_path(parent: &Unit, child: &Unit) -> TreeResult<()> {
    let expected_len = parent.path.len() + 1;
    if child.path.len() != expected_len || !child.path.starts_with(&parent.path) {
        return Err(TreeError::InvalidPath {
            id: child.id.clone(),
            reason: format!("path must extend parent '{}' path", parent.id),
        });
    }
    if child.path.last() != Some(&child.id) {
        return Err(TreeError::InvalidPath {
            id: child.id.clone(),
            reason: "last path element must be the unit id".to_string(),
        });
    }
    if child.parent_id.as_deref().is_some_and(|p| p != parent.id) {
        return Err(TreeError::InvalidPath {
            id: child.id.clone(),
            reason: format!("parentId does not match '{}'", parent.id),
        });
    }
    Ok(())
}

fn validate_subtree(unit: &Unit, seen: &mut HashSet<String>) -> TreeResult<()> {
    if !seen.insert(unit.id.clone()) {
        return Err(TreeError::DuplicateId(unit.id.clone()));
    }
    if unit.path.last() != Some(&unit.id) {
        return Err(TreeError::InvalidPath {
            id: unit.id.clone(),
            reason: "last path element must be the unit id".to_string(),
        });
    }
    for child in &unit.children {
        check_child_path(unit, child)?;
        validate_subtree(child, seen)?;
    }
    Ok(())
}

// ========================
// Forest helpers
// ========================

/// Validate a whole forest: roots have a single-element path, every child
/// path extends its parent, ids are unique across trees.
pub fn validate_forest(forest: &[Unit]) -> TreeResult<()> {
    let mut seen = HashSet::new();
    for root in forest {
        if root.path.len() != 1 {
            return Err(TreeError::InvalidPath {
                id: root.id.clone(),
                reason: "root path must contain only the root id".to_string(),
            });
        }
        validate_subtree(root, &mut seen)?;
    }
    Ok(())
}

/// Find a unit anywhere in a forest
pub fn find_in_forest<'a>(forest: &'a [Unit], id: &str) -> Option<&'a Unit> {
    forest.iter().find_map(|root| root.find(id))
}

/// Append `child` under `parent_id` by rebuilding the forest.
///
/// Every node is copied; fine for the small trees of the dashboards. Use
/// [`crate::arena::UnitArena`] when mutations need to stay O(depth).
pub fn append_child(forest: &[Unit], parent_id: &str, child: Unit) -> TreeResult<Vec<Unit>> {
    let parent = find_in_forest(forest, parent_id)
        .ok_or_else(|| TreeError::UnitNotFound(parent_id.to_string()))?;
    if find_in_forest(forest, &child.id).is_some() {
        return Err(TreeError::DuplicateId(child.id));
    }
    check_child_path(parent, &child)?;

    let mut child = Some(child);
    Ok(forest
        .iter()
        .map(|root| rebuild_with_child(root, parent_id, &mut child))
        .collect())
}

fn rebuild_with_child(unit: &Unit, parent_id: &str, child: &mut Option<Unit>) -> Unit {
    let mut children: Vec<Unit> = unit
        .children
        .iter()
        .map(|c| rebuild_with_child(c, parent_id, child))
        .collect();
    if unit.id == parent_id {
        if let Some(new_child) = child.take() {
            children.push(new_child);
        }
    }
    Unit {
        children,
        ..unit.clone_shallow()
    }
}

impl Unit {
    fn clone_shallow(&self) -> Unit {
        Unit {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            path: self.path.clone(),
            parent_id: self.parent_id.clone(),
            children: Vec::new(),
            badge: self.badge.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> Unit {
        Unit::root("u1", "North University", UnitKind::University).with_child(
            "f1",
            "Sciences",
            UnitKind::Faculty,
            |f| f.with_child("d1", "Physics", UnitKind::Department, |d| d),
        )
    }

    #[test]
    fn test_child_path_extends_parent() {
        let root = campus();
        let faculty = root.find("f1").unwrap();
        let dept = Unit::child_of(faculty, "d2", "Chemistry", UnitKind::Department);
        assert_eq!(dept.path, vec!["u1", "f1", "d2"]);
        assert_eq!(dept.parent_id.as_deref(), Some("f1"));
        assert_eq!(dept.depth(), 2);
    }

    #[test]
    fn test_kind_round_trips_unknown_strings() {
        let kind: UnitKind = serde_json::from_str("\"annex\"").unwrap();
        assert_eq!(kind, UnitKind::Other("annex".to_string()));
        assert_eq!(kind.icon(), "📁");
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"annex\"");
        assert_eq!(UnitKind::from("Faculty"), UnitKind::Faculty);
    }

    #[test]
    fn test_deserialize_source_field_names() {
        let json = r#"{
            "id": "c1", "name": "L1-A", "type": "class",
            "path": ["u1", "c1"], "parentId": "u1", "badge": 32
        }"#;
        let unit: Unit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.kind, UnitKind::Class);
        assert_eq!(unit.badge, Some(Badge::Count(32)));
        assert!(unit.is_leaf());
    }

    #[test]
    fn test_push_child_rejects_foreign_path() {
        let mut root = campus();
        let stray = Unit::root("x", "Stray", UnitKind::Class);
        assert!(matches!(
            root.push_child(stray),
            Err(TreeError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_append_child_rebuilds_forest() {
        let forest = vec![campus()];
        let parent = find_in_forest(&forest, "d1").unwrap().clone();
        let class = Unit::child_of(&parent, "c9", "Group 9", UnitKind::Class);

        let updated = append_child(&forest, "d1", class).unwrap();
        let added = find_in_forest(&updated, "c9").unwrap();
        assert_eq!(added.path, vec!["u1", "f1", "d1", "c9"]);
        assert_eq!(updated[0].subtree_len(), 4);
        // the input forest is untouched
        assert!(find_in_forest(&forest, "c9").is_none());
    }

    #[test]
    fn test_append_child_errors() {
        let forest = vec![campus()];
        let parent = find_in_forest(&forest, "f1").unwrap().clone();
        let dup = Unit::child_of(&parent, "d1", "Again", UnitKind::Department);
        assert!(matches!(
            append_child(&forest, "f1", dup),
            Err(TreeError::DuplicateId(_))
        ));

        let orphan = Unit::child_of(&parent, "d7", "Orphan", UnitKind::Department);
        assert!(matches!(
            append_child(&forest, "missing", orphan),
            Err(TreeError::UnitNotFound(_))
        ));
    }

    #[test]
    fn test_validate_forest_detects_duplicates_across_trees() {
        let forest = vec![campus(), Unit::root("u1", "Clone", UnitKind::University)];
        assert!(matches!(
            validate_forest(&forest),
            Err(TreeError::DuplicateId(id)) if id == "u1"
        ));
        assert!(validate_forest(&[campus()]).is_ok());
    }
}
