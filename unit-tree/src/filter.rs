//! Permission-driven pruning of the unit hierarchy
//!
//! Two rules combine:
//! - a unit that is not shown hides its whole subtree, whatever the
//!   permissions of its descendants;
//! - a child of a shown parent is shown if it may be viewed itself OR the
//!   parent grants a blanket view of its children.
//!
//! The blanket grant reaches one level only: grandchildren are judged against
//! the child's own `children_visible`.

use crate::arena::{ArenaNode, UnitArena};
use crate::navigator::ExpansionState;
use crate::permissions::PermissionEvaluator;
use crate::search::SearchMatches;
use crate::unit::{Badge, Unit, UnitKind};

/// Whether `child_id` is shown under an already shown `parent_id`
pub fn is_child_visible<P>(perms: &P, parent_id: &str, child_id: &str) -> bool
where
    P: PermissionEvaluator + ?Sized,
{
    perms
        .visibility(parent_id)
        .admits(perms.visibility(child_id))
}

/// Whether the navigator can reach `unit_id` at all: its root may be viewed
/// and every step down its path is admitted. Unknown ids are not visible.
pub fn is_unit_visible<P>(arena: &UnitArena, perms: &P, unit_id: &str) -> bool
where
    P: PermissionEvaluator + ?Sized,
{
    let Some(node) = arena.get(unit_id) else {
        return false;
    };
    let Some(root) = node.path.first() else {
        return false;
    };
    perms.can_view_unit_self(root)
        && node
            .path
            .windows(2)
            .all(|step| is_child_visible(perms, &step[0], &step[1]))
}

/// Children of a shown parent that are eligible for display, in order
pub fn visible_children<'a, P>(parent: &'a Unit, perms: &P) -> Vec<&'a Unit>
where
    P: PermissionEvaluator + ?Sized,
{
    let parent_visibility = perms.visibility(&parent.id);
    parent
        .children
        .iter()
        .filter(|child| parent_visibility.admits(perms.visibility(&child.id)))
        .collect()
}

/// The forest as the navigator would show it with everything expanded
pub fn visible_forest<P>(forest: &[Unit], perms: &P) -> Vec<Unit>
where
    P: PermissionEvaluator + ?Sized,
{
    perms
        .filter_visible_units(forest)
        .into_iter()
        .map(|root| prune(root, perms))
        .collect()
}

fn prune<P>(unit: &Unit, perms: &P) -> Unit
where
    P: PermissionEvaluator + ?Sized,
{
    Unit {
        children: visible_children(unit, perms)
            .into_iter()
            .map(|child| prune(child, perms))
            .collect(),
        ..Unit::clone(unit)
    }
}

/// One rendered line of the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: String,
    pub name: String,
    pub kind: UnitKind,
    pub badge: Option<Badge>,
    /// Depth in the rendered tree, used for indentation
    pub level: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// Read-only view of the arena through the session's permissions, the
/// expansion state and an optional search.
pub struct TreeView<'a, P: PermissionEvaluator + ?Sized> {
    arena: &'a UnitArena,
    perms: &'a P,
    expansion: &'a ExpansionState,
    search: Option<&'a SearchMatches>,
}

impl<'a, P: PermissionEvaluator + ?Sized> TreeView<'a, P> {
    pub fn new(arena: &'a UnitArena, perms: &'a P, expansion: &'a ExpansionState) -> Self {
        Self {
            arena,
            perms,
            expansion,
            search: None,
        }
    }

    pub fn with_search(mut self, search: Option<&'a SearchMatches>) -> Self {
        self.search = search;
        self
    }

    fn kept(&self, unit_id: &str) -> bool {
        self.search.map_or(true, |s| s.keeps(unit_id))
    }

    /// Roots that may be viewed themselves
    pub fn roots(&self) -> Vec<&'a ArenaNode> {
        self.arena
            .roots()
            .filter(|n| self.perms.can_view_unit_self(&n.id) && self.kept(&n.id))
            .collect()
    }

    /// Eligible children of `parent_id`, assuming the parent itself is shown
    pub fn children(&self, parent_id: &str) -> Vec<&'a ArenaNode> {
        let parent_visibility = self.perms.visibility(parent_id);
        self.arena
            .children(parent_id)
            .filter(|n| parent_visibility.admits(self.perms.visibility(&n.id)) && self.kept(&n.id))
            .collect()
    }

    pub fn has_children(&self, parent_id: &str) -> bool {
        !self.children(parent_id).is_empty()
    }

    /// Expanded by the user, or opened by the active search
    pub fn is_expanded(&self, unit_id: &str) -> bool {
        self.expansion.is_expanded(unit_id) || self.search.is_some_and(|s| s.reveals(unit_id))
    }

    /// Flatten what is on screen, depth first
    pub fn rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        for root in self.roots() {
            self.push_rows(root, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, node: &ArenaNode, level: usize, rows: &mut Vec<VisibleRow>) {
        let children = self.children(&node.id);
        let expanded = self.is_expanded(&node.id);
        rows.push(VisibleRow {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.clone(),
            badge: node.badge.clone(),
            level,
            has_children: !children.is_empty(),
            expanded,
        });
        if expanded {
            for child in children {
                self.push_rows(child, level + 1, rows);
            }
        }
    }
}
