//! Name search over the unit arena

use std::collections::HashSet;

use crate::arena::{ArenaNode, UnitArena};
use crate::permissions::PermissionEvaluator;

/// Result of a name query.
///
/// `keep` holds the matches, their ancestors and their descendants; `reveal`
/// holds the ancestors, which the navigator shows expanded while searching.
/// Only units the session can actually see take part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMatches {
    query: String,
    matched: HashSet<String>,
    keep: HashSet<String>,
    reveal: HashSet<String>,
}

impl SearchMatches {
    /// Case-insensitive substring match on the names of the units `perms`
    /// lets the session see. A blank query yields `None`, meaning "no search
    /// active".
    pub fn find<P>(arena: &UnitArena, perms: &P, query: &str) -> Option<Self>
    where
        P: PermissionEvaluator + ?Sized,
    {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let mut result = SearchMatches {
            query: query.trim().to_string(),
            ..Self::default()
        };
        let visible = visible_units(arena, perms);
        for node in &visible {
            if !node.name.to_lowercase().contains(&needle) {
                continue;
            }
            result.matched.insert(node.id.clone());
            let ancestors = &node.path[..node.path.len().saturating_sub(1)];
            result.keep.extend(ancestors.iter().cloned());
            result.reveal.extend(ancestors.iter().cloned());
        }

        // descendants of a match stay reachable by expanding it
        let visible_ids: HashSet<&str> = visible.iter().map(|n| n.id.as_str()).collect();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = result.matched.iter().map(String::as_str).collect();
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            stack.extend(
                arena
                    .children(id)
                    .map(|c| c.id.as_str())
                    .filter(|child| visible_ids.contains(child)),
            );
        }
        result.keep.extend(visited.into_iter().map(str::to_string));

        log::debug!(
            "search '{}' matched {} units",
            result.query,
            result.matched.len()
        );
        Some(result)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_match(&self, unit_id: &str) -> bool {
        self.matched.contains(unit_id)
    }

    pub fn keeps(&self, unit_id: &str) -> bool {
        self.keep.contains(unit_id)
    }

    pub fn reveals(&self, unit_id: &str) -> bool {
        self.reveal.contains(unit_id)
    }

    pub fn match_count(&self) -> usize {
        self.matched.len()
    }
}

/// Every unit the navigator could show with everything expanded, depth first
fn visible_units<'a, P>(arena: &'a UnitArena, perms: &P) -> Vec<&'a ArenaNode>
where
    P: PermissionEvaluator + ?Sized,
{
    let mut out = Vec::new();
    let mut stack: Vec<&ArenaNode> = arena
        .roots()
        .filter(|root| perms.can_view_unit_self(&root.id))
        .collect();
    stack.reverse();
    while let Some(node) = stack.pop() {
        let visibility = perms.visibility(&node.id);
        let mut children: Vec<&ArenaNode> = arena
            .children(&node.id)
            .filter(|child| visibility.admits(perms.visibility(&child.id)))
            .collect();
        children.reverse();
        stack.extend(children);
        out.push(node);
    }
    out
}
