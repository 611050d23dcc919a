//! Navigator interaction state: expansion, hover, selection and the click protocol

use std::collections::HashSet;

use crate::add_unit::AddUnitRequest;
use crate::arena::ArenaNode;
use crate::permissions::PermissionEvaluator;
use crate::selection::SelectedUnit;

/// Set of expanded unit ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, unit_id: &str) -> bool {
        self.expanded.contains(unit_id)
    }

    /// Flip one unit; returns the new state
    pub fn toggle(&mut self, unit_id: &str) -> bool {
        if self.expanded.remove(unit_id) {
            false
        } else {
            self.expanded.insert(unit_id.to_string());
            true
        }
    }

    pub fn expand(&mut self, unit_id: &str) {
        self.expanded.insert(unit_id.to_string());
    }

    pub fn collapse(&mut self, unit_id: &str) {
        self.expanded.remove(unit_id);
    }

    /// Expand every ancestor so the unit at the end of `path` is on screen
    pub fn reveal(&mut self, path: &[String]) {
        if let Some((_, ancestors)) = path.split_last() {
            self.expanded.extend(ancestors.iter().cloned());
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

/// Visual state of a row. Selection wins over hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Normal,
    Hovered,
    Selected,
}

impl RowState {
    pub fn resolve(selected: bool, hovered: bool) -> Self {
        match (selected, hovered) {
            (true, _) => RowState::Selected,
            (false, true) => RowState::Hovered,
            (false, false) => RowState::Normal,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RowState::Normal => "tree-item",
            RowState::Hovered => "tree-item hovered",
            RowState::Selected => "tree-item selected",
        }
    }
}

/// What a click on the navigator asks the rest of the page to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorEvent {
    Selected(SelectedUnit),
    ExpansionToggled { unit_id: String, expanded: bool },
    AddChildRequested(AddUnitRequest),
}

/// Interaction state of the navigator panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    pub expansion: ExpansionState,
    selected_id: Option<String>,
    hovered_id: Option<String>,
    icon_only: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn is_icon_only(&self) -> bool {
        self.icon_only
    }

    /// Switch between full rows and the collapsed icon-only rendering
    pub fn set_icon_only(&mut self, icon_only: bool) {
        self.icon_only = icon_only;
    }

    pub fn hover(&mut self, unit_id: Option<&str>) {
        self.hovered_id = unit_id.map(str::to_string);
    }

    pub fn row_state(&self, unit_id: &str) -> RowState {
        RowState::resolve(
            self.selected_id.as_deref() == Some(unit_id),
            self.hovered_id.as_deref() == Some(unit_id),
        )
    }

    /// Row (or icon, when collapsed) click: select the unit
    pub fn click_row(&mut self, unit: &ArenaNode) -> NavigatorEvent {
        self.selected_id = Some(unit.id.clone());
        NavigatorEvent::Selected(SelectedUnit::from(unit))
    }

    /// Chevron click: toggle expansion, selection untouched.
    /// Chevrons are not rendered in icon-only mode.
    pub fn click_chevron(&mut self, unit_id: &str) -> Option<NavigatorEvent> {
        if self.icon_only {
            return None;
        }
        let expanded = self.expansion.toggle(unit_id);
        Some(NavigatorEvent::ExpansionToggled {
            unit_id: unit_id.to_string(),
            expanded,
        })
    }

    /// Add click: request a new child, no selection or expansion change.
    /// Denied sessions get no event.
    pub fn click_add<P>(&self, parent_id: &str, perms: &P) -> Option<NavigatorEvent>
    where
        P: PermissionEvaluator + ?Sized,
    {
        if self.icon_only || !perms.can_add_child(parent_id) {
            return None;
        }
        Some(NavigatorEvent::AddChildRequested(AddUnitRequest::new(
            parent_id,
        )))
    }

    /// Mark a unit selected from outside the tree and expand its ancestors
    pub fn reveal(&mut self, selected: &SelectedUnit) {
        self.selected_id = Some(selected.id.clone());
        self.expansion.reveal(&selected.path);
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }
}
