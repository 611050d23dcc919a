//! The currently selected unit
//!
//! One writer mutates the store through `&mut`; any number of readers hold a
//! [`SelectionWatcher`] and poll for changes by revision.

use serde::{Deserialize, Serialize};

use crate::arena::ArenaNode;
use crate::unit::{Unit, UnitKind};

/// Snapshot of the selected unit handed to detail panels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedUnit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: UnitKind,
    pub name: String,
    pub path: Vec<String>,
}

impl From<&Unit> for SelectedUnit {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            kind: unit.kind.clone(),
            name: unit.name.clone(),
            path: unit.path.clone(),
        }
    }
}

impl From<&ArenaNode> for SelectedUnit {
    fn from(node: &ArenaNode) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind.clone(),
            name: node.name.clone(),
            path: node.path.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    current: Option<SelectedUnit>,
    revision: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection. Re-selecting the same unit is not a change.
    pub fn select(&mut self, unit: SelectedUnit) -> bool {
        if self.current.as_ref() == Some(&unit) {
            return false;
        }
        self.current = Some(unit);
        self.revision += 1;
        true
    }

    /// Empty the slot, returning what was selected
    pub fn clear(&mut self) -> Option<SelectedUnit> {
        let previous = self.current.take();
        if previous.is_some() {
            self.revision += 1;
        }
        previous
    }

    pub fn current(&self) -> Option<&SelectedUnit> {
        self.current.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.current.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Bumped on every effective change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// A watcher that has already seen the current state
    pub fn watch(&self) -> SelectionWatcher {
        SelectionWatcher {
            seen: self.revision,
        }
    }
}

/// Reader-side change detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionWatcher {
    seen: u64,
}

impl SelectionWatcher {
    /// `Some(current)` if the store changed since the last poll
    pub fn poll<'a>(&mut self, store: &'a SelectionStore) -> Option<Option<&'a SelectedUnit>> {
        if store.revision() == self.seen {
            return None;
        }
        self.seen = store.revision();
        Some(store.current())
    }
}
