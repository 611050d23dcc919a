//! Unit Tree - permission-gated organizational hierarchy for the campus dashboards
//!
//! This library holds everything the unit navigator decides without a DOM:
//! - Units (university → faculty → department → class...) with path invariants
//! - Flat arena storage with O(depth) appends
//! - Unit-scoped capability checks and the visibility rules built on them
//! - Expansion, hover and selection state of the navigator
//! - Width management of the resizable navigator panel
//!
//! ## Example
//! ```rust
//! use unit_tree::prelude::*;
//!
//! let mut arena = UnitArena::new();
//! arena.insert_root(NewUnit::new("u1", "Northfield University", UnitKind::University)).unwrap();
//! arena.insert_child("u1", NewUnit::new("f1", "Sciences", UnitKind::Faculty)).unwrap();
//! arena.insert_child("f1", NewUnit::new("d1", "Physics", UnitKind::Department)).unwrap();
//!
//! // The session sees the university and everything directly under it
//! let perms = SessionPermissions::new()
//!     .grant_all("u1", &[Capability::ViewUnit, Capability::ViewChildren]);
//!
//! let mut expansion = ExpansionState::new();
//! expansion.expand("u1");
//!
//! let rows = TreeView::new(&arena, &perms, &expansion).rows();
//! assert_eq!(rows.len(), 2);
//!
//! let mut panel = ResizeController::default();
//! panel.begin_drag();
//! panel.drag_to(233.0);
//! assert_eq!(panel.end_drag(), ReleaseOutcome::Snapped(220.0));
//! ```

pub mod add_unit;
pub mod arena;
pub mod demo;
pub mod error;
pub mod filter;
pub mod measure;
pub mod navigator;
pub mod permissions;
pub mod resize;
pub mod search;
pub mod selection;
pub mod tabs;
pub mod unit;

// Re-export common types
pub mod prelude {
    pub use crate::add_unit::{generate_unit_id, AddUnitRequest, NewUnitForm};
    pub use crate::arena::{ArenaNode, NewUnit, UnitArena};
    pub use crate::error::{TreeError, TreeResult};
    pub use crate::filter::{
        is_child_visible, is_unit_visible, visible_children, visible_forest, TreeView, VisibleRow,
    };
    pub use crate::measure::RowMetrics;
    pub use crate::navigator::{ExpansionState, Navigator, NavigatorEvent, RowState};
    pub use crate::permissions::{
        Capability, PermissionEvaluator, Session, SessionPermissions, SessionRole, UnitVisibility,
    };
    pub use crate::resize::{PanelConfig, ReleaseOutcome, ResizeController};
    pub use crate::search::SearchMatches;
    pub use crate::selection::{SelectedUnit, SelectionStore, SelectionWatcher};
    pub use crate::tabs::{tabs_for, RecordScope, UnitTab};
    pub use crate::unit::{append_child, find_in_forest, Badge, Unit, UnitKind};
}
