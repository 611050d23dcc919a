//! Unit-scoped capability checks for the current session

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// An action or resource a session may be granted on a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewUnit,
    ViewChildren,
    CreateUnit,
    ViewAllRoles,
    ViewOwnRoles,
    CreateRole,
    ChangeRole,
    DeleteRole,
    ViewAllAttributions,
    ViewOwnAttributions,
    CreateAttribution,
    ChangeAttribution,
    DeleteAttribution,
    ViewMembers,
    ViewCourses,
    ViewSchedule,
    ViewExams,
    ViewAttendance,
    ViewResources,
}

/// Two-tier visibility of one unit.
///
/// A root is shown when `self_visible`. A child of a shown parent is shown
/// when its own `self_visible` holds OR the parent has `children_visible`.
/// A unit that is not shown hides its whole subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitVisibility {
    pub self_visible: bool,
    pub children_visible: bool,
}

impl UnitVisibility {
    pub const HIDDEN: UnitVisibility = UnitVisibility {
        self_visible: false,
        children_visible: false,
    };

    pub const FULL: UnitVisibility = UnitVisibility {
        self_visible: true,
        children_visible: true,
    };

    /// Whether a child with visibility `child` is shown under `self`
    pub fn admits(&self, child: UnitVisibility) -> bool {
        child.self_visible || self.children_visible
    }
}

/// Query interface over the current session.
///
/// Only [`PermissionEvaluator::can`] is required; every named check is a
/// provided method over it. Anything unknown must answer `false`.
pub trait PermissionEvaluator {
    fn can(&self, capability: Capability, unit_id: &str) -> bool;

    fn visibility(&self, unit_id: &str) -> UnitVisibility {
        UnitVisibility {
            self_visible: self.can_view_unit_self(unit_id),
            children_visible: self.can_view_children(unit_id),
        }
    }

    fn can_view_unit_self(&self, unit_id: &str) -> bool {
        self.can(Capability::ViewUnit, unit_id)
    }

    fn can_view_children(&self, unit_id: &str) -> bool {
        self.can(Capability::ViewChildren, unit_id)
    }

    fn can_add_child(&self, unit_id: &str) -> bool {
        self.can(Capability::CreateUnit, unit_id)
    }

    fn can_view_all_roles(&self, unit_id: &str) -> bool {
        self.can(Capability::ViewAllRoles, unit_id)
    }

    fn can_view_own_roles(&self, unit_id: &str) -> bool {
        self.can(Capability::ViewOwnRoles, unit_id)
    }

    fn can_create_role(&self, unit_id: &str) -> bool {
        self.can(Capability::CreateRole, unit_id)
    }

    fn can_change_role(&self, unit_id: &str) -> bool {
        self.can(Capability::ChangeRole, unit_id)
    }

    fn can_delete_role(&self, unit_id: &str) -> bool {
        self.can(Capability::DeleteRole, unit_id)
    }

    fn can_view_all_attributions(&self, unit_id: &str) -> bool {
        self.can(Capability::ViewAllAttributions, unit_id)
    }

    fn can_view_own_attributions(&self, unit_id: &str) -> bool {
        self.can(Capability::ViewOwnAttributions, unit_id)
    }

    fn can_create_attribution(&self, unit_id: &str) -> bool {
        self.can(Capability::CreateAttribution, unit_id)
    }

    fn can_change_attribution(&self, unit_id: &str) -> bool {
        self.can(Capability::ChangeAttribution, unit_id)
    }

    fn can_delete_attribution(&self, unit_id: &str) -> bool {
        self.can(Capability::DeleteAttribution, unit_id)
    }

    /// Root-level convenience: keep the units that may be shown themselves
    fn filter_visible_units<'a>(&self, units: &'a [Unit]) -> Vec<&'a Unit> {
        units
            .iter()
            .filter(|u| self.can_view_unit_self(&u.id))
            .collect()
    }
}

/// Closures make ad hoc policies, mostly in tests
impl<F> PermissionEvaluator for F
where
    F: Fn(Capability, &str) -> bool,
{
    fn can(&self, capability: Capability, unit_id: &str) -> bool {
        self(capability, unit_id)
    }
}

/// Grant table of a session. Anything not granted is denied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPermissions {
    /// Grants everything on every unit
    #[serde(default)]
    pub superuser: bool,
    /// Capabilities granted on every unit
    #[serde(default)]
    pub global: HashSet<Capability>,
    /// Capabilities granted per unit id
    #[serde(default)]
    pub units: HashMap<String, HashSet<Capability>>,
}

impl SessionPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn superuser() -> Self {
        Self {
            superuser: true,
            ..Self::default()
        }
    }

    pub fn grant(mut self, unit_id: &str, capability: Capability) -> Self {
        self.units
            .entry(unit_id.to_string())
            .or_default()
            .insert(capability);
        self
    }

    pub fn grant_all(mut self, unit_id: &str, capabilities: &[Capability]) -> Self {
        self.units
            .entry(unit_id.to_string())
            .or_default()
            .extend(capabilities.iter().copied());
        self
    }

    pub fn grant_global(mut self, capability: Capability) -> Self {
        self.global.insert(capability);
        self
    }
}

impl PermissionEvaluator for SessionPermissions {
    fn can(&self, capability: Capability, unit_id: &str) -> bool {
        self.superuser
            || self.global.contains(&capability)
            || self
                .units
                .get(unit_id)
                .is_some_and(|caps| caps.contains(&capability))
    }
}

/// Dashboard flavour of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Admin,
    Teacher,
    Student,
}

impl SessionRole {
    pub fn label(&self) -> &'static str {
        match self {
            SessionRole::Admin => "Administrator",
            SessionRole::Teacher => "Teacher",
            SessionRole::Student => "Student",
        }
    }
}

/// The current user and what they may do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub role: SessionRole,
    #[serde(default)]
    pub permissions: SessionPermissions,
}

impl PermissionEvaluator for Session {
    fn can(&self, capability: Capability, unit_id: &str) -> bool {
        self.permissions.can(capability, unit_id)
    }
}
