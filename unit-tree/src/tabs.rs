//! Detail tabs offered for a unit

use serde::{Deserialize, Serialize};

use crate::permissions::{Capability, PermissionEvaluator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitTab {
    // parent units
    ChildUnits,
    Roles,
    Attributions,
    // leaf units
    Members,
    Courses,
    Schedule,
    Exams,
    Attendance,
    Resources,
}

impl UnitTab {
    pub const PARENT_TABS: [UnitTab; 3] = [UnitTab::ChildUnits, UnitTab::Roles, UnitTab::Attributions];

    pub const LEAF_TABS: [UnitTab; 6] = [
        UnitTab::Members,
        UnitTab::Courses,
        UnitTab::Schedule,
        UnitTab::Exams,
        UnitTab::Attendance,
        UnitTab::Resources,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UnitTab::ChildUnits => "Units",
            UnitTab::Roles => "Roles",
            UnitTab::Attributions => "Attributions",
            UnitTab::Members => "Members",
            UnitTab::Courses => "Courses",
            UnitTab::Schedule => "Schedule",
            UnitTab::Exams => "Exams",
            UnitTab::Attendance => "Attendance",
            UnitTab::Resources => "Resources",
        }
    }

    /// Whether the session may open this tab on `unit_id`
    pub fn is_allowed<P>(self, unit_id: &str, perms: &P) -> bool
    where
        P: PermissionEvaluator + ?Sized,
    {
        match self {
            UnitTab::ChildUnits => perms.can_view_unit_self(unit_id),
            UnitTab::Roles => RecordScope::roles(unit_id, perms) != RecordScope::Hidden,
            UnitTab::Attributions => RecordScope::attributions(unit_id, perms) != RecordScope::Hidden,
            UnitTab::Members => perms.can(Capability::ViewMembers, unit_id),
            UnitTab::Courses => perms.can(Capability::ViewCourses, unit_id),
            UnitTab::Schedule => perms.can(Capability::ViewSchedule, unit_id),
            UnitTab::Exams => perms.can(Capability::ViewExams, unit_id),
            UnitTab::Attendance => perms.can(Capability::ViewAttendance, unit_id),
            UnitTab::Resources => perms.can(Capability::ViewResources, unit_id),
        }
    }
}

/// Tabs for a unit: child-management tabs for parents, content tabs for
/// leaves, minus whatever the session may not open
pub fn tabs_for<P>(unit_id: &str, is_leaf: bool, perms: &P) -> Vec<UnitTab>
where
    P: PermissionEvaluator + ?Sized,
{
    let candidates: &[UnitTab] = if is_leaf {
        &UnitTab::LEAF_TABS
    } else {
        &UnitTab::PARENT_TABS
    };
    candidates
        .iter()
        .copied()
        .filter(|tab| tab.is_allowed(unit_id, perms))
        .collect()
}

/// How much of a record list the session sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    All,
    Own,
    Hidden,
}

impl RecordScope {
    pub fn roles<P>(unit_id: &str, perms: &P) -> Self
    where
        P: PermissionEvaluator + ?Sized,
    {
        if perms.can_view_all_roles(unit_id) {
            RecordScope::All
        } else if perms.can_view_own_roles(unit_id) {
            RecordScope::Own
        } else {
            RecordScope::Hidden
        }
    }

    pub fn attributions<P>(unit_id: &str, perms: &P) -> Self
    where
        P: PermissionEvaluator + ?Sized,
    {
        if perms.can_view_all_attributions(unit_id) {
            RecordScope::All
        } else if perms.can_view_own_attributions(unit_id) {
            RecordScope::Own
        } else {
            RecordScope::Hidden
        }
    }

    /// Keep the records this scope shows; `owner` extracts a record's owner
    pub fn apply<'a, T>(self, records: &'a [T], user_id: &str, owner: impl Fn(&T) -> &str) -> Vec<&'a T> {
        match self {
            RecordScope::All => records.iter().collect(),
            RecordScope::Own => records.iter().filter(|r| owner(*r) == user_id).collect(),
            RecordScope::Hidden => Vec::new(),
        }
    }
}
