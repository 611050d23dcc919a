//! "Add unit" request/response flow

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::arena::{ArenaNode, NewUnit, UnitArena};
use crate::error::{TreeError, TreeResult};
use crate::unit::{Badge, UnitKind};

/// Raised by the navigator when the user asks for a new child under `parent_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddUnitRequest {
    pub parent_id: String,
}

impl AddUnitRequest {
    pub fn new(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
        }
    }
}

/// Raw fields collected by whatever dialog handles an [`AddUnitRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUnitForm {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub badge: String,
}

impl NewUnitForm {
    /// Empty form with the kind suggested for children of `parent_kind`
    pub fn for_parent(parent_kind: &UnitKind) -> Self {
        Self {
            kind: parent_kind.suggested_child_kind().as_str().to_string(),
            ..Self::default()
        }
    }

    /// Trim and check the fields. Only the name is mandatory; a blank kind
    /// defaults to a class, a numeric badge becomes a count.
    pub fn validate(&self, id: impl Into<String>) -> TreeResult<NewUnit> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        let kind = if self.kind.trim().is_empty() {
            UnitKind::Class
        } else {
            UnitKind::from(self.kind.trim())
        };
        let mut unit = NewUnit::new(id, name, kind);
        let badge = self.badge.trim();
        if !badge.is_empty() {
            unit.badge = Some(match badge.parse::<u32>() {
                Ok(n) => Badge::Count(n),
                Err(_) => Badge::Text(badge.to_string()),
            });
        }
        Ok(unit)
    }
}

/// Fresh unit id, prefixed by its kind for readability
pub fn generate_unit_id(kind: &UnitKind) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.as_str().replace(' ', "_"), &suffix[..8])
}

impl UnitArena {
    /// Validate `form` and append the resulting unit under the requested parent
    pub fn apply_add_request(
        &mut self,
        request: &AddUnitRequest,
        form: &NewUnitForm,
    ) -> TreeResult<&ArenaNode> {
        if !self.contains(&request.parent_id) {
            return Err(TreeError::UnitNotFound(request.parent_id.clone()));
        }
        // the id follows the kind validation settled on
        let mut unit = form.validate(String::new())?;
        unit.id = generate_unit_id(&unit.kind);
        self.insert_child(&request.parent_id, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> UnitArena {
        let mut arena = UnitArena::new();
        arena
            .insert_root(NewUnit::new("u1", "North University", UnitKind::University))
            .unwrap();
        arena
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let form = NewUnitForm {
            name: "   ".to_string(),
            ..NewUnitForm::default()
        };
        assert!(matches!(form.validate("x"), Err(TreeError::EmptyName)));
    }

    #[test]
    fn test_form_parses_kind_and_badge() {
        let form = NewUnitForm {
            name: " Sciences ".to_string(),
            kind: "faculty".to_string(),
            badge: "12".to_string(),
        };
        let unit = form.validate("f1").unwrap();
        assert_eq!(unit.name, "Sciences");
        assert_eq!(unit.kind, UnitKind::Faculty);
        assert_eq!(unit.badge, Some(Badge::Count(12)));
    }

    #[test]
    fn test_form_suggests_child_kind() {
        let form = NewUnitForm::for_parent(&UnitKind::University);
        assert_eq!(form.kind, "faculty");
    }

    #[test]
    fn test_apply_add_request_appends_under_parent() {
        let mut arena = arena();
        let form = NewUnitForm {
            name: "Sciences".to_string(),
            kind: "faculty".to_string(),
            badge: String::new(),
        };
        let node = arena
            .apply_add_request(&AddUnitRequest::new("u1"), &form)
            .unwrap()
            .clone();
        assert!(node.id.starts_with("faculty-"));
        assert_eq!(node.path, vec!["u1".to_string(), node.id.clone()]);
        assert_eq!(arena.children("u1").count(), 1);
    }

    #[test]
    fn test_blank_kind_gets_class_id_prefix() {
        let mut arena = arena();
        let form = NewUnitForm {
            name: "Group C".to_string(),
            kind: "  ".to_string(),
            badge: String::new(),
        };
        let node = arena
            .apply_add_request(&AddUnitRequest::new("u1"), &form)
            .unwrap();
        assert_eq!(node.kind, UnitKind::Class);
        assert!(node.id.starts_with("class-"), "{}", node.id);
        assert_eq!(node.id.len(), "class-".len() + 8);
    }

    #[test]
    fn test_apply_add_request_to_unknown_parent_is_an_error() {
        let mut arena = arena();
        let form = NewUnitForm {
            name: "Lost".to_string(),
            ..NewUnitForm::default()
        };
        assert!(matches!(
            arena.apply_add_request(&AddUnitRequest::new("nope"), &form),
            Err(TreeError::UnitNotFound(_))
        ));
    }
}
