use dioxus::logger::tracing;
use dioxus::prelude::*;
use unit_tree::selection::{SelectedUnit, SelectionStore};

/// Shared selected-unit state. The navigator writes it, pages read it.
#[derive(Clone, Copy)]
pub struct UnitContext {
    pub store: Signal<SelectionStore>,
}

/// Create the store and provide it to every descendant
pub fn use_unit_context_provider() -> UnitContext {
    let store = use_signal(SelectionStore::new);
    use_context_provider(|| UnitContext { store })
}

pub fn use_unit_context() -> UnitContext {
    use_context::<UnitContext>()
}

impl UnitContext {
    pub fn select(&mut self, unit: SelectedUnit) {
        // Re-selecting the current unit is not a change; don't wake readers
        if self.store.peek().selected_id() == Some(unit.id.as_str()) {
            return;
        }
        tracing::debug!("selected {} ({})", unit.name, unit.id);
        self.store.write().select(unit);
    }

    pub fn clear(&mut self) {
        if self.store.peek().is_empty() {
            return;
        }
        if let Some(previous) = self.store.write().clear() {
            tracing::debug!("cleared selection of {}", previous.id);
        }
    }

    pub fn selected(&self) -> Option<SelectedUnit> {
        self.store.read().current().cloned()
    }
}
