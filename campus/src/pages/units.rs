use dioxus::prelude::*;
use unit_tree::filter::is_unit_visible;

use crate::components::layout::UnitPage;
use crate::hooks::{use_unit_context, SessionState, UnitTreeState};

/// Hierarchical page: details of the unit selected in the navigator
#[component]
pub fn Units() -> Element {
    let mut unit_ctx = use_unit_context();
    let tree = use_context::<UnitTreeState>();
    let session_state = use_context::<SessionState>();

    // Leaving the page drops the selection
    use_drop(move || unit_ctx.clear());

    // So does switching to a session that cannot reach the selected unit
    use_effect(move || {
        let hidden = {
            let arena = tree.arena.read();
            let session = session_state.current.read();
            let store = unit_ctx.store.read();
            store
                .selected_id()
                .is_some_and(|id| !is_unit_visible(&arena, &*session, id))
        };
        if hidden {
            unit_ctx.clear();
        }
    });

    match unit_ctx.selected() {
        Some(unit) => rsx! {
            UnitPage { key: "{unit.id}", unit }
        },
        None => rsx! {
            div { class: "empty-state welcome",
                h1 { "Units" }
                p { "Pick a unit in the navigator to see its details." }
            }
        },
    }
}
