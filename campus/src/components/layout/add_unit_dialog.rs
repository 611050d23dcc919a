use dioxus::logger::tracing;
use dioxus::prelude::*;
use unit_tree::add_unit::NewUnitForm;
use unit_tree::permissions::PermissionEvaluator;
use unit_tree::unit::UnitKind;

use crate::hooks::{use_unit_context, SessionState, UnitTreeState};

/// Modal form for a new child unit, opened by an add request
#[component]
pub fn AddUnitDialog() -> Element {
    let mut tree = use_context::<UnitTreeState>();
    let session_state = use_context::<SessionState>();
    let mut unit_ctx = use_unit_context();

    let mut form = use_signal(NewUnitForm::default);
    let mut error = use_signal(|| None::<String>);

    // Fresh form, pre-filled with the kind that usually sits under the parent
    use_effect(move || {
        let Some(request) = tree.add_request.read().clone() else {
            return;
        };
        let parent_kind = tree
            .arena
            .peek()
            .get(&request.parent_id)
            .map(|parent| parent.kind.clone());
        form.set(match parent_kind {
            Some(kind) => NewUnitForm::for_parent(&kind),
            None => NewUnitForm::default(),
        });
        error.set(None);
    });

    let Some(request) = tree.add_request.read().clone() else {
        return rsx! {};
    };
    let parent_name = tree
        .arena
        .read()
        .get(&request.parent_id)
        .map(|parent| parent.name.clone())
        .unwrap_or_else(|| request.parent_id.clone());
    let kinds: Vec<(String, String)> = UnitKind::KNOWN
        .iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .collect();
    let current = form.read().clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| tree.close_add_dialog(),

            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { "New unit under {parent_name}" }
                    button {
                        class: "btn-close",
                        onclick: move |_| tree.close_add_dialog(),
                        "×"
                    }
                }

                div { class: "modal-body",
                    label { "Name"
                        input {
                            r#type: "text",
                            placeholder: "e.g. Physics L1-C",
                            value: "{current.name}",
                            autofocus: true,
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label { "Type"
                        select {
                            value: "{current.kind}",
                            onchange: move |evt| form.write().kind = evt.value(),
                            for (value, label) in kinds {
                                option {
                                    value: "{value}",
                                    selected: value == current.kind,
                                    "{label}"
                                }
                            }
                        }
                    }
                    label { "Badge"
                        input {
                            r#type: "text",
                            placeholder: "optional, e.g. 30 or new",
                            value: "{current.badge}",
                            oninput: move |evt| form.write().badge = evt.value(),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "error", "{message}" }
                    }
                }

                div { class: "modal-footer",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| tree.close_add_dialog(),
                        "Cancel"
                    }
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            // The session may have changed since the dialog opened
                            if !session_state.current.read().can_add_child(&request.parent_id) {
                                tracing::warn!("add under {} no longer allowed", request.parent_id);
                                tree.close_add_dialog();
                                return;
                            }
                            let result = tree.add_unit(&request, &form.read());
                            match result {
                                Ok(added) => {
                                    unit_ctx.select(added);
                                    tree.close_add_dialog();
                                }
                                Err(err) => error.set(Some(err.to_string())),
                            }
                        },
                        "Add"
                    }
                }
            }
        }
    }
}
