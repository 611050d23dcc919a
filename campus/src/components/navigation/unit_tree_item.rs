use dioxus::prelude::*;
use unit_tree::filter::TreeView;
use unit_tree::navigator::NavigatorEvent;
use unit_tree::permissions::PermissionEvaluator;
use unit_tree::search::SearchMatches;

use crate::hooks::{use_unit_context, SessionState, UnitTreeState};
use crate::Route;

/// One unit row and, when expanded, its visible children
#[component]
pub fn UnitTreeItem(unit_id: String, level: usize) -> Element {
    let mut tree = use_context::<UnitTreeState>();
    let session_state = use_context::<SessionState>();
    let mut unit_ctx = use_unit_context();
    let router = use_navigator();

    let (node, child_ids, expandable, expanded) = {
        let arena = tree.arena.read();
        let navigator = tree.navigator.read();
        let matches = tree.matches.read();
        let matches: &Option<SearchMatches> = &matches;
        let session = session_state.current.read();
        let view = TreeView::new(&arena, &*session, &navigator.expansion).with_search(matches.as_ref());

        let Some(node) = arena.get(&unit_id).cloned() else {
            return rsx! {};
        };
        let child_ids: Vec<String> = view
            .children(&unit_id)
            .into_iter()
            .map(|child| child.id.clone())
            .collect();
        (node, child_ids, view.has_children(&unit_id), view.is_expanded(&unit_id))
    };

    let (row_class, icon_only) = {
        let navigator = tree.navigator.read();
        (navigator.row_state(&unit_id).css_class(), navigator.is_icon_only())
    };
    let is_match = tree.matches.read().iter().any(|m| m.is_match(&unit_id));
    let can_add = !icon_only && session_state.current.read().can_add_child(&unit_id);

    let indent = format!("padding-left: {}px", 8 + level * 16);
    let icon = node.kind.icon();
    let name = node.name.clone();
    let badge = node.badge.as_ref().map(|b| b.to_string());

    let row_id = unit_id.clone();
    let chevron_id = unit_id.clone();
    let add_id = unit_id.clone();
    let enter_id = unit_id.clone();
    let leave_id = unit_id.clone();

    rsx! {
        div { class: "tree-node",
            div {
                class: "{row_class}",
                style: if !icon_only { "{indent}" },
                title: if icon_only { "{name}" },
                role: "treeitem",
                onclick: move |_| {
                    if let Some(unit) = tree.select(&row_id) {
                        unit_ctx.select(unit);
                        router.push(Route::Units {});
                    }
                },
                onmouseenter: move |_| tree.hover(Some(&enter_id)),
                onmouseleave: move |_| tree.unhover(&leave_id),

                if !icon_only {
                    if expandable {
                        span {
                            class: if expanded { "tree-chevron expanded" } else { "tree-chevron" },
                            onclick: move |evt| {
                                evt.stop_propagation();
                                tree.toggle(&chevron_id);
                            },
                            "▶"
                        }
                    } else {
                        span { class: "tree-chevron placeholder" }
                    }
                }

                span { class: "tree-icon", "{icon}" }

                if !icon_only {
                    span {
                        class: if is_match { "tree-label match" } else { "tree-label" },
                        "{name}"
                    }
                    if let Some(badge) = badge {
                        span { class: "tree-badge", "{badge}" }
                    }
                    if can_add {
                        button {
                            class: "tree-add",
                            title: "Add a unit under {name}",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                let event = {
                                    let navigator = tree.navigator.read();
                                    let session = session_state.current.read();
                                    navigator.click_add(&add_id, &*session)
                                };
                                if let Some(NavigatorEvent::AddChildRequested(request)) = event {
                                    tree.open_add_dialog(request);
                                }
                            },
                            "+"
                        }
                    }
                }
            }

            if expanded && !child_ids.is_empty() {
                div { class: "tree-children", role: "group",
                    for child_id in child_ids {
                        UnitTreeItem { key: "{child_id}", unit_id: child_id.clone(), level: level + 1 }
                    }
                }
            }
        }
    }
}
