use dioxus::prelude::*;
use unit_tree::filter::TreeView;
use unit_tree::measure::RowMetrics;
use unit_tree::search::SearchMatches;

use crate::components::layout::SessionSwitcher;
use crate::components::navigation::{ResizeHandle, UnitTreeItem};
use crate::hooks::{use_unit_context, PanelState, SessionState, UnitTreeState};
use crate::Route;

#[component]
pub fn Sidebar() -> Element {
    let mut panel = use_context::<PanelState>();
    let mut tree = use_context::<UnitTreeState>();
    let session_state = use_context::<SessionState>();
    let unit_ctx = use_unit_context();

    // Width the visible rows and the search text need
    let content_width = use_memo(move || {
        let arena = tree.arena.read();
        let navigator = tree.navigator.read();
        let matches = tree.matches.read();
        let matches: &Option<SearchMatches> = &matches;
        let session = session_state.current.read();
        let rows = TreeView::new(&arena, &*session, &navigator.expansion)
            .with_search(matches.as_ref())
            .rows();
        let query = tree.search.read();
        RowMetrics::default().min_content_width(&rows, &query, panel.controller.peek().config())
    });
    use_effect(move || panel.set_min_content_width(content_width()));

    let collapsed = use_memo(move || panel.controller.read().is_collapsed());
    use_effect(move || {
        let collapsed = collapsed();
        if tree.navigator.peek().is_icon_only() != collapsed {
            tree.navigator.write().set_icon_only(collapsed);
        }
    });

    // Selection made elsewhere (a new unit, another page) is revealed in the tree
    use_effect(move || {
        let store = unit_ctx.store.read();
        let mut navigator = tree.navigator;
        match store.current() {
            Some(selected) => {
                let path_open = selected.path[..selected.path.len().saturating_sub(1)]
                    .iter()
                    .all(|id| navigator.peek().expansion.is_expanded(id));
                if navigator.peek().selected_id() != Some(selected.id.as_str()) || !path_open {
                    navigator.write().reveal(selected);
                }
            }
            None => {
                if navigator.peek().selected_id().is_some() {
                    navigator.write().clear_selection();
                }
            }
        }
    });

    let root_ids: Vec<String> = {
        let arena = tree.arena.read();
        let navigator = tree.navigator.read();
        let matches = tree.matches.read();
        let matches: &Option<SearchMatches> = &matches;
        let session = session_state.current.read();
        TreeView::new(&arena, &*session, &navigator.expansion)
            .with_search(matches.as_ref())
            .roots()
            .into_iter()
            .map(|node| node.id.clone())
            .collect()
    };
    let is_collapsed = collapsed();
    let is_resizing = panel.controller.read().is_resizing();
    let query = tree.search.read().clone();
    let searching = tree.matches.read().is_some();

    let mut class = String::from("sidebar");
    if is_collapsed {
        class.push_str(" sidebar-collapsed");
    }
    if is_resizing {
        class.push_str(" resizing");
    }

    rsx! {
        aside {
            class: "{class}",

            div { class: "sidebar-header",
                if !is_collapsed {
                    div { class: "sidebar-brand",
                        span { "Units" }
                    }
                }
                button {
                    class: "btn-collapse",
                    title: if is_collapsed { "Expand navigation" } else { "Collapse navigation" },
                    onclick: move |_| panel.toggle_collapsed(),
                    if is_collapsed { "›" } else { "‹" }
                }
            }

            if !is_collapsed {
                div { class: "sidebar-search",
                    input {
                        r#type: "search",
                        placeholder: "Search units",
                        value: "{query}",
                        oninput: move |evt| tree.search.set(evt.value()),
                    }
                    if !query.is_empty() {
                        button {
                            class: "btn-clear-search",
                            title: "Clear search",
                            onclick: move |_| tree.search.set(String::new()),
                            "×"
                        }
                    }
                }
            }

            nav { class: "sidebar-content",
                if root_ids.is_empty() {
                    if !is_collapsed {
                        p { class: "tree-empty",
                            if searching { "No unit matches \"{query}\"" } else { "No units to show" }
                        }
                    }
                } else {
                    div { class: "unit-tree", role: "tree",
                        for unit_id in root_ids {
                            UnitTreeItem { key: "{unit_id}", unit_id: unit_id.clone(), level: 0 }
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                if !is_collapsed {
                    SessionSwitcher { compact: true }
                }
                Link { class: "sidebar-link", to: Route::Settings {},
                    if is_collapsed { "⚙" } else { "⚙ Settings" }
                }
            }

            ResizeHandle {}
        }
    }
}
