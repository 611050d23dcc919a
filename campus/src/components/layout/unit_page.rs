use dioxus::prelude::*;
use unit_tree::add_unit::AddUnitRequest;
use unit_tree::filter::{is_unit_visible, TreeView};
use unit_tree::navigator::ExpansionState;
use unit_tree::permissions::PermissionEvaluator;
use unit_tree::selection::SelectedUnit;
use unit_tree::tabs::{tabs_for, RecordScope, UnitTab};

use crate::hooks::{use_unit_context, SessionState, UnitTreeState};
use crate::mock_data::{self, Record};

/// Child unit listed on a parent's "Units" tab
#[derive(Clone, PartialEq)]
struct ChildRow {
    id: String,
    name: String,
    icon: &'static str,
    kind: String,
}

struct UnitDetails {
    is_leaf: bool,
    icon: &'static str,
    kind_label: String,
    breadcrumb: String,
    children: Vec<ChildRow>,
}

#[component]
pub fn UnitPage(unit: SelectedUnit) -> Element {
    let mut tree = use_context::<UnitTreeState>();
    let session_state = use_context::<SessionState>();
    let mut unit_ctx = use_unit_context();
    let mut active_tab = use_signal(|| None::<UnitTab>);

    let session = session_state.current.read().clone();
    let details = {
        let arena = tree.arena.read();
        // A session switch can leave a selection the new session may not see
        let visible = is_unit_visible(&arena, &session, &unit.id);
        let details = arena.get(&unit.id).filter(|_| visible).map(|node| {
            let breadcrumb: Vec<&str> = node
                .path
                .iter()
                .filter_map(|id| arena.get(id).map(|n| n.name.as_str()))
                .collect();
            // The tab lists direct children regardless of the sidebar's expansion
            let expansion = ExpansionState::new();
            let children: Vec<ChildRow> = TreeView::new(&arena, &session, &expansion)
                .children(&unit.id)
                .into_iter()
                .map(|child| ChildRow {
                    id: child.id.clone(),
                    name: child.name.clone(),
                    icon: child.kind.icon(),
                    kind: child.kind.label().to_string(),
                })
                .collect();
            UnitDetails {
                is_leaf: node.is_leaf(),
                icon: node.kind.icon(),
                kind_label: node.kind.label().to_string(),
                breadcrumb: breadcrumb.join(" / "),
                children,
            }
        });
        details
    };

    let tabs = match &details {
        Some(details) => tabs_for(&unit.id, details.is_leaf, &session),
        None => Vec::new(),
    };
    let current_tab = active_tab()
        .filter(|tab| tabs.contains(tab))
        .or_else(|| tabs.first().copied());
    let can_add = session.can_add_child(&unit.id);

    let unit_id = unit.id.clone();
    let records = use_resource(use_reactive!(|(unit_id, current_tab)| async move {
        match current_tab {
            Some(UnitTab::ChildUnits) | None => Ok(None),
            Some(tab) => mock_data::load_records(&unit_id, tab).await.map(Some),
        }
    }));

    let Some(details) = details else {
        return rsx! {
            div { class: "empty-state", "This unit is not available." }
        };
    };

    let scope = match current_tab {
        Some(UnitTab::Roles) => RecordScope::roles(&unit.id, &session),
        Some(UnitTab::Attributions) => RecordScope::attributions(&unit.id, &session),
        _ => RecordScope::All,
    };
    let tab_labels: Vec<(UnitTab, &str)> = tabs.iter().map(|tab| (*tab, tab.label())).collect();

    let add_parent = unit.id.clone();

    rsx! {
        div { class: "unit-page",
            div { class: "unit-header",
                div { class: "unit-breadcrumb", "{details.breadcrumb}" }
                div { class: "unit-title",
                    span { class: "unit-icon", "{details.icon}" }
                    h1 { "{unit.name}" }
                    span { class: "unit-kind", "{details.kind_label}" }
                }
                div { class: "unit-actions",
                    if can_add {
                        button {
                            class: "btn-primary",
                            onclick: move |_| tree.open_add_dialog(AddUnitRequest::new(add_parent.clone())),
                            "+ Add unit"
                        }
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| unit_ctx.clear(),
                        "Close"
                    }
                }
            }

            if tabs.is_empty() {
                div { class: "empty-state", "You have no access to the details of this unit." }
            } else {
                div { class: "unit-tabs",
                    for (tab, label) in tab_labels {
                        button {
                            key: "{label}",
                            class: if current_tab == Some(tab) { "unit-tab active" } else { "unit-tab" },
                            onclick: move |_| active_tab.set(Some(tab)),
                            "{label}"
                        }
                    }
                }

                div { class: "unit-tab-body",
                    if current_tab == Some(UnitTab::ChildUnits) {
                        ChildUnitList { units: details.children.clone() }
                    } else {
                        match &*records.read() {
                            None => rsx! {
                                div { class: "loading", "Loading…" }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "error", "Could not load records: {err}" }
                            },
                            Some(Ok(None)) => rsx! {},
                            Some(Ok(Some(list))) => {
                                let visible = scope.apply(list, &session.user_id, |r| r.owner.as_str());
                                rsx! {
                                    RecordList { records: visible.into_iter().cloned().collect::<Vec<_>>() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChildUnitList(units: Vec<ChildRow>) -> Element {
    let mut tree = use_context::<UnitTreeState>();
    let mut unit_ctx = use_unit_context();

    if units.is_empty() {
        return rsx! {
            div { class: "empty-state", "No sub-units visible." }
        };
    }

    rsx! {
        ul { class: "record-list",
            for child in units {
                li {
                    key: "{child.id}",
                    class: "record-item clickable",
                    onclick: {
                        let id = child.id.clone();
                        move |_| {
                            if let Some(unit) = tree.select(&id) {
                                unit_ctx.select(unit);
                            }
                        }
                    },
                    span { class: "tree-icon", "{child.icon}" }
                    span { class: "record-title", "{child.name}" }
                    span { class: "record-detail", "{child.kind}" }
                }
            }
        }
    }
}

#[component]
fn RecordList(records: Vec<Record>) -> Element {
    if records.is_empty() {
        return rsx! {
            div { class: "empty-state", "Nothing here yet." }
        };
    }

    rsx! {
        ul { class: "record-list",
            for (idx, record) in records.iter().enumerate() {
                li { key: "{idx}", class: "record-item",
                    span { class: "record-title", "{record.title}" }
                    if !record.detail.is_empty() {
                        span { class: "record-detail", "{record.detail}" }
                    }
                }
            }
        }
    }
}
