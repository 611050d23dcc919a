use std::collections::HashMap;

use approx::assert_relative_eq;
use unit_tree::demo;
use unit_tree::prelude::*;

/// Policy built from a per-unit visibility table; everything else denied
fn policy(table: &[(&str, bool, bool)]) -> impl Fn(Capability, &str) -> bool {
    let table: HashMap<String, UnitVisibility> = table
        .iter()
        .map(|(id, self_visible, children_visible)| {
            (
                id.to_string(),
                UnitVisibility {
                    self_visible: *self_visible,
                    children_visible: *children_visible,
                },
            )
        })
        .collect();
    move |cap: Capability, id: &str| {
        let v = table.get(id).copied().unwrap_or_default();
        match cap {
            Capability::ViewUnit => v.self_visible,
            Capability::ViewChildren => v.children_visible,
            _ => false,
        }
    }
}

// u1
// ├── f1
// │   └── d1
// │       └── c1
// └── f2
fn arena() -> UnitArena {
    let mut arena = UnitArena::new();
    arena
        .insert_root(NewUnit::new("u1", "Northfield University", UnitKind::University))
        .unwrap();
    arena
        .insert_child("u1", NewUnit::new("f1", "Sciences", UnitKind::Faculty))
        .unwrap();
    arena
        .insert_child("f1", NewUnit::new("d1", "Physics", UnitKind::Department))
        .unwrap();
    arena
        .insert_child("d1", NewUnit::new("c1", "Physics L1-A", UnitKind::Class))
        .unwrap();
    arena
        .insert_child("u1", NewUnit::new("f2", "Letters", UnitKind::Faculty))
        .unwrap();
    arena
}

fn all_expanded(arena: &UnitArena) -> ExpansionState {
    let mut expansion = ExpansionState::new();
    for node in arena.walk() {
        expansion.expand(&node.id);
    }
    expansion
}

fn rendered_ids<P: PermissionEvaluator>(arena: &UnitArena, perms: &P) -> Vec<String> {
    let expansion = all_expanded(arena);
    TreeView::new(arena, perms, &expansion)
        .rows()
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn hidden_unit_hides_entire_subtree() {
    let arena = arena();
    // f1 is hidden and u1 grants no blanket view; its descendants are all
    // individually visible and must still be skipped
    let perms = policy(&[
        ("u1", true, false),
        ("f1", false, true),
        ("d1", true, true),
        ("c1", true, true),
        ("f2", true, false),
    ]);
    assert_eq!(rendered_ids(&arena, &perms), ["u1", "f2"]);
}

#[test]
fn hidden_root_hides_everything_below() {
    let arena = arena();
    let perms = policy(&[
        ("u1", false, true),
        ("f1", true, true),
        ("d1", true, true),
        ("c1", true, true),
        ("f2", true, true),
    ]);
    assert!(rendered_ids(&arena, &perms).is_empty());

    let forest = arena.to_forest();
    assert!(visible_forest(&forest, &perms).is_empty());
}

#[test]
fn child_shown_when_self_visible_only() {
    let arena = arena();
    let perms = policy(&[("u1", true, false), ("f1", true, false)]);
    assert_eq!(rendered_ids(&arena, &perms), ["u1", "f1"]);
    assert!(is_child_visible(&perms, "u1", "f1"));
}

#[test]
fn child_shown_when_parent_grants_children_only() {
    let arena = arena();
    let perms = policy(&[("u1", true, true), ("f1", false, false)]);
    assert_eq!(rendered_ids(&arena, &perms), ["u1", "f1", "f2"]);
    assert!(is_child_visible(&perms, "u1", "f1"));
}

#[test]
fn child_shown_when_both_rules_hold() {
    let arena = arena();
    let perms = policy(&[("u1", true, true), ("f1", true, false), ("f2", true, false)]);
    assert_eq!(rendered_ids(&arena, &perms), ["u1", "f1", "f2"]);
}

#[test]
fn child_hidden_when_neither_rule_holds() {
    let arena = arena();
    let perms = policy(&[("u1", true, false), ("f1", false, true)]);
    assert_eq!(rendered_ids(&arena, &perms), ["u1"]);
    assert!(!is_child_visible(&perms, "u1", "f1"));
}

#[test]
fn nested_and_arena_filters_agree() {
    let arena = arena();
    let perms = policy(&[
        ("u1", true, true),
        ("f1", false, false),
        ("d1", true, false),
        ("f2", false, false),
    ]);
    let rows = rendered_ids(&arena, &perms);

    let forest = visible_forest(&arena.to_forest(), &perms);
    let mut nested = Vec::new();
    let mut stack: Vec<&Unit> = forest.iter().rev().collect();
    while let Some(unit) = stack.pop() {
        nested.push(unit.id.clone());
        stack.extend(unit.children.iter().rev());
    }
    assert_eq!(rows, nested);
    assert_eq!(rows, ["u1", "f1", "d1", "f2"]);
}

#[test]
fn appended_child_extends_parent_path() {
    let mut arena = arena();
    let parent_path = arena.get("d1").unwrap().path.clone();

    let child = arena
        .insert_child("d1", NewUnit::new("c2", "Physics L1-B", UnitKind::Class))
        .unwrap();
    let mut expected = parent_path.clone();
    expected.push("c2".to_string());
    assert_eq!(child.path, expected);
    assert_eq!(child.path.last().map(String::as_str), Some("c2"));

    // same invariant on the copy-and-rebuild path
    let forest = arena.to_forest();
    let parent = find_in_forest(&forest, "d1").unwrap();
    let nested = Unit::child_of(parent, "c3", "Physics L1-C", UnitKind::Class);
    let rebuilt = append_child(&forest, "d1", nested).unwrap();
    let added = find_in_forest(&rebuilt, "c3").unwrap();
    assert_eq!(added.path[..added.path.len() - 1], parent_path[..]);
    assert_eq!(added.path.last().map(String::as_str), Some("c3"));
}

#[test]
fn drag_below_min_clamps_to_min() {
    let mut panel = ResizeController::default();
    panel.begin_drag();
    panel.drag_to(-40.0);
    assert_eq!(panel.on_animation_frame(), Some(panel.config().min_width));
    panel.drag_to(12.0);
    panel.on_animation_frame();
    assert_relative_eq!(panel.width(), 160.0);
}

#[test]
fn drag_above_max_clamps_to_max() {
    let mut panel = ResizeController::default();
    panel.begin_drag();
    panel.drag_to(5_000.0);
    panel.on_animation_frame();
    assert_relative_eq!(panel.width(), panel.config().max_width);
}

#[test]
fn release_under_content_threshold_collapses() {
    let mut panel = ResizeController::default();
    panel.set_min_content_width(320.0);
    assert_relative_eq!(panel.collapse_threshold(), 296.0);

    panel.begin_drag();
    panel.drag_to(290.0);
    panel.on_animation_frame();
    assert_eq!(panel.end_drag(), ReleaseOutcome::Collapse);
    assert!(panel.is_collapsed());
    assert_relative_eq!(panel.effective_width(), panel.config().collapsed_width);
}

#[test]
fn release_above_threshold_does_not_collapse() {
    let mut panel = ResizeController::default();
    panel.set_min_content_width(320.0);
    panel.begin_drag();
    panel.drag_to(300.0);
    assert_eq!(panel.end_drag(), ReleaseOutcome::Settled(300.0));
    assert!(!panel.is_collapsed());
}

#[test]
fn release_near_snap_point_snaps() {
    let mut panel = ResizeController::default();
    panel.begin_drag();
    panel.drag_to(235.0);
    assert_eq!(panel.end_drag(), ReleaseOutcome::Snapped(220.0));
    assert_relative_eq!(panel.width(), 220.0);

    panel.begin_drag();
    panel.drag_to(210.0);
    assert_eq!(panel.end_drag(), ReleaseOutcome::Snapped(220.0));
}

#[test]
fn release_far_from_snap_points_keeps_width() {
    let mut panel = ResizeController::default();
    panel.begin_drag();
    panel.drag_to(250.0);
    assert_eq!(panel.end_drag(), ReleaseOutcome::Settled(250.0));
    assert_relative_eq!(panel.width(), 250.0);
}

#[test]
fn toggling_twice_restores_expansion() {
    let mut nav = Navigator::new();
    nav.expansion.expand("u1");
    nav.expansion.expand("f1");
    let before = nav.expansion.clone();

    nav.click_chevron("d1");
    nav.click_chevron("d1");
    assert_eq!(nav.expansion, before);

    nav.click_chevron("f1");
    nav.click_chevron("f1");
    assert_eq!(nav.expansion, before);
}

#[test]
fn demo_teacher_sees_blanket_granted_class() {
    let arena = UnitArena::from_forest(&demo::demo_forest().unwrap()).unwrap();
    let teacher = demo::demo_session(SessionRole::Teacher).unwrap().unwrap();
    let ids = rendered_ids(&arena, &teacher);
    assert_eq!(
        ids,
        [
            "northfield",
            "fac-sci",
            "dep-phys",
            "deg-phys-bsc",
            "cls-phys-l1a",
            "cls-phys-l1b"
        ]
    );
    // surfaced only through the degree's blanket grant
    assert!(!teacher.can_view_unit_self("cls-phys-l1b"));
}

#[test]
fn selection_flow_from_click_to_store() {
    let arena = arena();
    let mut nav = Navigator::new();
    let mut store = SelectionStore::new();
    let mut watcher = store.watch();

    if let NavigatorEvent::Selected(unit) = nav.click_row(arena.get("c1").unwrap()) {
        store.select(unit);
    }
    let seen = watcher.poll(&store).flatten().cloned().unwrap();
    assert_eq!(seen.path, ["u1", "f1", "d1", "c1"]);

    nav.expansion.collapse_all();
    nav.reveal(&seen);
    assert!(nav.expansion.is_expanded("d1"));
    assert!(!nav.expansion.is_expanded("c1"));

    store.clear();
    assert_eq!(watcher.poll(&store), Some(None));
}

#[test]
fn search_keeps_unmatched_children_of_a_matched_unit() {
    let mut arena = arena();
    arena
        .insert_child("d1", NewUnit::new("c2", "Group B", UnitKind::Class))
        .unwrap();
    let perms = SessionPermissions::superuser();
    let mut expansion = ExpansionState::new();
    expansion.expand("u1");
    expansion.expand("d1");

    let search = SearchMatches::find(&arena, &perms, "phys");
    let ids: Vec<String> = TreeView::new(&arena, &perms, &expansion)
        .with_search(search.as_ref())
        .rows()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["u1", "f1", "d1", "c1", "c2"]);
}

#[test]
fn search_matching_only_hidden_units_shows_nothing() {
    let arena = arena();
    let perms = policy(&[("u1", true, false)]);
    let expansion = all_expanded(&arena);

    let search = SearchMatches::find(&arena, &perms, "phys");
    assert_eq!(search.as_ref().map(SearchMatches::match_count), Some(0));
    let rows = TreeView::new(&arena, &perms, &expansion)
        .with_search(search.as_ref())
        .rows();
    assert!(rows.is_empty());
}
