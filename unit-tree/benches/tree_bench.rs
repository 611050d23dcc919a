//! Benchmarks for unit tree mutations and filtering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unit_tree::prelude::*;

/// `faculties` faculties × `departments` departments × `classes` classes
fn build_arena(faculties: usize, departments: usize, classes: usize) -> UnitArena {
    let mut arena = UnitArena::new();
    arena
        .insert_root(NewUnit::new("u", "University", UnitKind::University))
        .unwrap();
    for f in 0..faculties {
        let fid = format!("f{f}");
        arena
            .insert_child("u", NewUnit::new(&fid, format!("Faculty {f}"), UnitKind::Faculty))
            .unwrap();
        for d in 0..departments {
            let did = format!("{fid}-d{d}");
            arena
                .insert_child(&fid, NewUnit::new(&did, format!("Department {d}"), UnitKind::Department))
                .unwrap();
            for c in 0..classes {
                let cid = format!("{did}-c{c}");
                arena
                    .insert_child(&did, NewUnit::new(&cid, format!("Class {c}"), UnitKind::Class))
                    .unwrap();
            }
        }
    }
    arena
}

fn bench_append(c: &mut Criterion) {
    let arena = build_arena(10, 10, 10);
    let forest = arena.to_forest();

    c.bench_function("append_rebuild_1111_units", |b| {
        b.iter(|| {
            let parent = find_in_forest(&forest, "f9-d9").unwrap();
            let child = Unit::child_of(parent, "new", "New class", UnitKind::Class);
            black_box(append_child(&forest, "f9-d9", child).unwrap())
        })
    });

    c.bench_function("append_arena_1111_units", |b| {
        b.iter_batched(
            || arena.clone(),
            |mut arena| {
                arena
                    .insert_child("f9-d9", NewUnit::new("new", "New class", UnitKind::Class))
                    .unwrap();
                black_box(arena)
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_rows(c: &mut Criterion) {
    let arena = build_arena(10, 10, 10);
    let perms = SessionPermissions::new()
        .grant_global(Capability::ViewUnit)
        .grant_global(Capability::ViewChildren);
    let mut expansion = ExpansionState::new();
    for node in arena.walk() {
        expansion.expand(&node.id);
    }

    c.bench_function("visible_rows_all_expanded", |b| {
        b.iter(|| black_box(TreeView::new(&arena, &perms, &expansion).rows()))
    });

    c.bench_function("search_and_rows", |b| {
        b.iter(|| {
            let search = SearchMatches::find(&arena, &perms, "Class 7");
            black_box(
                TreeView::new(&arena, &perms, &expansion)
                    .with_search(search.as_ref())
                    .rows(),
            )
        })
    });
}

criterion_group!(benches, bench_append, bench_rows);
criterion_main!(benches);
