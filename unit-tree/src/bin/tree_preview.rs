//! Tree Preview - print the navigator as each demo session sees it
//!
//! Usage: tree_preview [UNITS_JSON] [SESSIONS_JSON] [QUERY]
//!
//! Without arguments the bundled demo hierarchy and sessions are used.

use std::path::Path;

use unit_tree::demo;
use unit_tree::prelude::*;

fn print_session(arena: &UnitArena, session: &Session, query: Option<&str>) {
    println!(
        "=== {} ({}) ===",
        session.display_name,
        session.role.label()
    );

    // Show everything the session can reach
    let mut expansion = ExpansionState::new();
    for node in arena.walk() {
        expansion.expand(&node.id);
    }
    let search = query.and_then(|q| SearchMatches::find(arena, session, q));
    let view = TreeView::new(arena, session, &expansion).with_search(search.as_ref());
    let rows = view.rows();

    if rows.is_empty() {
        println!("  (nothing visible)");
    }
    for row in &rows {
        let badge = row
            .badge
            .as_ref()
            .map(|b| format!("  [{b}]"))
            .unwrap_or_default();
        let add = if session.can_add_child(&row.id) { "  (+)" } else { "" };
        println!(
            "  {}{} {}{}{}",
            "    ".repeat(row.level),
            row.kind.icon(),
            row.name,
            badge,
            add
        );
    }

    let panel = PanelConfig::default();
    let width = RowMetrics::default().min_content_width(&rows, query.unwrap_or(""), &panel);
    println!("  min content width: {width:.0}px\n");
}

fn main() -> TreeResult<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let forest = match args.first() {
        Some(path) => demo::load_forest(Path::new(path))?,
        None => demo::demo_forest()?,
    };
    let sessions = match args.get(1) {
        Some(path) => demo::load_sessions(Path::new(path))?,
        None => demo::demo_sessions()?,
    };
    let query = args.get(2).map(String::as_str);

    let arena = UnitArena::from_forest(&forest)?;
    println!("Loaded {} units, {} sessions\n", arena.len(), sessions.len());

    for session in &sessions {
        print_session(&arena, session, query);
    }
    Ok(())
}
