use dioxus::logger::tracing;
use dioxus::prelude::*;
use unit_tree::add_unit::{AddUnitRequest, NewUnitForm};
use unit_tree::arena::UnitArena;
use unit_tree::demo;
use unit_tree::error::TreeResult;
use unit_tree::navigator::{Navigator, NavigatorEvent};
use unit_tree::search::SearchMatches;
use unit_tree::selection::SelectedUnit;

use crate::hooks::SessionState;

/// Unit hierarchy plus the navigator's interaction state
#[derive(Clone, Copy)]
pub struct UnitTreeState {
    pub arena: Signal<UnitArena>,
    pub navigator: Signal<Navigator>,
    pub search: Signal<String>,
    pub matches: Memo<Option<SearchMatches>>,
    /// Open add-unit request, shown as a dialog
    pub add_request: Signal<Option<AddUnitRequest>>,
}

/// Search only ever sees what the current session may see
pub fn use_unit_tree(session_state: SessionState) -> UnitTreeState {
    let arena = use_signal(load_demo_arena);
    let navigator = use_signal(|| {
        let mut navigator = Navigator::new();
        // Start with the roots open
        for id in arena.peek().root_ids() {
            navigator.expansion.expand(id);
        }
        navigator
    });
    let search = use_signal(String::new);
    let matches = use_memo(move || {
        let session = session_state.current.read();
        SearchMatches::find(&arena.read(), &*session, &search.read())
    });
    let add_request = use_signal(|| None);

    UnitTreeState {
        arena,
        navigator,
        search,
        matches,
        add_request,
    }
}

impl UnitTreeState {
    /// Row click: returns the unit to publish as the selection
    pub fn select(&mut self, unit_id: &str) -> Option<SelectedUnit> {
        let arena = self.arena.read();
        let node = arena.get(unit_id)?;
        match self.navigator.write().click_row(node) {
            NavigatorEvent::Selected(unit) => Some(unit),
            _ => None,
        }
    }

    pub fn toggle(&mut self, unit_id: &str) {
        let event = self.navigator.write().click_chevron(unit_id);
        if let Some(NavigatorEvent::ExpansionToggled { unit_id, expanded }) = event {
            tracing::debug!("{unit_id} {}", if expanded { "expanded" } else { "collapsed" });
        }
    }

    pub fn hover(&mut self, unit_id: Option<&str>) {
        if self.navigator.peek().hovered_id() == unit_id {
            return;
        }
        self.navigator.write().hover(unit_id);
    }

    /// Hover left `unit_id`; ignored if another row took the hover since
    pub fn unhover(&mut self, unit_id: &str) {
        if self.navigator.peek().hovered_id() == Some(unit_id) {
            self.navigator.write().hover(None);
        }
    }

    pub fn open_add_dialog(&mut self, request: AddUnitRequest) {
        tracing::debug!("add requested under {}", request.parent_id);
        self.add_request.set(Some(request));
    }

    pub fn close_add_dialog(&mut self) {
        self.add_request.set(None);
    }

    /// Append the unit described by `form` and return it for selection
    pub fn add_unit(&mut self, request: &AddUnitRequest, form: &NewUnitForm) -> TreeResult<SelectedUnit> {
        let added = {
            let mut arena = self.arena.write();
            let node = arena.apply_add_request(request, form)?;
            SelectedUnit::from(node)
        };
        tracing::info!("added {} under {}", added.id, request.parent_id);
        self.navigator.write().reveal(&added);
        Ok(added)
    }
}

fn load_demo_arena() -> UnitArena {
    let arena = demo::demo_forest().and_then(|forest| UnitArena::from_forest(&forest));
    match arena {
        Ok(arena) => arena,
        Err(err) => {
            tracing::error!("failed to load demo units: {err}");
            UnitArena::new()
        }
    }
}
