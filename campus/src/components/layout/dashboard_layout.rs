use dioxus::prelude::*;

use crate::hooks::{use_panel, use_session_state, use_unit_context_provider, use_unit_tree};
use crate::Route;

#[component]
pub fn DashboardLayout() -> Element {
    let session_state = use_session_state();
    use_context_provider(|| session_state);

    let tree = use_unit_tree(session_state);
    use_context_provider(|| tree);

    let panel = use_panel();
    use_context_provider(|| panel);

    use_unit_context_provider();

    rsx! {
        div {
            class: "dashboard-container",
            crate::components::layout::Sidebar {}
            main { class: "content-area",
                Outlet::<Route> {}
            }
            crate::components::layout::AddUnitDialog {}
        }
    }
}
