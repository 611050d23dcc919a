//! Campus dashboard front-end: the unit navigator and the unit pages it drives.
//!
//! All tree, permission and panel rules live in `unit_tree`; this crate wires
//! them to Dioxus signals and the DOM.

use dioxus::prelude::*;

// Module Declarations
pub mod browser;
pub mod components;
pub mod hooks;
pub mod mock_data;
pub mod pages;

use components::layout::DashboardLayout;
use pages::{Settings, Units};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Units {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
