use dioxus::prelude::*;
use unit_tree::resize::ReleaseOutcome;

use crate::hooks::PanelState;

/// Drag handle on the navigator's right edge.
///
/// While a drag is in progress a transparent overlay covers the page so the
/// pointer keeps reporting to us over iframes and other panels.
#[component]
pub fn ResizeHandle() -> Element {
    let mut panel = use_context::<PanelState>();

    let (collapsed, resizing) = {
        let controller = panel.controller.read();
        (controller.is_collapsed(), controller.is_resizing())
    };
    if collapsed {
        return rsx! {};
    }

    rsx! {
        div {
            class: if resizing { "resize-handle active" } else { "resize-handle" },
            title: "Drag to resize",
            onmousedown: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                panel.begin_drag();
            },
        }

        if resizing {
            div {
                class: "resize-overlay",
                onmousemove: move |evt| panel.drag_to(evt.client_coordinates().x),
                onmouseup: move |_| release(&mut panel),
                onmouseleave: move |_| release(&mut panel),
            }
        }
    }
}

fn release(panel: &mut PanelState) {
    if let ReleaseOutcome::Collapse = panel.end_drag() {
        dioxus::logger::tracing::info!("navigator collapsed below its content width");
    }
}
