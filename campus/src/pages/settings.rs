use dioxus::prelude::*;

use crate::components::layout::SessionSwitcher;
use crate::hooks::PanelState;

#[component]
pub fn Settings() -> Element {
    let mut panel = use_context::<PanelState>();

    let (width, min_content, collapsed, snap_points) = {
        let controller = panel.controller.read();
        (
            controller.width(),
            controller.min_content_width(),
            controller.is_collapsed(),
            controller.config().snap_points.clone(),
        )
    };

    rsx! {
        div { class: "settings-page",
            h1 { "Settings" }

            section { class: "settings-section",
                h2 { "Session" }
                SessionSwitcher {}
            }

            section { class: "settings-section",
                h2 { "Navigator panel" }
                p { "Width: {width:.0}px" }
                p { "Content needs: {min_content:.0}px" }
                if collapsed {
                    p { "The navigator is collapsed." }
                }
                div { class: "settings-actions",
                    for snap in snap_points {
                        button {
                            key: "{snap}",
                            class: "btn-secondary",
                            disabled: collapsed,
                            onclick: move |_| panel.set_width(snap),
                            "{snap:.0}px"
                        }
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| panel.toggle_collapsed(),
                        if collapsed { "Expand" } else { "Collapse" }
                    }
                    button {
                        class: "btn-primary",
                        onclick: move |_| panel.reset(),
                        "Reset"
                    }
                }
            }
        }
    }
}
