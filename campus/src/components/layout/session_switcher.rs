use dioxus::prelude::*;
use unit_tree::permissions::SessionRole;

use crate::hooks::SessionState;

/// Pick which demo session the dashboard runs as
#[component]
pub fn SessionSwitcher(#[props(default)] compact: bool) -> Element {
    let mut session_state = use_context::<SessionState>();

    let current = session_state.current.read();
    let active = current.role;
    let display_name = current.display_name.clone();
    drop(current);

    let roles: Vec<(SessionRole, &str, String)> = session_state
        .sessions
        .read()
        .iter()
        .map(|s| {
            let label = s.role.label();
            (s.role, label, label.chars().take(1).collect())
        })
        .collect();

    rsx! {
        div { class: if compact { "session-switcher compact" } else { "session-switcher" },
            if !compact {
                p { class: "session-name", "Signed in as {display_name}" }
            }
            div { class: "session-roles",
                for (role, label, initial) in roles {
                    button {
                        key: "{label}",
                        class: if role == active { "session-role active" } else { "session-role" },
                        title: "{label}",
                        onclick: move |_| session_state.switch_role(role),
                        if compact { "{initial}" } else { "{label}" }
                    }
                }
            }
        }
    }
}
