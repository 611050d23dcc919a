use dioxus::logger::tracing;
use dioxus::prelude::*;
use unit_tree::demo;
use unit_tree::permissions::{Session, SessionPermissions, SessionRole};

/// The signed-in session and the demo sessions it can be switched to
#[derive(Clone, Copy)]
pub struct SessionState {
    pub sessions: Signal<Vec<Session>>,
    pub current: Signal<Session>,
}

pub fn use_session_state() -> SessionState {
    let sessions = use_signal(load_demo_sessions);
    let current = use_signal(move || {
        let sessions = sessions.peek();
        sessions
            .iter()
            .find(|s| s.role == SessionRole::Teacher)
            .or_else(|| sessions.first())
            .cloned()
            .unwrap_or_else(guest_session)
    });

    SessionState { sessions, current }
}

impl SessionState {
    /// Switch to the first session with `role`. Everything reading `current`
    /// re-evaluates its permissions.
    pub fn switch_role(&mut self, role: SessionRole) {
        let next = self.sessions.read().iter().find(|s| s.role == role).cloned();
        match next {
            Some(session) => {
                tracing::info!("switched to {} ({})", session.display_name, role.label());
                self.current.set(session);
            }
            None => tracing::warn!("no session with role {}", role.label()),
        }
    }
}

fn load_demo_sessions() -> Vec<Session> {
    match demo::demo_sessions() {
        Ok(sessions) => sessions,
        Err(err) => {
            tracing::error!("failed to load demo sessions: {err}");
            Vec::new()
        }
    }
}

/// Session without any grant; sees nothing
fn guest_session() -> Session {
    Session {
        user_id: "guest".to_string(),
        display_name: "Guest".to_string(),
        role: SessionRole::Student,
        permissions: SessionPermissions::new(),
    }
}
