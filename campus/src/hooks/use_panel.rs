use dioxus::logger::tracing;
use dioxus::prelude::*;
use unit_tree::resize::{PanelConfig, ReleaseOutcome, ResizeController};

use crate::browser;

/// Width of the navigator panel
#[derive(Clone, Copy)]
pub struct PanelState {
    pub controller: Signal<ResizeController>,
}

/// Create the panel state and keep the root CSS variable in sync with it
pub fn use_panel() -> PanelState {
    let controller = use_signal(|| ResizeController::new(PanelConfig::default()));

    use_effect(move || {
        let controller = controller.read();
        let (name, value) = controller.css_variable();
        browser::set_root_css_variable(name, &value);
    });

    PanelState { controller }
}

impl PanelState {
    pub fn begin_drag(&mut self) {
        if self.controller.write().begin_drag() {
            tracing::debug!("resize started at {}px", self.controller.peek().width());
        }
    }

    /// Pointer moved during a drag. Width updates are applied at most once
    /// per animation frame.
    pub fn drag_to(&mut self, pointer_x: f64) {
        if !self.controller.peek().is_resizing() {
            return;
        }
        // Moves before the scheduled frame only replace the pending position
        if !self.controller.write().drag_to(pointer_x) {
            return;
        }
        let mut controller = self.controller;
        spawn(async move {
            if let Err(err) = browser::next_animation_frame().await {
                tracing::warn!("animation frame failed: {:?}", err);
            }
            controller.write().on_animation_frame();
        });
    }

    pub fn end_drag(&mut self) -> ReleaseOutcome {
        if !self.controller.peek().is_resizing() {
            return ReleaseOutcome::Ignored;
        }
        let outcome = self.controller.write().end_drag();
        tracing::debug!("resize released: {:?}", outcome);
        outcome
    }

    pub fn toggle_collapsed(&mut self) {
        let collapsed = self.controller.write().toggle_collapsed();
        tracing::debug!("panel {}", if collapsed { "collapsed" } else { "expanded" });
    }

    pub fn set_width(&mut self, width: f64) {
        self.controller.write().set_width(width);
    }

    /// Record the content width; the panel widens if it is too narrow
    pub fn set_min_content_width(&mut self, measured: f64) {
        let unchanged = {
            let controller = self.controller.peek();
            (controller.min_content_width() - controller.config().clamp(measured)).abs() < 0.5
        };
        if !unchanged {
            self.controller.write().set_min_content_width(measured);
        }
    }

    pub fn reset(&mut self) {
        self.controller.write().reset();
    }
}
