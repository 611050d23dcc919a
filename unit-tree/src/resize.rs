//! Width management for the resizable navigator panel
//!
//! Drag protocol:
//! 1. `begin_drag` on pointer-down over the handle;
//! 2. `drag_to` on every pointer move, then `on_animation_frame` once per
//!    rendered frame to apply the latest position (clamped);
//! 3. `end_drag` on pointer-up, which either collapses the panel, snaps to a
//!    nearby snap point or keeps the released width.

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

pub const MIN_WIDTH: f64 = 160.0;
pub const MAX_WIDTH: f64 = 480.0;
pub const COLLAPSED_WIDTH: f64 = 64.0;
pub const DEFAULT_WIDTH: f64 = 280.0;
pub const SNAP_POINTS: [f64; 3] = [280.0, 220.0, 180.0];
pub const SNAP_TOLERANCE: f64 = 16.0;
/// Releasing this far below the content width collapses the panel
pub const COLLAPSE_MARGIN: f64 = 24.0;
/// CSS custom property carrying the effective width to sibling layout
pub const WIDTH_VARIABLE: &str = "--sidebar-width";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub min_width: f64,
    pub max_width: f64,
    pub collapsed_width: f64,
    pub default_width: f64,
    pub snap_points: Vec<f64>,
    pub snap_tolerance: f64,
    pub collapse_margin: f64,
    pub width_variable: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
            collapsed_width: COLLAPSED_WIDTH,
            default_width: DEFAULT_WIDTH,
            snap_points: SNAP_POINTS.to_vec(),
            snap_tolerance: SNAP_TOLERANCE,
            collapse_margin: COLLAPSE_MARGIN,
            width_variable: WIDTH_VARIABLE.to_string(),
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> TreeResult<()> {
        if !(self.min_width > 0.0 && self.min_width <= self.max_width) {
            return Err(TreeError::InvalidConfig(format!(
                "min width {} must be positive and not exceed max width {}",
                self.min_width, self.max_width
            )));
        }
        if self.collapsed_width <= 0.0 || self.collapsed_width >= self.min_width {
            return Err(TreeError::InvalidConfig(format!(
                "collapsed width {} must be between 0 and min width {}",
                self.collapsed_width, self.min_width
            )));
        }
        if self.snap_tolerance < 0.0 || self.collapse_margin < 0.0 {
            return Err(TreeError::InvalidConfig(
                "snap tolerance and collapse margin must not be negative".to_string(),
            ));
        }
        if let Some(p) = self
            .snap_points
            .iter()
            .find(|p| **p < self.min_width || **p > self.max_width)
        {
            return Err(TreeError::InvalidConfig(format!(
                "snap point {p} lies outside [{}, {}]",
                self.min_width, self.max_width
            )));
        }
        Ok(())
    }

    pub fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min_width, self.max_width)
    }

    /// Nearest snap point within tolerance of `width`
    pub fn snap_target(&self, width: f64) -> Option<f64> {
        self.snap_points
            .iter()
            .copied()
            .filter(|p| (p - width).abs() <= self.snap_tolerance)
            .min_by(|a, b| {
                let da = (a - width).abs();
                let db = (b - width).abs();
                da.total_cmp(&db).then(b.total_cmp(a))
            })
    }
}

/// What happened when the user let go of the handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Released under the collapse threshold; the panel is now collapsed
    Collapse,
    /// Settled exactly on a snap point
    Snapped(f64),
    /// Kept the released width
    Settled(f64),
    /// No drag was in progress
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeController {
    config: PanelConfig,
    width: f64,
    collapsed: bool,
    is_resizing: bool,
    min_content_width: f64,
    pending_x: Option<f64>,
    drag_origin: f64,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl ResizeController {
    pub fn new(config: PanelConfig) -> Self {
        let width = config.clamp(config.default_width);
        let min_content_width = config.min_width;
        Self {
            config,
            width,
            collapsed: false,
            is_resizing: false,
            min_content_width,
            pending_x: None,
            drag_origin: width,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Expanded width, kept while collapsed
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Width actually occupied on screen
    pub fn effective_width(&self) -> f64 {
        if self.collapsed {
            self.config.collapsed_width
        } else {
            self.width
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    pub fn min_content_width(&self) -> f64 {
        self.min_content_width
    }

    /// Width at or below which a release collapses the panel
    pub fn collapse_threshold(&self) -> f64 {
        (self.min_content_width - self.config.collapse_margin).max(self.config.min_width)
    }

    /// Pointer-down on the handle. There is no handle while collapsed.
    pub fn begin_drag(&mut self) -> bool {
        if self.collapsed {
            return false;
        }
        self.is_resizing = true;
        self.drag_origin = self.width;
        self.pending_x = None;
        true
    }

    /// Record the pointer position. Returns `true` when the caller must
    /// schedule an animation frame; further moves before that frame only
    /// replace the pending position.
    pub fn drag_to(&mut self, pointer_x: f64) -> bool {
        if !self.is_resizing || self.collapsed {
            return false;
        }
        let schedule = self.pending_x.is_none();
        self.pending_x = Some(pointer_x);
        schedule
    }

    /// Apply the pending pointer position, if any
    pub fn on_animation_frame(&mut self) -> Option<f64> {
        let x = self.pending_x.take()?;
        if self.collapsed || !self.is_resizing {
            return None;
        }
        self.width = self.config.clamp(x);
        Some(self.width)
    }

    /// Pointer-up. Flushes any pending position, then applies the collapse
    /// threshold and the snap points, in that order.
    pub fn end_drag(&mut self) -> ReleaseOutcome {
        if !self.is_resizing {
            return ReleaseOutcome::Ignored;
        }
        self.on_animation_frame();
        self.is_resizing = false;

        let released = self.width;
        if released <= self.collapse_threshold() {
            log::debug!(
                "released at {released}px under threshold {}px, collapsing",
                self.collapse_threshold()
            );
            self.width = self.drag_origin;
            self.collapsed = true;
            return ReleaseOutcome::Collapse;
        }
        if let Some(snap) = self.config.snap_target(released) {
            log::debug!("released at {released}px, snapping to {snap}px");
            self.width = snap;
            return ReleaseOutcome::Snapped(snap);
        }
        ReleaseOutcome::Settled(released)
    }

    /// Programmatic width change; ignored while collapsed
    pub fn set_width(&mut self, width: f64) -> bool {
        if self.collapsed {
            return false;
        }
        self.width = self.config.clamp(width);
        true
    }

    pub fn collapse(&mut self) {
        self.is_resizing = false;
        self.pending_x = None;
        self.collapsed = true;
    }

    pub fn expand(&mut self) {
        self.collapsed = false;
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        if self.collapsed {
            self.expand();
        } else {
            self.collapse();
        }
        self.collapsed
    }

    /// Record the measured width the content needs. The panel widens to fit
    /// unless collapsed or being dragged. Returns `true` if the width changed.
    pub fn set_min_content_width(&mut self, measured: f64) -> bool {
        self.min_content_width = self.config.clamp(measured);
        if self.collapsed || self.is_resizing || self.width >= self.min_content_width {
            return false;
        }
        self.width = self.min_content_width;
        true
    }

    /// `(name, value)` of the CSS custom property for the effective width
    pub fn css_variable(&self) -> (&str, String) {
        (
            self.config.width_variable.as_str(),
            format!("{}px", self.effective_width().round()),
        )
    }

    /// Restore defaults, keeping the configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dragged_to(controller: &mut ResizeController, x: f64) -> ReleaseOutcome {
        controller.begin_drag();
        controller.drag_to(x);
        controller.on_animation_frame();
        controller.end_drag()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PanelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = PanelConfig {
            snap_points: vec![900.0],
            ..PanelConfig::default()
        };
        assert!(matches!(config.validate(), Err(TreeError::InvalidConfig(_))));

        let config = PanelConfig {
            collapsed_width: 200.0,
            ..PanelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_moves_are_coalesced_per_frame() {
        let mut c = ResizeController::default();
        assert!(c.begin_drag());
        assert!(c.drag_to(300.0));
        assert!(!c.drag_to(310.0));
        assert!(!c.drag_to(320.0));
        assert_eq!(c.on_animation_frame(), Some(320.0));
        assert_eq!(c.on_animation_frame(), None);
        assert!(c.drag_to(330.0));
    }

    #[test]
    fn test_moves_without_drag_are_ignored() {
        let mut c = ResizeController::default();
        assert!(!c.drag_to(400.0));
        assert_eq!(c.on_animation_frame(), None);
        assert_eq!(c.end_drag(), ReleaseOutcome::Ignored);
        assert_relative_eq!(c.width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_release_flushes_pending_position() {
        let mut c = ResizeController::default();
        c.begin_drag();
        c.drag_to(400.0);
        assert_eq!(c.end_drag(), ReleaseOutcome::Settled(400.0));
        assert!(!c.is_resizing());
    }

    #[test]
    fn test_collapse_restores_drag_origin_on_expand() {
        let mut c = ResizeController::default();
        assert_eq!(dragged_to(&mut c, 100.0), ReleaseOutcome::Collapse);
        assert!(c.is_collapsed());
        assert_relative_eq!(c.effective_width(), COLLAPSED_WIDTH);

        c.expand();
        assert_relative_eq!(c.effective_width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_collapsed_panel_ignores_width_changes() {
        let mut c = ResizeController::default();
        c.collapse();
        assert!(!c.begin_drag());
        assert!(!c.set_width(400.0));
        assert!(!c.set_min_content_width(450.0));
        assert_relative_eq!(c.width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_content_width_widens_panel() {
        let mut c = ResizeController::default();
        assert!(c.set_min_content_width(330.0));
        assert_relative_eq!(c.width(), 330.0);
        // never shrinks on its own
        assert!(!c.set_min_content_width(200.0));
        assert_relative_eq!(c.width(), 330.0);
        // measured widths are clamped
        c.set_min_content_width(2_000.0);
        assert_relative_eq!(c.min_content_width(), MAX_WIDTH);
    }

    #[test]
    fn test_snap_prefers_nearest_point() {
        let config = PanelConfig {
            snap_points: vec![200.0, 220.0],
            ..PanelConfig::default()
        };
        assert_eq!(config.snap_target(213.0), Some(220.0));
        assert_eq!(config.snap_target(207.0), Some(200.0));
        assert_eq!(config.snap_target(250.0), None);
    }

    #[test]
    fn test_css_variable_tracks_effective_width() {
        let mut c = ResizeController::default();
        assert_eq!(c.css_variable(), ("--sidebar-width", "280px".to_string()));
        c.collapse();
        assert_eq!(c.css_variable(), ("--sidebar-width", "64px".to_string()));
    }
}
