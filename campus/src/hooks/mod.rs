pub mod use_panel;
pub mod use_session;
pub mod use_unit_context;
pub mod use_unit_tree;

pub use use_panel::{use_panel, PanelState};
pub use use_session::{use_session_state, SessionState};
pub use use_unit_context::{use_unit_context, use_unit_context_provider, UnitContext};
pub use use_unit_tree::{use_unit_tree, UnitTreeState};
