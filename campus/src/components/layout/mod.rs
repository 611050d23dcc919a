pub mod add_unit_dialog;
pub mod dashboard_layout;
pub mod session_switcher;
pub mod sidebar;
pub mod unit_page;

pub use add_unit_dialog::AddUnitDialog;
pub use dashboard_layout::DashboardLayout;
pub use session_switcher::SessionSwitcher;
pub use sidebar::Sidebar;
pub use unit_page::UnitPage;
