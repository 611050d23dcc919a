pub mod resize_handle;
pub mod unit_tree_item;

pub use resize_handle::ResizeHandle;
pub use unit_tree_item::UnitTreeItem;
