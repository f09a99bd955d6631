//! Inventory panel: one tab per catalog entity, a server-paged table and
//! create/edit modals.

pub mod orchestrator;
pub mod tabs;
mod view;

pub use view::InventoryPage;
