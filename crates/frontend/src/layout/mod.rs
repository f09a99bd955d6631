pub mod admin_layout;

pub use admin_layout::AdminLayout;
