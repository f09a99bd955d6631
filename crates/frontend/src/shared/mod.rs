pub mod api;
pub mod components;
pub mod data_table;
pub mod form;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod theme;
pub mod toast;
