//! Product create/edit modal
//!
//! - model.rs: form fields as typed text and their conversion to [`ProductDto`]
//! - view_model.rs: form state and the save/delete commands
//! - view.rs: the modal component
//!
//! [`ProductDto`]: contracts::domain::a001_product::aggregate::ProductDto

mod model;
mod view;
mod view_model;

pub use view::ProductModal;
