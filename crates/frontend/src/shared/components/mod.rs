pub mod form_actions;
pub mod form_field;
pub mod pagination_controls;

pub use form_actions::FormActions;
pub use form_field::{FormInput, FormTextarea};
pub use pagination_controls::PaginationControls;
