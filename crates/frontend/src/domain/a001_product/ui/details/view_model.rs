use super::model::ProductForm;
use crate::shared::form::FormViewModel;

/// ViewModel for the product modal
pub type ProductDetailsViewModel = FormViewModel<ProductForm>;
