use super::model::CategoryForm;
use crate::shared::form::FormViewModel;

pub type CategoryDetailsViewModel = FormViewModel<CategoryForm>;
