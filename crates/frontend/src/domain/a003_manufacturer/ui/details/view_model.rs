use super::model::ManufacturerForm;
use crate::shared::form::FormViewModel;

pub type ManufacturerDetailsViewModel = FormViewModel<ManufacturerForm>;
