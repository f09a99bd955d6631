use super::view_model::ProductDetailsViewModel;
use crate::shared::api::Item;
use crate::shared::components::{FormActions, FormInput, FormTextarea};
use crate::shared::modal::Modal;
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn ProductModal(
    /// Row being edited; None creates a new product
    item: Option<Item>,
    on_close: Callback<()>,
    on_submit: Callback<Value>,
    on_delete: Callback<String>,
    #[prop(into)] is_submitting: Signal<bool>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(item.as_ref());
    let form = vm.form;
    let error = vm.error;
    let title = vm.title();
    let is_edit = vm.is_edit_mode();

    let on_save = {
        let vm = vm.clone();
        Callback::new(move |_| vm.save_command(on_submit))
    };
    let on_delete_click = Callback::new(move |_| vm.delete_command(on_delete));

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <FormInput
                    label="Name"
                    id="product-name"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    disabled=is_submitting
                />
                <FormInput
                    label="SKU"
                    id="product-sku"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.sku.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.sku = v))
                    disabled=is_submitting
                />
                <FormTextarea
                    label="Description"
                    id="product-description"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    disabled=is_submitting
                />
                <div class="form__row">
                    <FormInput
                        label="Price"
                        id="product-price"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.price.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.price = v))
                        disabled=is_submitting
                    />
                    <FormInput
                        label="Compare-at Price"
                        id="product-compare-at-price"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.compare_at_price.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.compare_at_price = v))
                        disabled=is_submitting
                    />
                </div>
                <div class="form__row">
                    <FormInput
                        label="Stock"
                        id="product-stock"
                        input_type="number"
                        step="1"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.stock.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.stock = v))
                        disabled=is_submitting
                    />
                    <FormInput
                        label="Low Stock Threshold"
                        id="product-low-stock-threshold"
                        input_type="number"
                        step="1"
                        value=Signal::derive(move || form.with(|f| f.low_stock_threshold.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.low_stock_threshold = v))
                        disabled=is_submitting
                    />
                </div>
            </div>

            <FormActions
                is_edit=is_edit
                is_submitting=is_submitting
                on_save=on_save
                on_cancel=on_close
                on_delete=on_delete_click
            />
        </Modal>
    }
}
