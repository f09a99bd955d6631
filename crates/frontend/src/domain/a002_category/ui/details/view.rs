use super::view_model::CategoryDetailsViewModel;
use crate::shared::api::Item;
use crate::shared::components::{FormActions, FormInput, FormTextarea};
use crate::shared::modal::Modal;
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn CategoryModal(
    item: Option<Item>,
    on_close: Callback<()>,
    on_submit: Callback<Value>,
    on_delete: Callback<String>,
    #[prop(into)] is_submitting: Signal<bool>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(item.as_ref());
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
                    id="category-name"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    disabled=is_submitting
                />
                <FormTextarea
                    label="Description"
                    id="category-description"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    disabled=is_submitting
                />
                <FormInput
                    label="Display Order"
                    id="category-display-order"
                    input_type="number"
                    step="1"
                    placeholder="0"
                    value=Signal::derive(move || form.with(|f| f.display_order.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.display_order = v))
                    disabled=is_submitting
                />
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
