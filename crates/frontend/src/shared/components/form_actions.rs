use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Footer of an entity form: Delete (edit mode only), Cancel and Save.
///
/// Every button is disabled while a request is in flight.
#[component]
pub fn FormActions(
    is_edit: bool,
    #[prop(into)] is_submitting: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-footer">
            {is_edit.then(|| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    class="button--danger"
                    on_click=move |_| on_delete.run(())
                    disabled=is_submitting
                >
                    {icon("trash")}
                    " Delete"
                </Button>
            })}
            <div class="modal-footer__spacer"></div>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_cancel.run(())
                disabled=is_submitting
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_save.run(())
                disabled=is_submitting
                loading=is_submitting
            >
                {move || if is_submitting.get() { "Saving..." } else { "Save" }}
            </Button>
        </div>
    }
}
