use leptos::prelude::*;

/// Labelled `<input>` bound to a form field
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    /// Element id, also used by the label
    #[prop(into)]
    id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text" when omitted
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    /// Extra attributes for numeric inputs, e.g. "0.01"
    #[prop(optional, into)]
    step: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let min = (input_type == "number").then_some("0");

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=id
                class="form__input"
                type=input_type
                min=min
                step=step
                placeholder=placeholder.unwrap_or_default()
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn FormTextarea(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <textarea
                id=id
                class="form__textarea"
                rows=rows.unwrap_or(3)
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
