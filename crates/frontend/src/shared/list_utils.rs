//! Toolbar widgets shared by list views
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search box that reports its value once typing pauses.
///
/// The clear button reports an empty string immediately.
#[component]
pub fn SearchInput(
    /// Committed search term; the box follows it when it changes elsewhere
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());

    let input_value = RwSignal::new(value.get_untracked());
    // Dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    // Tab switches reset the committed term; mirror that in the box.
    Effect::new(move |_| {
        let committed = value.get();
        if committed != input_value.get_untracked() {
            pending.set_value(None);
            input_value.set(committed);
        }
    });

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    on_cleanup(move || pending.set_value(None));

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" title="Clear search" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
