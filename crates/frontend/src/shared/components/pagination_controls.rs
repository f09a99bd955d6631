use crate::shared::icons::icon;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 25, 50, 100];

/// "Showing 11-20 of 45"; "No items" when empty.
pub fn range_label(page: u64, page_size: u64, total_count: u64) -> String {
    if total_count == 0 || page_size == 0 {
        return "No items".to_string();
    }
    let first = (page.max(1) - 1) * page_size + 1;
    let last = (first + page_size - 1).min(total_count);
    format!("Showing {}-{} of {}", first.min(total_count), last, total_count)
}

/// First/prev/next/last buttons plus a page size select. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u64>,
    #[prop(into)] total_pages: Signal<u64>,
    #[prop(into)] total_count: Signal<u64>,
    #[prop(into)] page_size: Signal<u64>,
    on_page_change: Callback<u64>,
    on_page_size_change: Callback<u64>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
