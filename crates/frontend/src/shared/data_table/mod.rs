//! Generic server-paged table: toolbar (search, sort), rows, pagination.

pub mod column;
pub mod table_data;

pub use column::{parse_sort_key, Cell, CellFormatter, ColumnDef, SortOption};
pub use table_data::{use_table_data, Applied, TableData, TableState};

use leptos::prelude::*;
use thaw::*;

use crate::shared::api::Item;
use crate::shared::components::PaginationControls;
use crate::shared::icons::bi;
use crate::shared::list_utils::SearchInput;

fn cell_view(cell: Cell) -> impl IntoView {
    view! {
        <span class=cell.class.unwrap_or_default()>{cell.text}</span>
        {cell.secondary.map(|s| view! { <del class="data-table__secondary">{s}</del> })}
    }
}

/// Cells of one row, in column order
fn row_cells(cols: &[ColumnDef], item: &Item) -> Vec<Cell> {
    cols.iter().map(|col| col.render(item)).collect()
}

#[component]
pub fn DataTable(
    #[prop(into)] title: Signal<&'static str>,
    /// Bootstrap icon class shown before the title
    #[prop(into)]
    icon: Signal<&'static str>,
    #[prop(into)] columns: Signal<&'static [ColumnDef]>,
    #[prop(into)] sort_options: Signal<&'static [SortOption]>,
    data: TableData,
    /// Row click; the panel opens the edit form
    on_row_click: Callback<Item>,
    /// Buttons in the header, e.g. "Add Product"
    #[prop(optional)]
    actions: Option<ChildrenFn>,
) -> impl IntoView {
    let state = data.state;
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading));

    let sort_value = move || {
        state.with(|s| {
            s.sort
                .as_ref()
                .map(|(field, dir)| format!("{}:{}", field, dir.as_str()))
                .unwrap_or_default()
        })
    };

    let rows = move || {
        let cols = columns.get();
        let colspan = cols.len().max(1);
        let rows = items.get();
        if rows.is_empty() {
            let message = if is_loading.get() { "Loading..." } else { "No items found" };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=colspan attr:class="data-table__empty">{message}</TableCell>
                </TableRow>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|item| {
                let cells = row_cells(cols, &item)
                    .into_iter()
                    .map(|cell| {
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>{cell_view(cell)}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                view! {
                    <TableRow attr:class="data-table__row" on:click=move |_| on_row_click.run(item.clone())>
                        {cells}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            <div class="data-table__header">
                <div class="data-table__title">
                    {move || bi(icon.get())}
                    <h2>{move || title.get()}</h2>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                    <Show when=move || is_loading.get()>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
                </div>
                <div class="data-table__actions">
                    {actions.map(|actions| actions())}
                </div>
            </div>

            <div class="data-table__toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |term: String| data.set_search(term))
                />
                <select
                    class="data-table__sort"
                    prop:value=sort_value
                    on:change=move |ev| data.set_sort(parse_sort_key(&event_target_value(&ev)))
                >
                    <option value="">"Default order"</option>
                    {move || {
                        sort_options
                            .get()
                            .iter()
                            .map(|opt| view! { <option value=opt.key()>{opt.label}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {move || {
                                columns
                                    .get()
                                    .iter()
                                    .map(|col| view! { <TableHeaderCell>{col.label}</TableHeaderCell> })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| data.set_page(page))
                on_page_size_change=Callback::new(move |size| data.set_page_size(size))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_cells_leave_item_for_click_handler() {
        let cols = [ColumnDef::plain("name", "Name"), ColumnDef::plain("sku", "SKU")];
        let item = Item::from_value(json!({"id": "p-1", "name": "Lamp", "sku": "L-1"})).unwrap();

        let cells = row_cells(&cols, &item);
        assert_eq!(cells, vec![Cell::text("Lamp"), Cell::text("L-1")]);
        assert_eq!(item.id().as_deref(), Some("p-1"));
        assert!(row_cells(&[], &item).is_empty());
    }
}
