use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use super::orchestrator::{execute, Mutation, Notice, PanelState};
use super::tabs::EntityKind;
use crate::domain::a001_product::ui::details::ProductModal;
use crate::domain::a002_category::ui::details::CategoryModal;
use crate::domain::a003_manufacturer::ui::details::ManufacturerModal;
use crate::shared::api::{use_catalog_api, Item};
use crate::shared::data_table::{use_table_data, DataTable};
use crate::shared::icons::{bi, icon};
use crate::shared::toast::use_toasts;

#[derive(Clone, Copy)]
struct ModalHandlers {
    on_close: Callback<()>,
    on_submit: Callback<Value>,
    on_delete: Callback<String>,
    is_submitting: Signal<bool>,
}

/// The form modal of the given tab
fn render_modal(kind: EntityKind, item: Option<Item>, h: ModalHandlers) -> AnyView {
    match kind {
        EntityKind::Products => view! {
            <ProductModal
                item=item
                on_close=h.on_close
                on_submit=h.on_submit
                on_delete=h.on_delete
                is_submitting=h.is_submitting
            />
        }
        .into_any(),
        EntityKind::Categories => view! {
            <CategoryModal
                item=item
                on_close=h.on_close
                on_submit=h.on_submit
                on_delete=h.on_delete
                is_submitting=h.is_submitting
            />
        }
        .into_any(),
        EntityKind::Manufacturers => view! {
            <ManufacturerModal
                item=item
                on_close=h.on_close
                on_submit=h.on_submit
                on_delete=h.on_delete
                is_submitting=h.is_submitting
            />
        }
        .into_any(),
    }
}

/// Tabbed products/categories/manufacturers management page
#[component]
pub fn InventoryPage() -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    let api = use_catalog_api();
    let toasts = use_toasts();

    let active = Memo::new(move |_| panel.with(|p| p.active_tab));
    let definition = move || active.get().definition();
    let data = use_table_data(api, Signal::derive(move || definition().endpoint));
    let has_error = Memo::new(move |_| data.state.with(|s| s.has_error()));
    let is_submitting = Memo::new(move |_| panel.with(|p| p.is_submitting));
    // Only changes when the modal opens, closes or switches item, so typing
    // and submitting never rebuild the form.
    let modal_target = Memo::new(move |_| panel.with(|p| p.visible_modal(has_error.get())));

    let notify = move |notice: &Notice| match (toasts, notice) {
        (Some(t), Notice::Success(m)) => t.success(m.clone()),
        (Some(t), Notice::Error(m)) => t.error(m.clone()),
        (None, _) => log::info!("{}", notice.message()),
    };

    let run = move |mutation: Mutation| {
        let api = data.api();
        leptos::task::spawn_local(async move {
            let result = execute(api.as_ref(), &mutation).await;
            let Some(notice) = panel.try_update(|p| p.finish(&mutation, result)) else {
                return;
            };
            notify(&notice);
            if notice.should_refresh() {
                data.refresh();
            }
        });
    };

    let handlers = ModalHandlers {
        on_close: Callback::new(move |_| panel.update(|p| p.close_modal())),
        on_submit: Callback::new(move |form_data: Value| {
            if let Some(Some(mutation)) = panel.try_update(|p| p.begin_submit(form_data)) {
                run(mutation);
            }
        }),
        on_delete: Callback::new(move |id: String| {
            if let Some(Some(mutation)) = panel.try_update(|p| p.begin_delete(id)) {
                run(mutation);
            }
        }),
        is_submitting: is_submitting.into(),
    };

    let error_banner = move || {
        view! {
            <div class="alert alert--error inventory__error">
                <span>"Failed to load data. Please try again later."</span>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| data.refresh()>
                    {icon("refresh")}
                    " Retry"
                </Button>
            </div>
        }
    };

    view! {
        <div class="page inventory">
            <div class="page__header">
                <h1 class="page__title">"Inventory"</h1>
            </div>

            <nav class="inventory__tabs" role="tablist">
                {EntityKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let def = kind.definition();
                        view! {
                            <button
                                class="inventory__tab"
                                class:active=move || active.get() == kind
                                role="tab"
                                on:click=move |_| panel.update(|p| p.select_tab(kind))
                            >
                                {bi(def.icon)}
                                " "
                                {def.title}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=move || !has_error.get() fallback=error_banner>
                <DataTable
                    title=Signal::derive(move || definition().title)
                    icon=Signal::derive(move || definition().icon)
                    columns=Signal::derive(move || definition().columns)
                    sort_options=Signal::derive(move || definition().sort_options)
                    data=data
                    on_row_click=Callback::new(move |item: Item| panel.update(|p| p.open_edit(Some(item))))
                    actions=std::sync::Arc::new(move || {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| panel.update(|p| p.open_create())
                            >
                                {icon("plus")}
                                {move || format!(" Add {}", definition().singular_title)}
                            </Button>
                        }
                        .into_any()
                    })
                />
            </Show>

            {move || modal_target.get().map(|(kind, item)| render_modal(kind, item, handlers))}
        </div>
    }
}
