pub mod state;

use self::state::create_state;
use crate::domain::a001_search_connector::model::fetch_connectors;
use crate::shared::components::PageHeader;
use crate::shared::document_viewer::DocumentViewer;
use crate::shared::icons::icon;
use crate::shared::navigation::{add_connector_path, Navigator, RouterNavigator};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Форматирует дату в dd.mm.yyyy HH:MM
fn format_datetime(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "Never".to_string())
}

/// Список подключений рабочего пространства
#[component]
pub fn ConnectorList() -> impl IntoView {
    let params = use_params_map();
    let workspace_id = params
        .with_untracked(|p| p.get("search_space_id"))
        .unwrap_or_default();

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let navigator = StoredValue::new_local(RouterNavigator::new());
    let add_path = add_connector_path(&workspace_id);

    let load_connectors = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match fetch_connectors().await {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load connectors: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_connectors();
        }
    });

    let toggle_sort = move |_| state.update(|s| s.sort_ascending = !s.sort_ascending);

    view! {
        <div class="page" style="max-width: 64rem; margin: 0 auto; padding: 32px 16px;">
            <PageHeader title="Connectors" subtitle="Search sources available in this workspace">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_connectors()
                    disabled=Signal::derive(move || loading.get())
                >
                    "Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigator.with_value(|n| n.navigate(&add_path))
                >
                    {icon("plus")}
                    " Add Connector"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div style="margin: 12px 0;">
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                </div>
            })}

            <Show when=move || loading.get()>
                <div style="padding: 24px; text-align: center;"><Spinner /></div>
            </Show>

            <Show when=move || !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())>
                <p class="text-muted" style="padding: 24px 0;">"No connectors yet."</p>
            </Show>

            <Show when=move || state.with(|s| !s.items.is_empty())>
                <table class="table" style="width: 100%; margin-top: 16px;">
                    <thead>
                        <tr>
                            <th style="cursor: pointer;" on:click=toggle_sort>
                                "Name "
                                {move || if state.with(|s| s.sort_ascending) { "▲" } else { "▼" }}
                            </th>
                            <th>"Type"</th>
                            <th>"Last indexed"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.sorted())
                            key=|c| c.id
                            children=move |c| {
                                let summary = c.summary_markdown();
                                view! {
                                    <tr>
                                        <td>{c.name.clone()}</td>
                                        <td>{c.connector_type.display_name()}</td>
                                        <td>{format_datetime(c.last_indexed_at)}</td>
                                        <td style="text-align: right;">
                                            <DocumentViewer title=c.name.clone() content=summary />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
