use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::shared::navigation::{add_serper_path, connectors_path, Navigator, RouterNavigator};
use contracts::domain::a001_search_connector::ConnectorType;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Карточка подключаемого источника
struct CatalogEntry {
    connector_type: ConnectorType,
    description: &'static str,
    path: fn(&str) -> String,
}

const ENTRIES: &[CatalogEntry] = &[CatalogEntry {
    connector_type: ConnectorType::SerperApi,
    description: "Google search results through the Serper API.",
    path: add_serper_path,
}];

/// Каталог доступных подключений
#[component]
pub fn ConnectorCatalog() -> impl IntoView {
    let params = use_params_map();
    let workspace_id = params
        .with_untracked(|p| p.get("search_space_id"))
        .unwrap_or_default();
    let navigator = StoredValue::new_local(RouterNavigator::new());
    let back_path = connectors_path(&workspace_id);

    view! {
        <div class="page" style="max-width: 64rem; margin: 0 auto; padding: 32px 16px;">
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| navigator.with_value(|n| n.navigate(&back_path))
            >
                {icon("arrow-left")}
                " Back"
            </Button>
            <PageHeader title="Add Connector" subtitle="Choose a search source to connect">
                {()}
            </PageHeader>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 16px;">
                {ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let target = (entry.path)(&workspace_id);
                        view! {
                            <CardAnimated delay_ms={i as u32 * 80}>
                                <div style="padding: 16px; display: flex; flex-direction: column; gap: 12px;">
                                    <h3 style="margin: 0;">{entry.connector_type.display_name()}</h3>
                                    <p class="text-muted" style="margin: 0;">{entry.description}</p>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| navigator.with_value(|n| n.navigate(&target))
                                    >
                                        {icon("plus")}
                                        " Connect"
                                    </Button>
                                </div>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
