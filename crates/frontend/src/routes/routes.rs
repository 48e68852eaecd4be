use crate::domain::a001_search_connector::ui::{
    AddSerperConnectorPage, ConnectorCatalog, ConnectorList,
};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page" style="padding: 32px; text-align: center;">
            <h2>"Page not found"</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/dashboard/:search_space_id/connectors")
                        view=ConnectorList
                    />
                    <Route
                        path=path!("/dashboard/:search_space_id/connectors/add")
                        view=ConnectorCatalog
                    />
                    <Route
                        path=path!("/dashboard/:search_space_id/connectors/add/serper-api")
                        view=AddSerperConnectorPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
