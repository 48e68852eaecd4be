//! Страница подключения Serper API

use super::view_model::AddConnectorVm;
use crate::shared::components::ui::Input;
use crate::shared::components::CardAnimated;
use crate::shared::document_viewer::DocumentViewer;
use crate::shared::icons::icon;
use crate::shared::navigation::{add_connector_path, Navigator, RouterNavigator};
use contracts::domain::a001_search_connector::aggregate::{FIELD_API_KEY, FIELD_NAME};
use contracts::domain::a001_search_connector::ConnectorType;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use std::sync::Arc;
use thaw::*;

const SETUP_GUIDE: &str = "\
# Getting a Serper API key

1. Sign up at [serper.dev](https://serper.dev).
2. Open the **API Key** page of the dashboard.
3. Copy the key and paste it into the form.

> The key is sent to the backend once and stored encrypted.
> It is never shown again in the dashboard.

Free accounts include a monthly quota of queries; see the
[pricing page](https://serper.dev/pricing) for limits.
";

#[component]
pub fn AddSerperConnectorPage() -> impl IntoView {
    let params = use_params_map();
    let workspace_id = params
        .with_untracked(|p| p.get("search_space_id"))
        .unwrap_or_default();

    let vm = AddConnectorVm::new(ConnectorType::SerperApi, workspace_id.clone());
    let navigator = StoredValue::new_local(RouterNavigator::new());
    let back_path = add_connector_path(&workspace_id);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="page page--narrow" style="max-width: 48rem; margin: 0 auto; padding: 32px 16px;">
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| navigator.with_value(|n| n.navigate(&back_path))
                attr:style="margin-bottom: 24px;"
            >
                {icon("arrow-left")}
                " Back to Connectors"
            </Button>

            <CardAnimated style="border: 2px solid var(--color-border);">
                <div style="padding: 16px 16px 0 16px;">
                    <h2 style="margin: 0; font-size: 24px; font-weight: 700;">"Connect Serper API"</h2>
                    <p style="margin: 4px 0 0 0; color: var(--color-text-muted);">
                        "Integrate with Serper API to enhance your search capabilities with Google search results."
                    </p>
                </div>

                <div style="padding: 0 16px;">
                    <div style="margin-bottom: 24px;">
                        <MessageBar intent=MessageBarIntent::Info>
                            <div>
                                <strong>"API Key Required"</strong>
                                <div>
                                    "You'll need a Serper API key to use this connector. You can get one by signing up at "
                                    <a
                                        href="https://serper.dev"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        style="font-weight: 500; text-decoration: underline;"
                                    >
                                        "serper.dev"
                                    </a>
                                    " "
                                    <DocumentViewer
                                        title="Serper API setup"
                                        content=SETUP_GUIDE
                                        trigger=Arc::new(|| view! {
                                            <a href="#" on:click=|ev| ev.prevent_default()>
                                                {icon("info")}
                                                " Setup guide"
                                            </a>
                                        }.into_any())
                                    />
                                </div>
                            </div>
                        </MessageBar>
                    </div>

                    <form on:submit=handle_submit style="display: flex; flex-direction: column; gap: 24px;">
                        <Input
                            id="connector-name"
                            label="Connector Name"
                            value=vm.name()
                            on_input=Callback::new(move |v: String| vm.set_name(v))
                            placeholder="My Serper API Connector"
                            description="A friendly name to identify this connector."
                            error=vm.field_error(FIELD_NAME)
                            disabled=vm.is_submitting()
                        />

                        <Input
                            id="connector-api-key"
                            label="Serper API Key"
                            input_type="password"
                            value=vm.api_key()
                            on_input=Callback::new(move |v: String| vm.set_api_key(v))
                            placeholder="Enter your Serper API key"
                            description="Your API key will be encrypted and stored securely."
                            error=vm.field_error(FIELD_API_KEY)
                            disabled=vm.is_submitting()
                        />

                        <div style="display: flex; justify-content: flex-end;">
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || vm.is_submitting().get()
                            >
                                {move || {
                                    if vm.is_submitting().get() {
                                        view! {
                                            <Spinner size=SpinnerSize::Small />
                                            " Connecting..."
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            {icon("check")}
                                            " Connect Serper API"
                                        }
                                        .into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <div style="display: flex; flex-direction: column; align-items: flex-start; border-top: 1px solid var(--color-border); background: var(--color-muted-bg); padding: 16px 24px;">
                    <h4 style="margin: 0; font-size: 14px; font-weight: 500;">"What you get with Serper API:"</h4>
                    <ul style="margin: 8px 0 0 0; padding-left: 20px; font-size: 14px; color: var(--color-text-muted);">
                        <li>"Access to Google search results directly in your research"</li>
                        <li>"Real-time information from the web"</li>
                        <li>"Enhanced search capabilities for your projects"</li>
                    </ul>
                </div>
            </CardAnimated>
        </div>
    }
}
