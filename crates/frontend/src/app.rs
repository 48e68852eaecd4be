use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления доступны всем страницам через context
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}
