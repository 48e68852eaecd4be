//! Всплывающие уведомления (toast)

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Время показа уведомления, мс
const AUTO_DISMISS_MS: u32 = 4_000;

/// Приёмник пользовательских уведомлений
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Сервис уведомлений, предоставляется через context
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Показать уведомление и убрать его по таймеру
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                message: message.into(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }
}

/// Адаптер сервиса к [`Notifier`]
#[derive(Clone, Copy)]
pub struct ToastNotifier(pub NotificationService);

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.0.push(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.0.push(NotificationKind::Error, message);
    }
}

/// Область вывода уведомлений (правый нижний угол)
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="toast-host" style="position: fixed; right: 16px; bottom: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;">
            <For
                each=move || service.items().get()
                key=|n| n.id
                children=move |n| {
                    let intent = match n.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    let id = n.id;
                    view! {
                        <div on:click=move |_| service.dismiss(id) style="cursor: pointer;">
                            <MessageBar intent=intent>{n.message}</MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
