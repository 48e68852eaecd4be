use super::form::{ConnectorFormController, FormState};
use crate::domain::a001_search_connector::model::HttpConnectorApi;
use crate::shared::navigation::RouterNavigator;
use crate::shared::notifications::{NotificationService, ToastNotifier};
use contracts::domain::a001_search_connector::ConnectorType;
use leptos::prelude::*;
use std::rc::Rc;

type Controller = ConnectorFormController<HttpConnectorApi, ToastNotifier, RouterNavigator>;

/// ViewModel формы создания подключения
#[derive(Clone, Copy)]
pub struct AddConnectorVm {
    pub state: RwSignal<FormState>,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl AddConnectorVm {
    /// Создавать внутри компонента под `<Router>` и `NotificationService`
    pub fn new(connector_type: ConnectorType, workspace_id: String) -> Self {
        let notifications =
            use_context::<NotificationService>().expect("NotificationService not found");

        let controller = ConnectorFormController::new(
            connector_type,
            workspace_id,
            HttpConnectorApi,
            ToastNotifier(notifications),
            RouterNavigator::new(),
        );
        let state = RwSignal::new(controller.state());
        let controller = controller.with_observer(move |s| state.set(s.clone()));

        Self {
            state,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn set_name(&self, name: String) {
        self.controller.with_value(|c| c.set_name(name));
    }

    pub fn set_api_key(&self, api_key: String) {
        self.controller.with_value(|c| c.set_api_key(api_key));
    }

    /// Отправить форму; повторный вызов во время отправки игнорируется
    pub fn submit_command(&self) {
        let controller = self.controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            controller.submit().await;
        });
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submitting()))
    }

    pub fn name(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.draft.name.clone()))
    }

    pub fn api_key(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.draft.api_key.clone()))
    }

    /// Сообщение об ошибке поля, если есть
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.errors.for_field(field).map(str::to_string)))
    }
}
