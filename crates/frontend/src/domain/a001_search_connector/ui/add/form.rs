//! Контроллер формы создания подключения.
//!
//! Не зависит от leptos: API, уведомления и навигация передаются снаружи,
//! а UI подписывается на изменения через observer.

use crate::domain::a001_search_connector::model::{ConnectorApi, SubmissionError};
use crate::shared::navigation::{connectors_path, Navigator};
use crate::shared::notifications::Notifier;
use contracts::domain::a001_search_connector::{
    ConnectorDraft, ConnectorType, SearchSourceConnector,
};
use contracts::shared::validation::ValidationErrors;
use std::cell::RefCell;
use std::rc::Rc;

/// Фаза формы: `Idle -> Validating -> Submitting -> {Succeeded -> Navigated, Idle}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Navigated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub draft: ConnectorDraft,
    pub phase: FormPhase,
    pub errors: ValidationErrors,
}

impl FormState {
    fn new(draft: ConnectorDraft) -> Self {
        Self {
            draft,
            phase: FormPhase::Idle,
            errors: ValidationErrors::new(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Поля можно редактировать и отправлять форму
    pub fn is_editable(&self) -> bool {
        self.phase == FormPhase::Idle
    }
}

/// Результат вызова [`ConnectorFormController::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    Created(SearchSourceConnector),
    Invalid(ValidationErrors),
    Failed(SubmissionError),
    /// Форма уже отправляется (или отправлена), повторный вызов ничего не делает
    Ignored,
}

pub type StateObserver = Rc<dyn Fn(&FormState)>;

pub struct ConnectorFormController<A, N, R> {
    api: A,
    notifier: N,
    navigator: R,
    connector_type: ConnectorType,
    workspace_id: String,
    state: RefCell<FormState>,
    observer: Option<StateObserver>,
}

impl<A, N, R> ConnectorFormController<A, N, R>
where
    A: ConnectorApi,
    N: Notifier,
    R: Navigator,
{
    pub fn new(
        connector_type: ConnectorType,
        workspace_id: impl Into<String>,
        api: A,
        notifier: N,
        navigator: R,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            connector_type,
            workspace_id: workspace_id.into(),
            state: RefCell::new(FormState::new(ConnectorDraft::for_type(connector_type))),
            observer: None,
        }
    }

    /// Вызывать `observer` после каждого изменения состояния
    pub fn with_observer(mut self, observer: impl Fn(&FormState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn set_name(&self, name: String) {
        self.edit(|draft| draft.name = name);
    }

    pub fn set_api_key(&self, api_key: String) {
        self.edit(|draft| draft.api_key = api_key);
    }

    fn edit(&self, apply: impl FnOnce(&mut ConnectorDraft)) {
        if !self.state.borrow().is_editable() {
            return;
        }
        self.transition(|s| {
            apply(&mut s.draft);
            // после первой неудачной проверки ошибки пересчитываются при вводе
            if !s.errors.is_empty() {
                s.errors = s.draft.validate().err().unwrap_or_default();
            }
        });
    }

    fn transition(&self, apply: impl FnOnce(&mut FormState)) {
        apply(&mut self.state.borrow_mut());
        if let Some(observer) = &self.observer {
            let snapshot = self.state();
            observer(&snapshot);
        }
    }

    /// Проверить форму и создать подключение.
    ///
    /// Не более одного запроса к API одновременно: пока идёт отправка,
    /// повторный вызов возвращает [`SubmitOutcome::Ignored`].
    pub async fn submit(&self) -> SubmitOutcome {
        if !self.state.borrow().is_editable() {
            log::debug!("submit ignored: form is {:?}", self.state.borrow().phase);
            return SubmitOutcome::Ignored;
        }

        self.transition(|s| s.phase = FormPhase::Validating);
        let validated = self.state.borrow().draft.validate();
        let request = match validated {
            Ok(draft) => draft.into_request(self.connector_type),
            Err(errors) => {
                self.transition(|s| {
                    s.errors = errors.clone();
                    s.phase = FormPhase::Idle;
                });
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.transition(|s| {
            s.errors = ValidationErrors::new();
            s.phase = FormPhase::Submitting;
        });
        log::info!(
            "creating {} connector '{}' in workspace {}",
            self.connector_type.as_str(),
            request.name,
            self.workspace_id
        );

        match self.api.create_connector(&request).await {
            Ok(connector) => {
                log::info!("connector {} created", connector.id);
                self.transition(|s| s.phase = FormPhase::Succeeded);
                self.notifier.success(&format!(
                    "{} connector created successfully!",
                    self.connector_type.display_name()
                ));
                self.navigator.navigate(&connectors_path(&self.workspace_id));
                self.transition(|s| s.phase = FormPhase::Navigated);
                SubmitOutcome::Created(connector)
            }
            Err(err) => {
                log::error!("Error creating connector: {}", err);
                self.notifier.error(&err.user_message());
                self.transition(|s| s.phase = FormPhase::Idle);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
