use crate::shared::api_utils::{api_url, bearer_header, error_detail};
use async_trait::async_trait;
use contracts::domain::a001_search_connector::{ConnectorCreateRequest, SearchSourceConnector};
use gloo_net::http::{Request, RequestBuilder};

const CONNECTORS_PATH: &str = "/api/v1/search-source-connectors/";

/// Сообщение, если причина ошибки неизвестна
pub const GENERIC_CREATE_ERROR: &str = "Failed to create connector";

/// Ошибка создания подключения
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Backend ответил не-2xx
    #[error("{}", api_message(.status, .detail))]
    Api { status: u16, detail: Option<String> },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn api_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP {}", status),
    }
}

impl SubmissionError {
    /// Причина для показа пользователю, если она известна
    pub fn description(&self) -> Option<String> {
        match self {
            Self::Api { detail, .. } => detail.clone(),
            other => Some(other.to_string()),
        }
    }

    /// Текст уведомления об ошибке
    pub fn user_message(&self) -> String {
        self.description()
            .unwrap_or_else(|| GENERIC_CREATE_ERROR.to_string())
    }
}

/// Сервис управления подключениями на стороне backend
#[async_trait(?Send)]
pub trait ConnectorApi {
    async fn create_connector(
        &self,
        request: &ConnectorCreateRequest,
    ) -> Result<SearchSourceConnector, SubmissionError>;
}

/// Реализация поверх HTTP API
#[derive(Clone, Copy, Default)]
pub struct HttpConnectorApi;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match bearer_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[async_trait(?Send)]
impl ConnectorApi for HttpConnectorApi {
    async fn create_connector(
        &self,
        request: &ConnectorCreateRequest,
    ) -> Result<SearchSourceConnector, SubmissionError> {
        let response = with_auth(Request::post(&api_url(CONNECTORS_PATH)))
            .json(request)
            .map_err(|e| SubmissionError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Api {
                status: response.status(),
                detail: error_detail(&body),
            });
        }

        response
            .json::<SearchSourceConnector>()
            .await
            .map_err(|e| SubmissionError::Decode(e.to_string()))
    }
}

/// Загрузить подключения текущего пользователя
pub async fn fetch_connectors() -> Result<Vec<SearchSourceConnector>, String> {
    let response = with_auth(Request::get(&api_url(CONNECTORS_PATH)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_detail(&body).unwrap_or_else(|| format!("HTTP {}", response.status())));
    }

    response
        .json::<Vec<SearchSourceConnector>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
