use crate::shared::validation::{ValidationErrors, ValidationRules};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// Enums
// ============================================================================

/// Типы подключаемых поисковых источников
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorType {
    #[serde(rename = "SERPER_API")]
    SerperApi,
}

impl Default for ConnectorType {
    fn default() -> Self {
        Self::SerperApi
    }
}

impl ConnectorType {
    /// Тег типа, как его ожидает backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SerperApi => "SERPER_API",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SerperApi => "Serper API",
        }
    }

    /// Ключ в `config`, под которым хранится секрет провайдера
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::SerperApi => "SERPER_API_KEY",
        }
    }

    /// Имя подключения, предлагаемое в новой форме
    pub fn default_connector_name(&self) -> String {
        format!("{} Connector", self.display_name())
    }

    /// Поисковые API не индексируются, их опрашивают на лету
    pub fn is_indexable(&self) -> bool {
        match self {
            Self::SerperApi => false,
        }
    }
}

// ============================================================================
// Draft (form state)
// ============================================================================

pub const FIELD_NAME: &str = "name";
pub const FIELD_API_KEY: &str = "api_key";

/// Пробелы считаются символами имени
const NAME_RULES: ValidationRules = ValidationRules::none()
    .min_length(3)
    .with_message("Connector name must be at least 3 characters.");

const API_KEY_RULES: ValidationRules = ValidationRules::none()
    .min_length(10)
    .with_message("API key is required and must be valid.");

/// Введённые пользователем, ещё не проверенные данные подключения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDraft {
    pub name: String,
    pub api_key: String,
}

impl ConnectorDraft {
    pub fn new(name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
        }
    }

    /// Пустая форма для указанного типа подключения
    pub fn for_type(connector_type: ConnectorType) -> Self {
        Self::new(connector_type.default_connector_name(), "")
    }

    /// Проверить все поля; ошибки собираются по каждому полю
    pub fn validate(&self) -> Result<ValidatedDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(FIELD_NAME, "Connector name", &self.name, NAME_RULES);
        errors.check(FIELD_API_KEY, "API key", &self.api_key, API_KEY_RULES);
        errors.into_result()?;

        Ok(ValidatedDraft {
            name: self.name.clone(),
            api_key: self.api_key.clone(),
        })
    }
}

impl Default for ConnectorDraft {
    fn default() -> Self {
        Self::for_type(ConnectorType::default())
    }
}

/// Черновик, прошедший валидацию. Создаётся только через [`ConnectorDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    name: String,
    api_key: String,
}

impl ValidatedDraft {
    /// Собрать запрос на создание подключения
    pub fn into_request(self, connector_type: ConnectorType) -> ConnectorCreateRequest {
        let mut config = BTreeMap::new();
        config.insert(connector_type.config_key().to_string(), self.api_key);

        ConnectorCreateRequest {
            name: self.name,
            connector_type,
            config,
            is_indexable: connector_type.is_indexable(),
            last_indexed_at: None,
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Тело запроса `POST /api/v1/search-source-connectors/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorCreateRequest {
    pub name: String,
    pub connector_type: ConnectorType,
    pub config: BTreeMap<String, String>,
    pub is_indexable: bool,
    pub last_indexed_at: Option<DateTime<Utc>>,
}

/// Подключение, как его возвращает backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSourceConnector {
    pub id: i64,
    pub name: String,
    pub connector_type: ConnectorType,
    #[serde(default)]
    pub is_indexable: bool,
    #[serde(default)]
    pub last_indexed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub config: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl SearchSourceConnector {
    /// Краткое описание в markdown без секретов из `config`
    pub fn summary_markdown(&self) -> String {
        let mut md = format!(
            "## {}\n\n- **Type:** {}\n- **Indexable:** {}\n",
            self.name,
            self.connector_type.display_name(),
            if self.is_indexable { "yes" } else { "no" },
        );
        match self.last_indexed_at {
            Some(ts) => md.push_str(&format!(
                "- **Last indexed:** {}\n",
                ts.format("%Y-%m-%d %H:%M UTC")
            )),
            None => md.push_str("- **Last indexed:** never\n"),
        }
        if let Some(created) = self.created_at {
            md.push_str(&format!(
                "- **Created:** {}\n",
                created.format("%Y-%m-%d %H:%M UTC")
            ));
        }
        if !self.config.is_empty() {
            md.push_str("\n### Configured keys\n\n");
            for key in self.config.keys() {
                md.push_str(&format!("- `{}`\n", key));
            }
        }
        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_draft() {
        let draft = ConnectorDraft::default();
        assert_eq!(draft.name, "Serper API Connector");
        assert_eq!(draft.api_key, "");
    }

    #[test]
    fn test_short_names_rejected() {
        for name in ["", "a", "ab", "  ", "юя"] {
            let errors = ConnectorDraft::new(name, "abcdefghij")
                .validate()
                .unwrap_err();
            assert_eq!(
                errors.for_field(FIELD_NAME),
                Some("Connector name must be at least 3 characters.")
            );
            assert_eq!(errors.for_field(FIELD_API_KEY), None);
        }
    }

    #[test]
    fn test_name_length_counts_whitespace() {
        for name in ["   ", "abc", " a "] {
            let validated = ConnectorDraft::new(name, "abcdefghij").validate();
            assert!(validated.is_ok(), "name {:?} must be accepted", name);
        }
    }

    #[test]
    fn test_short_keys_rejected() {
        for key in ["", "abc", "abcdefghi"] {
            let errors = ConnectorDraft::new("My Connector", key)
                .validate()
                .unwrap_err();
            assert_eq!(
                errors.for_field(FIELD_API_KEY),
                Some("API key is required and must be valid.")
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_both_fields_reported() {
        let errors = ConnectorDraft::new("x", "y").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_valid_draft_builds_request() {
        let request = ConnectorDraft::new("My Connector", "abcdefghij")
            .validate()
            .unwrap()
            .into_request(ConnectorType::SerperApi);

        assert_eq!(request.name, "My Connector");
        assert_eq!(request.connector_type, ConnectorType::SerperApi);
        assert_eq!(
            request.config.get("SERPER_API_KEY").map(String::as_str),
            Some("abcdefghij")
        );
        assert_eq!(request.config.len(), 1);
        assert!(!request.is_indexable);
        assert!(request.last_indexed_at.is_none());
    }

    #[test]
    fn test_request_wire_format() {
        let request = ConnectorDraft::new("My Connector", "abcdefghij")
            .validate()
            .unwrap()
            .into_request(ConnectorType::SerperApi);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "My Connector",
                "connector_type": "SERPER_API",
                "config": { "SERPER_API_KEY": "abcdefghij" },
                "is_indexable": false,
                "last_indexed_at": null
            })
        );
    }

    #[test]
    fn test_connector_deserialize_minimal() {
        let connector: SearchSourceConnector = serde_json::from_str(
            r#"{"id": 7, "name": "Serper", "connector_type": "SERPER_API"}"#,
        )
        .unwrap();
        assert_eq!(connector.id, 7);
        assert!(connector.config.is_empty());
        assert!(connector.user_id.is_none());
    }

    #[test]
    fn test_summary_hides_secrets() {
        let mut config = BTreeMap::new();
        config.insert(
            "SERPER_API_KEY".to_string(),
            serde_json::Value::String("super-secret-key".into()),
        );
        let connector = SearchSourceConnector {
            id: 1,
            name: "Web search".into(),
            connector_type: ConnectorType::SerperApi,
            is_indexable: false,
            last_indexed_at: None,
            config,
            user_id: None,
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 0).unwrap()),
        };

        let md = connector.summary_markdown();
        assert!(md.starts_with("## Web search\n"));
        assert!(md.contains("- **Type:** Serper API"));
        assert!(md.contains("- **Last indexed:** never"));
        assert!(md.contains("- **Created:** 2024-03-15 14:02 UTC"));
        assert!(md.contains("`SERPER_API_KEY`"));
        assert!(!md.contains("super-secret-key"));
    }
}
