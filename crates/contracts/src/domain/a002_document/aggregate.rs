use serde::{Deserialize, Serialize};

/// Документ для просмотра в модальном окне.
///
/// Данными владеет вызывающая сторона; окно просмотра их только читает.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentViewModel {
    pub title: String,
    /// Исходный markdown/текст
    pub content: String,
}

impl DocumentViewModel {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
