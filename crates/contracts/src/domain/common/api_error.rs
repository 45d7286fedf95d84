use serde::{Deserialize, Serialize};

/// Тело ответа с ошибкой.
///
/// Сервис может вернуть человекочитаемый текст либо в `message`, либо в `error`,
/// либо не вернуть ничего.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Текст ошибки: сначала `message`, затем `error`. Пустые строки не считаются.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.filter(|e| !e.trim().is_empty()))
    }
}
