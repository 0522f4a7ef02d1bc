use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Конфигурация ключевых слов для code-блоков.
///
/// Группа (например `PROJECT`) содержит упорядоченный список вариантов,
/// пользователь выбирает один из них на всю страницу.
///
/// ```json
/// { "PROJECT": [ { "title": "backend", "PUBLIC_DSN": "https://key@host/1", "PROJECT_ID": 1 } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeKeywords {
    pub groups: BTreeMap<String, Vec<KeywordChoice>>,
}

/// Вариант внутри группы ключевых слов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordChoice {
    pub title: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl KeywordChoice {
    /// Значение поля как текст: строки без кавычек, остальное через JSON
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

impl CodeKeywords {
    pub fn group(&self, name: &str) -> Option<&[KeywordChoice]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Выбранный вариант группы; индекс вне диапазона даёт первый вариант
    pub fn choice(&self, group: &str, index: usize) -> Option<&KeywordChoice> {
        let choices = self.group(group)?;
        choices.get(index).or_else(|| choices.first())
    }

    /// Значение поля выбранного варианта
    pub fn value(&self, group: &str, index: usize, field: &str) -> Option<String> {
        self.choice(group, index)?.field(field)
    }
}
