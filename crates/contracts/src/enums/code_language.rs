use serde::{Deserialize, Serialize};

/// Языки code-блоков, для которых есть человекочитаемое название.
///
/// Коды, которых нет в таблице, отображаются как есть с заглавной буквы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeLanguage {
    JavaScript,
    TypeScript,
    Html,
    CoffeeScript,
    PowerShell,
    Json,
    Cpp,
    CSharp,
    Es6,
    Yaml,
}

impl CodeLanguage {
    /// Каноничный код языка
    pub fn code(&self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::TypeScript => "typescript",
            CodeLanguage::Html => "html",
            CodeLanguage::CoffeeScript => "coffee",
            CodeLanguage::PowerShell => "powershell",
            CodeLanguage::Json => "json",
            CodeLanguage::Cpp => "cpp",
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Es6 => "es6",
            CodeLanguage::Yaml => "yaml",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "JavaScript",
            CodeLanguage::TypeScript => "TypeScript",
            CodeLanguage::Html => "HTML",
            CodeLanguage::CoffeeScript => "CoffeeScript",
            CodeLanguage::PowerShell => "PowerShell",
            CodeLanguage::Json => "JSON",
            CodeLanguage::Cpp => "C++",
            CodeLanguage::CSharp => "C#",
            CodeLanguage::Es6 => "JavaScript (ES6)",
            CodeLanguage::Yaml => "YAML",
        }
    }

    /// Получить все языки таблицы
    pub fn all() -> Vec<CodeLanguage> {
        vec![
            CodeLanguage::JavaScript,
            CodeLanguage::TypeScript,
            CodeLanguage::Html,
            CodeLanguage::CoffeeScript,
            CodeLanguage::PowerShell,
            CodeLanguage::Json,
            CodeLanguage::Cpp,
            CodeLanguage::CSharp,
            CodeLanguage::Es6,
            CodeLanguage::Yaml,
        ]
    }

    /// Парсинг из кода (с учётом алиасов `js` и `yml`), регистр важен
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "javascript" | "js" => Some(CodeLanguage::JavaScript),
            "typescript" => Some(CodeLanguage::TypeScript),
            "html" => Some(CodeLanguage::Html),
            "coffee" => Some(CodeLanguage::CoffeeScript),
            "powershell" => Some(CodeLanguage::PowerShell),
            "json" => Some(CodeLanguage::Json),
            "cpp" => Some(CodeLanguage::Cpp),
            "csharp" => Some(CodeLanguage::CSharp),
            "es6" => Some(CodeLanguage::Es6),
            "yml" | "yaml" => Some(CodeLanguage::Yaml),
            _ => None,
        }
    }
}

/// Название языка из таблицы, `None` для неизвестного кода
pub fn display_name_for(code: &str) -> Option<&'static str> {
    CodeLanguage::from_code(code).map(|lang| lang.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(display_name_for("javascript"), Some("JavaScript"));
        assert_eq!(display_name_for("cpp"), Some("C++"));
        assert_eq!(display_name_for("csharp"), Some("C#"));
        assert_eq!(display_name_for("es6"), Some("JavaScript (ES6)"));
        assert_eq!(display_name_for("coffee"), Some("CoffeeScript"));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(display_name_for("js"), Some("JavaScript"));
        assert_eq!(display_name_for("yml"), Some("YAML"));
        assert_eq!(display_name_for("yaml"), Some("YAML"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(display_name_for("python"), None);
        assert_eq!(display_name_for("JSON"), None);
        assert_eq!(display_name_for(""), None);
    }

    #[test]
    fn test_code_round_trips_through_table() {
        for lang in CodeLanguage::all() {
            assert_eq!(CodeLanguage::from_code(lang.code()), Some(lang));
        }
    }
}
