pub mod code_language;

pub use code_language::{display_name_for, CodeLanguage};
