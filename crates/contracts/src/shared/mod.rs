pub mod code_keywords;

pub use code_keywords::{CodeKeywords, KeywordChoice};
