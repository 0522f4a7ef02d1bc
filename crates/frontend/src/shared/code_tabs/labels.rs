//! Ordering and labeling of the panes inside one tab group.

use contracts::enums::display_name_for;
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Label used when a pane has neither a title nor a language.
pub const FALLBACK_LABEL: &str = "Text";

/// One pane of a tab group.
///
/// `content` is opaque here: the component stores a view factory, tests store
/// whatever is convenient.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem<C> {
    pub language: Option<String>,
    pub title: Option<String>,
    pub content: C,
}

impl<C> TabItem<C> {
    pub fn new(content: C) -> Self {
        Self {
            language: None,
            title: None,
            content,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn language_code(&self) -> Option<&str> {
        self.language.as_deref().filter(|s| !s.is_empty())
    }

    fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }

    /// `language-or-"_"` + `-` + `title-or-empty`, compared with [`compare_keys`].
    pub fn sort_key(&self) -> String {
        format!(
            "{}-{}",
            self.language_code().unwrap_or("_"),
            self.explicit_title().unwrap_or("")
        )
    }

    /// Label before duplicate disambiguation.
    pub fn display_label(&self) -> String {
        if let Some(title) = self.explicit_title() {
            return title.to_string();
        }
        match self.language_code() {
            Some(code) => display_name_for(code)
                .map(str::to_string)
                .unwrap_or_else(|| capitalize(code)),
            None => FALLBACK_LABEL.to_string(),
        }
    }
}

fn capitalize(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

thread_local! {
    // English collation at base letters only: case and accents are ignored,
    // punctuation ranks before digits and letters.
    static KEY_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        Collator::try_new(&locale!("en").into(), options)
            .map_err(|e| log::warn!("en collator unavailable, sorting tabs by code point: {:?}", e))
            .ok()
    };
}

/// Locale-aware, case- and accent-insensitive comparison of sort keys.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    KEY_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

/// Stable sort by [`TabItem::sort_key`] under [`compare_keys`].
pub fn sort_items<C>(items: &mut [TabItem<C>]) {
    items.sort_by(|a, b| compare_keys(&a.sort_key(), &b.sort_key()));
}

/// Suffix every occurrence of a repeated label with ` N`, counting from 1 in
/// the order the labels appear. Unique labels are left alone.
pub fn disambiguate(labels: Vec<String>) -> Vec<String> {
    let mut totals: HashMap<String, usize> = HashMap::new();
    for label in &labels {
        *totals.entry(label.clone()).or_default() += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    labels
        .into_iter()
        .map(|label| {
            if totals.get(&label).copied().unwrap_or(0) > 1 {
                let n = seen.entry(label.clone()).or_default();
                *n += 1;
                format!("{} {}", label, n)
            } else {
                label
            }
        })
        .collect()
}

/// Final labels for already sorted items, index-aligned with them.
pub fn tab_labels<C>(items: &[TabItem<C>]) -> Vec<String> {
    disambiguate(items.iter().map(TabItem::display_label).collect())
}
