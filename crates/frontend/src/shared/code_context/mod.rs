//! Page-wide state shared by code blocks: the selected tab label, the keyword
//! configuration and the chosen entry per keyword group.

pub mod api;
pub mod cache;

use cache::{CacheLookup, KeywordCache};
use contracts::shared::CodeKeywords;
use leptos::prelude::*;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct CodeContext {
    /// `None` until the configuration has loaded (or forever, if it fails)
    pub keywords: RwSignal<Option<Arc<CodeKeywords>>>,
    /// Label last picked in any tab group on the page
    pub shared_selection: RwSignal<Option<String>>,
    /// Chosen entry index per keyword group
    pub keyword_selection: RwSignal<HashMap<String, usize>>,
}

impl CodeContext {
    pub fn new() -> Self {
        Self {
            keywords: RwSignal::new(None),
            shared_selection: RwSignal::new(None),
            keyword_selection: RwSignal::new(HashMap::new()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.keywords.with(Option::is_none)
    }

    pub fn selected_keyword(&self, group: &str) -> usize {
        self.keyword_selection
            .with(|selection| selection.get(group).copied().unwrap_or(0))
    }

    pub fn select_keyword(&self, group: &str, index: usize) {
        self.keyword_selection.update(|selection| {
            selection.insert(group.to_string(), index);
        });
    }

    pub fn keyword_value(&self, group: &str, field: &str) -> Option<String> {
        let index = self.selected_keyword(group);
        self.keywords
            .with(|keywords| keywords.as_ref()?.value(group, index, field))
    }
}

impl Default for CodeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the context for a page and make sure the keyword configuration is
/// fetched, at most once per page load.
///
/// A failed fetch is logged and not retried; consumers keep seeing `None`.
pub fn use_code_context_state<F, Fut>(fetcher: F) -> CodeContext
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<CodeKeywords, String>> + 'static,
{
    let ctx = CodeContext::new();
    let keywords = ctx.keywords;

    // the page may tear this context down before the fetch resolves
    let lookup = KeywordCache::request(move |value| {
        let _ = keywords.try_set(Some(value));
    });

    match lookup {
        CacheLookup::Ready(value) => keywords.set(Some(value)),
        CacheLookup::Pending | CacheLookup::Failed => {}
        CacheLookup::Fetch => {
            leptos::task::spawn_local(async move {
                match fetcher().await {
                    Ok(value) => {
                        log::debug!("code keywords loaded: {} groups", value.groups.len());
                        KeywordCache::fill(value);
                    }
                    Err(e) => {
                        log::warn!("failed to load code keywords: {}", e);
                        KeywordCache::fail();
                    }
                }
            });
        }
    }

    ctx
}

/// The page's [`CodeContext`], or a detached one if none was provided.
pub fn use_code_context() -> CodeContext {
    use_context::<CodeContext>().unwrap_or_else(|| {
        log::warn!("CodeContext not provided; code blocks will not stay in sync");
        let ctx = CodeContext::new();
        provide_context(ctx);
        ctx
    })
}

/// Value of `field` in the chosen entry of `group`, or a `___FIELD___`
/// placeholder until the configuration is available.
#[component]
pub fn CodeKeyword(
    #[prop(into)] group: String,
    #[prop(into)] field: String,
) -> impl IntoView {
    let ctx = use_code_context();
    let placeholder = format!("___{}___", field);

    view! {
        <span class="code-keyword">
            {move || ctx.keyword_value(&group, &field).unwrap_or_else(|| placeholder.clone())}
        </span>
    }
}

/// Dropdown switching the chosen entry of a keyword group for the whole page.
#[component]
pub fn KeywordSelector(#[prop(into)] group: String) -> impl IntoView {
    let ctx = use_code_context();
    let titles = {
        let group = group.clone();
        move || {
            ctx.keywords.with(|keywords| {
                keywords
                    .as_ref()
                    .and_then(|k| k.group(&group))
                    .map(|choices| choices.iter().map(|c| c.title.clone()).collect::<Vec<_>>())
                    .unwrap_or_default()
            })
        }
    };
    let selected = {
        let group = group.clone();
        move || ctx.selected_keyword(&group)
    };

    view! {
        <Show when=move || !ctx.is_loading()>
            <select
                class="keyword-selector"
                on:change={
                    let group = group.clone();
                    move |ev: leptos::ev::Event| {
                        if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                            ctx.select_keyword(&group, index);
                        }
                    }
                }
            >
                {titles()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, title)| {
                        let selected = selected.clone();
                        view! {
                            <option value=idx.to_string() prop:selected=move || selected() == idx>
                                {title}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::cell::Cell;
    use std::rc::Rc;

    fn keywords() -> CodeKeywords {
        serde_json::from_value(serde_json::json!({
            "PROJECT": [
                { "title": "backend", "PUBLIC_DSN": "https://abc@o1.ingest/1" },
                { "title": "frontend", "PUBLIC_DSN": "https://def@o1.ingest/2" }
            ]
        }))
        .unwrap()
    }

    fn counting_fetcher(
        calls: &Rc<Cell<usize>>,
        result: Result<CodeKeywords, String>,
    ) -> impl FnOnce() -> std::future::Ready<Result<CodeKeywords, String>> + 'static {
        let calls = Rc::clone(calls);
        move || {
            calls.set(calls.get() + 1);
            std::future::ready(result)
        }
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_consumers_share_a_single_fetch() {
        _ = Executor::init_tokio();
        KeywordCache::reset();
        tokio::task::LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();
                let calls = Rc::new(Cell::new(0));

                let first = use_code_context_state(counting_fetcher(&calls, Ok(keywords())));
                let second = use_code_context_state(counting_fetcher(&calls, Ok(keywords())));
                assert!(first.is_loading());
                assert!(second.is_loading());

                settle().await;
                assert_eq!(calls.get(), 1);
                assert_eq!(first.keywords.get_untracked().as_deref(), Some(&keywords()));
                assert_eq!(second.keywords.get_untracked().as_deref(), Some(&keywords()));

                // mounted after the fetch resolved: served from the cache
                let third = use_code_context_state(counting_fetcher(&calls, Ok(keywords())));
                assert!(!third.is_loading());
                settle().await;
                assert_eq!(calls.get(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_every_context_empty() {
        _ = Executor::init_tokio();
        KeywordCache::reset();
        tokio::task::LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();
                let calls = Rc::new(Cell::new(0));

                let first =
                    use_code_context_state(counting_fetcher(&calls, Err("HTTP error: 500".into())));
                let second = use_code_context_state(counting_fetcher(&calls, Ok(keywords())));
                settle().await;

                let third = use_code_context_state(counting_fetcher(&calls, Ok(keywords())));
                settle().await;

                assert_eq!(calls.get(), 1);
                for ctx in [first, second, third] {
                    assert!(ctx.is_loading());
                    assert_eq!(ctx.keyword_value("PROJECT", "PUBLIC_DSN"), None);
                }
            })
            .await;
    }

    #[test]
    fn test_keyword_selection_is_per_group() {
        let owner = Owner::new();
        owner.set();
        let ctx = CodeContext::new();
        ctx.keywords.set(Some(Arc::new(keywords())));

        assert_eq!(
            ctx.keyword_value("PROJECT", "PUBLIC_DSN").as_deref(),
            Some("https://abc@o1.ingest/1")
        );
        ctx.select_keyword("PROJECT", 1);
        assert_eq!(ctx.selected_keyword("PROJECT"), 1);
        assert_eq!(ctx.selected_keyword("ORG"), 0);
        assert_eq!(
            ctx.keyword_value("PROJECT", "PUBLIC_DSN").as_deref(),
            Some("https://def@o1.ingest/2")
        );
    }
}
