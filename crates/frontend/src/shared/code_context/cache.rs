//! Page-lifetime cache for the code keyword configuration.
//!
//! The configuration is fetched at most once per page load. Every consumer
//! that shows up before the fetch resolves registers a waiter and is notified
//! when it does; later consumers read the cached value directly. Nothing is
//! ever invalidated, and a failed fetch is not retried.

use contracts::shared::CodeKeywords;
use std::cell::RefCell;
use std::sync::Arc;

type Waiter = Box<dyn FnOnce(Arc<CodeKeywords>)>;

enum CacheState {
    Empty,
    Requested(Vec<Waiter>),
    Ready(Arc<CodeKeywords>),
    Failed,
}

thread_local! {
    static CACHE: RefCell<CacheState> = const { RefCell::new(CacheState::Empty) };
}

/// Outcome of [`KeywordCache::request`].
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// Already loaded; the waiter was not kept.
    Ready(Arc<CodeKeywords>),
    /// First request on this page: the caller must start the fetch.
    Fetch,
    /// A fetch is already under way; the waiter will be called.
    Pending,
    /// The fetch failed earlier on this page; the waiter was not kept.
    Failed,
}

pub struct KeywordCache;

impl KeywordCache {
    pub fn get() -> Option<Arc<CodeKeywords>> {
        CACHE.with(|cache| match &*cache.borrow() {
            CacheState::Ready(value) => Some(Arc::clone(value)),
            _ => None,
        })
    }

    pub fn request(waiter: impl FnOnce(Arc<CodeKeywords>) + 'static) -> CacheLookup {
        CACHE.with(|cache| {
            let mut state = cache.borrow_mut();
            match &mut *state {
                CacheState::Ready(value) => CacheLookup::Ready(Arc::clone(value)),
                CacheState::Failed => CacheLookup::Failed,
                CacheState::Requested(waiters) => {
                    waiters.push(Box::new(waiter));
                    CacheLookup::Pending
                }
                CacheState::Empty => {
                    *state = CacheState::Requested(vec![Box::new(waiter)]);
                    CacheLookup::Fetch
                }
            }
        })
    }

    /// Store the fetched configuration and notify waiters. A second fill is
    /// ignored and the first value is returned.
    pub fn fill(value: CodeKeywords) -> Arc<CodeKeywords> {
        let (value, waiters) = CACHE.with(|cache| {
            let mut state = cache.borrow_mut();
            if let CacheState::Ready(existing) = &*state {
                return (Arc::clone(existing), Vec::new());
            }
            let value = Arc::new(value);
            let previous = std::mem::replace(&mut *state, CacheState::Ready(Arc::clone(&value)));
            let waiters = match previous {
                CacheState::Requested(waiters) => waiters,
                _ => Vec::new(),
            };
            (value, waiters)
        });

        // outside the borrow: waiters may read the cache
        for waiter in waiters {
            waiter(Arc::clone(&value));
        }
        value
    }

    /// Record a failed fetch and drop the waiters. Ignored once filled.
    pub fn fail() {
        CACHE.with(|cache| {
            let mut state = cache.borrow_mut();
            if !matches!(*state, CacheState::Ready(_)) {
                *state = CacheState::Failed;
            }
        });
    }

    pub fn reset() {
        CACHE.with(|cache| *cache.borrow_mut() = CacheState::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn keywords(title: &str) -> CodeKeywords {
        serde_json::from_value(serde_json::json!({
            "PROJECT": [{ "title": title }]
        }))
        .unwrap()
    }

    #[test]
    fn test_only_first_request_fetches() {
        KeywordCache::reset();
        assert_eq!(KeywordCache::request(|_| {}), CacheLookup::Fetch);
        assert_eq!(KeywordCache::request(|_| {}), CacheLookup::Pending);
        assert_eq!(KeywordCache::request(|_| {}), CacheLookup::Pending);
        assert!(KeywordCache::get().is_none());
    }

    #[test]
    fn test_fill_notifies_every_waiter() {
        KeywordCache::reset();
        let notified = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let notified = Rc::clone(&notified);
            KeywordCache::request(move |value| {
                assert_eq!(value.groups["PROJECT"][0].title, "backend");
                notified.set(notified.get() + 1);
            });
        }

        KeywordCache::fill(keywords("backend"));
        assert_eq!(notified.get(), 3);
        assert_eq!(KeywordCache::get().as_deref(), Some(&keywords("backend")));
    }

    #[test]
    fn test_later_consumers_read_cache() {
        KeywordCache::reset();
        KeywordCache::request(|_| {});
        KeywordCache::fill(keywords("backend"));

        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let lookup = KeywordCache::request(move |_| flag.set(true));
        assert_eq!(lookup, CacheLookup::Ready(Arc::new(keywords("backend"))));
        assert!(!called.get());
    }

    #[test]
    fn test_cache_is_immutable_once_filled() {
        KeywordCache::reset();
        KeywordCache::fill(keywords("first"));
        let kept = KeywordCache::fill(keywords("second"));
        assert_eq!(kept.groups["PROJECT"][0].title, "first");
    }

    #[test]
    fn test_waiter_may_read_cache() {
        KeywordCache::reset();
        let seen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&seen);
        KeywordCache::request(move |_| flag.set(KeywordCache::get().is_some()));
        KeywordCache::fill(keywords("backend"));
        assert!(seen.get());
    }

    #[test]
    fn test_failure_drops_waiters_and_is_final() {
        KeywordCache::reset();
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        assert_eq!(KeywordCache::request(move |_| flag.set(true)), CacheLookup::Fetch);

        KeywordCache::fail();
        assert_eq!(KeywordCache::request(|_| {}), CacheLookup::Failed);
        assert_eq!(KeywordCache::request(|_| {}), CacheLookup::Failed);
        assert!(KeywordCache::get().is_none());
        assert!(!called.get());
    }

    #[test]
    fn test_fail_after_fill_keeps_value() {
        KeywordCache::reset();
        KeywordCache::fill(keywords("backend"));
        KeywordCache::fail();
        assert!(KeywordCache::get().is_some());
    }

    #[test]
    fn test_reset_returns_to_empty() {
        KeywordCache::reset();
        KeywordCache::fill(keywords("backend"));
        KeywordCache::reset();
        assert!(KeywordCache::get().is_none());
        assert_eq!(KeywordCache::request(|_| {}), CacheLookup::Fetch);
    }
}
