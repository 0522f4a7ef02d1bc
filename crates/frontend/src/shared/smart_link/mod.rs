//! Link that picks the right kind of anchor for its destination.
//!
//! - `https://…` and anything else containing `://`: off-site, opened
//!   in a new tab
//! - `#section`, `page.html` and other non-rooted targets: a plain `<a>`, the
//!   router would mishandle same-page fragments
//! - `/docs/page`: client-side routed link, marked `active` on that route

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    External(String),
    Anchor(String),
    Internal(String),
}

impl LinkTarget {
    /// Classify by syntax only, in fixed order. `to` wins over `href`; empty
    /// strings count as absent.
    pub fn classify(to: &str, href: &str) -> Self {
        let dest = [to, href]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("")
            .to_string();

        if dest.contains("://") {
            LinkTarget::External(dest)
        } else if !dest.starts_with('/') {
            LinkTarget::Anchor(dest)
        } else {
            LinkTarget::Internal(dest)
        }
    }

    pub fn href(&self) -> &str {
        match self {
            LinkTarget::External(s) | LinkTarget::Anchor(s) | LinkTarget::Internal(s) => s,
        }
    }
}

/// Exact route match; a trailing slash and the target's query or fragment are
/// ignored.
pub fn is_active_route(current_path: &str, target: &str) -> bool {
    let target = target
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    normalize_path(current_path) == normalize_path(target)
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn link_class(base: Option<String>, active: bool) -> Option<String> {
    match (base.filter(|c| !c.is_empty()), active) {
        (Some(base), true) => Some(format!("{} active", base)),
        (Some(base), false) => Some(base),
        (None, true) => Some("active".to_string()),
        (None, false) => None,
    }
}

#[component]
pub fn SmartLink(
    /// Destination; takes precedence over `href`
    #[prop(optional, into)]
    to: String,
    #[prop(optional, into)] href: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    match LinkTarget::classify(&to, &href) {
        LinkTarget::External(url) => view! {
            <ExternalLink href=url class=class>{children()}</ExternalLink>
        }
        .into_any(),
        LinkTarget::Anchor(url) => view! {
            <a href=url class=move || class.get()>{children()}</a>
        }
        .into_any(),
        LinkTarget::Internal(path) => view! {
            <RoutedLink to=path class=class>{children()}</RoutedLink>
        }
        .into_any(),
    }
}

/// Off-site link opened in a new tab without access to this page.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || class.get()
            target="_blank"
            rel="noopener noreferrer"
        >
            {children()}
        </a>
    }
}

/// Must be rendered inside a `Router`.
#[component]
fn RoutedLink(
    to: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let location = use_location();
    let target = to.clone();
    let class_name = move || {
        let active = location.pathname.with(|path| is_active_route(path, &target));
        link_class(class.get(), active)
    };

    view! {
        <A href=to attr:class=class_name>{children()}</A>
    }
}
