use super::docs_page::DocsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="docs-main">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=DocsPage />
                    <Route path=path!("/docs/:slug") view=DocsPage />
                </Routes>
            </main>
        </Router>
    }
}
