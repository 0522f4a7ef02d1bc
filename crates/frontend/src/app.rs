use crate::routes::routes::AppRoutes;
use crate::shared::code_context::api::fetch_code_keywords;
use crate::shared::code_context::use_code_context_state;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One CodeContext per page: shared tab selection and keyword configuration.
    provide_context(use_code_context_state(fetch_code_keywords));

    view! {
        <AppRoutes />
    }
}
