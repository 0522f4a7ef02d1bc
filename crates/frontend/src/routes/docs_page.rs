//! Sample documentation page wiring the code blocks and links together.

use crate::shared::code_context::{CodeKeyword, KeywordSelector};
use crate::shared::code_tabs::{CodeTab, CodeTabs};
use crate::shared::smart_link::SmartLink;
use leptos::prelude::*;

fn snippet(code: &'static str) -> ViewFn {
    ViewFn::from(move || view! { <pre><code>{code}</code></pre> })
}

#[component]
pub fn DocsPage() -> impl IntoView {
    let install = vec![
        CodeTab::new(snippet("npm install @acme/sdk")).language("javascript"),
        CodeTab::new(snippet("pip install acme-sdk")).language("python"),
        CodeTab::new(snippet("go get github.com/acme/sdk-go")).language("go"),
    ];

    // no Python pane: stays on its own choice when Python is picked above
    let configure = vec![
        CodeTab::new(snippet("Acme.init({ dsn: DSN });")).language("javascript"),
        CodeTab::new(snippet("acme.Init(acme.Options{Dsn: dsn})")).language("go"),
        CodeTab::new(snippet("ACME_DSN=... ./app")).title("Environment"),
    ];

    let single = vec![CodeTab::new(snippet("dsn: https://key@acme.io/1")).language("yml")];

    view! {
        <article class="docs-page">
            <h1>"Getting Started"</h1>
            <nav class="docs-nav">
                <SmartLink to="/">"Home"</SmartLink>
                <SmartLink to="/docs/getting-started">"Getting Started"</SmartLink>
                <SmartLink href="#install">"Install"</SmartLink>
                <SmartLink href="https://github.com/acme/sdk">"Source"</SmartLink>
            </nav>

            <h2 id="install">"Install"</h2>
            <CodeTabs tabs=install />

            <h2 id="configure">"Configure"</h2>
            <p>
                "Project: " <KeywordSelector group="PROJECT" />
                " DSN: " <CodeKeyword group="PROJECT" field="PUBLIC_DSN" />
            </p>
            <CodeTabs tabs=configure />

            <h2 id="config-file">"Config file"</h2>
            <CodeTabs tabs=single hide_tab_bar=true />
        </article>
    }
}
