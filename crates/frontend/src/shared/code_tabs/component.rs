use super::labels::{sort_items, tab_labels, TabItem};
use super::scroll::{capture, restore_after_layout, ScrollAnchor};
use super::selection::{reconcile_local, resolve_selection};
use crate::shared::code_context::use_code_context;
use leptos::html::Div;
use leptos::prelude::*;

/// A pane as passed to [`CodeTabs`].
pub type CodeTab = TabItem<ViewFn>;

/// Tabbed code block whose selection follows the page-wide choice when it
/// can, and otherwise stays on its own.
///
/// ```ignore
/// view! {
///     <CodeTabs tabs=vec![
///         CodeTab::new(ViewFn::from(|| view! { <pre>"npm i"</pre> })).language("bash").title("npm"),
///         CodeTab::new(ViewFn::from(|| view! { <pre>"yarn add"</pre> })).language("bash").title("Yarn"),
///     ] />
/// }
/// ```
#[component]
pub fn CodeTabs(
    /// Panes in any order; they are displayed sorted
    tabs: Vec<CodeTab>,
    /// Hide the tab bar (useful for a single pane)
    #[prop(optional)]
    hide_tab_bar: bool,
) -> impl IntoView {
    let mut tabs = tabs;
    sort_items(&mut tabs);
    let labels = tab_labels(&tabs);
    let contents: Vec<ViewFn> = tabs.into_iter().map(|t| t.content).collect();

    let ctx = use_code_context();
    let shared = ctx.shared_selection;
    let local = RwSignal::new(None::<String>);
    let anchor = StoredValue::new(ScrollAnchor::Idle);
    let tab_bar_ref = NodeRef::<Div>::new();

    let selection = Memo::new({
        let labels = labels.clone();
        move |_| {
            resolve_selection(
                shared.get().as_deref(),
                local.get().as_deref(),
                &labels,
            )
        }
    });

    // Keep the stored local choice equal to what is shown, so a later shared
    // selection this group cannot show leaves it where it was.
    Effect::new(move |_| {
        let effective = selection.get();
        local.update_untracked(|l| {
            reconcile_local(l, effective.as_deref());
        });
    });

    let select = move |label: String| {
        capture(anchor, tab_bar_ref);
        log::debug!("code tabs: selected {:?}", label);
        shared.set(Some(label.clone()));
        local.set(Some(label));
        // every group re-renders before the next frame
        restore_after_layout(anchor, tab_bar_ref);
    };

    let buttons = labels
        .iter()
        .cloned()
        .map(|label| {
            let is_active = {
                let label = label.clone();
                move || selection.get().as_deref() == Some(label.as_str())
            };
            let on_click = {
                let label = label.clone();
                move |_: leptos::ev::MouseEvent| select(label.clone())
            };
            view! {
                <button
                    class=move || if is_active() { "active" } else { "" }
                    on:click=on_click
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let content = move || {
        selection
            .get()
            .and_then(|selected| labels.iter().position(|l| *l == selected))
            .and_then(|idx| contents.get(idx))
            .map(|view_fn| view_fn.run())
    };

    view! {
        <div class="code-tabs" node_ref=tab_bar_ref>
            {(!hide_tab_bar).then(|| view! { <div class="tab-bar">{buttons}</div> })}
            <div class="tab-content">{content}</div>
        </div>
    }
}
