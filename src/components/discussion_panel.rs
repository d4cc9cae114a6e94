//! Discussion Panel
//!
//! Third column showing the entity staged for discussion. The chat
//! backend itself lives elsewhere; this panel presents the subject and
//! its rendered content.

use leptos::prelude::*;

use crate::state::SelectionState;

#[component]
pub fn DiscussionPanel(selection: RwSignal<SelectionState, LocalStorage>) -> impl IntoView {
    let entity = move || selection.with(|s| s.discussion().cloned());

    view! {
        <Show when=move || entity().is_some()>
            <aside class="discussion-panel">
                {move || {
                    entity()
                        .map(|e| {
                            let content = e.content().to_string();
                            view! {
                                <header class="discussion-header">
                                    <span class="discussion-kind">{e.kind_label()}</span>
                                    <span class="discussion-title">{e.title().to_string()}</span>
                                    <button
                                        class="close-btn"
                                        on:click=move |_| selection.update(|s| s.close_discussion())
                                    >
                                        "×"
                                    </button>
                                </header>
                                <div class="discussion-content" inner_html=content></div>
                            }
                            .into_any()
                        })
                        .unwrap_or_else(|| view! { <span></span> }.into_any())
                }}
            </aside>
        </Show>
    }
}
