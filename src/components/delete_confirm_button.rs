//! Delete Confirm Button Component
//!
//! Two-step inline delete: the button arms on first click and shows an
//! entity-specific prompt with confirm/cancel; confirming disarms it
//! again so a reused panel does not stay in the armed state.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Prompt shown while armed, e.g. "Delete task?"
    #[prop(into, optional)] prompt: String,
    on_confirm: UnsyncCallback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = if prompt.is_empty() {
        "Delete?".to_string()
    } else {
        prompt
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let class = button_class.clone();
                view! {
                    <button
                        class=class
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
