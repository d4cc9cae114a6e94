//! Block Detail Panel
//!
//! Rename, section creation, and an overview of the block's sections
//! with navigable tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::DeleteConfirmButton;
use crate::commands;
use crate::context::AppContext;
use crate::models::{Block, Project, SelectedContext};
use crate::state::detail::DetailHandlers;
use crate::state::SelectionState;

#[component]
pub fn BlockDetail(
    block: Block,
    project: RwSignal<Option<Project>>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let block_id = block.id;

    let (title_value, set_title_value) = signal(block.title.clone());
    let (new_section_title, set_new_section_title) = signal(String::new());

    let with_tree = move |f: &dyn Fn(&DetailHandlers, &Project)| {
        project.with_untracked(|p| {
            if let Some(p) = p {
                handlers.with_value(|h| f(h, p));
            }
        });
    };

    let save_title = move || {
        let title = title_value.get_untracked().trim().to_string();
        if title.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::rename_block(block_id, &title).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let add_section = move |_| {
        let title = new_section_title.get_untracked().trim().to_string();
        if title.is_empty() {
            return;
        }
        set_new_section_title.set(String::new());
        spawn_local(async move {
            match commands::create_section(block_id, &title).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let delete_block = move || {
        spawn_local(async move {
            match commands::delete_block(block_id).await {
                Ok(()) => {
                    selection.update(|s| s.clear_context());
                    ctx.reload();
                }
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let open_discussion = {
        let title = block.title.clone();
        let localized = block.title_localized.clone().unwrap_or_default();
        move |_| {
            let entity = SelectedContext::Block {
                id: block_id,
                title: title.clone(),
                content: localized.clone(),
            };
            selection.update(|s| s.open_discussion(entity));
        }
    };

    let sections = block.sections.clone();

    view! {
        <div class="block-detail">
            <input
                class="title-input"
                type="text"
                prop:value=title_value
                on:input=move |ev| set_title_value.set(event_target_value(&ev))
                on:change=move |_| save_title()
            />

            <div class="block-sections">
                <For
                    each=move || sections.clone()
                    key=|section| section.id
                    children=move |section| {
                        let section_id = section.id;
                        let tasks = section.tasks.clone();
                        view! {
                            <div class="block-section">
                                <h3
                                    class="section-link"
                                    on:click=move |_| with_tree(
                                        &move |h, p| h.on_select_section(p, section_id),
                                    )
                                >
                                    {section.title.clone()}
                                </h3>
                                <For
                                    each=move || tasks.clone()
                                    key=|task| task.id
                                    children=move |task| {
                                        let task_id = task.id;
                                        view! {
                                            <div
                                                class="block-task-row"
                                                on:click=move |_| with_tree(
                                                    &move |h, p| h.on_select_task_from_block(p, task_id),
                                                )
                                            >
                                                {task.title.clone()}
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                    }
                />
                <div class="add-section-form">
                    <input
                        type="text"
                        placeholder="New section..."
                        prop:value=new_section_title
                        on:input=move |ev| set_new_section_title.set(event_target_value(&ev))
                    />
                    <button on:click=add_section>"Add"</button>
                </div>
            </div>

            <div class="block-actions">
                <button on:click=open_discussion>"Discuss"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt="Delete block?"
                    on_confirm=UnsyncCallback::new(move |_| delete_block())
                />
            </div>
        </div>
    }
}
