//! Section Detail Panel
//!
//! Rename, notes, child task list, task creation, and the merge/convert
//! actions that stage a dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::DeleteConfirmButton;
use crate::commands;
use crate::context::AppContext;
use crate::markdown;
use crate::models::{Project, Section, SelectedContext};
use crate::state::detail::DetailHandlers;
use crate::state::SelectionState;

#[component]
pub fn SectionDetail(
    section: Section,
    project: RwSignal<Option<Project>>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let section_id = section.id;

    let (title_value, set_title_value) = signal(section.title.clone());
    let (notes_value, set_notes_value) = signal(section.notes.clone().unwrap_or_default());
    let (new_task_title, set_new_task_title) = signal(String::new());
    let rendered_notes = move || markdown::render_notes(&notes_value.get());

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
            match commands::update_section(section_id, Some(&title), None).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let save_notes = move |_| {
        let notes = notes_value.get_untracked();
        spawn_local(async move {
            match commands::update_section(section_id, None, Some(&notes)).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let add_task = move |_| {
        let title = new_task_title.get_untracked().trim().to_string();
        if title.is_empty() {
            return;
        }
        set_new_task_title.set(String::new());
        spawn_local(async move {
            let args = commands::CreateTaskArgs {
                section_id,
                title: &title,
                priority: None,
            };
            match commands::create_task(&args).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let delete_section = move || {
        spawn_local(async move {
            match commands::delete_section(section_id).await {
                Ok(()) => {
                    selection.update(|s| s.clear_context());
                    ctx.reload();
                }
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let open_discussion = {
        let title = section.title.clone();
        let notes = section.notes.clone().unwrap_or_default();
        move |_| {
            let entity = SelectedContext::Section {
                id: section_id,
                title: title.clone(),
                content: markdown::render_notes(&notes),
            };
            selection.update(|s| s.open_discussion(entity));
        }
    };

    let tasks = section.tasks.clone();

    view! {
        <div class="section-detail">
            <input
                class="title-input"
                type="text"
                prop:value=title_value
                on:input=move |ev| set_title_value.set(event_target_value(&ev))
                on:change=move |_| save_title()
            />

            <textarea
                class="notes-editor"
                prop:value=notes_value
                on:input=move |ev| set_notes_value.set(event_target_value(&ev))
            ></textarea>
            <button on:click=save_notes>"Save notes"</button>
            <div class="notes-preview" inner_html=rendered_notes></div>

            <div class="section-tasks">
                <h3>"Tasks"</h3>
                <For
                    each=move || tasks.clone()
                    key=|task| task.id
                    children=move |task| {
                        let task_id = task.id;
                        view! {
                            <div
                                class="section-task-row"
                                on:click=move |_| with_tree(
                                    &move |h, p| h.on_select_task(p, task_id),
                                )
                            >
                                <span>{task.title.clone()}</span>
                                <span class="status-label">{task.status.label()}</span>
                            </div>
                        }
                    }
                />
                <div class="add-task-form">
                    <input
                        type="text"
                        placeholder="New task..."
                        prop:value=new_task_title
                        on:input=move |ev| set_new_task_title.set(event_target_value(&ev))
                    />
                    <button on:click=add_task>"Add"</button>
                </div>
            </div>

            <div class="section-actions">
                <button on:click=move |_| with_tree(&move |h, p| h.on_merge_tasks(p, section_id))>
                    "Merge tasks"
                </button>
                <button on:click=move |_| {
                    with_tree(&move |h, p| h.on_convert_section_to_task(p, section_id))
                }>
                    "To task"
                </button>
                <button on:click=open_discussion>"Discuss"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt="Delete section?"
                    on_confirm=UnsyncCallback::new(move |_| delete_section())
                />
            </div>
        </div>
    }
}
