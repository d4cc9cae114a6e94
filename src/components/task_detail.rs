//! Task Detail Panel
//!
//! Title/status/priority/deadline editing, markdown notes, custom-field
//! values, and the split/convert/duplicate/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use super::DeleteConfirmButton;
use crate::commands;
use crate::context::AppContext;
use crate::markdown;
use crate::models::{
    CustomField, EntityRef, Project, SelectedContext, Task, TaskPriority, TaskStatus,
};
use crate::state::detail::DetailHandlers;
use crate::state::{tree, SelectionState};

fn parse_status(raw: &str) -> TaskStatus {
    match raw {
        "in_progress" => TaskStatus::InProgress,
        "completed" => TaskStatus::Completed,
        _ => TaskStatus::NotStarted,
    }
}

fn parse_priority(raw: &str) -> Option<TaskPriority> {
    match raw {
        "critical" => Some(TaskPriority::Critical),
        "high" => Some(TaskPriority::High),
        "medium" => Some(TaskPriority::Medium),
        "low" => Some(TaskPriority::Low),
        _ => None,
    }
}

/// "YYYY-MM-DD" -> epoch ms; empty or unparsable input clears the deadline
fn parse_deadline(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    let ms = js_sys::Date::parse(raw);
    if ms.is_nan() {
        None
    } else {
        Some(ms as i64)
    }
}

fn deadline_input_value(ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms as f64));
    String::from(date.to_iso_string()).chars().take(10).collect()
}

#[component]
pub fn TaskDetail(
    task: Task,
    project: RwSignal<Option<Project>>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
    fields: RwSignal<Vec<CustomField>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let task_id = task.id;

    let (title_value, set_title_value) = signal(task.title.clone());
    let (notes_value, set_notes_value) = signal(task.notes.clone().unwrap_or_default());
    let rendered_notes = move || markdown::render_notes(&notes_value.get());

    // Opening an unread task marks it read
    if !task.is_read {
        project.with_untracked(|p| {
            if let Some(p) = p {
                handlers.with_value(|h| h.on_mark_read(p, task_id));
            }
        });
    }

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
            match commands::update_task(task_id, Some(&title), None, None, None).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let save_notes = move |_| {
        let notes = notes_value.get_untracked();
        spawn_local(async move {
            match commands::update_task(task_id, None, Some(&notes), None, None).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let change_status = move |ev: web_sys::Event| {
        let status = parse_status(&event_target_value(&ev));
        with_tree(&move |h, p| h.on_update_task_status(p, task_id, status));
    };

    let change_priority = move |ev: web_sys::Event| {
        let priority = parse_priority(&event_target_value(&ev));
        spawn_local(async move {
            match commands::update_task(task_id, None, None, Some(priority), None).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let change_deadline = move |ev: web_sys::Event| {
        let deadline = parse_deadline(&event_target_value(&ev));
        spawn_local(async move {
            match commands::update_task(task_id, None, None, None, Some(deadline)).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let set_custom_value = move |field_id: u32, value: String| {
        spawn_local(async move {
            match commands::set_task_custom_value(task_id, field_id, &value).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let open_discussion = {
        let title = task.title.clone();
        let notes = task.notes.clone().unwrap_or_default();
        move |_| {
            let entity = SelectedContext::Task {
                id: task_id,
                title: title.clone(),
                content: markdown::render_notes(&notes),
            };
            selection.update(|s| s.open_discussion(entity));
        }
    };

    // Breadcrumb parents, fresh from the tree
    let parents = move || {
        project.with(|p| {
            p.as_ref().and_then(|p| {
                tree::find_task(p, task_id)
                    .map(|(b, s, _)| (b.id, b.title.clone(), s.id, s.title.clone()))
            })
        })
    };

    let status_value = task.status.as_str();
    let priority_value = task.priority.map(|p| p.as_str()).unwrap_or("");
    let deadline_value = task.deadline.map(deadline_input_value).unwrap_or_default();
    let custom_values = task.custom_values.clone();

    view! {
        <div class="task-detail">
            <nav class="breadcrumb">
                {move || {
                    parents()
                        .map(|(block_id, block_title, section_id, section_title)| {
                            view! {
                                <button
                                    class="crumb"
                                    on:click=move |_| with_tree(
                                        &move |h, p| h.on_navigate(p, EntityRef::Block(block_id)),
                                    )
                                >
                                    {block_title.clone()}
                                </button>
                                " / "
                                <button
                                    class="crumb"
                                    on:click=move |_| with_tree(
                                        &move |h, p| h.on_navigate(p, EntityRef::Section(section_id)),
                                    )
                                >
                                    {section_title.clone()}
                                </button>
                            }
                            .into_any()
                        })
                        .unwrap_or_else(|| view! { <span></span> }.into_any())
                }}
            </nav>

            <input
                class="title-input"
                type="text"
                prop:value=title_value
                on:input=move |ev| set_title_value.set(event_target_value(&ev))
                on:change=move |_| save_title()
            />

            <div class="task-fields">
                <label>
                    "Status"
                    <select prop:value=status_value on:change=change_status>
                        <option value="not_started">"Not started"</option>
                        <option value="in_progress">"In progress"</option>
                        <option value="completed">"Completed"</option>
                    </select>
                </label>
                <label>
                    "Priority"
                    <select prop:value=priority_value on:change=change_priority>
                        <option value="">"—"</option>
                        <option value="critical">"Critical"</option>
                        <option value="high">"High"</option>
                        <option value="medium">"Medium"</option>
                        <option value="low">"Low"</option>
                    </select>
                </label>
                <label>
                    "Deadline"
                    <input type="date" prop:value=deadline_value on:change=change_deadline />
                </label>
            </div>

            <div class="custom-fields">
                <For
                    each=move || fields.get()
                    key=|field| field.id
                    children=move |field| {
                        let field_id = field.id;
                        let value = custom_values.get(&field_id).cloned().unwrap_or_default();
                        view! {
                            <label>
                                {field.name.clone()}
                                <input
                                    type="text"
                                    prop:value=value
                                    on:change=move |ev| set_custom_value(
                                        field_id,
                                        event_target_value(&ev),
                                    )
                                />
                            </label>
                        }
                    }
                />
            </div>

            <textarea
                class="notes-editor"
                prop:value=notes_value
                on:input=move |ev| set_notes_value.set(event_target_value(&ev))
            ></textarea>
            <button on:click=save_notes>"Save notes"</button>
            <div class="notes-preview" inner_html=rendered_notes></div>

            <div class="task-actions">
                <button on:click=move |_| with_tree(&move |h, p| h.on_duplicate_task(p, task_id))>
                    "Duplicate"
                </button>
                <button on:click=move |_| with_tree(&move |h, p| h.on_split_task(p, task_id))>
                    "Split"
                </button>
                <button on:click=move |_| {
                    with_tree(&move |h, p| h.on_convert_task_to_section(p, task_id))
                }>
                    "To section"
                </button>
                <button on:click=open_discussion>"Discuss"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt="Delete task?"
                    on_confirm=UnsyncCallback::new(move |_| {
                        with_tree(&move |h, p| h.on_delete_task(p, task_id));
                    })
                />
            </div>
        </div>
    }
}
