//! Action Dialogs
//!
//! Modal dialogs for the structural operations staged by the detail
//! handlers: split a task, merge tasks within a section, and the two
//! task/section conversions. Each dialog performs its RPC and reloads.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::{PendingAction, Section, Task};
use crate::state::SelectionState;

#[component]
pub fn ActionDialogs(selection: RwSignal<SelectionState, LocalStorage>) -> impl IntoView {
    move || {
        match selection.with(|s| s.pending_action().cloned()) {
            Some(PendingAction::SplitTask(task)) => {
                view! { <SplitTaskDialog task=task selection=selection /> }.into_any()
            }
            Some(PendingAction::MergeTasks(section)) => {
                view! { <MergeTasksDialog section=section selection=selection /> }.into_any()
            }
            Some(PendingAction::ConvertTaskToSection(task)) => {
                view! { <ConvertTaskDialog task=task selection=selection /> }.into_any()
            }
            Some(PendingAction::ConvertSectionToTask(section)) => {
                view! { <ConvertSectionDialog section=section selection=selection /> }.into_any()
            }
            None => view! { <span></span> }.into_any(),
        }
    }
}

#[component]
fn SplitTaskDialog(task: Task, selection: RwSignal<SelectionState, LocalStorage>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let task_id = task.id;
    let (lines, set_lines) = signal(task.title.clone());

    let split = move |_| {
        let titles: Vec<String> = lines
            .get_untracked()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        if titles.len() < 2 {
            return;
        }
        selection.update(|s| s.clear_action());
        spawn_local(async move {
            match commands::split_task(task_id, &titles).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h2>{format!("Split \"{}\"", task.title)}</h2>
                <p>"One line per new task:"</p>
                <textarea
                    prop:value=lines
                    on:input=move |ev| set_lines.set(event_target_value(&ev))
                ></textarea>
                <div class="dialog-actions">
                    <button on:click=split>"Split"</button>
                    <button on:click=move |_| selection.update(|s| s.clear_action())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MergeTasksDialog(
    section: Section,
    selection: RwSignal<SelectionState, LocalStorage>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let section_id = section.id;
    let (checked, set_checked) = signal(Vec::<u32>::new());
    let (title, set_title) = signal(String::new());

    let toggle = move |task_id: u32| {
        set_checked.update(|ids| {
            if let Some(pos) = ids.iter().position(|&id| id == task_id) {
                ids.remove(pos);
            } else {
                ids.push(task_id);
            }
        });
    };

    let merge = move |_| {
        let ids = checked.get_untracked();
        let merged_title = title.get_untracked().trim().to_string();
        if ids.len() < 2 || merged_title.is_empty() {
            return;
        }
        selection.update(|s| s.clear_action());
        spawn_local(async move {
            match commands::merge_tasks(section_id, ids, &merged_title).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let tasks = section.tasks.clone();

    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h2>{format!("Merge tasks in \"{}\"", section.title)}</h2>
                <div class="merge-task-list">
                    <For
                        each=move || tasks.clone()
                        key=|task| task.id
                        children=move |task| {
                            let task_id = task.id;
                            let is_checked =
                                move || checked.get().contains(&task_id);
                            view! {
                                <label class="merge-task-row">
                                    <input
                                        type="checkbox"
                                        prop:checked=is_checked
                                        on:change=move |_| toggle(task_id)
                                    />
                                    {task.title.clone()}
                                </label>
                            }
                        }
                    />
                </div>
                <input
                    type="text"
                    placeholder="Merged task title"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <div class="dialog-actions">
                    <button on:click=merge>"Merge"</button>
                    <button on:click=move |_| selection.update(|s| s.clear_action())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ConvertTaskDialog(
    task: Task,
    selection: RwSignal<SelectionState, LocalStorage>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let task_id = task.id;

    let convert = move |_| {
        selection.update(|s| s.clear_action());
        spawn_local(async move {
            match commands::convert_task_to_section(task_id).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h2>{format!("Convert \"{}\" to a section?", task.title)}</h2>
                <div class="dialog-actions">
                    <button on:click=convert>"Convert"</button>
                    <button on:click=move |_| selection.update(|s| s.clear_action())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ConvertSectionDialog(
    section: Section,
    selection: RwSignal<SelectionState, LocalStorage>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let section_id = section.id;
    let task_count = section.tasks.len();

    let convert = move |_| {
        selection.update(|s| s.clear_action());
        spawn_local(async move {
            match commands::convert_section_to_task(section_id).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h2>{format!("Convert \"{}\" to a task?", section.title)}</h2>
                <p>{format!("Its {task_count} tasks will be folded into the notes.")}</p>
                <div class="dialog-actions">
                    <button on:click=convert>"Convert"</button>
                    <button on:click=move |_| selection.update(|s| s.clear_action())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
