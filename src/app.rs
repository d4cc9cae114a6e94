//! Roadmap Frontend App
//!
//! Main application component: loads the project tree, provides context,
//! wires the selection/expansion/table state into the three-pane layout,
//! and handles the narrow-viewport single-pane switching.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::commands;
use crate::components::{ActionDialogs, DetailPanel, DiscussionPanel, ProjectSidebar, TaskTable};
use crate::context::AppContext;
use crate::markdown;
use crate::models::{CustomField, CustomFieldFilter, EntityRef, Project};
use crate::state::detail::{DetailDeps, DetailHandlers};
use crate::state::{tree, ExpansionState, LayoutHooks, SelectionState, SortState};

/// Main-pane view selection
#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Tree,
    Table,
}

/// Breakpoint below which the app shows one pane at a time
const NARROW_PX: f64 = 768.0;

fn is_narrow() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w < NARROW_PX)
        .unwrap_or(false)
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_project, set_current_project) = signal::<Option<u32>>(None);
    let (toast, set_toast) = signal::<Option<String>>(None);
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (view_mode, set_view_mode) = signal(ViewMode::Tree);
    let project = RwSignal::new(None::<Project>);
    let fields = RwSignal::new(Vec::<CustomField>::new());
    let search = RwSignal::new(String::new());
    let filters = RwSignal::new(Vec::<CustomFieldFilter>::new());
    let sort = RwSignal::new(SortState::default());
    let expansion = RwSignal::new(ExpansionState::new(None));

    // Narrow-viewport pane switching, signalled by the selection state
    let (show_sidebar, set_show_sidebar) = signal(true);
    let (show_detail, set_show_detail) = signal(false);
    let hooks = LayoutHooks {
        show_detail: Rc::new(move || {
            if is_narrow() {
                set_show_detail.set(true);
                true
            } else {
                false
            }
        }),
        hide_sidebar: Rc::new(move || {
            if is_narrow() {
                set_show_sidebar.set(false);
                true
            } else {
                false
            }
        }),
    };
    let selection = RwSignal::new_local(SelectionState::new(Some(hooks)));

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        current_project,
        (toast, set_toast),
    );
    provide_context(ctx);

    // Detail handler dependencies; deletes are gated by the inline
    // confirm button in the panels, so no extra gate here
    let deps = DetailDeps {
        content_for: Rc::new(|notes| markdown::render_notes(notes.unwrap_or(""))),
        set_context: Rc::new(move |c| selection.update(|s| s.select_context(c))),
        set_task: Rc::new(move |t| selection.update(|s| s.select_task(t))),
        open_dialog: Rc::new(move |a| selection.update(|s| s.stage_action(a))),
        mark_read: Rc::new(move |id| {
            spawn_local(async move {
                if commands::mark_task_read(id).await.is_ok() {
                    ctx.reload();
                }
            });
        }),
        delete_task: Rc::new(move |id| {
            spawn_local(async move {
                match commands::delete_task(id).await {
                    Ok(()) => {
                        selection.update(|s| s.clear_context());
                        ctx.reload();
                    }
                    Err(e) => ctx.show_error(e),
                }
            });
        }),
        update_status: Rc::new(move |id, status| {
            spawn_local(async move {
                match commands::update_task_status(id, status).await {
                    Ok(_) => ctx.reload(),
                    Err(e) => ctx.show_error(e),
                }
            });
        }),
        duplicate_task: Rc::new(move |id| {
            spawn_local(async move {
                match commands::duplicate_task(id).await {
                    Ok(_) => ctx.reload(),
                    Err(e) => ctx.show_error(e),
                }
            });
        }),
        confirm_delete: None,
    };
    let handlers = StoredValue::new_local(DetailHandlers::new(deps));

    // Load the project list on mount and reload
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match commands::list_projects().await {
                Ok(loaded) => {
                    if current_project.get_untracked().is_none() {
                        if let Some(first) = loaded.first() {
                            set_current_project.set(Some(first.id));
                        }
                    }
                    set_projects.set(loaded);
                }
                Err(e) => ctx.show_error(e),
            }
        });
    });

    // Load the active project tree when the project or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(project_id) = current_project.get() else {
            return;
        };
        web_sys::console::log_1(
            &format!("[APP] Loading project {project_id}, trigger={trigger}").into(),
        );
        spawn_local(async move {
            match commands::get_project(project_id).await {
                Ok(mut loaded) => {
                    tree::normalize_ordering(&mut loaded);
                    project.set(Some(loaded));
                }
                Err(e) => ctx.show_error(e),
            }
            if let Ok(loaded) = commands::list_custom_fields(project_id).await {
                fields.set(loaded);
            }
        });
    });

    // Project switch: per-project expansion persistence, reset selection
    // and table state
    let (last_project, set_last_project) = signal::<Option<u32>>(None);
    Effect::new(move |_| {
        let id = current_project.get();
        if last_project.get_untracked() != id {
            set_last_project.set(id);
            expansion.set(ExpansionState::new(id.map(|id| format!("project_{id}"))));
            selection.update(|s| s.clear_all());
            search.set(String::new());
            filters.set(Vec::new());
            sort.set(SortState::default());
        }
    });

    let select_project_overview = move |_| {
        project.with_untracked(|p| {
            if let Some(p) = p {
                handlers.with_value(|h| h.on_navigate(p, EntityRef::Project(p.id)));
            }
        });
    };

    let back_to_sidebar = move |_| {
        set_show_detail.set(false);
        set_show_sidebar.set(true);
    };

    view! {
        <div class="app-layout">
            <Show when=move || toast.get().is_some()>
                <div class="toast error">{move || toast.get().unwrap_or_default()}</div>
            </Show>

            <header class="top-bar">
                <select on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                        set_current_project.set(Some(id));
                    }
                }>
                    <For
                        each=move || projects.get()
                        key=|p| p.id
                        children=move |p| {
                            let id = p.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    prop:selected=move || current_project.get() == Some(id)
                                >
                                    {p.name.clone()}
                                </option>
                            }
                        }
                    />
                </select>
                <button on:click=select_project_overview>"Overview"</button>
                <div class="view-switch">
                    <button
                        class=move || if view_mode.get() == ViewMode::Tree { "active" } else { "" }
                        on:click=move |_| set_view_mode.set(ViewMode::Tree)
                    >
                        "Tree"
                    </button>
                    <button
                        class=move || if view_mode.get() == ViewMode::Table { "active" } else { "" }
                        on:click=move |_| set_view_mode.set(ViewMode::Table)
                    >
                        "Table"
                    </button>
                </div>
            </header>

            <div class="columns">
                <Show when=move || show_sidebar.get() || !is_narrow()>
                    <ProjectSidebar
                        project=project
                        expansion=expansion
                        selection=selection
                        handlers=handlers
                        search=search
                        filters=filters
                        fields=fields
                        sort=sort
                    />
                </Show>

                <main class="main-content">
                    <Show when=move || show_detail.get()>
                        <button class="mobile-back-btn" on:click=back_to_sidebar>
                            "← Back"
                        </button>
                    </Show>
                    {move || match view_mode.get() {
                        ViewMode::Table => view! {
                            <TaskTable
                                project=project
                                search=search
                                filters=filters
                                sort=sort
                                handlers=handlers
                            />
                        }
                        .into_any(),
                        ViewMode::Tree => view! {
                            <DetailPanel
                                project=project
                                selection=selection
                                handlers=handlers
                                fields=fields
                            />
                        }
                        .into_any(),
                    }}
                </main>

                <DiscussionPanel selection=selection />
            </div>

            <ActionDialogs selection=selection />
        </div>
    }
}
