//! Project Sidebar Component
//!
//! The block → section → task tree: expansion state, selection and
//! multi-select wiring, the task filter bar, and drag-and-drop reorder
//! and move operations dispatched to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::*;

use super::FilterBar;
use crate::commands;
use crate::context::AppContext;
use crate::models::{Block, CustomField, CustomFieldFilter, Project, Section, TaskStatus};
use crate::state::detail::DetailHandlers;
use crate::state::{table, tree, ExpansionState, SelectionState, SortState};

async fn apply_drop(project: Project, source: DragSource, target: DropTarget) -> Result<(), String> {
    match (source, target) {
        (DragSource::Task(id), DropTarget::TaskZone { section_id, position }) => {
            match tree::find_task(&project, id) {
                Some((_, section, _)) if section.id == section_id => {
                    let ids: Vec<u32> = section.tasks.iter().map(|t| t.id).collect();
                    commands::reorder_tasks(section_id, tree::reordered_ids(&ids, id, position))
                        .await
                }
                Some(_) => commands::move_task(id, section_id, position).await,
                None => Ok(()),
            }
        }
        (DragSource::Section(id), DropTarget::SectionZone { block_id, position }) => {
            match tree::find_section(&project, id) {
                Some((block, _)) if block.id == block_id => {
                    let ids: Vec<u32> = block.sections.iter().map(|s| s.id).collect();
                    commands::reorder_sections(block_id, tree::reordered_ids(&ids, id, position))
                        .await
                }
                Some(_) => commands::move_section(id, block_id, position).await,
                None => Ok(()),
            }
        }
        (DragSource::Block(id), DropTarget::BlockZone { position }) => {
            let ids: Vec<u32> = project.blocks.iter().map(|b| b.id).collect();
            commands::reorder_blocks(project.id, tree::reordered_ids(&ids, id, position)).await
        }
        _ => Ok(()),
    }
}

#[component]
pub fn ProjectSidebar(
    project: RwSignal<Option<Project>>,
    expansion: RwSignal<ExpansionState>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
    search: RwSignal<String>,
    filters: RwSignal<Vec<CustomFieldFilter>>,
    fields: RwSignal<Vec<CustomField>>,
    sort: RwSignal<SortState>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // DnD wiring: one global mouseup handler dispatches the structural
    // mutation and reloads on success
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |source, target| {
        let Some(p) = project.get_untracked() else {
            return;
        };
        web_sys::console::log_1(
            &format!("[DND] Drop: source={source:?}, target={target:?}").into(),
        );
        spawn_local(async move {
            match apply_drop(p, source, target).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    });

    let add_block = move |_| {
        let Some(project_id) = project.with_untracked(|p| p.as_ref().map(|p| p.id)) else {
            return;
        };
        spawn_local(async move {
            match commands::create_block(project_id, "New block").await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    let selection_mode = move || selection.with(|s| s.selection_mode());

    let check_all = move |_| {
        if let Some(p) = project.get_untracked() {
            selection.update(|s| s.check_all(&tree::all_task_ids(&p)));
        }
    };

    let delete_checked = move |_| {
        let ids: Vec<u32> =
            selection.with_untracked(|s| s.checked_task_ids().iter().copied().collect());
        if ids.is_empty() {
            return;
        }
        selection.update(|s| s.clear_checked());
        spawn_local(async move {
            for id in ids {
                if let Err(e) = commands::delete_task(id).await {
                    ctx.show_error(e);
                    break;
                }
            }
            ctx.reload();
        });
    };

    let block_ids = move || {
        project.with(|p| {
            p.as_ref()
                .map(|p| p.blocks.iter().map(|b| b.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let has_blocks = move || !block_ids().is_empty();

    view! {
        <aside class="project-sidebar">
            <FilterBar search=search filters=filters fields=fields sort=sort />

            <div class="selection-toolbar">
                <button
                    class=move || if selection_mode() { "select-btn active" } else { "select-btn" }
                    on:click=move |_| selection.update(|s| s.set_selection_mode(!s.selection_mode()))
                >
                    "Select"
                </button>
                <Show when=selection_mode>
                    <button on:click=check_all>"All"</button>
                    <button on:click=move |_| selection.update(|s| s.clear_checked())>"Clear"</button>
                    <button class="danger" on:click=delete_checked>
                        {move || {
                            let n = selection.with(|s| s.checked_task_ids().len());
                            format!("Delete ({n})")
                        }}
                    </button>
                </Show>
                <button class="add-block-btn" on:click=add_block>"+ Block"</button>
            </div>

            <Show
                when=has_blocks
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>"No blocks yet. Add one to start planning."</p>
                        </div>
                    }
                }
            >
                <div class="block-tree">
                    <For
                        each=move || { block_ids().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(_, id)| *id
                        children=move |(i, block_id)| {
                            view! {
                                <DndZone dnd=dnd target=DropTarget::BlockZone { position: i as i32 } />
                                <BlockNode
                                    block_id=block_id
                                    dnd=dnd
                                    project=project
                                    expansion=expansion
                                    selection=selection
                                    handlers=handlers
                                    search=search
                                />
                            }
                        }
                    />
                    {move || {
                        let count = block_ids().len();
                        view! {
                            <DndZone dnd=dnd target=DropTarget::BlockZone { position: count as i32 } />
                        }
                    }}
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn BlockNode(
    block_id: u32,
    dnd: DndSignals,
    project: RwSignal<Option<Project>>,
    expansion: RwSignal<ExpansionState>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
    search: RwSignal<String>,
) -> impl IntoView {
    // Fresh block data on every tree reload
    let block = move || {
        project.with(|p| {
            p.as_ref()
                .and_then(|p| tree::find_block(p, block_id).cloned())
        })
    };

    let display_title = move || {
        block()
            .map(|b: Block| b.title_localized.unwrap_or(b.title))
            .unwrap_or_default()
    };
    let number = move || block().and_then(|b| b.number).unwrap_or(0);
    let section_ids = move || {
        block()
            .map(|b| b.sections.iter().map(|s| s.id).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    let expanded = move || expansion.with(|e| e.is_block_expanded(block_id));
    let on_mousedown = make_on_mousedown(dnd, DragSource::Block(block_id));
    let is_dragging = move || dnd.dragging_read.get() == Some(DragSource::Block(block_id));

    let select_block = move |_| {
        project.with_untracked(|p| {
            if let Some(p) = p {
                handlers.with_value(|h| h.on_select_block(p, block_id));
            }
        });
    };

    view! {
        <div class="block-node">
            <div
                class=move || if is_dragging() { "block-row dragging" } else { "block-row" }
                on:mousedown=on_mousedown
                on:click=select_block
            >
                <button
                    class="caret-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        expansion.update(|e| e.toggle_block(block_id));
                    }
                >
                    {move || if expanded() { "▾" } else { "▸" }}
                </button>
                <span class="block-number">{number}</span>
                <span class="block-title">{display_title}</span>
            </div>

            <Show when=expanded>
                <div class="section-list">
                    <For
                        each=move || { section_ids().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(_, id)| *id
                        children=move |(j, section_id)| {
                            view! {
                                <DndZone
                                    dnd=dnd
                                    target=DropTarget::SectionZone {
                                        block_id,
                                        position: j as i32,
                                    }
                                />
                                <SectionNode
                                    section_id=section_id
                                    dnd=dnd
                                    project=project
                                    expansion=expansion
                                    selection=selection
                                    handlers=handlers
                                    search=search
                                />
                            }
                        }
                    />
                    {move || {
                        let count = section_ids().len();
                        view! {
                            <DndZone
                                dnd=dnd
                                target=DropTarget::SectionZone {
                                    block_id,
                                    position: count as i32,
                                }
                            />
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SectionNode(
    section_id: u32,
    dnd: DndSignals,
    project: RwSignal<Option<Project>>,
    expansion: RwSignal<ExpansionState>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
    search: RwSignal<String>,
) -> impl IntoView {
    let section = move || {
        project.with(|p| {
            p.as_ref()
                .and_then(|p| tree::find_section(p, section_id).map(|(_, s)| s.clone()))
        })
    };

    let title = move || section().map(|s: Section| s.title).unwrap_or_default();
    let task_count = move || section().map(|s| s.tasks.len()).unwrap_or(0);

    let expanded = move || expansion.with(|e| e.is_section_expanded(section_id));
    let on_mousedown = make_on_mousedown(dnd, DragSource::Section(section_id));
    let is_dragging = move || dnd.dragging_read.get() == Some(DragSource::Section(section_id));

    let select_section = move |_| {
        project.with_untracked(|p| {
            if let Some(p) = p {
                handlers.with_value(|h| h.on_select_section(p, section_id));
            }
        });
    };

    // Quick filter: same predicate as the table view, with drop-gap
    // positions indexing the full task list
    let visible_tasks = move || {
        let tasks = section().map(|s| s.tasks).unwrap_or_default();
        table::search_hits(&tasks, &search.get())
    };

    view! {
        <div class="section-node">
            <div
                class=move || if is_dragging() { "section-row dragging" } else { "section-row" }
                on:mousedown=on_mousedown
                on:click=select_section
            >
                <button
                    class="caret-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        expansion.update(|e| e.toggle_section(section_id));
                    }
                >
                    {move || if expanded() { "▾" } else { "▸" }}
                </button>
                <span class="section-title">{title}</span>
                <span class="task-count">{task_count}</span>
            </div>

            <Show when=expanded>
                <div class="task-list">
                    <For
                        each=move || visible_tasks()
                        key=|(_, task)| (task.id, task.title.clone(), task.status, task.is_read)
                        children=move |(k, task)| {
                            let task_id = task.id;
                            let task_title = task.title.clone();
                            let status = task.status;
                            let is_read = task.is_read;
                            let on_task_mousedown = make_on_mousedown(dnd, DragSource::Task(task_id));
                            let is_task_dragging =
                                move || dnd.dragging_read.get() == Some(DragSource::Task(task_id));
                            let checked =
                                move || selection.with(|s| s.checked_task_ids().contains(&task_id));
                            let in_selection_mode = move || selection.with(|s| s.selection_mode());

                            let click_task = move |_| {
                                if in_selection_mode() {
                                    selection.update(|s| s.toggle_checked(task_id));
                                } else {
                                    project.with_untracked(|p| {
                                        if let Some(p) = p {
                                            handlers.with_value(|h| h.on_select_task(p, task_id));
                                        }
                                    });
                                }
                            };

                            view! {
                                <DndZone
                                    dnd=dnd
                                    target=DropTarget::TaskZone {
                                        section_id,
                                        position: k as i32,
                                    }
                                />
                                <div
                                    class=move || {
                                        let mut c = String::from("task-row");
                                        c.push_str(match status {
                                            TaskStatus::NotStarted => " not-started",
                                            TaskStatus::InProgress => " in-progress",
                                            TaskStatus::Completed => " completed",
                                        });
                                        if is_task_dragging() {
                                            c.push_str(" dragging");
                                        }
                                        c
                                    }
                                    on:mousedown=on_task_mousedown
                                    on:click=click_task
                                >
                                    <Show when=in_selection_mode>
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:click=move |ev| ev.stop_propagation()
                                            on:change=move |_| {
                                                selection.update(|s| s.toggle_checked(task_id))
                                            }
                                        />
                                    </Show>
                                    <span class="status-dot"></span>
                                    <span class="task-title">{task_title.clone()}</span>
                                    <Show when=move || !is_read>
                                        <span class="unread-dot">"●"</span>
                                    </Show>
                                </div>
                            }
                        }
                    />
                    {move || {
                        // Trailing gap sits after the last sibling of the
                        // full list, hidden rows included
                        let count = task_count();
                        view! {
                            <DndZone
                                dnd=dnd
                                target=DropTarget::TaskZone {
                                    section_id,
                                    position: count as i32,
                                }
                            />
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Drop zone component - a horizontal separator between tree rows
#[component]
fn DndZone(dnd: DndSignals, target: DropTarget) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, target);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this zone the current drop target?
    let is_active = move || dnd.drop_target_read.get() == Some(target);

    // Only show when dragging
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() {
            c.push_str(" hidden");
        }
        if is_active() {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
