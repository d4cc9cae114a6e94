//! Detail Panel Dispatch
//!
//! Chooses which detail view to render. Task detail takes priority
//! whenever a task is selected, regardless of the context kind; block,
//! section, and project contexts follow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{BlockDetail, SectionDetail, TaskDetail};
use crate::commands;
use crate::context::AppContext;
use crate::markdown;
use crate::models::{CustomField, Project, SelectedContext};
use crate::state::detail::DetailHandlers;
use crate::state::{tree, SelectionState};

#[component]
pub fn DetailPanel(
    project: RwSignal<Option<Project>>,
    selection: RwSignal<SelectionState, LocalStorage>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
    fields: RwSignal<Vec<CustomField>>,
) -> impl IntoView {
    move || {
        // Task detail wins whenever the task slot is set
        if let Some(snapshot) = selection.with(|s| s.task().cloned()) {
            let task = project
                .with(|p| {
                    p.as_ref().and_then(|p| {
                        tree::find_task(p, snapshot.id).map(|(_, _, t)| t.clone())
                    })
                })
                .unwrap_or(snapshot);
            return view! {
                <TaskDetail
                    task=task
                    project=project
                    selection=selection
                    handlers=handlers
                    fields=fields
                />
            }
            .into_any();
        }

        match selection.with(|s| s.context().cloned()) {
            Some(SelectedContext::Block { id, .. }) => {
                match project.with(|p| p.as_ref().and_then(|p| tree::find_block(p, id).cloned())) {
                    Some(block) => view! {
                        <BlockDetail
                            block=block
                            project=project
                            selection=selection
                            handlers=handlers
                        />
                    }
                    .into_any(),
                    None => placeholder(),
                }
            }
            Some(SelectedContext::Section { id, .. }) => {
                match project
                    .with(|p| p.as_ref().and_then(|p| tree::find_section(p, id).map(|(_, s)| s.clone())))
                {
                    Some(section) => view! {
                        <SectionDetail
                            section=section
                            project=project
                            selection=selection
                            handlers=handlers
                        />
                    }
                    .into_any(),
                    None => placeholder(),
                }
            }
            Some(SelectedContext::Project { .. }) => {
                match project.get() {
                    Some(p) => view! { <ProjectOverview project_data=p /> }.into_any(),
                    None => placeholder(),
                }
            }
            // A bare task context without the task slot renders nothing
            Some(SelectedContext::Task { .. }) | None => placeholder(),
        }
    }
}

fn placeholder() -> AnyView {
    view! {
        <div class="detail-placeholder">
            <p>"Select a block, section, or task to see its details."</p>
        </div>
    }
    .into_any()
}

#[component]
fn ProjectOverview(project_data: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let project_id = project_data.id;

    let (name_value, set_name_value) = signal(project_data.name.clone());
    let description = project_data.description.clone().unwrap_or_default();
    let rendered = markdown::render_notes(&description);

    let save_name = move || {
        let name = name_value.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::update_project(project_id, Some(&name), None).await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.show_error(e),
            }
        });
    };

    view! {
        <div class="project-overview">
            <input
                class="title-input"
                type="text"
                prop:value=name_value
                on:input=move |ev| set_name_value.set(event_target_value(&ev))
                on:change=move |_| save_name()
            />
            <div class="project-description" inner_html=rendered></div>
            <p class="block-count">
                {format!("{} blocks", project_data.blocks.len())}
            </p>
        </div>
    }
}
