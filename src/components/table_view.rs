//! Task Table Component
//!
//! Flat, sortable, filterable table over every task in the project.
//! Derivation is a memo over the pure engine in `state::table`.

use leptos::prelude::*;

use super::format_deadline;
use crate::models::{CustomFieldFilter, Project, SortDirection, SortField, Task};
use crate::state::detail::DetailHandlers;
use crate::state::{derive_table_view, tree, SortState, TableQuery};

#[component]
pub fn TaskTable(
    project: RwSignal<Option<Project>>,
    search: RwSignal<String>,
    filters: RwSignal<Vec<CustomFieldFilter>>,
    sort: RwSignal<SortState>,
    handlers: StoredValue<DetailHandlers, LocalStorage>,
) -> impl IntoView {
    let view_tasks = Memo::new(move |_| {
        let Some(p) = project.get() else {
            return Vec::<Task>::new();
        };
        let query = TableQuery {
            search: search.get(),
            filters: filters.get(),
            sort: sort.get(),
        };
        derive_table_view(&tree::all_tasks(&p), &query)
    });

    let indicator = move |field: SortField| {
        let state = sort.get();
        if state.field == Some(field) {
            match state.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            }
        } else {
            ""
        }
    };

    let select_task = move |task_id: u32| {
        project.with(|p| {
            if let Some(p) = p {
                handlers.with_value(|h| h.on_select_task(p, task_id));
            }
        });
    };

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th on:click=move |_| sort.update(|s| s.handle_sort(SortField::Title))>
                        "Title" {move || indicator(SortField::Title)}
                    </th>
                    <th on:click=move |_| sort.update(|s| s.handle_sort(SortField::Status))>
                        "Status" {move || indicator(SortField::Status)}
                    </th>
                    <th on:click=move |_| sort.update(|s| s.handle_sort(SortField::Priority))>
                        "Priority" {move || indicator(SortField::Priority)}
                    </th>
                    <th on:click=move |_| sort.update(|s| s.handle_sort(SortField::Deadline))>
                        "Deadline" {move || indicator(SortField::Deadline)}
                    </th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || view_tasks.get()
                    key=|task| (task.id, task.title.clone(), task.status, task.priority, task.deadline)
                    children=move |task| {
                        let id = task.id;
                        view! {
                            <tr class="task-row" on:click=move |_| select_task(id)>
                                <td>{task.title.clone()}</td>
                                <td>{task.status.label()}</td>
                                <td>{task.priority.map(|p| p.label()).unwrap_or("—")}</td>
                                <td>{task.deadline.map(format_deadline).unwrap_or_default()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
