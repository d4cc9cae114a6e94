//! Filter Bar Component
//!
//! Free-text task search, custom-field filter rules (AND-combined), and
//! the sort-reset control.

use leptos::prelude::*;

use crate::models::{CustomField, CustomFieldFilter, FilterOp};
use crate::state::SortState;

fn parse_op(raw: &str) -> FilterOp {
    match raw {
        "contains" => FilterOp::Contains,
        "is_empty" => FilterOp::IsEmpty,
        "is_not_empty" => FilterOp::IsNotEmpty,
        _ => FilterOp::Is,
    }
}

fn op_label(op: FilterOp) -> &'static str {
    match op {
        FilterOp::Is => "is",
        FilterOp::Contains => "contains",
        FilterOp::IsEmpty => "is empty",
        FilterOp::IsNotEmpty => "is not empty",
    }
}

#[component]
pub fn FilterBar(
    search: RwSignal<String>,
    filters: RwSignal<Vec<CustomFieldFilter>>,
    fields: RwSignal<Vec<CustomField>>,
    sort: RwSignal<SortState>,
) -> impl IntoView {
    // Draft rule inputs
    let (draft_field, set_draft_field) = signal(String::new());
    let (draft_op, set_draft_op) = signal(String::from("is"));
    let (draft_value, set_draft_value) = signal(String::new());

    let add_rule = move |_| {
        let Ok(field_id) = draft_field.get().parse::<u32>() else {
            return;
        };
        let rule = CustomFieldFilter {
            field_id,
            op: parse_op(&draft_op.get()),
            value: draft_value.get(),
        };
        filters.update(|rules| rules.push(rule));
        set_draft_value.set(String::new());
    };

    let field_name = move |field_id: u32| {
        fields
            .get()
            .iter()
            .find(|f| f.id == field_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("field #{field_id}"))
    };

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="task-search"
                placeholder="Search tasks..."
                prop:value=search
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="filter-rule-form">
                <select on:change=move |ev| set_draft_field.set(event_target_value(&ev))>
                    <option value="">"Custom field..."</option>
                    <For
                        each=move || fields.get()
                        key=|field| field.id
                        children=move |field| {
                            view! { <option value=field.id.to_string()>{field.name}</option> }
                        }
                    />
                </select>
                <select on:change=move |ev| set_draft_op.set(event_target_value(&ev))>
                    <option value="is">"is"</option>
                    <option value="contains">"contains"</option>
                    <option value="is_empty">"is empty"</option>
                    <option value="is_not_empty">"is not empty"</option>
                </select>
                <input
                    type="text"
                    placeholder="Value"
                    prop:value=draft_value
                    on:input=move |ev| set_draft_value.set(event_target_value(&ev))
                />
                <button on:click=add_rule>"+"</button>
            </div>

            <div class="filter-rule-list">
                <For
                    each=move || { filters.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(i, _)| *i
                    children=move |(i, rule)| {
                        view! {
                            <span class="filter-rule">
                                {field_name(rule.field_id)}
                                " "
                                {op_label(rule.op)}
                                " "
                                {rule.value.clone()}
                                <button
                                    class="remove-rule-btn"
                                    on:click=move |_| {
                                        filters.update(|rules| {
                                            if i < rules.len() {
                                                rules.remove(i);
                                            }
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <Show when=move || sort.get().field.is_some()>
                <button class="reset-sort-btn" on:click=move |_| sort.update(SortState::reset)>
                    "Reset sort"
                </button>
            </Show>
        </div>
    }
}
