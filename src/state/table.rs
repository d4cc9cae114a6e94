//! Table Sort/Filter Engine
//!
//! Pure derivation of the task table: search, custom-field filters, then
//! an optional stable sort. Components wrap `derive_table_view` in a Memo
//! so recomputation happens only when an input changes.

use crate::models::{
    CustomFieldFilter, FilterOp, SortDirection, SortField, Task, TaskPriority, TaskStatus,
};
use std::cmp::Ordering;

/// Current sort column + direction. No field means input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Header click: same field toggles direction, new field starts asc
    pub fn handle_sort(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }

    pub fn reset(&mut self) {
        self.field = None;
        self.direction = SortDirection::Asc;
    }
}

/// Inputs of one table derivation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub filters: Vec<CustomFieldFilter>,
    pub sort: SortState,
}

fn priority_rank(priority: Option<TaskPriority>) -> u8 {
    match priority {
        Some(TaskPriority::Critical) => 0,
        Some(TaskPriority::High) => 1,
        Some(TaskPriority::Medium) => 2,
        Some(TaskPriority::Low) => 3,
        None => 4,
    }
}

fn status_rank(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::NotStarted => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Completed => 2,
    }
}

fn matches_search(task: &Task, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task
            .notes
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(&needle))
}

/// Evaluate one filter rule against a task's custom-value map.
/// A missing value behaves as the empty string.
pub fn filter_passes(task: &Task, rule: &CustomFieldFilter) -> bool {
    let value = task
        .custom_values
        .get(&rule.field_id)
        .map(String::as_str)
        .unwrap_or("");
    match rule.op {
        FilterOp::Is => value == rule.value,
        FilterOp::Contains => value.to_lowercase().contains(&rule.value.to_lowercase()),
        FilterOp::IsEmpty => value.is_empty(),
        FilterOp::IsNotEmpty => !value.is_empty(),
    }
}

/// Tasks passing the search predicate, paired with their position in the
/// unfiltered list. The sidebar renders drop gaps from these positions, so
/// they must index the full sibling list even while the filter hides rows.
pub fn search_hits(tasks: &[Task], search: &str) -> Vec<(usize, Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| search.is_empty() || matches_search(t, search))
        .map(|(i, t)| (i, t.clone()))
        .collect()
}

fn compare_by(field: SortField, a: &Task, b: &Task) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Status => status_rank(a.status).cmp(&status_rank(b.status)),
        SortField::Priority => priority_rank(a.priority).cmp(&priority_rank(b.priority)),
        // Absent deadline coerces to 0 and sorts first ascending
        SortField::Deadline => a.deadline.unwrap_or(0).cmp(&b.deadline.unwrap_or(0)),
    }
}

/// Derive the visible task table: search, then AND-combined custom-field
/// filters, then an optional stable sort. Without a sort field the
/// filtered input order is preserved.
pub fn derive_table_view(tasks: &[Task], query: &TableQuery) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|t| query.search.is_empty() || matches_search(t, &query.search))
        .filter(|t| query.filters.iter().all(|rule| filter_passes(t, rule)))
        .cloned()
        .collect();

    if let Some(field) = query.sort.field {
        out.sort_by(|a, b| {
            let ord = compare_by(field, a, b);
            match query.sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_task(id: u32, title: &str, status: TaskStatus, priority: Option<TaskPriority>) -> Task {
        Task {
            id,
            title: title.to_string(),
            status,
            priority,
            deadline: None,
            notes: None,
            is_read: false,
            sort_order: None,
            custom_values: HashMap::new(),
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            make_task(1, "Alpha Task", TaskStatus::NotStarted, Some(TaskPriority::High)),
            make_task(2, "Beta Task", TaskStatus::InProgress, Some(TaskPriority::Critical)),
            make_task(3, "Gamma Task", TaskStatus::Completed, Some(TaskPriority::Low)),
        ]
    }

    fn sorted_by(tasks: &[Task], field: SortField, direction: SortDirection) -> Vec<Task> {
        derive_table_view(
            tasks,
            &TableQuery {
                sort: SortState {
                    field: Some(field),
                    direction,
                },
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_priority_asc_example_scenario() {
        let view = sorted_by(&sample_tasks(), SortField::Priority, SortDirection::Asc);
        let titles: Vec<&str> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Beta Task", "Alpha Task", "Gamma Task"]);
    }

    #[test]
    fn test_priority_rank_order_with_unset_last() {
        let tasks = vec![
            make_task(1, "none", TaskStatus::NotStarted, None),
            make_task(2, "low", TaskStatus::NotStarted, Some(TaskPriority::Low)),
            make_task(3, "med", TaskStatus::NotStarted, Some(TaskPriority::Medium)),
            make_task(4, "high", TaskStatus::NotStarted, Some(TaskPriority::High)),
            make_task(5, "crit", TaskStatus::NotStarted, Some(TaskPriority::Critical)),
        ];
        let view = sorted_by(&tasks, SortField::Priority, SortDirection::Asc);
        let ids: Vec<u32> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_status_rank_order() {
        let tasks = vec![
            make_task(1, "done", TaskStatus::Completed, None),
            make_task(2, "doing", TaskStatus::InProgress, None),
            make_task(3, "todo", TaskStatus::NotStarted, None),
        ];
        let view = sorted_by(&tasks, SortField::Status, SortDirection::Asc);
        let ids: Vec<u32> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn test_missing_deadline_sorts_first_ascending() {
        let mut tasks = sample_tasks();
        tasks[0].deadline = Some(1_700_000_000_000);
        tasks[1].deadline = None;
        tasks[2].deadline = Some(1_600_000_000_000);
        let view = sorted_by(&tasks, SortField::Deadline, SortDirection::Asc);
        let ids: Vec<u32> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn test_desc_reverses_order() {
        let view = sorted_by(&sample_tasks(), SortField::Priority, SortDirection::Desc);
        let titles: Vec<&str> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Gamma Task", "Alpha Task", "Beta Task"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let tasks = vec![
            make_task(1, "a", TaskStatus::NotStarted, Some(TaskPriority::High)),
            make_task(2, "b", TaskStatus::NotStarted, Some(TaskPriority::High)),
            make_task(3, "c", TaskStatus::NotStarted, Some(TaskPriority::High)),
        ];
        let view = sorted_by(&tasks, SortField::Priority, SortDirection::Asc);
        let ids: Vec<u32> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_search_example_scenario() {
        let view = derive_table_view(
            &sample_tasks(),
            &TableQuery {
                search: "Beta".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Beta Task");
    }

    #[test]
    fn test_search_is_case_insensitive_and_checks_notes() {
        let mut tasks = sample_tasks();
        tasks[0].notes = Some("remember the MILESTONE".to_string());
        let view = derive_table_view(
            &tasks,
            &TableQuery {
                search: "milestone".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_search_without_match_yields_empty() {
        let view = derive_table_view(
            &sample_tasks(),
            &TableQuery {
                search: "zzz".to_string(),
                ..Default::default()
            },
        );
        assert!(view.is_empty());
    }

    #[test]
    fn test_no_query_is_identity() {
        let tasks = sample_tasks();
        let view = derive_table_view(&tasks, &TableQuery::default());
        assert_eq!(view, tasks);
    }

    #[test]
    fn test_custom_field_filters_and_together() {
        let mut tasks = sample_tasks();
        tasks[0].custom_values.insert(1, "client".to_string());
        tasks[0].custom_values.insert(2, "Q3".to_string());
        tasks[1].custom_values.insert(1, "client".to_string());
        let query = TableQuery {
            filters: vec![
                CustomFieldFilter {
                    field_id: 1,
                    op: FilterOp::Is,
                    value: "client".to_string(),
                },
                CustomFieldFilter {
                    field_id: 2,
                    op: FilterOp::IsNotEmpty,
                    value: String::new(),
                },
            ],
            ..Default::default()
        };
        let view = derive_table_view(&tasks, &query);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_missing_custom_value_acts_as_empty() {
        let tasks = sample_tasks();
        let rule = CustomFieldFilter {
            field_id: 42,
            op: FilterOp::IsEmpty,
            value: String::new(),
        };
        assert!(filter_passes(&tasks[0], &rule));
    }

    #[test]
    fn test_search_hits_keep_unfiltered_positions() {
        let tasks = vec![
            make_task(1, "alpha", TaskStatus::NotStarted, None),
            make_task(2, "beta", TaskStatus::NotStarted, None),
            make_task(3, "gamma", TaskStatus::NotStarted, None),
            make_task(4, "delta", TaskStatus::NotStarted, None),
        ];
        let hits = search_hits(&tasks, "ta");
        let positions: Vec<usize> = hits.iter().map(|(i, _)| *i).collect();
        let ids: Vec<u32> = hits.iter().map(|(_, t)| t.id).collect();
        // Positions index the full list, not the filtered one
        assert_eq!(positions, [1, 3]);
        assert_eq!(ids, [2, 4]);
    }

    #[test]
    fn test_search_hits_match_notes_like_the_table() {
        let mut tasks = sample_tasks();
        tasks[2].notes = Some("blocked on review".to_string());
        let hits = search_hits(&tasks, "review");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 2);
        assert_eq!(hits[0].1.id, 3);
    }

    #[test]
    fn test_search_hits_empty_query_is_identity() {
        let tasks = sample_tasks();
        let hits = search_hits(&tasks, "");
        let positions: Vec<usize> = hits.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(hits.len(), tasks.len());
    }

    #[test]
    fn test_handle_sort_toggles_direction_on_same_field() {
        let mut sort = SortState::default();
        sort.handle_sort(SortField::Title);
        assert_eq!(sort.field, Some(SortField::Title));
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.handle_sort(SortField::Title);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.handle_sort(SortField::Title);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_handle_sort_new_field_starts_asc() {
        let mut sort = SortState::default();
        sort.handle_sort(SortField::Title);
        sort.handle_sort(SortField::Title);
        sort.handle_sort(SortField::Deadline);
        assert_eq!(sort.field, Some(SortField::Deadline));
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_reset_clears_field_and_direction() {
        let mut sort = SortState::default();
        sort.handle_sort(SortField::Status);
        sort.handle_sort(SortField::Status);
        sort.reset();
        assert_eq!(sort, SortState::default());
    }
}
