//! Tree Helpers
//!
//! Ordering normalization and entity lookups over the project tree.

use crate::models::{Block, Project, Section, Task};

/// Fill missing `number`/`sort_order` fields from list position, then
/// sort each level by the normalized key. Backend rows created before
/// ordering existed carry no explicit order.
pub fn normalize_ordering(project: &mut Project) {
    for (i, block) in project.blocks.iter_mut().enumerate() {
        if block.number.is_none() {
            block.number = Some(i as i32 + 1);
        }
        for (j, section) in block.sections.iter_mut().enumerate() {
            if section.sort_order.is_none() {
                section.sort_order = Some(j as i32);
            }
            for (k, task) in section.tasks.iter_mut().enumerate() {
                if task.sort_order.is_none() {
                    task.sort_order = Some(k as i32);
                }
            }
            section.tasks.sort_by_key(|t| t.sort_order.unwrap_or(0));
        }
        block.sections.sort_by_key(|s| s.sort_order.unwrap_or(0));
    }
    project.blocks.sort_by_key(|b| b.number.unwrap_or(0));
}

pub fn find_block(project: &Project, block_id: u32) -> Option<&Block> {
    project.blocks.iter().find(|b| b.id == block_id)
}

/// Section lookup, with its parent block
pub fn find_section(project: &Project, section_id: u32) -> Option<(&Block, &Section)> {
    project.blocks.iter().find_map(|b| {
        b.sections
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| (b, s))
    })
}

/// Task lookup, with its parent block and section
pub fn find_task(project: &Project, task_id: u32) -> Option<(&Block, &Section, &Task)> {
    project.blocks.iter().find_map(|b| {
        b.sections.iter().find_map(|s| {
            s.tasks.iter().find(|t| t.id == task_id).map(|t| (b, s, t))
        })
    })
}

/// All task ids in tree order, for select-all
pub fn all_task_ids(project: &Project) -> Vec<u32> {
    project
        .blocks
        .iter()
        .flat_map(|b| b.sections.iter())
        .flat_map(|s| s.tasks.iter())
        .map(|t| t.id)
        .collect()
}

/// All tasks flattened in tree order, for the table view
pub fn all_tasks(project: &Project) -> Vec<Task> {
    project
        .blocks
        .iter()
        .flat_map(|b| b.sections.iter())
        .flat_map(|s| s.tasks.iter())
        .cloned()
        .collect()
}

/// New sibling ordering after moving `moved` to `position` within `ids`.
/// Position counts gaps in the original list; out-of-range clamps.
pub fn reordered_ids(ids: &[u32], moved: u32, position: i32) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(ids.len());
    let mut insert_at = position.max(0) as usize;
    // Removing the moved id above its insertion point shifts the gap left
    if let Some(old_idx) = ids.iter().position(|&id| id == moved) {
        if old_idx < insert_at {
            insert_at -= 1;
        }
    }
    out.extend(ids.iter().copied().filter(|&id| id != moved));
    insert_at = insert_at.min(out.len());
    out.insert(insert_at, moved);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn make_task(id: u32, sort_order: Option<i32>) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            status: TaskStatus::NotStarted,
            priority: None,
            deadline: None,
            notes: None,
            is_read: false,
            sort_order,
            custom_values: Default::default(),
        }
    }

    fn make_project() -> Project {
        Project {
            id: 1,
            name: "P".to_string(),
            description: None,
            blocks: vec![
                Block {
                    id: 10,
                    title: "B1".to_string(),
                    title_localized: None,
                    number: None,
                    sections: vec![Section {
                        id: 100,
                        title: "S1".to_string(),
                        notes: None,
                        sort_order: None,
                        tasks: vec![make_task(1000, Some(1)), make_task(1001, Some(0))],
                    }],
                },
                Block {
                    id: 11,
                    title: "B2".to_string(),
                    title_localized: None,
                    number: Some(1),
                    sections: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_normalize_defaults_missing_order_from_position() {
        let mut project = make_project();
        normalize_ordering(&mut project);
        // Block 10 had no number, gets position-based 1; block 11 kept 1.
        // Stable sort keeps the original relative order for the tie.
        assert_eq!(project.blocks[0].id, 10);
        assert_eq!(project.blocks[0].number, Some(1));
        assert_eq!(project.blocks[1].id, 11);
        let section = &project.blocks[0].sections[0];
        assert_eq!(section.sort_order, Some(0));
        // Tasks re-sorted by their explicit sort_order
        assert_eq!(section.tasks[0].id, 1001);
        assert_eq!(section.tasks[1].id, 1000);
    }

    #[test]
    fn test_find_task_returns_parents() {
        let project = make_project();
        let (block, section, task) = find_task(&project, 1001).unwrap();
        assert_eq!(block.id, 10);
        assert_eq!(section.id, 100);
        assert_eq!(task.id, 1001);
    }

    #[test]
    fn test_lookups_miss_gracefully() {
        let project = make_project();
        assert!(find_block(&project, 999).is_none());
        assert!(find_section(&project, 999).is_none());
        assert!(find_task(&project, 999).is_none());
    }

    #[test]
    fn test_reordered_ids_moves_forward_and_back() {
        let ids = [1, 2, 3, 4];
        // Drop 1 into the gap after 3 (gap index 3 in the original list)
        assert_eq!(reordered_ids(&ids, 1, 3), vec![2, 3, 1, 4]);
        // Drop 4 at the front
        assert_eq!(reordered_ids(&ids, 4, 0), vec![4, 1, 2, 3]);
        // Out-of-range clamps to the end
        assert_eq!(reordered_ids(&ids, 2, 99), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_reordered_ids_with_foreign_id_appends() {
        // Cross-section move: the moved id is not among the siblings yet
        assert_eq!(reordered_ids(&[1, 2], 9, 1), vec![1, 9, 2]);
    }

    #[test]
    fn test_all_task_ids_in_tree_order() {
        let mut project = make_project();
        normalize_ordering(&mut project);
        assert_eq!(all_task_ids(&project), vec![1001, 1000]);
    }
}
