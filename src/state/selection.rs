//! Selection State
//!
//! One place for everything the detail/discussion panels and bulk actions
//! key off: the focused context, the focused task, the multi-select set,
//! the staged subject of a pending dialog, and the discussion entity.
//!
//! Context and task are set atomically: `select_task` fills both slots,
//! and selecting a non-task context clears the task slot. Downstream
//! panels render task detail whenever the task slot is set.

use crate::models::{PendingAction, SelectedContext, Task};
use std::collections::HashSet;
use std::rc::Rc;

/// Host-layout callbacks for narrow viewports. Each returns whether the
/// host actually switched panes (false on wide layouts).
#[derive(Clone)]
pub struct LayoutHooks {
    pub show_detail: Rc<dyn Fn() -> bool>,
    pub hide_sidebar: Rc<dyn Fn() -> bool>,
}

impl LayoutHooks {
    fn apply(&self) {
        let _ = (self.show_detail)();
        let _ = (self.hide_sidebar)();
    }
}

#[derive(Clone, Default)]
pub struct SelectionState {
    context: Option<SelectedContext>,
    task: Option<Task>,
    checked_task_ids: HashSet<u32>,
    selection_mode: bool,
    pending_action: Option<PendingAction>,
    discussion: Option<SelectedContext>,
    layout_hooks: Option<LayoutHooks>,
}

impl SelectionState {
    pub fn new(layout_hooks: Option<LayoutHooks>) -> Self {
        Self {
            layout_hooks,
            ..Default::default()
        }
    }

    pub fn context(&self) -> Option<&SelectedContext> {
        self.context.as_ref()
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    pub fn checked_task_ids(&self) -> &HashSet<u32> {
        &self.checked_task_ids
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending_action.as_ref()
    }

    pub fn discussion(&self) -> Option<&SelectedContext> {
        self.discussion.as_ref()
    }

    /// Focus a context for the detail panel. Non-task contexts clear the
    /// task slot; on narrow layouts the host is asked to swap panes.
    pub fn select_context(&mut self, ctx: SelectedContext) {
        if !ctx.is_task() {
            self.task = None;
        }
        self.context = Some(ctx);
        if let Some(hooks) = &self.layout_hooks {
            hooks.apply();
        }
    }

    /// Focus a task: fills the task slot and a task-kind context together
    pub fn select_task(&mut self, task: Task) {
        self.context = Some(SelectedContext::Task {
            id: task.id,
            title: task.title.clone(),
            content: task.notes.clone().unwrap_or_default(),
        });
        self.task = Some(task);
        if let Some(hooks) = &self.layout_hooks {
            hooks.apply();
        }
    }

    pub fn clear_context(&mut self) {
        self.context = None;
        self.task = None;
    }

    // ========================
    // Multi-select
    // ========================

    pub fn set_selection_mode(&mut self, on: bool) {
        self.selection_mode = on;
        if !on {
            self.checked_task_ids.clear();
        }
    }

    pub fn toggle_checked(&mut self, task_id: u32) {
        if !self.checked_task_ids.remove(&task_id) {
            self.checked_task_ids.insert(task_id);
        }
    }

    pub fn check_all(&mut self, task_ids: &[u32]) {
        self.checked_task_ids = task_ids.iter().copied().collect();
    }

    /// Empty the multi-select set and leave selection mode
    pub fn clear_checked(&mut self) {
        self.checked_task_ids.clear();
        self.selection_mode = false;
    }

    // ========================
    // Dialog staging & discussion
    // ========================

    pub fn stage_action(&mut self, action: PendingAction) {
        self.pending_action = Some(action);
    }

    pub fn clear_action(&mut self) {
        self.pending_action = None;
    }

    pub fn open_discussion(&mut self, entity: SelectedContext) {
        self.discussion = Some(entity);
    }

    pub fn close_discussion(&mut self) {
        self.discussion = None;
    }

    /// Reset every slot; used on project switch
    pub fn clear_all(&mut self) {
        self.context = None;
        self.task = None;
        self.checked_task_ids.clear();
        self.selection_mode = false;
        self.pending_action = None;
        self.discussion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use std::cell::Cell;

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            status: TaskStatus::NotStarted,
            priority: None,
            deadline: None,
            notes: None,
            is_read: false,
            sort_order: None,
            custom_values: Default::default(),
        }
    }

    #[test]
    fn test_select_task_sets_task_kind_context() {
        let mut state = SelectionState::new(None);
        state.select_task(make_task(1, "Alpha"));
        assert!(state.task().is_some());
        assert!(matches!(
            state.context(),
            Some(SelectedContext::Task { id: 1, .. })
        ));
    }

    #[test]
    fn test_block_context_clears_task_slot() {
        let mut state = SelectionState::new(None);
        state.select_task(make_task(1, "Alpha"));
        state.select_context(SelectedContext::Block {
            id: 5,
            title: "Block".to_string(),
            content: String::new(),
        });
        assert!(state.task().is_none());
        assert!(matches!(
            state.context(),
            Some(SelectedContext::Block { id: 5, .. })
        ));
    }

    #[test]
    fn test_toggle_checked_flips_membership() {
        let mut state = SelectionState::new(None);
        state.toggle_checked(2);
        assert!(state.checked_task_ids().contains(&2));
        state.toggle_checked(2);
        assert!(!state.checked_task_ids().contains(&2));
    }

    #[test]
    fn test_clear_checked_leaves_selection_mode() {
        let mut state = SelectionState::new(None);
        state.set_selection_mode(true);
        state.check_all(&[1, 2, 3]);
        state.clear_checked();
        assert!(state.checked_task_ids().is_empty());
        assert!(!state.selection_mode());
    }

    #[test]
    fn test_clear_all_resets_every_slot() {
        let mut state = SelectionState::new(None);
        state.select_task(make_task(1, "Alpha"));
        state.set_selection_mode(true);
        state.check_all(&[1, 2, 3]);
        state.stage_action(PendingAction::SplitTask(make_task(1, "Alpha")));
        state.open_discussion(SelectedContext::Project {
            id: 9,
            title: "P".to_string(),
            content: String::new(),
        });

        state.clear_all();

        assert!(state.context().is_none());
        assert!(state.task().is_none());
        assert!(state.checked_task_ids().is_empty());
        assert!(!state.selection_mode());
        assert!(state.pending_action().is_none());
        assert!(state.discussion().is_none());
    }

    #[test]
    fn test_layout_hooks_fire_on_selection() {
        let detail_calls = Rc::new(Cell::new(0u32));
        let sidebar_calls = Rc::new(Cell::new(0u32));
        let d = detail_calls.clone();
        let s = sidebar_calls.clone();
        let hooks = LayoutHooks {
            show_detail: Rc::new(move || {
                d.set(d.get() + 1);
                true
            }),
            hide_sidebar: Rc::new(move || {
                s.set(s.get() + 1);
                true
            }),
        };

        let mut state = SelectionState::new(Some(hooks));
        state.select_task(make_task(1, "Alpha"));
        state.select_context(SelectedContext::Section {
            id: 2,
            title: "S".to_string(),
            content: String::new(),
        });
        assert_eq!(detail_calls.get(), 2);
        assert_eq!(sidebar_calls.get(), 2);
    }
}
