//! Detail Panel Handlers
//!
//! Maps raw tree data plus injected primitives into the callbacks the
//! block/section/task detail panels consume. Every handler resolves the
//! clicked entity's fresh data from the current tree; an entity missing
//! from the tree is a silent no-op.

use crate::models::{EntityRef, PendingAction, Project, SelectedContext, Task, TaskStatus};
use crate::state::tree;
use std::rc::Rc;

/// Injected primitives. Selection setters and dialog openers come from
/// the selection state; RPC triggers fire the corresponding command and
/// refetch on success at the call site.
#[derive(Clone)]
pub struct DetailDeps {
    /// Raw notes -> display content
    pub content_for: Rc<dyn Fn(Option<&str>) -> String>,
    pub set_context: Rc<dyn Fn(SelectedContext)>,
    pub set_task: Rc<dyn Fn(Task)>,
    pub open_dialog: Rc<dyn Fn(PendingAction)>,
    pub mark_read: Rc<dyn Fn(u32)>,
    pub delete_task: Rc<dyn Fn(u32)>,
    pub update_status: Rc<dyn Fn(u32, TaskStatus)>,
    pub duplicate_task: Rc<dyn Fn(u32)>,
    /// Optional confirmation gate for deletes
    pub confirm_delete: Option<Rc<dyn Fn(&Task) -> bool>>,
}

#[derive(Clone)]
pub struct DetailHandlers {
    deps: DetailDeps,
}

impl DetailHandlers {
    pub fn new(deps: DetailDeps) -> Self {
        Self { deps }
    }

    // ========================
    // Navigation
    // ========================

    pub fn on_select_block(&self, project: &Project, block_id: u32) {
        let Some(block) = tree::find_block(project, block_id) else {
            return;
        };
        (self.deps.set_context)(SelectedContext::Block {
            id: block.id,
            title: block.title.clone(),
            content: (self.deps.content_for)(block.title_localized.as_deref()),
        });
    }

    pub fn on_select_section(&self, project: &Project, section_id: u32) {
        let Some((_, section)) = tree::find_section(project, section_id) else {
            return;
        };
        (self.deps.set_context)(SelectedContext::Section {
            id: section.id,
            title: section.title.clone(),
            content: (self.deps.content_for)(section.notes.as_deref()),
        });
    }

    pub fn on_select_task(&self, project: &Project, task_id: u32) {
        if let Some((_, _, task)) = tree::find_task(project, task_id) {
            (self.deps.set_task)(task.clone());
        }
    }

    /// Task click inside a block detail panel
    pub fn on_select_task_from_block(&self, project: &Project, task_id: u32) {
        self.on_select_task(project, task_id);
    }

    pub fn on_navigate(&self, project: &Project, target: EntityRef) {
        match target {
            EntityRef::Project(id) => {
                if project.id == id {
                    (self.deps.set_context)(SelectedContext::Project {
                        id: project.id,
                        title: project.name.clone(),
                        content: (self.deps.content_for)(project.description.as_deref()),
                    });
                }
            }
            EntityRef::Block(id) => self.on_select_block(project, id),
            EntityRef::Section(id) => self.on_select_section(project, id),
            EntityRef::Task(id) => self.on_select_task(project, id),
        }
    }

    // ========================
    // Mutation triggers
    // ========================

    pub fn on_mark_read(&self, project: &Project, task_id: u32) {
        if tree::find_task(project, task_id).is_some() {
            (self.deps.mark_read)(task_id);
        }
    }

    pub fn on_delete_task(&self, project: &Project, task_id: u32) {
        let Some((_, _, task)) = tree::find_task(project, task_id) else {
            return;
        };
        if let Some(confirm) = &self.deps.confirm_delete {
            if !confirm(task) {
                return;
            }
        }
        (self.deps.delete_task)(task_id);
    }

    pub fn on_update_task_status(&self, project: &Project, task_id: u32, status: TaskStatus) {
        if tree::find_task(project, task_id).is_some() {
            (self.deps.update_status)(task_id, status);
        }
    }

    pub fn on_duplicate_task(&self, project: &Project, task_id: u32) {
        if tree::find_task(project, task_id).is_some() {
            (self.deps.duplicate_task)(task_id);
        }
    }

    // ========================
    // Structural-change triggers
    // ========================
    // Each stages the full entity and opens the dialog; the dialog
    // performs the actual RPC.

    pub fn on_split_task(&self, project: &Project, task_id: u32) {
        if let Some((_, _, task)) = tree::find_task(project, task_id) {
            (self.deps.open_dialog)(PendingAction::SplitTask(task.clone()));
        }
    }

    pub fn on_convert_task_to_section(&self, project: &Project, task_id: u32) {
        if let Some((_, _, task)) = tree::find_task(project, task_id) {
            (self.deps.open_dialog)(PendingAction::ConvertTaskToSection(task.clone()));
        }
    }

    pub fn on_merge_tasks(&self, project: &Project, section_id: u32) {
        if let Some((_, section)) = tree::find_section(project, section_id) {
            (self.deps.open_dialog)(PendingAction::MergeTasks(section.clone()));
        }
    }

    pub fn on_convert_section_to_task(&self, project: &Project, section_id: u32) {
        if let Some((_, section)) = tree::find_section(project, section_id) {
            (self.deps.open_dialog)(PendingAction::ConvertSectionToTask(section.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, Section};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorded {
        contexts: Vec<SelectedContext>,
        tasks: Vec<u32>,
        dialogs: Vec<PendingAction>,
        deleted: Vec<u32>,
        status_updates: Vec<(u32, TaskStatus)>,
    }

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            status: TaskStatus::NotStarted,
            priority: None,
            deadline: None,
            notes: Some(format!("notes for {title}")),
            is_read: false,
            sort_order: None,
            custom_values: Default::default(),
        }
    }

    fn make_project() -> Project {
        Project {
            id: 1,
            name: "Roadmap".to_string(),
            description: Some("overview".to_string()),
            blocks: vec![Block {
                id: 10,
                title: "Launch".to_string(),
                title_localized: None,
                number: Some(1),
                sections: vec![Section {
                    id: 100,
                    title: "Backend".to_string(),
                    notes: Some("api notes".to_string()),
                    sort_order: Some(0),
                    tasks: vec![make_task(1000, "Ship it")],
                }],
            }],
        }
    }

    fn handlers_with(
        recorded: &Rc<RefCell<Recorded>>,
        confirm_delete: Option<Rc<dyn Fn(&Task) -> bool>>,
    ) -> DetailHandlers {
        let ctx_rec = recorded.clone();
        let task_rec = recorded.clone();
        let dialog_rec = recorded.clone();
        let delete_rec = recorded.clone();
        let status_rec = recorded.clone();
        DetailHandlers::new(DetailDeps {
            content_for: Rc::new(|notes| notes.unwrap_or("").to_uppercase()),
            set_context: Rc::new(move |ctx| ctx_rec.borrow_mut().contexts.push(ctx)),
            set_task: Rc::new(move |task| task_rec.borrow_mut().tasks.push(task.id)),
            open_dialog: Rc::new(move |action| dialog_rec.borrow_mut().dialogs.push(action)),
            mark_read: Rc::new(|_| {}),
            delete_task: Rc::new(move |id| delete_rec.borrow_mut().deleted.push(id)),
            update_status: Rc::new(move |id, s| {
                status_rec.borrow_mut().status_updates.push((id, s))
            }),
            duplicate_task: Rc::new(|_| {}),
            confirm_delete,
        })
    }

    #[test]
    fn test_select_section_builds_context_via_lookup() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, None);
        handlers.on_select_section(&make_project(), 100);
        let rec = recorded.borrow();
        assert_eq!(rec.contexts.len(), 1);
        match &rec.contexts[0] {
            SelectedContext::Section { id, title, content } => {
                assert_eq!(*id, 100);
                assert_eq!(title, "Backend");
                assert_eq!(content, "API NOTES");
            }
            other => panic!("expected section context, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_entity_is_silent_noop() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, None);
        let project = make_project();
        handlers.on_select_section(&project, 999);
        handlers.on_select_task(&project, 999);
        handlers.on_merge_tasks(&project, 999);
        handlers.on_delete_task(&project, 999);
        let rec = recorded.borrow();
        assert!(rec.contexts.is_empty());
        assert!(rec.tasks.is_empty());
        assert!(rec.dialogs.is_empty());
        assert!(rec.deleted.is_empty());
    }

    #[test]
    fn test_navigate_dispatches_by_entity_kind() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, None);
        let project = make_project();
        handlers.on_navigate(&project, EntityRef::Project(1));
        handlers.on_navigate(&project, EntityRef::Block(10));
        handlers.on_navigate(&project, EntityRef::Task(1000));
        let rec = recorded.borrow();
        assert!(matches!(rec.contexts[0], SelectedContext::Project { .. }));
        assert!(matches!(rec.contexts[1], SelectedContext::Block { .. }));
        assert_eq!(rec.tasks, vec![1000]);
    }

    #[test]
    fn test_delete_respects_confirmation_gate() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, Some(Rc::new(|_| false)));
        handlers.on_delete_task(&make_project(), 1000);
        assert!(recorded.borrow().deleted.is_empty());

        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, Some(Rc::new(|_| true)));
        handlers.on_delete_task(&make_project(), 1000);
        assert_eq!(recorded.borrow().deleted, vec![1000]);
    }

    #[test]
    fn test_merge_stages_section_with_children() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, None);
        handlers.on_merge_tasks(&make_project(), 100);
        let rec = recorded.borrow();
        match &rec.dialogs[0] {
            PendingAction::MergeTasks(section) => {
                assert_eq!(section.id, 100);
                assert_eq!(section.tasks.len(), 1);
            }
            other => panic!("expected merge staging, got {other:?}"),
        }
    }

    #[test]
    fn test_update_status_forwards_minimal_payload() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let handlers = handlers_with(&recorded, None);
        handlers.on_update_task_status(&make_project(), 1000, TaskStatus::Completed);
        assert_eq!(
            recorded.borrow().status_updates,
            vec![(1000, TaskStatus::Completed)]
        );
    }
}
