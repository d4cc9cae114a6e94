//! Frontend Models
//!
//! Data structures matching backend entities, plus the view-state unions
//! shared between the sidebar, table, and detail panels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Block data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub title: String,
    pub title_localized: Option<String>,
    /// Display number; backend may omit it for legacy rows
    pub number: Option<i32>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Section data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub title: String,
    pub notes: Option<String>,
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Option<TaskPriority>,
    /// Deadline as epoch milliseconds
    pub deadline: Option<i64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub sort_order: Option<i32>,
    /// Custom field id -> raw value
    #[serde(default)]
    pub custom_values: HashMap<u32, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Critical => "Critical",
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Critical => "critical",
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

/// Custom field definition (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u32,
    pub name: String,
    pub field_type: String,
}

/// One filter rule over a custom field; rules combine with logical AND
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldFilter {
    pub field_id: u32,
    pub op: FilterOp,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Is,
    Contains,
    IsEmpty,
    IsNotEmpty,
}

// ========================
// View-state unions
// ========================

/// The entity currently shown in the detail panel.
///
/// Consumers must match exhaustively; the task variant exists so the
/// context and task slots can be set atomically on task selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedContext {
    Project { id: u32, title: String, content: String },
    Block { id: u32, title: String, content: String },
    Section { id: u32, title: String, content: String },
    Task { id: u32, title: String, content: String },
}

impl SelectedContext {
    pub fn id(&self) -> u32 {
        match self {
            SelectedContext::Project { id, .. }
            | SelectedContext::Block { id, .. }
            | SelectedContext::Section { id, .. }
            | SelectedContext::Task { id, .. } => *id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SelectedContext::Project { title, .. }
            | SelectedContext::Block { title, .. }
            | SelectedContext::Section { title, .. }
            | SelectedContext::Task { title, .. } => title,
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, SelectedContext::Task { .. })
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            SelectedContext::Project { .. } => "Project",
            SelectedContext::Block { .. } => "Block",
            SelectedContext::Section { .. } => "Section",
            SelectedContext::Task { .. } => "Task",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            SelectedContext::Project { content, .. }
            | SelectedContext::Block { content, .. }
            | SelectedContext::Section { content, .. }
            | SelectedContext::Task { content, .. } => content,
        }
    }
}

/// Reference to an entity in the project tree, used for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Project(u32),
    Block(u32),
    Section(u32),
    Task(u32),
}

/// Subject of a pending split/merge/convert dialog
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    SplitTask(Task),
    MergeTasks(Section),
    ConvertTaskToSection(Task),
    ConvertSectionToTask(Section),
}

/// Sortable built-in columns of the task table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Status,
    Priority,
    Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}
