//! Task Commands
//!
//! Frontend bindings for task-related backend commands.

use super::invoke;
use crate::models::{Section, Task, TaskPriority, TaskStatus};
use serde::Serialize;

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    #[serde(rename = "sectionId")]
    pub section_id: u32,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Option<TaskPriority>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<Option<i64>>,
}

#[derive(Serialize)]
struct UpdateTaskStatusArgs {
    id: u32,
    status: TaskStatus,
}

#[derive(Serialize)]
struct ReorderTasksArgs {
    #[serde(rename = "sectionId")]
    section_id: u32,
    #[serde(rename = "orderedIds")]
    ordered_ids: Vec<u32>,
}

#[derive(Serialize)]
struct MoveTaskArgs {
    id: u32,
    #[serde(rename = "newSectionId")]
    new_section_id: u32,
    position: i32,
}

#[derive(Serialize)]
struct SplitTaskArgs<'a> {
    id: u32,
    titles: &'a [String],
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Partial update; `priority`/`deadline` use a double Option so an
/// explicit null clears the field while absence leaves it untouched
pub async fn update_task(
    id: u32,
    title: Option<&str>,
    notes: Option<&str>,
    priority: Option<Option<TaskPriority>>,
    deadline: Option<Option<i64>>,
) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateTaskArgs {
        id,
        title,
        notes,
        priority,
        deadline,
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("update_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_task_status(id: u32, status: TaskStatus) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateTaskStatusArgs { id, status })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_task_status", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn mark_task_read(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("mark_task_read", js_args).await;
    Ok(())
}

pub async fn delete_task(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_task", js_args).await;
    Ok(())
}

pub async fn duplicate_task(id: u32) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("duplicate_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn reorder_tasks(section_id: u32, ordered_ids: Vec<u32>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderTasksArgs {
        section_id,
        ordered_ids,
    })
    .map_err(|e| e.to_string())?;
    let _ = invoke("reorder_tasks", js_args).await;
    Ok(())
}

pub async fn move_task(id: u32, new_section_id: u32, position: i32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&MoveTaskArgs {
        id,
        new_section_id,
        position,
    })
    .map_err(|e| e.to_string())?;
    let _ = invoke("move_task", js_args).await;
    Ok(())
}

/// Split a task into several sibling tasks, one per title
pub async fn split_task(id: u32, titles: &[String]) -> Result<Vec<Task>, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&SplitTaskArgs { id, titles }).map_err(|e| e.to_string())?;
    let result = invoke("split_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Promote a task to a section in the same block
pub async fn convert_task_to_section(id: u32) -> Result<Section, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("convert_task_to_section", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
