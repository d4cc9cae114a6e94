//! Section Commands
//!
//! Frontend bindings for section-related backend commands, including the
//! structural merge/convert operations driven by the dialogs.

use super::invoke;
use crate::models::{Section, Task};
use serde::Serialize;

#[derive(Serialize)]
struct CreateSectionArgs<'a> {
    #[serde(rename = "blockId")]
    block_id: u32,
    title: &'a str,
}

#[derive(Serialize)]
struct UpdateSectionArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct ReorderSectionsArgs {
    #[serde(rename = "blockId")]
    block_id: u32,
    #[serde(rename = "orderedIds")]
    ordered_ids: Vec<u32>,
}

#[derive(Serialize)]
struct MoveSectionArgs {
    id: u32,
    #[serde(rename = "newBlockId")]
    new_block_id: u32,
    position: i32,
}

#[derive(Serialize)]
struct MergeTasksArgs<'a> {
    #[serde(rename = "sectionId")]
    section_id: u32,
    #[serde(rename = "taskIds")]
    task_ids: Vec<u32>,
    title: &'a str,
}

pub async fn create_section(block_id: u32, title: &str) -> Result<Section, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateSectionArgs { block_id, title })
        .map_err(|e| e.to_string())?;
    let result = invoke("create_section", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_section(
    id: u32,
    title: Option<&str>,
    notes: Option<&str>,
) -> Result<Section, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateSectionArgs { id, title, notes })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_section", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_section(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_section", js_args).await;
    Ok(())
}

pub async fn reorder_sections(block_id: u32, ordered_ids: Vec<u32>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderSectionsArgs {
        block_id,
        ordered_ids,
    })
    .map_err(|e| e.to_string())?;
    let _ = invoke("reorder_sections", js_args).await;
    Ok(())
}

pub async fn move_section(id: u32, new_block_id: u32, position: i32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&MoveSectionArgs {
        id,
        new_block_id,
        position,
    })
    .map_err(|e| e.to_string())?;
    let _ = invoke("move_section", js_args).await;
    Ok(())
}

/// Merge the given tasks of a section into one task with the given title
pub async fn merge_tasks(
    section_id: u32,
    task_ids: Vec<u32>,
    title: &str,
) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&MergeTasksArgs {
        section_id,
        task_ids,
        title,
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("merge_tasks", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Collapse a section (and its tasks) into a single task
pub async fn convert_section_to_task(id: u32) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("convert_section_to_task", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
