//! Custom Field Commands
//!
//! Frontend bindings for custom-field definitions and per-task values.

use super::invoke;
use crate::models::CustomField;
use serde::Serialize;

#[derive(Serialize)]
struct ProjectIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
}

#[derive(Serialize)]
struct SetValueArgs<'a> {
    #[serde(rename = "taskId")]
    task_id: u32,
    #[serde(rename = "fieldId")]
    field_id: u32,
    value: &'a str,
}

pub async fn list_custom_fields(project_id: u32) -> Result<Vec<CustomField>, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ProjectIdArgs { project_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_custom_fields", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_task_custom_value(
    task_id: u32,
    field_id: u32,
    value: &str,
) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SetValueArgs {
        task_id,
        field_id,
        value,
    })
    .map_err(|e| e.to_string())?;
    let _ = invoke("set_task_custom_value", js_args).await;
    Ok(())
}
