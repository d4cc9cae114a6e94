//! Project Commands
//!
//! Frontend bindings for project-related backend commands.

use super::invoke;
use crate::models::Project;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ProjectIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
}

#[derive(Serialize)]
struct UpdateProjectArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

pub async fn list_projects() -> Result<Vec<Project>, String> {
    let result = invoke("list_projects", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Fetch one project with its full block/section/task tree
pub async fn get_project(project_id: u32) -> Result<Project, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ProjectIdArgs { project_id }).map_err(|e| e.to_string())?;
    let result = invoke("get_project", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_project(
    id: u32,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateProjectArgs {
        id,
        name,
        description,
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("update_project", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
