//! Block Commands
//!
//! Frontend bindings for block-related backend commands.

use super::invoke;
use crate::models::Block;
use serde::Serialize;

#[derive(Serialize)]
struct CreateBlockArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    title: &'a str,
}

#[derive(Serialize)]
struct RenameBlockArgs<'a> {
    id: u32,
    title: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct ReorderBlocksArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    #[serde(rename = "orderedIds")]
    ordered_ids: Vec<u32>,
}

pub async fn create_block(project_id: u32, title: &str) -> Result<Block, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateBlockArgs { project_id, title })
        .map_err(|e| e.to_string())?;
    let result = invoke("create_block", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn rename_block(id: u32, title: &str) -> Result<Block, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&RenameBlockArgs { id, title }).map_err(|e| e.to_string())?;
    let result = invoke("rename_block", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_block(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_block", js_args).await;
    Ok(())
}

/// Persist a full new block ordering for a project
pub async fn reorder_blocks(project_id: u32, ordered_ids: Vec<u32>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderBlocksArgs {
        project_id,
        ordered_ids,
    })
    .map_err(|e| e.to_string())?;
    let _ = invoke("reorder_blocks", js_args).await;
    Ok(())
}
