//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod block;
mod custom_field;
mod project;
mod section;
mod task;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

// Re-export all public items
pub use block::*;
pub use custom_field::*;
pub use project::*;
pub use section::*;
pub use task::*;
