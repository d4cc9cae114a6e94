//! UI Components
//!
//! Leptos components composing the state layer into the three-pane app.

mod block_detail;
mod delete_confirm_button;
mod detail_panel;
mod dialogs;
mod discussion_panel;
mod filter_bar;
mod section_detail;
mod sidebar;
mod table_view;
mod task_detail;

pub use block_detail::BlockDetail;
pub use delete_confirm_button::DeleteConfirmButton;
pub use detail_panel::DetailPanel;
pub use dialogs::ActionDialogs;
pub use discussion_panel::DiscussionPanel;
pub use filter_bar::FilterBar;
pub use section_detail::SectionDetail;
pub use sidebar::ProjectSidebar;
pub use table_view::TaskTable;
pub use task_detail::TaskDetail;

use wasm_bindgen::JsValue;

/// Epoch-ms deadline -> locale date string for display
pub(crate) fn format_deadline(ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms as f64));
    String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}
