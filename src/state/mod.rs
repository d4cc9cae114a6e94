//! View State
//!
//! Pure state holders and derivations behind the sidebar, table, and
//! detail panels. Nothing in here touches the DOM or the reactive
//! runtime; components wrap these in signals.

pub mod detail;
pub mod expansion;
pub mod selection;
pub mod table;
pub mod tree;

pub use detail::{DetailDeps, DetailHandlers};
pub use expansion::ExpansionState;
pub use selection::{LayoutHooks, SelectionState};
pub use table::{derive_table_view, SortState, TableQuery};
