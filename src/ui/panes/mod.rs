//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the current sorting step
//! - [`tree`]: Merge sort recursion tree for the current step
//! - [`details`]: Current step breakdown and algorithm reference card
//! - [`graph`]: Traversal progress grouped by layer
//! - [`memory`]: Array/vector/linked-list layout plus stack and queue models
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared styling helpers
//!
//! Each pane exports a `render_*_pane()` function and takes everything it
//! draws as arguments; none of them hold state.

mod utils;

pub mod bars;
pub mod details;
pub mod graph;
pub mod memory;
pub mod status;
pub mod tree;

pub use bars::render_bars_pane;
pub use details::render_details_pane;
pub use graph::{render_graph_pane, GraphRenderData};
pub use memory::{render_memory_pane, MemoryRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;
