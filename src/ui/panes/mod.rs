//! TUI pane rendering modules
//!
//! Stateless render functions for every visible pane, organized by
//! responsibility:
//!
//! - [`array`]: bar-chart view of the array with comparison/swap/pivot
//!   highlights
//! - [`code`]: reference C listing and description for the active algorithm
//! - [`vars`]: algorithm-internal variables, counters and complexity facts
//! - [`structure`]: world-coordinate canvas for the structure lab, plus its
//!   control pane
//! - [`status`]: status bar with keybindings and playback state

pub mod array;
pub mod code;
pub mod status;
pub mod structure;
pub mod vars;

pub use array::render_array_pane;
pub use code::render_code_pane;
pub use status::{render_status_bar, StatusBadge};
pub use structure::{render_control_pane, render_structure_pane};
pub use vars::render_vars_pane;
