//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* indicator and the demo pager and turns them
//! into cells on the terminal.  No input handling happens here.

pub mod indicator_widget;
pub mod layout;
pub mod pager_widget;
pub mod smooth_scroll;
pub mod theme;
