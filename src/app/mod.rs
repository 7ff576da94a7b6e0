//! Application orchestration: demo pager, state, event loop and input
//! handling.

pub mod event;
pub mod handler;
pub mod pager;
pub mod state;
