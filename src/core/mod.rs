//! Core indicator engine: cursor model, geometry, per-frame rendering and
//! tap mapping.
//!
//! Nothing in this module touches the terminal.  The host owns the drawing
//! surface and the pager, and wires one to the other through
//! [`indicator::PageIndicator`].

pub mod color;
pub mod cursor;
pub mod geometry;
pub mod indicator;
pub mod options;
pub mod pager;
pub mod renderer;
pub mod touch;
