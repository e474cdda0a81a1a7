//! InnoSphere component library.
//!
//! Every component links its own stylesheet, so pages only import what they
//! render.

pub mod components;

pub use components::*;
