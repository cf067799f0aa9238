//! Rendering of character-view blocks.
//!
//! This module builds the render model from block text and settings, and
//! turns the model into output for the supported surfaces: a labeled node
//! tree (with HTML serialization) and colored terminal text.

pub mod builder;
pub mod node;
pub mod terminal;

pub use builder::{build_from_lines, build_render_model};
pub use node::{to_node_tree, NodeTag, RenderNode};
pub use terminal::{render_terminal, ColorMode};
