//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`gutter`]: Line-number column that follows the surface scroll
//! - [`layout`]: Screen regions shared by rendering and mouse handling
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Theming and colors

pub mod gutter;
pub mod layout;
pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use layout::{EditorLayout, editor_layout, surface_size};
pub use overlays::centered_popup_rect;
pub use render::{render, visible_segment};
