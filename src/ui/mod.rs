//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and colors
//! - Screen geometry shared with hit-testing
//! - Reusable widgets
//! - Main render entry point

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
