//! Bottom help line listing the active keys

pub mod help_line_render;
