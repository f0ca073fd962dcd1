//! Title line with the entry indicator

pub mod input_render;
