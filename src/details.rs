//! Detail panel rendering

pub mod details_render;
