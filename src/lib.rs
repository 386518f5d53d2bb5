//! Kaelion framework figures: model functions, sample grids and the four
//! plot renderers.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod figures;
