// src/views/mod.rs

pub mod saver_manager;

pub use saver_manager::{build_saver, SaverManager};
