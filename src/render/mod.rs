// src/render/mod.rs
// Drawing screen savers onto a surface

pub mod target;

pub use target::{screen_to_world, NannouTarget, RenderTarget};

#[cfg(test)]
pub use target::testing;
