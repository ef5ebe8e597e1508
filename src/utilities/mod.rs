pub mod color;

pub use color::transition_color;
