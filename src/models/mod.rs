pub mod collision;
pub mod shape;

pub use collision::{resolve_wall_collision, CollisionResult};
pub use shape::Shape;
