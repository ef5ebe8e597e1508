pub mod color_cycling_bouncer;
pub mod linear_bouncer;
pub mod spiral_pulsar;

pub use color_cycling_bouncer::ColorCyclingBouncer;
pub use linear_bouncer::LinearBouncer;
pub use spiral_pulsar::SpiralPulsar;

use log::trace;
use nannou::prelude::*;

use crate::models::{resolve_wall_collision, Shape};
use crate::render::RenderTarget;

// the base trait every screen saver implements
pub trait ScreenSaver {
    // delta_ms is simulated time in milliseconds since the previous frame
    fn update(&mut self, delta_ms: f32, screen_width: u32, screen_height: u32);

    fn shape(&self) -> &Shape;
    fn velocity(&self) -> Vec2;
    fn name(&self) -> &'static str;

    fn draw(&self, target: &mut dyn RenderTarget) {
        let shape = self.shape();
        target.fill_circle(shape.center(), shape.radius, shape.color);
    }
}

/// Keeps a saver on screen by clamping it to the walls and reflecting its velocity.
pub fn check_wall_collision(
    shape: &mut Shape,
    velocity: &mut Vec2,
    screen_width: u32,
    screen_height: u32,
) {
    let result = resolve_wall_collision(
        shape.position,
        shape.diameter(),
        *velocity,
        screen_width,
        screen_height,
    );
    if result.collided() {
        trace!(
            "wall hit at ({:.1}, {:.1}) x:{} y:{}",
            shape.position.x,
            shape.position.y,
            result.hit_x,
            result.hit_y
        );
    }
    shape.position = result.position;
    *velocity = result.velocity;
}
