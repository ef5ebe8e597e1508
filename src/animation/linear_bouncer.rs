// src/animation/linear_bouncer.rs
//
// Straight-line motion that bounces off the screen edges

use nannou::prelude::*;

use super::{check_wall_collision, ScreenSaver};
use crate::models::Shape;

/// Where every LinearBouncer begins, whatever it was built with.
pub fn start_position() -> Vec2 {
    vec2(100.0, 100.0)
}

#[derive(Debug, Clone)]
pub struct LinearBouncer {
    shape: Shape,
    velocity: Vec2,
}

impl LinearBouncer {
    pub fn new(radius: f32, velocity: Vec2, color: Rgb8) -> Self {
        let mut shape = Shape::new(radius, color);
        shape.position = start_position();
        Self { shape, velocity }
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }
}

impl ScreenSaver for LinearBouncer {
    fn update(&mut self, delta_ms: f32, screen_width: u32, screen_height: u32) {
        self.shape.position += self.velocity * delta_ms;
        check_wall_collision(
            &mut self.shape,
            &mut self.velocity,
            screen_width,
            screen_height,
        );
    }

    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
