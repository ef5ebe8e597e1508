// src/models/collision.rs
//
// Wall collision against the four screen edges.
// Each axis is resolved on its own: a penetrating edge is clamped back onto
// the wall and that axis' velocity is reflected. Speed is never damped.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub position: Vec2,
    pub velocity: Vec2,
    pub hit_x: bool,
    pub hit_y: bool,
}

impl CollisionResult {
    pub fn collided(&self) -> bool {
        self.hit_x || self.hit_y
    }
}

/// `position` is the top-left of a box `diameter` wide and tall.
pub fn resolve_wall_collision(
    position: Vec2,
    diameter: f32,
    velocity: Vec2,
    screen_width: u32,
    screen_height: u32,
) -> CollisionResult {
    let (x, vx, hit_x) = resolve_axis(position.x, velocity.x, diameter, screen_width as f32);
    let (y, vy, hit_y) = resolve_axis(position.y, velocity.y, diameter, screen_height as f32);

    CollisionResult {
        position: vec2(x, y),
        velocity: vec2(vx, vy),
        hit_x,
        hit_y,
    }
}

fn resolve_axis(position: f32, velocity: f32, diameter: f32, bound: f32) -> (f32, f32, bool) {
    if position + diameter > bound {
        (bound - diameter, -velocity, true)
    } else if position < 0.0 {
        (0.0, -velocity, true)
    } else {
        (position, velocity, false)
    }
}
