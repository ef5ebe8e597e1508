// src/models/shape.rs
//
// The renderable disc owned by every screen saver.
// Coordinates are screen space: origin top-left, y pointing down.

use nannou::prelude::*;

pub const DEFAULT_RADIUS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    // the point `origin` inside the bounding box sits here
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgb8,
    // local origin, measured from the top-left of the bounding box
    pub origin: Vec2,
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS, WHITE)
    }
}

impl Shape {
    pub fn new(radius: f32, color: Rgb8) -> Self {
        Self {
            position: Vec2::ZERO,
            radius,
            color,
            origin: Vec2::ZERO,
        }
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Centre of the disc as it appears on screen.
    pub fn center(&self) -> Vec2 {
        self.position - self.origin + Vec2::splat(self.radius)
    }

    /// Top-left corner of the drawn bounding box.
    pub fn top_left(&self) -> Vec2 {
        self.position - self.origin
    }
}
