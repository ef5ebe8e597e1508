// src/render/target.rs
//
// Anything a screen saver can draw its disc onto.
// Savers speak screen space (top-left origin, y down); nannou's Draw is
// centred with y up, so NannouTarget converts on the way through.

use nannou::prelude::*;

pub trait RenderTarget {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb8);
}

/// Converts a screen-space point to nannou's window coordinates.
pub fn screen_to_world(point: Vec2, screen_width: u32, screen_height: u32) -> Point2 {
    pt2(
        point.x - screen_width as f32 / 2.0,
        screen_height as f32 / 2.0 - point.y,
    )
}

pub struct NannouTarget<'a> {
    draw: &'a Draw,
    screen_width: u32,
    screen_height: u32,
}

impl<'a> NannouTarget<'a> {
    pub fn new(draw: &'a Draw, screen_width: u32, screen_height: u32) -> Self {
        Self {
            draw,
            screen_width,
            screen_height,
        }
    }
}

impl RenderTarget for NannouTarget<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb8) {
        let point = screen_to_world(center, self.screen_width, self.screen_height);
        self.draw
            .ellipse()
            .xy(point)
            .radius(radius)
            .color(color);
    }
}
