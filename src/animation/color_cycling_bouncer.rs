// src/animation/color_cycling_bouncer.rs
//
// A LinearBouncer whose fill colour cycles with time

use nannou::prelude::*;

use super::{LinearBouncer, ScreenSaver};
use crate::models::Shape;
use crate::utilities::transition_color;

#[derive(Debug, Clone)]
pub struct ColorCyclingBouncer {
    bouncer: LinearBouncer,
    color_speed: f32, // radians per millisecond
    elapsed_time: f32,
}

impl ColorCyclingBouncer {
    pub fn new(radius: f32, velocity: Vec2, color_speed: f32) -> Self {
        Self {
            bouncer: LinearBouncer::new(radius, velocity, WHITE),
            color_speed,
            elapsed_time: 0.0,
        }
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }
}

impl ScreenSaver for ColorCyclingBouncer {
    fn update(&mut self, delta_ms: f32, screen_width: u32, screen_height: u32) {
        self.bouncer.update(delta_ms, screen_width, screen_height);

        self.elapsed_time += delta_ms;
        self.bouncer.shape_mut().color = transition_color(self.elapsed_time, self.color_speed);
    }

    fn shape(&self) -> &Shape {
        self.bouncer.shape()
    }

    fn velocity(&self) -> Vec2 {
        self.bouncer.velocity()
    }

    fn name(&self) -> &'static str {
        "color_cycling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_white_at_fixed_point() {
        let saver = ColorCyclingBouncer::new(20.0, vec2(0.5, 0.5), 0.2);
        assert_eq!(saver.shape().color, WHITE);
        assert_eq!(saver.shape().position, vec2(100.0, 100.0));
        assert_eq!(saver.elapsed_time(), 0.0);
    }

    #[test]
    fn test_moves_like_linear_bouncer() {
        let mut cycling = ColorCyclingBouncer::new(20.0, vec2(0.5, 0.5), 0.2);
        let mut linear = LinearBouncer::new(20.0, vec2(0.5, 0.5), WHITE);

        for _ in 0..500 {
            cycling.update(7.0, 600, 800);
            linear.update(7.0, 600, 800);
            assert_eq!(cycling.shape().position, linear.shape().position);
            assert_eq!(cycling.velocity(), linear.velocity());
        }
    }

    #[test]
    fn test_color_follows_elapsed_time() {
        let mut saver = ColorCyclingBouncer::new(20.0, vec2(0.5, 0.5), 0.2);
        saver.update(100.0, 600, 800);
        saver.update(50.0, 600, 800);

        assert_eq!(saver.elapsed_time(), 150.0);
        assert_eq!(saver.shape().color, transition_color(150.0, 0.2));
    }

    #[test]
    fn test_color_changes_between_frames() {
        let mut saver = ColorCyclingBouncer::new(20.0, vec2(0.0, 0.0), 0.2);
        saver.update(1.0, 600, 800);
        let first = saver.shape().color;
        saver.update(5.0, 600, 800);
        assert_ne!(saver.shape().color, first);
    }
}
