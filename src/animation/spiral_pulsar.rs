// src/animation/spiral_pulsar.rs
//
// Spirals outward from the screen centre while its size pulses.
//
// The spiral radius grows without limit. Once it passes half the screen the
// wall check clamps the disc onto an edge every frame, but the next frame
// recomputes the position from the spiral again, so the clamp and the
// velocity flip never carry over.

use nannou::prelude::*;

use super::{check_wall_collision, ScreenSaver};
use crate::models::Shape;

pub const INITIAL_SPIRAL_RADIUS: f32 = 50.0;
pub const BASE_SIZE: f32 = 20.0;
pub const PULSE_AMPLITUDE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct SpiralPulsar {
    shape: Shape,
    velocity: Vec2,
    spiral_speed: f32,
    time_elapsed: f32,
}

impl SpiralPulsar {
    pub fn new(radius: f32, start_velocity: Vec2, spiral_speed: f32) -> Self {
        Self {
            shape: Shape::new(radius, CYAN),
            velocity: start_velocity,
            spiral_speed,
            time_elapsed: 0.0,
        }
    }

    pub fn time_elapsed(&self) -> f32 {
        self.time_elapsed
    }

    /// Distance from the screen centre the spiral has reached.
    pub fn spiral_radius(&self) -> f32 {
        INITIAL_SPIRAL_RADIUS + self.spiral_speed * self.time_elapsed
    }
}

/// Drawn size for a given spiral phase, always within 10..=30.
pub fn pulse_size(phase: f32) -> f32 {
    BASE_SIZE + PULSE_AMPLITUDE * phase.sin()
}

impl ScreenSaver for SpiralPulsar {
    fn update(&mut self, delta_ms: f32, screen_width: u32, screen_height: u32) {
        self.time_elapsed += delta_ms;

        let angle = self.spiral_speed * self.time_elapsed;
        let center = vec2((screen_width / 2) as f32, (screen_height / 2) as f32);
        self.shape.position = center + self.spiral_radius() * vec2(angle.cos(), angle.sin());

        let size = pulse_size(angle);
        self.shape.radius = size;
        self.shape.origin = Vec2::splat(size);

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
        "spiral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingTarget;
    use rand::Rng;

    #[test]
    fn test_initial_state() {
        let saver = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        assert_eq!(saver.shape().radius, 12.0);
        assert_eq!(saver.shape().color, CYAN);
        assert_eq!(saver.velocity(), vec2(0.5, 0.5));
        assert_eq!(saver.spiral_radius(), 50.0);
    }

    #[test]
    fn test_follows_spiral_path() {
        let mut saver = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        saver.update(100.0, 600, 800);

        // angle 15 rad, spiral radius 50 + 15
        let angle = 0.15f32 * 100.0;
        let expected = vec2(300.0, 400.0) + 65.0 * vec2(angle.cos(), angle.sin());
        let shape = saver.shape();
        assert!((shape.position - expected).length() < 1e-3);

        let size = 20.0 + 10.0 * angle.sin();
        assert!((shape.radius - size).abs() < 1e-4);
        assert_eq!(shape.origin, Vec2::splat(shape.radius));

        // nothing clamped this early on
        assert_eq!(saver.velocity(), vec2(0.5, 0.5));
    }

    #[test]
    fn test_drawn_centred_on_position() {
        let mut saver = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        saver.update(100.0, 600, 800);

        let mut target = RecordingTarget::default();
        saver.draw(&mut target);
        let (center, radius, color) = target.circles[0];
        assert!((center - saver.shape().position).length() < 1e-4);
        assert_eq!(radius, saver.shape().radius);
        assert_eq!(color, CYAN);
    }

    #[test]
    fn test_drawn_size_stays_within_pulse_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let size = pulse_size(rng.gen_range(-1.0e5..1.0e5));
            assert!((10.0..=30.0).contains(&size), "size {} out of range", size);
        }

        let mut saver = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        for _ in 0..2_000 {
            saver.update(rng.gen_range(0.0..20.0), 600, 800);
            let radius = saver.shape().radius;
            assert!((10.0..=30.0).contains(&radius));
        }
    }

    #[test]
    fn test_escaped_spiral_is_pinned_to_walls() {
        let mut saver = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        saver.update(10_000.0, 600, 800);
        assert!(saver.spiral_radius() > 400.0);

        // the collision box is clamped inside the screen...
        let shape = *saver.shape();
        assert!(shape.position.x >= 0.0 && shape.position.y >= 0.0);
        assert!(shape.position.x + shape.diameter() <= 600.0);
        assert!(shape.position.y + shape.diameter() <= 800.0);

        // ...but the disc is drawn centred on that point, so it can hang off
        // the left or top edge by up to its radius
        assert_eq!(shape.top_left(), shape.position - Vec2::splat(shape.radius));
    }

    #[test]
    fn test_clamp_does_not_carry_into_next_frame() {
        let mut stepped = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        stepped.update(5_000.0, 600, 800);
        stepped.update(5_000.0, 600, 800);

        let mut jumped = SpiralPulsar::new(12.0, vec2(0.5, 0.5), 0.15);
        jumped.update(10_000.0, 600, 800);

        assert_eq!(stepped.time_elapsed(), jumped.time_elapsed());
        assert_eq!(stepped.shape().position, jumped.shape().position);
        assert_eq!(stepped.shape().radius, jumped.shape().radius);
    }
}
