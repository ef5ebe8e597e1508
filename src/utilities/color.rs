// src/utilities/color.rs

// colour cycling for screen savers

use nannou::prelude::*;

// phase offsets in radians for red, green, blue
pub const CHANNEL_PHASES: [f32; 3] = [0.0, 2.0, 4.0];

/// A colour that cycles smoothly through the hues as `time` advances.
/// Each channel is a shifted sine wave mapped onto 0..=255.
pub fn transition_color(time: f32, speed: f32) -> Rgb8 {
    let [r, g, b] = CHANNEL_PHASES.map(|phase| sine_channel(speed * time + phase));
    Rgb8::new(r, g, b)
}

fn sine_channel(angle: f32) -> u8 {
    ((angle.sin() + 1.0) * 127.5).clamp(0.0, 255.0) as u8
}
