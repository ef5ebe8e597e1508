// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 800,
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Screen Saver Demo".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimingConfig {
    pub max_framerate: u32, // frames per second, enforced by sleeping out the frame budget
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { max_framerate: 200 }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DebugConfig {
    #[serde(default)]
    pub show_fps: bool,
}

/************************* Saver Configs ********************/

// One entry per `[[savers]]` table, selected by its `kind` key.
// Velocities are in pixels per millisecond.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SaverConfig {
    Linear {
        radius: f32,
        velocity: [f32; 2],
        color: [u8; 3],
    },
    ColorCycling {
        radius: f32,
        velocity: [f32; 2],
        color_speed: f32,
    },
    Spiral {
        radius: f32,
        velocity: [f32; 2],
        spiral_speed: f32,
    },
}

impl SaverConfig {
    pub fn radius(&self) -> f32 {
        match self {
            SaverConfig::Linear { radius, .. }
            | SaverConfig::ColorCycling { radius, .. }
            | SaverConfig::Spiral { radius, .. } => *radius,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SaverConfig::Linear { .. } => "linear",
            SaverConfig::ColorCycling { .. } => "color_cycling",
            SaverConfig::Spiral { .. } => "spiral",
        }
    }
}

pub fn default_savers() -> Vec<SaverConfig> {
    vec![
        SaverConfig::Linear {
            radius: 15.0,
            velocity: [0.3, 0.3],
            color: [0, 0, 255],
        },
        SaverConfig::ColorCycling {
            radius: 20.0,
            velocity: [0.5, 0.5],
            color_speed: 0.2,
        },
        SaverConfig::Spiral {
            radius: 12.0,
            velocity: [0.5, 0.5],
            spiral_speed: 0.15,
        },
    ]
}
