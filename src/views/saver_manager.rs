// src/views/saver_manager.rs
//
// Owns every screen saver on screen and steps them once per frame,
// in insertion order.

use log::debug;
use nannou::prelude::*;

use crate::animation::{ColorCyclingBouncer, LinearBouncer, ScreenSaver, SpiralPulsar};
use crate::config::{Config, SaverConfig};
use crate::render::RenderTarget;

pub struct SaverManager {
    savers: Vec<Box<dyn ScreenSaver>>,
    screen_width: u32,
    screen_height: u32,
}

impl SaverManager {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            savers: Vec::new(),
            screen_width,
            screen_height,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut manager = Self::new(config.window.width, config.window.height);
        for saver_config in &config.savers {
            manager.add(build_saver(saver_config));
        }
        manager
    }

    pub fn add(&mut self, saver: Box<dyn ScreenSaver>) {
        debug!("Adding {} saver", saver.name());
        self.savers.push(saver);
    }

    pub fn update(&mut self, delta_ms: f32) {
        for saver in self.savers.iter_mut() {
            saver.update(delta_ms, self.screen_width, self.screen_height);
        }
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        for saver in &self.savers {
            saver.draw(target);
        }
    }

    pub fn savers(&self) -> &[Box<dyn ScreenSaver>] {
        &self.savers
    }

    pub fn len(&self) -> usize {
        self.savers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.savers.is_empty()
    }

    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}

pub fn build_saver(config: &SaverConfig) -> Box<dyn ScreenSaver> {
    match *config {
        SaverConfig::Linear {
            radius,
            velocity: [vx, vy],
            color: [r, g, b],
        } => Box::new(LinearBouncer::new(radius, vec2(vx, vy), Rgb8::new(r, g, b))),
        SaverConfig::ColorCycling {
            radius,
            velocity: [vx, vy],
            color_speed,
        } => Box::new(ColorCyclingBouncer::new(radius, vec2(vx, vy), color_speed)),
        SaverConfig::Spiral {
            radius,
            velocity: [vx, vy],
            spiral_speed,
        } => Box::new(SpiralPulsar::new(radius, vec2(vx, vy), spiral_speed)),
    }
}
