//! Runtime parameters derived from the configuration
//!
//! `Viewport` describes the window the chain lives in (screen pixels, origin
//! top-left, y down), `Animation` the per-frame rotation

use super::render::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,       // pixels
    pub height: u32,      // pixels
    pub title: String,    // window title
    pub background: Rgba, // clear color
    pub target_fps: f64,  // fixed animation rate
}

impl Viewport {
    /// Center of the window, rounded down to whole pixels
    pub fn center(&self) -> [f64; 2] {
        [(self.width / 2) as f64, (self.height / 2) as f64]
    }

    /// Largest anchor radius used when none is configured: a quarter of the
    /// shorter side, rounded down
    pub fn default_radius(&self) -> f64 {
        (self.width.min(self.height) / 4) as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub angle_step: f64, // degrees per frame for link 1
    pub dump: bool,      // log the chain every frame
}
