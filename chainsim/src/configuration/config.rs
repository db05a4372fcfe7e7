//! Configuration types for loading chain scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WindowConfig`]    – window size, title, background and frame rate
//! - [`ChainConfig`]     – chain length, anchor circle and layout seed
//! - [`StyleConfig`]     – colors used to draw the chain
//! - [`AnimationConfig`] – per-frame rotation step and state dumping
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! Every section and every field has a default, so an empty file is a valid
//! scenario (the classic five-circle chain in a 1366x768 window).
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 1366
//!   height: 768
//!   title: "circles"
//!   background: [0, 0, 0]      # rgb or rgba
//!   target_fps: 60
//!
//! chain:
//!   length: 5
//!   initial_radius: 192.0      # defaults to min(width, height) / 4
//!   initial_center: [683, 384] # defaults to the window center
//!   border: 1.0
//!   seed: 42                   # omit for a time-based seed
//!
//! style:
//!   fill: [130, 130, 130]
//!   border: [255, 255, 255]
//!   link: [0, 0, 0]
//!   marker: [230, 41, 55]
//!   marker_radius: 3.0
//!
//! animation:
//!   angle_step: 1.0            # degrees per frame for link 1
//!   dump: false                # log every link center each frame
//! ```
//!
//! The scenario builder then maps this configuration into the runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use serde::Deserialize;

use crate::simulation::render::Rgba;

/// Window and frame loop settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,         // window width in pixels
    pub height: u32,        // window height in pixels
    pub title: String,      // window title
    pub background: Rgba,   // clear color
    pub target_fps: f64,    // animation frames per second
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1366,
            height: 768,
            title: "circles".to_string(),
            background: Rgba::BLACK,
            target_fps: 60.0,
        }
    }
}

/// Chain layout
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChainConfig {
    pub length: usize,                  // number of circles, anchor included
    pub initial_radius: Option<f64>,    // anchor radius, `None` -> min(width, height) / 4
    pub initial_center: Option<[f64; 2]>, // anchor center in screen pixels, `None` -> window center
    pub border: f64,                    // border thickness of every circle
    pub seed: Option<u64>,              // layout seed, `None` -> derived from the clock
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            length: 5,
            initial_radius: None,
            initial_center: None,
            border: 1.0,
            seed: None,
        }
    }
}

/// Drawing colors, each falling back to the built-in style when omitted
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub fill: Option<Rgba>,
    pub border: Option<Rgba>,
    pub link: Option<Rgba>,
    pub marker: Option<Rgba>,
    pub marker_radius: Option<f64>,
}

/// Animation settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub angle_step: f64, // degrees per frame, link i turns i times this
    pub dump: bool,      // log the chain every frame
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angle_step: 1.0,
            dump: false,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub window: WindowConfig,       // window and frame rate
    pub chain: ChainConfig,         // chain layout
    pub style: StyleConfig,         // colors
    pub animation: AnimationConfig, // per-frame rotation
}
