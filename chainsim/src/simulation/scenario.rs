//! Build a fully-initialized chain scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces the
//! runtime bundle `Scenario` containing:
//! - window settings (`Viewport`)
//! - animation settings (`Animation`)
//! - the laid-out `Chain`
//! - the drawing style (`ChainStyle`)
//! - the layout seed actually used
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! animation and visualization systems

use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{ScenarioConfig, StyleConfig, WindowConfig};
use crate::simulation::chain::{Chain, RandomDirections};
use crate::simulation::error::{ChainError, ChainResult};
use crate::simulation::params::{Animation, Viewport};
use crate::simulation::render::ChainStyle;
use crate::simulation::vector::NVec2;

/// Bevy resource representing a fully-initialized chain scenario
///
/// The chain is the only part that changes after construction: the animation
/// system rotates it once per fixed frame and the viewer renders it
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub viewport: Viewport,
    pub animation: Animation,
    pub chain: Chain,
    pub style: ChainStyle,
    pub seed: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> ChainResult<Self> {
        let viewport = build_viewport(cfg.window)?;

        // Animation (runtime) from AnimationConfig
        let a_cfg = cfg.animation;
        if !a_cfg.angle_step.is_finite() {
            return Err(invalid(format!("angle_step must be finite, got {}", a_cfg.angle_step)));
        }
        let animation = Animation {
            angle_step: a_cfg.angle_step,
            dump: a_cfg.dump,
        };

        let style = build_style(cfg.style)?;

        // Chain: anchor defaults derive from the window
        let c_cfg = cfg.chain;
        let initial_radius = c_cfg.initial_radius.unwrap_or_else(|| viewport.default_radius());
        let [cx, cy] = c_cfg.initial_center.unwrap_or_else(|| viewport.center());
        let seed = c_cfg.seed.unwrap_or_else(clock_seed);

        let mut directions = RandomDirections::new(StdRng::seed_from_u64(seed));
        let chain = Chain::init(
            initial_radius,
            NVec2::new(cx, cy),
            c_cfg.length,
            c_cfg.border,
            &mut directions,
        )?;

        Ok(Self {
            viewport,
            animation,
            chain,
            style,
            seed,
        })
    }

    /// One-line description of the layout, logged when the viewer starts
    pub fn summary(&self) -> String {
        let anchor = self.chain.anchor();
        let center = anchor.center();
        format!(
            "scenario: {} circles, anchor r = {} at ({}, {}), seed = {}",
            self.chain.link_count(),
            anchor.radius(),
            center.x,
            center.y,
            self.seed
        )
    }

    /// Advance the chain by one animation frame
    pub fn step(&mut self) {
        self.chain.rotate(self.animation.angle_step);
    }
}

fn build_viewport(w_cfg: WindowConfig) -> ChainResult<Viewport> {
    if w_cfg.width == 0 || w_cfg.height == 0 {
        return Err(invalid(format!(
            "window must have a non-zero size, got {}x{}",
            w_cfg.width, w_cfg.height
        )));
    }
    if !(w_cfg.target_fps > 0.0) || !w_cfg.target_fps.is_finite() {
        return Err(invalid(format!("target_fps must be positive, got {}", w_cfg.target_fps)));
    }

    Ok(Viewport {
        width: w_cfg.width,
        height: w_cfg.height,
        title: w_cfg.title,
        background: w_cfg.background,
        target_fps: w_cfg.target_fps,
    })
}

// Fill in omitted colors from the built-in style
fn build_style(s_cfg: StyleConfig) -> ChainResult<ChainStyle> {
    let base = ChainStyle::default();
    let marker_radius = s_cfg.marker_radius.unwrap_or(base.marker_radius);
    if !(marker_radius >= 0.0) || !marker_radius.is_finite() {
        return Err(invalid(format!("marker_radius must be non-negative, got {}", marker_radius)));
    }

    Ok(ChainStyle {
        fill: s_cfg.fill.unwrap_or(base.fill),
        border: s_cfg.border.unwrap_or(base.border),
        link: s_cfg.link.unwrap_or(base.link),
        marker: s_cfg.marker.unwrap_or(base.marker),
        marker_radius,
    })
}

fn invalid(msg: String) -> ChainError {
    ChainError::InvalidConfiguration(msg)
}

/// Seed from the wall clock, used when the scenario does not pin one
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
