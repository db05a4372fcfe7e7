//! Linear kinematic chain of circles
//!
//! Link 0 is the anchor. Every later link hangs off its predecessor:
//! - at construction it is placed at `radius[i-1] - radius[i]` from the
//!   predecessor's center, along an accumulated pseudo-random heading;
//! - every frame it is rotated about the predecessor's *current* center and
//!   its displacement is pushed to all links further down the chain.
//!
//! The pairwise distance between consecutive centers never changes after
//! construction.

use std::fmt;

use rand::Rng;

use super::circle::Circle;
use super::error::{ChainError, ChainResult};
use super::render::{Canvas, ChainStyle};
use super::vector::{direction, NVec2};

/// Source of heading increments (degrees) consumed while laying out a chain,
/// one per placed link, in link order
pub trait DirectionSource {
    fn next_increment(&mut self) -> f64;
}

/// Uniform integer degrees in `[0, 360)` drawn from any rng
#[derive(Debug, Clone)]
pub struct RandomDirections<R> {
    rng: R,
}

impl<R: Rng> RandomDirections<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_increment(&mut self) -> f64 {
        self.rng.gen_range(0..360) as f64
    }
}

/// Replays a fixed list of increments, wrapping around at the end.
/// An empty list always yields 0.
#[derive(Debug, Clone, Default)]
pub struct FixedDirections {
    increments: Vec<f64>,
    next: usize,
}

impl FixedDirections {
    pub fn new(increments: Vec<f64>) -> Self {
        Self { increments, next: 0 }
    }

    /// Every link laid out along +x
    pub fn straight() -> Self {
        Self::default()
    }
}

impl DirectionSource for FixedDirections {
    fn next_increment(&mut self) -> f64 {
        if self.increments.is_empty() {
            return 0.0;
        }
        let inc = self.increments[self.next % self.increments.len()];
        self.next += 1;
        inc
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    circles: Vec<Circle>, // fixed length, never empty, index 0 is the anchor
}

impl Chain {
    /// Lay out `length` circles starting from the anchor
    ///
    /// Radii halve from one link to the next. Link i sits at
    /// `center[i-1] + (r[i-1] - r[i]) * (cos phi, sin phi)` where `phi` starts at
    /// 0 and advances by one increment from `directions` after each placement
    pub fn init<D: DirectionSource + ?Sized>(
        initial_radius: f64,
        initial_center: NVec2,
        length: usize,
        border: f64,
        directions: &mut D,
    ) -> ChainResult<Self> {
        if length == 0 {
            return Err(ChainError::EmptyChain);
        }

        let mut circles = Vec::with_capacity(length);
        circles.push(Circle::new(initial_center, initial_radius, border)?);

        let mut heading = 0.0;
        for i in 1..length {
            let prev = &circles[i - 1];
            let radius = prev.radius() / 2.0;
            let center = prev.center() + (prev.radius() - radius) * direction(heading);
            circles.push(Circle::new(center, radius, border)?);
            heading += directions.next_increment();
        }

        Ok(Self { circles })
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn anchor(&self) -> &Circle {
        &self.circles[0]
    }

    /// Number of links, anchor included
    pub fn link_count(&self) -> usize {
        self.circles.len()
    }

    pub fn centers(&self) -> Vec<NVec2> {
        self.circles.iter().map(Circle::center).collect()
    }

    /// `|center[i] - center[i-1]|` for i in 1..n
    pub fn link_distances(&self) -> Vec<f64> {
        self.circles
            .windows(2)
            .map(|pair| (pair[1].center() - pair[0].center()).norm())
            .collect()
    }

    /// Advance the animation by one frame
    ///
    /// Forward sweep: link i turns `i * angle_step` degrees about link i-1's
    /// already-updated center, then its own displacement is applied to every
    /// link after it before link i+1 is processed. The anchor never moves.
    pub fn rotate(&mut self, angle_step: f64) {
        for i in 1..self.circles.len() {
            let pivot = self.circles[i - 1].center();
            let before = self.circles[i].center();

            self.circles[i].rotate(&pivot, i as f64 * angle_step);

            let delta = self.circles[i].center() - before;
            for downstream in &mut self.circles[i + 1..] {
                downstream.translate(&delta);
            }
        }
    }

    /// All disks, then the link segments with a marker on each center
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, style: &ChainStyle) {
        for circle in &self.circles {
            circle.render(canvas, style.fill, style.border);
        }

        for pair in self.circles.windows(2) {
            let prev = pair[0].center();
            canvas.draw_line(prev, pair[1].center(), style.link);
            canvas.draw_circle(prev, style.marker_radius, style.marker);
        }

        let last = self.circles[self.circles.len() - 1].center();
        canvas.draw_circle(last, style.marker_radius, style.marker);
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for circle in &self.circles {
            writeln!(f, "{}", circle)?;
        }
        write!(f, "{}", "-".repeat(10))
    }
}
