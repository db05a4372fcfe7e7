//! A single link of the chain: a bordered disk whose center is the only
//! thing that moves after construction

use std::fmt;

use super::error::{ChainError, ChainResult};
use super::render::{Canvas, Rgba};
use super::vector::{rotate_about, NVec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: NVec2, // mutated every frame
    radius: f64,   // fixed, > 0
    border: f64,   // fixed visual thickness, >= 0
}

impl Circle {
    /// Build a circle, rejecting a radius that is not strictly positive
    /// (NaN included) and a negative or non-finite border
    pub fn new(center: NVec2, radius: f64, border: f64) -> ChainResult<Self> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(ChainError::NonPositiveRadius(radius));
        }
        if !(border >= 0.0) || !border.is_finite() {
            return Err(ChainError::NegativeBorder(border));
        }
        Ok(Self { center, radius, border })
    }

    pub fn center(&self) -> NVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn border(&self) -> f64 {
        self.border
    }

    /// Rotate the center rigidly about `pivot` by `degrees`.
    /// The distance to `pivot` is preserved.
    pub fn rotate(&mut self, pivot: &NVec2, degrees: f64) {
        self.center = rotate_about(&self.center, pivot, degrees);
    }

    /// Shift the center by `delta`
    pub fn translate(&mut self, delta: &NVec2) {
        self.center += delta;
    }

    /// Border disk first, fill disk on top of it
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, fill: Rgba, border: Rgba) {
        canvas.draw_circle(self.center, self.radius + self.border, border);
        canvas.draw_circle(self.center, self.radius, fill);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center = ({:.6}, {:.6})", self.center.x, self.center.y)
    }
}
