//! 2D vector math used by every piece of chain geometry
//!
//! `NVec2` is a plain nalgebra vector, so component-wise add/subtract come
//! straight from nalgebra's operator impls. This module only adds the
//! rotation kernel the circles need.

use nalgebra::{Rotation2, Vector2};

pub type NVec2 = Vector2<f64>;

/// Degrees -> radians
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Rotate `point` about `pivot` by `degrees` (counter-clockwise in a y-up frame,
/// clockwise on a y-down screen)
///
/// The point is moved into pivot-relative coordinates, rotated, and moved back,
/// so `|point - pivot|` is unchanged
pub fn rotate_about(point: &NVec2, pivot: &NVec2, degrees: f64) -> NVec2 {
    let rotation = Rotation2::new(to_radians(degrees));
    rotation * (point - pivot) + pivot
}

/// Unit vector pointing at `degrees`
pub fn direction(degrees: f64) -> NVec2 {
    let theta = to_radians(degrees);
    NVec2::new(theta.cos(), theta.sin())
}
