//! Draw seam between the chain and whatever actually puts pixels on screen
//!
//! The chain only knows two primitives, filled circles and line segments,
//! issued through [`Canvas`]. [`DrawList`] is a recording canvas: the viewer
//! replays it every frame and tests inspect it directly.

use serde::Deserialize;

use super::vector::NVec2;

/// 8-bit RGBA color. Deserializes from `[r, g, b]` or `[r, g, b, a]`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "Vec<u8>")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GRAY: Rgba = Rgba::rgb(130, 130, 130);
    pub const RED: Rgba = Rgba::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl TryFrom<Vec<u8>> for Rgba {
    type Error = String;

    fn try_from(c: Vec<u8>) -> Result<Self, Self::Error> {
        match c.as_slice() {
            [r, g, b] => Ok(Rgba::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Rgba { r: *r, g: *g, b: *b, a: *a }),
            _ => Err(format!("expected 3 or 4 color components, got {}", c.len())),
        }
    }
}

/// Colors and marker size used when rendering a chain
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStyle {
    pub fill: Rgba,         // inner disk
    pub border: Rgba,       // ring drawn behind the disk
    pub link: Rgba,         // segment between consecutive centers
    pub marker: Rgba,       // dot on each center
    pub marker_radius: f64, // dot radius
}

impl Default for ChainStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::GRAY,
            border: Rgba::WHITE,
            link: Rgba::BLACK,
            marker: Rgba::RED,
            marker_radius: 3.0,
        }
    }
}

/// Immediate-mode drawing surface, in screen coordinates
pub trait Canvas {
    fn draw_circle(&mut self, center: NVec2, radius: f64, color: Rgba);
    fn draw_line(&mut self, from: NVec2, to: NVec2, color: Rgba);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle { center: NVec2, radius: f64, color: Rgba },
    Line { from: NVec2, to: NVec2, color: Rgba },
}

/// Canvas that records commands in issue order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands but keep the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn draw_circle(&mut self, center: NVec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_line(&mut self, from: NVec2, to: NVec2, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}
