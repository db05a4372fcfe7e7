pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::{NVec2, rotate_about};
pub use simulation::circle::Circle;
pub use simulation::chain::{Chain, DirectionSource, RandomDirections, FixedDirections};
pub use simulation::render::{Canvas, ChainStyle, DrawCommand, DrawList, Rgba};
pub use simulation::error::{ChainError, ChainResult};
pub use simulation::scenario::Scenario;

pub use configuration::config::{WindowConfig, ChainConfig, StyleConfig, AnimationConfig, ScenarioConfig};

pub use visualization::chain_vis2d::{run_2d, layout_shapes, recolor, ShapeKind, ShapeInstance};

pub use benchmark::benchmark::{bench_rotate, bench_init};
