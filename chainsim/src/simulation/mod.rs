pub mod vector;
pub mod error;
pub mod circle;
pub mod chain;
pub mod render;
pub mod params;
pub mod scenario;
