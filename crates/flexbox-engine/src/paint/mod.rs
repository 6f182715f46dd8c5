//! Paint values shared between attribute binding and the host renderer.

pub mod color;

pub use color::Color;
