//! Built component types and their builders.

pub mod flex;
pub mod image;
pub mod text;

pub use flex::{AlignItems, FlexBox, FlexBuilder, FlexDirection, FlexWrap, Justify};
pub use image::{ImageBuilder, NetworkImage, ScaleType};
pub use text::{TextAlign, TextBuilder, TextStyle, TextView};
