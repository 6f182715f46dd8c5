//! Template → component transformation.
//!
//! [`Bindings`] maps template tags to a [`ComponentKind`] and optionally a
//! custom [`Factory`]; [`Bindings::transform`] walks a template tree and
//! produces the components for it.

mod bindings;
mod common;
mod pipeline;
mod to_flex;
mod to_image;
mod to_text;

pub use bindings::{Bindings, Bound, Factory, ToWidget};

/// Per-pass rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// px per dp.
    pub density: f32,
}

impl RenderContext {
    pub fn new(density: f32) -> Self {
        Self { density }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

/// The closed set of built-in component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Flex,
    Text,
    Image,
    /// Groups children without a node of its own.
    Fragment,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] =
        [ComponentKind::Flex, ComponentKind::Text, ComponentKind::Image, ComponentKind::Fragment];

    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Flex => "Flex",
            ComponentKind::Text => "Text",
            ComponentKind::Image => "Image",
            ComponentKind::Fragment => "Fragment",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Names of the attributes this kind binds, in binding order.
    pub fn attribute_names(self) -> Vec<&'static str> {
        match self {
            ComponentKind::Flex => to_flex::schema().names().collect(),
            ComponentKind::Text => to_text::schema().names().collect(),
            ComponentKind::Image => to_image::schema().names().collect(),
            ComponentKind::Fragment => Vec::new(),
        }
    }
}
