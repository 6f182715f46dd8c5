use flexbox_engine::paint::Color;

use crate::build::ComponentKind;
use crate::event::EventHandler;
use crate::widgets::{FlexBox, NetworkImage, TextView};

/// Width or height that sizes to content.
pub const WRAP_CONTENT: f32 = -1.0;

// ── CommonProps ───────────────────────────────────────────────────────────

/// Box properties every component carries.
///
/// Lengths are in px once a component is built; templates author them in dp.
#[derive(Debug, Clone)]
pub struct CommonProps {
    /// Effective visibility: the node's own flag AND every ancestor's.
    pub visible: bool,
    pub width: f32,
    pub height: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub margin: f32,
    pub padding: f32,
    pub background: Color,
    pub border_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub on_click: Option<EventHandler>,
}

impl CommonProps {
    pub(crate) fn scaled(mut self, density: f32) -> Self {
        let len = |v: f32| if v < 0.0 { v } else { v * density };
        self.width = len(self.width);
        self.height = len(self.height);
        self.margin *= density;
        self.padding *= density;
        self.border_radius *= density;
        self.border_width *= density;
        self
    }
}

impl Default for CommonProps {
    fn default() -> Self {
        Self {
            visible: true,
            width: WRAP_CONTENT,
            height: WRAP_CONTENT,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            margin: 0.0,
            padding: 0.0,
            background: Color::TRANSPARENT,
            border_radius: 0.0,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            on_click: None,
        }
    }
}

/// Builders that carry a [`CommonProps`] block.
pub trait HasCommon {
    fn common_mut(&mut self) -> &mut CommonProps;
}

// ── Component ─────────────────────────────────────────────────────────────

/// A built component, ready to hand to a render tree.
#[derive(Debug, Clone)]
pub enum Component {
    Flex(FlexBox),
    Text(TextView),
    Image(NetworkImage),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Flex(_) => ComponentKind::Flex,
            Component::Text(_) => ComponentKind::Text,
            Component::Image(_) => ComponentKind::Image,
        }
    }

    pub fn common(&self) -> &CommonProps {
        match self {
            Component::Flex(c) => &c.common,
            Component::Text(c) => &c.common,
            Component::Image(c) => &c.common,
        }
    }

    pub fn children(&self) -> &[Component] {
        match self {
            Component::Flex(c) => &c.children,
            _ => &[],
        }
    }

    /// This component and all its descendants, depth first.
    pub fn walk(&self) -> Vec<&Component> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }

    pub fn as_image(&self) -> Option<&NetworkImage> {
        match self {
            Component::Image(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextView> {
        match self {
            Component::Text(c) => Some(c),
            _ => None,
        }
    }
}

impl From<FlexBox> for Component {
    fn from(c: FlexBox) -> Self {
        Component::Flex(c)
    }
}

impl From<TextView> for Component {
    fn from(c: TextView) -> Self {
        Component::Text(c)
    }
}

impl From<NetworkImage> for Component {
    fn from(c: NetworkImage) -> Self {
        Component::Image(c)
    }
}
