use crate::build::RenderContext;
use crate::component::{CommonProps, Component, HasCommon};

// ── enums ─────────────────────────────────────────────────────────────────

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

/// Distribution of free space along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

// ── FlexBox ───────────────────────────────────────────────────────────────

/// A flexbox container. Layout itself is the host's job; this only carries
/// the properties the host lays children out by.
#[derive(Debug, Clone, Default)]
pub struct FlexBox {
    pub common: CommonProps,
    pub direction: FlexDirection,
    pub justify_content: Justify,
    pub align_items: AlignItems,
    pub wrap: FlexWrap,
    pub children: Vec<Component>,
}

impl FlexBox {
    pub fn builder() -> FlexBuilder {
        FlexBuilder(FlexBox::default())
    }
}

pub struct FlexBuilder(FlexBox);

impl FlexBuilder {
    pub fn direction(&mut self, v: FlexDirection) -> &mut Self {
        self.0.direction = v;
        self
    }

    pub fn justify_content(&mut self, v: Justify) -> &mut Self {
        self.0.justify_content = v;
        self
    }

    pub fn align_items(&mut self, v: AlignItems) -> &mut Self {
        self.0.align_items = v;
        self
    }

    pub fn wrap(&mut self, v: FlexWrap) -> &mut Self {
        self.0.wrap = v;
        self
    }

    pub fn children(&mut self, children: Vec<Component>) -> &mut Self {
        self.0.children = children;
        self
    }

    pub fn build(self, ctx: &RenderContext) -> FlexBox {
        let mut flex = self.0;
        flex.common = flex.common.scaled(ctx.density);
        flex
    }
}

impl HasCommon for FlexBuilder {
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.0.common
    }
}
