use flexbox_engine::paint::Color;

use crate::build::RenderContext;
use crate::component::{CommonProps, HasCommon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Normal,
    Bold,
}

/// A run of text.
///
/// `max_lines == 0` means no limit.
#[derive(Debug, Clone)]
pub struct TextView {
    pub common: CommonProps,
    pub text: String,
    pub text_size: f32,
    pub text_color: Color,
    pub max_lines: u32,
    pub text_align: TextAlign,
    pub text_style: TextStyle,
}

impl TextView {
    pub fn builder() -> TextBuilder {
        TextBuilder(TextView {
            common: CommonProps::default(),
            text: String::new(),
            text_size: 14.0,
            text_color: Color::BLACK,
            max_lines: 0,
            text_align: TextAlign::Left,
            text_style: TextStyle::Normal,
        })
    }
}

pub struct TextBuilder(TextView);

impl TextBuilder {
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.0.text = text.into();
        self
    }

    pub fn text_size(&mut self, size: f32) -> &mut Self {
        self.0.text_size = size.max(0.0);
        self
    }

    pub fn text_color(&mut self, color: Color) -> &mut Self {
        self.0.text_color = color;
        self
    }

    pub fn max_lines(&mut self, lines: u32) -> &mut Self {
        self.0.max_lines = lines;
        self
    }

    pub fn text_align(&mut self, align: TextAlign) -> &mut Self {
        self.0.text_align = align;
        self
    }

    pub fn text_style(&mut self, style: TextStyle) -> &mut Self {
        self.0.text_style = style;
        self
    }

    pub fn build(self, ctx: &RenderContext) -> TextView {
        let mut view = self.0;
        view.common = view.common.scaled(ctx.density);
        view.text_size *= ctx.density;
        view
    }
}

impl HasCommon for TextBuilder {
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.0.common
    }
}
