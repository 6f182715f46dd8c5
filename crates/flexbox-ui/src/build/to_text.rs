use flexbox_engine::paint::Color;
use flexbox_template::AttributeSet;
use state::InitCell;

use super::{common, RenderContext};
use crate::attr::{self, AttributeSchema, Registry};
use crate::component::Component;
use crate::el::{PageContext, PropsElContext};
use crate::widgets::{TextAlign, TextBuilder, TextStyle, TextView};

static SCHEMA: InitCell<AttributeSchema<TextBuilder>> = InitCell::new();

pub(super) fn schema() -> &'static AttributeSchema<TextBuilder> {
    SCHEMA.get_or_init(|| {
        common::register(Registry::<TextBuilder>::new())
            .text("text", "", |b, _, v| {
                b.text(v);
            })
            .number("textSize", 14.0, |b, _, v| {
                b.text_size(v as f32);
            })
            .color("textColor", Color::BLACK, |b, _, v| {
                b.text_color(v);
            })
            .number("maxLines", 0.0, |b, _, v| {
                b.max_lines(v.max(0.0) as u32);
            })
            .enumeration(
                "textAlign",
                &[("left", TextAlign::Left), ("right", TextAlign::Right), ("center", TextAlign::Center)],
                None,
                |b, _, v| {
                    b.text_align(v);
                },
            )
            .enumeration(
                "textStyle",
                &[("normal", TextStyle::Normal), ("bold", TextStyle::Bold)],
                None,
                |b, _, v| {
                    b.text_style(v);
                },
            )
            .build()
    })
}

pub(super) fn create(
    display: bool,
    attrs: &AttributeSet,
    page: &PageContext,
    data: &PropsElContext,
    ctx: &RenderContext,
) -> Component {
    let mut builder = TextView::builder();
    attr::bind(schema(), &mut builder, display, attrs, page, data);
    builder.build(ctx).into()
}
