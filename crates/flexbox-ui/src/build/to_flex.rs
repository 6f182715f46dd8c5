use flexbox_template::AttributeSet;
use state::InitCell;

use super::{common, RenderContext};
use crate::attr::{self, AttributeSchema, Registry};
use crate::component::Component;
use crate::el::{PageContext, PropsElContext};
use crate::widgets::{AlignItems, FlexBox, FlexBuilder, FlexDirection, FlexWrap, Justify};

static SCHEMA: InitCell<AttributeSchema<FlexBuilder>> = InitCell::new();

pub(super) fn schema() -> &'static AttributeSchema<FlexBuilder> {
    SCHEMA.get_or_init(|| {
        common::register(Registry::<FlexBuilder>::new())
            .enumeration(
                "flexDirection",
                &[
                    ("row", FlexDirection::Row),
                    ("column", FlexDirection::Column),
                    ("rowReverse", FlexDirection::RowReverse),
                    ("columnReverse", FlexDirection::ColumnReverse),
                ],
                None,
                |b, _, v| {
                    b.direction(v);
                },
            )
            .enumeration(
                "justifyContent",
                &[
                    ("flexStart", Justify::FlexStart),
                    ("flexEnd", Justify::FlexEnd),
                    ("center", Justify::Center),
                    ("spaceBetween", Justify::SpaceBetween),
                    ("spaceAround", Justify::SpaceAround),
                ],
                None,
                |b, _, v| {
                    b.justify_content(v);
                },
            )
            .enumeration(
                "alignItems",
                &[
                    ("flexStart", AlignItems::FlexStart),
                    ("flexEnd", AlignItems::FlexEnd),
                    ("center", AlignItems::Center),
                    ("stretch", AlignItems::Stretch),
                ],
                None,
                |b, _, v| {
                    b.align_items(v);
                },
            )
            .enumeration(
                "flexWrap",
                &[("noWrap", FlexWrap::NoWrap), ("wrap", FlexWrap::Wrap), ("wrapReverse", FlexWrap::WrapReverse)],
                None,
                |b, _, v| {
                    b.wrap(v);
                },
            )
            .build()
    })
}

/// Build and bind the container, then transform its children into it.
pub(super) fn create(
    display: bool,
    attrs: &AttributeSet,
    page: &PageContext,
    data: &PropsElContext,
    ctx: &RenderContext,
    children: impl FnOnce() -> Vec<Component>,
) -> Component {
    let mut builder = FlexBox::builder();
    attr::bind(schema(), &mut builder, display, attrs, page, data);
    builder.children(children());
    builder.build(ctx).into()
}
