use flexbox_template::AttributeSet;
use state::InitCell;

use super::{common, RenderContext};
use crate::attr::{self, AttributeSchema, Registry};
use crate::component::Component;
use crate::el::{PageContext, PropsElContext};
use crate::widgets::{ImageBuilder, NetworkImage, ScaleType};

static SCHEMA: InitCell<AttributeSchema<ImageBuilder>> = InitCell::new();

pub(super) fn schema() -> &'static AttributeSchema<ImageBuilder> {
    SCHEMA.get_or_init(|| {
        common::register(Registry::<ImageBuilder>::new())
            .enumeration(
                "scaleType",
                &[
                    ("fitCenter", ScaleType::FitCenter),
                    ("center", ScaleType::Center),
                    ("fitXY", ScaleType::FitXy),
                    ("centerCrop", ScaleType::CenterCrop),
                    ("centerInside", ScaleType::CenterInside),
                ],
                None,
                |b, _, v| {
                    b.scale_type(v);
                },
            )
            .number("blurRadius", 0.0, |b, _, v| {
                b.blur_radius(v as f32);
            })
            .number("blurSampling", 1.0, |b, _, v| {
                b.blur_sampling(v as f32);
            })
            .number("aspectRatio", 0.0, |b, _, v| {
                b.aspect_ratio(v as f32);
            })
            // Hidden images load nothing.
            .text("url", "", |b, display, v| {
                b.url(if display { v } else { String::new() });
            })
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
    let mut builder = NetworkImage::builder();
    attr::bind(schema(), &mut builder, display, attrs, page, data);
    builder.build(ctx).into()
}
