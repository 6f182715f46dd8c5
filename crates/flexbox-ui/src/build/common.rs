//! The attribute block shared by every component kind.

use flexbox_engine::paint::Color;
use flexbox_template::{AttributeSet, Value};
use state::InitCell;

use crate::attr::{AttributeInfo, Registry};
use crate::component::{HasCommon, WRAP_CONTENT};
use crate::el::{PageContext, PropsElContext};
use crate::event::EventHandler;

static VISIBILITY: InitCell<AttributeInfo<bool>> = InitCell::new();

/// The node's own `visibility` attribute; absent or malformed means visible.
pub(crate) fn own_visibility(attrs: &AttributeSet, page: &PageContext, data: &PropsElContext) -> bool {
    VISIBILITY
        .get_or_init(|| AttributeInfo::bool(true))
        .resolve(page, data, attrs.get("visibility"))
        .unwrap_or(true)
}

/// Register the common attributes ahead of a kind's own.
pub(crate) fn register<B: HasCommon + 'static>(registry: Registry<B>) -> Registry<B> {
    registry
        .bool("visibility", true, |b, display, _| b.common_mut().visible = display)
        .number("width", WRAP_CONTENT as f64, |b, _, v| b.common_mut().width = v as f32)
        .number("height", WRAP_CONTENT as f64, |b, _, v| b.common_mut().height = v as f32)
        .number("flexGrow", 0.0, |b, _, v| b.common_mut().flex_grow = v.max(0.0) as f32)
        .number("flexShrink", 1.0, |b, _, v| b.common_mut().flex_shrink = v.max(0.0) as f32)
        .number("margin", 0.0, |b, _, v| b.common_mut().margin = v as f32)
        .number("padding", 0.0, |b, _, v| b.common_mut().padding = v.max(0.0) as f32)
        .color("background", Color::TRANSPARENT, |b, _, v| b.common_mut().background = v)
        .number("borderRadius", 0.0, |b, _, v| b.common_mut().border_radius = v.max(0.0) as f32)
        .number("borderWidth", 0.0, |b, _, v| b.common_mut().border_width = v.max(0.0) as f32)
        .color("borderColor", Color::TRANSPARENT, |b, _, v| b.common_mut().border_color = v)
        .typed("onClick", None, click_handler, |b, _, h| b.common_mut().on_click = Some(h))
}

// Event attributes keep their expression unevaluated until the event fires.
fn click_handler(_: &PageContext, data: &PropsElContext, raw: &Value) -> Option<EventHandler> {
    let expr = raw.as_str()?.trim();
    (!expr.is_empty()).then(|| EventHandler::new(expr, data.clone()))
}
