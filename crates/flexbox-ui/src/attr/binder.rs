use flexbox_template::AttributeSet;

use crate::el::{PageContext, PropsElContext};

use super::schema::AttributeSchema;

/// Write every attribute `schema` declares into `builder`.
///
/// Runs in the schema's registration order. Attributes missing from `attrs`
/// get their fallback; attributes `schema` does not declare are ignored.
/// Never fails: bad values have already degraded to fallbacks by the time a
/// setter sees them.
pub fn bind<B>(
    schema: &AttributeSchema<B>,
    builder: &mut B,
    display: bool,
    attrs: &AttributeSet,
    page: &PageContext,
    data: &PropsElContext,
) {
    for entry in schema.entries() {
        (entry.apply)(builder, display, page, data, attrs.get(&entry.name));
    }
    if log::log_enabled!(log::Level::Trace) {
        for name in attrs.keys().filter(|n| !schema.contains(n)) {
            log::trace!("ignoring undeclared attribute `{name}`");
        }
    }
}
