use flexbox_template::Value;
use serde_json::Value as JsonValue;

use super::context::{PageContext, PropsElContext};
use super::engine::ElError;

/// `true` if `raw` is a `${…}` expression with a non-empty body.
pub fn is_expr(raw: &str) -> bool {
    raw.len() > 3 && raw.starts_with("${") && raw.ends_with('}')
}

/// The expression body of `raw`, or `None` for static text.
pub fn strip_expr(raw: &str) -> Option<&str> {
    is_expr(raw).then(|| &raw[2..raw.len() - 1])
}

/// Resolve a raw attribute value.
///
/// Expressions are evaluated against `data`; anything else comes back as
/// its JSON equivalent, unchanged.
pub fn resolve(raw: &Value, data: &PropsElContext) -> Result<JsonValue, ElError> {
    match raw {
        Value::Str(s) => match strip_expr(s) {
            Some(body) => data.eval(body),
            None => Ok(JsonValue::String(s.clone())),
        },
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => Ok(number(*n)),
    }
}

// Integral numbers stay integers so they print as authored.
fn number(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        JsonValue::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

/// Run an event expression.
///
/// Only the first handler the expression yields is invoked; the rest are
/// dropped. Returns `false` when the expression yields none.
pub fn exec(expr: &str, data: &PropsElContext, page: &PageContext) -> Result<bool, ElError> {
    let body = strip_expr(expr).unwrap_or(expr);
    let handlers = data.eval_handlers(body)?;
    match handlers.first() {
        Some(first) => {
            if handlers.len() > 1 {
                log::trace!("`{body}` yielded {} handlers; running the first", handlers.len());
            }
            first(data, page);
            Ok(true)
        }
        None => Ok(false),
    }
}
