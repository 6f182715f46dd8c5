use std::fmt;
use std::sync::Arc;

use flexbox_engine::paint::Color;
use flexbox_template::Value;
use serde_json::Value as JsonValue;

use crate::el::{self, PageContext, PropsElContext};

/// Converts a raw template value into `T`, or `None` if it cannot.
pub type Caster<T> = Arc<dyn Fn(&PageContext, &PropsElContext, &Value) -> Option<T> + Send + Sync>;

/// How one attribute of one component kind is read.
///
/// An attribute with a non-empty `scope` is enum-like: its resolved text is
/// looked up in the scope table. Otherwise the caster converts it. Either
/// way, a miss yields `fallback`.
pub struct AttributeInfo<T> {
    scope: Vec<(String, T)>,
    fallback: Option<T>,
    caster: Caster<T>,
}

impl<T: Clone> AttributeInfo<T> {
    pub fn new(scope: Vec<(String, T)>, fallback: Option<T>, caster: Caster<T>) -> Self {
        Self { scope, fallback, caster }
    }

    /// Replace the scope table.
    pub fn with_scope<'a>(mut self, scope: impl IntoIterator<Item = (&'a str, T)>) -> Self {
        self.scope = scope.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        self
    }

    pub fn fallback(&self) -> Option<&T> {
        self.fallback.as_ref()
    }

    /// Resolve `raw` to a value.
    ///
    /// Total: absence, failed evaluation, an out-of-scope token and a failed
    /// cast all produce the fallback.
    pub fn resolve(&self, page: &PageContext, data: &PropsElContext, raw: Option<&Value>) -> Option<T> {
        let Some(raw) = raw else {
            return self.fallback.clone();
        };
        let value = if self.scope.is_empty() {
            (self.caster)(page, data, raw)
        } else {
            resolved(raw, data)
                .as_ref()
                .and_then(token)
                .and_then(|t| self.lookup(&t))
        };
        value.or_else(|| {
            log::trace!("`{raw}` did not bind; using fallback");
            self.fallback.clone()
        })
    }

    fn lookup(&self, token: &str) -> Option<T> {
        self.scope.iter().find(|(k, _)| k == token).map(|(_, v)| v.clone())
    }
}

// ── built-in kinds ────────────────────────────────────────────────────────

impl AttributeInfo<String> {
    pub fn text(fallback: impl Into<String>) -> Self {
        Self::new(Vec::new(), Some(fallback.into()), Arc::new(|_: &PageContext, data: &PropsElContext, raw: &Value| {
            resolved(raw, data).as_ref().and_then(token)
        }))
    }
}

impl AttributeInfo<bool> {
    pub fn bool(fallback: bool) -> Self {
        Self::new(Vec::new(), Some(fallback), Arc::new(|_: &PageContext, data: &PropsElContext, raw: &Value| {
            match resolved(raw, data)? {
                JsonValue::Bool(b) => Some(b),
                JsonValue::String(s) => s.trim().parse().ok(),
                _ => None,
            }
        }))
    }
}

impl AttributeInfo<f64> {
    pub fn number(fallback: f64) -> Self {
        Self::new(Vec::new(), Some(fallback), Arc::new(|_: &PageContext, data: &PropsElContext, raw: &Value| {
            let n = match resolved(raw, data)? {
                JsonValue::Number(n) => n.as_f64(),
                JsonValue::String(s) => s.trim().parse().ok(),
                _ => None,
            };
            n.filter(|n: &f64| n.is_finite())
        }))
    }
}

impl AttributeInfo<Color> {
    pub fn color(fallback: Color) -> Self {
        Self::new(Vec::new(), Some(fallback), Arc::new(|_: &PageContext, data: &PropsElContext, raw: &Value| {
            match resolved(raw, data)? {
                JsonValue::String(s) => Color::parse(&s),
                JsonValue::Number(n) => {
                    let argb = u32::try_from(n.as_u64()?).ok()?;
                    Some(Color::from_argb(argb))
                }
                _ => None,
            }
        }))
    }
}

impl<T: Clone + Send + Sync + 'static> AttributeInfo<T> {
    /// An enum-like attribute. The fallback defaults to the first member of
    /// `scope`; an empty scope is rejected.
    pub fn enumeration<'a>(
        scope: impl IntoIterator<Item = (&'a str, T)>,
        fallback: Option<T>,
    ) -> Option<Self> {
        let scope: Vec<(String, T)> = scope.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        let fallback = fallback.or_else(|| scope.first().map(|(_, v)| v.clone()))?;
        Some(Self::new(scope, Some(fallback), Arc::new(|_: &PageContext, _: &PropsElContext, _: &Value| None)))
    }

    /// An attribute converted by a custom `caster`, which receives the raw,
    /// unevaluated value.
    pub fn typed(
        fallback: Option<T>,
        caster: impl Fn(&PageContext, &PropsElContext, &Value) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        Self::new(Vec::new(), fallback, Arc::new(caster))
    }
}

impl<T: fmt::Debug> fmt::Debug for AttributeInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeInfo")
            .field("scope", &self.scope)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Evaluate `raw`, logging and swallowing expression failures.
pub(crate) fn resolved(raw: &Value, data: &PropsElContext) -> Option<JsonValue> {
    el::resolve(raw, data)
        .map_err(|e| log::debug!("expression `{raw}` failed: {e}"))
        .ok()
}

/// The text form of a scalar, used for scope lookups and text attributes.
fn token(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
