use std::fmt;
use std::sync::Arc;

use flexbox_engine::paint::Color;
use flexbox_template::Value;

use crate::el::{PageContext, PropsElContext};

use super::info::AttributeInfo;

type Apply<B> = Arc<dyn Fn(&mut B, bool, &PageContext, &PropsElContext, Option<&Value>) + Send + Sync>;

pub(crate) struct Entry<B> {
    pub(crate) name: String,
    pub(crate) apply: Apply<B>,
}

// ── Registry ──────────────────────────────────────────────────────────────

/// Collects the attributes of one component kind, each paired with the
/// setter that writes its value into a builder `B`.
///
/// ```ignore
/// let schema = Registry::<ImageBuilder>::new()
///     .text("url", "", |b, display, v| b.url(if display { v } else { String::new() }))
///     .number("blurRadius", 0.0, |b, _, v| b.blur_radius(v as f32))
///     .build();
/// ```
///
/// Setters receive the node's effective visibility as their second
/// argument. Registering a name twice replaces the first entry in place.
pub struct Registry<B> {
    entries: Vec<Entry<B>>,
}

impl<B: 'static> Registry<B> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register<T: Clone + Send + Sync + 'static>(
        mut self,
        name: &str,
        info: AttributeInfo<T>,
        setter: impl Fn(&mut B, bool, T) + Send + Sync + 'static,
    ) -> Self {
        let apply: Apply<B> = Arc::new(
            move |builder: &mut B,
                  display: bool,
                  page: &PageContext,
                  data: &PropsElContext,
                  raw: Option<&Value>| {
                if let Some(value) = info.resolve(page, data, raw) {
                    setter(builder, display, value);
                }
            },
        );
        let entry = Entry { name: name.to_string(), apply };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(slot) => {
                log::warn!("attribute `{name}` registered twice; keeping the later one");
                *slot = entry;
            }
            None => self.entries.push(entry),
        }
        self
    }

    pub fn text(
        self,
        name: &str,
        fallback: &str,
        setter: impl Fn(&mut B, bool, String) + Send + Sync + 'static,
    ) -> Self {
        self.register(name, AttributeInfo::text(fallback), setter)
    }

    pub fn bool(
        self,
        name: &str,
        fallback: bool,
        setter: impl Fn(&mut B, bool, bool) + Send + Sync + 'static,
    ) -> Self {
        self.register(name, AttributeInfo::bool(fallback), setter)
    }

    pub fn number(
        self,
        name: &str,
        fallback: f64,
        setter: impl Fn(&mut B, bool, f64) + Send + Sync + 'static,
    ) -> Self {
        self.register(name, AttributeInfo::number(fallback), setter)
    }

    pub fn color(
        self,
        name: &str,
        fallback: Color,
        setter: impl Fn(&mut B, bool, Color) + Send + Sync + 'static,
    ) -> Self {
        self.register(name, AttributeInfo::color(fallback), setter)
    }

    /// Register an enum-like attribute. `fallback: None` means the first
    /// member of `scope`. An empty scope is logged and skipped.
    pub fn enumeration<T: Clone + Send + Sync + 'static>(
        self,
        name: &str,
        scope: &[(&str, T)],
        fallback: Option<T>,
        setter: impl Fn(&mut B, bool, T) + Send + Sync + 'static,
    ) -> Self {
        match AttributeInfo::enumeration(scope.iter().cloned(), fallback) {
            Some(info) => self.register(name, info, setter),
            None => {
                log::warn!("enum attribute `{name}` has an empty scope; not registered");
                self
            }
        }
    }

    /// Register an attribute converted by `caster`, which sees the raw value
    /// before any expression evaluation.
    pub fn typed<T: Clone + Send + Sync + 'static>(
        self,
        name: &str,
        fallback: Option<T>,
        caster: impl Fn(&PageContext, &PropsElContext, &Value) -> Option<T> + Send + Sync + 'static,
        setter: impl Fn(&mut B, bool, T) + Send + Sync + 'static,
    ) -> Self {
        self.register(name, AttributeInfo::typed(fallback, caster), setter)
    }

    /// Freeze the registrations, keeping their order.
    pub fn build(self) -> AttributeSchema<B> {
        AttributeSchema { entries: self.entries }
    }
}

impl<B: 'static> Default for Registry<B> {
    fn default() -> Self {
        Self::new()
    }
}

// ── AttributeSchema ───────────────────────────────────────────────────────

/// The immutable attribute table of one component kind.
///
/// Built kinds keep theirs in a process-wide cell, constructed on first use.
pub struct AttributeSchema<B> {
    entries: Vec<Entry<B>>,
}

impl<B> AttributeSchema<B> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Attribute names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub(crate) fn entries(&self) -> &[Entry<B>] {
        &self.entries
    }
}

impl<B> fmt::Debug for AttributeSchema<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
