use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{ComponentKind, RenderContext};
use crate::component::Component;

/// A node as the built-in step of its kind left it, handed to a [`Factory`].
#[derive(Debug, Clone)]
pub struct Bound {
    /// Effective visibility: the node's own AND every ancestor's.
    pub visible: bool,
    /// The kind's component with every declared attribute bound and no
    /// children attached. `None` for [`ComponentKind::Fragment`].
    pub component: Option<Component>,
    /// The node's transformed children.
    pub children: Vec<Component>,
}

/// Replaces the final assembly step of a kind: receives the bound node and
/// returns what the tag contributes to its parent.
pub type Factory = Arc<dyn Fn(Bound, &RenderContext) -> Vec<Component> + Send + Sync>;

/// What a template tag turns into.
#[derive(Clone)]
pub struct ToWidget {
    pub kind: ComponentKind,
    pub factory: Option<Factory>,
}

impl fmt::Debug for ToWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToWidget")
            .field("kind", &self.kind)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

// ── Bindings ──────────────────────────────────────────────────────────────

/// The tag table used by a transformation pass. Registered once, then
/// shared read-only.
#[derive(Debug, Clone)]
pub struct Bindings {
    widgets: HashMap<String, ToWidget>,
}

impl Bindings {
    /// The built-in kinds under their own tags.
    pub fn new() -> Self {
        let widgets = ComponentKind::ALL
            .into_iter()
            .map(|kind| (kind.tag().to_string(), ToWidget { kind, factory: None }))
            .collect();
        Self { widgets }
    }

    /// A table with no tags at all.
    pub fn empty() -> Self {
        Self { widgets: HashMap::new() }
    }

    /// Map `tag` to `kind` with the built-in construction step.
    pub fn with_kind(mut self, tag: impl Into<String>, kind: ComponentKind) -> Self {
        self.widgets.insert(tag.into(), ToWidget { kind, factory: None });
        self
    }

    /// Map `tag` to `kind`, built by `factory`.
    pub fn with_factory(
        mut self,
        tag: impl Into<String>,
        kind: ComponentKind,
        factory: impl Fn(Bound, &RenderContext) -> Vec<Component> + Send + Sync + 'static,
    ) -> Self {
        self.widgets.insert(tag.into(), ToWidget { kind, factory: Some(Arc::new(factory)) });
        self
    }

    pub fn get(&self, tag: &str) -> Option<&ToWidget> {
        self.widgets.get(tag)
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new()
    }
}
