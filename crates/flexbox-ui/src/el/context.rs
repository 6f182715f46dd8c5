use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value as JsonValue;

use super::engine::{ElError, ExprEngine, PathEngine};

/// A callable produced by evaluating an event expression.
pub type Handler = Arc<dyn Fn(&PropsElContext, &PageContext) + Send + Sync>;

// ── PropsElContext ────────────────────────────────────────────────────────

/// The data a page's expressions resolve against.
///
/// Cloning is cheap; bound event handlers keep a clone so they can run
/// against the same data later.
#[derive(Clone)]
pub struct PropsElContext {
    data: Arc<JsonValue>,
    handlers: Arc<HashMap<String, Vec<Handler>>>,
    engine: Arc<dyn ExprEngine>,
}

impl PropsElContext {
    /// A context over `data`, evaluated by [`PathEngine`].
    pub fn new(data: JsonValue) -> Self {
        Self {
            data: Arc::new(data),
            handlers: Arc::new(HashMap::new()),
            engine: Arc::new(PathEngine),
        }
    }

    pub fn with_engine(mut self, engine: Arc<dyn ExprEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Append `handler` under `name`. Handlers under one name keep the order
    /// they were added in.
    pub fn with_handler(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&PropsElContext, &PageContext) + Send + Sync + 'static,
    ) -> Self {
        Arc::make_mut(&mut self.handlers)
            .entry(name.into())
            .or_default()
            .push(Arc::new(handler));
        self
    }

    pub fn data(&self) -> &JsonValue {
        &self.data
    }

    pub fn handlers(&self, name: &str) -> Option<&[Handler]> {
        self.handlers.get(name).map(Vec::as_slice)
    }

    /// Evaluate an expression body (no `${…}` marker) to a value.
    pub fn eval(&self, expr: &str) -> Result<JsonValue, ElError> {
        self.engine.eval(expr, self)
    }

    /// Evaluate an expression body to its handlers, in declaration order.
    pub fn eval_handlers(&self, expr: &str) -> Result<Vec<Handler>, ElError> {
        self.engine.eval_handlers(expr, self)
    }
}

impl fmt::Debug for PropsElContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("PropsElContext")
            .field("data", &self.data)
            .field("handlers", &names)
            .finish_non_exhaustive()
    }
}

// ── PageContext ───────────────────────────────────────────────────────────

/// Page-scoped services handed to casters and handlers.
///
/// Handlers report what happened by queueing named events; the page owner
/// drains them with [`PageContext::take_events`].
#[derive(Debug, Default)]
pub struct PageContext {
    events: Mutex<Vec<String>>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_event(&self, name: impl Into<String>) {
        self.events.lock().push(name.into());
    }

    /// Drain all pending events.
    pub fn take_events(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock())
    }
}
