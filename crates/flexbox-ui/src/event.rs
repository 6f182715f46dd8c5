use std::fmt;

use crate::el::{self, ElError, PageContext, PropsElContext};

/// A bound event attribute such as `onClick`.
///
/// Holds the expression text and the data it was bound against; nothing is
/// evaluated until the event fires.
#[derive(Clone)]
pub struct EventHandler {
    expr: String,
    data: PropsElContext,
}

impl EventHandler {
    pub fn new(expr: impl Into<String>, data: PropsElContext) -> Self {
        Self { expr: expr.into(), data }
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Fire the event. Runs the first handler the expression yields and
    /// reports whether one ran; engine errors are returned as-is.
    pub fn dispatch(&self, page: &PageContext) -> Result<bool, ElError> {
        el::exec(&self.expr, &self.data, page)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventHandler").field(&self.expr).finish()
    }
}
