//! Expression resolution.
//!
//! Attribute values written as `${…}` are evaluated against a
//! [`PropsElContext`] by a pluggable [`ExprEngine`]. Everything else is
//! static and passes through untouched.

mod context;
mod engine;
mod resolver;

pub use context::{Handler, PageContext, PropsElContext};
pub use engine::{ElError, ExprEngine, PathEngine};
pub use resolver::{exec, is_expr, resolve, strip_expr};
