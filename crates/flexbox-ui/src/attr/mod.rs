//! Attribute schemas and binding.
//!
//! Each component kind declares its attributes once, as an
//! [`AttributeSchema`] built with a [`Registry`]. Binding walks that schema
//! and writes typed values into a builder, degrading anything malformed to
//! the attribute's fallback.

mod binder;
mod info;
mod schema;

pub use binder::bind;
pub use info::{AttributeInfo, Caster};
pub use schema::{AttributeSchema, Registry};
