//! Template data model for **flexbox** pages.
//!
//! Templates are authored elsewhere and compiled to JSON; this crate only
//! holds the node tree and decodes it. It pulls in no engine code so
//! tooling can depend on it alone.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `TemplateNode`, `Value`, `AttributeSet` |
//! | [`error`] | `TemplateError` |
//!
//! # Quick start
//!
//! ```rust
//! use flexbox_template::parse_json;
//!
//! let src = r#"{
//!     "type": "Flex",
//!     "attrs": { "flexDirection": "column" },
//!     "children": [ { "type": "Text", "attrs": { "text": "${title}" } } ]
//! }"#;
//!
//! let root = parse_json(src).unwrap();
//! assert_eq!(root.kind, "Flex");
//! ```

pub mod ast;
pub mod error;

pub use ast::{AttributeSet, TemplateNode, Value};
pub use error::TemplateError;

/// Decode a compiled JSON template into its root [`TemplateNode`].
pub fn parse_json(src: &str) -> Result<TemplateNode, TemplateError> {
    Ok(serde_json::from_str(src)?)
}
