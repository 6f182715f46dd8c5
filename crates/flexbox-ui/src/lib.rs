//! Flexbox UI: templates in, components out.
//!
//! A [`TemplateNode`](flexbox_template::TemplateNode) tree plus a data
//! context goes through [`Bindings::transform`](build::Bindings::transform),
//! which binds every declared attribute of every node and yields the
//! [`Component`] tree the host renders. [`PageView`] backs that tree with a
//! pooled render tree.
//!
//! # Quick start
//!
//! ```rust
//! use flexbox_template::parse_json;
//! use flexbox_ui::prelude::*;
//! use serde_json::json;
//!
//! let template = parse_json(r#"{
//!     "type": "Image",
//!     "attrs": { "url": "${ctx.src}", "blurRadius": 10 }
//! }"#).unwrap();
//!
//! let data = PropsElContext::new(json!({ "ctx": { "src": "http://x/y.png" } }));
//! let out = Bindings::new().transform(
//!     &template,
//!     &PageContext::new(),
//!     &data,
//!     true,
//!     &RenderContext::default(),
//! );
//!
//! let image = out[0].as_image().unwrap();
//! assert_eq!(image.url, "http://x/y.png");
//! assert!(image.blur_transform().is_some());
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`el`] | `${…}` detection, the expression engine, data and page contexts |
//! | [`attr`] | `AttributeInfo`, `Registry`, `AttributeSchema`, `bind` |
//! | [`build`] | `Bindings`, `ComponentKind`, `RenderContext`, the transform pass |
//! | [`component`] | `Component`, `CommonProps` |
//! | [`widgets`] | `FlexBox`, `TextView`, `NetworkImage` and their builders |
//! | [`event`] | `EventHandler` |
//! | [`page`] | `PageView` |

pub mod attr;
pub mod build;
pub mod component;
pub mod el;
pub mod event;
pub mod page;
pub mod widgets;

pub use component::Component;
pub use page::PageView;

/// The types most callers need.
pub mod prelude {
    pub use crate::build::{Bindings, ComponentKind, RenderContext};
    pub use crate::component::{CommonProps, Component};
    pub use crate::el::{ElError, PageContext, PropsElContext};
    pub use crate::event::EventHandler;
    pub use crate::page::PageView;
    pub use crate::widgets::{FlexBox, NetworkImage, TextView};
}
