//! Flexbox engine crate.
//!
//! Runtime pieces shared by the binding layer and host integrations: the
//! render-tree and view-holder pools, the shared layout thread, image
//! transformations, colors and logging.

pub mod error;
pub mod host;
pub mod layout_thread;
pub mod logging;
pub mod paint;
pub mod pool;
pub mod transforms;

pub use error::EngineError;
