//! Contracts with the host UI framework.
//!
//! The engine never lays out or paints anything itself. It talks to the host
//! through these traits: an application object that outlives every page, a
//! context from which that application can be reached, and the memory
//! callbacks the application delivers on the UI thread.

use std::fmt;
use std::sync::Arc;

/// Callbacks the host application delivers on its UI thread.
pub trait ComponentCallbacks: Send + Sync {
    /// The process is running low on memory; drop anything idle.
    fn on_low_memory(&self);

    /// Device configuration changed (rotation, locale, …).
    fn on_configuration_changed(&self) {}
}

/// The process-wide host application.
pub trait HostApplication: Send + Sync {
    /// Subscribe `callbacks` to low-memory and configuration notifications.
    fn register_component_callbacks(&self, callbacks: Arc<dyn ComponentCallbacks>);
}

/// Anything from which the application can be reached (an activity, a view, …).
pub trait HostContext {
    fn application(&self) -> AppHandle;
}

// ── AppHandle ─────────────────────────────────────────────────────────────

/// Shared, opaque handle to the [`HostApplication`].
///
/// Pooled objects are always created against this handle rather than a
/// shorter-lived context, so recycling them can never leak a page.
#[derive(Clone)]
pub struct AppHandle(Arc<dyn HostApplication>);

impl AppHandle {
    pub fn new(app: Arc<dyn HostApplication>) -> Self {
        Self(app)
    }

    pub fn register_component_callbacks(&self, callbacks: Arc<dyn ComponentCallbacks>) {
        self.0.register_component_callbacks(callbacks);
    }

    /// `true` if both handles refer to the same application object.
    pub fn same_app(&self, other: &AppHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl HostContext for AppHandle {
    fn application(&self) -> AppHandle {
        self.clone()
    }
}

impl fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppHandle").field(&Arc::as_ptr(&self.0)).finish()
    }
}
