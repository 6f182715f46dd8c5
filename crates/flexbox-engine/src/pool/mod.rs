//! Recycling of expensive host objects across page binds.
//!
//! Two kinds of object are pooled:
//! - render trees, heavyweight and usable from any thread, kept in a bounded
//!   LIFO stack ([`PoolsManager::acquire_tree`] / [`PoolsManager::release_tree`]);
//! - view holders, lightweight and UI-thread bound, recycled by type through a
//!   [`RecycledViewPool`] shared with the host's scrollable containers.

mod manager;
mod recycler;

pub use manager::{Host, PoolsManager, RenderTree, TreeConfig, TREE_POOL_CAPACITY};
pub use recycler::{RecycledViewPool, RecyclerContainer, ScrapView, DEFAULT_MAX_SCRAP};
