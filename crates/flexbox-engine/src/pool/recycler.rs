use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Views kept per type unless [`RecycledViewPool::set_max_recycled_views`] says otherwise.
pub const DEFAULT_MAX_SCRAP: usize = 5;

pub type ScrapView = Box<dyn Any + Send>;

#[derive(Default)]
struct ScrapHeap {
    views: Vec<ScrapView>,
    max: Option<usize>,
}

impl ScrapHeap {
    fn max(&self) -> usize {
        self.max.unwrap_or(DEFAULT_MAX_SCRAP)
    }
}

/// A type-keyed scrap heap shared between scrollable containers.
///
/// This is the container the host list widget recycles views through; the
/// pool bounds each view type independently and drops anything offered past
/// that bound.
#[derive(Default)]
pub struct RecycledViewPool {
    heaps: Mutex<HashMap<u64, ScrapHeap>>,
}

impl RecycledViewPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the number of idle views kept for `view_type`.
    ///
    /// Shrinking the bound drops the excess immediately.
    pub fn set_max_recycled_views(&self, view_type: u64, max: usize) {
        let mut heaps = self.heaps.lock();
        let heap = heaps.entry(view_type).or_default();
        heap.max = Some(max);
        heap.views.truncate(max);
    }

    /// Offer a view for reuse. Returns `false` when the heap for `view_type`
    /// is full and the view was dropped instead.
    pub fn put_recycled_view(&self, view_type: u64, view: ScrapView) -> bool {
        let mut heaps = self.heaps.lock();
        let heap = heaps.entry(view_type).or_default();
        if heap.views.len() < heap.max() {
            heap.views.push(view);
            true
        } else {
            false
        }
    }

    /// Take an idle view of `view_type`, most recently offered first.
    pub fn get_recycled_view(&self, view_type: u64) -> Option<ScrapView> {
        self.heaps.lock().get_mut(&view_type)?.views.pop()
    }

    pub fn recycled_count(&self, view_type: u64) -> usize {
        self.heaps.lock().get(&view_type).map_or(0, |h| h.views.len())
    }

    /// Drop every idle view of every type. Per-type bounds are kept.
    pub fn clear(&self) {
        for heap in self.heaps.lock().values_mut() {
            heap.views.clear();
        }
    }
}

/// A host scrollable container that recycles its children through a
/// [`RecycledViewPool`].
pub trait RecyclerContainer {
    fn set_recycled_view_pool(&mut self, pool: Arc<RecycledViewPool>);
}
