use std::sync::Arc;

use parking_lot::Mutex;
use state::InitCell;

use crate::error::EngineError;
use crate::host::{AppHandle, ComponentCallbacks, HostContext};
use crate::layout_thread::LayoutThreadHandler;

use super::recycler::{RecycledViewPool, RecyclerContainer};

/// Idle render trees kept by default.
pub const TREE_POOL_CAPACITY: usize = 10;

// ── Host contracts ────────────────────────────────────────────────────────

/// A heavyweight renderable subtree owned by the host framework.
pub trait RenderTree: Send + 'static {
    type Root;

    /// Replace the tree's content.
    fn set_root(&mut self, root: Self::Root);

    /// Dispose the tree. It cannot be used afterwards.
    fn release(self);
}

/// How every pooled tree is configured.
#[derive(Debug, Clone, Copy)]
pub struct TreeConfig {
    /// The one layout thread all pooled trees share.
    pub layout_handler: &'static LayoutThreadHandler,
    /// Incremental reconciliation. Always off for pooled trees, so a recycled
    /// tree recomputes from scratch and never diffs against a previous page.
    pub reconciliation_enabled: bool,
}

/// Factory for the host objects the pools recycle.
pub trait Host: Send + Sync + 'static {
    type Tree: RenderTree;
    type ViewHolder: Send + 'static;

    fn create_tree(&self, app: &AppHandle, config: &TreeConfig) -> Self::Tree;

    fn create_view_holder(&self, app: &AppHandle) -> Self::ViewHolder;
}

// ── PoolsManager ──────────────────────────────────────────────────────────

/// Recycles render trees and view holders across page binds.
///
/// Trees: a LIFO stack under one lock, bounded by `capacity`; any thread.
/// View holders: delegated to a [`RecycledViewPool`] keyed by
/// [`view_type`](Self::view_type); UI thread only.
///
/// Objects are owned by the pool while idle and by the caller while checked
/// out. [`on_low_memory`](ComponentCallbacks::on_low_memory) drops everything
/// idle; checked-out objects are untouched.
///
/// ```rust,ignore
/// let pools = Arc::new(PoolsManager::new(MyHost));
/// pools.init(&activity);               // first caller wins
/// let tree = pools.acquire_tree()?;    // any thread
/// // … bind, render …
/// pools.release_tree(tree);
/// ```
pub struct PoolsManager<H: Host> {
    host: H,
    application: InitCell<AppHandle>,
    trees: Mutex<Vec<H::Tree>>,
    capacity: usize,
    views: Arc<RecycledViewPool>,
}

impl<H: Host> PoolsManager<H> {
    pub fn new(host: H) -> Self {
        Self::with_capacity(host, TREE_POOL_CAPACITY)
    }

    pub fn with_capacity(host: H, capacity: usize) -> Self {
        Self {
            host,
            application: InitCell::new(),
            trees: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
            views: Arc::new(RecycledViewPool::new()),
        }
    }

    /// Capture the application from `ctx` and subscribe to its memory callbacks.
    ///
    /// Only the first call across all threads wins; later calls, even with a
    /// different application, are ignored.
    pub fn init(self: &Arc<Self>, ctx: &dyn HostContext) {
        let app = ctx.application();
        if self.application.set(app.clone()) {
            let callbacks: Arc<dyn ComponentCallbacks> = self.clone();
            app.register_component_callbacks(callbacks);
            log::debug!("pools initialized against {app:?}");
        }
    }

    pub fn application(&self) -> Option<&AppHandle> {
        self.application.try_get()
    }

    fn app(&self) -> Result<&AppHandle, EngineError> {
        self.application.try_get().ok_or(EngineError::NotInitialized)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ── trees ─────────────────────────────────────────────────────────────

    /// Take an idle tree, or build one against the application.
    pub fn acquire_tree(&self) -> Result<H::Tree, EngineError> {
        let idle = self.trees.lock().pop();
        if let Some(tree) = idle {
            return Ok(tree);
        }
        let app = self.app()?;
        let config = TreeConfig {
            layout_handler: LayoutThreadHandler::shared()?,
            reconciliation_enabled: false,
        };
        log::trace!("tree pool empty; creating a tree");
        Ok(self.host.create_tree(app, &config))
    }

    /// Return a tree. Kept if the pool has room, released otherwise.
    pub fn release_tree(&self, tree: H::Tree) {
        let overflow = {
            let mut trees = self.trees.lock();
            if trees.len() < self.capacity {
                trees.push(tree);
                None
            } else {
                Some(tree)
            }
        };
        if let Some(tree) = overflow {
            log::trace!("tree pool full; releasing returned tree");
            tree.release();
        }
    }

    pub fn idle_tree_count(&self) -> usize {
        self.trees.lock().len()
    }

    // ── view holders ──────────────────────────────────────────────────────

    /// The recycling key for this pool's view holders.
    pub fn view_type() -> u64 {
        let hash = blake3::hash(std::any::type_name::<H::ViewHolder>().as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }

    /// Reuse a recycled holder, or build one against the application.
    ///
    /// UI thread only.
    pub fn acquire_view_holder(&self) -> Result<H::ViewHolder, EngineError> {
        if let Some(scrap) = self.views.get_recycled_view(Self::view_type()) {
            match scrap.downcast::<H::ViewHolder>() {
                Ok(holder) => return Ok(*holder),
                Err(_) => log::warn!("foreign view under this pool's view type; dropping it"),
            }
        }
        Ok(self.host.create_view_holder(self.app()?))
    }

    /// Hand a holder back to the shared recycler. UI thread only.
    pub fn recycle_view_holder(&self, holder: H::ViewHolder) {
        if !self.views.put_recycled_view(Self::view_type(), Box::new(holder)) {
            log::trace!("view recycler full; dropping holder");
        }
    }

    /// Make `container` recycle through this pool's views. UI thread only.
    ///
    /// Attaching the same container again changes nothing.
    pub fn attach_pool(&self, container: &mut dyn RecyclerContainer) {
        container.set_recycled_view_pool(Arc::clone(&self.views));
    }

    pub fn view_pool(&self) -> &Arc<RecycledViewPool> {
        &self.views
    }
}

impl<H: Host> ComponentCallbacks for PoolsManager<H> {
    fn on_low_memory(&self) {
        self.views.clear();
        let idle = std::mem::take(&mut *self.trees.lock());
        log::debug!("low memory: releasing {} idle trees", idle.len());
        for tree in idle {
            tree.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostApplication;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    // ── fakes ─────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct FakeApp {
        registrations: AtomicUsize,
    }

    impl HostApplication for FakeApp {
        fn register_component_callbacks(&self, _callbacks: Arc<dyn ComponentCallbacks>) {
            self.registrations.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct Counters {
        created: AtomicUsize,
        released: AtomicUsize,
        holders: AtomicUsize,
    }

    struct FakeTree {
        id: usize,
        reconciling: bool,
        counters: Arc<Counters>,
    }

    impl RenderTree for FakeTree {
        type Root = ();
        fn set_root(&mut self, _root: ()) {}
        fn release(self) {
            self.counters.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Debug, PartialEq)]
    struct FakeHolder(usize);

    #[derive(Default)]
    struct FakeHost {
        counters: Arc<Counters>,
    }

    impl Host for FakeHost {
        type Tree = FakeTree;
        type ViewHolder = FakeHolder;

        fn create_tree(&self, _app: &AppHandle, config: &TreeConfig) -> FakeTree {
            let id = self.counters.created.fetch_add(1, Ordering::SeqCst);
            FakeTree { id, reconciling: config.reconciliation_enabled, counters: self.counters.clone() }
        }

        fn create_view_holder(&self, _app: &AppHandle) -> FakeHolder {
            FakeHolder(self.counters.holders.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn pools() -> (Arc<PoolsManager<FakeHost>>, Arc<Counters>, Arc<FakeApp>) {
        let host = FakeHost::default();
        let counters = host.counters.clone();
        let app = Arc::new(FakeApp::default());
        let pools = Arc::new(PoolsManager::new(host));
        pools.init(&AppHandle::new(app.clone()));
        (pools, counters, app)
    }

    struct FakeContainer(Option<Arc<RecycledViewPool>>);

    impl RecyclerContainer for FakeContainer {
        fn set_recycled_view_pool(&mut self, pool: Arc<RecycledViewPool>) {
            self.0 = Some(pool);
        }
    }

    // ── init ──────────────────────────────────────────────────────────────

    #[test]
    fn acquire_before_init_fails() {
        let pools = PoolsManager::new(FakeHost::default());
        assert!(matches!(pools.acquire_tree(), Err(EngineError::NotInitialized)));
        assert!(matches!(pools.acquire_view_holder(), Err(EngineError::NotInitialized)));
    }

    #[test]
    fn first_init_wins_and_registers_once() {
        let (pools, _, app) = pools();
        let first = pools.application().unwrap().clone();
        let other = Arc::new(FakeApp::default());
        pools.init(&AppHandle::new(other.clone()));
        assert!(pools.application().unwrap().same_app(&first));
        assert!(!first.same_app(&AppHandle::new(other.clone())));
        assert_eq!(app.registrations.load(Ordering::SeqCst), 1);
        assert_eq!(other.registrations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn racing_inits_register_exactly_once() {
        let pools = Arc::new(PoolsManager::new(FakeHost::default()));
        let apps: Vec<Arc<FakeApp>> = (0..8).map(|_| Arc::new(FakeApp::default())).collect();
        thread::scope(|s| {
            for app in &apps {
                let pools = pools.clone();
                let handle = AppHandle::new(app.clone());
                s.spawn(move || pools.init(&handle));
            }
        });
        let total: usize = apps.iter().map(|a| a.registrations.load(Ordering::SeqCst)).sum();
        assert_eq!(total, 1);
    }

    // ── trees ─────────────────────────────────────────────────────────────

    #[test]
    fn new_trees_have_reconciliation_off() {
        let (pools, _, _) = pools();
        assert!(!pools.acquire_tree().unwrap().reconciling);
    }

    #[test]
    fn up_to_capacity_nothing_is_released() {
        let (pools, counters, _) = pools();
        let trees: Vec<_> = (0..TREE_POOL_CAPACITY).map(|_| pools.acquire_tree().unwrap()).collect();
        for t in trees {
            pools.release_tree(t);
        }
        assert_eq!(pools.idle_tree_count(), TREE_POOL_CAPACITY);
        assert_eq!(counters.released.load(Ordering::SeqCst), 0);

        // Reacquiring reuses instead of creating.
        let again: Vec<_> = (0..TREE_POOL_CAPACITY).map(|_| pools.acquire_tree().unwrap()).collect();
        assert_eq!(counters.created.load(Ordering::SeqCst), TREE_POOL_CAPACITY);
        for t in again {
            pools.release_tree(t);
        }
        assert_eq!(counters.released.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn eleventh_release_disposes_the_offered_tree() {
        let (pools, counters, _) = pools();
        let trees: Vec<_> = (0..=TREE_POOL_CAPACITY).map(|_| pools.acquire_tree().unwrap()).collect();
        let newest = trees.last().unwrap().id;
        for t in trees {
            pools.release_tree(t);
        }
        assert_eq!(pools.idle_tree_count(), TREE_POOL_CAPACITY);
        assert_eq!(counters.released.load(Ordering::SeqCst), 1);
        let idle: Vec<_> = (0..TREE_POOL_CAPACITY).map(|_| pools.acquire_tree().unwrap().id).collect();
        assert!(!idle.contains(&newest));
    }

    #[test]
    fn custom_capacity_bounds_the_idle_stack() {
        let host = FakeHost::default();
        let counters = host.counters.clone();
        let pools = Arc::new(PoolsManager::with_capacity(host, 2));
        pools.init(&AppHandle::new(Arc::new(FakeApp::default())));
        assert_eq!(pools.capacity(), 2);

        let trees: Vec<_> = (0..3).map(|_| pools.acquire_tree().unwrap()).collect();
        for tree in trees {
            pools.release_tree(tree);
        }
        assert_eq!(pools.idle_tree_count(), 2);
        assert_eq!(counters.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pool_is_lifo() {
        let (pools, _, _) = pools();
        let a = pools.acquire_tree().unwrap();
        let b = pools.acquire_tree().unwrap();
        let (ida, idb) = (a.id, b.id);
        pools.release_tree(a);
        pools.release_tree(b);
        assert_eq!(pools.acquire_tree().unwrap().id, idb);
        assert_eq!(pools.acquire_tree().unwrap().id, ida);
    }

    #[test]
    fn low_memory_drops_idle_trees_only() {
        let (pools, counters, _) = pools();
        let held = pools.acquire_tree().unwrap();
        let idle: Vec<_> = (0..3).map(|_| pools.acquire_tree().unwrap()).collect();
        let idle_ids: Vec<_> = idle.iter().map(|t| t.id).collect();
        for t in idle {
            pools.release_tree(t);
        }

        pools.on_low_memory();
        assert_eq!(pools.idle_tree_count(), 0);
        assert_eq!(counters.released.load(Ordering::SeqCst), 3);

        let fresh = pools.acquire_tree().unwrap();
        assert!(!idle_ids.contains(&fresh.id));
        assert_ne!(fresh.id, held.id);

        // The checked-out tree goes back through the normal path.
        pools.release_tree(held);
        assert_eq!(pools.idle_tree_count(), 1);
    }

    #[test]
    fn concurrent_acquire_release_never_exceeds_capacity() {
        let (pools, counters, _) = pools();
        thread::scope(|s| {
            for _ in 0..8 {
                let pools = pools.clone();
                s.spawn(move || {
                    for _ in 0..200 {
                        let a = pools.acquire_tree().unwrap();
                        let b = pools.acquire_tree().unwrap();
                        pools.release_tree(a);
                        pools.release_tree(b);
                        assert!(pools.idle_tree_count() <= TREE_POOL_CAPACITY);
                    }
                });
            }
        });
        let created = counters.created.load(Ordering::SeqCst);
        let released = counters.released.load(Ordering::SeqCst);
        assert_eq!(created - released, pools.idle_tree_count());
    }

    // ── view holders ──────────────────────────────────────────────────────

    #[test]
    fn view_holders_are_recycled_by_type() {
        let (pools, counters, _) = pools();
        let h = pools.acquire_view_holder().unwrap();
        assert_eq!(h, FakeHolder(0));
        pools.recycle_view_holder(h);
        assert_eq!(pools.view_pool().recycled_count(PoolsManager::<FakeHost>::view_type()), 1);
        assert_eq!(pools.acquire_view_holder().unwrap(), FakeHolder(0));
        assert_eq!(counters.holders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn low_memory_clears_view_holders() {
        let (pools, _, _) = pools();
        let h = pools.acquire_view_holder().unwrap();
        pools.recycle_view_holder(h);
        pools.on_low_memory();
        assert_eq!(pools.acquire_view_holder().unwrap(), FakeHolder(1));
    }

    #[test]
    fn attach_pool_shares_the_recycler() {
        let (pools, _, _) = pools();
        let mut container = FakeContainer(None);
        pools.attach_pool(&mut container);
        pools.attach_pool(&mut container);
        let shared = container.0.unwrap();
        assert!(Arc::ptr_eq(&shared, pools.view_pool()));

        // Holders the container recycles come back out of the pool.
        shared.put_recycled_view(PoolsManager::<FakeHost>::view_type(), Box::new(FakeHolder(42)));
        assert_eq!(pools.acquire_view_holder().unwrap(), FakeHolder(42));
    }
}
