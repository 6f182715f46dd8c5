use std::sync::Arc;

use flexbox_engine::pool::{Host, PoolsManager, RenderTree};
use flexbox_engine::EngineError;
use flexbox_template::TemplateNode;

use crate::build::{Bindings, RenderContext};
use crate::component::Component;
use crate::el::{PageContext, PropsElContext};

/// An on-screen slot that shows one transformed template.
///
/// The backing render tree comes from the shared pool the first time the
/// view is bound and goes back to it on [`recycle`](Self::recycle) or drop,
/// so scrolling lists reuse trees instead of building new ones.
pub struct PageView<H: Host> {
    pools: Arc<PoolsManager<H>>,
    tree: Option<H::Tree>,
}

impl<H> PageView<H>
where
    H: Host,
    H::Tree: RenderTree<Root = Vec<Component>>,
{
    pub fn new(pools: Arc<PoolsManager<H>>) -> Self {
        Self { pools, tree: None }
    }

    /// Transform `template` against `data` and show the result.
    ///
    /// Returns the number of root components set on the tree. Fails only if
    /// a tree is needed and the pool cannot make one.
    pub fn bind(
        &mut self,
        bindings: &Bindings,
        template: &TemplateNode,
        page: &PageContext,
        data: &PropsElContext,
        ctx: &RenderContext,
    ) -> Result<usize, EngineError> {
        let root = bindings.transform(template, page, data, true, ctx);
        let count = root.len();
        let mut tree = match self.tree.take() {
            Some(tree) => tree,
            None => self.pools.acquire_tree()?,
        };
        tree.set_root(root);
        self.tree = Some(tree);
        Ok(count)
    }

    pub fn is_bound(&self) -> bool {
        self.tree.is_some()
    }

    /// The checked-out tree, if bound.
    pub fn tree(&self) -> Option<&H::Tree> {
        self.tree.as_ref()
    }

    /// Hand the tree back to the pool. A no-op when unbound.
    pub fn recycle(&mut self) {
        if let Some(tree) = self.tree.take() {
            self.pools.release_tree(tree);
        }
    }
}

impl<H: Host> Drop for PageView<H> {
    fn drop(&mut self) {
        if let Some(tree) = self.tree.take() {
            self.pools.release_tree(tree);
        }
    }
}
