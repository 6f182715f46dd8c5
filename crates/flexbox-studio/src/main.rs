use std::sync::Arc;

use anyhow::{Context, Result};
use flexbox_engine::host::{AppHandle, ComponentCallbacks, HostApplication};
use flexbox_engine::logging::{init_logging, LevelFilter, LoggingConfig};
use flexbox_engine::pool::{Host, PoolsManager, RenderTree, TreeConfig};
use flexbox_engine::transforms::Transformation;
use flexbox_template::parse_json;
use flexbox_ui::prelude::*;
use parking_lot::Mutex;

// ── console host ──────────────────────────────────────────────────────────

/// Keeps the registered callbacks so `main` can simulate memory pressure.
#[derive(Default)]
struct ConsoleApp {
    callbacks: Mutex<Vec<Arc<dyn ComponentCallbacks>>>,
}

impl ConsoleApp {
    fn trim_memory(&self) {
        for cb in self.callbacks.lock().iter() {
            cb.on_low_memory();
        }
    }
}

impl HostApplication for ConsoleApp {
    fn register_component_callbacks(&self, callbacks: Arc<dyn ComponentCallbacks>) {
        self.callbacks.lock().push(callbacks);
    }
}

struct ConsoleTree {
    id: usize,
}

impl RenderTree for ConsoleTree {
    type Root = Vec<Component>;

    fn set_root(&mut self, root: Vec<Component>) {
        println!("  tree #{} ← {} root component(s)", self.id, root.len());
        for component in &root {
            print_component(component, 2);
        }
    }

    fn release(self) {
        println!("  tree #{} released", self.id);
    }
}

#[derive(Default)]
struct ConsoleHost {
    next: std::sync::atomic::AtomicUsize,
}

impl Host for ConsoleHost {
    type Tree = ConsoleTree;
    type ViewHolder = ();

    fn create_tree(&self, _app: &AppHandle, config: &TreeConfig) -> ConsoleTree {
        let id = self.next.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        log::info!(
            "creating tree #{id} (reconciliation: {})",
            config.reconciliation_enabled
        );
        ConsoleTree { id }
    }

    fn create_view_holder(&self, _app: &AppHandle) {}
}

fn print_component(c: &Component, depth: usize) {
    let pad = "  ".repeat(depth);
    let common = c.common();
    let vis = if common.visible { "" } else { " (hidden)" };
    match c {
        Component::Flex(f) => println!("{pad}Flex {:?}{vis}", f.direction),
        Component::Text(t) => println!("{pad}Text {:?} {}px{vis}", t.text, t.text_size),
        Component::Image(i) => {
            println!("{pad}Image {:?} {:?} blur={}{vis}", i.url, i.scale_type, i.blur_radius);
            if let Some(blur) = i.blur_transform() {
                let mut key = Vec::new();
                blur.update_cache_key(&mut key);
                println!("{pad}  {blur}, cache key {} bytes", key.len());
            }
        }
    }
    for child in c.children() {
        print_component(child, depth + 1);
    }
}

// ── main ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(LoggingConfig::default().with_module("flexbox_engine::pool", LevelFilter::Debug));

    let template = parse_json(include_str!("../ui/card.json")).context("parsing ui/card.json")?;
    let json: serde_json::Value =
        serde_json::from_str(include_str!("../ui/card_data.json")).context("parsing ui/card_data.json")?;
    let data = PropsElContext::new(json).with_handler("openDetail", |d, page| {
        page.send_event(format!("open:{}", d.data()["title"]));
    });

    let app = Arc::new(ConsoleApp::default());
    let pools = Arc::new(PoolsManager::new(ConsoleHost::default()));
    pools.init(&AppHandle::new(app.clone()));

    let bindings = Bindings::new();
    let page = PageContext::new();
    let ctx = RenderContext::new(2.0);

    println!("\n[bind]");
    let mut view = PageView::new(pools.clone());
    view.bind(&bindings, &template, &page, &data, &ctx).context("binding card")?;

    println!("\n[click]");
    let root = bindings.transform(&template, &page, &data, true, &ctx);
    if let Some(handler) = root.first().and_then(|c| c.common().on_click.as_ref()) {
        handler.dispatch(&page).context("dispatching onClick")?;
    }
    for event in page.take_events() {
        println!("  event: {event}");
    }

    println!("\n[recycle]");
    view.recycle();
    let mut again = PageView::new(pools.clone());
    again.bind(&bindings, &template, &page, &data, &ctx).context("rebinding card")?;
    again.recycle();
    println!("  idle trees: {}", pools.idle_tree_count());

    println!("\n[low memory]");
    app.trim_memory();
    println!("  idle trees: {}", pools.idle_tree_count());

    Ok(())
}
