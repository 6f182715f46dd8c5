//! The background thread that render trees compute layout on.
//!
//! Every pooled tree is configured with the same handler, so layout for all
//! pages is serialized on one thread and a tree can move between pages
//! without changing threads.

use std::thread::{self, ThreadId};

use crossbeam_channel::{unbounded, Sender};
use state::InitCell;

use crate::error::EngineError;

type Job = Box<dyn FnOnce() + Send + 'static>;

static SHARED: InitCell<LayoutThreadHandler> = InitCell::new();

/// Handle to a dedicated layout thread fed through a channel.
#[derive(Debug)]
pub struct LayoutThreadHandler {
    jobs: Sender<Job>,
    thread: ThreadId,
}

impl LayoutThreadHandler {
    pub const THREAD_NAME: &'static str = "flexbox-layout";

    /// The process-wide handler, spawned on first use.
    pub fn shared() -> Result<&'static LayoutThreadHandler, EngineError> {
        if let Some(handler) = SHARED.try_get() {
            return Ok(handler);
        }
        // Losing a race drops our handler; its sender goes with it and the
        // spare thread exits once the channel disconnects.
        if !SHARED.set(Self::spawn()?) {
            log::debug!("layout thread raced; keeping the first one");
        }
        SHARED.try_get().ok_or(EngineError::NotInitialized)
    }

    fn spawn() -> Result<Self, EngineError> {
        let (tx, rx) = unbounded::<Job>();
        let handle = thread::Builder::new()
            .name(Self::THREAD_NAME.to_string())
            .spawn(move || {
                for job in rx {
                    job();
                }
            })
            .map_err(EngineError::LayoutThread)?;
        log::debug!("spawned layout thread {:?}", handle.thread().id());
        Ok(Self { jobs: tx, thread: handle.thread().id() })
    }

    /// Queue `job` to run on the layout thread, after everything already queued.
    pub fn post(&self, job: impl FnOnce() + Send + 'static) {
        if self.jobs.send(Box::new(job)).is_err() {
            log::warn!("layout thread is gone; dropping job");
        }
    }

    pub fn is_layout_thread(&self) -> bool {
        thread::current().id() == self.thread
    }
}
