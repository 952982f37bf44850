//! The resizer's context object.
//!
//! A [`Session`] owns the live [`Snapshot`], the refresh-in-flight flag,
//! the channel used to tell the shell to re-render, and the background
//! profile writer. Refresh workers share the snapshot and the flag
//! through `Arc` clones; nothing lives at process scope.

mod refresh;
mod resize;

use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::platform::Platform;
use crate::profile::{Profile, ProfileStore, ProfileWriter};
use crate::selection::{self, Preselection};
use crate::snapshot::Snapshot;
use crate::log_debug;

pub use resize::{Recovery, ResizeRequest};

/// Notifications posted to the shell's UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The snapshot was replaced; lists should be re-rendered.
    Refreshed,
}

/// Everything the shell needs to draw both lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    /// Window titles, in snapshot order.
    pub windows: Vec<String>,
    /// Monitor display labels, e.g. `Monitor 1 (1920x1080)`.
    pub monitors: Vec<String>,
    pub selection: Preselection,
}

/// Live window and monitor lists plus the operations the shell drives.
pub struct Session {
    platform: Arc<dyn Platform>,
    own_title: Arc<str>,
    snapshot: Arc<Mutex<Snapshot>>,
    refreshing: Arc<AtomicBool>,
    events: Sender<ShellEvent>,
    writer: ProfileWriter,
}

impl Session {
    /// Creates a session with an empty snapshot.
    ///
    /// The process's own window is retitled to `own_title` first, so
    /// refreshes never list it.
    ///
    /// Returns the receiving end of the shell event channel; the shell
    /// should render whenever it yields [`ShellEvent::Refreshed`].
    pub fn new(
        platform: Arc<dyn Platform>,
        own_title: &str,
        store: ProfileStore,
    ) -> (Self, Receiver<ShellEvent>) {
        if let Err(e) = platform.set_own_title(own_title) {
            log_debug!("could not set own window title: {e}");
        }

        let (events, rx) = mpsc::channel();
        let session = Self {
            platform,
            own_title: Arc::from(own_title),
            snapshot: Arc::new(Mutex::new(Snapshot::default())),
            refreshing: Arc::new(AtomicBool::new(false)),
            events,
            writer: ProfileWriter::spawn(store),
        };
        (session, rx)
    }

    /// Returns a copy of the live snapshot.
    pub fn snapshot(&self) -> Snapshot {
        lock(&self.snapshot).clone()
    }

    /// Builds the lists and pre-selection for `profile` from one
    /// consistent read of the snapshot.
    pub fn render_view(&self, profile: &Profile) -> RenderView {
        let snapshot = lock(&self.snapshot);
        RenderView {
            windows: snapshot.window_titles(),
            monitors: snapshot.monitor_labels(),
            selection: selection::resolve(&snapshot.windows, &snapshot.monitors, profile),
        }
    }

    /// The store successful resizes are written to.
    pub fn store(&self) -> &ProfileStore {
        self.writer.store()
    }

    /// Waits for queued profile writes, then releases the session.
    pub fn shutdown(self) {
        drop(self);
    }

    fn replace_snapshot(&self, fresh: Snapshot) {
        *lock(&self.snapshot) = fresh;
    }

    fn notify(&self) {
        // The shell may have stopped listening; that is not an error.
        let _ = self.events.send(ShellEvent::Refreshed);
    }
}

/// Locks the snapshot, recovering the data if a holder panicked.
fn lock(snapshot: &Mutex<Snapshot>) -> MutexGuard<'_, Snapshot> {
    snapshot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests;
