use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::snapshot::Snapshot;
use crate::{log_debug, log_info, log_warn};

use super::{Session, ShellEvent, lock};

/// Clears the in-flight flag when the refresh ends, even by panic.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Session {
    /// Starts a refresh on a worker thread and returns immediately.
    ///
    /// At most one refresh runs at a time. A request made while one is in
    /// flight is dropped (not queued) and `false` is returned. When the
    /// worker finishes it replaces the snapshot and posts
    /// [`ShellEvent::Refreshed`].
    pub fn request_refresh(&self) -> bool {
        if self.refreshing.swap(true, Ordering::AcqRel) {
            log_debug!("refresh already in flight, request dropped");
            return false;
        }
        let guard = InFlight(Arc::clone(&self.refreshing));

        let platform = Arc::clone(&self.platform);
        let own_title = Arc::clone(&self.own_title);
        let snapshot = Arc::clone(&self.snapshot);
        let events = self.events.clone();

        let spawned = thread::Builder::new()
            .name("refresh".into())
            .spawn(move || {
                let fresh = Snapshot::capture(platform.as_ref(), &own_title);
                log_info!(
                    "refreshed: {} window(s), {} monitor(s)",
                    fresh.windows.len(),
                    fresh.monitors.len()
                );
                *lock(&snapshot) = fresh;
                drop(guard);
                let _ = events.send(ShellEvent::Refreshed);
            });

        match spawned {
            Ok(_) => true,
            Err(e) => {
                // The closure (and the guard inside it) was dropped, which
                // already cleared the flag.
                log_warn!("failed to start refresh worker: {e}");
                false
            }
        }
    }

    /// Refreshes on the calling thread and posts [`ShellEvent::Refreshed`].
    ///
    /// Used by stale-handle recovery, which must see the new lists before
    /// it continues. It does not consult the in-flight flag.
    pub fn refresh_now(&self) -> Snapshot {
        let fresh = Snapshot::capture(self.platform.as_ref(), &self.own_title);
        self.replace_snapshot(fresh.clone());
        self.notify();
        fresh
    }

    /// Whether a background refresh is currently running.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }
}
