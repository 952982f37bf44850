//! The last-used resize settings, persisted as JSON.
//!
//! Persistence is best-effort: a missing or corrupt file loads as the
//! default profile and a failed write is logged and dropped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::{WindowResult, log_debug, log_warn};

/// The single persisted last-used configuration.
///
/// Width and height are kept as the text the user entered. Fields missing
/// from the file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub width: String,
    pub height: String,
    /// Monitor label, e.g. `"Monitor 1"`.
    pub monitor: String,
    /// Title of the last resized window. Empty until the first resize.
    pub window_title: String,
    pub borderless: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            width: "800".into(),
            height: "600".into(),
            monitor: "Monitor 1".into(),
            window_title: String::new(),
            borderless: true,
        }
    }
}

/// Loads and saves the profile at a fixed path.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: Option<PathBuf>,
}

impl ProfileStore {
    /// A store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The per-user store at `~/.config/resizer/profile.json`.
    ///
    /// If the home directory cannot be determined, loads return the
    /// default profile and saves are dropped.
    pub fn user() -> Self {
        Self {
            path: crate::config::profile_path(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the profile, falling back to defaults. Never fails.
    pub fn load(&self) -> Profile {
        let Some(path) = self.path() else {
            return Profile::default();
        };
        let Ok(content) = fs::read_to_string(path) else {
            return Profile::default();
        };
        match serde_json::from_str(&content) {
            Ok(profile) => profile,
            Err(e) => {
                log_warn!("ignoring unreadable profile {}: {e}", path.display());
                Profile::default()
            }
        }
    }

    /// Saves the profile, overwriting the previous one. Failures are logged
    /// and otherwise ignored.
    pub fn save(&self, profile: &Profile) {
        if let Err(e) = self.try_save(profile) {
            log_warn!("failed to save profile: {e}");
        }
    }

    fn try_save(&self, profile: &Profile) -> WindowResult<()> {
        let path = self.path().ok_or("could not determine profile path")?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(profile)?)?;
        log_debug!("saved profile to {}", path.display());
        Ok(())
    }
}

/// Background writer that saves profiles without blocking the caller.
///
/// Saves are applied in submission order, so the last submitted profile
/// is the one left on disk. Dropping the writer waits for queued saves.
pub struct ProfileWriter {
    tx: Option<mpsc::Sender<Profile>>,
    handle: Option<thread::JoinHandle<()>>,
    store: ProfileStore,
}

impl ProfileWriter {
    pub fn spawn(store: ProfileStore) -> Self {
        let (tx, rx) = mpsc::channel::<Profile>();
        let worker_store = store.clone();
        let spawned = thread::Builder::new()
            .name("profile-writer".into())
            .spawn(move || {
                for profile in rx {
                    worker_store.save(&profile);
                }
            });

        match spawned {
            Ok(handle) => Self {
                tx: Some(tx),
                handle: Some(handle),
                store,
            },
            Err(e) => {
                log_warn!("profile writer unavailable, saving inline: {e}");
                Self {
                    tx: None,
                    handle: None,
                    store,
                }
            }
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Queues a save and returns immediately.
    pub fn submit(&self, profile: Profile) {
        match &self.tx {
            Some(tx) => {
                if let Err(mpsc::SendError(profile)) = tx.send(profile) {
                    self.store.save(&profile);
                }
            }
            None => self.store.save(&profile),
        }
    }
}

impl Drop for ProfileWriter {
    fn drop(&mut self) {
        // Closing the channel ends the worker once the queue is drained.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
