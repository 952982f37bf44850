use std::sync::Arc;
use std::sync::mpsc::Receiver;

use resizer_core::config::{self, Config};
use resizer_core::{Platform, Profile, ProfileStore, Session, ShellEvent, WindowResult, log};

/// The command-line presentation shell.
///
/// The main thread plays the UI thread: it triggers refreshes, waits on
/// the session's event channel and renders when a refresh lands.
pub struct Shell {
    pub config: Config,
    pub profile: Profile,
    pub session: Session,
    pub events: Receiver<ShellEvent>,
}

impl Shell {
    /// Loads config and profile, starts logging and opens a session on
    /// the native desktop.
    pub fn open() -> WindowResult<Self> {
        let config = config::load();
        log::init(&config.logging);

        let platform = platform()?;
        let store = ProfileStore::user();
        let profile = store.load();
        let (session, events) = Session::new(platform, &config.own_title, store);

        Ok(Self {
            config,
            profile,
            session,
            events,
        })
    }

    /// Starts a background refresh and waits until it has landed.
    pub fn refresh(&self) -> bool {
        self.session.request_refresh() && matches!(self.events.recv(), Ok(ShellEvent::Refreshed))
    }

    /// Waits for queued profile writes.
    pub fn close(self) {
        self.session.shutdown();
    }
}

/// Opens the shell or exits with an error message.
pub fn open_or_exit() -> Shell {
    match Shell::open() {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(windows)]
fn platform() -> WindowResult<Arc<dyn Platform>> {
    resizer_windows::dpi::enable_dpi_awareness();
    Ok(Arc::new(resizer_windows::Win32Desktop))
}

#[cfg(not(windows))]
fn platform() -> WindowResult<Arc<dyn Platform>> {
    Err("window resizing is only supported on Windows".into())
}
