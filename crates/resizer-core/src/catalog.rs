//! Window and monitor catalogs: one OS query each, reduced to the entries
//! the user can pick from.

use crate::platform::Platform;
use crate::{log_debug, log_warn};

/// Titles longer than this many UTF-16 units are never listed.
pub const MAX_TITLE_LEN: usize = 256;

/// A visible top-level window as seen by the last enumeration.
///
/// The handle belongs to the OS and may go stale at any time. The title
/// is the key used to find the window again after that happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub handle: usize,
    pub title: String,
}

/// An active monitor and its pixel size.
///
/// `index` is the 1-based position in the enumeration that produced it.
/// It is not a hardware identifier: attaching or detaching a display can
/// renumber every monitor on the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorEntry {
    pub index: usize,
    pub width: i32,
    pub height: i32,
}

impl MonitorEntry {
    /// Label stored in the profile, e.g. `"Monitor 2"`.
    pub fn label(&self) -> String {
        monitor_label(self.index)
    }

    /// Label shown in lists, e.g. `"Monitor 2 (2560x1440)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({}x{})", self.label(), self.width, self.height)
    }
}

/// Formats the profile label for a 1-based monitor index.
pub fn monitor_label(index: usize) -> String {
    format!("Monitor {index}")
}

/// Lists the visible, titled top-level windows in OS enumeration order.
///
/// Windows titled exactly `own_title` are skipped so the tool never offers
/// to resize itself. An enumeration failure yields an empty list; a window
/// whose title cannot be read is skipped.
pub fn refresh_windows(platform: &dyn Platform, own_title: &str) -> Vec<WindowEntry> {
    let handles = match platform.enumerate_windows() {
        Ok(handles) => handles,
        Err(e) => {
            log_warn!("window enumeration failed: {e}");
            return Vec::new();
        }
    };

    handles
        .into_iter()
        .filter(|&handle| platform.is_window_visible(handle))
        .filter_map(|handle| {
            let title = platform.window_title(handle).ok()?;
            is_listable(&title, own_title).then_some(WindowEntry { handle, title })
        })
        .collect()
}

/// Lists every active monitor with 1-based indices in enumeration order.
pub fn refresh_monitors(platform: &dyn Platform) -> Vec<MonitorEntry> {
    let rects = match platform.enumerate_monitors() {
        Ok(rects) => rects,
        Err(e) => {
            log_warn!("monitor enumeration failed: {e}");
            return Vec::new();
        }
    };

    let monitors: Vec<MonitorEntry> = rects
        .iter()
        .enumerate()
        .map(|(i, rect)| MonitorEntry {
            index: i + 1,
            width: rect.width,
            height: rect.height,
        })
        .collect();

    log_debug!("enumerated {} monitor(s)", monitors.len());
    monitors
}

fn is_listable(title: &str, own_title: &str) -> bool {
    !title.is_empty() && title.encode_utf16().count() <= MAX_TITLE_LEN && title != own_title
}
