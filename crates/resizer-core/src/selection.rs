//! Maps a saved profile back onto freshly enumerated lists.
//!
//! Matching is by title and by label rather than by position, so the
//! pre-selection survives windows being reordered between runs. When the
//! saved window is gone there is simply no window pre-selected.

use crate::catalog::{MonitorEntry, WindowEntry};
use crate::profile::Profile;

/// Indices to pre-select in the window and monitor lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preselection {
    pub window: Option<usize>,
    pub monitor: Option<usize>,
}

/// Resolves the profile's window title and monitor label against the lists.
///
/// The monitor falls back to the first entry when the saved label is not
/// present (e.g. a display was detached).
pub fn resolve(windows: &[WindowEntry], monitors: &[MonitorEntry], profile: &Profile) -> Preselection {
    Preselection {
        window: find_window(windows, &profile.window_title),
        monitor: find_monitor(monitors, &profile.monitor).or((!monitors.is_empty()).then_some(0)),
    }
}

/// Index of the first window whose title equals `title` exactly.
pub fn find_window(windows: &[WindowEntry], title: &str) -> Option<usize> {
    windows.iter().position(|w| w.title == title)
}

/// Index of the first monitor whose label equals `label` exactly.
pub fn find_monitor(monitors: &[MonitorEntry], label: &str) -> Option<usize> {
    monitors.iter().position(|m| m.label() == label)
}
