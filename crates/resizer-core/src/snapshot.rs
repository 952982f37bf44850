use crate::catalog::{self, MonitorEntry, WindowEntry};
use crate::platform::Platform;

/// The window and monitor lists produced by one refresh cycle.
///
/// A snapshot is always replaced as a whole, never merged with the
/// previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub windows: Vec<WindowEntry>,
    pub monitors: Vec<MonitorEntry>,
}

impl Snapshot {
    /// Runs both catalogs and pairs their results.
    pub fn capture(platform: &dyn Platform, own_title: &str) -> Self {
        Self {
            windows: catalog::refresh_windows(platform, own_title),
            monitors: catalog::refresh_monitors(platform),
        }
    }

    /// Titles in list order.
    pub fn window_titles(&self) -> Vec<String> {
        self.windows.iter().map(|w| w.title.clone()).collect()
    }

    /// Display labels in list order.
    pub fn monitor_labels(&self) -> Vec<String> {
        self.monitors.iter().map(MonitorEntry::display_label).collect()
    }
}
