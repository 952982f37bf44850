use crate::catalog::{WindowEntry, monitor_label};
use crate::error::{ResizeError, Selection};
use crate::platform::frame_style;
use crate::profile::Profile;
use crate::rect::Rect;
use crate::{log_info, log_warn};

use super::Session;

/// One resize attempt, as entered in the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    /// Index into the snapshot's window list; `None` when nothing is selected.
    pub window: Option<usize>,
    /// Index into the snapshot's monitor list; `None` when nothing is selected.
    pub monitor: Option<usize>,
    pub width: String,
    pub height: String,
    pub borderless: bool,
}

/// Outcome of re-resolving a stale window by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    Recovered(WindowEntry),
    NotFound,
}

impl Session {
    /// Resizes the selected window and centers it on the primary screen.
    ///
    /// Inputs are validated before anything touches the OS. If the
    /// selected handle is no longer visible, the window is looked up again
    /// by title after one synchronous re-scan. On success the new profile
    /// is queued for saving and returned; on any error nothing is saved.
    pub fn resize(&self, request: &ResizeRequest) -> Result<Profile, ResizeError> {
        let snapshot = self.snapshot();

        let selected = request
            .window
            .and_then(|i| snapshot.windows.get(i))
            .ok_or(ResizeError::InvalidSelection(Selection::Window))?;
        let monitor = request
            .monitor
            .filter(|&i| i < snapshot.monitors.len())
            .ok_or(ResizeError::InvalidSelection(Selection::Monitor))?;
        let width = parse_dimension(&request.width)?;
        let height = parse_dimension(&request.height)?;

        let target = if self.platform.is_window_visible(selected.handle) {
            selected.clone()
        } else {
            match self.recover(&selected.title) {
                Recovery::Recovered(entry) => entry,
                Recovery::NotFound => return Err(ResizeError::WindowNotFound),
            }
        };

        // Always the primary screen, whichever monitor was selected.
        let screen = self.platform.primary_screen_size();
        let rect = Rect::centered(screen, width, height);

        self.apply_frame(target.handle, request.borderless);
        self.platform
            .set_window_pos(target.handle, &rect)
            .map_err(|e| ResizeError::OsOperationFailed(e.to_string()))?;

        log_info!(
            "resized 0x{:X} \"{}\" to ({},{} {}x{}) borderless={}",
            target.handle,
            target.title,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            request.borderless
        );

        let profile = Profile {
            width: request.width.clone(),
            height: request.height.clone(),
            monitor: monitor_label(monitor + 1),
            window_title: target.title,
            borderless: request.borderless,
        };
        self.writer.submit(profile.clone());
        Ok(profile)
    }

    /// Re-scans once and looks for a window titled `title`.
    ///
    /// The live snapshot is replaced and the shell notified whether or not
    /// the window is found. Only one re-scan is made.
    pub fn recover(&self, title: &str) -> Recovery {
        let fresh = self.refresh_now();
        match fresh.windows.into_iter().find(|w| w.title == title) {
            Some(entry) => {
                log_info!("recovered \"{title}\" as 0x{:X}", entry.handle);
                Recovery::Recovered(entry)
            }
            None => {
                log_warn!("\"{title}\" is gone after re-scan");
                Recovery::NotFound
            }
        }
    }

    /// Strips or restores the title bar and resizable frame.
    ///
    /// A failure here is logged but does not stop the move/resize.
    fn apply_frame(&self, handle: usize, borderless: bool) {
        let result = self
            .platform
            .window_style(handle)
            .and_then(|style| self.platform.set_window_style(handle, frame_style(style, borderless)));
        if let Err(e) = result {
            log_warn!("could not update frame style of 0x{handle:X}: {e}");
        }
    }
}

/// Parses a width or height: a positive decimal integer, nothing else.
fn parse_dimension(text: &str) -> Result<i32, ResizeError> {
    text.parse::<i32>()
        .ok()
        .filter(|&v| v > 0)
        .ok_or(ResizeError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_must_be_positive_integers() {
        assert_eq!(parse_dimension("1024"), Ok(1024));
        assert_eq!(parse_dimension("+5"), Ok(5));
        assert_eq!(parse_dimension(" 768"), Err(ResizeError::InvalidDimensions));
        assert_eq!(parse_dimension("768 "), Err(ResizeError::InvalidDimensions));
        assert_eq!(parse_dimension("0"), Err(ResizeError::InvalidDimensions));
        assert_eq!(parse_dimension("-5"), Err(ResizeError::InvalidDimensions));
        assert_eq!(parse_dimension("abc"), Err(ResizeError::InvalidDimensions));
        assert_eq!(parse_dimension(""), Err(ResizeError::InvalidDimensions));
        assert_eq!(parse_dimension("12.5"), Err(ResizeError::InvalidDimensions));
    }
}
