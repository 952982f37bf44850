pub mod catalog;
pub mod config;
pub mod error;
pub mod log;
pub mod platform;
pub mod profile;
pub mod rect;
pub mod selection;
pub mod session;
pub mod snapshot;

#[cfg(test)]
mod fake;

pub use catalog::{MonitorEntry, WindowEntry};
pub use error::{ResizeError, Selection};
pub use platform::{Platform, WindowResult};
pub use profile::{Profile, ProfileStore};
pub use rect::{Rect, Size};
pub use selection::Preselection;
pub use session::{RenderView, ResizeRequest, Session, ShellEvent};
pub use snapshot::Snapshot;
