//! Win32 implementation of the resizer's platform layer.
//!
//! Everything here is compiled only on Windows; on other targets the
//! crate is empty.
#![cfg(windows)]

/// `Platform` implementation backed by user32.
pub mod desktop;

/// Console window title.
mod console;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Win32 top-level window enumeration.
mod enumerate;

/// Monitor enumeration and primary-screen metrics.
mod monitor;

/// Window type wrapping a Win32 `HWND`.
mod window;

pub use desktop::Win32Desktop;
