use crate::{Rect, Size};

/// A boxed error type for native window-system calls.
///
/// Platform implementations surface whatever error their bindings produce;
/// callers only ever log it or turn it into a user-facing message.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Title-bar bit of a window style (`WS_CAPTION`).
pub const STYLE_CAPTION: u32 = 0x00C0_0000;

/// Resizable-frame bit of a window style (`WS_THICKFRAME`).
pub const STYLE_THICKFRAME: u32 = 0x0004_0000;

/// The style bits toggled by the borderless option.
pub const FRAME_BITS: u32 = STYLE_CAPTION | STYLE_THICKFRAME;

/// Returns `style` with the frame bits cleared (borderless) or set.
pub fn frame_style(style: u32, borderless: bool) -> u32 {
    if borderless {
        style & !FRAME_BITS
    } else {
        style | FRAME_BITS
    }
}

/// The native window-system calls the resizer depends on.
///
/// Every call is synchronous. Window handles are opaque pointer-sized
/// integers owned by the OS; any of them may stop being valid between two
/// calls. Each platform crate (e.g. `resizer-windows`) provides its own
/// implementation.
pub trait Platform: Send + Sync {
    /// Returns every top-level window handle, in OS enumeration order.
    fn enumerate_windows(&self) -> WindowResult<Vec<usize>>;

    /// Returns the title of a window. An untitled window yields `""`.
    fn window_title(&self, handle: usize) -> WindowResult<String>;

    /// Returns whether the handle refers to a live, visible window.
    fn is_window_visible(&self, handle: usize) -> bool;

    /// Returns the bounds of every active monitor, in enumeration order.
    fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>>;

    /// Reads the window's style bits.
    fn window_style(&self, handle: usize) -> WindowResult<u32>;

    /// Replaces the window's style bits.
    fn set_window_style(&self, handle: usize, style: u32) -> WindowResult<()>;

    /// Moves, resizes and shows the window in a single call.
    fn set_window_pos(&self, handle: usize, rect: &Rect) -> WindowResult<()>;

    /// Returns the size of the primary screen.
    fn primary_screen_size(&self) -> Size;

    /// Gives the window hosting this process the title `title`, so the
    /// catalog's own-title filter leaves it out.
    fn set_own_title(&self, title: &str) -> WindowResult<()>;
}
