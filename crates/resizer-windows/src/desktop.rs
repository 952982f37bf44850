use resizer_core::platform::{FRAME_BITS, STYLE_CAPTION, STYLE_THICKFRAME};
use resizer_core::{Platform, Rect, Size, WindowResult};
use windows::Win32::UI::WindowsAndMessaging::{WS_CAPTION, WS_THICKFRAME};

use crate::console;
use crate::enumerate;
use crate::monitor;
use crate::window::Window;

// The core crate toggles these bits without depending on `windows`.
const _: () = assert!(STYLE_CAPTION == WS_CAPTION.0);
const _: () = assert!(STYLE_THICKFRAME == WS_THICKFRAME.0);
const _: () = assert!(FRAME_BITS == WS_CAPTION.0 | WS_THICKFRAME.0);

/// The live Windows desktop.
///
/// Stateless: every call queries user32 directly, so one value can be
/// shared freely between the UI thread and refresh workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Platform for Win32Desktop {
    fn enumerate_windows(&self) -> WindowResult<Vec<usize>> {
        enumerate::enumerate_handles()
    }

    fn window_title(&self, handle: usize) -> WindowResult<String> {
        Window::from_raw(handle).title()
    }

    fn is_window_visible(&self, handle: usize) -> bool {
        Window::from_raw(handle).is_visible()
    }

    fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>> {
        monitor::monitor_rects()
    }

    fn window_style(&self, handle: usize) -> WindowResult<u32> {
        Ok(Window::from_raw(handle).style())
    }

    fn set_window_style(&self, handle: usize, style: u32) -> WindowResult<()> {
        Window::from_raw(handle).set_style(style);
        Ok(())
    }

    fn set_window_pos(&self, handle: usize, rect: &Rect) -> WindowResult<()> {
        Window::from_raw(handle).place(rect)
    }

    fn primary_screen_size(&self) -> Size {
        monitor::primary_screen_size()
    }

    fn set_own_title(&self, title: &str) -> WindowResult<()> {
        console::set_title(title)
    }
}
