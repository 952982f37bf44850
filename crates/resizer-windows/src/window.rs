use resizer_core::{Rect, WindowResult};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
    SWP_FRAMECHANGED, SWP_SHOWWINDOW, SetWindowLongPtrW, SetWindowPos,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// The handle is only borrowed from the OS. Every query goes straight to
/// user32, so a window that has since closed simply reads as untitled and
/// invisible.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a `Window` from a raw handle value (pointer-sized integer).
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    pub fn title(&self) -> WindowResult<String> {
        // SAFETY: both calls only read the window text of a handle; an
        // invalid handle yields a length of 0.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied.max(0) as usize]))
        }
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    pub fn style(&self) -> u32 {
        // SAFETY: reads the style long of the handle.
        unsafe { GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32 }
    }

    pub fn set_style(&self, style: u32) {
        // SAFETY: writes the style long. The frame change only takes
        // effect on the next SetWindowPos with SWP_FRAMECHANGED.
        unsafe {
            SetWindowLongPtrW(self.hwnd, GWL_STYLE, style as isize);
        }
    }

    /// Moves, resizes and shows the window in one call.
    ///
    /// `SWP_FRAMECHANGED` makes the window recompute its non-client area,
    /// which is what applies a caption/frame change made by `set_style`.
    pub fn place(&self, rect: &Rect) -> WindowResult<()> {
        resizer_core::log_debug!(
            "place 0x{:X}: ({},{} {}x{})",
            self.hwnd.0 as usize,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );

        // SAFETY: SetWindowPos with an invalid HWND fails with an error
        // instead of touching memory.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_SHOWWINDOW | SWP_FRAMECHANGED,
            )?
        };
        Ok(())
    }
}
