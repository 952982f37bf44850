use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Opts the process into per-monitor (V2) DPI awareness.
///
/// Without it, `GetSystemMetrics` and `GetMonitorInfoW` report sizes
/// scaled to 96 DPI, so a 2560x1440 screen at 150% reads as 1707x960 and
/// the requested window size is scaled up again by the OS. With it, every
/// size the resizer reads or writes is in physical pixels.
///
/// Call once at startup, before any other user32 call.
pub fn enable_dpi_awareness() {
    // SAFETY: no pointers involved. Fails harmlessly if the awareness was
    // already fixed by a manifest or an earlier call.
    let result = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) };
    if let Err(e) = result {
        resizer_core::log_debug!("DPI awareness unchanged: {e}");
    }
}
