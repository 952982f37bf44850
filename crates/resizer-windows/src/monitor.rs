use std::mem;

use resizer_core::{Rect, Size, WindowResult};
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};
use windows::core::BOOL;

/// Returns the full bounds (not the work area) of every active monitor,
/// in enumeration order.
///
/// A monitor whose info cannot be read is left out.
pub fn monitor_rects() -> WindowResult<Vec<Rect>> {
    let mut rects: Vec<Rect> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously; the LPARAM points
    // at `rects`, which outlives the call.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(collect_monitor),
            LPARAM(&mut rects as *mut Vec<Rect> as isize),
        )
    };

    if !ok.as_bool() {
        return Err("EnumDisplayMonitors failed".into());
    }
    Ok(rects)
}

/// Returns the primary screen size in pixels.
pub fn primary_screen_size() -> Size {
    // SAFETY: GetSystemMetrics only reads system state.
    unsafe { Size::new(GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
}

/// `EnumDisplayMonitors` callback: records the monitor bounds.
unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the `&mut Vec<Rect>` passed by monitor_rects().
    let rects = unsafe { &mut *(lparam.0 as *mut Vec<Rect>) };

    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: cbSize is set as the API requires.
    if unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        let rc = info.rcMonitor;
        rects.push(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom));
    }

    BOOL(1)
}
