use resizer_core::WindowResult;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

/// Collects every top-level window handle, in z-order.
///
/// No filtering happens here: visibility and title checks belong to the
/// window catalog so that they behave the same on every platform.
pub fn enumerate_handles() -> WindowResult<Vec<usize>> {
    let mut handles: Vec<usize> = Vec::new();

    // SAFETY: EnumWindows runs synchronously and calls our callback once
    // per top-level window. The LPARAM is a pointer to `handles`, which
    // outlives the call.
    unsafe {
        EnumWindows(
            Some(collect_handle),
            LPARAM(&mut handles as *mut Vec<usize> as isize),
        )?;
    }

    Ok(handles)
}

/// `EnumWindows` callback: records the handle and keeps enumerating.
unsafe extern "system" fn collect_handle(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the `&mut Vec<usize>` passed by enumerate_handles().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<usize>) };
    handles.push(hwnd.0 as usize);

    BOOL(1) // continue enumerating
}
