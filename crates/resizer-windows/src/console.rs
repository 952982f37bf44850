use resizer_core::WindowResult;
use windows::Win32::System::Console::SetConsoleTitleW;
use windows::core::HSTRING;

/// Retitles the console window attached to this process.
///
/// Fails when the process has no console, e.g. when started detached.
pub fn set_title(title: &str) -> WindowResult<()> {
    // SAFETY: the HSTRING is null-terminated and outlives the call.
    unsafe { SetConsoleTitleW(&HSTRING::from(title))? };
    resizer_core::log_debug!("console title set to \"{title}\"");
    Ok(())
}
