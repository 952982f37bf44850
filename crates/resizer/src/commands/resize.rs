use clap::Args;

use resizer_core::selection::{self, Preselection};
use resizer_core::{Profile, ResizeRequest, Snapshot};

use super::shell;

/// Arguments for the `resize` subcommand.
///
/// Anything left out is taken from the saved profile.
#[derive(Args, Debug, Default)]
pub struct ResizeArgs {
    /// Window number as shown by `resizer list`
    #[arg(long, conflicts_with = "title")]
    window: Option<usize>,
    /// Exact title of the window to resize
    #[arg(long)]
    title: Option<String>,
    /// Monitor number as shown by `resizer list`
    #[arg(long)]
    monitor: Option<usize>,
    /// Width in pixels
    #[arg(long)]
    width: Option<String>,
    /// Height in pixels
    #[arg(long)]
    height: Option<String>,
    /// Remove the title bar and resizable frame
    #[arg(long, conflicts_with = "bordered")]
    borderless: bool,
    /// Restore the title bar and resizable frame
    #[arg(long)]
    bordered: bool,
}

pub fn execute(args: &ResizeArgs) {
    let shell = shell::open_or_exit();
    shell.refresh();

    let snapshot = shell.session.snapshot();
    let request = build_request(args, &snapshot, &shell.profile);
    let result = shell.session.resize(&request);
    shell.close();

    match result {
        Ok(profile) => println!(
            "Resized \"{}\" to {}x{}{}.",
            profile.window_title,
            profile.width,
            profile.height,
            if profile.borderless { " (borderless)" } else { "" }
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Fills in the request from the arguments, falling back to the
/// pre-selection and values of the saved profile.
fn build_request(args: &ResizeArgs, snapshot: &Snapshot, profile: &Profile) -> ResizeRequest {
    let preselected: Preselection =
        selection::resolve(&snapshot.windows, &snapshot.monitors, profile);

    let window = match (args.window, &args.title) {
        (Some(number), _) => number.checked_sub(1),
        (None, Some(title)) => selection::find_window(&snapshot.windows, title),
        (None, None) => preselected.window,
    };
    let monitor = match args.monitor {
        Some(number) => number.checked_sub(1),
        None => preselected.monitor,
    };
    let borderless = match (args.borderless, args.bordered) {
        (true, _) => true,
        (_, true) => false,
        _ => profile.borderless,
    };

    ResizeRequest {
        window,
        monitor,
        width: args.width.clone().unwrap_or_else(|| profile.width.clone()),
        height: args.height.clone().unwrap_or_else(|| profile.height.clone()),
        borderless,
    }
}
