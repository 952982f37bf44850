mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "resizer",
    version,
    about = "Force-resize and center any window, optionally borderless"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List resizable windows and monitors
    List,
    /// Resize a window and center it on the primary screen
    Resize(commands::resize::ResizeArgs),
    /// Keep the window and monitor lists refreshed
    Watch(commands::watch::WatchArgs),
    /// Show the saved profile
    Profile {
        /// Overwrite the saved profile with the defaults
        #[arg(long)]
        reset: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List => commands::list::execute(),
        Commands::Resize(args) => commands::resize::execute(&args),
        Commands::Watch(args) => commands::watch::execute(&args),
        Commands::Profile { reset } => commands::profile::execute(reset),
    }
}
