use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};

use resizer_core::{Profile, ProfileStore, config, log};

/// Shows the saved profile, optionally resetting it to the defaults first.
pub fn execute(reset: bool) {
    log::init(&config::load().logging);

    let store = ProfileStore::user();
    let Some(path) = store.path() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if reset {
        store.save(&Profile::default());
        println!("Reset {}", path.display());
    }

    let profile = store.load();
    let title = if profile.window_title.is_empty() {
        "(none)".to_string()
    } else {
        profile.window_title.clone()
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Setting"),
        Cell::new("Value"),
    ]);
    table.add_row(vec![Cell::new("Window"), Cell::new(title)]);
    table.add_row(vec![Cell::new("Monitor"), Cell::new(&profile.monitor)]);
    table.add_row(vec![Cell::new("Width"), Cell::new(&profile.width)]);
    table.add_row(vec![Cell::new("Height"), Cell::new(&profile.height)]);
    table.add_row(vec![Cell::new("Borderless"), Cell::new(profile.borderless)]);

    println!("{table}");
    println!("\n{}", path.display());
}
