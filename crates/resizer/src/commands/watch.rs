use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Args;

use resizer_core::ShellEvent;

use super::{render, shell};

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes (defaults to `refresh.interval_secs`)
    #[arg(long)]
    interval: Option<u64>,
    /// Stop after this many refreshes
    #[arg(long)]
    count: Option<usize>,
}

/// Messages handled by the watch loop on the main thread.
enum WatchMsg {
    /// Time to request another refresh.
    Tick,
    /// A notification from the session.
    Shell(ShellEvent),
}

/// Re-renders the lists every time a periodic refresh lands.
pub fn execute(args: &WatchArgs) {
    let shell::Shell {
        config,
        session,
        events,
        ..
    } = shell::open_or_exit();

    let interval = Duration::from_secs(args.interval.unwrap_or(config.refresh.interval_secs).max(1));
    let (tx, rx) = mpsc::channel::<WatchMsg>();
    let stop = Arc::new(AtomicBool::new(false));
    spawn_event_bridge(events, tx.clone());
    spawn_tick_thread(tx, interval, stop.clone());

    session.request_refresh();

    let mut renders = 0;
    for msg in rx {
        match msg {
            // Dropped by the session if the previous refresh is still running.
            WatchMsg::Tick => {
                session.request_refresh();
            }
            WatchMsg::Shell(ShellEvent::Refreshed) => {
                // Re-read so saves from other `resizer` runs show up.
                let profile = session.store().load();
                println!();
                render::print(&session.render_view(&profile));
                renders += 1;
                if args.count.is_some_and(|count| renders >= count) {
                    break;
                }
            }
        }
    }

    stop.store(true, Ordering::Relaxed);
    session.shutdown();
}

/// Bridges session notifications into the watch channel.
fn spawn_event_bridge(
    events: mpsc::Receiver<ShellEvent>,
    tx: mpsc::Sender<WatchMsg>,
) {
    thread::spawn(move || {
        for event in events {
            if tx.send(WatchMsg::Shell(event)).is_err() {
                break;
            }
        }
    });
}

/// Spawns the thread that asks for a refresh every `interval`.
fn spawn_tick_thread(
    tx: mpsc::Sender<WatchMsg>,
    interval: Duration,
    stop: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(interval);
            if tx.send(WatchMsg::Tick).is_err() {
                break;
            }
        }
    });
}
