//! # Stash Viewer (headless)
//!
//! Loads a configuration and catalog, replays a scripted sequence of UI
//! events through the event bus and prints every resulting frame.
//!
//! Usage: `stash_viewer [config.toml]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use stashgrid::{
    EventBus, EventReceiver, EventSender, StashConfig, StashError, StashEvent, StashSession,
};
use stashgrid_ui::GridPlacement;
use tracing_subscriber::EnvFilter;

/// Pixel size of one grid cell in the simulated layout.
const CELL_PX: f32 = 48.0;
/// Top-left corner of the grid in the simulated layout.
const GRID_ORIGIN: (f32, f32) = (240.0, 80.0);

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "stash viewer failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StashError> {
    let config = match std::env::args().nth(1) {
        Some(path) => StashConfig::load(path)?,
        None => StashConfig::default(),
    };
    let mut session = StashSession::from_config(&config)?;
    let bus = EventBus::new(config.event_capacity);
    let sender = bus.sender();
    let receiver = bus.receiver();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║           STASHGRID - HEADLESS STASH VIEWER                      ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    print_frame("initial", &session);

    let tab_ids: Vec<String> = session.catalog().tabs().iter().map(|t| t.id.clone()).collect();
    for tab_id in &tab_ids {
        let label = format!("select {tab_id}");
        step(&mut session, &sender, &receiver, &label, [StashEvent::SelectTab(tab_id.clone())]);

        let Some(first) = session.frame().items.first().cloned() else {
            continue;
        };
        let (x, y) = cell_center(first.placement);
        step(
            &mut session,
            &sender,
            &receiver,
            &format!("hover {}", first.item_id),
            [
                StashEvent::PointerEntered {
                    item_id: first.item_id.clone(),
                    x,
                    y,
                },
                StashEvent::PanelMeasured {
                    width: 384.0,
                    height: 420.0,
                },
            ],
        );
        step(
            &mut session,
            &sender,
            &receiver,
            "pointer near right edge",
            [StashEvent::PointerMoved {
                x: config.viewport.width - 10.0,
                y: config.viewport.height - 10.0,
            }],
        );
        step(&mut session, &sender, &receiver, "pointer left", [StashEvent::PointerLeft]);
    }

    // Filter inputs on the largest tab; keystrokes arrive as one batch.
    let busiest = session
        .catalog()
        .tabs()
        .iter()
        .max_by_key(|t| t.items.len())
        .map(|t| t.id.clone());
    if let Some(busiest) = busiest {
        let label = format!("select {busiest}");
        step(&mut session, &sender, &receiver, &label, [StashEvent::SelectTab(busiest)]);
        step(
            &mut session,
            &sender,
            &receiver,
            "rarity unique",
            [StashEvent::RarityChanged("unique".into())],
        );
        step(
            &mut session,
            &sender,
            &receiver,
            "category flask",
            [
                StashEvent::RarityChanged("all".into()),
                StashEvent::CategoryChanged("flask".into()),
            ],
        );
        step(
            &mut session,
            &sender,
            &receiver,
            "typed \"ar\"",
            [
                StashEvent::CategoryChanged("all".into()),
                StashEvent::SearchChanged("a".into()),
                StashEvent::SearchChanged("ar".into()),
            ],
        );
    }

    tracing::info!(filter_runs = session.filter_runs(), "script finished");
    Ok(())
}

/// Sends a batch of events, pumps the session once and prints the frame.
fn step<const N: usize>(
    session: &mut StashSession,
    sender: &EventSender,
    receiver: &EventReceiver,
    label: &str,
    events: [StashEvent; N],
) {
    for event in events {
        if !sender.send(event) {
            tracing::warn!(step = label, "event dropped");
        }
    }
    session.pump(receiver);
    print_frame(label, session);
}

fn print_frame(label: &str, session: &StashSession) {
    println!("── {label} ──────────────────────────────────────────────");
    print!("{}", session.frame());
    println!();
}

#[allow(clippy::cast_precision_loss)]
fn cell_center(placement: GridPlacement) -> (f32, f32) {
    let column = (placement.column_start - 1) as f32 + placement.column_span as f32 / 2.0;
    let row = (placement.row_start - 1) as f32 + placement.row_span as f32 / 2.0;
    (GRID_ORIGIN.0 + column * CELL_PX, GRID_ORIGIN.1 + row * CELL_PX)
}
