//! Friday's Lies headless entry point
//!
//! Runs one seeded session with the autopilot at the helm and logs what the
//! castaway sees. Usage:
//!
//! ```text
//! fridays-lies [seed] [red|blue] [max_ticks] [tuning.json]
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use fridays_lies::Tuning;
use fridays_lies::autopilot::{Intent, choose_intent};
use fridays_lies::consts::TICKS_PER_SECOND;
use fridays_lies::sim::{GameMode, Pill, Stats, WorldState, advance_tick};

/// Ticks between autopilot decisions (four steps a second)
const INTENT_INTERVAL: u64 = TICKS_PER_SECOND / 4;
/// Default run length: ten in-game days
const DEFAULT_MAX_TICKS: u64 = 24_000;

/// End-of-run report printed as JSON
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    pill: Pill,
    mode: GameMode,
    ticks: u64,
    days_survived: u32,
    real_stats: Stats,
    display_stats: Stats,
    inventory: Vec<String>,
    creatures_alive: usize,
    items_left: usize,
}

struct Args {
    seed: u64,
    pill: Pill,
    max_ticks: u64,
    tuning: Tuning,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);

    let seed = match args.next() {
        Some(s) => s.parse().map_err(|_| format!("invalid seed: {s}"))?,
        None => 42,
    };
    let pill = match args.next() {
        Some(s) => Pill::from_str(&s).ok_or_else(|| format!("unknown pill: {s}"))?,
        None => Pill::Red,
    };
    let max_ticks = match args.next() {
        Some(s) => s.parse().map_err(|_| format!("invalid tick count: {s}"))?,
        None => DEFAULT_MAX_TICKS,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).map_err(|e| e.to_string())?,
        None => Tuning::default(),
    };

    Ok(Args {
        seed,
        pill,
        max_ticks,
        tuning,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: fridays-lies [seed] [red|blue] [max_ticks] [tuning.json]");
            return ExitCode::from(2);
        }
    };

    log::info!("Friday's Lies (headless) starting...");
    let mut state = match WorldState::with_tuning(args.pill, args.seed, Arc::new(args.tuning)) {
        Ok(state) => state,
        Err(e) => {
            log::error!("World generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut pilot_rng = Pcg32::seed_from_u64(args.seed ^ 0x5EED_F41D);
    let mut seen_messages = 0;
    report_messages(&state, &mut seen_messages);

    while state.is_playing() && state.tick < args.max_ticks {
        if state.tick % INTENT_INTERVAL == 0 {
            let intent = choose_intent(&state, &mut pilot_rng);
            if intent != Intent::Wait {
                match intent.apply(&state) {
                    Ok(next) => state = next,
                    Err(e) => log::warn!("Autopilot intent {intent:?} rejected: {e}"),
                }
            }
        }
        state = advance_tick(&state);
        report_messages(&state, &mut seen_messages);
    }

    let summary = RunSummary {
        seed: state.seed,
        pill: state.pill,
        mode: state.mode,
        ticks: state.tick,
        days_survived: state.day,
        real_stats: state.player.real_stats,
        display_stats: state.player.display_stats,
        inventory: state.player.inventory.iter().map(|k| k.to_string()).collect(),
        creatures_alive: state.entities.len(),
        items_left: state.items.len(),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize summary: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Log messages pushed since the last call
fn report_messages(state: &WorldState, seen: &mut u64) {
    let total = state.messages.total_pushed();
    let fresh = total.saturating_sub(*seen).min(state.messages.len() as u64) as usize;
    let prefix = if state.pill.is_truthful() { ">" } else { "Friday:" };
    for line in state.messages.iter().skip(state.messages.len() - fresh) {
        log::info!("[tick {}] {} {}", state.tick, prefix, line);
    }
    *seen = total;
}
