//! Cell State Machine
//!
//! A cell is Open or Close. Causes arrive through the cell's mailbox and are
//! applied one at a time by its actor.
//!
//! Key concepts:
//! - Declaring a closed state universe with `state_enum!`
//! - Guards and actions on every transition
//! - Feeding the machine through `MachineActor`
//! - An invalid cause is logged and the actor keeps going
//!
//! Run with: RUST_LOG=debug cargo run --example cell

use serde::{Deserialize, Serialize};
use state_switcher::actor::{ActorConfig, MachineActor, ShutdownMode};
use state_switcher::builder::{StateMachineBuilder, TransitionBuilder};
use state_switcher::state_enum;
use tracing::info;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum CellState {
        Open,
        Close,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum CellCause {
    Empty,
    Filled,
    Booked,
    Broken,
    Hacked,
    Polluted,
    Fixed,
}

fn precondition() -> bool {
    info!("Check the precondition for the transition");
    true
}

fn do_work(cause: &CellCause) {
    info!(?cause, "Do work");
}

fn edge(from: CellState, to: CellState, cause: CellCause) -> TransitionBuilder<CellState, CellCause> {
    TransitionBuilder::new()
        .from(from)
        .to(to)
        .on(cause)
        .when(precondition)
        .then(do_work)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    use CellCause::*;
    use CellState::*;

    let machine = StateMachineBuilder::new()
        .initial(Open)
        .transition(edge(Open, Close, Filled))?
        .transition(edge(Close, Open, Empty))?
        .transition(edge(Close, Open, Broken))?
        .transition(edge(Close, Open, Hacked))?
        .transition(edge(Close, Open, Polluted))?
        .transition(edge(Open, Open, Booked))?
        .transition(edge(Open, Open, Fixed))?
        .build()?;

    let cell = MachineActor::spawn(
        machine,
        ActorConfig::new()
            .with_name("cell")
            .with_shutdown(ShutdownMode::Graceful),
    );
    info!(state = ?cell.current_state(), "Current state");

    for cause in [Booked, Filled, Hacked, Fixed, Hacked] {
        cell.send(cause)?;
    }

    let stopped = cell.stop().await?;
    info!(
        state = ?stopped.state,
        processed = stopped.report.processed,
        failed = stopped.report.failed,
        "Cell stopped"
    );

    Ok(())
}
