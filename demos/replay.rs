use std::{thread, time::Duration};

use clap::Parser;
use regina::solver::{
    engine::SolverEngine,
    strategy::{SearchOptions, Strategy},
};

/// Step through the search trace event by event, the way the animated board
/// visualizer plays it back.
#[derive(Parser, Debug)]
#[command(name = "replay")]
struct Args {
    /// Board size (1..=64)
    n: usize,

    /// Search encoding to use
    #[arg(long, value_enum, default_value_t = Strategy::Array)]
    strategy: Strategy,

    /// Milliseconds to pause between steps; 0 prints without pausing
    #[arg(long, default_value_t = 150)]
    delay_ms: u64,

    /// Also replay the attempt events
    #[arg(long)]
    attempts: bool,
}

fn main() -> regina::error::Result<()> {
    let args = Args::parse();
    let engine = SolverEngine::new();
    let options = SearchOptions {
        emit_attempts: args.attempts,
    };
    let trace = engine.search(args.n, args.strategy, options)?;

    for (step, event) in trace.iter().enumerate() {
        println!("step {:>5}  {}", step, event);
        println!("{}", event.board());
        if args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    println!(
        "{} events, {} solutions.",
        trace.len(),
        trace.solutions().count()
    );
    Ok(())
}
