use clap::Parser;
use regina::solver::{
    engine::SolverEngine,
    stats::render_stats_table,
    strategy::{SearchOptions, Strategy},
};

/// Solve N-Queens and print the solutions, counting statistics, or the raw
/// trace as JSON.
#[derive(Parser, Debug)]
#[command(name = "solve")]
struct Args {
    /// Board size (1..=64)
    n: usize,

    /// Search encoding to use
    #[arg(long, value_enum, default_value_t = Strategy::Bitmask)]
    strategy: Strategy,

    /// Only count solutions, comparing both encodings in a table
    #[arg(long)]
    count_only: bool,

    /// Record an event for every candidate tested, not just placements
    #[arg(long)]
    attempts: bool,

    /// Dump the full trace as JSON instead of printing boards
    #[arg(long)]
    json: bool,
}

fn main() -> regina::error::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let engine = SolverEngine::new();

    if args.count_only {
        let mut reports = Vec::new();
        for strategy in Strategy::ALL {
            reports.push((strategy, engine.count_solutions(args.n, strategy)?));
        }
        println!("{}", render_stats_table(&reports));
        return Ok(());
    }

    let options = SearchOptions {
        emit_attempts: args.attempts,
    };
    let trace = engine.search(args.n, args.strategy, options)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&trace).expect("trace serializes to JSON")
        );
        return Ok(());
    }

    let mut found = 0usize;
    for board in trace.solutions() {
        found += 1;
        println!("Solution #{}:", found);
        println!("{}", board);
    }
    if found == 0 {
        println!("No solutions for N = {}.", args.n);
    } else {
        println!(
            "{} solutions for N = {} across {} trace events.",
            found,
            args.n,
            trace.len()
        );
    }
    Ok(())
}
