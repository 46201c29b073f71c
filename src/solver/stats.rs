use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

use crate::solver::strategy::Strategy;

/// Counters from one trace-free counting run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Complete solutions found.
    pub solutions: u64,
    /// Placements performed (search tree nodes entered).
    pub nodes_visited: u64,
    /// Placements undone on the way back out of a branch.
    pub backtracks: u64,
    /// Wall-clock duration of the traversal.
    pub elapsed: Duration,
}

pub fn render_stats_table(reports: &[(Strategy, SearchStats)]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Solutions"),
        Cell::new("Nodes Visited"),
        Cell::new("Backtracks"),
        Cell::new("Total Time (ms)"),
    ]));

    for (strategy, stats) in reports {
        table.add_row(Row::new(vec![
            Cell::new(strategy.tag()),
            Cell::new(&stats.solutions.to_string()),
            Cell::new(&stats.nodes_visited.to_string()),
            Cell::new(&stats.backtracks.to_string()),
            Cell::new(&format!("{:.2}", stats.elapsed.as_secs_f64() * 1000.0)),
        ]));
    }

    table.to_string()
}
