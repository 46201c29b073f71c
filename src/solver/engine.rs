use std::time::Instant;

use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        board::{Board, Col, MAX_SIZE},
        masks::AttackMasks,
        stats::SearchStats,
        strategy::{SearchOptions, Strategy},
        trace::{Trace, TraceEvent},
    },
};

/// The engine driving the N-Queens backtracking search.
///
/// The engine is a stateless service: every call owns its board and masks
/// for the duration of the traversal and returns an explicit result, so two
/// calls with the same arguments produce identical output. Trace mode and
/// counting mode run the very same traversal; they differ only in the sink
/// the emission points feed.
pub struct SolverEngine;

impl SolverEngine {
    /// Creates a new `SolverEngine`.
    pub fn new() -> Self {
        Self
    }

    /// Runs a full depth-first search over board size `size` and returns the
    /// complete, replayable event sequence.
    ///
    /// Candidates are tried in ascending column order at every row, so
    /// solutions appear in strictly increasing lexicographic order of their
    /// column sequence. The search is exhaustive: it terminates only when
    /// every candidate at row 0 has been explored.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidSize`] if `size` is zero or exceeds
    /// [`MAX_SIZE`]; the check runs before any board is allocated.
    pub fn search(
        &self,
        size: usize,
        strategy: Strategy,
        options: SearchOptions,
    ) -> Result<Trace> {
        check_size(size)?;

        let mut board = Board::empty(size);
        let mut sink = TraceSink {
            events: Vec::new(),
            emit_attempts: options.emit_attempts,
        };
        match strategy {
            Strategy::Array => scan_search(&mut board, 0, &mut sink),
            Strategy::Bitmask => mask_search(&mut board, AttackMasks::new(), 0, &mut sink),
        }

        debug!(
            size,
            strategy = %strategy,
            events = sink.events.len(),
            "search trace complete"
        );
        Ok(Trace::from_events(sink.events))
    }

    /// Counts the solutions for board size `size` without materializing any
    /// trace state, returning the tally alongside traversal counters and the
    /// elapsed wall-clock time.
    ///
    /// The count always equals the number of `Solution` events a trace-mode
    /// run with the same arguments would record.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidSize`] as for [`SolverEngine::search`].
    pub fn count_solutions(&self, size: usize, strategy: Strategy) -> Result<SearchStats> {
        check_size(size)?;

        let started = Instant::now();
        let mut board = Board::empty(size);
        let mut sink = CountingSink::default();
        match strategy {
            Strategy::Array => scan_search(&mut board, 0, &mut sink),
            Strategy::Bitmask => mask_search(&mut board, AttackMasks::new(), 0, &mut sink),
        }

        let mut stats = sink.stats;
        stats.elapsed = started.elapsed();
        debug!(
            size,
            strategy = %strategy,
            solutions = stats.solutions,
            "counting run complete"
        );
        Ok(stats)
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_SIZE {
        return Err(SolverError::InvalidSize { given: size }.into());
    }
    Ok(())
}

/// The seam between the traversal and its two consumers. The recursion calls
/// these hooks at every emission point; the trace sink snapshots the board
/// into events, the counting sink just bumps counters.
trait EventSink {
    fn attempt(&mut self, board: &Board, row: usize, col: Col);
    fn placed(&mut self, board: &Board, row: usize, col: Col);
    fn removed(&mut self, board: &Board, row: usize, col: Col);
    fn solution(&mut self, board: &Board);
}

struct TraceSink {
    events: Vec<TraceEvent>,
    emit_attempts: bool,
}

impl EventSink for TraceSink {
    fn attempt(&mut self, board: &Board, row: usize, col: Col) {
        if self.emit_attempts {
            self.events.push(TraceEvent::Attempt {
                row,
                col,
                board: board.snapshot(),
            });
        }
    }

    fn placed(&mut self, board: &Board, row: usize, col: Col) {
        self.events.push(TraceEvent::Placed {
            row,
            col,
            board: board.snapshot(),
        });
    }

    fn removed(&mut self, board: &Board, row: usize, col: Col) {
        self.events.push(TraceEvent::Removed {
            row,
            col,
            board: board.snapshot(),
        });
    }

    fn solution(&mut self, board: &Board) {
        self.events.push(TraceEvent::Solution {
            board: board.snapshot(),
        });
    }
}

#[derive(Default)]
struct CountingSink {
    stats: SearchStats,
}

impl EventSink for CountingSink {
    fn attempt(&mut self, _board: &Board, _row: usize, _col: Col) {}

    fn placed(&mut self, _board: &Board, _row: usize, _col: Col) {
        self.stats.nodes_visited += 1;
    }

    fn removed(&mut self, _board: &Board, _row: usize, _col: Col) {
        self.stats.backtracks += 1;
    }

    fn solution(&mut self, _board: &Board) {
        self.stats.solutions += 1;
    }
}

/// Column-array encoding: every column of the current row is a candidate,
/// tested with the O(row) scan predicate.
fn scan_search<E: EventSink>(board: &mut Board, row: usize, sink: &mut E) {
    let size = board.size();
    if row == size {
        sink.solution(board);
        return;
    }
    for col in 0..size as Col {
        sink.attempt(board, row, col);
        if !board.is_safe(row, col) {
            continue;
        }
        board.place(row, col);
        sink.placed(board, row, col);
        scan_search(board, row + 1, sink);
        board.clear(row);
        sink.removed(board, row, col);
    }
}

/// Bitmask encoding: candidates are exactly the free columns of the current
/// row, extracted lowest bit first. The masks travel down the stack by
/// value; the board alone is mutated and undone.
fn mask_search<E: EventSink>(board: &mut Board, masks: AttackMasks, row: usize, sink: &mut E) {
    let size = board.size();
    if row == size {
        sink.solution(board);
        return;
    }
    for col in masks.free_columns(size) {
        sink.attempt(board, row, col);
        board.place(row, col);
        sink.placed(board, row, col);
        mask_search(board, masks.occupy(col), row + 1, sink);
        board.clear(row);
        sink.removed(board, row, col);
    }
}
