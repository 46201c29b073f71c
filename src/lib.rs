//! Regina is a backtracking search core for the N-Queens problem that records
//! its own exploration.
//!
//! The engine explores queen placements row by row, depth first, and produces
//! a complete, replayable sequence of discrete search events — every attempted
//! candidate, every placement, every backtrack, and every completed solution,
//! in the exact order the traversal visits them. A presentation layer (an
//! animated board, a terminal replay, a results gallery) consumes the trace at
//! its own pace; the core itself is a pure, synchronous function of its
//! arguments.
//!
//! # Core Concepts
//!
//! - **[`Strategy`]**: one of two interchangeable search encodings. `Array`
//!   keeps a column per decided row and scans prior rows for conflicts;
//!   `Bitmask` keeps occupied columns and both diagonal families as shifted
//!   bitmasks, finding every free column of a row in O(1).
//! - **[`TraceEvent`]**: an immutable record of one search step, carrying a
//!   snapshot of the board at that instant.
//! - **[`SolverEngine`]**: the stateless service exposing trace-producing
//!   search and a trace-free counting mode.
//!
//! # Example
//!
//! ```
//! use regina::solver::{
//!     engine::SolverEngine,
//!     strategy::{SearchOptions, Strategy},
//! };
//!
//! let engine = SolverEngine::new();
//!
//! // Counting mode: no trace is materialized, just the tally and timing.
//! let stats = engine.count_solutions(8, Strategy::Bitmask).unwrap();
//! assert_eq!(stats.solutions, 92);
//!
//! // Trace mode: the full replayable event sequence.
//! let trace = engine
//!     .search(4, Strategy::Array, SearchOptions::default())
//!     .unwrap();
//! assert_eq!(trace.solutions().count(), 2);
//! ```
//!
//! [`Strategy`]: solver::strategy::Strategy
//! [`TraceEvent`]: solver::trace::TraceEvent
//! [`SolverEngine`]: solver::engine::SolverEngine

pub mod error;
pub mod solver;
