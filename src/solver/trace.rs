use std::fmt;

use serde::{Deserialize, Serialize};

use crate::solver::board::{Board, Col};

/// One discrete step of the depth-first search, carrying a snapshot of the
/// board as it stood at that instant.
///
/// Events are created once, appended to the [`Trace`], and never mutated.
/// `Attempt` marks a candidate being tested (emitted only when the search
/// options ask for it), `Placed` a queen tentatively set, `Removed` the undo
/// on the way back out of a branch, and `Solution` a complete valid
/// configuration. The tagged serde representation is what presentation
/// layers consume as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    Attempt { row: usize, col: Col, board: Board },
    Placed { row: usize, col: Col, board: Board },
    Removed { row: usize, col: Col, board: Board },
    Solution { board: Board },
}

impl TraceEvent {
    /// The board snapshot captured with this event.
    pub fn board(&self) -> &Board {
        match self {
            TraceEvent::Attempt { board, .. }
            | TraceEvent::Placed { board, .. }
            | TraceEvent::Removed { board, .. }
            | TraceEvent::Solution { board } => board,
        }
    }

    /// The coordinate acted on, for every variant except `Solution`.
    pub fn coordinate(&self) -> Option<(usize, Col)> {
        match self {
            TraceEvent::Attempt { row, col, .. }
            | TraceEvent::Placed { row, col, .. }
            | TraceEvent::Removed { row, col, .. } => Some((*row, *col)),
            TraceEvent::Solution { .. } => None,
        }
    }

    pub fn is_solution(&self) -> bool {
        matches!(self, TraceEvent::Solution { .. })
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Attempt { row, col, .. } => {
                write!(f, "attempt at row {}, column {}", row, col)
            }
            TraceEvent::Placed { row, col, .. } => {
                write!(f, "queen placed at row {}, column {}", row, col)
            }
            TraceEvent::Removed { row, col, .. } => {
                write!(f, "queen removed from row {}, column {}", row, col)
            }
            TraceEvent::Solution { board } => {
                write!(f, "solution with {} queens", board.size())
            }
        }
    }
}

/// The ordered sequence of every event produced by one search invocation, in
/// strict depth-first pre-order: attempts and placements before descending,
/// removals after returning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn from_events(events: Vec<TraceEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The boards of every `Solution` event, in the order they were found.
    pub fn solutions(&self) -> impl Iterator<Item = &Board> + '_ {
        self.events
            .iter()
            .filter(|event| event.is_solution())
            .map(|event| event.board())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl IntoIterator for Trace {
    type Item = TraceEvent;
    type IntoIter = std::vec::IntoIter<TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
