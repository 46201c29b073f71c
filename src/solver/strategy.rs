use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, SolverError};

/// Selects which of the two interchangeable search encodings explores the
/// state space.
///
/// Both encodings visit candidates in ascending column order and produce the
/// same placements, removals, and solutions in the same order; they differ
/// only in how validity is decided (per-row scan vs. O(1) bitmask) and in
/// which candidates an `Attempt` event is recorded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Column-per-row representation; validity by scanning all earlier rows.
    Array,
    /// Shifted-bitmask representation; free columns found by bit extraction.
    Bitmask,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Array, Strategy::Bitmask];

    /// The stable string tag used for parsing and display.
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::Array => "array",
            Strategy::Bitmask => "bitmask",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "array" => Ok(Strategy::Array),
            "bitmask" => Ok(Strategy::Bitmask),
            other => Err(SolverError::UnknownStrategy(other.to_string()).into()),
        }
    }
}

/// Knobs controlling trace verbosity.
///
/// The two event vocabularies found in visualizers of this search — one that
/// records only place/remove/solution, one that also records every candidate
/// tested — are the same traversal at different verbosity, so they hang off
/// a single flag rather than separate algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Record an `Attempt` event for each candidate the search tests.
    pub emit_attempts: bool,
}

impl SearchOptions {
    /// Options with attempt events switched on.
    pub fn with_attempts() -> Self {
        Self {
            emit_attempts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Error, SolverError};

    #[test]
    fn known_tags_parse() {
        assert_eq!("array".parse::<Strategy>().unwrap(), Strategy::Array);
        assert_eq!("bitmask".parse::<Strategy>().unwrap(), Strategy::Bitmask);
    }

    #[test]
    fn display_round_trips_through_parsing() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "simulated-annealing".parse::<Strategy>().unwrap_err();
        let Error::Inner { inner, .. } = err;
        assert!(matches!(*inner, SolverError::UnknownStrategy(_)));
    }

    #[test]
    fn attempts_are_off_by_default() {
        assert!(!SearchOptions::default().emit_attempts);
        assert!(SearchOptions::with_attempts().emit_attempts);
    }
}
