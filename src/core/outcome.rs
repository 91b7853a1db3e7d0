//! Cast outcomes.
//!
//! A cast of the four sticks yields one of six outcomes. Each outcome
//! moves a piece a fixed number of cells; `backdo` moves one cell back.
//! `yut` and `mo` grant another cast.

use serde::{Deserialize, Serialize};

use super::error::RuleError;

/// Result of a single cast of the throwing sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CastOutcome {
    /// One step backward.
    Backdo,
    /// One step.
    Do,
    /// Two steps.
    Gae,
    /// Three steps.
    Geol,
    /// Four steps, throw again.
    Yut,
    /// Five steps, throw again.
    Mo,
}

impl CastOutcome {
    /// All outcomes in canonical order: forward outcomes by magnitude, then backdo.
    ///
    /// This order drives sampling and sequence enumeration, so it is part of
    /// the reproducibility contract.
    pub const ALL: [CastOutcome; 6] = [
        CastOutcome::Do,
        CastOutcome::Gae,
        CastOutcome::Geol,
        CastOutcome::Yut,
        CastOutcome::Mo,
        CastOutcome::Backdo,
    ];

    /// Signed number of cells this outcome moves.
    #[must_use]
    pub const fn steps(self) -> i8 {
        match self {
            CastOutcome::Backdo => -1,
            CastOutcome::Do => 1,
            CastOutcome::Gae => 2,
            CastOutcome::Geol => 3,
            CastOutcome::Yut => 4,
            CastOutcome::Mo => 5,
        }
    }

    /// Look up the outcome for a signed step count.
    pub fn from_steps(steps: i8) -> Result<Self, RuleError> {
        match steps {
            -1 => Ok(CastOutcome::Backdo),
            1 => Ok(CastOutcome::Do),
            2 => Ok(CastOutcome::Gae),
            3 => Ok(CastOutcome::Geol),
            4 => Ok(CastOutcome::Yut),
            5 => Ok(CastOutcome::Mo),
            other => Err(RuleError::InvalidOutcome(other)),
        }
    }

    /// Whether casting this outcome grants another cast.
    #[must_use]
    pub const fn needs_throw_again(self) -> bool {
        matches!(self, CastOutcome::Yut | CastOutcome::Mo)
    }

    /// Whether this outcome moves backward.
    #[must_use]
    pub const fn is_backward(self) -> bool {
        matches!(self, CastOutcome::Backdo)
    }

    /// Traditional name of the outcome.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CastOutcome::Backdo => "backdo",
            CastOutcome::Do => "do",
            CastOutcome::Gae => "gae",
            CastOutcome::Geol => "geol",
            CastOutcome::Yut => "yut",
            CastOutcome::Mo => "mo",
        }
    }

    /// Dense index for per-outcome tables (declaration order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CastOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CastOutcome {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CastOutcome::ALL
            .into_iter()
            .find(|outcome| outcome.name() == s)
            .ok_or_else(|| RuleError::UnknownOutcomeName(s.to_string()))
    }
}

/// Comma-separated outcome names, e.g. `yut, do`.
#[must_use]
pub fn outcome_names(outcomes: &[CastOutcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| outcome.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_round_trip() {
        for outcome in CastOutcome::ALL {
            assert_eq!(CastOutcome::from_steps(outcome.steps()), Ok(outcome));
        }
        assert_eq!(CastOutcome::from_steps(0), Err(RuleError::InvalidOutcome(0)));
        assert_eq!(CastOutcome::from_steps(6), Err(RuleError::InvalidOutcome(6)));
    }

    #[test]
    fn test_throw_again_only_for_yut_and_mo() {
        let again: Vec<_> = CastOutcome::ALL
            .into_iter()
            .filter(|o| o.needs_throw_again())
            .collect();
        assert_eq!(again, vec![CastOutcome::Yut, CastOutcome::Mo]);
    }

    #[test]
    fn test_names() {
        assert_eq!("geol".parse::<CastOutcome>(), Ok(CastOutcome::Geol));
        assert!("nope".parse::<CastOutcome>().is_err());
        assert_eq!(
            outcome_names(&[CastOutcome::Yut, CastOutcome::Backdo]),
            "yut, backdo"
        );
    }

    #[test]
    fn test_indices_are_dense() {
        let mut seen = [false; 6];
        for outcome in CastOutcome::ALL {
            seen[outcome.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
