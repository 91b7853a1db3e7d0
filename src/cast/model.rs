//! Cast outcome distribution.
//!
//! Each of the four sticks lands flat side up with probability 0.6. The
//! number of flat sides selects the outcome: 1 is `do` (or `backdo` a
//! quarter of the time, when the marked stick is the flat one), 2 is `gae`,
//! 3 is `geol`, 4 is `yut` and 0 is `mo`.

use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::core::{CastOutcome, GameRng};

/// Probability that a single stick lands flat side up.
pub const FLAT_SIDE_UP_PROB: f64 = 0.6;

/// Share of the one-flat-side mass that is `backdo`.
pub const BACKDO_SHARE: f64 = 0.25;

const STICKS: u32 = 4;

/// A chain of casts: every element but the last grants throw-again.
pub type Cast = SmallVec<[CastOutcome; 4]>;

/// Whether an outcome grants another cast (`yut` and `mo`).
#[must_use]
pub const fn needs_throw_again(outcome: CastOutcome) -> bool {
    outcome.needs_throw_again()
}

fn binomial_pmf(k: u32, n: u32, p: f64) -> f64 {
    let mut choose = 1.0;
    for i in 0..k {
        choose = choose * f64::from(n - i) / f64::from(i + 1);
    }
    let k = k as i32;
    let n = n as i32;
    choose * p.powi(k) * (1.0 - p).powi(n - k)
}

/// Probability mass over single-cast outcomes.
#[derive(Clone, Debug, PartialEq)]
pub struct CastModel {
    probabilities: [f64; 6],
}

impl CastModel {
    /// Build the distribution for a given flat-side-up probability.
    ///
    /// # Panics
    ///
    /// Panics if `flat_side_up` is not in `[0, 1]`.
    #[must_use]
    pub fn new(flat_side_up: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&flat_side_up),
            "flat side probability must be in [0, 1], got {flat_side_up}"
        );
        let flat = |k| binomial_pmf(k, STICKS, flat_side_up);

        let mut probabilities = [0.0; 6];
        probabilities[CastOutcome::Do.index()] = flat(1) * (1.0 - BACKDO_SHARE);
        probabilities[CastOutcome::Backdo.index()] = flat(1) * BACKDO_SHARE;
        probabilities[CastOutcome::Gae.index()] = flat(2);
        probabilities[CastOutcome::Geol.index()] = flat(3);
        probabilities[CastOutcome::Yut.index()] = flat(4);
        probabilities[CastOutcome::Mo.index()] = flat(0);
        Self { probabilities }
    }

    /// The shared, read-only model for standard sticks.
    pub fn standard() -> &'static CastModel {
        static MODEL: OnceLock<CastModel> = OnceLock::new();
        MODEL.get_or_init(|| CastModel::new(FLAT_SIDE_UP_PROB))
    }

    /// Probability of a single outcome.
    #[must_use]
    pub fn probability(&self, outcome: CastOutcome) -> f64 {
        self.probabilities[outcome.index()]
    }

    /// Draw one outcome.
    ///
    /// Walks [`CastOutcome::ALL`] in order, so a given stream always maps
    /// to the same outcome.
    pub fn sample(&self, rng: &mut GameRng) -> CastOutcome {
        let mut threshold = rng.gen_f64();
        for outcome in CastOutcome::ALL {
            threshold -= self.probability(outcome);
            if threshold < 0.0 {
                return outcome;
            }
        }
        // Floating point edge case - fall back to the last outcome
        CastOutcome::ALL[CastOutcome::ALL.len() - 1]
    }

    /// Draw a full cast: keep drawing while the last outcome grants throw-again.
    pub fn cast(&self, rng: &mut GameRng) -> Cast {
        let mut cast = Cast::new();
        loop {
            let outcome = self.sample(rng);
            cast.push(outcome);
            if !outcome.needs_throw_again() {
                return cast;
            }
        }
    }

    /// Every chain of up to `depth` casts with its joint probability.
    ///
    /// A chain continues past position `i` only if outcome `i` grants
    /// throw-again. Chains that reach `depth` while still owed a throw are
    /// truncated, so the probabilities always sum to 1.
    ///
    /// # Panics
    ///
    /// Panics if `depth == 0`.
    #[must_use]
    pub fn enumerate_sequences(&self, depth: usize) -> CastSequences {
        assert!(depth >= 1, "sequence depth must be at least 1");

        if depth == 1 {
            return CastOutcome::ALL
                .into_iter()
                .map(|outcome| (Cast::from_slice(&[outcome]), self.probability(outcome)))
                .collect();
        }

        let inner = self.enumerate_sequences(depth - 1);
        let mut sequences = CastSequences::default();
        for outcome in CastOutcome::ALL {
            let p = self.probability(outcome);
            if outcome.needs_throw_again() {
                for (tail, q) in inner.iter() {
                    let mut chain = Cast::with_capacity(tail.len() + 1);
                    chain.push(outcome);
                    chain.extend_from_slice(tail);
                    sequences.push(chain, p * q);
                }
            } else {
                sequences.push(Cast::from_slice(&[outcome]), p);
            }
        }
        sequences
    }
}

impl Default for CastModel {
    fn default() -> Self {
        Self::new(FLAT_SIDE_UP_PROB)
    }
}

/// Parallel lists of cast chains and their probabilities.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CastSequences {
    /// Cast chains.
    pub outcomes: Vec<Cast>,
    /// Joint probability of each chain.
    pub probabilities: Vec<f64>,
}

impl CastSequences {
    fn push(&mut self, chain: Cast, probability: f64) {
        self.outcomes.push(chain);
        self.probabilities.push(probability);
    }

    /// Number of chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether there are no chains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterate over `(chain, probability)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[CastOutcome], f64)> + '_ {
        self.outcomes
            .iter()
            .map(|chain| chain.as_slice())
            .zip(self.probabilities.iter().copied())
    }

    /// Sum of all probabilities.
    #[must_use]
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

impl FromIterator<(Cast, f64)> for CastSequences {
    fn from_iter<I: IntoIterator<Item = (Cast, f64)>>(iter: I) -> Self {
        let mut sequences = Self::default();
        for (chain, probability) in iter {
            sequences.push(chain, probability);
        }
        sequences
    }
}
