//! Solving session driver
//!
//! A session walks a single secret from the full candidate pool to a solved
//! state: pick a guess, score it, filter the pool, repeat until four bulls.

use super::picker::Picker;
use super::pool::CandidatePool;
use crate::core::{Code, Feedback};

/// One recorded turn of a solving session
#[derive(Debug, Clone, Copy)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Outcome of a completed session
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub secret: Code,
    pub history: Vec<GuessRecord>,
}

impl SolveOutcome {
    /// Number of guesses the session needed
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.history.len()
    }
}

/// Bulls and Cows solver over a fixed secret range
///
/// Holds the range bounds; every session starts from a fresh pool generated
/// from the same bounds.
pub struct Solver {
    low: u32,
    high: u32,
}

impl Solver {
    /// Create a solver for secrets in `[low, high]`
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Start a session for one secret
    #[must_use]
    pub fn session(&self, secret: Code) -> Session {
        Session {
            secret,
            pool: CandidatePool::generate(self.low, self.high),
            history: Vec::new(),
            solved: false,
        }
    }

    /// Drive a session to completion and return its outcome
    ///
    /// Terminates for any secret inside the range: the pool is finite,
    /// always contains the secret, and strictly shrinks on every
    /// non-matching guess.
    ///
    /// # Panics
    /// Panics if the candidate pool empties before the secret is found,
    /// which cannot happen for a secret drawn from the range.
    pub fn solve<P: Picker>(&self, secret: Code, picker: &mut P) -> SolveOutcome {
        let mut session = self.session(secret);
        while !session.is_solved() {
            session.advance(picker);
        }
        session.into_outcome()
    }
}

/// An in-progress solve for a single secret
///
/// Two states: searching (initial) and solved (terminal, reached when a
/// guess scores four bulls).
pub struct Session {
    secret: Code,
    pool: CandidatePool,
    history: Vec<GuessRecord>,
    solved: bool,
}

impl Session {
    /// Make one guess and apply its feedback
    ///
    /// Picks a candidate, scores it against the secret, records the turn,
    /// and retains only the candidates consistent with the observation. A
    /// guess scoring four bulls moves the session to the solved state.
    ///
    /// # Panics
    /// Panics if the pool is empty, an internal invariant violation.
    pub fn advance<P: Picker>(&mut self, picker: &mut P) -> GuessRecord {
        let candidates_before = self.pool.len();

        let guess = *picker
            .pick(self.pool.codes())
            .expect("candidate pool exhausted with the secret unsolved");

        let feedback = Feedback::score(self.secret, guess);
        if feedback.is_exact() {
            self.solved = true;
        }

        // The guess itself is only consistent with exact feedback, so a
        // missed guess always leaves the pool strictly smaller.
        self.pool.retain_consistent(guess, feedback);

        let record = GuessRecord {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.pool.len(),
        };
        self.history.push(record);
        record
    }

    /// Check whether the secret has been found
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Number of guesses made so far
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.history.len()
    }

    /// Number of candidates still in contention
    #[inline]
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.pool.len()
    }

    /// Check if a code is still in contention
    #[must_use]
    pub fn still_possible(&self, code: Code) -> bool {
        self.pool.contains(code)
    }

    /// Finish the session, keeping the recorded turns
    #[must_use]
    pub fn into_outcome(self) -> SolveOutcome {
        SolveOutcome {
            secret: self.secret,
            history: self.history,
        }
    }
}
