//! Candidate pool management
//!
//! A pool holds the admissible codes still consistent with every piece of
//! feedback observed in one solving session. It only ever shrinks.

use crate::core::{Code, Feedback};

/// The working set of candidate codes for one session
#[derive(Debug, Clone)]
pub struct CandidatePool {
    codes: Vec<Code>,
}

impl CandidatePool {
    /// Generate the admissible codes in `[low, high]`, ascending
    ///
    /// Values failing validation (out of the 4-digit range or repeating a
    /// digit) are skipped. An inverted range yields an empty pool.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::solver::CandidatePool;
    ///
    /// let pool = CandidatePool::generate(1234, 1240);
    /// assert_eq!(pool.len(), 7);
    /// ```
    #[must_use]
    pub fn generate(low: u32, high: u32) -> Self {
        let codes = (low..=high).filter_map(|n| Code::new(n).ok()).collect();
        Self { codes }
    }

    /// Keep only the candidates consistent with an observation
    ///
    /// A candidate survives when scoring it against the guess reproduces the
    /// observed feedback exactly, bulls and cows both. The true secret always
    /// survives its own session's filters.
    pub fn retain_consistent(&mut self, guess: Code, observed: Feedback) {
        self.codes
            .retain(|&candidate| Feedback::score(candidate, guess) == observed);
    }

    /// Remaining candidates, ascending
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Check if a code is still in contention
    #[must_use]
    pub fn contains(&self, code: Code) -> bool {
        self.codes.binary_search(&code).is_ok()
    }

    /// Byte footprint of the candidate buffer
    #[must_use]
    pub fn footprint_bytes(&self) -> usize {
        self.codes.len() * std::mem::size_of::<Code>()
    }
}
