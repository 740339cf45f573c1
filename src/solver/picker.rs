//! Guess selection
//!
//! Defines the Picker trait and concrete implementations. The game fixes the
//! selection rule to a uniform random draw from the remaining candidates;
//! the trait exists so tests can substitute a deterministic picker.

use crate::core::Code;

/// A capability for choosing the next guess from the remaining candidates
pub trait Picker {
    /// Select a guess from the pool
    ///
    /// Returns `None` if the pool is empty.
    fn pick<'a>(&mut self, pool: &'a [Code]) -> Option<&'a Code>;
}

/// Uniform random selection from the remaining candidates
///
/// The production picker. Draws from the thread-local generator, so two runs
/// on the same secret may take different guess counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick<'a>(&mut self, pool: &'a [Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        pool.choose(&mut rand::rng())
    }
}

/// Deterministic selection of the first remaining candidate
///
/// Test stub: makes solver runs reproducible without touching the filtering
/// logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick<'a>(&mut self, pool: &'a [Code]) -> Option<&'a Code> {
        pool.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    fn pool() -> Vec<Code> {
        [1234, 1567, 1890, 2345]
            .into_iter()
            .map(|n| Code::new(n).unwrap())
            .collect()
    }

    #[test]
    fn random_picker_returns_pool_member() {
        let codes = pool();
        let mut picker = RandomPicker;

        for _ in 0..20 {
            let picked = picker.pick(&codes).unwrap();
            assert!(codes.contains(picked));
        }
    }

    #[test]
    fn random_picker_empty_pool() {
        let mut picker = RandomPicker;
        assert!(picker.pick(&[]).is_none());
    }

    #[test]
    fn first_picker_is_deterministic() {
        let codes = pool();
        let mut picker = FirstPicker;

        assert_eq!(picker.pick(&codes), Some(&codes[0]));
        assert_eq!(picker.pick(&codes), Some(&codes[0]));
    }

    #[test]
    fn first_picker_empty_pool() {
        let mut picker = FirstPicker;
        assert!(picker.pick(&[]).is_none());
    }
}
