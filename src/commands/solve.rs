//! Secret solving command
//!
//! Solves a specific secret and returns the guess-by-guess trace.

use crate::core::Code;
use crate::solver::{GuessRecord, Picker, Solver};

/// Result of solving one secret
pub struct SolveReport {
    pub secret: Code,
    pub steps: Vec<GuessRecord>,
}

impl SolveReport {
    /// Number of guesses the solve needed
    #[must_use]
    pub fn tries(&self) -> usize {
        self.steps.len()
    }
}

/// Solve a specific secret drawn from `[low, high]`
///
/// # Errors
///
/// Returns an error if the secret is not an admissible code or lies outside
/// the configured range.
pub fn solve_secret<P: Picker>(
    secret: u32,
    low: u32,
    high: u32,
    picker: &mut P,
) -> Result<SolveReport, String> {
    let secret = Code::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    if !(low..=high).contains(&u32::from(secret.value())) {
        return Err(format!("Secret {secret} is outside the range [{low}, {high}]"));
    }

    let solver = Solver::new(low, high);
    let outcome = solver.solve(secret, picker);

    Ok(SolveReport {
        secret: outcome.secret,
        steps: outcome.history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FirstPicker;

    #[test]
    fn solve_secret_succeeds() {
        let report = solve_secret(1687, 1234, 2000, &mut FirstPicker).unwrap();

        assert_eq!(report.secret, Code::new(1687).unwrap());
        assert!(report.tries() >= 1);
        assert!(report.steps.last().unwrap().feedback.is_exact());
    }

    #[test]
    fn solve_secret_records_narrowing() {
        let report = solve_secret(1687, 1234, 2000, &mut FirstPicker).unwrap();

        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_secret_rejects_inadmissible_value() {
        assert!(solve_secret(1123, 1234, 9876, &mut FirstPicker).is_err());
        assert!(solve_secret(999, 1234, 9876, &mut FirstPicker).is_err());
    }

    #[test]
    fn solve_secret_rejects_value_outside_range() {
        let result = solve_secret(3456, 1234, 2000, &mut FirstPicker);
        assert!(result.is_err());
    }
}
