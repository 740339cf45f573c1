//! Range sweep - solve every admissible secret in a range
//!
//! Runs one independent session per secret and aggregates guess-count
//! statistics.

use crate::core::Code;
use crate::solver::{CandidatePool, Picker, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from sweeping a secret range
#[derive(Debug)]
pub struct SweepStatistics {
    pub secrets: usize,
    pub tries_sum: usize,
    pub tries_min: usize,
    pub tries_max: usize,
    pub distribution: FxHashMap<usize, usize>,
    /// Accumulated per-session solving time
    pub solve_time: Duration,
    /// Wall time for the whole sweep, pool generation included
    pub total_time: Duration,
    /// Byte footprint of one session's candidate pool
    pub pool_bytes: usize,
    pub easiest: Option<(Code, usize)>,
    pub hardest: Option<(Code, usize)>,
}

impl SweepStatistics {
    /// Mean guess count, `None` when the range held no admissible secrets
    #[must_use]
    pub fn average_tries(&self) -> Option<f64> {
        (self.secrets > 0).then(|| self.tries_sum as f64 / self.secrets as f64)
    }

    /// Solving throughput in secrets per second
    #[must_use]
    pub fn secrets_per_second(&self) -> f64 {
        let seconds = self.solve_time.as_secs_f64();
        if seconds > 0.0 {
            self.secrets as f64 / seconds
        } else {
            0.0
        }
    }
}

/// Solve every admissible secret in `[low, high]` and fold the statistics
///
/// The admissible list is computed once; each secret then gets its own
/// session with a fresh pool generated from the same bounds. Secrets are
/// processed in ascending order.
pub fn run_sweep<P: Picker>(low: u32, high: u32, picker: &mut P) -> SweepStatistics {
    let total_start = Instant::now();

    let secrets = CandidatePool::generate(low, high);
    let solver = Solver::new(low, high);

    println!("Sweeping {} secrets in [{low}, {high}]...", secrets.len());

    // Progress bar
    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut tries_sum = 0;
    let mut tries_min = usize::MAX;
    let mut tries_max = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solve_time = Duration::ZERO;
    let mut easiest: Option<(Code, usize)> = None;
    let mut hardest: Option<(Code, usize)> = None;

    for (idx, &secret) in secrets.codes().iter().enumerate() {
        let session_start = Instant::now();
        let outcome = solver.solve(secret, picker);
        solve_time += session_start.elapsed();

        let tries = outcome.tries();
        tries_sum += tries;
        tries_min = tries_min.min(tries);
        tries_max = tries_max.max(tries);
        *distribution.entry(tries).or_insert(0) += 1;

        if easiest.is_none_or(|(_, best)| tries < best) {
            easiest = Some((secret, tries));
        }
        if hardest.is_none_or(|(_, worst)| tries > worst) {
            hardest = Some((secret, tries));
        }

        // Update progress
        if idx % 64 == 0 && idx > 0 {
            let avg = tries_sum as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let secret_count = secrets.len();
    SweepStatistics {
        secrets: secret_count,
        tries_sum,
        tries_min: if secret_count > 0 { tries_min } else { 0 },
        tries_max,
        distribution,
        solve_time,
        total_time: total_start.elapsed(),
        pool_bytes: secrets.footprint_bytes(),
        easiest,
        hardest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FirstPicker;

    #[test]
    fn sweep_single_secret_range() {
        let stats = run_sweep(1234, 1234, &mut FirstPicker);

        assert_eq!(stats.secrets, 1);
        assert_eq!(stats.tries_sum, 1);
        assert_eq!(stats.tries_min, 1);
        assert_eq!(stats.tries_max, 1);
        assert_eq!(stats.average_tries(), Some(1.0));
        assert_eq!(stats.distribution.get(&1), Some(&1));
    }

    #[test]
    fn sweep_counts_every_admissible_secret() {
        let stats = run_sweep(1234, 1300, &mut FirstPicker);
        let admissible = CandidatePool::generate(1234, 1300).len();

        assert_eq!(stats.secrets, admissible);
        assert!(stats.tries_sum >= stats.secrets);
    }

    #[test]
    fn sweep_average_between_min_and_max() {
        let stats = run_sweep(1234, 1300, &mut FirstPicker);
        let average = stats.average_tries().unwrap();

        assert!(stats.tries_min as f64 <= average);
        assert!(average <= stats.tries_max as f64);
    }

    #[test]
    fn sweep_distribution_sums_correctly() {
        let stats = run_sweep(1234, 1300, &mut FirstPicker);

        let count: usize = stats.distribution.values().sum();
        assert_eq!(count, stats.secrets);

        let weighted: usize = stats
            .distribution
            .iter()
            .map(|(tries, secrets)| tries * secrets)
            .sum();
        assert_eq!(weighted, stats.tries_sum);
    }

    #[test]
    fn sweep_tracks_extremes() {
        let stats = run_sweep(1234, 1300, &mut FirstPicker);

        let (_, best) = stats.easiest.unwrap();
        let (_, worst) = stats.hardest.unwrap();
        assert_eq!(best, stats.tries_min);
        assert_eq!(worst, stats.tries_max);
    }

    #[test]
    fn sweep_empty_range() {
        let stats = run_sweep(2000, 1000, &mut FirstPicker);

        assert_eq!(stats.secrets, 0);
        assert_eq!(stats.tries_sum, 0);
        assert_eq!(stats.tries_min, 0);
        assert_eq!(stats.tries_max, 0);
        assert_eq!(stats.average_tries(), None);
        assert!(stats.easiest.is_none());
        assert!(stats.hardest.is_none());
    }

    #[test]
    fn sweep_range_without_admissible_secrets() {
        // 1110..=1119 all repeat a digit
        let stats = run_sweep(1110, 1119, &mut FirstPicker);
        assert_eq!(stats.secrets, 0);
        assert_eq!(stats.average_tries(), None);
    }

    #[test]
    fn sweep_pool_footprint_matches_secret_count() {
        let stats = run_sweep(1234, 1300, &mut FirstPicker);
        assert_eq!(
            stats.pool_bytes,
            stats.secrets * std::mem::size_of::<Code>()
        );
    }
}
