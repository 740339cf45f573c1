//! Bulls and cows feedback scoring
//!
//! Feedback compares a guess against a secret:
//! - bulls: digits matching in both value and position
//! - cows: digit values shared by both codes regardless of position,
//!   counted as the size of the digit-set intersection
//!
//! The cows count deliberately includes the values that also scored a bull,
//! so a full match reads (4, 4) and cows >= bulls whenever any digit
//! matches. The solved check looks at bulls alone.

use super::Code;

/// Feedback for a Bulls and Cows guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    bulls: u8,
    cows: u8,
}

impl Feedback {
    /// Full match: every digit in place
    pub const EXACT: Self = Self { bulls: 4, cows: 4 };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if either count exceeds 4
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        debug_assert!(bulls <= 4 && cows <= 4, "counts must be at most 4");
        Self { bulls, cows }
    }

    /// Count of exact positional matches
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Count of shared digit values, bulls included
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if this feedback signals a solved code (all four bulls)
    ///
    /// With all-distinct digits, four bulls implies the codes are identical.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.bulls == 4
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Feedback};
    ///
    /// let secret = Code::new(1357).unwrap();
    /// let guess = Code::new(1375).unwrap();
    /// let feedback = Feedback::score(secret, guess);
    ///
    /// // 1 and 3 are in place; all four digits are shared
    /// assert_eq!(feedback.bulls(), 2);
    /// assert_eq!(feedback.cows(), 4);
    /// ```
    #[must_use]
    pub fn score(secret: Code, guess: Code) -> Self {
        let secret_digits = secret.digits();
        let guess_digits = guess.digits();

        let bulls = secret_digits
            .iter()
            .zip(&guess_digits)
            .filter(|(s, g)| s == g)
            .count();

        let cows = secret_digits
            .iter()
            .filter(|&&digit| guess.has_digit(digit))
            .count();

        // Casts are safe: counts over 4 positions
        Self {
            bulls: bulls as u8,
            cows: cows as u8,
        }
    }

    /// Parse feedback from user input like "2 1" or "2,1"
    ///
    /// Expects the bulls count first, then the cows count, each 0-4.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Feedback;
    ///
    /// let feedback = Feedback::from_str("1 3").unwrap();
    /// assert_eq!(feedback.bulls(), 1);
    /// assert_eq!(feedback.cows(), 3);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());

        let bulls: u8 = parts.next()?.parse().ok()?;
        let cows: u8 = parts.next()?.parse().ok()?;

        if parts.next().is_some() || bulls > 4 || cows > 4 {
            return None;
        }

        Some(Self { bulls, cows })
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback: {s}"))
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bulls, {} cows", self.bulls, self.cows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: u32) -> Code {
        Code::new(value).unwrap()
    }

    #[test]
    fn exact_constant() {
        assert_eq!(Feedback::EXACT.bulls(), 4);
        assert_eq!(Feedback::EXACT.cows(), 4);
        assert!(Feedback::EXACT.is_exact());
    }

    #[test]
    fn score_self_is_exact() {
        for value in [1234, 9876, 1023, 5678] {
            let c = code(value);
            assert_eq!(Feedback::score(c, c), Feedback::EXACT);
        }
    }

    #[test]
    fn score_disjoint_digits() {
        let feedback = Feedback::score(code(1234), code(5678));
        assert_eq!(feedback.bulls(), 0);
        assert_eq!(feedback.cows(), 0);
        assert!(!feedback.is_exact());
    }

    #[test]
    fn score_transposed_tail() {
        // 1357 vs 1375: positions 0 and 1 agree, all digits shared
        let feedback = Feedback::score(code(1357), code(1375));
        assert_eq!(feedback.bulls(), 2);
        assert_eq!(feedback.cows(), 4);
    }

    #[test]
    fn score_counts_shared_digits_regardless_of_position() {
        // Same digit set, fully scrambled
        let feedback = Feedback::score(code(1234), code(4321));
        assert_eq!(feedback.bulls(), 0);
        assert_eq!(feedback.cows(), 4);
    }

    #[test]
    fn cows_include_bull_positions() {
        // 5 is a bull and still counts toward the intersection
        let feedback = Feedback::score(code(5678), code(5012));
        assert_eq!(feedback.bulls(), 1);
        assert_eq!(feedback.cows(), 1);
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [(1234, 5678), (1357, 1375), (9876, 8976), (1024, 4201)];
        for (a, b) in pairs {
            assert_eq!(Feedback::score(code(a), code(b)), Feedback::score(code(b), code(a)));
        }
    }

    #[test]
    fn four_bulls_only_for_identical_codes() {
        let codes: Vec<Code> = (1234..=1330).filter_map(|n| Code::new(n).ok()).collect();
        for &a in &codes {
            for &b in &codes {
                let feedback = Feedback::score(a, b);
                assert_eq!(feedback.is_exact(), a == b, "codes {a} vs {b}");
            }
        }
    }

    #[test]
    fn cows_never_below_bulls() {
        let codes: Vec<Code> = (1234..=1330).filter_map(|n| Code::new(n).ok()).collect();
        for &a in &codes {
            for &b in &codes {
                let feedback = Feedback::score(a, b);
                assert!(feedback.cows() >= feedback.bulls(), "codes {a} vs {b}");
            }
        }
    }

    #[test]
    fn from_str_valid() {
        assert_eq!(Feedback::from_str("2 1"), Some(Feedback::new(2, 1)));
        assert_eq!(Feedback::from_str("2,1"), Some(Feedback::new(2, 1)));
        assert_eq!(Feedback::from_str("  0   4 "), Some(Feedback::new(0, 4)));
        assert_eq!(Feedback::from_str("4 4"), Some(Feedback::EXACT));
    }

    #[test]
    fn from_str_invalid() {
        assert!(Feedback::from_str("").is_none());
        assert!(Feedback::from_str("2").is_none()); // Missing cows
        assert!(Feedback::from_str("2 1 0").is_none()); // Too many parts
        assert!(Feedback::from_str("5 0").is_none()); // Out of range
        assert!(Feedback::from_str("two one").is_none());
    }

    #[test]
    fn display_renders_counts() {
        assert_eq!(format!("{}", Feedback::new(2, 3)), "2 bulls, 3 cows");
        assert_eq!(format!("{}", Feedback::EXACT), "4 bulls, 4 cows");
    }
}
