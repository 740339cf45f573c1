//! Bulls and Cows Solver
//!
//! Solves "Bulls and Cows" over 4-digit codes with all-distinct digits by
//! repeatedly guessing a candidate and discarding everything inconsistent
//! with the observed feedback, then aggregates guess counts across whole
//! secret ranges.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Code, Feedback};
//! use bulls_cows::solver::{FirstPicker, Solver};
//!
//! let secret = Code::new(1357).unwrap();
//! let guess = Code::new(1375).unwrap();
//!
//! // Score a guess: two digits in place, four shared
//! let feedback = Feedback::score(secret, guess);
//! assert_eq!((feedback.bulls(), feedback.cows()), (2, 4));
//!
//! // Solve a secret
//! let solver = Solver::new(1234, 2000);
//! let outcome = solver.solve(Code::new(1687).unwrap(), &mut FirstPicker);
//! assert!(outcome.history.last().unwrap().feedback.is_exact());
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
