//! Bulls and Cows solving algorithm
//!
//! Candidate pool, guess selection, and the session loop that narrows the
//! pool to the secret.

mod engine;
pub mod picker;
mod pool;

pub use engine::{GuessRecord, Session, SolveOutcome, Solver};
pub use picker::{FirstPicker, Picker, RandomPicker};
pub use pool::CandidatePool;
