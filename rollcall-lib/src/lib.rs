//! Dice notation rolling with automatic roll statistics.
//!
//! ```
//! // Only the value of the first roll
//! let value = rollcall_lib::roll_simple("1d6 +2").unwrap();
//! assert!((3..=8).contains(&value));
//!
//! // The first roll and its statistics
//! let outcome = rollcall_lib::roll("4d7 -18").unwrap();
//! assert_eq!(-14, outcome.get_minimum());
//!
//! // Every roll of the query
//! let set = rollcall_lib::roll_all("1d6 +2, D12 -4, 18d100").unwrap();
//! assert_eq!(3, set.len());
//! ```

mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod solver;

use solver::Solver;

/// Roll the first dice expression of `input` and return its value
pub fn roll_simple(input: &str) -> error::Result<i64> {
    Solver::new(input).roll_simple()
}

/// Roll the first dice expression of `input`
pub fn roll(input: &str) -> error::Result<roll::Outcome> {
    Solver::new(input).roll()
}

/// Roll every dice expression of `input`, any non matching text separates them
pub fn roll_all(input: &str) -> error::Result<roll::Set> {
    Solver::new(input).roll_all()
}
