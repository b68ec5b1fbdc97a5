pub mod outcome;
pub mod set;

pub use outcome::Outcome;
pub use set::Set;

/// Interface for rolling dices
///
/// `throw` must return a value in `1..=sides`; `sides` is always at least 2.
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}
