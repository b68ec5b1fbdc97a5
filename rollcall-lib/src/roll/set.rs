use crate::roll::Outcome;
use std::ops::Deref;

/// Every outcome of a query, left to right, with overall statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Set {
    outcomes: Vec<Outcome>,
    minimum: i64,
    maximum: i64,
    average: f64,
}

impl Set {
    /// Aggregate `outcomes`, `None` when there is nothing to aggregate.
    ///
    /// The average is the plain mean of each outcome's average, it is not
    /// weighted by the number of dice.
    pub(crate) fn new(outcomes: Vec<Outcome>) -> Option<Self> {
        let minimum = outcomes.iter().map(Outcome::get_minimum).min()?;
        let maximum = outcomes.iter().map(Outcome::get_maximum).max()?;
        let average =
            outcomes.iter().map(Outcome::get_average).sum::<f64>() / outcomes.len() as f64;
        Some(Set {
            outcomes,
            minimum,
            maximum,
            average,
        })
    }

    pub fn get_minimum(&self) -> i64 {
        self.minimum
    }

    pub fn get_maximum(&self) -> i64 {
        self.maximum
    }

    pub fn get_average(&self) -> f64 {
        self.average
    }

    /// Take the outcomes, dropping the overall statistics
    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }
}

impl Deref for Set {
    type Target = [Outcome];

    fn deref(&self) -> &Self::Target {
        &self.outcomes
    }
}

impl std::fmt::Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.outcomes
            .iter()
            .try_for_each(|outcome| writeln!(f, "{}", outcome))?;
        write!(
            f,
            "*min* {} *max* {} *avg* {}",
            self.minimum, self.maximum, self.average
        )
    }
}
