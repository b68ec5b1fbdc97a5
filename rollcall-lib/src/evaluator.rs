use crate::dice::Dice;
use crate::error::Error;
use crate::error::Result;
use crate::parser::Parser;
use crate::roll;
use crate::roll::Outcome;

/// How many dice expressions of a query get evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matches {
    First,
    All,
}

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Evaluate the dice expressions of `input`, left to right.
    ///
    /// Fails on the first invalid expression, nothing is returned for the
    /// ones evaluated before it. At least one outcome is returned on success.
    pub(crate) fn eval<S: roll::Source>(
        input: &str,
        matches: Matches,
        source: &mut S,
    ) -> Result<Vec<Outcome>> {
        let pairs = Parser::parse_command(input)?;
        let take = match matches {
            Matches::First => 1,
            Matches::All => usize::MAX,
        };
        let outcomes = Parser::extract_dice(pairs)
            .take(take)
            .map(|pair| {
                let text = pair.as_str();
                let dice = Dice::from_pair(pair)?;
                let outcome = Outcome::throw(&dice, text, source)?;
                tracing::trace!(
                    "`{}` rolled {} in [{}, {}]",
                    text,
                    outcome.get_value(),
                    outcome.get_minimum(),
                    outcome.get_maximum()
                );
                Ok(outcome)
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|error| {
                tracing::debug!("rejected `{}`: {}", input, error);
                error
            })?;
        if outcomes.is_empty() {
            tracing::debug!("no dice expression in `{}`", input);
            return Err(Error::Parse);
        }
        tracing::debug!("evaluated {} dice expression(s) in `{}`", outcomes.len(), input);
        Ok(outcomes)
    }
}
