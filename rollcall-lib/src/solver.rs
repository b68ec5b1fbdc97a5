use crate::error::Error;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::evaluator::Matches;
use crate::parser;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent a solver and holds the query string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solver(String);

impl Solver {
    pub fn new(input: &str) -> Self {
        Solver(input.to_owned())
    }

    /// Value of the first dice expression, using the default Rng source
    pub fn roll_simple(&self) -> Result<i64> {
        self.roll_simple_with(&mut rand::thread_rng())
    }

    pub fn roll_simple_with<R: Rng>(&self, generator: &mut R) -> Result<i64> {
        self.roll_simple_with_source(&mut RandomSource { generator })
    }

    pub fn roll_simple_with_source<S: roll::Source>(&self, source: &mut S) -> Result<i64> {
        self.roll_with_source(source)
            .map(|outcome| outcome.get_value())
    }

    /// First dice expression with its statistics, using the default Rng source
    pub fn roll(&self) -> Result<roll::Outcome> {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> Result<roll::Outcome> {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Later expressions in the query are neither rolled nor validated
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Outcome> {
        Evaluator::eval(&self.0, Matches::First, source)?
            .into_iter()
            .next()
            .ok_or(Error::Parse)
    }

    /// Every dice expression, using the default Rng source
    pub fn roll_all(&self) -> Result<roll::Set> {
        self.roll_all_with(&mut rand::thread_rng())
    }

    pub fn roll_all_with<R: Rng>(&self, generator: &mut R) -> Result<roll::Set> {
        self.roll_all_with_source(&mut RandomSource { generator })
    }

    pub fn roll_all_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Set> {
        let outcomes = Evaluator::eval(&self.0, Matches::All, source)?;
        roll::Set::new(outcomes).ok_or(Error::Parse)
    }

    /// Return an iterator on the dices in the roll expression, nothing is rolled
    pub fn dices(&self) -> Result<impl Iterator<Item = &str>> {
        let pairs = parser::Parser::parse_command(&self.0)?;
        Ok(parser::Parser::extract_dice(pairs).map(|pair| pair.as_str()))
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Solver {
    fn from(value: &str) -> Self {
        Solver::new(value)
    }
}
