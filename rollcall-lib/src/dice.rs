use crate::error::Error;
use crate::error::Result;
use crate::parser::Rule;
use crate::roll;
use pest::iterators::Pair;

/// Fewest sides a die can have
pub(crate) const MIN_SIDES: u64 = 2;

/// One dice expression: `amount` dice of `sides` faces plus a flat modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dice {
    pub amount: u64,
    pub sides: u64,
    pub modifier: i64,
}

impl Dice {
    /// Build from a `dice` pair.
    ///
    /// Fields are read in order: amount, sides (checked against
    /// [`MIN_SIDES`]), then modifier. The first failure wins.
    pub fn from_pair(pair: Pair<Rule>) -> Result<Self> {
        let mut amount = 1;
        let mut sides = None;
        let mut modifier = 0;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::count => {
                    if !inner.as_str().is_empty() {
                        amount = parse_digits::<u64>(inner.as_str())?;
                    }
                }
                Rule::sides => {
                    let value = parse_digits::<u64>(inner.as_str())?;
                    if value < MIN_SIDES {
                        return Err(Error::DieSize { sides: value });
                    }
                    sides = Some(value);
                }
                Rule::modifier => modifier = parse_digits::<i64>(inner.as_str())?,
                _ => unreachable!("{:?}", inner),
            }
        }
        let sides = sides.ok_or(Error::Parse)?;
        Ok(Dice {
            amount,
            sides,
            modifier,
        })
    }

    pub fn minimum(&self) -> Result<i64> {
        self.offset(self.amount_signed()?)
    }

    pub fn maximum(&self) -> Result<i64> {
        if self.amount == 0 {
            return self.offset(0);
        }
        let sides = i64::try_from(self.sides).map_err(|_| Error::overflow(self.sides))?;
        let top = self
            .amount_signed()?
            .checked_mul(sides)
            .ok_or_else(|| Error::overflow(format!("{}d{}", self.amount, self.sides)))?;
        self.offset(top)
    }

    pub fn average(&self) -> f64 {
        if self.amount == 0 {
            return self.modifier as f64;
        }
        self.amount as f64 * ((self.sides as f64 + 1.0) / 2.0) + self.modifier as f64
    }

    /// Throw every die, in order
    ///
    /// Room for every face is reserved up front, an amount that cannot be
    /// held in memory fails before anything is thrown.
    pub fn throw<S: roll::Source>(&self, source: &mut S) -> Result<Vec<u64>> {
        let amount = usize::try_from(self.amount).map_err(|_| Error::overflow(self.amount))?;
        let mut faces = Vec::new();
        faces
            .try_reserve_exact(amount)
            .map_err(|_| Error::overflow(self.amount))?;
        faces.extend((0..amount).map(|_| source.throw(self.sides)));
        Ok(faces)
    }

    /// Sum of `faces` plus the modifier
    pub fn total(&self, faces: &[u64]) -> Result<i64> {
        let sum = faces.iter().try_fold(0i64, |acc, face| {
            i64::try_from(*face)
                .ok()
                .and_then(|face| acc.checked_add(face))
        });
        let sum = sum.ok_or_else(|| Error::overflow(format!("{}d{}", self.amount, self.sides)))?;
        self.offset(sum)
    }

    fn amount_signed(&self) -> Result<i64> {
        i64::try_from(self.amount).map_err(|_| Error::overflow(self.amount))
    }

    fn offset(&self, value: i64) -> Result<i64> {
        value
            .checked_add(self.modifier)
            .ok_or_else(|| Error::overflow(format!("{}{:+}", value, self.modifier)))
    }
}

fn parse_digits<T: std::str::FromStr>(digits: &str) -> Result<T> {
    digits.parse::<T>().map_err(|_| Error::overflow(digits))
}
