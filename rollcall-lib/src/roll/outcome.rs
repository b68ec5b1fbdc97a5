use crate::dice::Dice;
use crate::error::Result;
use crate::roll;
use itertools::Itertools;

/// Result of one dice expression, with the statistics of that expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcome {
    value: i64,
    minimum: i64,
    maximum: i64,
    average: f64,
    faces: Vec<u64>,
    source_text: String,
}

impl Outcome {
    /// Throw `dice` with `source` and compute its statistics
    pub(crate) fn throw<S: roll::Source>(
        dice: &Dice,
        source_text: &str,
        source: &mut S,
    ) -> Result<Self> {
        let minimum = dice.minimum()?;
        let maximum = dice.maximum()?;
        let faces = dice.throw(source)?;
        let value = dice.total(&faces)?;
        Ok(Outcome {
            value,
            minimum,
            maximum,
            average: dice.average(),
            faces,
            source_text: source_text.to_owned(),
        })
    }

    /// The rolled value, modifier included
    pub fn get_value(&self) -> i64 {
        self.value
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

    /// Each die face in throw order, empty for zero dice
    pub fn get_faces(&self) -> &[u64] {
        &self.faces
    }

    /// The exact slice of the query this outcome was parsed from
    pub fn as_str(&self) -> &str {
        &self.source_text
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` [{}] **{}**",
            self.source_text.trim_end(),
            self.faces.iter().format(", "),
            self.value
        )
    }
}
