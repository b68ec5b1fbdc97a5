/// Crate Error type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The query holds no dice expression
    #[error("roll string could not be parsed")]
    Parse,
    /// A dice expression asks for fewer than two sides
    #[error("die size `{sides}` is invalid, a die must have at least 2 sides")]
    DieSize { sides: u64 },
    /// A number in the query, or a statistic derived from it, does not fit
    #[error("number `{digits}` is out of range")]
    NumericOverflow { digits: String },
}

impl Error {
    pub(crate) fn overflow(digits: impl ToString) -> Self {
        Self::NumericOverflow {
            digits: digits.to_string(),
        }
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
