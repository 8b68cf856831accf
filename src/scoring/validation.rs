use thiserror::Error;

/// Lowest score a judge may give
pub const MIN_SCORE: f64 = 1.0;
/// Highest score a judge may give
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("score {0} is outside 1-10")]
    OutOfRange(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{value} is not between 1 and {max}")]
    OutOfRange { value: usize, max: usize },
    #[error("nothing to choose from")]
    Empty,
}

/// Check a score lies within the judging range (NaN is rejected)
pub fn validate_score(score: f64) -> Result<f64, ScoreError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(ScoreError::OutOfRange(score))
    }
}

/// Parse a score typed by the user
pub fn parse_score(input: &str) -> Result<f64, ScoreError> {
    let trimmed = input.trim();
    let score: f64 = trimmed
        .parse()
        .map_err(|_| ScoreError::NotANumber(trimmed.to_string()))?;
    validate_score(score)
}

/// Parse a 1-based list number into a 0-based index into a list of `len` items
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    if len == 0 {
        return Err(SelectionError::Empty);
    }
    let trimmed = input.trim();
    let value: usize = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if value < 1 || value > len {
        return Err(SelectionError::OutOfRange { value, max: len });
    }
    Ok(value - 1)
}
