pub mod engine;
pub mod validation;

pub use engine::{
    average_scores, rank_performances, PerformanceAverage, RankedResult, DEFAULT_TOP_COUNT,
};
pub use validation::{parse_score, parse_selection, validate_score, ScoreError, SelectionError};
