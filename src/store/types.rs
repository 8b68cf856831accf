use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::validation::{validate_score, ScoreError};

/// A person registered to perform. Identified by position in `FestivalData::participants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub group: String, // course / faculty
}

/// A named act tied to one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub participant_id: usize,
    pub title: String,
}

/// One judge's rating of one performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub performance_id: usize,
    pub score: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("no participant #{0}")]
    UnknownParticipant(usize),
    #[error("no performance #{0}")]
    UnknownPerformance(usize),
    #[error(transparent)]
    InvalidScore(#[from] ScoreError),
}

/// Everything the festival records. Append-only, so indexes stay valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalData {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub performances: Vec<Performance>,
    #[serde(default)]
    pub scores: Vec<ScoreEntry>,
}

impl FestivalData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant and return its index
    pub fn add_participant(&mut self, name: String, group: String) -> usize {
        self.participants.push(Participant { name, group });
        self.participants.len() - 1
    }

    /// Add a performance for an existing participant and return its index
    pub fn add_performance(
        &mut self,
        participant_id: usize,
        title: String,
    ) -> Result<usize, StoreError> {
        if participant_id >= self.participants.len() {
            return Err(StoreError::UnknownParticipant(participant_id));
        }
        self.performances.push(Performance {
            participant_id,
            title,
        });
        Ok(self.performances.len() - 1)
    }

    /// Record a judge's score for an existing performance
    ///
    /// The score must lie in `1..=10`; the entry index is returned.
    pub fn add_score(&mut self, performance_id: usize, score: f64) -> Result<usize, StoreError> {
        if performance_id >= self.performances.len() {
            return Err(StoreError::UnknownPerformance(performance_id));
        }
        let score = validate_score(score)?;
        self.scores.push(ScoreEntry {
            performance_id,
            score,
        });
        Ok(self.scores.len() - 1)
    }

    /// The participant a performance belongs to, if both indexes resolve
    pub fn performer_of(&self, performance: &Performance) -> Option<&Participant> {
        self.participants.get(performance.participant_id)
    }

    /// Number of scores recorded for a performance
    pub fn score_count(&self, performance_id: usize) -> usize {
        self.scores
            .iter()
            .filter(|s| s.performance_id == performance_id)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.performances.is_empty() && self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> FestivalData {
        let mut data = FestivalData::new();
        data.add_participant("Anna Petrova".to_string(), "2nd year, Physics".to_string());
        data.add_participant("Ivan Sidorov".to_string(), "1st year, History".to_string());
        data
    }

    #[test]
    fn test_new_data_empty() {
        let data = FestivalData::new();
        assert!(data.is_empty());
        assert!(data.participants.is_empty());
        assert!(data.performances.is_empty());
        assert!(data.scores.is_empty());
    }

    #[test]
    fn test_add_participant_returns_index() {
        let mut data = FestivalData::new();
        assert_eq!(data.add_participant("A".to_string(), "G1".to_string()), 0);
        assert_eq!(data.add_participant("B".to_string(), "G2".to_string()), 1);
        assert_eq!(data.participants[1].name, "B");
        assert_eq!(data.participants[1].group, "G2");
    }

    #[test]
    fn test_add_performance_valid_participant() {
        let mut data = sample_data();
        let idx = data.add_performance(1, "Folk Dance".to_string()).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(data.performances[0].participant_id, 1);
        assert_eq!(
            data.performer_of(&data.performances[0]).unwrap().name,
            "Ivan Sidorov"
        );
    }

    #[test]
    fn test_add_performance_unknown_participant() {
        let mut data = sample_data();
        let result = data.add_performance(2, "Ghost Act".to_string());
        assert_eq!(result, Err(StoreError::UnknownParticipant(2)));
        assert!(data.performances.is_empty());
    }

    #[test]
    fn test_add_score_valid() {
        let mut data = sample_data();
        data.add_performance(0, "Song".to_string()).unwrap();
        assert_eq!(data.add_score(0, 8.0).unwrap(), 0);
        assert_eq!(data.add_score(0, 9.5).unwrap(), 1);
        assert_eq!(data.score_count(0), 2);
    }

    #[test]
    fn test_add_score_unknown_performance() {
        let mut data = sample_data();
        assert_eq!(
            data.add_score(0, 5.0),
            Err(StoreError::UnknownPerformance(0))
        );
    }

    #[test]
    fn test_add_score_out_of_range() {
        let mut data = sample_data();
        data.add_performance(0, "Song".to_string()).unwrap();
        assert!(matches!(
            data.add_score(0, 11.0),
            Err(StoreError::InvalidScore(ScoreError::OutOfRange(_)))
        ));
        assert!(data.add_score(0, 0.5).is_err());
        assert!(data.scores.is_empty());
    }

    #[test]
    fn test_score_count_ignores_other_performances() {
        let mut data = sample_data();
        data.add_performance(0, "Song".to_string()).unwrap();
        data.add_performance(1, "Dance".to_string()).unwrap();
        data.add_score(0, 7.0).unwrap();
        data.add_score(1, 6.0).unwrap();
        data.add_score(1, 9.0).unwrap();
        assert_eq!(data.score_count(0), 1);
        assert_eq!(data.score_count(1), 2);
        assert_eq!(data.score_count(5), 0);
    }
}
