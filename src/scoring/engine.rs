use std::collections::HashMap;

use tracing::warn;

use crate::store::{FestivalData, ScoreEntry};

/// How many results the summary shows unless configured otherwise
pub const DEFAULT_TOP_COUNT: usize = 3;

/// Mean score of one performance
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceAverage {
    pub performance_id: usize,
    pub average: f64,
    pub count: usize,
}

/// One row of the ranked summary. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub participant_name: String,
    pub performance_title: String,
    pub average_score: f64,
    pub score_count: usize,
}

/// Average the scores of every performance that has at least one,
/// in first-scored order
pub fn average_scores(scores: &[ScoreEntry]) -> Vec<PerformanceAverage> {
    let mut order = Vec::new();
    let mut totals: HashMap<usize, (f64, usize)> = HashMap::new();

    for entry in scores {
        let total = totals.entry(entry.performance_id).or_insert_with(|| {
            order.push(entry.performance_id);
            (0.0, 0)
        });
        total.0 += entry.score;
        total.1 += 1;
    }

    order
        .into_iter()
        .filter_map(|performance_id| {
            let (sum, count) = totals.get(&performance_id)?;
            Some(PerformanceAverage {
                performance_id,
                average: sum / *count as f64,
                count: *count,
            })
        })
        .collect()
}

/// Rank scored performances by descending average and keep the best `limit`
///
/// Equal averages keep first-scored order. Scores pointing at a missing
/// performance or participant are skipped.
pub fn rank_performances(data: &FestivalData, limit: usize) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = average_scores(&data.scores)
        .into_iter()
        .filter_map(|avg| {
            let Some(performance) = data.performances.get(avg.performance_id) else {
                warn!("Skipping scores for unknown performance #{}", avg.performance_id);
                return None;
            };
            let Some(participant) = data.performer_of(performance) else {
                warn!(
                    "Skipping performance '{}': unknown participant #{}",
                    performance.title, performance.participant_id
                );
                return None;
            };
            Some(RankedResult {
                participant_name: participant.name.clone(),
                performance_title: performance.title.clone(),
                average_score: avg.average,
                score_count: avg.count,
            })
        })
        .collect();

    // sort_by is stable, which is what keeps ties in first-scored order
    ranked.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
    ranked.truncate(limit);
    ranked
}
