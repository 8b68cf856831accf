use std::collections::HashMap;
use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{average_scores, PerformanceAverage, RankedResult};
use crate::store::{FestivalData, Participant};

/// Format the participant picker: "N. Name (Group)"
pub fn format_participant_list(participants: &[Participant], use_colors: bool) -> String {
    if participants.is_empty() {
        return "No participants yet.".to_string();
    }

    participants
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            if use_colors {
                format!("{}. {} ({})", idx + 1, p.name.bold(), p.group.cyan())
            } else {
                format!("{}. {} ({})", idx + 1, p.name, p.group)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the performance picker: "N. Title (Participant)"
pub fn format_performance_list(data: &FestivalData, use_colors: bool) -> String {
    if data.performances.is_empty() {
        return "No performances yet.".to_string();
    }

    data.performances
        .iter()
        .enumerate()
        .map(|(idx, perf)| {
            let performer = performer_name(data, perf.participant_id);
            if use_colors {
                format!("{}. {} ({})", idx + 1, perf.title.bold(), performer.yellow())
            } else {
                format!("{}. {} ({})", idx + 1, perf.title, performer)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn performer_name(data: &FestivalData, participant_id: usize) -> &str {
    data.participants
        .get(participant_id)
        .map(|p| p.name.as_str())
        .unwrap_or("unknown")
}

/// Format an average with two decimals (8.5 -> "8.50")
pub fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}

/// Format the ranked summary under a "Top-N performances:" heading
pub fn format_results(results: &[RankedResult], top_count: usize, use_colors: bool) -> String {
    if results.is_empty() {
        return "No scores recorded yet.".to_string();
    }

    let heading = format!("Top-{} performances:", top_count);
    let mut lines = vec![if use_colors {
        heading.bold().to_string()
    } else {
        heading
    }];

    lines.extend(results.iter().enumerate().map(|(idx, r)| {
        let average = format_average(r.average_score);
        if use_colors {
            format!(
                "{}. {} ({}) - {} points",
                idx + 1,
                r.performance_title.bold(),
                r.participant_name.yellow(),
                average.green()
            )
        } else {
            format!(
                "{}. {} ({}) - {} points",
                idx + 1,
                r.performance_title,
                r.participant_name,
                average
            )
        }
    }));

    lines.join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format everything recorded: participants first, then every performance
/// with its score count and average
pub fn format_overview(data: &FestivalData, use_colors: bool) -> String {
    if data.participants.is_empty() && data.performances.is_empty() {
        return "Nothing recorded yet.".to_string();
    }

    format!(
        "Participants:\n{}\n\nPerformances:\n{}",
        format_participant_list(&data.participants, use_colors),
        format_performance_rows(data, use_colors)
    )
}

/// Columns: index, score count, average (or "-"), title, performer
fn format_performance_rows(data: &FestivalData, use_colors: bool) -> String {
    if data.performances.is_empty() {
        return "No performances yet.".to_string();
    }

    let averages: HashMap<usize, PerformanceAverage> = average_scores(&data.scores)
        .into_iter()
        .map(|avg| (avg.performance_id, avg))
        .collect();
    let term_width = get_terminal_width();
    let separator = "  ";

    data.performances
        .iter()
        .enumerate()
        .map(|(idx, perf)| {
            let index_str = format!("{:>2}.", idx + 1);
            let (count_str, average_str) = match averages.get(&idx) {
                Some(avg) => (
                    format!("{:>3}x", avg.count),
                    format!("{:>6}", format_average(avg.average)),
                ),
                None => (format!("{:>3}x", 0), format!("{:>6}", "-")),
            };
            let performer = performer_name(data, perf.participant_id);

            let fixed_width = index_str.len()
                + 1
                + count_str.len()
                + average_str.len()
                + separator.len() * 3
                + performer.chars().count();
            let title = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_title(&perf.title, width - fixed_width)
                }
                Some(_) => truncate_title(&perf.title, 20),
                None => perf.title.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    count_str,
                    separator,
                    average_str.bold(),
                    separator,
                    title,
                    separator,
                    performer.yellow()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, count_str, separator, average_str, separator, title, separator, performer
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> FestivalData {
        let mut data = FestivalData::new();
        data.add_participant("Anna".to_string(), "2nd year".to_string());
        data.add_participant("Boris".to_string(), "Music dept".to_string());
        data.add_performance(0, "Song".to_string()).unwrap();
        data.add_performance(1, "Dance".to_string()).unwrap();
        data
    }

    fn ranked(title: &str, name: &str, average: f64) -> RankedResult {
        RankedResult {
            participant_name: name.to_string(),
            performance_title: title.to_string(),
            average_score: average,
            score_count: 1,
        }
    }

    #[test]
    fn test_format_participant_list() {
        let data = sample_data();
        let result = format_participant_list(&data.participants, false);
        assert_eq!(result, "1. Anna (2nd year)\n2. Boris (Music dept)");
    }

    #[test]
    fn test_format_participant_list_empty() {
        assert_eq!(format_participant_list(&[], false), "No participants yet.");
    }

    #[test]
    fn test_format_performance_list() {
        let data = sample_data();
        let result = format_performance_list(&data, false);
        assert_eq!(result, "1. Song (Anna)\n2. Dance (Boris)");
    }

    #[test]
    fn test_format_average_two_decimals() {
        assert_eq!(format_average(8.5), "8.50");
        assert_eq!(format_average(7.0), "7.00");
        assert_eq!(format_average(26.0 / 3.0), "8.67");
    }

    #[test]
    fn test_format_results_empty() {
        assert_eq!(format_results(&[], 3, false), "No scores recorded yet.");
    }

    #[test]
    fn test_format_results_lines() {
        let results = vec![ranked("Song", "Anna", 8.5), ranked("Dance", "Boris", 7.0)];
        let output = format_results(&results, 3, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Top-3 performances:");
        assert_eq!(lines[1], "1. Song (Anna) - 8.50 points");
        assert_eq!(lines[2], "2. Dance (Boris) - 7.00 points");
    }

    #[test]
    fn test_format_results_uses_configured_count() {
        let results = vec![ranked("Song", "Anna", 9.0)];
        assert!(format_results(&results, 5, false).starts_with("Top-5 performances:"));
    }

    fn performance_lines(output: &str) -> Vec<&str> {
        output
            .lines()
            .skip_while(|l| *l != "Performances:")
            .skip(1)
            .collect()
    }

    #[test]
    fn test_format_overview_unscored_and_scored() {
        let mut data = sample_data();
        data.add_score(1, 6.0).unwrap();
        data.add_score(1, 9.0).unwrap();
        let output = format_overview(&data, false);
        let lines = performance_lines(&output);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("0x"));
        assert!(lines[0].contains("     -"));
        assert!(lines[0].contains("Anna"));
        assert!(lines[1].contains("2x"));
        assert!(lines[1].contains("7.50"));
        assert!(lines[1].contains("Boris"));
    }

    #[test]
    fn test_format_overview_empty() {
        assert_eq!(format_overview(&FestivalData::new(), false), "Nothing recorded yet.");
    }

    #[test]
    fn test_format_overview_lists_participant_without_performance() {
        let mut data = FestivalData::new();
        data.add_participant("Lonely".to_string(), "Choir".to_string());
        data.add_participant("Anna".to_string(), "2nd year".to_string());
        data.add_performance(1, "Song".to_string()).unwrap();

        let output = format_overview(&data, false);
        assert!(output.starts_with("Participants:\n1. Lonely (Choir)\n2. Anna (2nd year)"));
        let lines = performance_lines(&output);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Song"));
    }

    #[test]
    fn test_format_overview_participants_only() {
        let mut data = FestivalData::new();
        data.add_participant("Anna".to_string(), "G1".to_string());
        let output = format_overview(&data, false);
        assert!(output.contains("1. Anna (G1)"));
        assert!(output.ends_with("Performances:\nNo performances yet."));
    }

    #[test]
    fn test_format_overview_average_matches_ranking() {
        let mut data = sample_data();
        data.add_score(0, 7.0).unwrap();
        data.add_score(0, 8.0).unwrap();
        data.add_score(0, 10.0).unwrap();
        let ranked = crate::scoring::rank_performances(&data, 3);
        let overview = format_overview(&data, false);
        let lines = performance_lines(&overview);
        assert!(lines[0].contains("3x"));
        assert!(lines[0].contains(&format_average(ranked[0].average_score)));
    }

    #[test]
    fn test_truncate_title_short() {
        assert_eq!(truncate_title("Short title", 20), "Short title");
    }

    #[test]
    fn test_truncate_title_long() {
        assert_eq!(truncate_title("This is a very long title", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_title_unicode() {
        assert_eq!(truncate_title("Вальс цветов", 12), "Вальс цветов");
        assert_eq!(truncate_title("Вальс цветов и звёзд", 10), "Вальс ц...");
    }

    #[test]
    fn test_truncate_title_very_narrow() {
        assert_eq!(truncate_title("Hello world", 3), "Hel");
    }
}
