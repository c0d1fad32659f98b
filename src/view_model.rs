//! View Models
//!
//! Plain display data derived from models, kept apart from the components
//! so the formatting rules can be tested without a DOM.

use std::collections::BTreeMap;

use crate::models::{Difficulty, Problem, StatsSnapshot};

pub const EMPTY_TITLE: &str = "No problems found";
pub const EMPTY_HINT: &str = "Start by adding your first solved problem!";

/// The four dashboard counters, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct Counters {
    pub total: String,
    pub easy: String,
    pub medium: String,
    pub hard: String,
}

impl From<&StatsSnapshot> for Counters {
    fn from(stats: &StatsSnapshot) -> Self {
        Self {
            total: stats.total.to_string(),
            easy: stats.difficulty.get(Difficulty::Easy).to_string(),
            medium: stats.difficulty.get(Difficulty::Medium).to_string(),
            hard: stats.difficulty.get(Difficulty::Hard).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub name: String,
    pub count: u32,
}

/// Category or platform breakdown rows, in key order
pub fn breakdown(counts: &BTreeMap<String, u32>) -> Vec<BreakdownRow> {
    counts
        .iter()
        .map(|(name, count)| BreakdownRow { name: name.clone(), count: *count })
        .collect()
}

/// One rendered problem card
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemCard {
    pub id: u32,
    pub name: String,
    pub platform: String,
    pub badge_class: String,
    pub badge_label: String,
    pub category: String,
    pub date_label: String,
    pub notes: Option<String>,
}

impl From<&Problem> for ProblemCard {
    fn from(problem: &Problem) -> Self {
        let difficulty = problem.difficulty.trim().to_lowercase();
        Self {
            id: problem.id,
            name: problem.name.clone(),
            platform: problem.platform.clone(),
            badge_label: difficulty.to_uppercase(),
            badge_class: format!("difficulty-badge difficulty-{}", difficulty),
            category: problem.category.clone(),
            date_label: date_label(problem),
            notes: problem.visible_notes().map(str::to_string),
        }
    }
}

impl ProblemCard {
    /// List key; ids alone can repeat once the backend reuses them
    pub fn key(&self) -> (u32, String, String) {
        (self.id, self.name.clone(), self.date_label.clone())
    }
}

/// `M/D/YYYY`, or the raw string when it does not parse
pub fn date_label(problem: &Problem) -> String {
    problem
        .solved_on()
        .map(|day| day.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| problem.date_solved.clone())
}

/// "12 problems", or "Showing 3 of 12 problems" while a filter is active
pub fn count_label(shown: usize, total: usize, filtered: bool) -> String {
    let noun = if total == 1 { "problem" } else { "problems" };
    if filtered {
        format!("Showing {} of {} {}", shown, total, noun)
    } else {
        format!("{} {}", total, noun)
    }
}

/// What the problem list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Explicit empty-state message
    Empty,
    Cards(Vec<ProblemCard>),
}

impl ListView {
    pub fn build(problems: &[Problem]) -> Self {
        if problems.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(problems.iter().map(ProblemCard::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyCounts;

    fn make_problem(id: u32, difficulty: Difficulty, notes: Option<&str>, date: &str) -> Problem {
        Problem {
            id,
            name: format!("Problem {}", id),
            platform: "HackerRank".to_string(),
            difficulty: difficulty.to_string(),
            category: "Strings".to_string(),
            notes: notes.map(str::to_string),
            date_solved: date.to_string(),
            status: Some("solved".to_string()),
            attempts: Some(1),
            solution_path: None,
        }
    }

    #[test]
    fn test_zero_counter_is_rendered() {
        let stats: StatsSnapshot =
            serde_json::from_str(r#"{"total":5,"difficulty":{"easy":3,"medium":2,"hard":0}}"#).unwrap();
        let counters = Counters::from(&stats);

        assert_eq!(counters.total, "5");
        assert_eq!(counters.easy, "3");
        assert_eq!(counters.medium, "2");
        assert_eq!(counters.hard, "0");
    }

    #[test]
    fn test_default_counters_are_zero() {
        let counters = Counters::from(&StatsSnapshot::default());
        assert_eq!(counters.hard, "0");
        assert_eq!(counters.total, "0");
    }

    #[test]
    fn test_breakdown_rows() {
        let mut counts = BTreeMap::new();
        counts.insert("Trees".to_string(), 4);
        counts.insert("Arrays".to_string(), 2);

        let rows = breakdown(&counts);
        assert_eq!(rows[0], BreakdownRow { name: "Arrays".into(), count: 2 });
        assert_eq!(rows[1], BreakdownRow { name: "Trees".into(), count: 4 });
        assert!(breakdown(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_empty_cache_renders_empty_state() {
        assert_eq!(ListView::build(&[]), ListView::Empty);
    }

    #[test]
    fn test_card_fields() {
        let problem = make_problem(3, Difficulty::Hard, Some("two pointers"), "2024-02-29T08:00:00.5");
        let ListView::Cards(cards) = ListView::build(&[problem]) else {
            panic!("expected cards");
        };

        let card = &cards[0];
        assert_eq!(card.id, 3);
        assert_eq!(card.badge_label, "HARD");
        assert_eq!(card.badge_class, "difficulty-badge difficulty-hard");
        assert_eq!(card.date_label, "2/29/2024");
        assert_eq!(card.notes.as_deref(), Some("two pointers"));
    }

    #[test]
    fn test_unknown_difficulty_card() {
        let mut problem = make_problem(8, Difficulty::Easy, None, "2024-01-01");
        problem.difficulty = "Expert".to_string();
        let card = ProblemCard::from(&problem);

        assert_eq!(card.badge_label, "EXPERT");
        assert_eq!(card.badge_class, "difficulty-badge difficulty-expert");
    }

    #[test]
    fn test_reused_id_gets_distinct_key() {
        let old = ProblemCard::from(&make_problem(3, Difficulty::Easy, None, "2024-01-01"));
        let mut reused = make_problem(3, Difficulty::Hard, None, "2024-02-01");
        reused.name = "Word Ladder".to_string();
        let reused = ProblemCard::from(&reused);

        assert_eq!(old.id, reused.id);
        assert_ne!(old.key(), reused.key());
    }

    #[test]
    fn test_blank_notes_hidden() {
        let card = ProblemCard::from(&make_problem(1, Difficulty::Easy, Some("  "), "2024-01-01"));
        assert_eq!(card.notes, None);
        let card = ProblemCard::from(&make_problem(1, Difficulty::Easy, None, "2024-01-01"));
        assert_eq!(card.notes, None);
    }

    #[test]
    fn test_unparseable_date_shown_raw() {
        let card = ProblemCard::from(&make_problem(1, Difficulty::Medium, None, "last week"));
        assert_eq!(card.date_label, "last week");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(4, 4, false), "4 problems");
        assert_eq!(count_label(1, 1, false), "1 problem");
        assert_eq!(count_label(0, 9, true), "Showing 0 of 9 problems");
    }

    #[test]
    fn test_counts_lookup() {
        let counts = DifficultyCounts { easy: 1, medium: 2, hard: 3 };
        assert_eq!(counts.get(Difficulty::Hard), 3);
    }
}
