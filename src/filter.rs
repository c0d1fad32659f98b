//! Local Filtering
//!
//! Derived views over the cached problem list. Never touches the backend.

use std::collections::BTreeSet;

use crate::models::{Difficulty, Problem};

/// Search box plus the three exact-match selects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemFilter {
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub platform: Option<String>,
    pub category: Option<String>,
}

impl ProblemFilter {
    /// Case-insensitive substring of name, category or platform,
    /// and every set select matches exactly.
    pub fn matches(&self, problem: &Problem) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || problem.name.to_lowercase().contains(&query)
            || problem.category.to_lowercase().contains(&query)
            || problem.platform.to_lowercase().contains(&query);

        matches_query
            && self.difficulty.map_or(true, |d| problem.level() == Some(d))
            && self.platform.as_ref().map_or(true, |p| &problem.platform == p)
            && self.category.as_ref().map_or(true, |c| &problem.category == c)
    }

    /// Matching records in cache order
    pub fn apply(&self, problems: &[Problem]) -> Vec<Problem> {
        problems.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.difficulty.is_some()
            || self.platform.is_some()
            || self.category.is_some()
    }
}

/// Select value -> filter value ("" means any)
pub fn select_value(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}

/// Sorted distinct platforms, for the platform select
pub fn platforms(problems: &[Problem]) -> Vec<String> {
    distinct(problems.iter().map(|p| p.platform.as_str()))
}

/// Sorted distinct categories, for the category select
pub fn categories(problems: &[Problem]) -> Vec<String> {
    distinct(problems.iter().map(|p| p.category.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
