//! Problem Cache
//!
//! Client-held copy of the last successful list fetch. Only ever replaced
//! wholesale; nothing edits individual records.

use crate::models::Problem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemCache {
    records: Vec<Problem>,
    /// Number of successful replacements so far
    generation: u64,
}

impl ProblemCache {
    pub fn records(&self) -> &[Problem] {
        &self.records
    }

    /// Swap in a fresh server response
    pub fn replace(&mut self, records: Vec<Problem>) {
        self.records = records;
        self.generation += 1;
    }

    /// Whether any list fetch has succeeded yet
    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_problem(id: u32) -> Problem {
        Problem {
            id,
            name: format!("Problem {}", id),
            platform: "LeetCode".into(),
            difficulty: "medium".into(),
            category: "DP".into(),
            notes: None,
            date_solved: String::new(),
            status: None,
            attempts: None,
            solution_path: None,
        }
    }

    #[test]
    fn test_starts_unloaded() {
        let cache = ProblemCache::default();
        assert!(!cache.is_loaded());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_replace_is_verbatim() {
        let mut cache = ProblemCache::default();
        cache.replace(vec![make_problem(1), make_problem(2)]);
        cache.replace(vec![make_problem(3)]);

        assert_eq!(cache.records(), &[make_problem(3)]);
        assert_eq!(cache.len(), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_replace_with_empty_still_counts_as_loaded() {
        let mut cache = ProblemCache::default();
        cache.replace(Vec::new());
        assert!(cache.is_loaded());
        assert_eq!(cache.len(), 0);
    }
}
