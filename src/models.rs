//! Frontend Models
//!
//! Data structures matching the tracker backend's JSON.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Problem difficulty
///
/// Parsed case-insensitively since imported dumps are not normalized by the backend.
/// Records keep their raw string; see [`Problem::level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a form/select value; empty means "not set"
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Difficulty::parse(&value).ok_or_else(|| format!("unknown difficulty `{}`", value))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub name: String,
    pub platform: String,
    /// Raw value; imports may carry anything here
    pub difficulty: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub date_solved: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_path: Option<String>,
}

impl Problem {
    /// One of the three known difficulties, if the raw value is one
    pub fn level(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }

    /// Calendar day the problem was solved, if `date_solved` parses.
    ///
    /// Accepts RFC 3339, offset-less ISO datetimes (what the backend writes)
    /// and bare `YYYY-MM-DD` dates.
    pub fn solved_on(&self) -> Option<NaiveDate> {
        let raw = self.date_solved.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Notes worth rendering (absent and blank notes are hidden)
    pub fn visible_notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// `GET /api/problems` body
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemList {
    pub problems: Vec<Problem>,
}

/// Per-difficulty counts; missing keys count as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Server-computed statistics (`GET /api/stats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub total: u32,
    pub difficulty: DifficultyCounts,
    pub categories: BTreeMap<String, u32>,
    pub platforms: BTreeMap<String, u32>,
    pub recent_problems: Vec<Problem>,
}

/// `POST /api/problems` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProblem {
    pub name: String,
    pub platform: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub notes: String,
}

/// `POST /api/github/setup` body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GithubCredentials {
    pub username: String,
    pub token: String,
    pub repo: String,
}

impl GithubCredentials {
    /// All three fields are present (whitespace does not count)
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.token, &self.repo]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Generic success body: `{message}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/import` success body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportReport {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub imported_count: u32,
}

impl ImportReport {
    /// Backend message, or a count-based line when it sent none
    pub fn summary(&self) -> String {
        if self.message.is_empty() {
            format!("Imported {} problems", self.imported_count)
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_from_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Two Sum",
            "platform": "LeetCode",
            "difficulty": "easy",
            "category": "Arrays",
            "status": "solved",
            "date_solved": "2024-03-09T18:22:01.123456",
            "solution_path": null,
            "notes": "",
            "attempts": 1
        }"#;
        let problem: Problem = serde_json::from_str(json).unwrap();

        assert_eq!(problem.id, 7);
        assert_eq!(problem.level(), Some(Difficulty::Easy));
        assert_eq!(problem.attempts, Some(1));
        assert_eq!(problem.visible_notes(), None);
        assert_eq!(problem.solved_on(), NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn test_difficulty_case_insensitive() {
        let d: Difficulty = serde_json::from_str(r#""Hard""#).unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert!(serde_json::from_str::<Difficulty>(r#""extreme""#).is_err());
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), r#""medium""#);
    }

    #[test]
    fn test_unknown_difficulty_still_decodes() {
        let list: ProblemList = serde_json::from_str(
            r#"{"problems":[
                {"id":1,"name":"Two Sum","platform":"LeetCode","difficulty":"easy","category":"Arrays"},
                {"id":2,"name":"IOI Day 2","platform":"IOI","difficulty":"Expert","category":"Graphs"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(list.problems.len(), 2);
        assert_eq!(list.problems[1].difficulty, "Expert");
        assert_eq!(list.problems[1].level(), None);

        let stats: StatsSnapshot = serde_json::from_str(
            r#"{
                "total": 2,
                "difficulty": {"easy": 1, "medium": 0, "hard": 0},
                "recent_problems": [
                    {"id":2,"name":"IOI Day 2","platform":"IOI","difficulty":"Expert","category":"Graphs"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.difficulty.easy, 1);
        assert_eq!(stats.recent_problems[0].level(), None);
    }

    #[test]
    fn test_solved_on_formats() {
        let mut p: Problem = serde_json::from_str(
            r#"{"id":1,"name":"a","platform":"b","difficulty":"easy","category":"c"}"#,
        )
        .unwrap();
        assert_eq!(p.date_solved, "");
        assert_eq!(p.solved_on(), None);

        p.date_solved = "2023-12-31T23:30:00+00:00".into();
        assert_eq!(p.solved_on(), NaiveDate::from_ymd_opt(2023, 12, 31));

        p.date_solved = "2023-01-02".into();
        assert_eq!(p.solved_on(), NaiveDate::from_ymd_opt(2023, 1, 2));
    }

    #[test]
    fn test_stats_missing_keys_default_to_zero() {
        let stats: StatsSnapshot =
            serde_json::from_str(r#"{"total":5,"difficulty":{"easy":3,"medium":2}}"#).unwrap();
        assert_eq!(stats.difficulty.hard, 0);
        assert!(stats.categories.is_empty());
        assert!(stats.recent_problems.is_empty());
    }

    #[test]
    fn test_new_problem_body() {
        let body = NewProblem {
            name: "LRU Cache".into(),
            platform: "LeetCode".into(),
            difficulty: Difficulty::Medium,
            category: "Design".into(),
            notes: String::new(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["difficulty"], "medium");
        assert_eq!(value["notes"], "");
    }

    #[test]
    fn test_import_summary() {
        let report: ImportReport = serde_json::from_str(r#"{"imported_count": 4}"#).unwrap();
        assert_eq!(report.summary(), "Imported 4 problems");

        let report = ImportReport { message: "Successfully imported 4 problems".into(), imported_count: 4 };
        assert_eq!(report.summary(), "Successfully imported 4 problems");
    }

    #[test]
    fn test_github_credentials_complete() {
        let mut creds = GithubCredentials {
            username: "octo".into(),
            token: "ghp_x".into(),
            repo: "dsa".into(),
        };
        assert!(creds.is_complete());
        creds.repo = "   ".into();
        assert!(!creds.is_complete());
    }
}
