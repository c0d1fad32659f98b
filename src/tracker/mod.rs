//! Tracker Operations
//!
//! Every user action the dashboard offers, independent of the UI and of
//! how the backend is reached. Mutations always finish with a full reload
//! of the list and the stats; nothing is applied optimistically.

use chrono::NaiveDate;
use serde_json::Value;

use crate::api::Backend;
use crate::error::{Error, Result};
use crate::models::{GithubCredentials, ImportReport, NewProblem, Problem, StatsSnapshot};
use crate::notice::text;


/// Results of reloading both views after a mutation (list first, then stats)
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub problems: Result<Vec<Problem>>,
    pub stats: Result<StatsSnapshot>,
}

impl Refresh {
    /// Notice for a failed reload. Stats load last, so its error wins.
    pub fn error_notice(&self) -> Option<&'static str> {
        if self.stats.is_err() {
            Some(text::STATS_LOAD_FAILED)
        } else if self.problems.is_err() {
            Some(text::PROBLEMS_LOAD_FAILED)
        } else {
            None
        }
    }
}

/// A file ready to hand to the browser's download machinery
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

/// `dsa-problems-YYYY-MM-DD.json`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("dsa-problems-{}.json", today.format("%Y-%m-%d"))
}

#[derive(Debug, Clone)]
pub struct Tracker<B> {
    backend: B,
}

impl<B: Backend> Tracker<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn load_stats(&self) -> Result<StatsSnapshot> {
        let stats = self.backend.stats().await;
        match &stats {
            Ok(s) => log::debug!("loaded stats: {} problems", s.total),
            Err(e) => log::error!("error loading dashboard: {}", e),
        }
        stats
    }

    pub async fn load_problems(&self) -> Result<Vec<Problem>> {
        let problems = self.backend.list_problems().await;
        match &problems {
            Ok(list) => log::debug!("loaded {} problems", list.len()),
            Err(e) => log::error!("error loading problems: {}", e),
        }
        problems
    }

    /// Reload the list, then the stats
    pub async fn refresh(&self) -> Refresh {
        let problems = self.load_problems().await;
        let stats = self.load_stats().await;
        Refresh { problems, stats }
    }

    /// Submit a new record; validation is the backend's job
    pub async fn add_problem(&self, problem: &NewProblem) -> Result<Refresh> {
        let ack = self.backend.create_problem(problem).await.map_err(|e| {
            log::error!("error adding problem: {}", e);
            e
        })?;
        log::info!("added problem `{}`: {}", problem.name, ack.message.unwrap_or_default());
        Ok(self.refresh().await)
    }

    /// Remove a record. Callers obtain the user's confirmation first.
    pub async fn delete_problem(&self, id: u32) -> Result<Refresh> {
        let ack = self.backend.delete_problem(id).await.map_err(|e| {
            log::error!("error deleting problem {}: {}", id, e);
            e
        })?;
        log::info!("deleted problem {}: {}", id, ack.message.unwrap_or_default());
        Ok(self.refresh().await)
    }

    /// Store GitHub credentials on the backend; returns the success text
    pub async fn save_github(&self, credentials: &GithubCredentials) -> Result<String> {
        if !credentials.is_complete() {
            return Err(Error::Invalid(text::GITHUB_FIELDS_MISSING.to_string()));
        }
        let ack = self.backend.save_github(credentials).await.map_err(|e| {
            log::error!("error setting up GitHub: {}", e);
            e
        })?;
        log::info!(
            "saved GitHub configuration for {}/{}: {}",
            credentials.username,
            credentials.repo,
            ack.message.unwrap_or_default()
        );
        Ok(text::GITHUB_SAVED.to_string())
    }

    /// Ask the backend to push everything to GitHub
    pub async fn sync_github(&self) -> Result<String> {
        let ack = self.backend.sync_github().await.map_err(|e| {
            log::error!("error syncing to GitHub: {}", e);
            e
        })?;
        log::info!("synced to GitHub: {}", ack.message.unwrap_or_default());
        Ok(text::GITHUB_SYNCED.to_string())
    }

    /// Fetch the dump and pretty-print it for download
    pub async fn export(&self, today: NaiveDate) -> Result<ExportFile> {
        let dump = self.backend.export().await.map_err(|e| {
            log::error!("error exporting data: {}", e);
            e
        })?;
        let contents = serde_json::to_string_pretty(&dump).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(ExportFile { file_name: export_file_name(today), contents })
    }

    /// Parse an exported file and submit it, then reload both views
    pub async fn import(&self, contents: &str) -> Result<(ImportReport, Refresh)> {
        let dump: Value = serde_json::from_str(contents).map_err(|e| {
            log::warn!("import file is not valid JSON: {}", e);
            Error::MalformedFile(e.to_string())
        })?;
        let report = self.backend.import(&dump).await.map_err(|e| {
            log::error!("error importing data: {}", e);
            e
        })?;
        log::info!("imported {} problems", report.imported_count);
        Ok((report, self.refresh().await))
    }
}
