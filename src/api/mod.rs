//! Backend API
//!
//! The REST surface the dashboard talks to, behind a trait so the
//! tracker logic can run against an in-memory backend in tests.

mod github;
mod http;
mod problems;
mod transfer;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Ack, GithubCredentials, ImportReport, NewProblem, Problem, StatsSnapshot};

pub use http::HttpBackend;

/// Operations offered by the tracker backend
///
/// Futures are `?Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /api/stats`
    async fn stats(&self) -> Result<StatsSnapshot>;

    /// `GET /api/problems`
    async fn list_problems(&self) -> Result<Vec<Problem>>;

    /// `POST /api/problems`
    async fn create_problem(&self, problem: &NewProblem) -> Result<Ack>;

    /// `DELETE /api/problems/{id}`
    async fn delete_problem(&self, id: u32) -> Result<Ack>;

    /// `POST /api/github/setup`
    async fn save_github(&self, credentials: &GithubCredentials) -> Result<Ack>;

    /// `POST /api/github/sync`
    async fn sync_github(&self) -> Result<Ack>;

    /// `GET /api/export`; the dump is opaque to the client
    async fn export(&self) -> Result<Value>;

    /// `POST /api/import`
    async fn import(&self, dump: &Value) -> Result<ImportReport>;
}
