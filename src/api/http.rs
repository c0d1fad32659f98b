//! Fetch-based backend
//!
//! Shared request plumbing; endpoint methods live in the sibling modules.

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::Backend;
use crate::error::{Error, Result};
use crate::models::{Ack, GithubCredentials, ImportReport, NewProblem, Problem, StatsSnapshot};

/// Talks to the backend with `window.fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    base: String,
}

/// Best-effort failure body
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl HttpBackend {
    /// `base` is prepended to every `/api/...` path ("" for same origin)
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Map a transport-level failure
pub(super) fn transport(err: gloo_net::Error) -> Error {
    match err {
        gloo_net::Error::SerdeError(e) => Error::Decode(e.to_string()),
        other => Error::Network(other.to_string()),
    }
}

/// Decode a response, turning non-2xx into `Error::Status`
pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !response.ok() {
        let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.error);
        log::warn!("{} -> {} {:?}", response.url(), status, message);
        return Err(Error::Status { status, message });
    }
    response.json::<T>().await.map_err(|e| Error::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn stats(&self) -> Result<StatsSnapshot> {
        self.fetch_stats().await
    }

    async fn list_problems(&self) -> Result<Vec<Problem>> {
        self.fetch_problems().await
    }

    async fn create_problem(&self, problem: &NewProblem) -> Result<Ack> {
        self.post_problem(problem).await
    }

    async fn delete_problem(&self, id: u32) -> Result<Ack> {
        self.remove_problem(id).await
    }

    async fn save_github(&self, credentials: &GithubCredentials) -> Result<Ack> {
        self.post_github_setup(credentials).await
    }

    async fn sync_github(&self) -> Result<Ack> {
        self.post_github_sync().await
    }

    async fn export(&self) -> Result<Value> {
        self.fetch_export().await
    }

    async fn import(&self, dump: &Value) -> Result<ImportReport> {
        self.post_import(dump).await
    }
}
