//! GitHub sync endpoints
//!
//! Pass-through only; the backend owns the GitHub protocol.

use gloo_net::http::Request;

use super::http::{read_json, transport, HttpBackend};
use crate::error::Result;
use crate::models::{Ack, GithubCredentials};

impl HttpBackend {
    pub(super) async fn post_github_setup(&self, credentials: &GithubCredentials) -> Result<Ack> {
        let response = Request::post(&self.url("/api/github/setup"))
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    pub(super) async fn post_github_sync(&self) -> Result<Ack> {
        let response = Request::post(&self.url("/api/github/sync"))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}
