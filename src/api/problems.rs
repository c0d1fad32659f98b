//! Problem and stats endpoints

use gloo_net::http::Request;

use super::http::{read_json, transport, HttpBackend};
use crate::error::Result;
use crate::models::{Ack, NewProblem, Problem, ProblemList, StatsSnapshot};

impl HttpBackend {
    pub(super) async fn fetch_stats(&self) -> Result<StatsSnapshot> {
        let response = Request::get(&self.url("/api/stats")).send().await.map_err(transport)?;
        read_json(response).await
    }

    pub(super) async fn fetch_problems(&self) -> Result<Vec<Problem>> {
        let response = Request::get(&self.url("/api/problems")).send().await.map_err(transport)?;
        let list: ProblemList = read_json(response).await?;
        Ok(list.problems)
    }

    pub(super) async fn post_problem(&self, problem: &NewProblem) -> Result<Ack> {
        let response = Request::post(&self.url("/api/problems"))
            .json(problem)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    pub(super) async fn remove_problem(&self, id: u32) -> Result<Ack> {
        let response = Request::delete(&self.url(&format!("/api/problems/{}", id)))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}
