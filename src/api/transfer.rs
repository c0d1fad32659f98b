//! Import / export endpoints

use gloo_net::http::Request;
use serde_json::Value;

use super::http::{read_json, transport, HttpBackend};
use crate::error::Result;
use crate::models::ImportReport;

impl HttpBackend {
    pub(super) async fn fetch_export(&self) -> Result<Value> {
        let response = Request::get(&self.url("/api/export")).send().await.map_err(transport)?;
        read_json(response).await
    }

    pub(super) async fn post_import(&self, dump: &Value) -> Result<ImportReport> {
        let response = Request::post(&self.url("/api/import"))
            .json(dump)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}
