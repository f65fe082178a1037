//! The one read call this client makes: `GET {base}/report`.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Fetch the report array from the local report service.
///
/// No auth, no pagination, no retry. A non-2xx status becomes one
/// human-readable error; so does a body that is not a JSON array. Records
/// inside the array are not validated here; classification handles those
/// leniently downstream.
pub async fn fetch_report(base_url: &str, timeout: Duration) -> Result<Vec<Value>> {
    let url = format!("{}/report", base_url.trim_end_matches('/'));
    info!(%url, "fetching report");

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("build http client")?;

    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("report API error: {status}");
    }

    let body: Value = resp.json().await.context("decode report body")?;
    match body {
        Value::Array(records) => {
            info!(records = records.len(), "report fetched");
            Ok(records)
        }
        other => bail!(
            "report body is not an array (got {})",
            value_kind(&other)
        ),
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
