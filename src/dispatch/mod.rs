//! Concurrent GET fan-out against a fixed target.
//!
//! All requests launch at once with no concurrency cap, matching the
//! harness this replaces; each completion prints one `[<index>]` line and
//! the last counted completion prints the summary.
mod counters;


use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::error::{AppError, AppResult, HttpError};

pub use counters::{DispatchCounters, DispatchSummary};

/// Fixed target for one dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl DispatchTarget {
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

/// Issues `count` independent GET requests at once, prints one line per
/// completed request and a single summary line after the last one, and
/// returns the final counts. A zero count is treated as one request.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or a worker
/// task panics. Per-request transport failures are counted and printed,
/// never returned.
pub async fn run(
    target: &DispatchTarget,
    count: u64,
    timeout: Duration,
) -> AppResult<DispatchSummary> {
    let count = if count == 0 { 1 } else { count };
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;

    let url = target.url();
    debug!("dispatching {} requests to {}", count, url);

    let counters = Arc::new(DispatchCounters::new(count));
    let mut handles = Vec::with_capacity(usize::try_from(count).unwrap_or_default());

    for index in 0..count {
        let client = client.clone();
        let url = url.clone();
        let counters = Arc::clone(&counters);
        handles.push(tokio::spawn(async move {
            let last = match fetch_body(&client, &url).await {
                Ok(body) => {
                    println!("[{}] {}", index, body);
                    counters.record_success()
                }
                Err(err) => {
                    println!("[{}] {}", index, err);
                    counters.record_failure()
                }
            };
            if last {
                let summary = counters.snapshot();
                println!("------------------------------");
                println!(
                    "total={}, succeeded={}, failed={}",
                    summary.total, summary.succeeded, summary.failed
                );
            }
        }));
    }

    for handle in handles {
        handle.await?;
    }

    Ok(counters.snapshot())
}

// A completed response of any status counts as a success; only transport
// failures (connect, timeout, mid-body) count as failed.
async fn fetch_body(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?;
    let mut stream = response.bytes_stream();
    let mut body = String::new();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        body.push_str(&String::from_utf8_lossy(&bytes));
    }
    Ok(body)
}
