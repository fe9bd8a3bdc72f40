//! Replay download against the hosted JSON endpoint

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use chatot_transcript::{parse_text, Extraction, ParseState};

use crate::url::{normalize_replay_url, strip_json_suffix};

/// Per-request deadline; replay payloads are small.
const REPLAY_TIMEOUT: Duration = Duration::from_secs(8);

/// Failure fetching one replay. Every variant that reached the network
/// carries the display URL it was working on.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("no replay url in input")]
    MissingUrl,
    #[error("failed to fetch replay {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("replay {url} returned an unreadable payload: {source}")]
    Payload {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ReplayError {
    /// Display URL of the replay that failed, when one was resolved.
    pub fn url(&self) -> Option<&str> {
        match self {
            ReplayError::MissingUrl => None,
            ReplayError::Fetch { url, .. } | ReplayError::Payload { url, .. } => Some(url),
        }
    }
}

/// Hosted replay payload; everything except the log is ignored.
#[derive(Debug, Deserialize)]
struct ReplayPayload {
    #[serde(default)]
    log: String,
}

/// A downloaded replay: display URL plus the raw battle log.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayLog {
    pub url: String,
    pub log: String,
}

impl ReplayLog {
    /// Run the extraction engine over the downloaded transcript.
    pub fn extract(&self, state: &mut ParseState) -> Extraction {
        parse_text(&self.log, state)
    }
}

/// Outcome of one input in a batch download.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// The input as given, before normalization.
    pub input: String,
    pub result: Result<ReplayLog, ReplayError>,
}

/// Per-input outcomes of a bulk download, in input order.
#[derive(Debug, Default)]
pub struct ReplayBatch {
    pub outcomes: Vec<ReplayOutcome>,
}

impl ReplayBatch {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn ok(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.ok()
    }

    /// The successfully downloaded replays, in input order.
    pub fn logs(&self) -> impl Iterator<Item = &ReplayLog> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }
}

/// HTTP client for the replay host.
pub struct ReplayClient {
    http: reqwest::Client,
}

impl ReplayClient {
    pub fn new() -> Self {
        ReplayClient {
            http: reqwest::Client::new(),
        }
    }

    /// Download one replay. The input may be any accepted reference form;
    /// it is normalized to the JSON endpoint first.
    pub async fn fetch(&self, input: &str) -> Result<ReplayLog, ReplayError> {
        let normalized = normalize_replay_url(input).ok_or(ReplayError::MissingUrl)?;
        let url = strip_json_suffix(&normalized).to_string();

        let response = self
            .http
            .get(&normalized)
            .timeout(REPLAY_TIMEOUT)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ReplayError::Fetch {
                url: url.clone(),
                source,
            })?;

        let payload: ReplayPayload =
            response
                .json()
                .await
                .map_err(|source| ReplayError::Payload {
                    url: url.clone(),
                    source,
                })?;

        tracing::debug!(url = %url, bytes = payload.log.len(), "fetched replay log");
        Ok(ReplayLog {
            url,
            log: payload.log,
        })
    }

    /// Download a list of replay references in order.
    ///
    /// Failures are recorded per input and never abort the batch; callers
    /// read the counts off the returned [`ReplayBatch`].
    pub async fn fetch_batch<I, S>(&self, inputs: I) -> ReplayBatch
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut batch = ReplayBatch::default();

        for input in inputs {
            let input = input.into();
            let result = self.fetch(&input).await;
            if let Err(error) = &result {
                tracing::warn!(input = %input, error = %error, "replay fetch failed");
            }
            batch.outcomes.push(ReplayOutcome { input, result });
        }

        batch
    }
}

impl Default for ReplayClient {
    fn default() -> Self {
        Self::new()
    }
}
