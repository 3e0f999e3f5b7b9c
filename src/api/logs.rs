//! HTTP client for the remote activity log service.
//!
//! Finalized time-log records are posted as JSON to the configured API.
//! Rejections are surfaced to the caller as-is: there is no automatic
//! retry, and a record that fails to submit is not re-queued. A `401`
//! additionally drops the cached token so the next attempt prompts again.

use crate::libs::config::ServerConfig;
use crate::libs::log_store::{LogStore, NewTimeLog, TimeLog};
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

const TOKEN_FILE: &str = ".api_token";
const LOGS_URL: &str = "time-logs";

/// Failures talking to the activity log service.
#[derive(Debug, Error)]
pub enum RemoteLogsError {
    #[error("no API token available")]
    MissingToken,
    #[error("activity log service rejected the request ({0})")]
    Rejected(StatusCode),
    #[error("activity log service is unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Server response for a created record.
#[derive(Debug, Deserialize)]
struct CreatedRecord {
    id: i64,
}

pub struct RemoteLogs {
    client: Client,
    config: ServerConfig,
    secret: Secret,
}

impl RemoteLogs {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(TOKEN_FILE, &Message::PromptApiToken.to_string()),
        }
    }

    /// Submits one record, returning it with the server-assigned ID.
    pub async fn submit(&self, record: &NewTimeLog) -> Result<TimeLog, RemoteLogsError> {
        let token = self.secret.get_or_prompt().map_err(|_| RemoteLogsError::MissingToken)?;
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), LOGS_URL);

        let res = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(record)
            .send()
            .await?;

        match res.status() {
            status if status.is_success() => {
                let created: CreatedRecord = res.json().await?;
                Ok(TimeLog {
                    id: created.id,
                    activity: record.activity.clone(),
                    pillar: record.pillar,
                    duration_minutes: record.duration_minutes,
                    start_time: record.start_time,
                    end_time: record.end_time,
                    notes: record.notes.clone(),
                })
            }
            StatusCode::UNAUTHORIZED => {
                let _ = self.secret.forget();
                Err(RemoteLogsError::Rejected(StatusCode::UNAUTHORIZED))
            }
            status => Err(RemoteLogsError::Rejected(status)),
        }
    }

    /// Submits a batch of local records, stopping at the first failure
    /// and reporting how many went through.
    pub async fn push_all(&self, logs: &[TimeLog]) -> Result<usize, RemoteLogsError> {
        let mut pushed = 0;
        for log in logs {
            let record = NewTimeLog {
                activity: log.activity.clone(),
                pillar: log.pillar,
                duration_minutes: log.duration_minutes,
                start_time: log.start_time,
                end_time: log.end_time,
                notes: log.notes.clone(),
            };
            self.submit(&record).await?;
            pushed += 1;
        }
        Ok(pushed)
    }
}

#[async_trait]
impl LogStore for RemoteLogs {
    async fn create(&self, record: NewTimeLog) -> Result<TimeLog> {
        Ok(self.submit(&record).await?)
    }
}
