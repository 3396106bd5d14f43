use std::env;

use async_trait::async_trait;
use checklist_core::model::{ChecklistSubmission, SaveBanner};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::SubmissionError;

/// Where completed checklists are posted.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Posts the checklist and reports the banner the page should show.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` when the post could not be delivered.
    async fn submit(&self, submission: &ChecklistSubmission) -> Result<SaveBanner, SubmissionError>;
}

#[derive(Clone, Debug)]
pub struct SubmissionConfig {
    pub url: String,
}

impl SubmissionConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let url = env::var("CHECKLIST_SUBMIT_URL").ok()?;
        if url.trim().is_empty() {
            return None;
        }
        Some(Self { url })
    }
}

/// Posts the checklist as a regular form.
#[derive(Clone)]
pub struct HttpSubmissionSink {
    client: Client,
    config: SubmissionConfig,
}

impl HttpSubmissionSink {
    #[must_use]
    pub fn new(config: SubmissionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// URL of the save endpoint for a checklist kind.
    #[must_use]
    pub fn endpoint(&self, kind: &str) -> String {
        format!("{}/guardar/{kind}", self.config.url.trim_end_matches('/'))
    }
}

/// JSON body some save endpoints answer with instead of the result redirect.
#[derive(Debug, Deserialize)]
struct SaveReceipt {
    mensaje: String,
    #[serde(default)]
    archivo: Option<String>,
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, submission: &ChecklistSubmission) -> Result<SaveBanner, SubmissionError> {
        let url = self.endpoint(&submission.kind);
        let fields = submission.form_fields();
        info!(%url, fields = fields.len(), "posting checklist");

        let response = self.client.post(url).form(&fields).send().await?;
        if !response.status().is_success() {
            return Err(SubmissionError::HttpStatus(response.status()));
        }

        let redirected = banner_from_url(response.url());
        let banner = match redirected {
            Some(banner) => Some(banner),
            None => {
                let body = response.text().await?;
                serde_json::from_str::<SaveReceipt>(&body).ok().and_then(|receipt| {
                    SaveBanner::from_query(Some(&receipt.mensaje), receipt.archivo.as_deref())
                })
            }
        };
        match banner {
            Some(SaveBanner::Failed) => {
                warn!("save endpoint reported a failure");
                Err(SubmissionError::Rejected)
            }
            None => {
                warn!("save endpoint answered without a save result");
                Err(SubmissionError::Rejected)
            }
            Some(banner) => Ok(banner),
        }
    }
}

/// Reads the result the save endpoint encodes in its redirect target.
fn banner_from_url(url: &Url) -> Option<SaveBanner> {
    let mut mensaje = None;
    let mut archivo = None;
    for (key, value) in url.query_pairs() {
        match &*key {
            "mensaje" => mensaje = Some(value.into_owned()),
            "archivo" => archivo = Some(value.into_owned()),
            _ => {}
        }
    }
    SaveBanner::from_query(mensaje.as_deref(), archivo.as_deref())
}

/// Accepts every checklist without sending it anywhere.
#[derive(Clone, Debug, Default)]
pub struct LogSubmissionSink;

#[async_trait]
impl SubmissionSink for LogSubmissionSink {
    async fn submit(&self, submission: &ChecklistSubmission) -> Result<SaveBanner, SubmissionError> {
        let file = submission.file_name();
        info!(
            kind = %submission.kind,
            answered = submission.answered_count(),
            %file,
            "checklist accepted without a submission endpoint"
        );
        Ok(SaveBanner::Saved { file })
    }
}
