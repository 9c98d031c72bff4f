use anyhow::{Result, bail};
use async_trait::async_trait;
use serde::Serialize;

use crate::assessment::Assessment;

use super::{Analysis, Analyzer};

/// The service variant: POST `{"text": ...}` to a separately hosted
/// analysis endpoint that replies with an already well-formed assessment.
pub struct RemoteAnalyzer {
    url: String,
    client: reqwest::Client,
}

impl RemoteAnalyzer {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[async_trait]
impl Analyzer for RemoteAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        let resp = self
            .client
            .post(&self.url)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("analysis service error ({}): {}", status, body);
        }

        // The service speaks the schema natively; no brace-trimming fallback.
        let assessment: Assessment = resp.json().await?;

        Ok(Analysis {
            assessment,
            usage: None,
        })
    }
}
