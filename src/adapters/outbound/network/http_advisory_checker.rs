use crate::alert_sync::domain::{AdvisoryReport, Manifest};
use crate::ports::outbound::{AdvisoryChecker, ManifestReader};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// HttpAdvisoryChecker adapter querying a remote advisory service
///
/// Posts the manifest content (e.g. `composer.lock`) to the service and
/// parses the JSON report it answers with.
///
/// # Behavior
/// - Applies a request timeout
/// - Does not retry failed requests; scheduling the next attempt is the
///   caller's concern
/// - Treats any non-2xx status or unparseable body as a failed check
pub struct HttpAdvisoryChecker<R> {
    client: reqwest::Client,
    endpoint: String,
    manifest_reader: R,
}

impl<R: ManifestReader> HttpAdvisoryChecker<R> {
    /// Creates a checker for the service at `endpoint`
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(endpoint: String, timeout: Duration, manifest_reader: R) -> Result<Self> {
        reqwest::Url::parse(&endpoint)
            .with_context(|| format!("Invalid advisory service URL: {}", endpoint))?;

        let user_agent = format!("security-alert-sync/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            manifest_reader,
        })
    }
}

#[async_trait]
impl<R> AdvisoryChecker for HttpAdvisoryChecker<R>
where
    R: ManifestReader + Send + Sync,
{
    async fn check(&self, manifest: &Manifest) -> Result<AdvisoryReport> {
        let body = self.manifest_reader.read_manifest(manifest.path())?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .with_context(|| format!("Request to advisory service {} failed", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Advisory service returned status code {}", status);
        }

        let text = response
            .text()
            .await
            .context("Failed to read advisory service response")?;

        AdvisoryReport::from_json(&text)
    }
}
