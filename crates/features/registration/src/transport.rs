//! The outbound seam of the workflow.

use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::payload::FORM_CONTENT_TYPE;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};
use url::Url;

/// A reply that arrived, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Delivers encoded leads to the webhook.
///
/// `Err` means no response was received. Any status, including 5xx, is `Ok`.
pub trait LeadTransport: Send + Sync + 'static {
    /// One `POST` of an `application/x-www-form-urlencoded` body. Never retried.
    fn post_form(
        &self,
        body: String,
    ) -> impl Future<Output = Result<WebhookResponse, RegistrationError>> + Send;

    /// One `GET` against the endpoint to check reachability.
    fn probe(&self) -> impl Future<Output = Result<WebhookResponse, RegistrationError>> + Send;
}

/// [`LeadTransport`] over `reqwest`, without timeouts beyond the client defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// # Errors
    /// * [`RegistrationError::Endpoint`] when `endpoint` is not an absolute URL.
    /// * [`RegistrationError::Transport`] when the HTTP client cannot be built.
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self, RegistrationError> {
        let endpoint = Url::parse(endpoint).context("Parsing webhook endpoint")?;
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Building HTTP client")?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn read(response: reqwest::Response) -> Result<WebhookResponse, RegistrationError> {
        let status = response.status().as_u16();
        let body = response.text().await.context("Reading webhook response")?;
        debug!(status, bytes = body.len(), "Webhook replied");
        Ok(WebhookResponse { status, body })
    }
}

impl LeadTransport for HttpTransport {
    #[instrument(skip_all, fields(endpoint = %self.endpoint.host_str().unwrap_or_default()))]
    async fn post_form(&self, body: String) -> Result<WebhookResponse, RegistrationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .context("Posting lead")?;
        Self::read(response).await
    }

    #[instrument(skip_all, fields(endpoint = %self.endpoint.host_str().unwrap_or_default()))]
    async fn probe(&self) -> Result<WebhookResponse, RegistrationError> {
        let response =
            self.client.get(self.endpoint.clone()).send().await.context("Probing webhook")?;
        Self::read(response).await
    }
}
