use anyhow::{Context, Result, bail};
use reqwest::{IntoUrl, StatusCode, Url, blocking::Client};

use crate::{message::WebhookMessage, validate};

/// Blocking sender bound to a single webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http_client: Client,
    url: Url,
}

impl WebhookClient {
    /// Binds to an arbitrary endpoint URL. Use [`validate_webhook_url`] first
    /// if you want the canonical Discord shape enforced.
    pub fn new(webhook_url: impl IntoUrl) -> Result<Self> {
        let url = webhook_url.into_url().context("Invalid WebHook URL")?;
        let http_client = Client::new();
        Ok(Self { http_client, url })
    }

    /// Builds the canonical `https://discord.com/api/webhooks/{id}/{token}`
    /// endpoint from its parts.
    pub fn from_parts(id: u64, token: &str) -> Result<Self> {
        validate::webhook_token(token).context("Invalid WebHook token")?;
        let url = format!("https://discord.com/api/webhooks/{id}/{token}");
        Self::new(url)
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Executes the webhook: one POST with a JSON body, redirects followed,
    /// response body fully read before returning.
    ///
    /// `Err` means the exchange did not complete (connection refused, body
    /// unreadable). Every completed exchange is `Ok` with its status code,
    /// 4xx/5xx included; interpreting the status is the caller's business.
    pub fn execute(&self, message: &WebhookMessage) -> Result<StatusCode> {
        log::debug!("Executing webhook: {}", message.to_json());

        let resp = self
            .http_client
            .post(self.url.clone())
            .json(message)
            .send()
            .with_context(|| format!("Could not send POST request to {}", self.url))?;

        let status = resp.status();
        let body = resp
            .text()
            .context("Could not read webhook response body")?;
        log::debug!("Webhook responded with {status}: {body}");

        Ok(status)
    }
}

/// Strict check that a URL has the canonical Discord webhook shape.
///
/// [`WebhookClient::new`] deliberately does not call this, since webhook-style
/// endpoints exist outside discord.com; it is for callers that want to fail
/// early on a mistyped URL.
pub fn validate_webhook_url(url: &Url) -> Result<()> {
    assert_url_part("Scheme", "https", url.scheme())?;
    assert_url_part("Host", "discord.com", url.host_str().unwrap_or(""))?;
    let segments = url.path_segments().map_or(vec![], |x| x.collect());
    if segments.len() != 4 {
        bail!("Expected 4 URL path segments, got {}", segments.len());
    }
    assert_url_part("Segment #1", "api", segments[0])?;
    assert_url_part("Segment #2", "webhooks", segments[1])?;
    segments[2].parse::<u64>().context("Invalid Webhook ID")?;
    validate::webhook_token(segments[3])?;
    if let Some(query) = url.query() {
        bail!("Expected no query, got {query}");
    }
    if let Some(frag) = url.fragment() {
        bail!("Expected no fragment, got {frag}");
    }
    Ok(())
}

fn assert_url_part(label: &'static str, expected: &'static str, actual: &str) -> Result<()> {
    if expected != actual {
        bail!("URL {label} is {actual:?} instead of {expected:?}");
    }
    Ok(())
}
