//! Cookie-carrying HTTP client for the syllabus portal.
//!
//! Every request goes through one `reqwest::Client` with a cookie store, so
//! the session established by the login handshake is reused by all later
//! listing and detail fetches.

mod form;
mod page;

use std::time::Duration;

use encoding_rs::SHIFT_JIS;
use reqwest::{Client, Method, StatusCode, Url};

use crate::error::ScraperError;
use crate::retry::RetryPolicy;

pub use form::HtmlForm;
pub use page::{Page, PageEncoding};

/// Root of the student-facing portal; all catalog paths are relative to it.
pub const PORTAL_BASE_URL: &str = "https://student.iimc.kyoto-u.ac.jp/iwproxy/KULASIS/student/";

/// Single-sign-on entry point that starts the login handshake.
pub const LOGIN_INIT_URL: &str = "https://cert.iimc.kyoto-u.ac.jp/fw/dfw?AGENT_DFW=http%3a%2f%2fstudent.iimc.kyoto-u.ac.jp%2f&path=%2fiwproxy%2fDMP%2fdp%2fdmp&query=";

/// HTTP client for the syllabus portal.
///
/// Non-2xx responses surface as [`ScraperError::NotFound`] or
/// [`ScraperError::UnexpectedStatus`]. [`PortalClient::get_page`] retries
/// transient failures; form submission never does.
pub struct PortalClient {
    client: Client,
    base_url: Url,
    init_url: Url,
    retry: RetryPolicy,
}

impl PortalClient {
    /// Creates a client pointed at the production portal.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ScraperError> {
        Self::with_urls(
            timeout_secs,
            user_agent,
            max_retries,
            backoff_base_ms,
            PORTAL_BASE_URL,
            LOGIN_INIT_URL,
        )
    }

    /// Creates a client from the application config, pointed at the production portal.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &kolosis_core::AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_ms,
        )
    }

    /// Creates a client with custom portal and login URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidUrl`] if either URL
    /// does not parse.
    pub fn with_urls(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
        base_url: &str,
        init_url: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // The base must end with exactly one slash so relative catalog paths
        // join under it instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = parse_url(&normalised)?;
        let init_url = parse_url(init_url)?;

        Ok(Self {
            client,
            base_url,
            init_url,
            retry: RetryPolicy::new(max_retries, backoff_base_ms),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn init_url(&self) -> &Url {
        &self.init_url
    }

    /// Resolves a portal path (e.g. `la/syllabus/search`) against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if the joined URL is not valid.
    pub fn resolve(&self, path: &str) -> Result<Url, ScraperError> {
        self.base_url
            .join(path)
            .map_err(|e| ScraperError::InvalidUrl {
                url: path.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Fetches a page, retrying transient failures with back-off.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`]: HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status (5xx retried).
    /// - [`ScraperError::Http`]: network or TLS failure after all retries exhausted.
    pub async fn get_page(&self, url: &Url, encoding: PageEncoding) -> Result<Page, ScraperError> {
        let mut retries = 0;
        loop {
            let err = match self.get_page_once(url, encoding).await {
                Ok(page) => return Ok(page),
                Err(err) => err,
            };
            let Some(delay) = self.retry.next_delay(retries, &err) else {
                return Err(err);
            };
            retries += 1;
            tracing::warn!(
                %url,
                retry = retries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %err,
                "transient portal error; retrying after back-off"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Fetches a page exactly once.
    pub(crate) async fn get_page_once(
        &self,
        url: &Url,
        encoding: PageEncoding,
    ) -> Result<Page, ScraperError> {
        tracing::debug!(%url, ?encoding, "GET");
        let response = self.client.get(url.clone()).send().await?;
        read_page(response, encoding).await
    }

    /// Submits `form` with its current field values. Never retried.
    ///
    /// # Errors
    ///
    /// Same as [`PortalClient::get_page`], without the retries.
    pub async fn submit_form(
        &self,
        form: &HtmlForm,
        encoding: PageEncoding,
    ) -> Result<Page, ScraperError> {
        tracing::debug!(action = %form.action(), method = %form.method(), "submitting form");
        let request = if *form.method() == Method::GET {
            self.client.get(form.action().clone()).query(form.fields())
        } else {
            self.client.post(form.action().clone()).form(form.fields())
        };
        let response = request.send().await?;
        read_page(response, encoding).await
    }
}

async fn read_page(
    response: reqwest::Response,
    encoding: PageEncoding,
) -> Result<Page, ScraperError> {
    let status = response.status();
    let url = response.url().clone();

    if status == StatusCode::NOT_FOUND {
        return Err(ScraperError::NotFound {
            url: url.to_string(),
        });
    }

    if !status.is_success() {
        return Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = match encoding {
        PageEncoding::ShiftJis => {
            let bytes = response.bytes().await?;
            let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(&bytes);
            if had_errors {
                tracing::debug!(%url, "page has bytes outside Shift_JIS; replaced");
            }
            text.into_owned()
        }
        PageEncoding::Auto => response.text().await?,
    };

    Ok(Page::new(url, body))
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, ScraperError> {
    Url::parse(raw).map_err(|e| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
