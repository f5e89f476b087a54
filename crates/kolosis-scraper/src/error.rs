use std::fmt;

use thiserror::Error;

/// Step of the login handshake that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    /// Fetching the single-sign-on entry page.
    Handshake,
    /// Locating or submitting the credential form.
    LoginForm,
    /// Following the post-login link into the portal.
    PortalLink,
}

impl fmt::Display for AuthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthStage::Handshake => write!(f, "handshake"),
            AuthStage::LoginForm => write!(f, "login form"),
            AuthStage::PortalLink => write!(f, "portal link"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("authentication failed at {stage}: {reason}")]
    Authentication { stage: AuthStage, reason: String },
}

impl ScraperError {
    pub(crate) fn auth(stage: AuthStage, reason: impl fmt::Display) -> Self {
        ScraperError::Authentication {
            stage,
            reason: reason.to_string(),
        }
    }
}

/// Why a detail page could not supply its fields.
///
/// Never escapes the detail extractor: each variant is logged and turned
/// into an empty supplement so the listing row is still emitted.
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("detail fetch failed: {0}")]
    Fetch(#[from] ScraperError),

    #[error("row has no detail link")]
    MissingLink,

    #[error("detail link \"{href}\" carries no lecture number")]
    MalformedLink { href: String },

    #[error("detail page has no element matching `{selector}`")]
    MissingElement { selector: &'static str },
}
