//! Single-sign-on login handshake.
//!
//! 1. GET the sign-on entry URL.
//! 2. Fill the credential form (`action="/fw/dfw"`) and submit it.
//! 3. Follow the link whose text contains `KULASIS` into the portal.
//!
//! The session lives in the client's cookie store; nothing else is handed
//! back. No step is retried and any failure ends the run.

use kolosis_core::Credentials;

use crate::client::{HtmlForm, Page, PageEncoding, PortalClient};
use crate::error::{AuthStage, ScraperError};

/// `action` attribute of the credential form.
pub const LOGIN_FORM_ACTION: &str = "/fw/dfw";
pub const ACCOUNT_FIELD: &str = "ACCOUNTUID";
pub const PASSWORD_FIELD: &str = "PASSWORD";
/// Visible text of the post-login link into the syllabus portal.
pub const PORTAL_LINK_MARKER: &str = "KULASIS";

/// Proof that [`authenticate`] succeeded on a client.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    landing: Page,
}

impl AuthenticatedSession {
    /// The portal page reached after following the post-login link.
    #[must_use]
    pub fn landing(&self) -> &Page {
        &self.landing
    }
}

/// Runs the login handshake on `client`.
///
/// # Errors
///
/// Returns [`ScraperError::Authentication`] naming the failed
/// [`AuthStage`]; transport errors are folded into it.
pub async fn authenticate(
    client: &PortalClient,
    credentials: &Credentials,
) -> Result<AuthenticatedSession, ScraperError> {
    let result = handshake(client, credentials).await;
    match &result {
        Ok(session) => {
            tracing::info!(landing = %session.landing.url(), "authenticated");
        }
        Err(e) => {
            tracing::error!(error = %e, "authentication failed");
        }
    }
    result
}

async fn handshake(
    client: &PortalClient,
    credentials: &Credentials,
) -> Result<AuthenticatedSession, ScraperError> {
    tracing::debug!(url = %client.init_url(), "starting login handshake");
    let entry = client
        .get_page_once(client.init_url(), PageEncoding::Auto)
        .await
        .map_err(|e| ScraperError::auth(AuthStage::Handshake, e))?;

    let mut form = HtmlForm::find(&entry, LOGIN_FORM_ACTION).ok_or_else(|| {
        ScraperError::auth(
            AuthStage::LoginForm,
            format!("no form with action {LOGIN_FORM_ACTION} on {}", entry.url()),
        )
    })?;
    form.set(ACCOUNT_FIELD, &credentials.account);
    form.set(PASSWORD_FIELD, &credentials.password);

    let after_login = client
        .submit_form(&form, PageEncoding::Auto)
        .await
        .map_err(|e| ScraperError::auth(AuthStage::LoginForm, e))?;

    let portal_url = after_login.find_link(PORTAL_LINK_MARKER).ok_or_else(|| {
        ScraperError::auth(
            AuthStage::PortalLink,
            format!(
                "no link containing {PORTAL_LINK_MARKER:?} on {}",
                after_login.url()
            ),
        )
    })?;

    let landing = client
        .get_page_once(&portal_url, PageEncoding::Auto)
        .await
        .map_err(|e| ScraperError::auth(AuthStage::PortalLink, e))?;

    Ok(AuthenticatedSession { landing })
}
