/// Portal login. Held only for the duration of one fetch; never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub detail_concurrency: usize,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
