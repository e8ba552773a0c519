//! Authenticated HTTP session for simpsonsua.tv
//!
//! This module owns the one shared HTTP session used by every page fetch.
//! The session is created lazily: the first fetch builds a cookie-keeping
//! client and submits the login form with credentials from the host
//! settings. Later fetches reuse the same client and its cookies.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use url::Url;

use crate::error::{Result, SimpsonsError};
use crate::host::{SettingsStore, LOGIN_SETTING, PASSWORD_SETTING};

/// Base URL of the site
pub const SITE_BASE_URL: &str = "https://simpsonsua.tv/";

/// Login form endpoint, relative to the base URL
const LOGIN_PATH: &str = "/index.php?do=login";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the site HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site base URL (default: https://simpsonsua.tv/)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SITE_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for simpsonsua.tv holding the shared login session
///
/// Login happens at most once per client. A rejected login is not
/// detected: the site answers with a regular page and later fetches simply
/// see the anonymous content.
pub struct SimpsonsClient {
    config: ClientConfig,
    base_url: Url,
    settings: Arc<dyn SettingsStore>,
    session: OnceCell<reqwest::Client>,
}

impl SimpsonsClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid
    pub fn new(settings: Arc<dyn SettingsStore>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), settings)
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    /// * `settings` - Host settings providing the login credentials
    ///
    /// # Errors
    /// Returns `SimpsonsError::InvalidUrl` if `config.base_url` cannot be parsed
    pub fn with_config(config: ClientConfig, settings: Arc<dyn SettingsStore>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            config,
            base_url,
            settings,
            session: OnceCell::new(),
        })
    }

    /// Site base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a site-relative or absolute link against the base URL
    pub fn resolve(&self, link: &str) -> Result<Url> {
        Ok(self.base_url.join(link)?)
    }

    /// Whether the shared session has been created
    pub fn has_session(&self) -> bool {
        self.session.initialized()
    }

    /// Get the shared session, logging in on first use
    ///
    /// # Errors
    /// - `SimpsonsError::HttpError` - the client could not be built or the
    ///   login request could not be sent
    pub async fn session(&self) -> Result<&reqwest::Client> {
        self.session.get_or_try_init(|| self.login()).await
    }

    /// Build the session client and submit the login form
    async fn login(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .cookie_store(true)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()?;

        let login = self.settings.get_string(LOGIN_SETTING);
        let password = self.settings.get_string(PASSWORD_SETTING);
        let form = [
            ("login_name", login.as_str()),
            ("login_password", password.as_str()),
            ("submit", ""),
            ("login", "submit"),
        ];

        let url = self.resolve(LOGIN_PATH)?;
        tracing::info!(%url, user = %login, "logging in");

        let response = client.post(url).form(&form).send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "login request was not accepted, continuing anonymously");
        }

        Ok(client)
    }

    /// Fetch HTML content of a site page
    ///
    /// # Arguments
    /// * `link` - Site-relative path or absolute URL
    ///
    /// # Errors
    /// - `SimpsonsError::InvalidUrl` - link cannot be resolved
    /// - `SimpsonsError::NotFound` - server returned 404
    /// - `SimpsonsError::HttpError` - network error or other 4xx/5xx status
    /// - `SimpsonsError::UnexpectedStatus` - any other non-success status
    pub async fn fetch(&self, link: &str) -> Result<String> {
        let url = self.resolve(link)?;
        let session = self.session().await?;

        tracing::debug!(%url, "fetching page");
        let response = session.get(url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SimpsonsError::NotFound(url.to_string()));
        }

        match response.error_for_status() {
            Err(err) => Err(SimpsonsError::HttpError(err)),
            // 1xx and unfollowed 3xx responses
            Ok(_) => Err(SimpsonsError::UnexpectedStatus(status.as_u16())),
        }
    }
}
