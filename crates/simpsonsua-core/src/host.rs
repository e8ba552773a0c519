//! Host collaborator interfaces
//!
//! The media-center host owns settings storage, user notifications and the
//! generic stream extractor. The plugin only consumes them through these
//! traits.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

/// Settings key holding the site login name
pub const LOGIN_SETTING: &str = "simpsons_login";

/// Settings key holding the site password
pub const PASSWORD_SETTING: &str = "simpsons_password";

/// String-valued settings provided by the host
pub trait SettingsStore: Send + Sync {
    /// Look up a setting, returning an empty string when it is unset.
    fn get_string(&self, key: &str) -> String;
}

impl SettingsStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_default()
    }
}

/// User-visible notification channel
pub trait Notifier: Send + Sync {
    fn notify(&self, heading: &str, message: &str);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, heading: &str, message: &str) {
        tracing::info!(heading, notice = message, "user notice");
    }
}

/// Host capability turning an embedded player URL into a playable stream
#[async_trait]
pub trait SourceExtractor: Send + Sync {
    /// Extract a playable stream URL from `url`.
    ///
    /// Implementations report failures as [`crate::SimpsonsError::Extraction`].
    async fn extract_source(&self, url: &str) -> Result<String>;
}
