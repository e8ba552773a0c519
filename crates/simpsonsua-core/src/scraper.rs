//! Page-level scraping API for simpsonsua.tv
//!
//! This module combines the session client with the parsers: it fetches a
//! listing or episode page and returns the extracted records.

use std::sync::Arc;

use crate::client::{ClientConfig, SimpsonsClient};
use crate::error::Result;
use crate::host::SettingsStore;
use crate::parser::{parse_episode_page, parse_tiles};
use crate::types::{EpisodePage, Tile};

/// Site-relative path of the top-level series listing
pub const ROOT_LISTING_PATH: &str = "/multserialy-ukrainskoyu/";

/// Scraper for simpsonsua.tv listing and episode pages
///
/// # Example
/// ```no_run
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use simpsonsua_core::{SimpsonsScraper, ROOT_LISTING_PATH};
///
/// # async fn example() -> Result<(), simpsonsua_core::SimpsonsError> {
/// let scraper = SimpsonsScraper::new(Arc::new(HashMap::new()))?;
/// for tile in scraper.load_tiles(ROOT_LISTING_PATH).await? {
///     println!("{} -> {}", tile.label, tile.url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SimpsonsScraper {
    client: SimpsonsClient,
}

impl SimpsonsScraper {
    /// Create a new scraper against the live site.
    ///
    /// # Errors
    /// Returns an error if the client cannot be created.
    pub fn new(settings: Arc<dyn SettingsStore>) -> Result<Self> {
        let client = SimpsonsClient::new(settings)?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration.
    pub fn with_config(config: ClientConfig, settings: Arc<dyn SettingsStore>) -> Result<Self> {
        let client = SimpsonsClient::with_config(config, settings)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a pre-built client.
    pub fn with_client(client: SimpsonsClient) -> Self {
        Self { client }
    }

    /// Underlying session client
    pub fn client(&self) -> &SimpsonsClient {
        &self.client
    }

    /// Load listing cards from a listing page.
    ///
    /// # Arguments
    /// * `url` - Site-relative path or absolute URL of the listing page
    ///
    /// # Returns
    /// * `Ok(Vec<Tile>)` in document order; empty when the page has no cards
    /// * `Err(SimpsonsError)` if the page cannot be fetched
    pub async fn load_tiles(&self, url: &str) -> Result<Vec<Tile>> {
        let html = self.client.fetch(url).await?;
        parse_tiles(&html, self.client.base_url())
    }

    /// Load and parse an episode detail page.
    ///
    /// # Arguments
    /// * `url` - Site-relative path or absolute URL of the episode page
    ///
    /// # Returns
    /// * `Ok(EpisodePage)`; `sources` is empty when no player is embedded
    /// * `Err(SimpsonsError)` if the page cannot be fetched
    pub async fn episode_page(&self, url: &str) -> Result<EpisodePage> {
        let html = self.client.fetch(url).await?;
        parse_episode_page(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimpsonsError;
    use std::collections::HashMap;

    #[test]
    fn test_scraper_creation() {
        let scraper = SimpsonsScraper::new(Arc::new(HashMap::new()));
        assert!(scraper.is_ok());
    }

    #[tokio::test]
    async fn test_load_tiles_invalid_link() {
        let config = ClientConfig {
            base_url: "data:text/plain,simpsons".to_string(),
            ..ClientConfig::default()
        };
        let scraper = SimpsonsScraper::with_config(config, Arc::new(HashMap::new())).unwrap();

        let result = scraper.load_tiles("/multserialy-ukrainskoyu/").await;

        match result {
            Err(SimpsonsError::InvalidUrl(_)) => {}
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
        assert!(!scraper.client().has_session());
    }
}
