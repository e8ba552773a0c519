//! Plugin routes exposed to the media-center host
//!
//! The host calls one route per navigation step: `root`, `list_tiles`,
//! `episode_info` and `play_video`. Menu nodes carry an [`Action`] that the
//! host hands back through [`SimpsonsPlugin::activate`] when the user
//! selects the node.

use std::sync::Arc;

use crate::error::{Result, SimpsonsError};
use crate::host::{Notifier, SourceExtractor};
use crate::menu::{source_nodes, tile_nodes};
use crate::scraper::{SimpsonsScraper, ROOT_LISTING_PATH};
use crate::types::{Action, Activation, EpisodeListing, MenuNode, Notice};

/// Maximum number of characters kept from a playback error message
const PLAYBACK_ERROR_MAX_CHARS: usize = 50;

/// Heading of the VIP-only notice
const VIP_NOTICE_HEADING: &str = "Доу!";

/// Message of the VIP-only notice
const VIP_NOTICE_MESSAGE: &str = "Серія доступна лише Vip користувачам!";

/// Route handlers of the simpsonsua.tv plugin
pub struct SimpsonsPlugin {
    scraper: SimpsonsScraper,
    extractor: Arc<dyn SourceExtractor>,
    notifier: Arc<dyn Notifier>,
}

impl SimpsonsPlugin {
    pub fn new(
        scraper: SimpsonsScraper,
        extractor: Arc<dyn SourceExtractor>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            scraper,
            extractor,
            notifier,
        }
    }

    pub fn scraper(&self) -> &SimpsonsScraper {
        &self.scraper
    }

    /// Root route listing the top-level series page.
    ///
    /// `content_type` is passed by the host and currently unused.
    pub async fn root(&self, content_type: &str) -> Result<Vec<MenuNode>> {
        tracing::debug!(content_type, "opening root listing");
        self.list_tiles(ROOT_LISTING_PATH, "").await
    }

    /// List the cards of a listing page as menu nodes.
    ///
    /// # Arguments
    /// * `url` - Listing page link
    /// * `prefix` - Text prepended to every node label
    pub async fn list_tiles(&self, url: &str, prefix: &str) -> Result<Vec<MenuNode>> {
        let tiles = self.scraper.load_tiles(url).await?;
        Ok(tile_nodes(&tiles, prefix))
    }

    /// Open an episode page and list its player sources.
    ///
    /// A page without players is not an error: the result is
    /// [`EpisodeListing::Unavailable`], and when the page asks for a VIP
    /// subscription the user is notified as well.
    pub async fn episode_info(&self, url: &str) -> Result<EpisodeListing> {
        let page = self.scraper.episode_page(url).await?;

        if !page.sources.is_empty() {
            return Ok(EpisodeListing::Sources(source_nodes(&page)));
        }

        let notice = page.subscription_required.then(|| Notice {
            heading: VIP_NOTICE_HEADING.to_string(),
            message: VIP_NOTICE_MESSAGE.to_string(),
        });

        if let Some(notice) = &notice {
            self.notifier.notify(&notice.heading, &notice.message);
        }

        Ok(EpisodeListing::Unavailable { notice })
    }

    /// Resolve a player source into a playable stream through the host.
    ///
    /// # Errors
    /// `SimpsonsError::Playback` carrying the extractor's message cut to 50
    /// characters followed by `...`
    pub async fn play_video(&self, url: &str) -> Result<String> {
        self.extractor.extract_source(url).await.map_err(|err| {
            tracing::warn!(%url, error = %err, "source extraction failed");
            SimpsonsError::Playback(shorten_message(&err.to_string()))
        })
    }

    /// Run the route a menu node was bound to.
    pub async fn activate(&self, action: &Action) -> Result<Activation> {
        match action {
            Action::ListTiles { url, prefix } => {
                self.list_tiles(url, prefix).await.map(Activation::Listing)
            }
            Action::EpisodeInfo { url } => self.episode_info(url).await.map(Activation::Episode),
            Action::PlayVideo { url } => self.play_video(url).await.map(Activation::Playback),
        }
    }
}

/// Cut a message to its first 50 characters and append `...`.
fn shorten_message(message: &str) -> String {
    let head: String = message.chars().take(PLAYBACK_ERROR_MAX_CHARS).collect();
    format!("{}...", head)
}
