//! SimpsonsUA Plugin Core Library
//!
//! This crate provides the scraping and menu logic of a media-center plugin
//! for simpsonsua.tv, a Ukrainian-language site with The Simpsons episodes.
//!
//! # Features
//! - Authenticated, lazily created HTTP session shared by all fetches
//! - Listing page parsing with season/episode inference from link slugs
//! - Episode page parsing with player sources and the VIP marker
//! - Host-facing routes returning menu nodes with deferred actions
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use simpsonsua_core::{LogNotifier, Result, SimpsonsPlugin, SimpsonsScraper, SourceExtractor};
//!
//! struct Passthrough;
//!
//! #[async_trait]
//! impl SourceExtractor for Passthrough {
//!     async fn extract_source(&self, url: &str) -> Result<String> {
//!         Ok(url.to_string())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut settings = HashMap::new();
//!     settings.insert("simpsons_login".to_string(), "homer".to_string());
//!     settings.insert("simpsons_password".to_string(), "donut".to_string());
//!
//!     let scraper = SimpsonsScraper::new(Arc::new(settings))?;
//!     let plugin = SimpsonsPlugin::new(scraper, Arc::new(Passthrough), Arc::new(LogNotifier));
//!
//!     for node in plugin.root("video").await? {
//!         println!("{}", node.label);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod host;
pub mod menu;
pub mod parser;
pub mod plugin;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, SimpsonsClient, SITE_BASE_URL};
pub use error::{Result, SimpsonsError};
pub use host::{LogNotifier, Notifier, SettingsStore, SourceExtractor};
pub use plugin::SimpsonsPlugin;
pub use scraper::{SimpsonsScraper, ROOT_LISTING_PATH};
pub use types::{
    Action, Activation, EpisodeListing, EpisodePage, MenuNode, Notice, PlayerSource, Tile,
    TileKind,
};
