//! SimpsonsUA Plugin Tauri Integration
//!
//! This crate exposes the plugin routes as Tauri commands so a Tauri 2.0
//! application can act as the media-center host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use simpsonsua_tauri::PluginState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             let settings = Arc::new(HashMap::new());
//!             app.manage(PluginState::new(settings, Arc::new(MyExtractor))?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             simpsonsua_tauri::commands::root,
//!             simpsonsua_tauri::commands::list_tiles,
//!             simpsonsua_tauri::commands::episode_info,
//!             simpsonsua_tauri::commands::play_video,
//!             simpsonsua_tauri::commands::activate,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `root` - Top-level series listing
//! - `list_tiles` - Any listing page
//! - `episode_info` - Player sources of an episode
//! - `play_video` - Resolve a player source into a stream
//! - `activate` - Run the action bound to a menu node

pub mod commands;

use std::sync::Arc;

use simpsonsua_core::{LogNotifier, SettingsStore, SimpsonsPlugin, SimpsonsScraper, SourceExtractor};

/// Shared plugin state managed by Tauri.
///
/// The plugin's session is created once and guarded internally, so commands
/// may run concurrently without extra locking. Notices are written to the
/// log and also returned inside `EpisodeListing::Unavailable`.
pub struct PluginState {
    plugin: Arc<SimpsonsPlugin>,
}

impl PluginState {
    /// Create a new PluginState against the live site.
    ///
    /// # Errors
    /// Returns an error string if the scraper cannot be created.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        extractor: Arc<dyn SourceExtractor>,
    ) -> Result<Self, String> {
        let scraper = SimpsonsScraper::new(settings).map_err(|e| e.to_string())?;
        let plugin = SimpsonsPlugin::new(scraper, extractor, Arc::new(LogNotifier));
        Ok(Self {
            plugin: Arc::new(plugin),
        })
    }

    /// Get a reference to the inner plugin.
    pub fn plugin(&self) -> &Arc<SimpsonsPlugin> {
        &self.plugin
    }
}
