//! Tauri commands for the SimpsonsUA plugin
//!
//! This module contains all Tauri commands that can be invoked from the frontend.

use tauri::State;

use crate::PluginState;
use simpsonsua_core::{Action, Activation, EpisodeListing, MenuNode};

/// List the top-level series page.
///
/// # Arguments
/// * `content_type` - Host content type, e.g. "video"
///
/// # Returns
/// * `Ok(Vec<MenuNode>)` with one node per listing card
/// * `Err(String)` with error message if the page cannot be loaded
#[tauri::command]
pub async fn root(
    state: State<'_, PluginState>,
    content_type: Option<String>,
) -> Result<Vec<MenuNode>, String> {
    state
        .plugin()
        .root(content_type.as_deref().unwrap_or("video"))
        .await
        .map_err(|e| e.to_string())
}

/// List the cards of a listing page.
///
/// # Arguments
/// * `url` - Listing page link
/// * `prefix` - Optional text prepended to every label
#[tauri::command]
pub async fn list_tiles(
    state: State<'_, PluginState>,
    url: String,
    prefix: Option<String>,
) -> Result<Vec<MenuNode>, String> {
    state
        .plugin()
        .list_tiles(&url, prefix.as_deref().unwrap_or(""))
        .await
        .map_err(|e| e.to_string())
}

/// Open an episode page.
///
/// # Returns
/// * `Ok(EpisodeListing)` with playable leaves, or `Unavailable` with the
///   VIP notice when the episode needs a subscription
/// * `Err(String)` with error message if the page cannot be loaded
#[tauri::command]
pub async fn episode_info(
    state: State<'_, PluginState>,
    url: String,
) -> Result<EpisodeListing, String> {
    state
        .plugin()
        .episode_info(&url)
        .await
        .map_err(|e| e.to_string())
}

/// Resolve a player source into a playable stream URL.
///
/// The error message is already shortened for notifications.
#[tauri::command]
pub async fn play_video(state: State<'_, PluginState>, url: String) -> Result<String, String> {
    state
        .plugin()
        .play_video(&url)
        .await
        .map_err(|e| e.to_string())
}

/// Run the action bound to a menu node.
#[tauri::command]
pub async fn activate(
    state: State<'_, PluginState>,
    action: Action,
) -> Result<Activation, String> {
    state
        .plugin()
        .activate(&action)
        .await
        .map_err(|e| e.to_string())
}
