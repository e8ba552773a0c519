//! Data types for the SimpsonsUA plugin
//!
//! This module contains the records extracted from site pages and the menu
//! structures handed to the host. All types implement Serialize and
//! Deserialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// Kind of listing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Card links to another listing page (URL ends with `/`)
    List,
    /// Card links to an episode detail page
    Episode,
}

impl TileKind {
    /// Classify a card by its link target.
    ///
    /// # Examples
    /// ```
    /// use simpsonsua_core::TileKind;
    ///
    /// assert_eq!(TileKind::from_url("/multserialy/sezon-2/"), TileKind::List);
    /// assert_eq!(TileKind::from_url("/12-3-sezon-5-seriya.html"), TileKind::Episode);
    /// ```
    pub fn from_url(url: &str) -> Self {
        if url.ends_with('/') {
            TileKind::List
        } else {
            TileKind::Episode
        }
    }
}

/// One card extracted from a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Whether the card opens a sub-listing or an episode
    pub kind: TileKind,
    /// Display label, including the season/episode prefix if any
    pub label: String,
    /// Link target as it appears on the page
    pub url: String,
    /// Absolute thumbnail URL
    pub thumbnail_url: String,
    /// Card description, empty when the card has none
    pub description: String,
    /// Season number inferred from the link
    pub season: Option<u32>,
    /// Episode number inferred from the link
    pub episode: Option<u32>,
}

/// An embedded player found on an episode page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSource {
    /// Player slot (1 or 2)
    pub index: u8,
    /// iframe `src` attribute
    pub source_url: String,
    /// Subtitle and description joined by a newline
    pub plot: String,
    /// Display label (`Джерело {index} - {title}`)
    pub label: String,
}

/// Parsed episode detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodePage {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// The page links to the subscription page from its news block
    pub subscription_required: bool,
    /// Player sources in slot order
    pub sources: Vec<PlayerSource>,
}

/// User-visible notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub heading: String,
    pub message: String,
}

/// Deferred host callback carried by a menu node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Action {
    /// Open a listing page
    ListTiles { url: String, prefix: String },
    /// Open an episode detail page
    EpisodeInfo { url: String },
    /// Resolve a player source into a playable stream
    PlayVideo { url: String },
}

/// Navigable menu entry exposed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub label: String,
    /// Thumbnail art URL
    pub thumb: Option<String>,
    pub plot: String,
    pub action: Action,
}

/// Result of opening an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeListing {
    /// One playable leaf per player slot found
    Sources(Vec<MenuNode>),
    /// No player on the page; carries the notice shown to the user, if any
    Unavailable { notice: Option<Notice> },
}

impl EpisodeListing {
    /// Playable leaves, empty when the episode is unavailable
    pub fn leaves(&self) -> &[MenuNode] {
        match self {
            EpisodeListing::Sources(nodes) => nodes,
            EpisodeListing::Unavailable { .. } => &[],
        }
    }
}

/// Outcome of activating a menu node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Listing(Vec<MenuNode>),
    Episode(EpisodeListing),
    /// Playable stream URL returned by the host extractor
    Playback(String),
}
