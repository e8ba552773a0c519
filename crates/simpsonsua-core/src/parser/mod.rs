//! HTML parsers for simpsonsua.tv pages
//!
//! This module contains parsers for extracting data from site pages:
//! - `tiles`: Parse listing pages into cards
//! - `episode`: Parse episode detail pages
//! - `text`: Casing helpers shared by both

pub mod episode;
pub mod text;
pub mod tiles;

// Re-export main parsing functions
pub use episode::parse_episode_page;
pub use text::{capitalize, title_case};
pub use tiles::{parse_season_episode, parse_tiles};
