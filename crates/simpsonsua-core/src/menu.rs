//! Menu node construction
//!
//! Maps scraped records onto host menu nodes. Listing cards open further
//! listings or episodes; player sources become playable leaves.

use crate::types::{Action, EpisodePage, MenuNode, Tile, TileKind};

/// Build the menu node for one listing card.
///
/// The plot holds the card description followed by the card link, or just
/// the link when the card has no description.
pub fn tile_node(tile: &Tile, prefix: &str) -> MenuNode {
    let plot = if tile.description.is_empty() {
        tile.url.clone()
    } else {
        format!("{}\n\n{}", tile.description, tile.url)
    };

    let action = match tile.kind {
        TileKind::List => Action::ListTiles {
            url: tile.url.clone(),
            prefix: String::new(),
        },
        TileKind::Episode => Action::EpisodeInfo {
            url: tile.url.clone(),
        },
    };

    MenuNode {
        label: format!("{}{}", prefix, tile.label),
        thumb: Some(tile.thumbnail_url.clone()),
        plot,
        action,
    }
}

/// Build menu nodes for a listing page, keeping card order.
pub fn tile_nodes(tiles: &[Tile], prefix: &str) -> Vec<MenuNode> {
    tiles.iter().map(|tile| tile_node(tile, prefix)).collect()
}

/// Build one playable leaf per player source of an episode page.
pub fn source_nodes(page: &EpisodePage) -> Vec<MenuNode> {
    page.sources
        .iter()
        .map(|source| MenuNode {
            label: source.label.clone(),
            thumb: None,
            plot: source.plot.clone(),
            action: Action::PlayVideo {
                url: source.source_url.clone(),
            },
        })
        .collect()
}
