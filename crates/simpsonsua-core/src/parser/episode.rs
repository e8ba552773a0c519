//! Episode detail page parser for simpsonsua.tv
//!
//! Parses the episode title, synopsis blocks, the VIP subscription marker
//! and the embedded players (`#Player1`, `#Player2`).

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, SimpsonsError};
use crate::types::{EpisodePage, PlayerSource};

use super::text::title_case;

/// Player slots present on episode pages
const PLAYER_SLOTS: [u8; 2] = [1, 2];

/// Parse an episode detail page.
///
/// # Arguments
/// * `html` - Raw HTML content of the episode page
///
/// # Returns
/// * `Ok(EpisodePage)`; a page without players yields empty `sources`
/// * `Err(SimpsonsError)` if a selector cannot be built
pub fn parse_episode_page(html: &str) -> Result<EpisodePage> {
    let document = Html::parse_document(html);

    let title = parse_title(&document);

    let fullstory_selector = parse_selector("div.fullstory")?;
    let blocks: Vec<String> = document
        .select(&fullstory_selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    let subtitle = blocks.first().cloned().unwrap_or_default();
    let description = blocks.iter().skip(1).cloned().collect::<Vec<_>>().join("\n");

    let subscribe_selector = parse_selector(r#".fullnews center a[href*="subscribe.html"]"#)?;
    let subscription_required = document.select(&subscribe_selector).next().is_some();

    let plot = format!("{}\n{}", subtitle, description);
    let mut sources = Vec::new();

    for index in PLAYER_SLOTS {
        let selector = parse_selector(&format!("#Player{} iframe", index))?;
        let Some(source_url) = document
            .select(&selector)
            .next()
            .and_then(|iframe| iframe_source(&iframe))
        else {
            continue;
        };

        sources.push(PlayerSource {
            index,
            source_url,
            plot: plot.clone(),
            label: format!("Джерело {} - {}", index, title),
        });
    }

    tracing::debug!(
        players = sources.len(),
        subscription_required,
        "parsed episode page"
    );

    Ok(EpisodePage {
        title,
        subtitle,
        description,
        subscription_required,
        sources,
    })
}

/// Episode title from `div.poster.pinktext`, falling back to `div.poster > h2`.
fn parse_title(document: &Html) -> String {
    ["div.poster.pinktext", "div.poster > h2"]
        .iter()
        .filter_map(|sel| Selector::parse(sel).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .next()
                .map(|el| title_case(&el.text().collect::<String>()))
        })
        .unwrap_or_default()
}

fn iframe_source(iframe: &ElementRef) -> Option<String> {
    iframe.value().attr("src").map(str::to_string)
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SimpsonsError::ParseError(format!("Invalid selector {}: {:?}", selector, e)))
}
