//! Listing page parser for simpsonsua.tv
//!
//! Listing pages render every season, series or episode as a `figure` card
//! holding a thumbnail, a link and one or more `div.descr` text blocks.
//! Season and episode numbers are not marked up; they are inferred from the
//! transliterated link slug (`.../3-sezon-5-seriya.html`, `.../sezon-2/`).

use std::sync::LazyLock;

use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, SimpsonsError};
use crate::types::{Tile, TileKind};

use super::text::{capitalize, title_case};

static SEASON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:sezon|season)-([0-9]+)/$").expect("valid season regex"));

static SEASON_EPISODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)-(?:sezon|season)-([0-9]+)-(?:seriya|episode)")
        .expect("valid season/episode regex")
});

/// Numbering part of a slug, already shown by the label prefix
static NUMBERING_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[0-9]+-)?(?:sezon|season)-[0-9]+(?:-(?:seriya|episode))?")
        .expect("valid numbering slug regex")
});

static URL_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i).*/(?:[0-9]+-)?(.+)(?:/|\.html)").expect("valid slug regex")
});

static THUMBNAIL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i).*/(.*)\.jpg").expect("valid thumbnail regex"));

static CAMEL_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel case regex"));

/// Selectors used inside one card
struct CardSelectors {
    img: Selector,
    link: Selector,
    title: Selector,
    descr: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            img: parse_selector("img")?,
            link: parse_selector("a[href]")?,
            title: parse_selector("div.descr.nazva")?,
            descr: parse_selector("div.descr")?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SimpsonsError::ParseError(format!("Invalid selector {}: {:?}", selector, e)))
}

/// Parse listing cards from a listing page.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
/// * `base_url` - Site base URL used to make thumbnail sources absolute
///
/// # Returns
/// * `Ok(Vec<Tile>)` in document order, empty when the page has no cards
/// * `Err(SimpsonsError)` if a selector cannot be built
pub fn parse_tiles(html: &str, base_url: &Url) -> Result<Vec<Tile>> {
    let document = Html::parse_document(html);

    let figure_selector = parse_selector("figure")?;
    let selectors = CardSelectors::new()?;

    let tiles = document
        .select(&figure_selector)
        .filter_map(|figure| parse_card(&figure, &selectors, base_url))
        .collect::<Vec<_>>();

    tracing::debug!(count = tiles.len(), "parsed listing cards");
    Ok(tiles)
}

/// Parse one `figure` card, skipping cards without a usable image or link.
fn parse_card(figure: &ElementRef, selectors: &CardSelectors, base_url: &Url) -> Option<Tile> {
    let src = figure.select(&selectors.img).next()?.value().attr("src")?;
    if src.is_empty() {
        return None;
    }

    let url = figure
        .select(&selectors.link)
        .next()?
        .value()
        .attr("href")?
        .to_string();

    let thumbnail_url = base_url
        .join(src)
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", base_url, src));

    let (season, episode) = parse_season_episode(&url);

    let name = card_title(figure, selectors)
        .or_else(|| label_from_url(&url))
        .or_else(|| label_from_thumbnail(&thumbnail_url))
        .unwrap_or_default();
    let label = compose_label(&numbering_prefix(season, episode), &name);

    let description = card_description(figure, selectors);

    Some(Tile {
        kind: TileKind::from_url(&url),
        label,
        url,
        thumbnail_url,
        description,
        season,
        episode,
    })
}

/// Infer season and episode numbers from a card link.
///
/// A `...N-sezon-M-seriya...` slug wins over a trailing `.../sezon-N/`.
///
/// # Examples
/// ```
/// use simpsonsua_core::parser::parse_season_episode;
///
/// assert_eq!(parse_season_episode("/3-sezon-5-seriya.html"), (Some(3), Some(5)));
/// assert_eq!(parse_season_episode("/multserialy/sezon-2/"), (Some(2), None));
/// assert_eq!(parse_season_episode("/about.html"), (None, None));
/// ```
pub fn parse_season_episode(url: &str) -> (Option<u32>, Option<u32>) {
    let mut season = None;
    let mut episode = None;

    if let Some(caps) = SEASON_RE.captures(url) {
        season = caps.get(1).and_then(|m| m.as_str().parse().ok());
    }

    if let Some(caps) = SEASON_EPISODE_RE.captures(url) {
        season = caps.get(1).and_then(|m| m.as_str().parse().ok());
        episode = caps.get(2).and_then(|m| m.as_str().parse().ok());
    }

    (season, episode)
}

/// Label prefix for the inferred numbering (`S03E05 - `, `Season 02 `).
fn numbering_prefix(season: Option<u32>, episode: Option<u32>) -> String {
    match (season, episode) {
        (Some(season), Some(episode)) => format!("S{:02}E{:02} - ", season, episode),
        (Some(season), None) => format!("Season {:02} ", season),
        _ => String::new(),
    }
}

/// Join prefix and name; a bare prefix loses its trailing separator.
fn compose_label(prefix: &str, name: &str) -> String {
    if name.is_empty() {
        prefix.trim_end_matches([' ', '-']).to_string()
    } else {
        format!("{}{}", prefix, name)
    }
}

/// Card title from `div.descr.nazva`, trimmed and capitalized.
fn card_title(figure: &ElementRef, selectors: &CardSelectors) -> Option<String> {
    let text = figure.select(&selectors.title).next()?.text().collect::<String>();
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(capitalize(text))
    }
}

/// Text of the last `div.descr` block of the card.
///
/// Surrounding whitespace from the page markup is trimmed, so indented
/// templates do not leak newlines into the plot.
fn card_description(figure: &ElementRef, selectors: &CardSelectors) -> String {
    figure
        .select(&selectors.descr)
        .last()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Synthesize a label from the last path segment of a link.
///
/// `/multserialy/12-my-title-here.html` becomes `My Title Here`. Season and
/// episode numbering is dropped from the slug since the label prefix already
/// carries it, so `/3-sezon-5-seriya.html` yields an empty name.
fn label_from_url(url: &str) -> Option<String> {
    let slug = URL_SLUG_RE.captures(url)?.get(1)?.as_str();
    let slug = NUMBERING_SLUG_RE.replace_all(slug, "");
    Some(humanize_slug(slug.trim_matches('-')))
}

/// Synthesize a label from a thumbnail file name.
fn label_from_thumbnail(thumbnail_url: &str) -> Option<String> {
    let name = THUMBNAIL_NAME_RE.captures(thumbnail_url)?.get(1)?.as_str();
    Some(humanize_slug(name))
}

/// Turn `my-title` or `MyTitle` into `My Title`.
fn humanize_slug(slug: &str) -> String {
    let spaced = CAMEL_CASE_RE.replace_all(slug, "$1 $2");
    title_case(&spaced.replace('-', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> Url {
        Url::parse("https://simpsonsua.tv/").unwrap()
    }

    fn card(href: &str, src: &str, descr: &str) -> String {
        format!(
            r#"<figure><a href="{href}"><img src="{src}"></a>{descr}</figure>"#,
            href = href,
            src = src,
            descr = descr
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body><div class=\"list\">{}</div></body></html>", cards.concat())
    }

    #[test]
    fn test_parse_tiles_empty() {
        let result = parse_tiles("<html><body></body></html>", &base()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_tiles_document_order_and_skips_empty_image() {
        let html = page(&[
            card("/sezon-1/", "uploads/s1.jpg", r#"<div class="descr nazva">сезон перший</div>"#),
            card("/sezon-2/", "", r#"<div class="descr nazva">пропущено</div>"#),
            card("/sezon-3/", "uploads/s3.jpg", r#"<div class="descr nazva">сезон третій</div>"#),
        ]);

        let tiles = parse_tiles(&html, &base()).unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].url, "/sezon-1/");
        assert_eq!(tiles[1].url, "/sezon-3/");
    }

    #[test]
    fn test_parse_tiles_skips_cards_without_image_or_link() {
        let html = page(&[
            "<figure><a href=\"/sezon-1/\">no image</a></figure>".to_string(),
            "<figure><img src=\"uploads/x.jpg\"></figure>".to_string(),
        ]);

        assert!(parse_tiles(&html, &base()).unwrap().is_empty());
    }

    #[test]
    fn test_episode_card() {
        let html = page(&[card(
            "https://simpsonsua.tv/multserialy-ukrainskoyu/120-3-sezon-5-seriya.html",
            "uploads/posters/s03e05.jpg",
            r#"<div class="descr nazva">вечір у мо</div><div class="descr">Гомер іде до бару.</div>"#,
        )]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.kind, TileKind::Episode);
        assert_eq!(tile.season, Some(3));
        assert_eq!(tile.episode, Some(5));
        assert_eq!(tile.label, "S03E05 - Вечір у мо");
        assert_eq!(tile.thumbnail_url, "https://simpsonsua.tv/uploads/posters/s03e05.jpg");
        assert_eq!(tile.description, "Гомер іде до бару.");
    }

    #[test]
    fn test_season_card() {
        let html = page(&[card(
            "/multserialy-ukrainskoyu/sezon-2/",
            "uploads/s2.jpg",
            r#"<div class="descr nazva">другий сезон</div>"#,
        )]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.kind, TileKind::List);
        assert_eq!(tile.season, Some(2));
        assert_eq!(tile.episode, None);
        assert_eq!(tile.label, "Season 02 Другий сезон");
        // the title block is the only descr block
        assert_eq!(tile.description, "другий сезон");
    }

    #[test]
    fn test_card_text_is_trimmed() {
        let html = page(&[card(
            "/multfilmy/",
            "uploads/movie.jpg",
            "<div class=\"descr nazva\">\n    повнометражні\n  </div>\n<div class=\"descr\">\n    Сім'я їде у відпустку.\n  </div>",
        )]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.label, "Повнометражні");
        assert_eq!(tile.description, "Сім'я їде у відпустку.");
    }

    #[test]
    fn test_plain_card_without_numbering() {
        let html = page(&[card(
            "/multfilmy/",
            "uploads/movie.jpg",
            r#"<div class="descr nazva">повнометражні</div>"#,
        )]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.season, None);
        assert_eq!(tile.episode, None);
        assert_eq!(tile.label, "Повнометражні");
    }

    #[test]
    fn test_label_synthesized_from_url() {
        let html = page(&[card("/multfilmy/12-my-title-here.html", "uploads/x.jpg", "")]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.label, "My Title Here");
        assert_eq!(tile.description, "");
        assert_eq!(tile.kind, TileKind::Episode);
    }

    #[test]
    fn test_label_synthesized_from_list_url_with_camel_case() {
        let html = page(&[card("/TreehouseOfHorror/", "uploads/x.jpg", "")]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.label, "Treehouse Of Horror");
    }

    #[test]
    fn test_label_synthesized_from_thumbnail() {
        let html = page(&[card("watch", "uploads/bart-the-genius.jpg", "")]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.label, "Bart The Genius");
    }

    #[test]
    fn test_synthesized_label_gets_numbering_prefix() {
        let html = page(&[card("/3-sezon-5-seriya.html", "uploads/x.jpg", "")]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.label, "S03E05");
    }

    #[test]
    fn test_parse_tiles_is_deterministic() {
        let html = page(&[
            card("/sezon-1/", "uploads/s1.jpg", r#"<div class="descr nazva">один</div>"#),
            card("/1-sezon-2-seriya.html", "uploads/e2.jpg", r#"<div class="descr">опис</div>"#),
        ]);

        assert_eq!(parse_tiles(&html, &base()).unwrap(), parse_tiles(&html, &base()).unwrap());
    }

    #[test]
    fn test_parse_season_episode_patterns() {
        assert_eq!(parse_season_episode(".../3-sezon-5-seriya"), (Some(3), Some(5)));
        assert_eq!(parse_season_episode(".../sezon-2/"), (Some(2), None));
        assert_eq!(parse_season_episode("/simpsons-4-Season-7-Episode.html"), (Some(4), Some(7)));
        assert_eq!(parse_season_episode("/120-3-sezon-5-seriya.html"), (Some(3), Some(5)));
        assert_eq!(parse_season_episode("/SEASON-10/"), (Some(10), None));
        assert_eq!(parse_season_episode("/sezon-2/index.html"), (None, None));
        assert_eq!(parse_season_episode("/multfilmy/"), (None, None));
    }

    #[test]
    fn test_numbering_prefix() {
        assert_eq!(numbering_prefix(Some(3), Some(5)), "S03E05 - ");
        assert_eq!(numbering_prefix(Some(12), Some(110)), "S12E110 - ");
        assert_eq!(numbering_prefix(Some(2), None), "Season 02 ");
        assert_eq!(numbering_prefix(None, None), "");
    }

    #[test]
    fn test_label_from_url() {
        assert_eq!(label_from_url("/multfilmy/12-my-title-here.html"), Some("My Title Here".to_string()));
        assert_eq!(label_from_url("/multfilmy/simpsonsMovie/"), Some("Simpsons Movie".to_string()));
        assert_eq!(label_from_url("no-slash"), None);
        assert_eq!(label_from_url("/78-2-sezon-2-seriya.html"), Some(String::new()));
        assert_eq!(
            label_from_url("/simpsons-3-sezon-5-seriya.html"),
            Some("Simpsons".to_string())
        );
        assert_eq!(label_from_url("/multserialy/sezon-2/"), Some(String::new()));
    }

    #[test]
    fn test_untitled_season_card_keeps_only_numbering() {
        let html = page(&[card("/multserialy/sezon-2/", "uploads/s2.jpg", "")]);

        let tile = parse_tiles(&html, &base()).unwrap().remove(0);

        assert_eq!(tile.label, "Season 02");
    }

    #[test]
    fn test_compose_label() {
        assert_eq!(compose_label("S03E05 - ", "Вечір у мо"), "S03E05 - Вечір у мо");
        assert_eq!(compose_label("S03E05 - ", ""), "S03E05");
        assert_eq!(compose_label("Season 02 ", ""), "Season 02");
        assert_eq!(compose_label("", "My Title"), "My Title");
    }

    proptest! {
        #[test]
        fn prop_episode_slug_numbers_are_recovered(season in 0u32..100, episode in 0u32..1000) {
            let url = format!("/multserialy-ukrainskoyu/{}-sezon-{}-seriya.html", season, episode);
            prop_assert_eq!(parse_season_episode(&url), (Some(season), Some(episode)));
        }

        #[test]
        fn prop_kind_follows_trailing_slash(path in "/[a-z0-9\\-]{1,20}/?") {
            let html = format!(r#"<figure><a href="{}"><img src="a.jpg"></a></figure>"#, path);
            let tiles = parse_tiles(&html, &Url::parse("https://simpsonsua.tv/").unwrap()).unwrap();
            let expected = if path.ends_with('/') { TileKind::List } else { TileKind::Episode };
            prop_assert_eq!(tiles[0].kind, expected);
        }
    }
}
