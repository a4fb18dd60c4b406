use super::distance::euclidean_distance;
use super::result::{MatchResult, Matches};
use crate::color::{parse_color, ColorInput, Rgb};
use crate::error::ColorError;
use crate::palette::Palette;

/// Scores every palette entry against `query` and sorts them, closest
/// first.
///
/// The sort is stable, so entries at exactly the same distance keep their
/// palette order.
pub fn rank(query: Rgb, palette: &Palette) -> Vec<MatchResult> {
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("Ranking {query} against {} palette entries", palette.len());
    }
    let mut results: Vec<MatchResult> = palette
        .iter()
        .map(|spec| MatchResult::from_spec(spec, euclidean_distance(&query, &spec.rgb)))
        .collect();
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results
}

/// Closest palette entry to `query`, or `None` for an empty palette.
pub fn nearest<'a>(
    query: impl Into<ColorInput<'a>>,
    palette: &Palette,
) -> Result<Option<MatchResult>, ColorError> {
    let query = parse_color(query)?;
    Ok(rank(query, palette).into_iter().next())
}

/// Up to `count` palette entries, closest first. Never pads.
pub fn nearest_n<'a>(
    query: impl Into<ColorInput<'a>>,
    palette: &Palette,
    count: usize,
) -> Result<Vec<MatchResult>, ColorError> {
    let query = parse_color(query)?;
    let mut ranked = rank(query, palette);
    ranked.truncate(count);
    Ok(ranked)
}

/// Counted search: a single best match for `count <= 1`, otherwise a
/// ranked list of at most `count` entries.
pub fn find<'a>(
    query: impl Into<ColorInput<'a>>,
    palette: &Palette,
    count: usize,
) -> Result<Matches, ColorError> {
    if count <= 1 {
        nearest(query, palette).map(Matches::Single)
    } else {
        nearest_n(query, palette, count).map(Matches::Ranked)
    }
}
