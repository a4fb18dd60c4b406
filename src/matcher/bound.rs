use std::sync::Arc;

use super::result::{MatchResult, Matches};
use super::search;
use crate::color::ColorInput;
use crate::config::MatcherConfig;
use crate::error::ColorError;
use crate::palette::Palette;

/// A bare query function bound to one palette.
pub type QueryFn =
    dyn for<'a> Fn(ColorInput<'a>, usize) -> Result<Matches, ColorError> + Send + Sync + 'static;

/// A palette bound to the nearest-match search.
///
/// The palette is shared and never mutated, so clones can be queried from
/// any number of threads at once.
#[derive(Debug, Clone)]
pub struct Matcher {
    palette: Arc<Palette>,
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(palette: Palette, config: MatcherConfig) -> Self {
        Self {
            palette: Arc::new(palette),
            config,
        }
    }

    /// Counted search; see [`find`](crate::matcher::find).
    pub fn find<'a>(
        &self,
        query: impl Into<ColorInput<'a>>,
        count: usize,
    ) -> Result<Matches, ColorError> {
        search::find(query, &self.palette, count)
    }

    pub fn nearest<'a>(
        &self,
        query: impl Into<ColorInput<'a>>,
    ) -> Result<Option<MatchResult>, ColorError> {
        search::nearest(query, &self.palette)
    }

    pub fn nearest_n<'a>(
        &self,
        query: impl Into<ColorInput<'a>>,
        count: usize,
    ) -> Result<Vec<MatchResult>, ColorError> {
        search::nearest_n(query, &self.palette, count)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Field selectors the palette was ingested with.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Turns the matcher into a plain `(query, count)` function.
    pub fn into_fn(self) -> Box<QueryFn> {
        Box::new(move |query: ColorInput<'_>, count: usize| self.find(query, count))
    }
}
