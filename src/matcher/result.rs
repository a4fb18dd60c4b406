use serde::Serialize;

use crate::color::Rgb;
use crate::palette::ColorSpec;

/// One ranked palette entry returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Entry name, or its source string when the entry has none
    pub name: String,
    /// Color source string as supplied to the palette
    pub value: String,
    pub rgb: Rgb,
    /// Euclidean distance to the query
    pub distance: f64,
}

impl MatchResult {
    pub(crate) fn from_spec(spec: &ColorSpec, distance: f64) -> Self {
        Self {
            name: spec.label().to_string(),
            value: spec.source.clone(),
            rgb: spec.rgb,
            distance,
        }
    }
}

/// Outcome of a counted search.
///
/// A count of one or less yields the single best entry (absent for an
/// empty palette); larger counts yield up to that many entries, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Matches {
    Single(Option<MatchResult>),
    Ranked(Vec<MatchResult>),
}

impl Matches {
    /// The closest entry, whichever shape was returned.
    pub fn best(&self) -> Option<&MatchResult> {
        match self {
            Matches::Single(best) => best.as_ref(),
            Matches::Ranked(ranked) => ranked.first(),
        }
    }

    pub fn into_vec(self) -> Vec<MatchResult> {
        match self {
            Matches::Single(best) => best.into_iter().collect(),
            Matches::Ranked(ranked) => ranked,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> MatchResult {
        MatchResult {
            name: "yellow".to_string(),
            value: "#ff0".to_string(),
            rgb: Rgb::new(255, 255, 0),
            distance: 17.0,
        }
    }

    #[test]
    fn serializes_in_the_public_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "yellow",
                "value": "#ff0",
                "rgb": { "r": 255, "g": 255, "b": 0 },
                "distance": 17.0
            })
        );
    }

    #[test]
    fn single_and_ranked_serialize_untagged() {
        assert_eq!(serde_json::to_value(Matches::Single(None)).unwrap(), json!(null));
        let ranked = serde_json::to_value(Matches::Ranked(vec![sample()])).unwrap();
        assert!(ranked.is_array());
    }

    #[test]
    fn best_and_into_vec_cover_both_shapes() {
        assert_eq!(Matches::Single(Some(sample())).best(), Some(&sample()));
        assert_eq!(Matches::Ranked(Vec::new()).best(), None);
        assert!(Matches::Single(None).into_vec().is_empty());
        assert_eq!(Matches::Single(Some(sample())).into_vec(), vec![sample()]);
    }
}
