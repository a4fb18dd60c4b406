#[path = "matcher/distance.rs"]
mod distance;

#[path = "matcher/result.rs"]
mod result;

#[path = "matcher/search.rs"]
mod search;

#[path = "matcher/bound.rs"]
mod bound;

#[path = "matcher/builder.rs"]
mod builder;


pub use bound::{Matcher, QueryFn};
pub use builder::{build_matcher, MatcherBuilder};
pub use distance::{euclidean_distance, squared_distance};
pub use result::{MatchResult, Matches};
pub use search::{find, nearest, nearest_n, rank};
