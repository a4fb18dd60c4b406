//! Nearest-color matching against caller-supplied palettes.
//!
//! Colors may be given as hex strings (`#f80`, `#ff8800`), `rgb(...)`
//! strings with integer or percentage components, basic CSS names, or raw
//! [`Rgb`] triples. A [`Palette`] is built from either a name to color
//! mapping or an array of records, and a [`Matcher`] ranks its entries by
//! Euclidean distance in RGB space.
//!
//! ```
//! use nearest_color::build_matcher;
//!
//! let matcher = build_matcher([("red", "#f00"), ("yellow", "#ff0")], None, None);
//! let best = matcher.nearest("#ff1").unwrap().unwrap();
//! assert_eq!(best.name, "yellow");
//! assert_eq!(best.distance, 17.0);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod matcher;
pub mod palette;

pub use color::{normalize, parse_color, rgba_to_hex_lossy, ColorInput, Rgb};
pub use config::{load_palette_file, MatcherConfig, PaletteDocument, PaletteFormat};
pub use error::ColorError;
pub use matcher::{build_matcher, MatchResult, Matcher, MatcherBuilder, Matches, QueryFn};
pub use palette::{ColorSpec, Palette, PaletteInput};
