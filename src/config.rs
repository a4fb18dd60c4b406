#[path = "config/types.rs"]
mod types;

#[path = "config/load.rs"]
mod load;

pub use load::{load_palette_file, PaletteFormat};
pub use types::{MatcherConfig, PaletteDocument};
