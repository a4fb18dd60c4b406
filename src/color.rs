#[path = "color/rgb.rs"]
mod rgb;

#[path = "color/named.rs"]
mod named;

#[path = "color/normalize.rs"]
mod normalize;

#[path = "color/rgba.rs"]
mod rgba;


pub use named::{named_color, NAMED_COLORS};
pub use normalize::{normalize, parse_color, parse_hex, parse_rgb_function};
pub use rgb::{ColorInput, Rgb};
pub use rgba::rgba_to_hex_lossy;
