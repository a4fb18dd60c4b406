#[path = "palette/entry.rs"]
mod entry;

#[path = "palette/input.rs"]
mod input;

#[path = "palette/build.rs"]
mod build;

pub use build::Palette;
pub use entry::ColorSpec;
pub use input::PaletteInput;
