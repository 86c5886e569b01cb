//! bloomcard composes a fixed-layout decorative card into a single PNG.
//!
//! # Pipeline overview
//!
//! One synchronous pass over an owned [`Canvas`]:
//!
//! 1. **Gradient**: a vertical double-ramp between two colors fills every row.
//! 2. **Ornaments**: two flowers are rasterized on a [`VectorLayer`] and composited.
//! 3. **Logo**: the logo is fitted inside a square bound and pasted with its alpha.
//! 4. **Placeholders**: four photos are stretched to their slots and pasted opaquely.
//! 5. **Table**: a JSON record set is drawn below the photos.
//! 6. **Persist**: the canvas is written as an RGBA PNG.
//!
//! All positions come from [`CardLayout::solve`] over the constants in [`CardStyle`].
//! A missing or malformed table file degrades to an empty table; every other
//! input failure aborts the run before anything is written.
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod foundation;
mod layout;
mod render;

pub use assets::decode::{
    PreparedImage, decode_rgba, fit_dimensions, fit_within, open_rgba, prepare_logo,
    prepare_placeholder, resize_exact,
};
pub use assets::table::{TableData, TableLoadError, load_table, try_load_table};
pub use assets::text::{TextBrushRgba8, TextLayoutEngine};
pub use composition::model::{
    CardInputs, CardStyle, FLOWER_INNER_RADIUS, FLOWER_OUTER_RADIUS, FlowerStyle,
    OUTPUT_FILE_NAME, TableStyle,
};
pub use foundation::core::{CanvasSize, Point, Rect, Rgb8, Rgba8Premul, Vec2, hex_to_rgb};
pub use foundation::error::{BloomError, BloomResult};
pub use layout::solver::{CardLayout, PixelPoint, PixelRect, TableGeometry};
pub use render::canvas::Canvas;
pub use render::composite::{BlitMode, PremulRgba8, Surface, blit, over, over_in_place};
pub use render::gradient::{blend_factor, fill_gradient, row_color};
pub use render::layer::VectorLayer;
pub use render::ornament::{draw_flower, petal_offsets};
pub use render::pipeline::{compose_card, output_path, render_card};
pub use render::table::{CellPlan, draw_table, plan_cells};
