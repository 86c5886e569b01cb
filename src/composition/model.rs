use std::path::{Path, PathBuf};

use crate::foundation::core::{CanvasSize, Rgb8, Vec2};

/// File name the composed card is written under inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "gradient_flowers_composite_image.png";

/// Base petal-ring radius for a flower at scale 1.
pub const FLOWER_INNER_RADIUS: f64 = 10.0;
/// Petal radius for a flower at scale 1.
pub const FLOWER_OUTER_RADIUS: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every paint and geometry constant of the card.
///
/// The layout is fixed; `Default` is the only style the composer ships. The
/// type exists so the constants travel together and can be dumped.
pub struct CardStyle {
    /// Output canvas size in pixels.
    pub canvas: CanvasSize,
    /// Outer margin shared by ornaments, slots and the table.
    pub margin: u32,
    /// Gradient color at the top and bottom edges.
    pub gradient_top: Rgb8,
    /// Gradient color in the middle band.
    pub gradient_bottom: Rgb8,
    /// Flower ornament settings.
    pub flower: FlowerStyle,
    /// Upper bound for both logo dimensions after fitting.
    pub logo_max: u32,
    /// Placeholder slot width in pixels.
    pub slot_width: u32,
    /// Placeholder slot height in pixels.
    pub slot_height: u32,
    /// Table settings.
    pub table: TableStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FlowerStyle {
    pub scale: f64,
    pub petals: u32,
    pub petal_color: Rgb8,
    pub center_color: Rgb8,
}

impl FlowerStyle {
    /// Distance from the flower center to each petal center; also the disc radius.
    pub fn inner_radius(&self) -> f64 {
        FLOWER_INNER_RADIUS * self.scale
    }

    /// Radius of every petal.
    pub fn outer_radius(&self) -> f64 {
        FLOWER_OUTER_RADIUS * self.scale
    }

    /// Petal radius truncated to whole pixels, as used for corner placement.
    pub fn outer_radius_px(&self) -> u32 {
        self.outer_radius() as u32
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TableStyle {
    /// One pixel width per column, left to right.
    pub column_widths: Vec<u32>,
    pub row_height: u32,
    pub header_fill: Rgb8,
    /// Data cell fill for even column indices.
    pub even_fill: Rgb8,
    /// Data cell fill for odd column indices.
    pub odd_fill: Rgb8,
    pub outline: Rgb8,
    pub text_color: Rgb8,
    pub font_size_px: f32,
    /// Text origin relative to the cell's top-left corner.
    pub text_inset: Vec2,
}

impl TableStyle {
    pub fn total_width(&self) -> u32 {
        self.column_widths.iter().sum()
    }

    /// Fill for a data cell in column `col`.
    pub fn data_fill(&self, col: usize) -> Rgb8 {
        if col % 2 == 0 {
            self.even_fill
        } else {
            self.odd_fill
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: 692,
                height: 982,
            },
            margin: 35,
            gradient_top: Rgb8::new(0xac, 0xcb, 0xf2),
            gradient_bottom: Rgb8::new(0xfd, 0x99, 0x65),
            flower: FlowerStyle {
                scale: 1.5,
                petals: 5,
                petal_color: Rgb8::PINK,
                center_color: Rgb8::YELLOW,
            },
            logo_max: 180,
            slot_width: 300,
            slot_height: 168,
            table: TableStyle {
                column_widths: vec![200, 350],
                row_height: 40,
                header_fill: Rgb8::new(0xff, 0xd7, 0x00),
                even_fill: Rgb8::new(0xe6, 0xe6, 0xfa),
                odd_fill: Rgb8::new(0x98, 0xfb, 0x98),
                outline: Rgb8::BLACK,
                text_color: Rgb8::BLACK,
                font_size_px: 16.0,
                text_inset: Vec2::new(10.0, 10.0),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Filesystem inputs for one card.
pub struct CardInputs {
    /// Logo image, pasted with its own alpha.
    pub logo: PathBuf,
    /// Placeholder photos in left-top, left-bottom, right-top, right-bottom order.
    pub placeholders: [PathBuf; 4],
    /// Font file used for all table text.
    pub font: PathBuf,
    /// Table JSON; may be missing.
    pub table: PathBuf,
}

impl CardInputs {
    /// Conventional input locations below a project root directory.
    pub fn from_root(root: &Path) -> Self {
        let images = root.join("images");
        Self {
            logo: images.join("front_image.png"),
            placeholders: [
                images.join("1.png"),
                images.join("2.png"),
                images.join("3.png"),
                images.join("4.png"),
            ],
            font: root.join("font").join("Comic Sans MS Bold.ttf"),
            table: root.join("data").join("data.json"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
