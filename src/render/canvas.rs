use std::path::Path;

use anyhow::Context;

use crate::{
    assets::decode::PreparedImage,
    foundation::core::CanvasSize,
    foundation::error::{BloomError, BloomResult},
    foundation::math::unpremultiply_in_place,
    layout::solver::PixelPoint,
    render::composite::{BlitMode, Surface, blit, over_in_place},
};

/// The card under construction: a premultiplied RGBA8 pixmap, transparent when created.
pub struct Canvas {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    pub fn new(size: CanvasSize) -> BloomResult<Self> {
        let (width, height) = surface_dims(size)?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Premultiplied pixel at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width() as usize + x as usize) * 4;
        let d = self.data();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Overwrite the pixels of row `y` with one premultiplied color.
    pub fn fill_row(&mut self, y: u32, rgba: [u8; 4]) {
        if y >= self.height() {
            return;
        }
        let row = self.width() as usize * 4;
        let start = y as usize * row;
        for px in self.data_mut()[start..start + row].chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Paste `img` with its top-left corner at `origin`.
    pub fn paste(&mut self, img: &PreparedImage, origin: PixelPoint, mode: BlitMode) -> BloomResult<()> {
        let (w, h) = (self.width(), self.height());
        blit(
            self.data_mut(),
            w,
            h,
            Surface {
                width: img.width,
                height: img.height,
                data: &img.rgba8_premul,
            },
            origin,
            mode,
        )
    }

    /// Composite a canvas-sized premultiplied layer source-over.
    pub fn composite_layer(&mut self, layer: &vello_cpu::Pixmap) -> BloomResult<()> {
        if layer.width() != self.width || layer.height() != self.height {
            return Err(BloomError::render("layer size does not match canvas"));
        }
        over_in_place(self.data_mut(), layer.data_as_u8_slice())
    }

    /// Straight-alpha copy of the canvas.
    pub fn to_rgba_image(&self) -> BloomResult<image::RgbaImage> {
        let mut straight = self.data().to_vec();
        unpremultiply_in_place(&mut straight);
        image::RgbaImage::from_raw(self.width(), self.height(), straight)
            .ok_or_else(|| BloomError::render("invalid rgba buffer size"))
    }

    /// Encode the canvas as an RGBA PNG at `path`.
    pub fn save_png(&self, path: &Path) -> BloomResult<()> {
        let img = self.to_rgba_image()?;
        image::save_buffer_with_format(
            path,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

pub(crate) fn surface_dims(size: CanvasSize) -> BloomResult<(u16, u16)> {
    let width: u16 = size
        .width
        .try_into()
        .map_err(|_| BloomError::render("surface width exceeds u16"))?;
    let height: u16 = size
        .height
        .try_into()
        .map_err(|_| BloomError::render("surface height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(BloomError::render("surface must be at least 1x1"));
    }
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
