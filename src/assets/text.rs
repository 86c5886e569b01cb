use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::{
    core::Rgb8,
    error::{BloomError, BloomResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgb8> for TextBrushRgba8 {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Shapes single-line strings with one registered font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("family_name", &self.family_name)
            .field("font_bytes_len", &self.font_data.data.len())
            .finish()
    }
}

impl TextLayoutEngine {
    /// Register `font_bytes` and resolve its primary family.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> BloomResult<Self> {
        let bytes = Arc::new(font_bytes);
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BloomError::asset("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BloomError::asset("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::new(bytes), 0),
        })
    }

    /// Read a font file and register it.
    pub fn from_font_file(path: &Path) -> BloomResult<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_font_bytes(bytes)
            .map_err(|e| BloomError::asset(format!("'{}': {e}", path.display())))
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Font data for glyph rasterization; shares the registered bytes.
    pub fn font_data(&self) -> vello_cpu::peniko::FontData {
        self.font_data.clone()
    }

    /// Shape `text` as a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> BloomResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BloomError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
