use crate::{
    assets::text::TextBrushRgba8,
    foundation::core::{CanvasSize, Point, Rect, Rgb8},
    foundation::error::BloomResult,
    render::canvas::surface_dims,
};

/// Tolerance used when flattening curves into paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Vector drawing onto a transparent, canvas-sized surface.
///
/// Shapes are queued on a `vello_cpu` render context and rasterized by
/// [`VectorLayer::finish`]; the resulting pixmap is composited over the canvas.
pub struct VectorLayer {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl VectorLayer {
    pub fn new(size: CanvasSize) -> BloomResult<Self> {
        let (width, height) = surface_dims(size)?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb8) {
        use vello_cpu::kurbo::Shape as _;

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        let path = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(PATH_TOLERANCE);
        self.ctx.fill_path(&path);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    pub fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_rect(&rect_to_cpu(rect));
    }

    /// Draw a shaped layout with its top-left corner at `origin`.
    pub fn draw_text(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &vello_cpu::peniko::FontData,
        origin: Point,
    ) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything queued so far into a premultiplied pixmap.
    pub fn finish(mut self) -> vello_cpu::Pixmap {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }
}

fn paint(color: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
