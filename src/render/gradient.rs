use crate::{
    foundation::core::Rgb8,
    foundation::math::mix_channel,
    render::canvas::Canvas,
};

/// Interpolation weight toward the bottom color for row `row` of `height`.
///
/// Ramps 0 to 1 over the top half and back to 0 over the bottom half, so the
/// bottom color peaks at `height / 2` and the top color shows at both edges.
pub fn blend_factor(row: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let t = f64::from(row) / f64::from(height) * 2.0;
    if row <= height / 2 { t } else { 2.0 - t }
}

/// Color of gradient row `row`.
pub fn row_color(row: u32, height: u32, top: Rgb8, bottom: Rgb8) -> Rgb8 {
    let t = blend_factor(row, height);
    Rgb8::new(
        mix_channel(top.r, bottom.r, t),
        mix_channel(top.g, bottom.g, t),
        mix_channel(top.b, bottom.b, t),
    )
}

/// Paint every row of the canvas with its opaque gradient color.
pub fn fill_gradient(canvas: &mut Canvas, top: Rgb8, bottom: Rgb8) {
    let height = canvas.height();
    for y in 0..height {
        canvas.fill_row(y, row_color(y, height, top, bottom).opaque().to_array());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
