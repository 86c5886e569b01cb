use crate::{
    foundation::error::{BloomError, BloomResult},
    foundation::math::mul_div255_u8,
    layout::solver::PixelPoint,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> BloomResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BloomError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// A `width x height` premultiplied RGBA8 buffer view.
#[derive(Clone, Copy, Debug)]
pub struct Surface<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlitMode {
    /// Replace destination pixels, alpha included.
    Copy,
    /// Composite source-over using the source alpha.
    Over,
}

/// Blit `src` onto `dst` with its top-left corner at `origin`; out-of-bounds pixels are clipped.
pub fn blit(
    dst: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    src: Surface<'_>,
    origin: PixelPoint,
    mode: BlitMode,
) -> BloomResult<()> {
    let dst_row = dst_width as usize * 4;
    if dst.len() != dst_row * dst_height as usize {
        return Err(BloomError::render("blit destination size mismatch"));
    }
    let src_row = src.width as usize * 4;
    if src.data.len() != src_row * src.height as usize {
        return Err(BloomError::render("blit source size mismatch"));
    }

    let x0 = origin.x.max(0);
    let y0 = origin.y.max(0);
    let x1 = (origin.x + i64::from(src.width)).min(i64::from(dst_width));
    let y1 = (origin.y + i64::from(src.height)).min(i64::from(dst_height));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let span = (x1 - x0) as usize * 4;
    for y in y0..y1 {
        let sy = (y - origin.y) as usize;
        let sx = (x0 - origin.x) as usize;
        let s_start = sy * src_row + sx * 4;
        let d_start = y as usize * dst_row + x0 as usize * 4;
        let s = &src.data[s_start..s_start + span];
        let d = &mut dst[d_start..d_start + span];
        match mode {
            BlitMode::Copy => d.copy_from_slice(s),
            BlitMode::Over => over_in_place(d, s)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
