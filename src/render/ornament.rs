use std::f64::consts::TAU;

use crate::{
    composition::model::FlowerStyle,
    foundation::core::{Point, Vec2},
    render::layer::VectorLayer,
};

/// Offsets of `petals` petal centers evenly spaced on a ring of radius `inner`, starting at +x.
pub fn petal_offsets(petals: u32, inner: f64) -> Vec<Vec2> {
    (0..petals)
        .map(|k| {
            let theta = TAU * f64::from(k) / f64::from(petals);
            Vec2::new(inner * theta.cos(), inner * theta.sin())
        })
        .collect()
}

/// Draw a flower: petals first, then the center disc over them.
pub fn draw_flower(layer: &mut VectorLayer, center: Point, style: &FlowerStyle) {
    let inner = style.inner_radius();
    let outer = style.outer_radius();
    for offset in petal_offsets(style.petals, inner) {
        layer.fill_circle(center + offset, outer, style.petal_color);
    }
    layer.fill_circle(center, inner, style.center_color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/ornament.rs"]
mod tests;
