use std::path::{Path, PathBuf};

use crate::{
    assets::{decode, table, text::TextLayoutEngine},
    composition::model::{CardInputs, CardStyle, OUTPUT_FILE_NAME},
    foundation::error::BloomResult,
    layout::solver::CardLayout,
    render::{
        canvas::Canvas, composite::BlitMode, gradient, layer::VectorLayer, ornament,
        table as table_render,
    },
};

/// Compose the card in memory without writing it.
pub fn render_card(inputs: &CardInputs, style: &CardStyle) -> BloomResult<Canvas> {
    let layout = CardLayout::solve(style)?;
    let mut text = TextLayoutEngine::from_font_file(&inputs.font)?;
    tracing::debug!(family = text.family_name(), "font registered");

    let mut canvas = Canvas::new(style.canvas)?;

    gradient::fill_gradient(&mut canvas, style.gradient_top, style.gradient_bottom);
    tracing::debug!("gradient filled");

    let mut flowers = VectorLayer::new(style.canvas)?;
    for center in layout.flower_centers {
        ornament::draw_flower(&mut flowers, center, &style.flower);
    }
    canvas.composite_layer(&flowers.finish())?;
    tracing::debug!("ornaments drawn");

    let logo = decode::prepare_logo(&inputs.logo, style.logo_max)?;
    canvas.paste(&logo, layout.logo_origin, BlitMode::Over)?;
    tracing::debug!(
        width = logo.width,
        height = logo.height,
        "logo overlaid"
    );

    for (slot, path) in layout.slots.iter().zip(&inputs.placeholders) {
        let photo = decode::prepare_placeholder(path, slot.width, slot.height)?;
        canvas.paste(&photo, slot.origin(), BlitMode::Copy)?;
    }
    tracing::debug!("placeholders pasted");

    let data = table::load_table(&inputs.table);
    let geometry = layout.table_geometry(&style.table);
    let mut table_layer = VectorLayer::new(style.canvas)?;
    table_render::draw_table(&mut table_layer, &mut text, &geometry, &data, &style.table)?;
    canvas.composite_layer(&table_layer.finish())?;
    tracing::debug!(rows = data.data.len(), "table drawn");

    Ok(canvas)
}

/// Path the card is written to inside `out_dir`.
pub fn output_path(out_dir: &Path) -> PathBuf {
    out_dir.join(OUTPUT_FILE_NAME)
}

/// Compose the card with the default style, save it into `out_dir`, and return the file path.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display()))]
pub fn compose_card(inputs: &CardInputs, out_dir: &Path) -> BloomResult<PathBuf> {
    let canvas = render_card(inputs, &CardStyle::default())?;
    let path = output_path(out_dir);
    canvas.save_png(&path)?;
    tracing::info!(path = %path.display(), "card saved");
    Ok(path)
}
