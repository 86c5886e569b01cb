use crate::{
    assets::table::TableData,
    assets::text::TextLayoutEngine,
    composition::model::TableStyle,
    foundation::core::{Point, Rect, Rgb8},
    foundation::error::BloomResult,
    layout::solver::{PixelRect, TableGeometry},
    render::layer::VectorLayer,
};

/// One cell to draw: its box, fill and label.
#[derive(Clone, Debug, PartialEq)]
pub struct CellPlan<'a> {
    pub rect: PixelRect,
    pub fill: Rgb8,
    pub text: &'a str,
}

impl CellPlan<'_> {
    /// Filled area; corners are inclusive so neighbours share their border.
    pub fn fill_rect(&self) -> Rect {
        let r = self.rect.to_rect();
        Rect::new(r.x0, r.y0, r.x1 + 1.0, r.y1 + 1.0)
    }

    /// Outline path centered on the border pixels of [`CellPlan::fill_rect`].
    pub fn outline_rect(&self) -> Rect {
        let r = self.rect.to_rect();
        Rect::new(r.x0 + 0.5, r.y0 + 0.5, r.x1 + 0.5, r.y1 + 0.5)
    }
}

/// Lay out header and data cells in drawing order.
///
/// Cells whose column has no configured width are dropped.
pub fn plan_cells<'a>(
    geometry: &TableGeometry,
    table: &'a TableData,
    style: &TableStyle,
) -> Vec<CellPlan<'a>> {
    let mut cells = Vec::new();
    let mut dropped = 0usize;

    let rows = std::iter::once((&table.columns, true))
        .chain(table.data.iter().map(|row| (row, false)));
    for (slot, (row, is_header)) in rows.enumerate() {
        for (col, text) in row.iter().enumerate() {
            let Some(rect) = geometry.cell(slot, col) else {
                dropped += 1;
                continue;
            };
            let fill = if is_header {
                style.header_fill
            } else {
                style.data_fill(col)
            };
            cells.push(CellPlan {
                rect,
                fill,
                text: text.as_str(),
            });
        }
    }

    if dropped > 0 {
        tracing::warn!(
            dropped,
            columns = geometry.column_count(),
            "table cells beyond the configured columns were skipped"
        );
    }
    cells
}

/// Draw the table: outlined filled cells with their labels at the text inset.
pub fn draw_table(
    layer: &mut VectorLayer,
    text: &mut TextLayoutEngine,
    geometry: &TableGeometry,
    table: &TableData,
    style: &TableStyle,
) -> BloomResult<()> {
    let cells = plan_cells(geometry, table, style);
    if cells.is_empty() {
        return Ok(());
    }

    let font = text.font_data();
    for cell in &cells {
        layer.fill_rect(cell.fill_rect(), cell.fill);
        layer.stroke_rect(cell.outline_rect(), 1.0, style.outline);

        if cell.text.is_empty() {
            continue;
        }
        let layout = text.layout_line(cell.text, style.font_size_px, style.text_color.into())?;
        let origin = Point::new(
            cell.rect.x as f64 + style.text_inset.x,
            cell.rect.y as f64 + style.text_inset.y,
        );
        layer.draw_text(&layout, &font, origin);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/table.rs"]
mod tests;
