use crate::{
    composition::model::{CardStyle, TableStyle},
    foundation::core::{CanvasSize, Point, Rect},
    foundation::error::{BloomError, BloomResult},
};

/// Integer pixel position; may lie outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn right(&self) -> i64 {
        self.x + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y + i64::from(self.height)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Resolved positions of every card element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardLayout {
    pub canvas: CanvasSize,
    /// Top-left and top-right ornament centers.
    pub flower_centers: [Point; 2],
    /// Paste origin of the fitted logo.
    pub logo_origin: PixelPoint,
    /// Placeholder slots in left-top, left-bottom, right-top, right-bottom order.
    pub slots: [PixelRect; 4],
    /// Table top-left corner.
    pub table_origin: PixelPoint,
}

impl CardLayout {
    pub fn solve(style: &CardStyle) -> BloomResult<Self> {
        validate_style(style)?;

        let w = i64::from(style.canvas.width);
        let m = i64::from(style.margin);
        let r = i64::from(style.flower.outer_radius_px());

        let flower_centers = [
            Point::new((m + r) as f64, (m + r) as f64),
            Point::new((w - m - r) as f64, (m + r) as f64),
        ];

        // Centered on the bound rather than the fitted size.
        let half_logo = i64::from(style.logo_max / 2);
        let logo_origin = PixelPoint::new(w / 2 - half_logo, m + r - half_logo);

        let top_space = 2 * m + (r as f64 * style.flower.scale) as i64;
        let (sw, sh) = (style.slot_width, style.slot_height);
        let left = m;
        let right = w - m - i64::from(sw);
        let lower = top_space + i64::from(sh) + m;
        let slot = |x: i64, y: i64| PixelRect {
            x,
            y,
            width: sw,
            height: sh,
        };
        let slots = [
            slot(left, top_space),
            slot(left, lower),
            slot(right, top_space),
            slot(right, lower),
        ];

        let table_x = (w - i64::from(style.table.total_width())).div_euclid(2);
        let slots_bottom = slots.iter().map(PixelRect::bottom).max().unwrap_or(top_space);
        let table_origin = PixelPoint::new(table_x, slots_bottom + m);

        Ok(Self {
            canvas: style.canvas,
            flower_centers,
            logo_origin,
            slots,
            table_origin,
        })
    }

    pub fn table_geometry(&self, table: &TableStyle) -> TableGeometry {
        TableGeometry {
            origin: self.table_origin,
            column_widths: table.column_widths.clone(),
            row_height: table.row_height,
        }
    }

    /// Pretty JSON dump of the resolved positions.
    pub fn to_json_pretty(&self) -> BloomResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BloomError::serde(e.to_string()))
    }
}

fn validate_style(style: &CardStyle) -> BloomResult<()> {
    if style.canvas.width == 0 || style.canvas.height == 0 {
        return Err(BloomError::validation("canvas width and height must be > 0"));
    }
    if !style.flower.scale.is_finite() || style.flower.scale <= 0.0 {
        return Err(BloomError::validation("flower scale must be finite and > 0"));
    }
    if style.flower.petals == 0 {
        return Err(BloomError::validation("flower must have at least one petal"));
    }
    if style.slot_width == 0 || style.slot_height == 0 {
        return Err(BloomError::validation("placeholder slot size must be > 0"));
    }
    if style.logo_max == 0 {
        return Err(BloomError::validation("logo bound must be > 0"));
    }
    if style.table.row_height == 0 {
        return Err(BloomError::validation("table row height must be > 0"));
    }
    Ok(())
}

/// Cell placement for a table anchored at `origin`.
///
/// Row slot 0 is the header; data row `r` occupies slot `r + 1`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TableGeometry {
    pub origin: PixelPoint,
    pub column_widths: Vec<u32>,
    pub row_height: u32,
}

impl TableGeometry {
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Left edge of column `col`, or `None` if the column has no width.
    pub fn column_x(&self, col: usize) -> Option<i64> {
        if col >= self.column_widths.len() {
            return None;
        }
        let preceding: i64 = self.column_widths[..col]
            .iter()
            .map(|&w| i64::from(w))
            .sum();
        Some(self.origin.x + preceding)
    }

    pub fn header_y(&self) -> i64 {
        self.origin.y
    }

    /// Top edge of data row `row` (0-based, header excluded).
    pub fn data_row_y(&self, row: usize) -> i64 {
        self.row_slot_y(row as i64 + 1)
    }

    fn row_slot_y(&self, slot: i64) -> i64 {
        self.origin.y + slot * i64::from(self.row_height)
    }

    /// Cell rectangle for `col` in row slot `slot` (0 = header).
    pub fn cell(&self, slot: usize, col: usize) -> Option<PixelRect> {
        let x = self.column_x(col)?;
        Some(PixelRect {
            x,
            y: self.row_slot_y(slot as i64),
            width: self.column_widths[col],
            height: self.row_height,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
