use super::*;

fn default_layout() -> CardLayout {
    CardLayout::solve(&CardStyle::default()).unwrap()
}

#[test]
fn flowers_sit_inside_top_corners() {
    let l = default_layout();
    assert_eq!(l.flower_centers[0], Point::new(80.0, 80.0));
    assert_eq!(l.flower_centers[1], Point::new(612.0, 80.0));

    let reach = 45.0 + 15.0;
    for c in l.flower_centers {
        assert!(c.x - reach >= 0.0 && c.x + reach <= 692.0);
        assert!(c.y - reach >= 0.0);
    }
}

#[test]
fn logo_origin_is_centered_on_bound() {
    let l = default_layout();
    assert_eq!(l.logo_origin, PixelPoint::new(256, -10));
}

#[test]
fn slots_follow_column_major_order() {
    let l = default_layout();
    let origins: Vec<_> = l.slots.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(origins, vec![(35, 137), (35, 340), (357, 137), (357, 340)]);
    for s in &l.slots {
        assert_eq!((s.width, s.height), (300, 168));
    }
}

#[test]
fn slots_do_not_overlap_and_stay_on_canvas() {
    let l = default_layout();
    for (i, a) in l.slots.iter().enumerate() {
        assert!(a.x >= 0 && a.right() <= 692);
        assert!(a.y >= 0 && a.bottom() <= 982);
        for b in l.slots.iter().skip(i + 1) {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn table_anchor_is_centered_below_slots() {
    let l = default_layout();
    assert_eq!(l.table_origin, PixelPoint::new(71, 543));
}

#[test]
fn table_columns_accumulate_widths() {
    let g = TableGeometry {
        origin: PixelPoint::new(71, 543),
        column_widths: vec![200, 350],
        row_height: 40,
    };
    assert_eq!(g.column_x(0), Some(71));
    assert_eq!(g.column_x(1), Some(71 + 200));
    assert_eq!(g.column_x(2), None);
    assert_eq!(g.column_count(), 2);
}

#[test]
fn table_rows_start_after_header() {
    let g = TableGeometry {
        origin: PixelPoint::new(10, 100),
        column_widths: vec![200, 350],
        row_height: 40,
    };
    assert_eq!(g.header_y(), 100);
    for r in 0..5usize {
        assert_eq!(g.data_row_y(r), 100 + (r as i64 + 1) * 40);
    }
    let cell = g.cell(2, 1).unwrap();
    assert_eq!(
        cell,
        PixelRect {
            x: 210,
            y: 180,
            width: 350,
            height: 40
        }
    );
    assert!(g.cell(0, 5).is_none());
}

#[test]
fn table_geometry_from_layout_uses_style_widths() {
    let style = CardStyle::default();
    let l = CardLayout::solve(&style).unwrap();
    let g = l.table_geometry(&style.table);
    assert_eq!(g.origin, l.table_origin);
    assert_eq!(g.column_widths, vec![200, 350]);
    assert_eq!(g.row_height, 40);
}

#[test]
fn invalid_styles_are_rejected() {
    let mut s = CardStyle::default();
    s.canvas.height = 0;
    assert!(matches!(
        CardLayout::solve(&s),
        Err(BloomError::Validation(_))
    ));

    let mut s = CardStyle::default();
    s.flower.scale = f64::NAN;
    assert!(CardLayout::solve(&s).is_err());

    let mut s = CardStyle::default();
    s.table.row_height = 0;
    assert!(CardLayout::solve(&s).is_err());
}

#[test]
fn pixel_rect_to_rect_spans_size() {
    let r = PixelRect {
        x: -5,
        y: 3,
        width: 10,
        height: 2,
    };
    assert_eq!(r.to_rect(), Rect::new(-5.0, 3.0, 5.0, 5.0));
    assert_eq!(r.origin(), PixelPoint::new(-5, 3));
}

#[test]
fn layout_dumps_as_json() {
    let json = default_layout().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["table_origin"]["x"], 71);
    assert_eq!(value["table_origin"]["y"], 543);
    assert_eq!(value["slots"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["logo_origin"]["y"], -10);
}
