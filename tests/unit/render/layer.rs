use super::*;

fn px(pixmap: &vello_cpu::Pixmap, x: usize, y: usize) -> [u8; 4] {
    let w = pixmap.width() as usize;
    let d = pixmap.data_as_u8_slice();
    let i = (y * w + x) * 4;
    [d[i], d[i + 1], d[i + 2], d[i + 3]]
}

fn layer(w: u32, h: u32) -> VectorLayer {
    VectorLayer::new(CanvasSize {
        width: w,
        height: h,
    })
    .unwrap()
}

#[test]
fn empty_layer_is_transparent() {
    let pixmap = layer(8, 8).finish();
    assert!(pixmap.data_as_u8_slice().iter().all(|&b| b == 0));
}

#[test]
fn fill_rect_covers_whole_pixels() {
    let mut l = layer(10, 10);
    l.fill_rect(Rect::new(2.0, 2.0, 6.0, 6.0), Rgb8::new(255, 215, 0));
    let pixmap = l.finish();
    assert_eq!(px(&pixmap, 3, 3), [255, 215, 0, 255]);
    assert_eq!(px(&pixmap, 2, 5), [255, 215, 0, 255]);
    assert_eq!(px(&pixmap, 7, 7)[3], 0);
    assert_eq!(px(&pixmap, 1, 3)[3], 0);
}

#[test]
fn fill_circle_is_round() {
    let mut l = layer(40, 40);
    l.fill_circle(Point::new(20.0, 20.0), 10.0, Rgb8::YELLOW);
    let pixmap = l.finish();
    assert_eq!(px(&pixmap, 20, 20), [255, 255, 0, 255]);
    assert_eq!(px(&pixmap, 12, 20), [255, 255, 0, 255]);
    // Inside the bounding box but outside the disc.
    assert_eq!(px(&pixmap, 11, 11)[3], 0);
    assert_eq!(px(&pixmap, 35, 35)[3], 0);
}

#[test]
fn stroke_rect_draws_outline_only() {
    let mut l = layer(20, 20);
    l.stroke_rect(Rect::new(2.5, 2.5, 15.5, 15.5), 1.0, Rgb8::BLACK);
    let pixmap = l.finish();
    assert_eq!(px(&pixmap, 2, 8), [0, 0, 0, 255]);
    assert_eq!(px(&pixmap, 8, 15), [0, 0, 0, 255]);
    assert_eq!(px(&pixmap, 8, 8)[3], 0);
}

#[test]
fn text_leaves_ink_near_origin() {
    let mut engine = crate::assets::text::TextLayoutEngine::from_font_file(std::path::Path::new(
        "tests/data/fonts/DejaVuSans.ttf",
    ))
    .unwrap();
    let layout = engine
        .layout_line("HH", 16.0, Rgb8::BLACK.into())
        .unwrap();
    let font = engine.font_data();

    let mut l = layer(64, 40);
    l.draw_text(&layout, &font, Point::new(10.0, 10.0));
    let pixmap = l.finish();

    let mut inked = 0usize;
    for y in 0..40 {
        for x in 0..64 {
            if px(&pixmap, x, y)[3] > 0 {
                assert!(x >= 9 && y >= 9, "ink at ({x},{y}) above/left of origin");
                inked += 1;
            }
        }
    }
    assert!(inked > 0);
}
