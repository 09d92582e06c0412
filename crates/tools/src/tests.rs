use raster::{CanvasPoint, PixelBuffer, Rgb8, Rgba8, WHITE};

use super::*;

const RED: Rgb8 = Rgb8 { r: 255, g: 0, b: 0 };

fn white_buffer(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::new(width, height).expect("create buffer")
}

fn point(x: f32, y: f32) -> CanvasPoint {
    CanvasPoint::new(x, y)
}

fn opaque_brush(radius: u32, color: Rgb8) -> StrokeParams {
    StrokeParams {
        radius,
        paint: Paint::Color(color),
        opacity_percent: 100,
    }
}

#[test]
fn single_point_stroke_saturates_center_and_respects_radius() {
    let mut buffer = white_buffer(800, 600);
    paint_stroke(
        &mut buffer,
        point(100.0, 100.0),
        point(100.0, 100.0),
        &opaque_brush(20, RED),
    );
    assert_eq!(
        buffer.get(100, 100),
        Some(Rgba8 { r: 255, g: 0, b: 0, a: 255 })
    );
    // One past the radius: untouched.
    assert_eq!(buffer.get(100, 121), Some(WHITE));
    // Exactly at the radius: inside the disc but falloff is zero.
    assert_eq!(buffer.get(100, 120), Some(WHITE));
}

#[test]
fn opaque_restamp_leaves_walked_cells_saturated() {
    let mut buffer = white_buffer(64, 32);
    let params = opaque_brush(5, RED);
    paint_stroke(&mut buffer, point(10.0, 10.0), point(30.0, 10.0), &params);
    let once: Vec<Rgba8> = (10..=30).map(|x| buffer.get(x, 10).unwrap()).collect();
    for pixel in &once {
        assert_eq!(pixel.rgb(), RED);
    }

    paint_stroke(&mut buffer, point(10.0, 10.0), point(30.0, 10.0), &params);
    let twice: Vec<Rgba8> = (10..=30).map(|x| buffer.get(x, 10).unwrap()).collect();
    assert_eq!(once, twice);
}

#[test]
fn half_opacity_strokes_accumulate_toward_color() {
    let mut buffer = white_buffer(16, 16);
    let params = StrokeParams {
        radius: 0,
        paint: Paint::Color(Rgb8::BLACK),
        opacity_percent: 50,
    };
    paint_stroke(&mut buffer, point(8.0, 8.0), point(8.0, 8.0), &params);
    assert_eq!(
        buffer.get(8, 8).unwrap().rgb(),
        Rgb8 { r: 128, g: 128, b: 128 }
    );

    // The second pass blends over the current state, not a pristine base.
    paint_stroke(&mut buffer, point(8.0, 8.0), point(8.0, 8.0), &params);
    assert_eq!(
        buffer.get(8, 8).unwrap().rgb(),
        Rgb8 { r: 64, g: 64, b: 64 }
    );
}

#[test]
fn eraser_paints_opaque_white() {
    let mut buffer = white_buffer(16, 16);
    buffer.set_rgb(8, 8, Rgb8::BLACK);
    paint_stroke(
        &mut buffer,
        point(8.0, 8.0),
        point(8.0, 8.0),
        &StrokeParams {
            radius: 2,
            paint: Paint::Erase,
            opacity_percent: 100,
        },
    );
    assert_eq!(buffer.get(8, 8), Some(WHITE));
}

#[test]
fn radius_zero_stamps_exactly_one_pixel() {
    let mut buffer = white_buffer(11, 11);
    paint_stroke(
        &mut buffer,
        point(5.0, 5.0),
        point(5.0, 5.0),
        &opaque_brush(0, RED),
    );
    for y in 0..11 {
        for x in 0..11 {
            let expected = if (x, y) == (5, 5) { RED } else { Rgb8::WHITE };
            assert_eq!(buffer.get(x, y).unwrap().rgb(), expected, "at ({x},{y})");
        }
    }
}

#[test]
fn line_walk_covers_the_segment_without_gaps() {
    // A pure diagonal visits exactly the diagonal cells.
    let mut buffer = white_buffer(8, 8);
    let params = StrokeParams {
        radius: 0,
        paint: Paint::Color(Rgb8::BLACK),
        opacity_percent: 50,
    };
    paint_stroke(&mut buffer, point(0.0, 0.0), point(4.0, 4.0), &params);
    for step in 0..=4 {
        // 128, not 64: each cell was stamped exactly once.
        assert_eq!(
            buffer.get(step, step).unwrap().rgb(),
            Rgb8 { r: 128, g: 128, b: 128 }
        );
    }
    assert_eq!(buffer.get(1, 0), Some(WHITE));

    // A shallow line visits max(dx, dy) + 1 cells.
    let mut buffer = white_buffer(8, 8);
    paint_stroke(&mut buffer, point(0.0, 0.0), point(5.0, 2.0), &params);
    let painted = (0..8)
        .flat_map(|y| (0..8).map(move |x| (x, y)))
        .filter(|&(x, y)| buffer.get(x, y) != Some(WHITE))
        .count();
    assert_eq!(painted, 6);
}

#[test]
fn stroke_clips_against_buffer_edges() {
    let mut buffer = white_buffer(16, 16);
    paint_stroke(
        &mut buffer,
        point(0.0, 0.0),
        point(0.0, 0.0),
        &opaque_brush(10, RED),
    );
    assert_eq!(buffer.get(0, 0).unwrap().rgb(), RED);
}

#[test]
fn fill_covers_a_fully_connected_canvas() {
    let mut buffer = white_buffer(800, 600);
    flood_fill(&mut buffer, point(0.0, 0.0), Rgb8::BLACK);
    for chunk in buffer.bytes().chunks_exact(4) {
        assert_eq!(chunk, [0, 0, 0, 255]);
    }
}

#[test]
fn fill_is_idempotent() {
    let mut buffer = white_buffer(64, 48);
    flood_fill(&mut buffer, point(10.0, 10.0), RED);
    let once = buffer.bytes().to_vec();
    flood_fill(&mut buffer, point(10.0, 10.0), RED);
    assert_eq!(buffer.bytes(), once.as_slice());
}

#[test]
fn fill_stops_at_a_high_contrast_line() {
    let mut buffer = white_buffer(21, 21);
    for y in 0..21 {
        buffer.set_rgb(10, y, Rgb8::BLACK);
    }
    flood_fill(&mut buffer, point(2.0, 2.0), RED);

    for y in 0..21 {
        for x in 0..10 {
            assert_eq!(buffer.get(x, y).unwrap().rgb(), RED, "left of line at ({x},{y})");
        }
        assert_eq!(buffer.get(10, y).unwrap().rgb(), Rgb8::BLACK);
        for x in 11..21 {
            assert_eq!(
                buffer.get(x, y).unwrap().rgb(),
                Rgb8::WHITE,
                "right of line at ({x},{y})"
            );
        }
    }
}

#[test]
fn fill_tolerance_is_per_channel_against_the_seed_sample() {
    let mut buffer = white_buffer(10, 10);
    // 25 under the seed sample per channel: inside tolerance, joins the region.
    buffer.set_rgb(3, 3, Rgb8 { r: 230, g: 230, b: 230 });
    // 55 under: outside tolerance, excluded.
    buffer.set_rgb(6, 6, Rgb8 { r: 200, g: 200, b: 200 });
    flood_fill(&mut buffer, point(0.0, 0.0), Rgb8::BLACK);

    assert_eq!(buffer.get(3, 3).unwrap().rgb(), Rgb8::BLACK);
    assert_eq!(
        buffer.get(6, 6).unwrap().rgb(),
        Rgb8 { r: 200, g: 200, b: 200 }
    );
    assert_eq!(buffer.get(9, 9).unwrap().rgb(), Rgb8::BLACK);
}

#[test]
fn fill_with_seed_color_is_a_no_op() {
    let mut buffer = white_buffer(16, 16);
    let before = buffer.bytes().to_vec();
    flood_fill(&mut buffer, point(4.0, 4.0), Rgb8::WHITE);
    assert_eq!(buffer.bytes(), before.as_slice());
}

#[test]
fn fill_with_seed_outside_buffer_is_a_no_op() {
    let mut buffer = white_buffer(16, 16);
    let before = buffer.bytes().to_vec();
    flood_fill(&mut buffer, point(-3.0, 4.0), RED);
    flood_fill(&mut buffer, point(4.0, 900.0), RED);
    assert_eq!(buffer.bytes(), before.as_slice());
}

#[test]
fn fill_writes_rgb_only() {
    let mut buffer = white_buffer(8, 8);
    buffer.set(2, 2, Rgba8 { r: 255, g: 255, b: 255, a: 7 });
    flood_fill(&mut buffer, point(0.0, 0.0), RED);
    assert_eq!(buffer.get(2, 2), Some(Rgba8 { r: 255, g: 0, b: 0, a: 7 }));
}

#[test]
fn blur_never_writes_inside_the_edge_band() {
    let mut buffer = white_buffer(20, 20);
    for y in 0..20 {
        for x in 0..20 {
            if (x + y) % 2 == 0 {
                buffer.set_rgb(x, y, Rgb8::BLACK);
            }
        }
    }
    let before = buffer.bytes().to_vec();
    blur_disc(&mut buffer, point(0.0, 0.0), 25);

    let stride = 20usize * 4;
    for y in 0..20usize {
        for x in 0..20usize {
            let in_band = x < 3 || x >= 17 || y < 3 || y >= 17;
            if in_band {
                let offset = y * stride + x * 4;
                assert_eq!(
                    &buffer.bytes()[offset..offset + 4],
                    &before[offset..offset + 4],
                    "edge pixel ({x},{y}) must be untouched"
                );
            }
        }
    }
}

#[test]
fn blur_writes_the_rounded_window_mean() {
    let mut buffer = white_buffer(20, 20);
    buffer.set_rgb(10, 10, Rgb8::BLACK);
    blur_disc(&mut buffer, point(10.0, 10.0), 0);
    // 48 white samples and one black across the 7x7 window:
    // round(48 * 255 / 49) = 250.
    assert_eq!(
        buffer.get(10, 10).unwrap().rgb(),
        Rgb8 { r: 250, g: 250, b: 250 }
    );
    // Radius zero touches only the center.
    assert_eq!(buffer.get(9, 10), Some(WHITE));
    assert_eq!(buffer.get(10, 9), Some(WHITE));
}

#[test]
fn blur_leaves_alpha_untouched() {
    let mut buffer = white_buffer(20, 20);
    buffer.set(10, 10, Rgba8 { r: 0, g: 0, b: 0, a: 99 });
    blur_disc(&mut buffer, point(10.0, 10.0), 0);
    assert_eq!(buffer.get(10, 10).unwrap().a, 99);
}

#[test]
fn blur_on_a_uniform_region_changes_nothing() {
    let mut buffer = white_buffer(32, 32);
    let before = buffer.bytes().to_vec();
    blur_disc(&mut buffer, point(16.0, 16.0), 8);
    assert_eq!(buffer.bytes(), before.as_slice());
}

#[test]
fn registry_exposes_the_panel_tables() {
    assert_eq!(Tool::ALL.len(), 4);
    assert_eq!(Tool::Brush.label(), "brush");

    let brush = Tool::Brush.properties();
    assert_eq!(brush.brush_size, Some(BRUSH_SIZE_BOUNDS));
    assert_eq!(brush.opacity, Some(OPACITY_BOUNDS));
    assert!(brush.uses_color);

    let fill = Tool::Fill.properties();
    assert_eq!(fill.brush_size, None);
    assert!(fill.uses_color);

    assert!(!Tool::Eraser.properties().uses_color);
    assert_eq!(Tool::Blur.properties().opacity, None);

    assert_eq!(BRUSH_SIZE_BOUNDS.default, 20);
    assert_eq!(OPACITY_BOUNDS.default, 100);
    assert_eq!(BRUSH_SIZE_BOUNDS.clamp(0), 1);
    assert_eq!(BRUSH_SIZE_BOUNDS.clamp(400), 100);
    assert_eq!(COLOR_SWATCHES[0], Rgb8::BLACK);
    assert_eq!(COLOR_SWATCHES[1], Rgb8::WHITE);
    assert_eq!(DEFAULT_COLOR, Rgb8::BLACK);
}
