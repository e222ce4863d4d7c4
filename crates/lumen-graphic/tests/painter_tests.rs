//! Tests for pixel plots and rectangle clear/fill.

use lumen_graphic::{Bitmap, Color, Painter, Point, Rect, Surface};

const BACKDROP: Color = Color::rgb(10, 20, 30);

/// Helper: a 6x6 bitmap filled with an opaque backdrop.
fn backdrop() -> Bitmap {
    Bitmap::filled(6, 6, BACKDROP)
}

#[test]
fn test_plot_inside_clip_blends() {
    let mut bitmap = backdrop();
    {
        let mut painter = Painter::new(&mut bitmap);
        painter.plot(Point::new(2, 2), Color::WHITE);
        painter.plot(Point::new(3, 3), Color::new(255, 255, 255, 0));
    }

    assert_eq!(bitmap.read(Point::new(2, 2)), Color::WHITE);
    assert_eq!(bitmap.read(Point::new(3, 3)), BACKDROP);
}

#[test]
fn test_plot_outside_clip_is_silent() {
    let mut bitmap = backdrop();
    {
        let mut painter = Painter::new(&mut bitmap);
        painter.plot(Point::new(-1, 0), Color::WHITE);
        painter.plot(Point::new(6, 6), Color::WHITE);

        let mut guard = painter.push_clip(Rect::new(0, 0, 2, 2));
        guard.plot(Point::new(2, 0), Color::WHITE);
    }

    assert!(bitmap.as_image().pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn test_clear_rect_overwrites_without_blending() {
    let mut bitmap = backdrop();
    let ghost = Color::new(200, 100, 50, 40);
    {
        let mut painter = Painter::new(&mut bitmap);
        painter.clear_rect(Rect::new(1, 1, 2, 2), ghost);
    }

    assert_eq!(bitmap.read(Point::new(1, 1)), ghost);
    assert_eq!(bitmap.read(Point::new(2, 2)), ghost);
    assert_eq!(bitmap.read(Point::new(3, 3)), BACKDROP);
}

#[test]
fn test_opaque_clear_is_independent_of_prior_content() {
    let mut first = Bitmap::filled(4, 4, Color::rgb(1, 2, 3));
    let mut second = Bitmap::new(4, 4);
    for bitmap in [&mut first, &mut second] {
        let mut painter = Painter::new(bitmap);
        painter.clear(Color::rgb(90, 80, 70));
    }

    assert_eq!(first.as_image(), second.as_image());
}

#[test]
fn test_clear_respects_clip() {
    let mut bitmap = backdrop();
    {
        let mut painter = Painter::new(&mut bitmap);
        let mut guard = painter.push_clip(Rect::new(4, 4, 10, 10));
        guard.clear(Color::BLACK);
    }

    assert_eq!(bitmap.read(Point::new(4, 4)), Color::BLACK);
    assert_eq!(bitmap.read(Point::new(5, 5)), Color::BLACK);
    assert_eq!(bitmap.read(Point::new(3, 5)), BACKDROP);
}

#[test]
fn test_clear_rect_outside_clip_is_noop() {
    let mut bitmap = backdrop();
    {
        let mut painter = Painter::new(&mut bitmap);
        painter.clear_rect(Rect::new(10, 10, 3, 3), Color::BLACK);
        painter.clear_rect(Rect::new(1, 1, 0, 3), Color::BLACK);
    }

    assert!(bitmap.as_image().pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn test_fill_rect_blends() {
    let mut bitmap = Bitmap::filled(4, 4, Color::WHITE);
    {
        let mut painter = Painter::new(&mut bitmap);
        painter.fill_rect(Rect::new(0, 0, 2, 4), Color::new(0, 0, 0, 128));
    }

    let shaded = bitmap.read(Point::new(1, 3));
    assert_eq!(shaded.a, 255);
    assert!((126..=128).contains(&shaded.r));
    assert_eq!(bitmap.read(Point::new(2, 0)), Color::WHITE);
}

#[test]
fn test_fill_rect_is_clipped() {
    let mut bitmap = backdrop();
    {
        let mut painter = Painter::new(&mut bitmap);
        let mut guard = painter.push_clip(Rect::new(0, 0, 3, 3));
        guard.fill_rect(Rect::new(2, 2, 4, 4), Color::WHITE);
    }

    assert_eq!(bitmap.read(Point::new(2, 2)), Color::WHITE);
    assert_eq!(bitmap.read(Point::new(3, 2)), BACKDROP);
    assert_eq!(bitmap.read(Point::new(2, 3)), BACKDROP);
}

#[test]
fn test_painter_exposes_surface() {
    let mut bitmap = backdrop();
    let painter = Painter::new(&mut bitmap);
    assert_eq!(painter.surface().bound(), Rect::from_size(6, 6));
}
