//! Property tests for clip balance and clip containment.

use lumen_graphic::{Bitmap, CLIP_STACK_CAPACITY, Color, Painter, Point, Rect, Surface};
use quickcheck_macros::quickcheck;

/// Helper: a small rectangle around the surface from arbitrary bytes.
fn rect((x, y, width, height): (i8, i8, u8, u8)) -> Rect {
    Rect::new(
        i32::from(x) / 4,
        i32::from(y) / 4,
        i32::from(width) / 8,
        i32::from(height) / 8,
    )
}

fn point((x, y): (i8, i8)) -> Point {
    Point::new(i32::from(x) / 4, i32::from(y) / 4)
}

/// Helper: push every rectangle in turn, checking at each level that the
/// clip only shrinks and that dropping the guard restores it exactly.
fn nest_and_unwind(painter: &mut Painter<'_, Bitmap>, rects: &[Rect]) -> bool {
    let Some((first, rest)) = rects.split_first() else {
        return true;
    };

    let before = painter.clip();
    let nested_ok = {
        let mut guard = painter.push_clip(*first);
        let narrowed = guard.clip();
        let shrinks = narrowed.is_empty() || before.clip(narrowed) == narrowed;
        shrinks && nest_and_unwind(&mut guard, rest)
    };

    nested_ok && painter.clip() == before
}

#[quickcheck]
fn prop_matched_pushes_restore_clip(raw: Vec<(i8, i8, u8, u8)>) -> bool {
    let rects: Vec<Rect> = raw.into_iter().take(CLIP_STACK_CAPACITY).map(rect).collect();
    let mut bitmap = Bitmap::new(24, 24);
    let mut painter = Painter::new(&mut bitmap);

    let initial = painter.clip();
    nest_and_unwind(&mut painter, &rects) && painter.clip() == initial && painter.clip_depth() == 0
}

#[quickcheck]
fn prop_pixels_outside_clip_are_untouched(
    clip: (i8, i8, u8, u8),
    target: (i8, i8, u8, u8),
    a: (i8, i8),
    b: (i8, i8),
) -> bool {
    let mut bitmap = Bitmap::filled(24, 24, Color::rgb(10, 20, 30));
    let before = bitmap.clone();
    let source = Bitmap::filled(5, 3, Color::new(200, 100, 0, 180));
    let mask = Bitmap::filled(3, 3, Color::WHITE);
    let target = rect(target);
    let ink = Color::new(250, 0, 250, 200);

    let clip = {
        let mut painter = Painter::new(&mut bitmap);
        let mut guard = painter.push_clip(rect(clip));

        guard.plot(point(a), ink);
        guard.clear_rect(target, ink);
        guard.fill_rect(target, ink);
        guard.draw_line(point(a), point(b), ink);
        guard.draw_rect(target, ink);
        guard.blit(&source, Rect::from_size(5, 3), target);
        guard.blit(&source, Rect::from_size(5, 3), Rect::from_parts(point(b), Point::new(5, 3)));
        guard.blit_colored(&mask, Rect::from_size(3, 3), target, ink);
        guard.clear(ink);

        guard.clip()
    };

    bitmap
        .bound()
        .points()
        .filter(|&p| !clip.contains(p))
        .all(|p| bitmap.read(p) == before.read(p))
}
