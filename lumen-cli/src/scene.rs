//! A small panel tree and its render traversal.
//!
//! Every panel pushes its own bound as a clip before drawing itself and its
//! children, so children that overflow their parent are cut off at the
//! parent's edge.

use lumen_graphic::{Bitmap, Color, GlyphAtlas, Painter, Point, Rect, Surface};

/// What a panel draws between its background and its children.
pub enum Content {
    /// Nothing.
    Empty,
    /// One or more lines of text, top-left aligned with a small inset.
    Label {
        /// Text to draw; `'\n'` starts a new line.
        text: String,
        /// Ink color.
        color: Color,
    },
    /// The shared picture, resampled to fill the panel.
    Picture,
    /// A polyline through evenly spaced samples, scaled to the panel height.
    Sparkline {
        /// Sample values in `0..=100`.
        samples: Vec<i32>,
        /// Stroke color.
        color: Color,
    },
}

/// A node of the scene tree. `bound` is relative to the parent's top-left.
pub struct Panel {
    /// Position and size relative to the parent.
    pub bound: Rect,
    /// Fill drawn first. Opaque colors overwrite, translucent ones blend.
    pub background: Option<Color>,
    /// Outline drawn after the children.
    pub border: Option<Color>,
    /// Panel content.
    pub content: Content,
    /// Nested panels, drawn in order.
    pub children: Vec<Panel>,
}

impl Panel {
    /// A content-less panel.
    pub const fn new(bound: Rect) -> Self {
        Self {
            bound,
            background: None,
            border: None,
            content: Content::Empty,
            children: Vec::new(),
        }
    }

    /// Set the background fill.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the outline color.
    pub fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    /// Set the content.
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Append a child panel.
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

/// Shared resources panels draw from.
pub struct Assets {
    /// Label font; labels are skipped without one.
    pub font: Option<GlyphAtlas>,
    /// Image used by [`Content::Picture`].
    pub picture: Bitmap,
}

/// Horizontal and vertical inset of label text.
const LABEL_INSET: i32 = 4;

/// Draw `root` and its subtree, with `root.bound` relative to the surface.
pub fn render<S: Surface + ?Sized>(painter: &mut Painter<'_, S>, root: &Panel, assets: &Assets) {
    render_panel(painter, root, Point::ZERO, assets);
}

#[allow(clippy::cast_possible_truncation)]
fn render_panel<S: Surface + ?Sized>(
    painter: &mut Painter<'_, S>,
    panel: &Panel,
    parent_origin: Point,
    assets: &Assets,
) {
    let bound = panel.bound.offset(parent_origin);
    let mut clipped = painter.push_clip(bound);

    match panel.background {
        Some(color) if color.a == 255 => clipped.clear_rect(bound, color),
        Some(color) => clipped.fill_rect(bound, color),
        None => {}
    }

    match &panel.content {
        Content::Empty => {}
        Content::Label { text, color } => {
            if let Some(font) = &assets.font {
                let baseline =
                    bound.position() + Point::new(LABEL_INSET, LABEL_INSET + font.size() as i32);
                clipped.draw_text(font, text, baseline, *color);
            }
        }
        Content::Picture => {
            clipped.blit(&assets.picture, assets.picture.bound(), bound);
        }
        Content::Sparkline { samples, color } => {
            draw_sparkline(&mut *clipped, bound, samples, *color);
        }
    }

    for child in &panel.children {
        render_panel(&mut *clipped, child, bound.position(), assets);
    }

    if let Some(color) = panel.border {
        clipped.draw_rect(bound, color);
    }
}

fn draw_sparkline<S: Surface + ?Sized>(
    painter: &mut Painter<'_, S>,
    bound: Rect,
    samples: &[i32],
    color: Color,
) {
    let Some(last) = i32::try_from(samples.len()).ok().and_then(|n| n.checked_sub(1)) else {
        return;
    };

    let to_point = |(index, &value): (usize, &i32)| {
        let index = i32::try_from(index).unwrap_or(last);
        let x = if last == 0 {
            0
        } else {
            index * (bound.width - 1) / last
        };
        let y = (100 - value.clamp(0, 100)) * (bound.height - 1) / 100;
        bound.position() + Point::new(x, y)
    };

    let points: Vec<Point> = samples.iter().enumerate().map(to_point).collect();
    match points.as_slice() {
        [single] => painter.plot(*single, color),
        _ => {
            for pair in points.windows(2) {
                painter.draw_line(pair[0], pair[1], color);
            }
        }
    }
}

/// An `size`x`size` two-tone checkerboard of 2x2 cells.
pub fn checkerboard(size: u32, light: Color, dark: Color) -> Bitmap {
    let mut bitmap = Bitmap::filled(size, size, light);
    for point in bitmap.bound().points() {
        if (point.x / 2 + point.y / 2) % 2 == 1 {
            bitmap.overwrite(point, dark);
        }
    }
    bitmap
}

/// The demo window: title bar, sidebar, picture, chart and a footer label.
///
/// One sidebar entry is deliberately wider than the sidebar so the clip at
/// the sidebar's edge is visible in the output.
pub fn demo(width: i32, height: i32, message: &str, background: Color) -> Panel {
    const TITLE: i32 = 28;
    const SIDEBAR: i32 = 140;
    const FOOTER: i32 = 32;
    const GAP: i32 = 12;

    let accent = Color::rgb(0x61, 0xaf, 0xef);
    let text = Color::rgb(0xe6, 0xe6, 0xe6);
    let muted = Color::rgb(0x3a, 0x3f, 0x4b);

    let body_height = (height - TITLE - FOOTER).max(0);
    let content_width = (width - SIDEBAR).max(0);
    let half = ((content_width - 3 * GAP) / 2).max(0);

    let title = Panel::new(Rect::new(0, 0, width, TITLE))
        .background(accent)
        .content(Content::Label {
            text: "Lumen".to_owned(),
            color: Color::BLACK,
        });

    let mut sidebar = Panel::new(Rect::new(0, TITLE, SIDEBAR, body_height))
        .background(muted)
        .border(accent);
    for (index, name) in ["Overview", "Layers", "A sidebar entry wider than its parent"]
        .into_iter()
        .enumerate()
    {
        let row = i32::try_from(index).unwrap_or(0);
        sidebar = sidebar.child(
            Panel::new(Rect::new(8, 8 + row * 32, SIDEBAR + 80, 26))
                .background(Color::new(255, 255, 255, 24))
                .content(Content::Label {
                    text: name.to_owned(),
                    color: text,
                }),
        );
    }

    let content = Panel::new(Rect::new(SIDEBAR, TITLE, content_width, body_height))
        .child(
            Panel::new(Rect::new(GAP, GAP, half, body_height - 2 * GAP))
                .border(text)
                .content(Content::Picture),
        )
        .child(
            Panel::new(Rect::new(2 * GAP + half, GAP, half, body_height - 2 * GAP))
                .background(Color::new(0, 0, 0, 96))
                .border(text)
                .content(Content::Sparkline {
                    samples: vec![12, 40, 25, 70, 55, 90, 35, 60, 80, 20],
                    color: accent,
                }),
        );

    let footer = Panel::new(Rect::new(0, height - FOOTER, width, FOOTER))
        .background(muted)
        .content(Content::Label {
            text: message.to_owned(),
            color: text,
        });

    Panel::new(Rect::from_size(width, height))
        .background(background)
        .child(title)
        .child(sidebar)
        .child(content)
        .child(footer)
}
