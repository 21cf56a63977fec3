// Page templates and where their widgets sit for a given terminal size.

use crate::art::PICTURES;
use crate::geom::{Rect, Viewport, CELL_H};
use crate::page::Page;
use crate::scene::{Widget, WidgetId, WidgetKind};

const TILE_W: i32 = 22;
const TILE_H: i32 = 8;
const TILE_GAP: i32 = 2;
const GRID_TOP: i32 = 4;

const IMAGE_W: i32 = 41;
const IMAGE_H: i32 = 15;

pub(crate) const LETTER_W: i32 = 44;
pub(crate) const LETTER_H: i32 = 18;

fn button(id: WidgetId, label: &'static str) -> Widget {
    Widget::new(id, WidgetKind::Button { label })
}

fn label(id: WidgetId, text: &str) -> Widget {
    Widget::new(id, WidgetKind::Label).with_text(text)
}

pub(crate) fn template(page: Page) -> Vec<Widget> {
    let ambient = Widget::new(WidgetId::AmbientLayer, WidgetKind::Layer);
    match page {
        Page::Proposal => vec![
            ambient,
            label(WidgetId::Heading, "Will you be mine?"),
            label(
                WidgetId::Subtitle,
                "There is something I have wanted to ask you for a long time...",
            ),
            button(WidgetId::Accept, "YES ♥"),
            button(WidgetId::Decline, "NO"),
            label(WidgetId::Hint, "Tab moves · Enter chooses · Ctrl-C leaves"),
        ],
        Page::Verify => vec![
            ambient,
            label(WidgetId::Heading, "Not so fast..."),
            label(WidgetId::Subtitle, "Type the magic words to continue"),
            Widget::new(WidgetId::MagicInput, WidgetKind::Input),
            button(WidgetId::Continue, "Continue").disabled(),
            label(WidgetId::ErrorMessage, ""),
            label(WidgetId::Hint, "Enter checks · Tab reaches Continue"),
        ],
        Page::Gallery => {
            let mut w = vec![ambient, label(WidgetId::Heading, "Our little moments")];
            for (i, pic) in PICTURES.iter().enumerate() {
                w.push(
                    Widget::new(WidgetId::Thumb(i), WidgetKind::Thumbnail { picture: i })
                        .with_text(pic.caption),
                );
            }
            w.push(button(WidgetId::Next, "Next ♥"));
            w.push(Widget::new(WidgetId::Lightbox, WidgetKind::Overlay).hidden());
            w.push(
                Widget::new(WidgetId::LightboxImage, WidgetKind::Picture { picture: None })
                    .hidden(),
            );
            w.push(button(WidgetId::LightboxClose, "x").hidden());
            w
        }
        Page::Final => vec![
            ambient,
            Widget::new(WidgetId::Letter, WidgetKind::Letter),
            button(WidgetId::Accept, "YES, FOREVER ♥"),
            button(WidgetId::Decline, "Let me think"),
            Widget::new(WidgetId::FinalMessage, WidgetKind::Banner { shown_at: None }),
            Widget::new(WidgetId::FireworksLayer, WidgetKind::Layer),
        ],
    }
}

/// Places every widget of `page` and returns the page's content height in
/// pixels. Scrolling shifts page content but never the overlay.
pub(crate) fn place(page: Page, widgets: &mut [Widget], vp: Viewport, scroll: f32) -> f32 {
    let cols = vp.cols();
    let rows = vp.rows();
    let cx = cols / 2;
    let cy = rows / 2;
    let line = |row: i32| Rect::cells(0, row, cols, 1);
    let full = Rect::new(0.0, 0.0, vp.width, vp.height);

    let mut content_rows = rows;
    match page {
        Page::Proposal => {
            for w in widgets.iter_mut() {
                w.rect = match w.id {
                    WidgetId::Heading => line(cy - 5),
                    WidgetId::Subtitle => line(cy - 3),
                    WidgetId::Accept => Rect::cells(cx - 14, cy, 12, 3),
                    WidgetId::Decline => Rect::cells(cx + 2, cy, 12, 3),
                    WidgetId::Hint => line(rows - 2),
                    _ => full,
                };
            }
        }
        Page::Verify => {
            for w in widgets.iter_mut() {
                w.rect = match w.id {
                    WidgetId::Heading => line(cy - 7),
                    WidgetId::Subtitle => line(cy - 5),
                    WidgetId::MagicInput => Rect::cells(cx - 18, cy - 2, 36, 3),
                    WidgetId::Continue => Rect::cells(cx - 7, cy + 2, 14, 3),
                    WidgetId::ErrorMessage => line(cy + 6),
                    WidgetId::Hint => line(rows - 2),
                    _ => full,
                };
            }
        }
        Page::Gallery => {
            let per_row = ((cols - 4 + TILE_GAP) / (TILE_W + TILE_GAP)).clamp(1, 3);
            let grid_w = per_row * (TILE_W + TILE_GAP) - TILE_GAP;
            let x0 = (cols - grid_w) / 2;
            let tiles = PICTURES.len() as i32;
            let grid_rows = (tiles + per_row - 1) / per_row;
            let next_row = GRID_TOP + grid_rows * (TILE_H + 1) + 1;
            content_rows = next_row + 4;

            let shift = |r: Rect| Rect::new(r.x, r.y - scroll, r.w, r.h);
            let ix = cx - IMAGE_W / 2;
            let iy = (cy - IMAGE_H / 2).max(0);
            for w in widgets.iter_mut() {
                w.rect = match w.id {
                    WidgetId::Heading => shift(line(1)),
                    WidgetId::Thumb(i) => {
                        let i = i as i32;
                        shift(Rect::cells(
                            x0 + (i % per_row) * (TILE_W + TILE_GAP),
                            GRID_TOP + (i / per_row) * (TILE_H + 1),
                            TILE_W,
                            TILE_H,
                        ))
                    }
                    WidgetId::Next => shift(Rect::cells(cx - 6, next_row, 12, 3)),
                    WidgetId::LightboxImage => Rect::cells(ix, iy, IMAGE_W, IMAGE_H),
                    WidgetId::LightboxClose => Rect::cells(ix + IMAGE_W - 5, iy, 5, 1),
                    _ => full,
                };
            }
        }
        Page::Final => {
            let top = (cy - 13).max(1);
            for w in widgets.iter_mut() {
                w.rect = match w.id {
                    WidgetId::Letter => Rect::cells(cx - LETTER_W / 2, top, LETTER_W, LETTER_H),
                    WidgetId::Accept => Rect::cells(cx - 19, top + LETTER_H, 18, 3),
                    WidgetId::Decline => Rect::cells(cx + 2, top + LETTER_H, 16, 3),
                    WidgetId::FinalMessage => line(top + LETTER_H + 4),
                    _ => full,
                };
            }
        }
    }
    content_rows as f32 * CELL_H
}
