use crate::art;
use crate::geom::{Rect, Vec2, CELL_H, CELL_W};
use crate::palette::{self, Rgb};
use crate::particles::Layer;
use crate::scene::{Scene, Widget, WidgetId, WidgetKind};
use crate::timers::Millis;
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};

/// How long the final message takes to slide into place.
const BANNER_SLIDE: Millis = 800;
const CARET_BLINK: Millis = 500;
const SHAKE_STEP: Millis = 50;
/// Faded particles below this are not drawn at all.
const MIN_ALPHA: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
    pub(crate) bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
            bold: false,
        }
    }
}

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }
    pub(crate) fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.w as i32 || y >= self.h as i32 {
            return None;
        }
        let i = self.idx(x as u16, y as u16);
        Some(&mut self.cells[i])
    }
    pub(crate) fn clear(&mut self, bg: Color) {
        for c in &mut self.cells {
            c.ch = ' ';
            c.fg = Color::White;
            c.bg = bg;
            c.bold = false;
        }
    }
}

pub(crate) struct Terminal {
    pub(crate) out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    pub(crate) prev: CellBuffer,
    pub(crate) cur: CellBuffer,
}

impl Terminal {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            EnableMouseCapture,
            EnableFocusChange,
            terminal::Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Clear(ClearType::All),
            DisableFocusChange,
            DisableMouseCapture,
            cursor::Show,
            EnableLineWrap,
            EndSynchronizedUpdate,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Adopts a new terminal size. The next present must not diff.
    pub(crate) fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.prev = CellBuffer::new(cols, rows);
        self.cur = CellBuffer::new(cols, rows);
    }

    pub(crate) fn present(&mut self, diff_only: bool) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bg = None;
        let mut last_bold = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if diff_only && c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;

                if last_bold != Some(c.bold) {
                    let attr = if c.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    queue!(self.out, SetAttribute(attr))?;
                    last_bold = Some(c.bold);
                }
                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }

                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            EndSynchronizedUpdate
        )?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

/* -----------------------------
   Scene painter
------------------------------ */

struct Painter<'a> {
    buf: &'a mut CellBuffer,
    now: Millis,
    color: bool,
}

impl Painter<'_> {
    /// Draws a glyph over whatever background the cell already has.
    fn put(&mut self, x: i32, y: i32, ch: char, fg: Rgb, bold: bool) {
        let fg = fg.to_color(self.color);
        if let Some(c) = self.buf.get_mut(x, y) {
            c.ch = ch;
            c.fg = fg;
            c.bold = bold;
        }
    }

    fn text(&mut self, x: i32, y: i32, s: &str, fg: Rgb, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x + i as i32, y, ch, fg, bold);
        }
    }

    fn centered(&mut self, x: i32, w: i32, y: i32, s: &str, fg: Rgb, bold: bool) {
        let len = s.chars().count() as i32;
        self.text(x + (w - len) / 2, y, s, fg, bold);
    }

    fn fill(&mut self, r: CellRect, bg: Rgb) {
        let bg = bg.to_color(self.color);
        for y in r.y..r.y + r.h {
            for x in r.x..r.x + r.w {
                if let Some(c) = self.buf.get_mut(x, y) {
                    *c = Cell {
                        ch: ' ',
                        fg: Color::White,
                        bg,
                        bold: false,
                    };
                }
            }
        }
    }

    fn frame(&mut self, r: CellRect, fg: Rgb, bold: bool) {
        if r.w < 2 || r.h < 2 {
            return;
        }
        let (x1, y1) = (r.x + r.w - 1, r.y + r.h - 1);
        for x in r.x + 1..x1 {
            self.put(x, r.y, '─', fg, bold);
            self.put(x, y1, '─', fg, bold);
        }
        for y in r.y + 1..y1 {
            self.put(r.x, y, '│', fg, bold);
            self.put(x1, y, '│', fg, bold);
        }
        self.put(r.x, r.y, '╭', fg, bold);
        self.put(x1, r.y, '╮', fg, bold);
        self.put(r.x, y1, '╰', fg, bold);
        self.put(x1, y1, '╯', fg, bold);
    }
}

/// A widget rect snapped to whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellRect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl From<Rect> for CellRect {
    fn from(r: Rect) -> Self {
        let (x, y) = Vec2::new(r.x, r.y).to_cell();
        Self {
            x,
            y,
            w: (r.w / CELL_W).round() as i32,
            h: (r.h / CELL_H).round() as i32,
        }
    }
}

/// Draws `scene` as it looks at `now`: ambient hearts, the page, effect
/// particles, then any open overlay on top of everything.
pub(crate) fn paint(buf: &mut CellBuffer, scene: &Scene, now: Millis, enable_color: bool) {
    buf.clear(palette::BG.to_color(enable_color));
    let mut p = Painter {
        buf,
        now,
        color: enable_color,
    };

    let split = scene.modal_from().unwrap_or(scene.widgets.len());
    let (page, modal) = scene.widgets.split_at(split);

    draw_particles(&mut p, scene, &[Layer::Ambient]);
    for w in page {
        draw_widget(&mut p, scene, w);
    }
    draw_particles(&mut p, scene, &[Layer::Effects, Layer::Fireworks]);
    for w in modal {
        draw_widget(&mut p, scene, w);
    }
}

fn draw_particles(p: &mut Painter<'_>, scene: &Scene, layers: &[Layer]) {
    for part in scene.particles.iter().filter(|q| layers.contains(&q.layer)) {
        let s = part.sample(p.now);
        if s.alpha < MIN_ALPHA {
            continue;
        }
        let (x, y) = s.pos.to_cell();
        let fg = palette::BG.lerp(part.glyph.tint, s.alpha);
        p.put(x, y, part.glyph.ch, fg, part.size >= 2.0);
    }
}

fn draw_widget(p: &mut Painter<'_>, scene: &Scene, w: &Widget) {
    if w.hidden {
        return;
    }
    let r = CellRect::from(w.visual_rect());
    let lit = scene.focus == Some(w.id) || scene.hovered == Some(w.id);

    match &w.kind {
        WidgetKind::Layer => {}
        WidgetKind::Label => {
            let (fg, bold) = match w.id {
                WidgetId::Heading => (palette::ACCENT, true),
                WidgetId::Hint => (palette::MUTED, false),
                WidgetId::ErrorMessage => (palette::ERROR, false),
                _ => (palette::TEXT, false),
            };
            p.centered(r.x, r.w, r.y, &w.text, fg, bold);
        }
        WidgetKind::Button { label } => {
            let (edge, fg, bold) = if w.disabled {
                (palette::DISABLED, palette::DISABLED, false)
            } else if w.success {
                (palette::SUCCESS, palette::SUCCESS, true)
            } else if lit {
                (palette::ACCENT, palette::ACCENT, true)
            } else {
                (palette::FRAME, palette::TEXT, false)
            };
            if r.h >= 3 {
                p.frame(r, edge, bold);
                p.centered(r.x, r.w, r.y + r.h / 2, label, fg, bold);
            } else {
                let boxed = format!("[ {label} ]");
                p.centered(r.x, r.w, r.y, &boxed, fg, bold);
            }
        }
        WidgetKind::Input => {
            let dx = if w.shaking {
                if (p.now / SHAKE_STEP) % 2 == 0 {
                    -1
                } else {
                    1
                }
            } else {
                0
            };
            let r = CellRect { x: r.x + dx, ..r };
            let focused = scene.focus == Some(w.id);
            let edge = if w.shaking {
                palette::ERROR
            } else if focused {
                palette::ACCENT
            } else {
                palette::FRAME
            };
            p.frame(r, edge, focused);

            let room = (r.w - 4).max(0) as usize;
            let mut shown: String = {
                // keep the tail in view while typing
                let n = w.text.chars().count();
                w.text.chars().skip(n.saturating_sub(room.saturating_sub(1))).collect()
            };
            if focused && (p.now / CARET_BLINK) % 2 == 0 {
                shown.push('▏');
            }
            p.text(r.x + 2, r.y + r.h / 2, &shown, palette::TEXT, false);
        }
        WidgetKind::Thumbnail { picture } => {
            p.frame(r, if lit { palette::ACCENT } else { palette::FRAME }, lit);
            if let Some(pic) = art::picture(*picture) {
                for (i, line) in pic.thumb.iter().enumerate() {
                    p.centered(r.x, r.w, r.y + 1 + i as i32, line, palette::TEXT, false);
                }
            }
            let fg = if lit { palette::ACCENT } else { palette::MUTED };
            p.centered(r.x, r.w, r.y + r.h - 2, &w.text, fg, false);
        }
        WidgetKind::Overlay => p.fill(r, palette::OVERLAY),
        WidgetKind::Picture { picture } => {
            p.fill(r, palette::BG);
            p.frame(r, palette::FRAME, false);
            if let Some(pic) = picture.and_then(art::picture) {
                for (i, line) in pic.full.iter().enumerate() {
                    p.centered(r.x, r.w, r.y + 1 + i as i32, line, palette::TEXT, false);
                }
                p.centered(r.x, r.w, r.y + r.h - 2, pic.caption, palette::ACCENT, true);
            }
        }
        WidgetKind::Letter => {
            let mut last = (r.x + 2, r.y);
            for (i, line) in w.text.split('\n').enumerate() {
                let y = r.y + i as i32;
                p.text(r.x + 2, y, line, palette::TEXT, false);
                last = (r.x + 2 + line.chars().count() as i32, y);
            }
            if (p.now / CARET_BLINK) % 2 == 0 {
                p.put(last.0, last.1, '▌', palette::ACCENT, false);
            }
        }
        WidgetKind::Banner { shown_at } => {
            let Some(at) = shown_at else {
                return;
            };
            let t = (p.now.saturating_sub(*at) as f32 / BANNER_SLIDE as f32).min(1.0);
            let eased = 1.0 - (1.0 - t).powi(3);
            // slide from just above the screen to the resting row
            let travel = (r.y + 1) as f32 * (1.0 - eased);
            let y = r.y - travel.round() as i32;
            let fg = palette::BG.lerp(palette::ACCENT, eased.max(0.2));
            p.centered(r.x, r.w, y, &w.text, fg, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Viewport;
    use crate::page::Page;
    use crate::particles::{Motion, Spawn, HEARTS};

    const COLS: u16 = 120;
    const ROWS: u16 = 40;

    fn scene(page: Page) -> Scene {
        Scene::for_page(page, Viewport::from_terminal(COLS, ROWS))
    }

    fn render(scene: &Scene, now: Millis) -> CellBuffer {
        let mut buf = CellBuffer::new(COLS, ROWS);
        paint(&mut buf, scene, now, true);
        buf
    }

    fn cell(buf: &CellBuffer, x: i32, y: i32) -> Cell {
        buf.cells[buf.idx(x as u16, y as u16)]
    }

    fn row(buf: &CellBuffer, y: i32) -> String {
        if y < 0 || y >= buf.h as i32 {
            return String::new();
        }
        (0..buf.w as i32).map(|x| cell(buf, x, y).ch).collect()
    }

    fn screen(buf: &CellBuffer) -> String {
        (0..buf.h as i32).map(|y| row(buf, y)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn proposal_shows_question_and_both_answers() {
        let s = scene(Page::Proposal);
        let text = screen(&render(&s, 0));
        assert!(text.contains("Will you be mine?"));
        assert!(text.contains("YES ♥"));
        assert!(text.contains("NO"));
    }

    #[test]
    fn displaced_button_is_drawn_where_it_went() {
        let mut s = scene(Page::Proposal);
        let home = CellRect::from(s.get(WidgetId::Decline).unwrap().rect);
        s.get_mut(WidgetId::Decline).unwrap().offset = Vec2::new(0.0, 10.0 * CELL_H);
        let buf = render(&s, 0);
        assert!(!row(&buf, home.y + 1).contains("NO"));
        assert!(row(&buf, home.y + 11).contains("NO"));
    }

    #[test]
    fn closed_lightbox_is_not_drawn() {
        let s = scene(Page::Gallery);
        let text = screen(&render(&s, 0));
        assert!(text.contains("The first hello"));
        assert!(!text.contains("h e l l o"));
    }

    #[test]
    fn open_lightbox_covers_the_grid() {
        let mut s = scene(Page::Gallery);
        for id in [WidgetId::Lightbox, WidgetId::LightboxImage, WidgetId::LightboxClose] {
            s.get_mut(id).unwrap().hidden = false;
        }
        s.get_mut(WidgetId::LightboxImage).unwrap().kind = WidgetKind::Picture { picture: Some(0) };
        let text = screen(&render(&s, 0));
        assert!(text.contains("h e l l o"));
        assert!(text.contains("[ x ]"));
        assert!(!text.contains("Our little moments"));
    }

    #[test]
    fn particle_lands_in_its_cell_and_is_bold_when_large() {
        let mut s = Scene::new(Page::Proposal, Viewport::from_terminal(COLS, ROWS), Vec::new());
        s.particles.spawn(Spawn {
            layer: Layer::Effects,
            glyph: HEARTS[0],
            origin: Vec2::from_cell(7, 5),
            size: 2.0,
            opacity: 1.0,
            born_at: 0,
            delay: 0,
            motion: Motion::Fall {
                distance: 100.0,
                duration: 1_000,
                started_at: None,
            },
        });
        let buf = render(&s, 0);
        let c = cell(&buf, 7, 5);
        assert_eq!(c.ch, HEARTS[0].ch);
        assert!(c.bold);
    }

    #[test]
    fn banner_waits_then_slides_into_place() {
        let mut s = scene(Page::Final);
        s.get_mut(WidgetId::FinalMessage).unwrap().text = "forever".into();
        let rest = CellRect::from(s.get(WidgetId::FinalMessage).unwrap().rect).y;
        assert!(!screen(&render(&s, 0)).contains("forever"));

        s.get_mut(WidgetId::FinalMessage).unwrap().kind = WidgetKind::Banner {
            shown_at: Some(1_000),
        };
        assert!(!row(&render(&s, 1_000), rest).contains("forever"));
        assert!(row(&render(&s, 1_000 + BANNER_SLIDE), rest).contains("forever"));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let s = scene(Page::Verify);
        let buf = render(&s, 0);
        let r = CellRect::from(s.get(WidgetId::Continue).unwrap().rect);
        let edge = cell(&buf, r.x, r.y);
        assert_eq!(edge.fg, palette::DISABLED.to_color(true));
    }

    #[test]
    fn no_color_uses_plain_palette() {
        let s = scene(Page::Proposal);
        let mut buf = CellBuffer::new(COLS, ROWS);
        paint(&mut buf, &s, 0, false);
        assert!(buf
            .cells
            .iter()
            .all(|c| !matches!(c.fg, Color::Rgb { .. }) && !matches!(c.bg, Color::Rgb { .. })));
    }
}
