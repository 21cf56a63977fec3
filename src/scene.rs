//! What one page shows: its widgets, its particles and its scroll state.

use crate::geom::{Rect, Vec2, Viewport};
use crate::layout;
use crate::page::Page;
use crate::particles::ParticleField;
use crate::timers::Millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum WidgetId {
    AmbientLayer,
    FireworksLayer,
    Heading,
    Subtitle,
    Accept,
    Decline,
    MagicInput,
    Continue,
    ErrorMessage,
    Hint,
    Thumb(usize),
    Next,
    Lightbox,
    LightboxImage,
    LightboxClose,
    Letter,
    FinalMessage,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum WidgetKind {
    /// Invisible container particles attach to.
    Layer,
    Label,
    /// Text block drawn left-aligned, line by line.
    Letter,
    Button { label: &'static str },
    Input,
    Thumbnail { picture: usize },
    /// Modal backdrop; everything after it in z-order belongs to it.
    Overlay,
    Picture { picture: Option<usize> },
    /// Message that slides in from above once shown.
    Banner { shown_at: Option<Millis> },
}

#[derive(Clone, Debug)]
pub(crate) struct Widget {
    pub(crate) id: WidgetId,
    pub(crate) kind: WidgetKind,
    /// Layout position, before any displacement.
    pub(crate) rect: Rect,
    pub(crate) offset: Vec2,
    pub(crate) text: String,
    pub(crate) disabled: bool,
    pub(crate) success: bool,
    pub(crate) shaking: bool,
    pub(crate) hidden: bool,
}

impl Widget {
    pub(crate) fn new(id: WidgetId, kind: WidgetKind) -> Self {
        Self {
            id,
            kind,
            rect: Rect::default(),
            offset: Vec2::default(),
            text: String::new(),
            disabled: false,
            success: false,
            shaking: false,
            hidden: false,
        }
    }

    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub(crate) fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub(crate) fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Where the widget is actually drawn and hit.
    pub(crate) fn visual_rect(&self) -> Rect {
        self.rect.translate(self.offset)
    }

    pub(crate) fn focusable(&self) -> bool {
        matches!(
            self.kind,
            WidgetKind::Button { .. } | WidgetKind::Input | WidgetKind::Thumbnail { .. }
        )
    }
}

pub(crate) struct Scene {
    pub(crate) page: Page,
    pub(crate) viewport: Viewport,
    /// Back to front.
    pub(crate) widgets: Vec<Widget>,
    pub(crate) particles: ParticleField,
    pub(crate) focus: Option<WidgetId>,
    pub(crate) hovered: Option<WidgetId>,
    pub(crate) scroll: f32,
    pub(crate) scroll_locked: bool,
    pub(crate) content_height: f32,
}

impl Scene {
    pub(crate) fn new(page: Page, viewport: Viewport, widgets: Vec<Widget>) -> Self {
        let mut scene = Self {
            page,
            viewport,
            widgets,
            particles: ParticleField::default(),
            focus: None,
            hovered: None,
            scroll: 0.0,
            scroll_locked: false,
            content_height: 0.0,
        };
        scene.relayout(viewport);
        scene
    }

    pub(crate) fn for_page(page: Page, viewport: Viewport) -> Self {
        Self::new(page, viewport, layout::template(page))
    }

    pub(crate) fn relayout(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.content_height = layout::place(self.page, &mut self.widgets, viewport, self.scroll);
        let max = self.max_scroll();
        if self.scroll > max {
            self.scroll = max;
            self.content_height =
                layout::place(self.page, &mut self.widgets, viewport, self.scroll);
        }
    }

    pub(crate) fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    /// Scrolls the page unless an overlay holds it in place.
    pub(crate) fn scroll_by(&mut self, delta: f32) {
        if self.scroll_locked {
            return;
        }
        let next = (self.scroll + delta).clamp(0.0, self.max_scroll());
        if next != self.scroll {
            self.scroll = next;
            self.relayout(self.viewport);
        }
    }

    pub(crate) fn has(&self, id: WidgetId) -> bool {
        self.widgets.iter().any(|w| w.id == id)
    }

    pub(crate) fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    /// Index of the topmost visible overlay. It and everything after it are
    /// modal; everything before it is shielded from input.
    pub(crate) fn modal_from(&self) -> Option<usize> {
        self.widgets
            .iter()
            .rposition(|w| matches!(w.kind, WidgetKind::Overlay) && !w.hidden)
    }

    fn interactive(&self) -> impl DoubleEndedIterator<Item = &Widget> {
        self.widgets[self.modal_from().unwrap_or(0)..]
            .iter()
            .filter(|w| !w.hidden)
    }

    /// Topmost widget under `p`.
    pub(crate) fn hit(&self, p: Vec2) -> Option<WidgetId> {
        self.interactive()
            .rev()
            .filter(|w| !matches!(w.kind, WidgetKind::Layer))
            .find(|w| w.visual_rect().contains(p))
            .map(|w| w.id)
    }

    /// Moves keyboard focus by `step` over focusable widgets and returns the
    /// newly focused one.
    pub(crate) fn cycle_focus(&mut self, step: i32) -> Option<WidgetId> {
        let order: Vec<WidgetId> = self
            .interactive()
            .filter(|w| w.focusable() && !w.disabled)
            .map(|w| w.id)
            .collect();
        if order.is_empty() {
            self.focus = None;
            return None;
        }
        let len = order.len() as i32;
        let next = match self.focus.and_then(|f| order.iter().position(|&id| id == f)) {
            Some(i) => (i as i32 + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.focus = Some(order[next as usize]);
        self.focus
    }
}
