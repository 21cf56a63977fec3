use crate::document::{Ctx, Task, UiEvent};
use crate::page::Page;
use crate::scene::{Scene, WidgetId, WidgetKind};

const OVERLAY: [WidgetId; 3] = [
    WidgetId::Lightbox,
    WidgetId::LightboxImage,
    WidgetId::LightboxClose,
];

/// Thumbnails that open a lightbox, and the way on to the letter.
///
/// The lightbox is either closed or showing exactly one picture; opening it
/// again while open just swaps the picture.
pub(crate) struct Gallery {
    /// Focus to give back when the lightbox closes.
    return_focus: Option<WidgetId>,
}

impl Gallery {
    pub(crate) fn init(scene: &Scene) -> Option<Self> {
        let has_thumbs = scene
            .widgets
            .iter()
            .any(|w| matches!(w.kind, WidgetKind::Thumbnail { .. }));
        if !has_thumbs || !scene.has(WidgetId::Lightbox) {
            return None;
        }
        Some(Gallery { return_focus: None })
    }

    pub(crate) fn is_open(scene: &Scene) -> bool {
        scene.get(WidgetId::Lightbox).is_some_and(|w| !w.hidden)
    }

    pub(crate) fn on_event(&mut self, ev: UiEvent, ctx: &mut Ctx<'_>) {
        match ev {
            UiEvent::Click(WidgetId::Thumb(i)) => {
                let picture = match ctx.scene.get(WidgetId::Thumb(i)).map(|w| &w.kind) {
                    Some(WidgetKind::Thumbnail { picture }) => *picture,
                    _ => return,
                };
                self.open(ctx.scene, picture);
            }
            UiEvent::Click(WidgetId::LightboxClose) | UiEvent::Click(WidgetId::Lightbox) => {
                self.close(ctx.scene)
            }
            UiEvent::Escape if Self::is_open(ctx.scene) => self.close(ctx.scene),
            UiEvent::Click(WidgetId::Next) => {
                ctx.timers.after(0, Task::Navigate(Page::Final));
            }
            _ => {}
        }
    }

    fn open(&mut self, scene: &mut Scene, picture: usize) {
        if !Self::is_open(scene) {
            self.return_focus = scene.focus.take();
        }
        for id in OVERLAY {
            if let Some(w) = scene.get_mut(id) {
                w.hidden = false;
            }
        }
        if let Some(w) = scene.get_mut(WidgetId::LightboxImage) {
            w.kind = WidgetKind::Picture {
                picture: Some(picture),
            };
        }
        scene.scroll_locked = true;
        tracing::debug!(picture, "lightbox opened");
    }

    fn close(&mut self, scene: &mut Scene) {
        for id in OVERLAY {
            if let Some(w) = scene.get_mut(id) {
                w.hidden = true;
            }
        }
        scene.scroll_locked = false;
        scene.focus = self.return_focus.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::Harness;

    fn shown_picture(h: &Harness) -> Option<usize> {
        match h.widget(WidgetId::LightboxImage).kind {
            WidgetKind::Picture { picture } => picture,
            _ => None,
        }
    }

    #[test]
    fn starts_closed() {
        let h = Harness::new(Page::Gallery);
        assert!(!Gallery::is_open(&h.doc.scene));
        assert!(!h.doc.scene.scroll_locked);
    }

    #[test]
    fn thumbnail_opens_its_own_picture_and_locks_scroll() {
        let mut h = Harness::new(Page::Gallery);
        h.send(UiEvent::Click(WidgetId::Thumb(3)));
        assert!(Gallery::is_open(&h.doc.scene));
        assert_eq!(shown_picture(&h), Some(3));
        assert!(h.doc.scene.scroll_locked);
    }

    #[test]
    fn every_dismissal_closes_and_unlocks() {
        for dismiss in [
            UiEvent::Click(WidgetId::LightboxClose),
            UiEvent::Click(WidgetId::Lightbox),
            UiEvent::Escape,
        ] {
            let mut h = Harness::new(Page::Gallery);
            h.send(UiEvent::Click(WidgetId::Thumb(0)));
            h.send(dismiss);
            assert!(!Gallery::is_open(&h.doc.scene), "{dismiss:?}");
            assert!(!h.doc.scene.scroll_locked, "{dismiss:?}");
        }
    }

    #[test]
    fn clicking_the_picture_itself_keeps_it_open() {
        let mut h = Harness::new(Page::Gallery);
        h.send(UiEvent::Click(WidgetId::Thumb(1)));
        h.send(UiEvent::Click(WidgetId::LightboxImage));
        assert!(Gallery::is_open(&h.doc.scene));
    }

    #[test]
    fn escape_while_closed_is_ignored() {
        let mut h = Harness::new(Page::Gallery);
        h.doc.scene.focus = Some(WidgetId::Thumb(2));
        h.send(UiEvent::Escape);
        assert_eq!(h.doc.scene.focus, Some(WidgetId::Thumb(2)));
    }

    #[test]
    fn focus_comes_back_after_closing() {
        let mut h = Harness::new(Page::Gallery);
        h.doc.scene.focus = Some(WidgetId::Thumb(4));
        h.send(UiEvent::Click(WidgetId::Thumb(4)));
        assert_eq!(h.doc.scene.focus, None);
        h.send(UiEvent::Click(WidgetId::Thumb(5)));
        h.send(UiEvent::Escape);
        assert_eq!(h.doc.scene.focus, Some(WidgetId::Thumb(4)));
    }

    #[test]
    fn next_goes_straight_to_the_letter() {
        let mut h = Harness::new(Page::Gallery);
        h.send(UiEvent::Click(WidgetId::Next));
        h.wait(0);
        assert_eq!(h.navigated, Some(Page::Final));
    }
}
