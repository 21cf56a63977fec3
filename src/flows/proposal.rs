use crate::audio;
use crate::document::{Ctx, Task, UiEvent};
use crate::dodge::move_away;
use crate::effects::heart_explosion;
use crate::page::Page;
use crate::scene::{Scene, WidgetId};
use crate::timers::Millis;

pub(crate) const NAV_DELAY: Millis = 1_000;

/// Landing page: yes explodes into hearts and moves on, no runs away.
pub(crate) struct Proposal;

impl Proposal {
    pub(crate) fn init(scene: &Scene) -> Option<Self> {
        if !scene.has(WidgetId::Accept) || !scene.has(WidgetId::Decline) {
            return None;
        }
        Some(Proposal)
    }

    pub(crate) fn on_event(&mut self, ev: UiEvent, ctx: &mut Ctx<'_>) {
        match ev {
            UiEvent::Click(WidgetId::Accept) => self.accept(ctx),
            UiEvent::Hover(WidgetId::Decline) | UiEvent::Click(WidgetId::Decline) => {
                move_away(ctx.scene, WidgetId::Decline, &mut *ctx.rng)
            }
            _ => {}
        }
    }

    fn accept(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(rect) = ctx.scene.get(WidgetId::Accept).map(|w| w.visual_rect()) {
            heart_explosion(ctx.scene, ctx.timers, &mut *ctx.rng, rect);
        }
        audio::chime(ctx.speaker);
        ctx.timers.after(NAV_DELAY, Task::Navigate(Page::Verify));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::Harness;
    use crate::effects::EXPLOSION;
    use crate::geom::Vec2;
    use crate::particles::Layer;

    #[test]
    fn yes_explodes_chimes_and_moves_on_after_a_second() {
        let mut h = Harness::new(Page::Proposal);
        let center = h.widget(WidgetId::Accept).visual_rect().center();

        h.send(UiEvent::Click(WidgetId::Accept));
        assert_eq!(h.speaker.plays.get(), 1);
        assert_eq!(h.doc.scene.particles.count(Layer::Effects), EXPLOSION.count);
        assert!(h
            .doc
            .scene
            .particles
            .iter()
            .filter(|p| p.layer == Layer::Effects)
            .all(|p| p.origin == center));

        h.wait(NAV_DELAY - 1);
        assert_eq!(h.navigated, None);
        h.wait(1);
        assert_eq!(h.navigated, Some(Page::Verify));
    }

    #[test]
    fn broken_audio_does_not_stop_the_flow() {
        let mut h = Harness::new(Page::Proposal);
        h.speaker.fail = true;
        h.send(UiEvent::Click(WidgetId::Accept));
        h.wait(NAV_DELAY);
        assert_eq!(h.navigated, Some(Page::Verify));
    }

    #[test]
    fn no_runs_away_on_hover_and_press() {
        let mut h = Harness::new(Page::Proposal);
        assert_eq!(h.widget(WidgetId::Decline).offset, Vec2::default());

        h.send(UiEvent::Hover(WidgetId::Decline));
        let first = h.widget(WidgetId::Decline).offset;
        assert_ne!(first, Vec2::default());

        h.send(UiEvent::Click(WidgetId::Decline));
        let second = h.widget(WidgetId::Decline).offset;
        assert_ne!(first, second);

        h.wait(5_000);
        assert_eq!(h.navigated, None);
        assert_eq!(h.speaker.plays.get(), 0);
    }

    #[test]
    fn explosion_follows_a_displaced_control() {
        let mut h = Harness::new(Page::Proposal);
        let shift = Vec2::new(40.0, -32.0);
        if let Some(w) = h.doc.scene.get_mut(WidgetId::Accept) {
            w.offset = shift;
        }
        let center = h.widget(WidgetId::Accept).rect.center().add(shift);
        h.send(UiEvent::Click(WidgetId::Accept));
        let p = h.doc.scene.particles.iter().find(|p| p.layer == Layer::Effects);
        assert_eq!(p.map(|p| p.origin), Some(center));
    }
}
