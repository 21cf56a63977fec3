use crate::document::{Ctx, Task, UiEvent};
use crate::dodge::move_away;
use crate::effects::{fireworks, heart_rain};
use crate::scene::{Scene, WidgetId, WidgetKind};
use crate::timers::{Millis, Timers};
use crate::typewriter::{Typewriter, CHAR_DELAY};

pub(crate) const LETTER: &str = "I don't know when you became
the most important part of my day.

Talking to you makes everything better.
Even a normal day feels special
when you are in it.

I may not be perfect,
but my feelings for you are real.

I just want to make you smile,
be there for you,
and stay beside you
for a very long time.

So… will you be mine Forever Ammu ?
♥";

pub(crate) const FOREVER: &str = "You are officially my forever ♥";

/// Delay before the answer buttons respond.
pub(crate) const ARM_DELAY: Millis = 1_000;

/// The love letter and the final question.
pub(crate) struct Finale {
    typewriter: Option<Typewriter>,
    armed: bool,
}

impl Finale {
    pub(crate) fn init(scene: &mut Scene, timers: &mut Timers<Task>) -> Self {
        let typewriter = scene.get_mut(WidgetId::Letter).map(|w| {
            w.text.clear();
            let mut tw = Typewriter::new(LETTER);
            if tw.step(&mut w.text) {
                timers.after(CHAR_DELAY, Task::TypeNext);
            }
            tw
        });

        if scene.has(WidgetId::Accept) && scene.has(WidgetId::Decline) {
            timers.after(ARM_DELAY, Task::ArmControls);
        }

        Finale {
            typewriter,
            armed: false,
        }
    }

    pub(crate) fn on_event(&mut self, ev: UiEvent, ctx: &mut Ctx<'_>) {
        if !self.armed {
            return;
        }
        match ev {
            UiEvent::Click(WidgetId::Accept) => self.accept(ctx),
            UiEvent::Hover(WidgetId::Decline) | UiEvent::Click(WidgetId::Decline) => {
                move_away(ctx.scene, WidgetId::Decline, &mut *ctx.rng)
            }
            _ => {}
        }
    }

    pub(crate) fn on_task(&mut self, task: Task, ctx: &mut Ctx<'_>) {
        match task {
            Task::TypeNext => {
                let (Some(tw), Some(w)) =
                    (self.typewriter.as_mut(), ctx.scene.get_mut(WidgetId::Letter))
                else {
                    return;
                };
                if tw.step(&mut w.text) {
                    ctx.timers.after(CHAR_DELAY, Task::TypeNext);
                } else {
                    tracing::debug!(chars = tw.revealed().chars().count(), "letter written");
                }
            }
            Task::ArmControls => self.armed = true,
            _ => {}
        }
    }

    fn accept(&mut self, ctx: &mut Ctx<'_>) {
        fireworks(ctx.timers);
        self.show_final_message(ctx);
        for id in [WidgetId::Accept, WidgetId::Decline] {
            if let Some(w) = ctx.scene.get_mut(id) {
                w.disabled = true;
            }
        }
        if matches!(ctx.scene.focus, Some(WidgetId::Accept | WidgetId::Decline)) {
            ctx.scene.focus = None;
        }
        tracing::info!("said yes");
    }

    fn show_final_message(&mut self, ctx: &mut Ctx<'_>) {
        let now = ctx.timers.now();
        let Some(w) = ctx.scene.get_mut(WidgetId::FinalMessage) else {
            return;
        };
        w.text = FOREVER.to_string();
        // a second yes would restart the slide; buttons are disabled by then
        w.kind = WidgetKind::Banner {
            shown_at: Some(now),
        };
        heart_rain(ctx.scene, ctx.timers, &mut *ctx.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::Harness;
    use crate::effects::{FIREWORK, FIREWORK_BURSTS, FIREWORK_INTERVAL, RAIN_COUNT};
    use crate::geom::{Vec2, Viewport};
    use crate::page::Page;
    use crate::particles::Layer;

    fn letter(h: &Harness) -> &str {
        &h.widget(WidgetId::Letter).text
    }

    #[test]
    fn letter_starts_with_one_character() {
        let h = Harness::new(Page::Final);
        assert_eq!(letter(&h), "I");
    }

    #[test]
    fn letter_is_complete_after_one_delay_per_character() {
        let mut h = Harness::new(Page::Final);
        let chars = LETTER.chars().count() as Millis;

        h.wait(CHAR_DELAY * (chars - 2));
        assert_ne!(letter(&h), LETTER);

        h.wait(CHAR_DELAY * 2);
        assert_eq!(letter(&h), LETTER);
        assert_eq!(letter(&h).lines().count(), 17);

        h.wait(10_000);
        assert_eq!(letter(&h), LETTER);
    }

    #[test]
    fn letter_reveals_in_order() {
        let mut h = Harness::new(Page::Final);
        for _ in 0..40 {
            h.wait(CHAR_DELAY);
            assert!(LETTER.starts_with(letter(&h)));
        }
        assert_eq!(letter(&h).chars().count(), 41);
    }

    #[test]
    fn buttons_do_nothing_until_armed() {
        let mut h = Harness::new(Page::Final);
        h.send(UiEvent::Click(WidgetId::Accept));
        h.send(UiEvent::Hover(WidgetId::Decline));
        assert_eq!(h.widget(WidgetId::Decline).offset, Vec2::default());
        assert!(h.widget(WidgetId::FinalMessage).text.is_empty());

        h.wait(ARM_DELAY);
        h.send(UiEvent::Hover(WidgetId::Decline));
        assert_ne!(h.widget(WidgetId::Decline).offset, Vec2::default());
    }

    #[test]
    fn yes_sets_off_the_finale() {
        let mut h = Harness::new(Page::Final);
        h.wait(ARM_DELAY);
        h.send(UiEvent::Click(WidgetId::Accept));

        let msg = h.widget(WidgetId::FinalMessage);
        assert_eq!(msg.text, FOREVER);
        assert_eq!(
            msg.kind,
            WidgetKind::Banner {
                shown_at: Some(ARM_DELAY)
            }
        );
        assert!(h.widget(WidgetId::Accept).disabled);
        assert!(h.widget(WidgetId::Decline).disabled);
        assert_eq!(h.doc.scene.particles.count(Layer::Effects), RAIN_COUNT);

        h.wait((FIREWORK_BURSTS - 1) * FIREWORK_INTERVAL);
        assert_eq!(
            h.doc.scene.particles.count(Layer::Fireworks),
            FIREWORK_BURSTS as usize * FIREWORK.count
        );

        // disabled now: no more dodging
        let before = h.widget(WidgetId::Decline).offset;
        h.send(UiEvent::Hover(WidgetId::Decline));
        assert_eq!(h.widget(WidgetId::Decline).offset, before);

        h.wait(10_000);
        assert_eq!(h.doc.scene.particles.count(Layer::Effects), 0);
        assert_eq!(h.doc.scene.particles.count(Layer::Fireworks), 0);
        assert_eq!(h.widget(WidgetId::FinalMessage).text, FOREVER);
        assert_eq!(h.navigated, None);
    }

    #[test]
    fn letter_still_types_without_buttons() {
        let mut widgets = crate::layout::template(Page::Final);
        widgets.retain(|w| !matches!(w.id, WidgetId::Accept | WidgetId::Decline));
        let scene = Scene::new(Page::Final, Viewport::from_terminal(120, 40), widgets);
        let mut h = Harness::with_scene(scene);
        h.wait(CHAR_DELAY * LETTER.chars().count() as Millis);
        assert_eq!(letter(&h), LETTER);
        assert_eq!(h.doc.timers.pending(), 0);
    }

    #[test]
    fn yes_without_a_message_slot_skips_the_rain() {
        let mut widgets = crate::layout::template(Page::Final);
        widgets.retain(|w| w.id != WidgetId::FinalMessage);
        let scene = Scene::new(Page::Final, Viewport::from_terminal(120, 40), widgets);
        let mut h = Harness::with_scene(scene);
        h.wait(ARM_DELAY);
        h.send(UiEvent::Click(WidgetId::Accept));
        assert_eq!(h.doc.scene.particles.count(Layer::Effects), 0);
        h.wait(0);
        assert_eq!(h.doc.scene.particles.count(Layer::Fireworks), FIREWORK.count);
    }
}
