use crate::document::{Ctx, Task, UiEvent};
use crate::effects::heart_burst;
use crate::page::Page;
use crate::scene::{Scene, WidgetId};
use crate::timers::{Millis, Timers};

pub(crate) const MAGIC_WORDS: &str = "i love you too";
pub(crate) const ERROR_TEXT: &str = "Ayy :P that's not the correct words";

pub(crate) const FOCUS_DELAY: Millis = 500;
pub(crate) const SHAKE_FOR: Millis = 500;
pub(crate) const ERROR_FOR: Millis = 3_000;
pub(crate) const NAV_DELAY: Millis = 800;

/// Input as it is compared: outer whitespace trimmed, lowercased.
pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

pub(crate) fn is_magic(input: &str) -> bool {
    normalize(input) == MAGIC_WORDS
}

/// The "say it back" gate in front of the gallery.
pub(crate) struct Verify;

impl Verify {
    pub(crate) fn init(scene: &Scene, timers: &mut Timers<Task>) -> Option<Self> {
        if !scene.has(WidgetId::MagicInput) || !scene.has(WidgetId::Continue) {
            return None;
        }
        timers.after(FOCUS_DELAY, Task::FocusInput);
        Some(Verify)
    }

    pub(crate) fn on_event(&mut self, ev: UiEvent, ctx: &mut Ctx<'_>) {
        match ev {
            UiEvent::Edit(WidgetId::MagicInput) => self.check(ctx.scene),
            UiEvent::Enter(WidgetId::MagicInput) => {
                let locked = ctx
                    .scene
                    .get(WidgetId::Continue)
                    .map_or(true, |w| w.disabled);
                if locked {
                    self.show_error(ctx);
                }
            }
            UiEvent::Click(WidgetId::Continue) => {
                let open = ctx
                    .scene
                    .get(WidgetId::Continue)
                    .is_some_and(|w| !w.disabled);
                if open {
                    heart_burst(ctx.scene, ctx.timers, &mut *ctx.rng);
                    ctx.timers.after(NAV_DELAY, Task::Navigate(Page::Gallery));
                }
            }
            _ => {}
        }
    }

    pub(crate) fn on_task(&mut self, task: Task, ctx: &mut Ctx<'_>) {
        match task {
            Task::FocusInput => ctx.scene.focus = Some(WidgetId::MagicInput),
            Task::EndShake => {
                if let Some(w) = ctx.scene.get_mut(WidgetId::MagicInput) {
                    w.shaking = false;
                }
            }
            Task::ClearError => {
                if let Some(w) = ctx.scene.get_mut(WidgetId::ErrorMessage) {
                    w.text.clear();
                }
            }
            _ => {}
        }
    }

    fn check(&mut self, scene: &mut Scene) {
        if let Some(w) = scene.get_mut(WidgetId::ErrorMessage) {
            w.text.clear();
        }
        let matched = scene
            .get(WidgetId::MagicInput)
            .is_some_and(|w| is_magic(&w.text));
        if let Some(w) = scene.get_mut(WidgetId::Continue) {
            w.disabled = !matched;
            w.success = matched;
        }
    }

    fn show_error(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(w) = ctx.scene.get_mut(WidgetId::MagicInput) {
            w.shaking = true;
        }
        if let Some(w) = ctx.scene.get_mut(WidgetId::ErrorMessage) {
            w.text = ERROR_TEXT.to_string();
        }
        ctx.timers.after(SHAKE_FOR, Task::EndShake);
        ctx.timers.after(ERROR_FOR, Task::ClearError);
        tracing::debug!("wrong magic words");
    }
}
