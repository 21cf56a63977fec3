//! One loaded page: its scene, its timers and the flow wired to it.
//!
//! Navigating builds a new `Document`; the old one is dropped with every
//! timer it still had pending.

use crate::audio::Speaker;
use crate::effects;
use crate::flows::Flow;
use crate::geom::Viewport;
use crate::page::Page;
use crate::particles::ParticleId;
use crate::scene::{Scene, WidgetId};
use crate::timers::{Millis, Timers};
use rand::RngCore;

/// Delayed work, run by the document when it falls due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Task {
    Despawn(ParticleId),
    StartFall(ParticleId),
    FireworkBurst,
    Navigate(Page),
    FocusInput,
    EndShake,
    ClearError,
    TypeNext,
    ArmControls,
}

/// Input, already resolved to the widget it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UiEvent {
    /// Pointer moved onto, or keyboard focus landed on, a widget.
    Hover(WidgetId),
    /// Pointer press on a widget, or Enter on a focused button.
    Click(WidgetId),
    /// A text input's value changed.
    Edit(WidgetId),
    /// Enter pressed inside a text input.
    Enter(WidgetId),
    Escape,
}

/// What a flow handler gets to touch.
pub(crate) struct Ctx<'a> {
    pub(crate) scene: &'a mut Scene,
    pub(crate) timers: &'a mut Timers<Task>,
    pub(crate) rng: &'a mut dyn RngCore,
    pub(crate) speaker: &'a dyn Speaker,
}

pub(crate) struct Document {
    pub(crate) page: Page,
    pub(crate) scene: Scene,
    pub(crate) timers: Timers<Task>,
    flow: Option<Flow>,
}

impl Document {
    pub(crate) fn load(page: Page, viewport: Viewport, rng: &mut dyn RngCore) -> Self {
        Self::from_scene(Scene::for_page(page, viewport), rng)
    }

    pub(crate) fn from_scene(mut scene: Scene, rng: &mut dyn RngCore) -> Self {
        let page = scene.page;
        let mut timers = Timers::new();
        effects::spawn_ambient(&mut scene, 0, rng);
        let flow = Flow::init(&mut scene, &mut timers);
        tracing::info!(
            %page,
            wired = flow.is_some(),
            particles = scene.particles.len(),
            "page loaded"
        );
        Self {
            page,
            scene,
            timers,
            flow,
        }
    }

    pub(crate) fn now(&self) -> Millis {
        self.timers.now()
    }

    pub(crate) fn handle(&mut self, ev: UiEvent, rng: &mut dyn RngCore, speaker: &dyn Speaker) {
        let target = match ev {
            UiEvent::Hover(id) | UiEvent::Click(id) | UiEvent::Edit(id) | UiEvent::Enter(id) => {
                Some(id)
            }
            UiEvent::Escape => None,
        };
        // disabled controls swallow pointer and key input
        if let Some(w) = target.and_then(|id| self.scene.get(id)) {
            if w.disabled {
                return;
            }
        }
        let Some(flow) = self.flow.as_mut() else {
            return;
        };
        let mut ctx = Ctx {
            scene: &mut self.scene,
            timers: &mut self.timers,
            rng,
            speaker,
        };
        flow.on_event(ev, &mut ctx);
    }

    /// Runs everything due up to `until`. Returns the page to navigate to if
    /// a navigation fell due; the rest of this document's work is abandoned.
    pub(crate) fn advance(
        &mut self,
        until: Millis,
        rng: &mut dyn RngCore,
        speaker: &dyn Speaker,
    ) -> Option<Page> {
        while let Some(task) = self.timers.pop_due(until) {
            match task {
                Task::Navigate(page) => {
                    tracing::info!(
                        from = %self.page,
                        to = %page,
                        abandoned = self.timers.pending(),
                        "navigating"
                    );
                    return Some(page);
                }
                Task::Despawn(id) => {
                    self.scene.particles.remove(id);
                }
                Task::StartFall(id) => effects::start_fall(&mut self.scene, id, self.timers.now()),
                Task::FireworkBurst => {
                    effects::firework_burst(&mut self.scene, &mut self.timers, rng)
                }
                other => {
                    if let Some(flow) = self.flow.as_mut() {
                        let mut ctx = Ctx {
                            scene: &mut self.scene,
                            timers: &mut self.timers,
                            rng: &mut *rng,
                            speaker,
                        };
                        flow.on_task(other, &mut ctx);
                    }
                }
            }
        }
        self.timers.advance(until);
        None
    }

    pub(crate) fn resize(&mut self, viewport: Viewport, rng: &mut dyn RngCore) {
        self.scene.relayout(viewport);
        effects::spawn_ambient(&mut self.scene, self.timers.now(), rng);
    }

    /// The terminal regained focus.
    pub(crate) fn became_visible(&mut self, rng: &mut dyn RngCore) {
        effects::spawn_ambient(&mut self.scene, self.timers.now(), rng);
    }

    pub(crate) fn scroll(&mut self, delta: f32) {
        self.scene.scroll_by(delta);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::audio::{AudioError, Speaker};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    #[derive(Default)]
    pub(crate) struct CountingSpeaker {
        pub(crate) plays: Cell<u32>,
        pub(crate) fail: bool,
    }

    impl Speaker for CountingSpeaker {
        fn play_chord(&self) -> Result<(), AudioError> {
            self.plays.set(self.plays.get() + 1);
            if self.fail {
                Err(AudioError::Unsupported)
            } else {
                Ok(())
            }
        }
    }

    /// A document plus everything needed to drive it deterministically.
    pub(crate) struct Harness {
        pub(crate) doc: Document,
        pub(crate) rng: StdRng,
        pub(crate) speaker: CountingSpeaker,
        pub(crate) navigated: Option<Page>,
    }

    impl Harness {
        pub(crate) fn new(page: Page) -> Self {
            let mut rng = StdRng::seed_from_u64(0x5EED);
            let doc = Document::load(page, Viewport::from_terminal(120, 40), &mut rng);
            Self::wrap(doc, rng)
        }

        pub(crate) fn with_scene(scene: Scene) -> Self {
            let mut rng = StdRng::seed_from_u64(0x5EED);
            let doc = Document::from_scene(scene, &mut rng);
            Self::wrap(doc, rng)
        }

        fn wrap(doc: Document, rng: StdRng) -> Self {
            Self {
                doc,
                rng,
                speaker: CountingSpeaker::default(),
                navigated: None,
            }
        }

        pub(crate) fn send(&mut self, ev: UiEvent) {
            self.doc.handle(ev, &mut self.rng, &self.speaker);
        }

        /// Advances the clock by `ms`, remembering the first navigation.
        pub(crate) fn wait(&mut self, ms: Millis) {
            let until = self.doc.now() + ms;
            if let Some(p) = self.doc.advance(until, &mut self.rng, &self.speaker) {
                self.navigated.get_or_insert(p);
            }
        }

        pub(crate) fn type_text(&mut self, id: WidgetId, text: &str) {
            for ch in text.chars() {
                if let Some(w) = self.doc.scene.get_mut(id) {
                    w.text.push(ch);
                }
                self.send(UiEvent::Edit(id));
            }
        }

        pub(crate) fn widget(&self, id: WidgetId) -> &crate::scene::Widget {
            self.doc.scene.get(id).expect("widget exists")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;
    use crate::particles::Layer;

    #[test]
    fn load_spawns_ambient_hearts() {
        let h = Harness::new(Page::Gallery);
        assert_eq!(h.doc.scene.particles.count(Layer::Ambient), 12);
    }

    #[test]
    fn resize_respawns_for_the_new_width() {
        let mut h = Harness::new(Page::Proposal);
        h.doc.resize(Viewport::from_terminal(80, 30), &mut h.rng);
        assert_eq!(h.doc.scene.particles.count(Layer::Ambient), 8);
        h.doc.became_visible(&mut h.rng);
        assert_eq!(h.doc.scene.particles.count(Layer::Ambient), 8);
    }

    #[test]
    fn disabled_targets_get_no_events() {
        let mut h = Harness::new(Page::Verify);
        assert!(h.widget(WidgetId::Continue).disabled);
        h.send(UiEvent::Click(WidgetId::Continue));
        h.wait(2_000);
        assert_eq!(h.navigated, None);
        assert_eq!(h.doc.scene.particles.count(Layer::Effects), 0);
    }

    #[test]
    fn page_without_required_widgets_ignores_input() {
        let scene = Scene::new(Page::Proposal, Viewport::from_terminal(120, 40), Vec::new());
        let mut h = Harness::with_scene(scene);
        h.send(UiEvent::Click(WidgetId::Accept));
        h.wait(5_000);
        assert_eq!(h.navigated, None);
        assert_eq!(h.doc.scene.particles.len(), 0);
    }
}
