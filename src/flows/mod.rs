//! Page behaviour. Each flow is created by its page's initializer, which
//! returns `None` when the page lacks the widgets it needs.

mod finale;
mod gallery;
mod proposal;
mod verify;

pub(crate) use finale::Finale;
pub(crate) use gallery::Gallery;
pub(crate) use proposal::Proposal;
pub(crate) use verify::Verify;

use crate::document::{Ctx, Task, UiEvent};
use crate::page::Page;
use crate::scene::Scene;
use crate::timers::Timers;

pub(crate) enum Flow {
    Proposal(Proposal),
    Verify(Verify),
    Gallery(Gallery),
    Final(Finale),
}

impl Flow {
    pub(crate) fn init(scene: &mut Scene, timers: &mut Timers<Task>) -> Option<Flow> {
        match scene.page {
            Page::Proposal => Proposal::init(scene).map(Flow::Proposal),
            Page::Verify => Verify::init(scene, timers).map(Flow::Verify),
            Page::Gallery => Gallery::init(scene).map(Flow::Gallery),
            Page::Final => Some(Flow::Final(Finale::init(scene, timers))),
        }
    }

    pub(crate) fn on_event(&mut self, ev: UiEvent, ctx: &mut Ctx<'_>) {
        match self {
            Flow::Proposal(f) => f.on_event(ev, ctx),
            Flow::Verify(f) => f.on_event(ev, ctx),
            Flow::Gallery(f) => f.on_event(ev, ctx),
            Flow::Final(f) => f.on_event(ev, ctx),
        }
    }

    pub(crate) fn on_task(&mut self, task: Task, ctx: &mut Ctx<'_>) {
        match self {
            Flow::Verify(f) => f.on_task(task, ctx),
            Flow::Final(f) => f.on_task(task, ctx),
            Flow::Proposal(_) | Flow::Gallery(_) => {}
        }
    }
}
