use crate::document::UiEvent;
use crate::geom::{Vec2, CELL_H};
use crate::scene::{Scene, WidgetId, WidgetKind};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

const INPUT_MAX: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
    Quit,
    Resize(u16, u16),
    /// Terminal regained focus.
    Visible,
    Scroll(f32),
    Ui(UiEvent),
}

pub(crate) fn collect_events_nonblocking(max_frame_time: Duration) -> anyhow::Result<Vec<Event>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so we stay responsive
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);
    while event::poll(timeout)? {
        let ev = event::read()?;
        if let Event::Key(k) = &ev {
            if k.kind == KeyEventKind::Release {
                continue;
            }
        }
        out.push(ev);
        if out.len() >= 64 {
            break;
        }
    }
    Ok(out)
}

/// Resolves a terminal event against the scene. Typing goes straight into the
/// focused input, pointer motion updates hover, and focus moves on Tab.
pub(crate) fn translate(scene: &mut Scene, ev: Event) -> Vec<Action> {
    match ev {
        Event::Key(k) => translate_key(scene, k),
        Event::Mouse(m) => translate_mouse(scene, m),
        Event::Resize(c, r) => vec![Action::Resize(c, r)],
        Event::FocusGained => vec![Action::Visible],
        _ => Vec::new(),
    }
}

fn translate_key(scene: &mut Scene, k: KeyEvent) -> Vec<Action> {
    if k.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(k.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    let focused = scene
        .focus
        .and_then(|id| scene.get(id))
        .map(|w| (w.id, w.kind.clone()));

    match k.code {
        KeyCode::Tab => focus_step(scene, 1),
        KeyCode::BackTab => focus_step(scene, -1),
        KeyCode::Esc => vec![Action::Ui(UiEvent::Escape)],
        KeyCode::Enter => match focused {
            Some((id, WidgetKind::Input)) => vec![Action::Ui(UiEvent::Enter(id))],
            Some((id, _)) => vec![Action::Ui(UiEvent::Click(id))],
            None => Vec::new(),
        },
        KeyCode::Char(ch) => match focused {
            Some((id, WidgetKind::Input)) => edit(scene, id, |t| {
                if t.chars().count() < INPUT_MAX {
                    t.push(ch);
                }
            }),
            _ => Vec::new(),
        },
        KeyCode::Backspace => match focused {
            Some((id, WidgetKind::Input)) => edit(scene, id, |t| {
                t.pop();
            }),
            _ => Vec::new(),
        },
        KeyCode::Up => vec![Action::Scroll(-CELL_H)],
        KeyCode::Down => vec![Action::Scroll(CELL_H)],
        KeyCode::PageUp => vec![Action::Scroll(-scene.viewport.height * 0.8)],
        KeyCode::PageDown => vec![Action::Scroll(scene.viewport.height * 0.8)],
        _ => Vec::new(),
    }
}

fn focus_step(scene: &mut Scene, step: i32) -> Vec<Action> {
    match scene.cycle_focus(step) {
        // focus arriving counts as the pointer arriving
        Some(id) => vec![Action::Ui(UiEvent::Hover(id))],
        None => Vec::new(),
    }
}

fn edit(scene: &mut Scene, id: WidgetId, f: impl FnOnce(&mut String)) -> Vec<Action> {
    let Some(w) = scene.get_mut(id) else {
        return Vec::new();
    };
    let before = w.text.clone();
    f(&mut w.text);
    if w.text == before {
        return Vec::new();
    }
    vec![Action::Ui(UiEvent::Edit(id))]
}

fn translate_mouse(scene: &mut Scene, m: MouseEvent) -> Vec<Action> {
    let p = Vec2::from_cell(m.column, m.row);
    match m.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let target = scene.hit(p);
            if target == scene.hovered {
                return Vec::new();
            }
            scene.hovered = target;
            match target {
                Some(id) => vec![Action::Ui(UiEvent::Hover(id))],
                None => Vec::new(),
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(id) = scene.hit(p) else {
                return Vec::new();
            };
            let focusable = scene.get(id).is_some_and(|w| w.focusable() && !w.disabled);
            if focusable {
                scene.focus = Some(id);
            }
            vec![Action::Ui(UiEvent::Click(id))]
        }
        MouseEventKind::ScrollUp => vec![Action::Scroll(-3.0 * CELL_H)],
        MouseEventKind::ScrollDown => vec![Action::Scroll(3.0 * CELL_H)],
        _ => Vec::new(),
    }
}
