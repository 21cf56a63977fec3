//! Particle effects: the floating background and the burst family.
//!
//! Every burst particle gets a removal timer that outlives its animation, so
//! repeated triggers never accumulate particles.

use crate::document::Task;
use crate::geom::{Rect, Vec2};
use crate::particles::{Glyph, Layer, Motion, ParticleId, Spawn, HEARTS, HEARTS_WIDE, SPARKLES};
use crate::scene::{Scene, WidgetId};
use crate::timers::{Millis, Timers};
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

/// Viewports wider than this get the larger ambient set.
pub(crate) const AMBIENT_BREAKPOINT: f32 = 768.0;
pub(crate) const AMBIENT_WIDE: usize = 12;
pub(crate) const AMBIENT_NARROW: usize = 8;

pub(crate) fn ambient_count(viewport_width: f32) -> usize {
    if viewport_width > AMBIENT_BREAKPOINT {
        AMBIENT_WIDE
    } else {
        AMBIENT_NARROW
    }
}

fn pick<R: Rng + ?Sized>(glyphs: &[Glyph], rng: &mut R) -> Glyph {
    glyphs.choose(rng).copied().unwrap_or(HEARTS[0])
}

fn secs(rng: &mut (impl Rng + ?Sized), base: f32, span: f32) -> Millis {
    ((base + rng.gen::<f32>() * span) * 1000.0) as Millis
}

/// Replaces the floating background hearts. A page without an ambient layer
/// gets none.
pub(crate) fn spawn_ambient<R: Rng + ?Sized>(scene: &mut Scene, now: Millis, rng: &mut R) {
    if !scene.has(WidgetId::AmbientLayer) {
        return;
    }
    scene.particles.clear_layer(Layer::Ambient);

    let vp = scene.viewport;
    let count = ambient_count(vp.width);
    for _ in 0..count {
        let glyph = pick(&HEARTS, rng);
        let delay = secs(rng, 0.0, 5.0);
        let duration = secs(rng, 6.0, 4.0);
        let x = rng.gen::<f32>() * vp.width;
        let size = 1.5 + rng.gen::<f32>() * 1.5;
        let y = rng.gen::<f32>() * vp.height;
        let opacity = 0.4 + rng.gen::<f32>() * 0.3;
        scene.particles.spawn(Spawn {
            layer: Layer::Ambient,
            glyph,
            origin: Vec2::new(x, y),
            size,
            opacity,
            born_at: now,
            delay,
            motion: Motion::Float { duration },
        });
    }
    tracing::debug!(count, width = vp.width, "ambient hearts spawned");
}

/// Shape of one radial burst.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BurstSpec {
    pub(crate) count: usize,
    pub(crate) glyphs: &'static [Glyph],
    pub(crate) min_distance: f32,
    pub(crate) distance_span: f32,
    pub(crate) duration: Millis,
    pub(crate) max_delay: f32,
    pub(crate) remove_after: Millis,
    /// Size range as (min, span) in rem.
    pub(crate) size: (f32, f32),
    pub(crate) layer: Layer,
}

pub(crate) const EXPLOSION: BurstSpec = BurstSpec {
    count: 30,
    glyphs: &HEARTS_WIDE,
    min_distance: 150.0,
    distance_span: 150.0,
    duration: 1_500,
    max_delay: 0.3,
    remove_after: 2_000,
    size: (2.0, 0.0),
    layer: Layer::Effects,
};

pub(crate) const BURST: BurstSpec = BurstSpec {
    count: 20,
    glyphs: &HEARTS,
    min_distance: 100.0,
    distance_span: 120.0,
    duration: 1_200,
    max_delay: 0.2,
    remove_after: 1_500,
    size: (2.0, 0.0),
    layer: Layer::Effects,
};

pub(crate) const FIREWORK: BurstSpec = BurstSpec {
    count: 30,
    glyphs: &SPARKLES,
    min_distance: 80.0,
    distance_span: 120.0,
    duration: 1_500,
    max_delay: 0.2,
    remove_after: 2_000,
    size: (1.0, 1.0),
    layer: Layer::Fireworks,
};

pub(crate) const FIREWORK_BURSTS: u64 = 8;
pub(crate) const FIREWORK_INTERVAL: Millis = 200;

pub(crate) const RAIN_COUNT: usize = 30;
const RAIN_TOP: f32 = -50.0;
const RAIN_MARGIN: f32 = 200.0;
const RAIN_OPACITY: f32 = 0.7;
pub(crate) const RAIN_ARM_DELAY: Millis = 50;
pub(crate) const RAIN_REMOVE_AFTER: Millis = 5_500;

/// Emits `spec.count` particles evenly spaced around `origin`: particle i
/// heads out at angle i/count of a full turn, with a random distance and a
/// random start delay.
pub(crate) fn emit_burst<R: Rng + ?Sized>(
    scene: &mut Scene,
    timers: &mut Timers<Task>,
    rng: &mut R,
    origin: Vec2,
    spec: &BurstSpec,
) {
    let now = timers.now();
    for i in 0..spec.count {
        let glyph = pick(spec.glyphs, rng);
        let angle = (i as f32 / spec.count as f32) * TAU;
        let distance = spec.min_distance + rng.gen::<f32>() * spec.distance_span;
        let to = Vec2::new(angle.cos() * distance, angle.sin() * distance);
        let size = spec.size.0 + rng.gen::<f32>() * spec.size.1;
        let delay = (rng.gen::<f32>() * spec.max_delay * 1000.0) as Millis;

        let id = scene.particles.spawn(Spawn {
            layer: spec.layer,
            glyph,
            origin,
            size,
            opacity: 1.0,
            born_at: now,
            delay,
            motion: Motion::Explode {
                to,
                duration: spec.duration,
            },
        });
        timers.after(spec.remove_after, Task::Despawn(id));
    }
}

/// Large burst centred on a control.
pub(crate) fn heart_explosion<R: Rng + ?Sized>(
    scene: &mut Scene,
    timers: &mut Timers<Task>,
    rng: &mut R,
    from: Rect,
) {
    emit_burst(scene, timers, rng, from.center(), &EXPLOSION);
    tracing::debug!("heart explosion");
}

/// Smaller burst centred on the viewport.
pub(crate) fn heart_burst<R: Rng + ?Sized>(
    scene: &mut Scene,
    timers: &mut Timers<Task>,
    rng: &mut R,
) {
    let origin = scene.viewport.center();
    emit_burst(scene, timers, rng, origin, &BURST);
    tracing::debug!("heart burst");
}

/// Schedules the staggered firework bursts; burst b fires at b * interval.
pub(crate) fn fireworks(timers: &mut Timers<Task>) {
    for b in 0..FIREWORK_BURSTS {
        timers.after(b * FIREWORK_INTERVAL, Task::FireworkBurst);
    }
}

/// One firework from a random point in the upper part of the viewport. A
/// page without a fireworks layer shows nothing.
pub(crate) fn firework_burst<R: Rng + ?Sized>(
    scene: &mut Scene,
    timers: &mut Timers<Task>,
    rng: &mut R,
) {
    if !scene.has(WidgetId::FireworksLayer) {
        return;
    }
    let vp = scene.viewport;
    let origin = Vec2::new(
        rng.gen::<f32>() * vp.width,
        rng.gen::<f32>() * (vp.height * 0.6),
    );
    emit_burst(scene, timers, rng, origin, &FIREWORK);
}

/// Hearts dropping from above the top edge to below the bottom edge.
pub(crate) fn heart_rain<R: Rng + ?Sized>(
    scene: &mut Scene,
    timers: &mut Timers<Task>,
    rng: &mut R,
) {
    let vp = scene.viewport;
    let now = timers.now();
    let distance = vp.height + RAIN_MARGIN;
    for _ in 0..RAIN_COUNT {
        let glyph = pick(&HEARTS_WIDE, rng);
        let x = rng.gen::<f32>() * vp.width;
        let size = 1.2 + rng.gen::<f32>() * 1.2;
        let duration = secs(rng, 3.0, 2.0);
        let id = scene.particles.spawn(Spawn {
            layer: Layer::Effects,
            glyph,
            origin: Vec2::new(x, RAIN_TOP),
            size,
            opacity: RAIN_OPACITY,
            born_at: now,
            delay: 0,
            motion: Motion::Fall {
                distance,
                duration,
                started_at: None,
            },
        });
        timers.after(RAIN_ARM_DELAY, Task::StartFall(id));
        timers.after(RAIN_REMOVE_AFTER, Task::Despawn(id));
    }
    tracing::debug!("heart rain");
}

/// Starts a rain particle's fall at the current scene time.
pub(crate) fn start_fall(scene: &mut Scene, id: ParticleId, now: Millis) {
    if let Some(p) = scene.particles.get_mut(id) {
        if let Motion::Fall { started_at, .. } = &mut p.motion {
            *started_at = Some(now);
        }
    }
}
