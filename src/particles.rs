//! Short-lived decorative glyphs and how they move over time.
//!
//! A particle never changes after it is spawned except for a fall being armed;
//! where it is drawn is a pure function of the scene clock.

use crate::geom::Vec2;
use crate::palette::Rgb;
use crate::timers::Millis;
use std::f32::consts::TAU;

pub(crate) type ParticleId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Glyph {
    pub(crate) ch: char,
    pub(crate) tint: Rgb,
}

const fn g(ch: char, r: u8, gg: u8, b: u8) -> Glyph {
    Glyph {
        ch,
        tint: Rgb::new(r, gg, b),
    }
}

/// Ambient and small-burst set.
pub(crate) const HEARTS: [Glyph; 5] = [
    g('♥', 235, 45, 75),
    g('♡', 255, 140, 190),
    g('❤', 255, 85, 150),
    g('❥', 250, 110, 170),
    g('❣', 240, 70, 200),
];

/// Explosion and rain set: the small set plus one more.
pub(crate) const HEARTS_WIDE: [Glyph; 6] = [
    g('♥', 235, 45, 75),
    g('♡', 255, 140, 190),
    g('❤', 255, 85, 150),
    g('❥', 250, 110, 170),
    g('❣', 240, 70, 200),
    g('❦', 255, 120, 120),
];

pub(crate) const SPARKLES: [Glyph; 6] = [
    g('✦', 255, 235, 150),
    g('♥', 255, 95, 160),
    g('❣', 240, 70, 200),
    g('♡', 255, 140, 190),
    g('★', 255, 215, 80),
    g('✺', 255, 160, 70),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Layer {
    Ambient,
    Effects,
    Fireworks,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Motion {
    /// Endless gentle bob.
    Float { duration: Millis },
    /// Ease out towards `to` while fading.
    Explode { to: Vec2, duration: Millis },
    /// Linear drop once `started_at` is set.
    Fall {
        distance: f32,
        duration: Millis,
        started_at: Option<Millis>,
    },
}

#[derive(Clone, Debug)]
pub(crate) struct Particle {
    pub(crate) id: ParticleId,
    pub(crate) layer: Layer,
    pub(crate) glyph: Glyph,
    pub(crate) origin: Vec2,
    /// Font scale in rem.
    pub(crate) size: f32,
    pub(crate) opacity: f32,
    pub(crate) born_at: Millis,
    pub(crate) delay: Millis,
    pub(crate) motion: Motion,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Sample {
    pub(crate) pos: Vec2,
    pub(crate) alpha: f32,
}

const FLOAT_AMPLITUDE: f32 = 20.0;

impl Particle {
    pub(crate) fn sample(&self, now: Millis) -> Sample {
        let start = self.born_at + self.delay;
        let still = Sample {
            pos: self.origin,
            alpha: self.opacity,
        };

        match self.motion {
            Motion::Float { duration } => {
                if now < start || duration == 0 {
                    return still;
                }
                let phase = ((now - start) % duration) as f32 / duration as f32;
                let dy = -FLOAT_AMPLITUDE * (phase * TAU).sin();
                Sample {
                    pos: self.origin.add(Vec2::new(0.0, dy)),
                    alpha: self.opacity,
                }
            }
            Motion::Explode { to, duration } => {
                if now < start {
                    return still;
                }
                let p = progress(now - start, duration);
                let eased = 1.0 - (1.0 - p).powi(3);
                Sample {
                    pos: self.origin.add(to.scale(eased)),
                    alpha: self.opacity * (1.0 - p),
                }
            }
            Motion::Fall {
                distance,
                duration,
                started_at,
            } => {
                let Some(at) = started_at else {
                    return still;
                };
                let p = progress(now.saturating_sub(at), duration);
                Sample {
                    pos: self.origin.add(Vec2::new(0.0, distance * p)),
                    alpha: self.opacity * (1.0 - p),
                }
            }
        }
    }
}

fn progress(elapsed: Millis, duration: Millis) -> f32 {
    if duration == 0 {
        return 1.0;
    }
    (elapsed as f32 / duration as f32).min(1.0)
}

/// Everything currently alive in a scene, in spawn order.
#[derive(Default)]
pub(crate) struct ParticleField {
    next_id: ParticleId,
    items: Vec<Particle>,
}

/// Spawn parameters; the field assigns the id.
pub(crate) struct Spawn {
    pub(crate) layer: Layer,
    pub(crate) glyph: Glyph,
    pub(crate) origin: Vec2,
    pub(crate) size: f32,
    pub(crate) opacity: f32,
    pub(crate) born_at: Millis,
    pub(crate) delay: Millis,
    pub(crate) motion: Motion,
}

impl ParticleField {
    pub(crate) fn spawn(&mut self, s: Spawn) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Particle {
            id,
            layer: s.layer,
            glyph: s.glyph,
            origin: s.origin,
            size: s.size,
            opacity: s.opacity,
            born_at: s.born_at,
            delay: s.delay,
            motion: s.motion,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ParticleId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub(crate) fn clear_layer(&mut self, layer: Layer) {
        self.items.retain(|p| p.layer != layer);
    }

    pub(crate) fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.items.iter_mut().find(|p| p.id == id)
    }

    pub(crate) fn count(&self, layer: Layer) -> usize {
        self.items.iter().filter(|p| p.layer == layer).count()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter()
    }
}
