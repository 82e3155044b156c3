//! Click-triggered particle bursts.

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::palette::PALETTE;
use super::particle::{EffectParticle, Motion};
use super::random::{Lcg, RandomSource};
use super::timer::TimerQueue;
use crate::config::ConfigError;
use crate::event::{ClickListener, PointerEvent, Propagation};
use crate::motion::{CubicBezier, Transform, Transition};
use crate::surface::{ElementId, Surface};

/// Tunables for the click burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    pub enabled: bool,
    pub min_count: u32,
    pub max_count: u32,
    /// Smallest particle diameter in pixels.
    pub min_size: u32,
    pub max_size: u32,
    /// Largest drift per axis in pixels.
    pub spread: f64,
    pub scale: f64,
    #[serde(with = "crate::motion::millis")]
    pub start_delay: Duration,
    #[serde(with = "crate::motion::millis")]
    pub transition: Duration,
    #[serde(with = "crate::motion::millis")]
    pub lifetime: Duration,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_count: 2,
            max_count: 4,
            min_size: 8,
            max_size: 22,
            spread: 50.0,
            scale: 2.0,
            start_delay: Duration::from_millis(50),
            transition: Duration::from_millis(800),
            lifetime: Duration::from_millis(850),
        }
    }
}

impl EffectSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_count == 0 || self.min_count > self.max_count {
            return Err(ConfigError::Invalid(format!(
                "effects: particle count range {}..={} is empty",
                self.min_count, self.max_count
            )));
        }
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "effects: particle size range {}..={} is empty",
                self.min_size, self.max_size
            )));
        }
        if !(self.spread.is_finite() && self.spread >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "effects: spread must be a non-negative number, got {}",
                self.spread
            )));
        }
        if self.lifetime <= self.start_delay {
            return Err(ConfigError::Invalid(format!(
                "effects: lifetime {}ms must exceed start delay {}ms",
                self.lifetime.as_millis(),
                self.start_delay.as_millis()
            )));
        }
        Ok(())
    }

    fn transition(&self) -> Transition {
        Transition::new(self.transition, CubicBezier::EASE_OUT_QUAD)
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Fade(ElementId),
    Detach(ElementId),
}

/// Capture-phase listener that decorates every primary click.
///
/// Each burst is independent: its particles carry their own deadlines and
/// are detached when those fire, whatever else happens on the page.
pub struct EffectEmitter {
    settings: EffectSettings,
    rng: Box<dyn RandomSource>,
    timers: TimerQueue<Step>,
    live: BTreeMap<ElementId, EffectParticle>,
}

impl EffectEmitter {
    /// Creates an emitter seeded from the clock.
    pub fn new(settings: EffectSettings) -> Self {
        Self::with_rng(settings, Box::new(Lcg::from_clock()))
    }

    pub fn with_rng(settings: EffectSettings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            settings,
            rng,
            timers: TimerQueue::new(),
            live: BTreeMap::new(),
        }
    }

    /// Creates an emitter only when there is a surface to decorate and the
    /// effect is enabled.
    pub fn install(surface: Option<&dyn Surface>, settings: EffectSettings) -> Option<Self> {
        if surface.is_none() {
            debug!("no surface available, click effect not installed");
            return None;
        }
        if !settings.enabled {
            debug!("click effect disabled by configuration");
            return None;
        }
        Some(Self::new(settings))
    }

    pub fn settings(&self) -> &EffectSettings {
        &self.settings
    }

    /// Spawns one burst centred on `(x, y)`.
    pub fn spawn(
        &mut self,
        x: f64,
        y: f64,
        now: Duration,
        surface: &mut dyn Surface,
    ) -> Vec<ElementId> {
        let count = self
            .rng
            .int_inclusive(self.settings.min_count, self.settings.max_count);
        let mut spawned = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let size = self
                .rng
                .int_inclusive(self.settings.min_size, self.settings.max_size);
            let (_, color) = PALETTE[self.rng.index(PALETTE.len())];

            let mut particle = EffectParticle {
                element: ElementId(0),
                size,
                origin: (x, y),
                color,
                created_at: now,
                lifetime: self.settings.lifetime,
                transition: self.settings.transition(),
                motion: None,
            };
            let Some(id) = surface.attach(particle.element()) else {
                debug!("surface refused particle, burst abandoned");
                break;
            };
            particle.element = id;

            self.timers.schedule(now + self.settings.start_delay, Step::Fade(id));
            self.timers.schedule(particle.expires_at(), Step::Detach(id));
            self.live.insert(id, particle);
            spawned.push(id);
        }

        debug!("spawned {} particles at ({x:.0}, {y:.0})", spawned.len());
        spawned
    }

    /// Fires every step due at or before `now`. Returns how many fired.
    pub fn advance(&mut self, now: Duration, surface: &mut dyn Surface) -> usize {
        let mut fired = 0;
        while let Some(step) = self.timers.pop_due(now) {
            fired += 1;
            match step {
                Step::Fade(id) => self.start_fade(id, now, surface),
                Step::Detach(id) => {
                    self.live.remove(&id);
                    if !surface.detach(id) {
                        trace!("particle {id:?} already gone");
                    }
                }
            }
        }
        fired
    }

    fn start_fade(&mut self, id: ElementId, now: Duration, surface: &mut dyn Surface) {
        let Some(particle) = self.live.get_mut(&id) else {
            return;
        };
        let dx = self.rng.symmetric(self.settings.spread);
        let dy = self.rng.symmetric(self.settings.spread);
        particle.motion = Some(Motion {
            started_at: now,
            target: Transform::new(self.settings.scale, dx, dy),
        });
        surface.restyle(id, particle.target_style());
    }

    /// Particles still attached.
    pub fn live(&self) -> impl Iterator<Item = &EffectParticle> {
        self.live.values()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn particle(&self, id: ElementId) -> Option<&EffectParticle> {
        self.live.get(&id)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_steps(&self) -> usize {
        self.timers.len()
    }
}

impl ClickListener for EffectEmitter {
    fn on_click(
        &mut self,
        event: &PointerEvent,
        now: Duration,
        surface: &mut dyn Surface,
    ) -> Propagation {
        if event.button.is_primary() {
            self.spawn(event.x, event.y, now, surface);
        }
        Propagation::Continue
    }
}

impl std::fmt::Debug for EffectEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectEmitter")
            .field("settings", &self.settings)
            .field("live", &self.live.len())
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}
