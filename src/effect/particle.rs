//! A single click particle and its animation state.

use std::time::Duration;

use serde::Serialize;

use crate::motion::{lerp, Transform, Transition};
use crate::surface::{Element, ElementId, ElementStyle, Rgba};

/// Class carried by every particle element.
pub const PARTICLE_CLASS: &str = "pointer-events-none absolute rounded-full z-50";

/// The fade-out leg of a particle's life, fixed once it starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    #[serde(with = "crate::motion::millis")]
    pub started_at: Duration,
    pub target: Transform,
}

/// Rendered state of a particle at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleFrame {
    pub opacity: f64,
    pub transform: Transform,
}

/// A short-lived decorative dot spawned by a click.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectParticle {
    pub element: ElementId,
    /// Diameter in pixels.
    pub size: u32,
    /// Click point the particle is centred on.
    pub origin: (f64, f64),
    pub color: Rgba,
    #[serde(with = "crate::motion::millis")]
    pub created_at: Duration,
    #[serde(with = "crate::motion::millis")]
    pub lifetime: Duration,
    pub transition: Transition,
    pub motion: Option<Motion>,
}

impl EffectParticle {
    /// Time at which the particle is detached.
    pub fn expires_at(&self) -> Duration {
        self.created_at + self.lifetime
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at()
    }

    /// The element as first attached: centred on the click, fully opaque.
    pub fn element(&self) -> Element {
        Element {
            class: PARTICLE_CLASS.to_string(),
            style: self.initial_style(),
            attached_at: self.created_at,
        }
    }

    pub fn initial_style(&self) -> ElementStyle {
        let size = f64::from(self.size);
        ElementStyle {
            left: self.origin.0 - size / 2.0,
            top: self.origin.1 - size / 2.0,
            width: size,
            height: size,
            background: self.color,
            opacity: 1.0,
            transform: Transform::IDENTITY,
            transition: Some(self.transition),
        }
    }

    /// The style the transition runs towards once the fade has started.
    pub fn target_style(&self) -> ElementStyle {
        let mut style = self.initial_style();
        if let Some(motion) = &self.motion {
            style.opacity = 0.0;
            style.transform = motion.target;
        }
        style
    }

    /// Eased opacity and transform at `now`.
    pub fn sample(&self, now: Duration) -> ParticleFrame {
        let Some(motion) = self.motion.filter(|m| now >= m.started_at) else {
            return ParticleFrame {
                opacity: 1.0,
                transform: Transform::IDENTITY,
            };
        };
        let progress = self.transition.progress(now - motion.started_at);
        ParticleFrame {
            opacity: lerp(1.0, 0.0, progress),
            transform: Transform::IDENTITY.lerp(&motion.target, progress),
        }
    }
}
