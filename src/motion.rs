//! Transition timing and transform primitives for animated elements.
//!
//! Elements on a [`Surface`](crate::surface::Surface) animate the way CSS
//! transitions do: a style change is declared once together with a
//! [`Transition`], and the rendered value at any instant is the eased blend
//! between the old and new style.

use std::time::Duration;

use serde::Serialize;

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-6;

impl CubicBezier {
    /// The quadratic ease-out curve used by the click particles.
    pub const EASE_OUT_QUAD: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        sample(self.y1, self.y2, s)
    }

    // Finds the curve parameter whose x equals `x`. Newton first, bisection
    // when the slope is too flat to trust.
    fn solve_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let slope = slope(self.x1, self.x2, s);
            if slope.abs() < EPSILON {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

impl std::fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

// One axis of a bezier with endpoints fixed at 0 and 1.
fn sample(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Duration and easing applied to every style change on an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    #[serde(with = "millis")]
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Transition {
    pub fn new(duration: Duration, easing: CubicBezier) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed` time.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.ease(t)
    }

    /// CSS `transition` shorthand covering all properties.
    pub fn to_css(&self) -> String {
        format!("all {}s {}", self.duration.as_secs_f64(), self.easing)
    }
}

/// Scale followed by translation, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// Blends towards `to` by `progress` in `[0, 1]`.
    pub fn lerp(&self, to: &Transform, progress: f64) -> Transform {
        Transform {
            scale: lerp(self.scale, to.scale, progress),
            translate_x: lerp(self.translate_x, to.translate_x, progress),
            translate_y: lerp(self.translate_y, to.translate_y, progress),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "scale({}) translate({:.1}px, {:.1}px)",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

pub(crate) mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
