// One-dimensional two-body collisions and the momentum curves drawn around them

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::SMOOTH_STEP_WIDTH;
use crate::{DiagramError, Result};

fn check_masses(m1: f64, m2: f64) -> Result<()> {
    if !(m1 > 0.0 && m2 > 0.0 && m1.is_finite() && m2.is_finite()) {
        return Err(DiagramError::InvalidParameter(format!(
            "masses must be positive and finite, got {} and {}",
            m1, m2
        )));
    }
    Ok(())
}

/// Post-collision velocities of a perfectly elastic head-on collision
pub fn elastic_collision(m1: f64, v1: f64, m2: f64, v2: f64) -> Result<(f64, f64)> {
    check_masses(m1, m2)?;
    let total = m1 + m2;
    let u1 = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let u2 = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    Ok((u1, u2))
}

/// Common velocity after the bodies stick together
pub fn perfectly_inelastic_collision(m1: f64, v1: f64, m2: f64, v2: f64) -> Result<f64> {
    check_masses(m1, m2)?;
    Ok((m1 * v1 + m2 * v2) / (m1 + m2))
}

/// Sigmoid blend from 0 to 1 centered on `t0`
///
/// `width` is roughly the time it takes to go from 2% to 98%. A non-positive
/// width gives a hard step that takes 0.5 at `t0` itself.
pub fn smooth_step(t: f64, t0: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return match t.partial_cmp(&t0) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            _ => 0.5,
        };
    }
    1.0 / (1.0 + (-(t - t0) / (width / 4.0)).exp())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionKind {
    Elastic,
    PerfectlyInelastic,
}

/// A body on the track: mass, center position, velocity and box size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mass: f64,
    pub position: f64,
    pub velocity: f64,
    pub size: f64,
}

impl Body {
    pub fn new(mass: f64, position: f64, velocity: f64, size: f64) -> Self {
        Self {
            mass,
            position,
            velocity,
            size,
        }
    }

    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }
}

/// Approach, contact and separation of body `a` (behind) and body `b` (ahead)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionTimeline {
    a: Body,
    b: Body,
    kind: CollisionKind,
    contact_time: Option<f64>,
    after: (f64, f64),
}

impl CollisionTimeline {
    pub fn new(a: Body, b: Body, kind: CollisionKind) -> Result<Self> {
        let after = match kind {
            CollisionKind::Elastic => elastic_collision(a.mass, a.velocity, b.mass, b.velocity)?,
            CollisionKind::PerfectlyInelastic => {
                let v = perfectly_inelastic_collision(a.mass, a.velocity, b.mass, b.velocity)?;
                (v, v)
            }
        };

        let gap = (b.position - b.size / 2.0) - (a.position + a.size / 2.0);
        if gap < 0.0 {
            return Err(DiagramError::InvalidParameter(format!(
                "bodies overlap by {:.3} at t = 0",
                -gap
            )));
        }
        let closing = a.velocity - b.velocity;
        let contact_time = (closing > 0.0).then(|| gap / closing);

        Ok(Self {
            a,
            b,
            kind,
            contact_time,
            after,
        })
    }

    pub fn kind(&self) -> CollisionKind {
        self.kind
    }

    /// `gap / closing speed`, or `None` when the bodies never meet
    pub fn contact_time(&self) -> Option<f64> {
        self.contact_time
    }

    pub fn velocities_after(&self) -> (f64, f64) {
        self.after
    }

    pub fn velocities(&self, t: f64) -> (f64, f64) {
        match self.contact_time {
            Some(tc) if t > tc => self.after,
            _ => (self.a.velocity, self.b.velocity),
        }
    }

    pub fn positions(&self, t: f64) -> (f64, f64) {
        match self.contact_time {
            Some(tc) if t > tc => {
                let dt = t - tc;
                (
                    self.a.position + self.a.velocity * tc + self.after.0 * dt,
                    self.b.position + self.b.velocity * tc + self.after.1 * dt,
                )
            }
            _ => (
                self.a.position + self.a.velocity * t,
                self.b.position + self.b.velocity * t,
            ),
        }
    }

    /// Momenta with the exchange smoothed over the contact instant
    pub fn momenta(&self, t: f64) -> (f64, f64) {
        let (pa, pb) = (self.a.momentum(), self.b.momentum());
        let Some(tc) = self.contact_time else {
            return (pa, pb);
        };
        let s = smooth_step(t, tc, SMOOTH_STEP_WIDTH);
        let (qa, qb) = (self.a.mass * self.after.0, self.b.mass * self.after.1);
        (pa + (qa - pa) * s, pb + (qb - pb) * s)
    }

    pub fn total_momentum(&self) -> f64 {
        self.a.momentum() + self.b.momentum()
    }

    /// Kinetic energy before and after
    pub fn kinetic_energy(&self) -> (f64, f64) {
        let before = 0.5 * self.a.mass * self.a.velocity.powi(2) + 0.5 * self.b.mass * self.b.velocity.powi(2);
        let after = 0.5 * self.a.mass * self.after.0.powi(2) + 0.5 * self.b.mass * self.after.1.powi(2);
        (before, after)
    }
}
