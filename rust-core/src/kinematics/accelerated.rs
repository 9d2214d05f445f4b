// Piecewise constant-acceleration motion (push, then coast)

use serde::{Deserialize, Serialize};

use crate::{DiagramError, Result};

/// One stretch of constant acceleration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub duration: f64,
    pub acceleration: f64,
}

/// Sequence of constant-acceleration phases starting at `t = 0`
///
/// Position and velocity are continuous across phase boundaries. After the
/// last phase the body keeps its final velocity; before `t = 0` it sits at
/// the initial state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionProfile {
    x0: f64,
    v0: f64,
    phases: Vec<Phase>,
}

impl MotionProfile {
    pub fn new(x0: f64, v0: f64) -> Self {
        Self {
            x0,
            v0,
            phases: Vec::new(),
        }
    }

    /// Append a phase of constant acceleration `a`
    pub fn accelerate(mut self, duration: f64, a: f64) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(DiagramError::InvalidParameter(format!(
                "phase duration must be finite and non-negative, got {}",
                duration
            )));
        }
        if !a.is_finite() {
            return Err(DiagramError::InvalidParameter(format!(
                "acceleration must be finite, got {}",
                a
            )));
        }
        self.phases.push(Phase {
            duration,
            acceleration: a,
        });
        Ok(self)
    }

    /// Append a phase with no net force
    pub fn coast(self, duration: f64) -> Result<Self> {
        self.accelerate(duration, 0.0)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn total_duration(&self) -> f64 {
        self.phases.iter().map(|p| p.duration).sum()
    }

    /// `(position, velocity, acceleration)` at time `t`
    pub fn state(&self, t: f64) -> (f64, f64, f64) {
        let (mut x, mut v) = (self.x0, self.v0);
        if t <= 0.0 {
            return (x, v, 0.0);
        }

        let mut start = 0.0;
        for phase in &self.phases {
            let local = t - start;
            if local < phase.duration {
                let a = phase.acceleration;
                return (x + v * local + 0.5 * a * local * local, v + a * local, a);
            }
            let d = phase.duration;
            x += v * d + 0.5 * phase.acceleration * d * d;
            v += phase.acceleration * d;
            start += d;
        }
        (x + v * (t - start), v, 0.0)
    }

    pub fn position(&self, t: f64) -> f64 {
        self.state(t).0
    }

    pub fn velocity(&self, t: f64) -> f64 {
        self.state(t).1
    }

    pub fn acceleration(&self, t: f64) -> f64 {
        self.state(t).2
    }

    /// Net force on a body of `mass` at time `t`
    pub fn force(&self, t: f64, mass: f64) -> f64 {
        mass * self.acceleration(t)
    }
}
