// Constant-velocity and constant-acceleration motion along one axis

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformMotion {
    pub x0: f64,
    pub v: f64,
}

impl UniformMotion {
    pub fn new(x0: f64, v: f64) -> Self {
        Self { x0, v }
    }

    pub fn position(&self, t: f64) -> f64 {
        self.x0 + self.v * t
    }

    pub fn velocity(&self, _t: f64) -> f64 {
        self.v
    }

    pub fn displacement(&self, t: f64) -> f64 {
        self.v * t
    }
}

/// `x(t) = x0 + v0 t + a t² / 2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformAcceleration {
    pub x0: f64,
    pub v0: f64,
    pub a: f64,
}

impl UniformAcceleration {
    pub fn new(x0: f64, v0: f64, a: f64) -> Self {
        Self { x0, v0, a }
    }

    pub fn position(&self, t: f64) -> f64 {
        self.x0 + self.displacement(t)
    }

    pub fn velocity(&self, t: f64) -> f64 {
        self.v0 + self.a * t
    }

    pub fn displacement(&self, t: f64) -> f64 {
        self.v0 * t + 0.5 * self.a * t * t
    }

    /// Time at which the velocity reaches `v`, if it ever does for `t >= 0`
    pub fn time_to_velocity(&self, v: f64) -> Option<f64> {
        if self.a == 0.0 {
            return (v == self.v0).then_some(0.0);
        }
        let t = (v - self.v0) / self.a;
        (t >= 0.0).then_some(t)
    }

    /// Speed after covering displacement `s`, from `v² = v0² + 2 a s`
    pub fn speed_at_displacement(&self, s: f64) -> Option<f64> {
        let v2 = self.v0 * self.v0 + 2.0 * self.a * s;
        (v2 >= 0.0).then(|| v2.sqrt())
    }
}
