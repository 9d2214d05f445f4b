// Spring contact model for an impact of finite duration
//
// With u = τ / Δt the force follows 12 I / Δt · u (1 - u)², which peaks at
// u = 1/3 and integrates to the impulse I over the contact.

use serde::{Deserialize, Serialize};

use crate::{DiagramError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringContact {
    /// Impulse delivered over the contact (N·s)
    pub impulse: f64,
    /// Speed at the first instant of contact
    pub impact_speed: f64,
    /// Contact duration Δt (s)
    pub duration: f64,
}

impl SpringContact {
    pub fn new(impulse: f64, impact_speed: f64, duration: f64) -> Result<Self> {
        if !(duration > 0.0 && duration.is_finite()) {
            return Err(DiagramError::InvalidParameter(format!(
                "contact duration must be positive, got {}",
                duration
            )));
        }
        Ok(Self {
            impulse,
            impact_speed,
            duration,
        })
    }

    fn phase(&self, tau: f64) -> f64 {
        tau / self.duration
    }

    /// Contact force at time `tau` after first touch; zero outside the contact
    pub fn force(&self, tau: f64) -> f64 {
        if tau <= 0.0 || tau >= self.duration {
            return 0.0;
        }
        let u = self.phase(tau);
        12.0 * self.impulse / self.duration * u * (1.0 - u).powi(2)
    }

    /// Speed falling from `impact_speed` to rest
    pub fn velocity(&self, tau: f64) -> f64 {
        if tau <= 0.0 {
            return self.impact_speed;
        }
        if tau >= self.duration {
            return 0.0;
        }
        let u = self.phase(tau);
        self.impact_speed * (1.0 - 6.0 * u.powi(2) + 8.0 * u.powi(3) - 3.0 * u.powi(4))
    }

    /// Fraction of the maximum deformation, 0 before and 1 after the contact
    pub fn deformation(&self, tau: f64) -> f64 {
        if tau <= 0.0 {
            return 0.0;
        }
        if tau >= self.duration {
            return 1.0;
        }
        let u = self.phase(tau);
        6.0 * u.powi(2) - 8.0 * u.powi(3) + 3.0 * u.powi(4)
    }

    pub fn peak_force(&self) -> f64 {
        48.0 * self.impulse / (27.0 * self.duration)
    }

    pub fn peak_time(&self) -> f64 {
        self.duration / 3.0
    }

    pub fn average_force(&self) -> f64 {
        self.impulse / self.duration
    }
}
