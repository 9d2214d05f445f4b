// Energy bookkeeping: a dropped body, a block sliding down a frictionless slope and a pushed block

use serde::{Deserialize, Serialize};

use crate::{DiagramError, Result};

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(DiagramError::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Body released from rest at height `h0`; it stops on reaching the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeFall {
    pub mass: f64,
    pub g: f64,
    pub h0: f64,
}

impl FreeFall {
    pub fn new(mass: f64, g: f64, h0: f64) -> Result<Self> {
        check_positive("mass", mass)?;
        check_positive("gravity", g)?;
        check_positive("drop height", h0)?;
        Ok(Self { mass, g, h0 })
    }

    pub fn fall_time(&self) -> f64 {
        (2.0 * self.h0 / self.g).sqrt()
    }

    pub fn impact_speed(&self) -> f64 {
        (2.0 * self.g * self.h0).sqrt()
    }

    pub fn height(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        (self.h0 - 0.5 * self.g * t * t).max(0.0)
    }

    pub fn speed(&self, t: f64) -> f64 {
        (self.g * t.max(0.0)).min(self.impact_speed())
    }

    pub fn potential_energy(&self, t: f64) -> f64 {
        self.mass * self.g * self.height(t)
    }

    pub fn kinetic_energy(&self, t: f64) -> f64 {
        0.5 * self.mass * self.speed(t).powi(2)
    }

    pub fn total_energy(&self) -> f64 {
        self.mass * self.g * self.h0
    }
}

/// Block released from rest at the top of a frictionless slope of `height`
///
/// Distances `s` are measured along the slope from the top and clamp to the slope length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclineSlide {
    pub mass: f64,
    pub g: f64,
    pub height: f64,
    pub angle_rad: f64,
}

impl InclineSlide {
    pub fn new(mass: f64, g: f64, height: f64, angle_deg: f64) -> Result<Self> {
        check_positive("mass", mass)?;
        check_positive("gravity", g)?;
        check_positive("slope height", height)?;
        if !(angle_deg > 0.0 && angle_deg < 90.0) {
            return Err(DiagramError::InvalidParameter(format!(
                "slope angle must lie strictly between 0 and 90 degrees, got {}",
                angle_deg
            )));
        }
        Ok(Self {
            mass,
            g,
            height,
            angle_rad: angle_deg.to_radians(),
        })
    }

    /// `g sin θ`
    pub fn acceleration(&self) -> f64 {
        self.g * self.angle_rad.sin()
    }

    pub fn slope_length(&self) -> f64 {
        self.height / self.angle_rad.sin()
    }

    pub fn time_to_bottom(&self) -> f64 {
        (2.0 * self.slope_length() / self.acceleration()).sqrt()
    }

    pub fn distance(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        (0.5 * self.acceleration() * t * t).min(self.slope_length())
    }

    pub fn height_at(&self, s: f64) -> f64 {
        self.height - s.clamp(0.0, self.slope_length()) * self.angle_rad.sin()
    }

    pub fn speed_at(&self, s: f64) -> f64 {
        (2.0 * self.acceleration() * s.clamp(0.0, self.slope_length())).sqrt()
    }

    pub fn potential_energy_at(&self, s: f64) -> f64 {
        self.mass * self.g * self.height_at(s)
    }

    pub fn kinetic_energy_at(&self, s: f64) -> f64 {
        0.5 * self.mass * self.speed_at(s).powi(2)
    }
}

/// Body pushed from rest by a constant force over `distance`, then released on a frictionless floor
///
/// The force makes `angle_rad` with the displacement, so only `F cos θ` does work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkEnergyPush {
    pub mass: f64,
    pub force: f64,
    pub distance: f64,
    pub angle_rad: f64,
}

impl WorkEnergyPush {
    pub fn new(mass: f64, force: f64, distance: f64, angle_deg: f64) -> Result<Self> {
        check_positive("mass", mass)?;
        check_positive("force", force)?;
        check_positive("push distance", distance)?;
        if !(0.0..90.0).contains(&angle_deg) {
            return Err(DiagramError::InvalidParameter(format!(
                "push angle must lie in [0, 90) degrees, got {}",
                angle_deg
            )));
        }
        Ok(Self {
            mass,
            force,
            distance,
            angle_rad: angle_deg.to_radians(),
        })
    }

    /// Force component along the displacement
    pub fn effective_force(&self) -> f64 {
        self.force * self.angle_rad.cos()
    }

    pub fn acceleration(&self) -> f64 {
        self.effective_force() / self.mass
    }

    pub fn push_time(&self) -> f64 {
        (2.0 * self.distance / self.acceleration()).sqrt()
    }

    pub fn final_speed(&self) -> f64 {
        self.acceleration() * self.push_time()
    }

    pub fn position(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        let t_push = self.push_time();
        if t <= t_push {
            0.5 * self.acceleration() * t * t
        } else {
            self.distance + self.final_speed() * (t - t_push)
        }
    }

    pub fn velocity(&self, t: f64) -> f64 {
        self.acceleration() * t.clamp(0.0, self.push_time())
    }

    /// Applied force magnitude; zero once the push ends
    pub fn force_at(&self, t: f64) -> f64 {
        if (0.0..=self.push_time()).contains(&t) {
            self.force
        } else {
            0.0
        }
    }

    /// `W = F d cos θ` done so far
    pub fn work(&self, t: f64) -> f64 {
        self.effective_force() * self.position(t).min(self.distance)
    }

    pub fn kinetic_energy(&self, t: f64) -> f64 {
        0.5 * self.mass * self.velocity(t).powi(2)
    }
}
