// Named motions with the parameters used by the classroom scenes

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::accelerated::MotionProfile;
use super::collision::{Body, CollisionKind, CollisionTimeline};
use super::contact::SpringContact;
use super::energy::{FreeFall, InclineSlide, WorkEnergyPush};
use super::sampling::{Sample, Timeline};
use super::uniform::{UniformAcceleration, UniformMotion};
use crate::config::DEFAULT_GRAVITY;
use crate::{DiagramError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreset {
    /// 5 m/s, constant
    Uniform,
    /// v0 = 5 m/s, a = 2 m/s²
    UniformAcceleration,
    /// 3 m/s² push for 1 s on a 1 kg cart, then coasting
    PushCoast,
    /// 2 kg dropped from 5 m
    FreeFall,
    /// 2 kg sliding down a 5 m high, 30° frictionless slope
    InclineSlide,
    /// 1 kg at 4 m/s hitting a resting 1 kg body
    ElasticCollision,
    /// Same bodies, sticking together
    InelasticCollision,
    /// 2 kg landing at 9.8 m/s with a 0.1 s contact
    SpringContact,
    /// 2 kg pushed by 4 N over 5 m, then released
    WorkEnergy,
}

impl MotionPreset {
    pub const ALL: [MotionPreset; 9] = [
        MotionPreset::Uniform,
        MotionPreset::UniformAcceleration,
        MotionPreset::PushCoast,
        MotionPreset::FreeFall,
        MotionPreset::InclineSlide,
        MotionPreset::ElasticCollision,
        MotionPreset::InelasticCollision,
        MotionPreset::SpringContact,
        MotionPreset::WorkEnergy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MotionPreset::Uniform => "uniform",
            MotionPreset::UniformAcceleration => "uniform-acceleration",
            MotionPreset::PushCoast => "push-coast",
            MotionPreset::FreeFall => "free-fall",
            MotionPreset::InclineSlide => "incline-slide",
            MotionPreset::ElasticCollision => "elastic-collision",
            MotionPreset::InelasticCollision => "inelastic-collision",
            MotionPreset::SpringContact => "spring-contact",
            MotionPreset::WorkEnergy => "work-energy",
        }
    }

    /// Span that shows the whole motion
    pub fn default_duration(&self) -> f64 {
        match self {
            MotionPreset::Uniform | MotionPreset::UniformAcceleration => 4.0,
            MotionPreset::PushCoast => 3.0,
            MotionPreset::FreeFall => 1.5,
            MotionPreset::InclineSlide => 2.5,
            MotionPreset::ElasticCollision | MotionPreset::InelasticCollision => 3.0,
            MotionPreset::SpringContact => 0.12,
            MotionPreset::WorkEnergy => 3.0,
        }
    }

    /// Sample the motion's quantities over `timeline`
    pub fn sample(&self, timeline: &Timeline) -> Result<Vec<Sample>> {
        debug!(
            "Sampling motion '{}' to t={} at {} fps",
            self.name(),
            timeline.t_end(),
            timeline.fps()
        );
        let samples = match self {
            MotionPreset::Uniform => {
                let m = UniformMotion::new(0.0, 5.0);
                timeline.sample(|t| [("x", m.position(t)), ("v", m.velocity(t))])
            }
            MotionPreset::UniformAcceleration => {
                let m = UniformAcceleration::new(0.0, 5.0, 2.0);
                timeline.sample(|t| [("x", m.position(t)), ("v", m.velocity(t)), ("a", m.a)])
            }
            MotionPreset::PushCoast => {
                let profile = MotionProfile::new(0.0, 0.0).accelerate(1.0, 3.0)?;
                timeline.sample(|t| {
                    let (x, v, a) = profile.state(t);
                    [("x", x), ("v", v), ("a", a), ("force", profile.force(t, 1.0))]
                })
            }
            MotionPreset::FreeFall => {
                let fall = FreeFall::new(2.0, DEFAULT_GRAVITY, 5.0)?;
                timeline.sample(|t| {
                    [
                        ("height", fall.height(t)),
                        ("speed", fall.speed(t)),
                        ("potential", fall.potential_energy(t)),
                        ("kinetic", fall.kinetic_energy(t)),
                    ]
                })
            }
            MotionPreset::InclineSlide => {
                let slide = InclineSlide::new(2.0, DEFAULT_GRAVITY, 5.0, 30.0)?;
                timeline.sample(|t| {
                    let s = slide.distance(t);
                    [
                        ("distance", s),
                        ("height", slide.height_at(s)),
                        ("speed", slide.speed_at(s)),
                        ("potential", slide.potential_energy_at(s)),
                        ("kinetic", slide.kinetic_energy_at(s)),
                    ]
                })
            }
            MotionPreset::ElasticCollision | MotionPreset::InelasticCollision => {
                let kind = if *self == MotionPreset::ElasticCollision {
                    CollisionKind::Elastic
                } else {
                    CollisionKind::PerfectlyInelastic
                };
                let timeline_ab = CollisionTimeline::new(
                    Body::new(1.0, -4.0, 4.0, 0.6),
                    Body::new(1.0, 0.0, 0.0, 0.6),
                    kind,
                )?;
                timeline.sample(|t| {
                    let (xa, xb) = timeline_ab.positions(t);
                    let (va, vb) = timeline_ab.velocities(t);
                    let (pa, pb) = timeline_ab.momenta(t);
                    [("xa", xa), ("xb", xb), ("va", va), ("vb", vb), ("pa", pa), ("pb", pb)]
                })
            }
            MotionPreset::SpringContact => {
                let contact = SpringContact::new(19.6, 9.8, 0.1)?;
                timeline.sample(|t| {
                    [
                        ("force", contact.force(t)),
                        ("velocity", contact.velocity(t)),
                        ("deformation", contact.deformation(t)),
                    ]
                })
            }
            MotionPreset::WorkEnergy => {
                let push = WorkEnergyPush::new(2.0, 4.0, 5.0, 0.0)?;
                timeline.sample(|t| {
                    [
                        ("x", push.position(t)),
                        ("v", push.velocity(t)),
                        ("force", push.force_at(t)),
                        ("work", push.work(t)),
                        ("kinetic", push.kinetic_energy(t)),
                    ]
                })
            }
        };
        Ok(samples)
    }
}

impl fmt::Display for MotionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotionPreset {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        MotionPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| DiagramError::UnknownMotion(s.to_string()))
    }
}
