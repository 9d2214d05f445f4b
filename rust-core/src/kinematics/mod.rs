// Kinematics module: closed-form motion used by the motion figures and the `motion` command
// Every quantity is evaluated directly from its formula; nothing is integrated step by step.

// ======================== MODULE DECLARATIONS ========================
pub mod accelerated;
pub mod collision;
pub mod contact;
pub mod energy;
pub mod presets;
pub mod sampling;
pub mod uniform;

mod _tests_contact;
mod _tests_energy;

// ======================== ONE-DIMENSIONAL MOTION ========================
pub use uniform::{
    UniformAcceleration, // struct - x0, v0, a
    UniformMotion,       // struct - x0, v
};
pub use accelerated::{
    MotionProfile, // struct - piecewise constant-acceleration phases
    Phase,         // struct - duration, acceleration
};
// MotionProfile impl methods:
//   new(x0, v0) -> Self                              - initial state, no phases
//   accelerate(duration, a) / coast(duration) -> Result<Self>
//   state(t) -> (x, v, a) / position / velocity / acceleration / force(t, mass)

// ======================== COLLISIONS ========================
pub use collision::{
    elastic_collision,             // fn(m1, v1, m2, v2) -> Result<(f64, f64)>
    perfectly_inelastic_collision, // fn(m1, v1, m2, v2) -> Result<f64>
    smooth_step,                   // fn(t, t0, width) -> f64, sigmoid blend, hard step at width <= 0
    Body,                          // struct - mass, position, velocity, size
    CollisionKind,                 // enum - Elastic | PerfectlyInelastic
    CollisionTimeline,             // struct - approach, contact, separation
};
pub use contact::SpringContact; // struct - finite-duration impact force model

// ======================== ENERGY ========================
pub use energy::{
    FreeFall,       // struct - drop from rest, stops at the ground
    InclineSlide,   // struct - frictionless slide from rest
    WorkEnergyPush, // struct - constant push over a distance, W = F d cos θ against KE
};

// ======================== SAMPLING ========================
pub use presets::MotionPreset; // enum - named scene motions
pub use sampling::{
    Sample,   // struct - t plus named values
    Timeline, // struct - t_end, fps
};
