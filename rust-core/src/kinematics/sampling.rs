// Time grids and sampled series for plotting or JSON export

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::GEOMETRY_TOLERANCE;
use crate::{DiagramError, Result};

/// Uniform sampling of `[0, t_end]` at `fps` samples per second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    t_end: f64,
    fps: f64,
}

impl Timeline {
    pub fn new(t_end: f64, fps: f64) -> Result<Self> {
        if !(t_end > 0.0 && t_end.is_finite()) {
            return Err(DiagramError::InvalidParameter(format!(
                "t_end must be positive, got {}",
                t_end
            )));
        }
        if !(fps > 0.0 && fps.is_finite()) {
            return Err(DiagramError::InvalidParameter(format!("fps must be positive, got {}", fps)));
        }
        Ok(Self { t_end, fps })
    }

    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Strictly increasing sample times from 0; the last one is exactly `t_end`
    pub fn times(&self) -> Vec<f64> {
        let mut times = vec![0.0];
        times.extend(
            (1..)
                .map(|i| i as f64 / self.fps)
                .take_while(|t| *t < self.t_end - GEOMETRY_TOLERANCE),
        );
        times.push(self.t_end);
        times
    }

    /// Evaluate `f` at every sample time
    pub fn sample<F, I, K>(&self, mut f: F) -> Vec<Sample>
    where
        F: FnMut(f64) -> I,
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.times()
            .into_iter()
            .map(|t| Sample {
                t,
                values: f(t).into_iter().map(|(k, v)| (k.into(), v)).collect(),
            })
            .collect()
    }
}

/// Named quantities at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl Sample {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}
