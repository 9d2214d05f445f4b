//! Physics diagram library
//!
//! This library lays out rigid diagram objects (blocks, circles, pulleys) on
//! parameterized support surfaces (ground, table, incline), connects them with
//! ropes and force arrows, and renders the result to SVG. It also carries the
//! closed-form kinematics used by the motion figures.

pub mod config;
pub mod connectors;
pub mod error;
pub mod figures;
pub mod geometries;
pub mod kinematics;
pub mod objects;
pub mod render;
pub mod style;
pub mod surfaces;

pub use error::DiagramError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A convenience prelude for building diagrams.
pub mod prelude {
    pub use crate::connectors::{decompose, AngleArc, Arrow, CoordAxes, FormulaBox, Rope, RopeKind};
    pub use crate::geometries::{BoundingBox2D, Point, Transform2D};
    pub use crate::objects::{
        Anchor, Block, Circle, MassPoint, PlacedObject, Pulley, TorqueDirection, TorqueSymbol,
    };
    pub use crate::render::{Drawable, Figure};
    pub use crate::kinematics::{MotionPreset, Timeline};
    pub use crate::style::{Color, Palette, ShapeStyle, StrokeStyle, TextStyle, Theme, ThemePreset};
    pub use crate::surfaces::{
        Ceiling, Ground, Incline, InclineShape, SlopeDirection, Surface, Table,
    };
    pub use crate::{DiagramError, Result};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
