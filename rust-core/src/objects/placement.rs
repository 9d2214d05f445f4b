// Shared placement routine for objects resting on surfaces or standing at explicit coordinates

use log::debug;

use crate::geometries::{Point, Transform2D};
use crate::surfaces::Surface;

/// Where a placed object goes
///
/// `On` puts the object's contact point at parameter `t` along a surface;
/// `At` puts the object's center at an explicit world point.
#[derive(Debug, Clone, Copy)]
pub enum Anchor<'a> {
    At(Point),
    On { surface: &'a dyn Surface, t: f64 },
}

impl<'a> Anchor<'a> {
    pub fn at(point: impl Into<Point>) -> Self {
        Anchor::At(point.into())
    }

    pub fn on(surface: &'a dyn Surface, t: f64) -> Self {
        Anchor::On { surface, t }
    }

    /// Surface anchor when a surface is given, explicit coordinates otherwise
    pub fn from_option(surface: Option<&'a dyn Surface>, t: f64, fallback: impl Into<Point>) -> Self {
        match surface {
            Some(surface) => Anchor::On { surface, t },
            None => {
                let point = fallback.into();
                debug!("No surface given, placing at explicit coordinates {}", point);
                Anchor::At(point)
            }
        }
    }

    pub fn is_on_surface(&self) -> bool {
        matches!(self, Anchor::On { .. })
    }
}

impl From<Point> for Anchor<'_> {
    fn from(point: Point) -> Self {
        Anchor::At(point)
    }
}

impl From<(f64, f64)> for Anchor<'_> {
    fn from(point: (f64, f64)) -> Self {
        Anchor::At(point.into())
    }
}

/// Outcome of placing an object: its center, rotation and the frame it rests in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlacement {
    pub center: Point,
    /// Object rotation in degrees (surface angle plus offset)
    pub rotation_deg: f64,
    /// Supporting frame; synthesized for freestanding objects
    pub frame: Transform2D,
    pub on_surface: bool,
}

impl ResolvedPlacement {
    /// Apply a different angle offset than the one used at resolution time
    ///
    /// The center stays put: on a surface only the object's own rotation changes,
    /// while a freestanding object's synthesized frame turns with it.
    pub fn reoriented(&self, old_offset_deg: f64, new_offset_deg: f64) -> Self {
        let delta = new_offset_deg - old_offset_deg;
        let frame = if self.on_surface {
            self.frame
        } else {
            Transform2D::from_degrees(self.frame.origin(), self.frame.angle_deg() + delta)
        };
        Self {
            center: self.center,
            rotation_deg: self.rotation_deg + delta,
            frame,
            on_surface: self.on_surface,
        }
    }
}

/// Resolve an anchor into a center, rotation and supporting frame
///
/// `local_anchor` is the object's center expressed in the supporting frame,
/// e.g. `(0, h/2)` for a block whose base sits on the surface.
pub fn resolve(anchor: Anchor<'_>, local_anchor: Point, angle_offset_deg: f64) -> ResolvedPlacement {
    match anchor {
        Anchor::On { surface, t } => {
            let frame = surface.surface_transform(t);
            ResolvedPlacement {
                center: frame.local_to_world(local_anchor),
                rotation_deg: frame.angle_deg() + angle_offset_deg,
                frame,
                on_surface: true,
            }
        }
        Anchor::At(center) => ResolvedPlacement {
            center,
            rotation_deg: angle_offset_deg,
            frame: Transform2D::from_degrees(center - local_anchor, angle_offset_deg),
            on_surface: false,
        },
    }
}
