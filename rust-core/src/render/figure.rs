// Figure module: the drawing surface that diagram objects record their primitives into
// A Figure owns its Theme, so building several diagrams in one process never shares styling state.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::command::{DrawCommand, DrawItem};
use super::svg;
use crate::config::DEFAULT_FIT_MARGIN;
use crate::geometries::{BoundingBox2D, Point};
use crate::style::{Color, Palette, Theme};
use crate::{DiagramError, Result};

/// Anything that can record itself into a [`Figure`]
pub trait Drawable {
    fn draw(&self, figure: &mut Figure);
}

/// Ordered display list plus the axes settings of one diagram
#[derive(Debug, Clone)]
pub struct Figure {
    title: Option<String>,
    limits: Option<BoundingBox2D>,
    theme: Theme,
    items: Vec<DrawItem>,
}

/// Serializable snapshot of a figure, consumed by the web front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub title: Option<String>,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub background: Color,
    pub px_per_unit: f64,
    pub items: Vec<DrawItem>,
}

impl Figure {
    pub fn new(theme: Theme) -> Self {
        Self {
            title: None,
            limits: None,
            theme,
            items: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.theme.palette
    }

    /// Fix the visible world region (equal aspect is implied by the shared scale)
    pub fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) -> Result<()> {
        let valid = |(lo, hi): (f64, f64)| lo.is_finite() && hi.is_finite() && lo < hi;
        if !valid(x) || !valid(y) {
            return Err(DiagramError::InvalidParameter(format!(
                "axis limits must be finite and increasing, got x={:?} y={:?}",
                x, y
            )));
        }
        self.limits = Some(BoundingBox2D::new(Point::new(x.0, y.0), Point::new(x.1, y.1)));
        Ok(())
    }

    pub fn with_limits(mut self, x: (f64, f64), y: (f64, f64)) -> Result<Self> {
        self.set_limits(x, y)?;
        Ok(self)
    }

    /// Record a drawable object
    pub fn add<D: Drawable + ?Sized>(&mut self, item: &D) -> &mut Self {
        item.draw(self);
        self
    }

    /// Record a raw command at its default draw order
    pub fn push(&mut self, command: DrawCommand) -> &mut Self {
        let z = command.default_z();
        self.push_at(z, command)
    }

    /// Record a raw command at an explicit draw order
    pub fn push_at(&mut self, z: i32, command: DrawCommand) -> &mut Self {
        self.items.push(DrawItem { z, command });
        self
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounding box of everything recorded so far
    pub fn content_bounds(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.items.iter().flat_map(|item| item.command.extent_points()))
    }

    /// Set the limits to the content bounds plus `margin` world units
    ///
    /// Returns the new limits, or `None` (leaving limits untouched) for an empty figure.
    pub fn fit_to_content(&mut self, margin: f64) -> Option<BoundingBox2D> {
        let bounds = padded(self.content_bounds()?, margin.max(0.0));
        debug!(
            "Fitted figure limits to x={:?} y={:?}",
            bounds.limits().0,
            bounds.limits().1
        );
        self.limits = Some(bounds);
        Some(bounds)
    }

    /// Visible region: explicit limits, otherwise the padded content, otherwise a unit square
    pub fn limits(&self) -> BoundingBox2D {
        if let Some(limits) = self.limits {
            return limits;
        }
        match self.content_bounds() {
            Some(bounds) => padded(bounds, DEFAULT_FIT_MARGIN),
            None => BoundingBox2D::new(Point::ORIGIN, Point::new(1.0, 1.0)),
        }
    }

    pub fn to_display_list(&self) -> DisplayList {
        let (x_limits, y_limits) = self.limits().limits();
        DisplayList {
            title: self.title.clone(),
            x_limits,
            y_limits,
            background: self.theme.background,
            px_per_unit: self.theme.px_per_unit,
            items: self.items.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_display_list())?)
    }

    pub fn to_svg(&self) -> Result<String> {
        svg::render_svg(self)
    }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let svg = self.to_svg()?;
        std::fs::write(path, svg)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

// A single point or a flat line still needs a non-empty viewport
fn padded(bounds: BoundingBox2D, margin: f64) -> BoundingBox2D {
    let bounds = bounds.expand(margin);
    BoundingBox2D::new(
        bounds.min,
        Point::new(bounds.max.x.max(bounds.min.x + 1.0), bounds.max.y.max(bounds.min.y + 1.0)),
    )
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
