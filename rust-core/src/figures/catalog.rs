// Named figure builders

use std::fmt;

use log::info;

use super::free_body::{fbd_floor, fbd_friction, fbd_hanging, fbd_incline};
use super::pulleys::{fbd_pulley, incline_pulley_falling, incline_pulley_rising, table_pulleys};
use super::torque::torque;
use super::vectors::{force_composition, vector_components};
use crate::render::Figure;
use crate::style::Theme;
use crate::{DiagramError, Result};

/// Builds one figure for a theme
pub type FigureBuilder = fn(&Theme) -> Result<Figure>;

/// Gallery entry: a stable name, a one-line description and its builder
#[derive(Clone, Copy)]
pub struct FigureEntry {
    pub name: &'static str,
    pub description: &'static str,
    builder: FigureBuilder,
}

impl FigureEntry {
    pub fn build(&self, theme: &Theme) -> Result<Figure> {
        (self.builder)(theme)
    }
}

impl fmt::Debug for FigureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigureEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

static CATALOG: [FigureEntry; 11] = [
    FigureEntry {
        name: "fbd-floor",
        description: "block at rest on level ground with normal force and weight",
        builder: fbd_floor,
    },
    FigureEntry {
        name: "fbd-incline",
        description: "block on an incline with its weight split along the slope",
        builder: fbd_incline,
    },
    FigureEntry {
        name: "fbd-hanging",
        description: "mass hanging from a ceiling on a rope",
        builder: fbd_hanging,
    },
    FigureEntry {
        name: "fbd-friction",
        description: "box pushed across a rough floor with applied force and friction",
        builder: fbd_friction,
    },
    FigureEntry {
        name: "fbd-pulley",
        description: "table block and hanging block over one pulley, with a free-body panel for each",
        builder: fbd_pulley,
    },
    FigureEntry {
        name: "table-pulleys",
        description: "block on a table tied over two edge pulleys to hanging weights",
        builder: table_pulleys,
    },
    FigureEntry {
        name: "incline-pulley-falling",
        description: "falling incline with a pulley at its high end",
        builder: incline_pulley_falling,
    },
    FigureEntry {
        name: "incline-pulley-rising",
        description: "rising incline with a pulley at its high end",
        builder: incline_pulley_rising,
    },
    FigureEntry {
        name: "vector-components",
        description: "vector split into x and y components",
        builder: vector_components,
    },
    FigureEntry {
        name: "force-composition",
        description: "two perpendicular forces and their resultant",
        builder: force_composition,
    },
    FigureEntry {
        name: "torque",
        description: "lever with position vector, force and torque direction",
        builder: torque,
    },
];

pub fn catalog() -> &'static [FigureEntry] {
    &CATALOG
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}

/// Build the gallery figure called `name`
pub fn build(name: &str, theme: &Theme) -> Result<Figure> {
    let entry = CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| DiagramError::UnknownFigure(name.to_string()))?;
    let figure = entry.build(theme)?;
    info!("Built figure '{}' with {} draw commands", name, figure.len());
    Ok(figure)
}
