// Figures module: the gallery of ready-made physics diagrams
// Each builder takes a Theme and returns a Figure; nothing is drawn until a backend renders it.

// ======================== MODULE DECLARATIONS ========================
pub mod catalog;
pub mod free_body;
pub mod marks;
pub mod pulleys;
pub mod torque;
pub mod vectors;

// Test modules
mod _tests_figures;

// ======================== CATALOG ========================
pub use catalog::{
    build,         // fn(name, &Theme) -> Result<Figure>, UnknownFigure for other names
    catalog,       // fn() -> &'static [FigureEntry]
    names,         // fn() -> iterator over figure names
    FigureBuilder, // type - fn(&Theme) -> Result<Figure>
    FigureEntry,   // struct - name, description, builder
};

// ======================== BUILDERS ========================
pub use free_body::{fbd_floor, fbd_friction, fbd_hanging, fbd_incline};
pub use pulleys::{fbd_pulley, incline_pulley, incline_pulley_falling, incline_pulley_rising, table_pulleys};
pub use torque::torque;
pub use vectors::{force_composition, vector_components};
