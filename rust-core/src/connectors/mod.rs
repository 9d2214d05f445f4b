// Connectors module: draw-time links between accessor points, plus annotation helpers
// Nothing here owns placement state; every item is built from world points and drawn once.

// ======================== MODULE DECLARATIONS ========================
pub mod annotations;
pub mod arrow;
pub mod rope;

// Test modules
mod _tests_annotations;

// ======================== ROPES ========================
pub use rope::{
    Rope,     // struct - link between two points, optional horizontal/vertical constraint
    RopeKind, // enum - Degenerate | Band | Line
};
// Rope impl methods:
//   new(start, end) -> Self                          - unconstrained link
//   horizontal() / vertical()                        - snap the end to the start's y / x
//   resolved_end(&self) -> Point                     - end after constraints
//   kind(&self) -> RopeKind                          - rendering style switch
//   texture_heights(&self) -> Vec<f64>               - twist stroke positions of a band

// ======================== VECTORS ========================
pub use arrow::{
    decompose,        // fn(vector, &Transform2D) -> VectorComponents
    Arrow,            // struct - labeled force arrow
    VectorComponents, // struct - tangential/normal parts of a vector
};

// ======================== ANNOTATIONS ========================
pub use annotations::{
    AngleArc,   // struct - dashed angle arc with bisector label
    CoordAxes,  // struct - rotated x'/y' axis pair
    FormulaBox, // struct - text panel
};
