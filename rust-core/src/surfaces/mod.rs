// Surfaces module: supports that objects are placed on
// Each surface hands out a local frame at parameter t along its extent

// ======================== MODULE DECLARATIONS ========================
pub mod ceiling;
pub mod ground;
pub mod incline;
pub mod surface;
pub mod table;

mod _tests_incline;

// ======================== SURFACE CAPABILITY ========================
pub use surface::Surface; // trait - parameterized support
// Surface trait methods:
//   surface_transform(&self, t: f64) -> Transform2D   - frame at t (0 = left end, 1 = right end)
//   point_on_surface(&self, t: f64) -> Point          - frame origin at t

// ======================== FLAT SURFACES ========================
pub use ground::Ground; // struct - hatched ground line
// Ground impl methods:
//   new(y: f64, xlim: (f64, f64)) -> Self             - ground at height y
//   with_depth / with_hatch_spacing / with_fill       - drawing options
//   hatch_lines(&self) -> Vec<(Point, Point)>         - slanted hatch segments
pub use table::Table; // struct - raised slab, surface at y + height
// Table impl methods:
//   new(x, y, width, height) -> Self                  - lower-left corner plus size
//   top_y(&self) -> f64                               - placement height
pub use ceiling::Ceiling; // struct - hatched bar to hang ropes from (not a Surface)
// Ceiling impl methods:
//   new(y: f64, xlim: (f64, f64)) -> Self             - underside at height y
//   anchor_at(&self, t: f64) -> Point                 - attachment point along the underside

// ======================== INCLINES ========================
pub use incline::{
    AngleMark,      // struct - arc in the slope's bottom corner
    Incline,        // struct - right-triangle ramp
    InclineShape,   // enum - WidthHeight, WidthAngle, HeightAngle
    SlopeDirection, // enum - Rising ('+'), Falling ('-')
};
// Incline impl methods:
//   new(origin, direction, shape) -> Result<Self>     - InvalidInclineParameters on bad input
//   point_on_surface(&self, t: f64) -> Point          - t = 0 is always the left end
//   slope_start / slope_end                           - high end / low end
//   angle_rad / angle_deg / width / height            - resolved shape
//   surface_angle(&self) -> f64                       - +θ rising, -θ falling
//   vertices(&self) -> [Point; 3]                     - triangle outline
//   angle_mark(&self) -> AngleMark                    - angle arc geometry
