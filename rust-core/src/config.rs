// Constants

// Tolerances
pub const GEOMETRY_TOLERANCE: f64 = 1e-9; // Point/transform comparisons and degenerate segment detection

// Rendering-style switch, not a physical tolerance: a rope whose |dx| is below this
// is drawn as a textured vertical band instead of a plain line.
pub const ROPE_VERTICAL_THRESHOLD: f64 = 0.01;

// Placement defaults
pub const DEFAULT_SURFACE_T: f64 = 0.5;
pub const DEFAULT_PULLEY_RADIUS: f64 = 0.25;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 0.5;

// Surfaces
pub const DEFAULT_GROUND_DEPTH: f64 = 0.5;
pub const DEFAULT_HATCH_SPACING: f64 = 1.0;
pub const HATCH_SLANT: f64 = 0.5;
pub const MAX_HATCH_LINES: usize = 1000; // spacing widens to keep at most this many hatches
pub const DEFAULT_CEILING_DEPTH: f64 = 0.3;
pub const CEILING_HATCH_SPACING: f64 = 0.3;
pub const INCLINE_ANGLE_MARK_RADIUS: f64 = 1.0;
pub const GROUND_FILL_OPACITY: f64 = 0.7;
pub const INCLINE_FILL_OPACITY: f64 = 0.5;

// Rope rendering
pub const ROPE_HALF_WIDTH: f64 = 0.08;
pub const ROPE_TEXTURE_SPACING: f64 = 0.15;
pub const ROPE_TEXTURE_RISE: f64 = 0.1;
pub const ROPE_FILL_OPACITY: f64 = 0.8;

// Pulley rendering (inner rim radius as a fraction of the outer radius)
pub const PULLEY_INNER_RATIO: f64 = 0.7;

// Arc tessellation used by the SVG backend
pub const ARC_SEGMENTS: usize = 48;

// Labels
pub const DEFAULT_LABEL_OFFSET: (f64, f64) = (0.3, 0.0);
pub const ANGLE_LABEL_GAP: f64 = 0.3;

// Draw order (higher z is painted later)
pub const Z_SURFACE: i32 = 0;
pub const Z_ROPE: i32 = 1;
pub const Z_OBJECT: i32 = 2;
pub const Z_ANNOTATION: i32 = 3;
pub const Z_ARROW: i32 = 4;
pub const Z_LABEL: i32 = 5;

// Stroke widths as multiples of Theme::default_line_width
pub const OUTLINE_WIDTH_SCALE: f64 = 0.75;
pub const HEAVY_WIDTH_SCALE: f64 = 1.5;
pub const THIN_WIDTH_SCALE: f64 = 0.5;
pub const HAIRLINE_WIDTH_SCALE: f64 = 0.25;

// SVG output
pub const ARROW_HEAD_LENGTH_PX: f64 = 12.0;
pub const DEFAULT_FIT_MARGIN: f64 = 0.5;

// Kinematics
pub const DEFAULT_GRAVITY: f64 = 10.0; // rounded classroom value used by the motion figures
pub const SMOOTH_STEP_WIDTH: f64 = 0.15; // transition width of the momentum blend, in seconds
