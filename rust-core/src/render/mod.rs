// Render module: display list, drawable trait and output backends
// Objects record world-space primitives into a Figure; backends turn the Figure into SVG or PNG.

// ======================== MODULE DECLARATIONS ========================
pub mod command;
pub mod figure;
#[cfg(feature = "png")]
pub mod png;
pub mod svg;


// ======================== DISPLAY LIST ========================
pub use command::{
    arc_points,  // fn(center, radius, start_deg, end_deg, segments) -> Vec<Point> - arc tessellation
    DrawCommand, // enum - Polygon, Circle, Polyline, Arrow, Arc, Text, Marker (serde tag "kind")
    DrawItem,    // struct - command plus z order
};
pub use figure::{
    DisplayList, // struct - serializable snapshot (limits, background, items)
    Drawable,    // trait - draw(&self, figure: &mut Figure)
    Figure,      // struct - title, limits, theme and ordered display list
};
// Figure impl methods:
//   new(theme: Theme) -> Self                       - empty figure
//   with_title / set_title                          - figure title
//   set_limits(x, y) -> Result<()>                  - explicit visible region
//   add(&mut self, item: &impl Drawable) -> &mut Self - records a drawable
//   push / push_at(z, command)                      - records a raw command
//   content_bounds(&self) -> Option<BoundingBox2D>  - extent of everything drawn
//   fit_to_content(&mut self, margin) -> Option<BoundingBox2D> - limits from content
//   to_display_list / to_json / to_svg / write_svg  - outputs

// ======================== BACKENDS ========================
pub use svg::{
    escape_xml, // fn(&str) -> String - XML escaping for text and attributes
    render_svg, // fn(&Figure) -> Result<String> - y-flipped, z-sorted SVG document
};
#[cfg(feature = "png")]
pub use png::{
    render_png, // fn(&Figure, width: Option<u32>) -> Result<Vec<u8>>
    svg_to_png, // fn(&str, width: Option<u32>) -> Result<Vec<u8>>
};
