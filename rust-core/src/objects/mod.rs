// Objects module: rigid diagram objects placed on surfaces or at explicit coordinates
// Placement is resolved once at construction; accessors are pure functions of the result

// ======================== MODULE DECLARATIONS ========================
pub mod block;
pub mod circle;
pub mod mass_point;
pub mod placed_object;
pub mod placement;
pub mod pulley;
pub mod torque_symbol;

// Test modules
mod _tests_block;

// ======================== PLACEMENT ========================
pub use placed_object::PlacedObject; // trait - center/size plus axis-aligned accessor defaults
// PlacedObject trait methods:
//   center / width / height                          - required
//   top / bottom / left / right                      - side midpoints
//   top_left / top_right / bottom_left / bottom_right - corners
//   left_at(y) / right_at(y) / top_at(x) / bottom_at(x) - points along a side
pub use placement::{
    resolve,           // fn(anchor, local_anchor: Point, angle_offset_deg) -> ResolvedPlacement
    Anchor,            // enum - At(Point) | On { surface: &dyn Surface, t }
    ResolvedPlacement, // struct - center, rotation_deg, frame, on_surface
};

// ======================== SHAPES ========================
pub use block::Block; // struct - rectangular block, rotation-aware accessors
// Block impl methods:
//   new(width, height, anchor) -> Self               - base flush on the surface at t
//   with_angle(deg) / with_label / with_style / with_fill - builders
//   corners(&self) -> [Point; 4]                     - BL, BR, TR, TL
//   rotation / frame / surface_normal / surface_tangent
pub use circle::Circle; // struct - round object, top/bottom along the surface normal
// Circle impl methods:
//   new(radius, anchor) -> Self                      - tangent point on the surface at t
//   radius / frame / surface_normal / surface_tangent
pub use mass_point::MassPoint; // struct - zero-size dot
//   at(point) / on(&dyn PlacedObject)                - explicit or snapped to a center
pub use pulley::Pulley; // struct - wheel used as a rope anchor
//   new(center, radius) / at_surface(surface, t, for_obj)
//   rim_point(direction) / hang_point(from) - where ropes leave the wheel
pub use torque_symbol::{
    TorqueDirection, // enum - Out (⊙), In (⊗)
    TorqueSymbol,    // struct - torque direction marker
};
