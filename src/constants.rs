/// Closest a support structure may sit to any wall cell in the strict band.
pub const SUPPORT_MIN_DISTANCE: f32 = 3.0;

/// Farthest a support structure may sit from any wall cell. Matches the
/// power field radius of a pylon.
pub const SUPPORT_MAX_DISTANCE: f32 = 6.5;

/// Lower bound of the relaxed band used when the strict band is empty.
pub const RELAXED_MIN_DISTANCE: f32 = 1.0;

/// A support structure closer than this to the wall centroid already powers
/// the wall.
pub const SUPPORT_SIGHT_RANGE: f32 = 6.5;

/// Gap sizing: a four-cell remainder spanning this distance takes a 3-wide
/// building.
pub const GAP_SIZING_WIDE_SPAN: i32 = 3;

/// Gap sizing: remainders spanning at most this distance take 2-wide buildings.
pub const GAP_SIZING_NARROW_SPAN: i32 = 4;
