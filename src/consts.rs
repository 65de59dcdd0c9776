/// Distance (in meters) from the vehicle's center of gravity to its front
/// axle, as used by the kinematic bicycle model.
pub const LF: f64 = 2.67;
