//! numeric primitives shared by the crowding and congestion cost models.

use uom::si::{f64::Time, time::minute};

/// small constant added to the volume when blending seated and standing costs so
/// the crowding cost stays finite near zero volume.
pub const CROWDING_EPSILON: f64 = 0.01;

/// capacity offered over a whole time period by a vehicle (or train set) of the given
/// capacity running at the given headway.
///
/// # Arguments
///
/// * `vehicle_capacity` - capacity of all vehicles traveling together
/// * `headway` - nominal line headway
/// * `period` - duration of the time period
pub fn time_period_capacity(vehicle_capacity: f64, headway: f64, period: Time) -> f64 {
    vehicle_capacity * period.get::<minute>() * 60.0 / headway
}

/// splits a volume into (seated, standing) passengers. the two parts always sum
/// back to the volume.
pub fn seated_standing_split(volume: f64, seated_capacity: f64) -> (f64, f64) {
    let seated = volume.min(seated_capacity);
    let standing = (volume - seated).max(0.0);
    (seated, standing)
}

/// interpolates between `min` and `max` along `ratio^power`.
pub fn power_law_cost(min: f64, max: f64, power: f64, ratio: f64) -> f64 {
    min + (max - min) * ratio.powf(power)
}
