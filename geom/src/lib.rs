//! Geometric primitives for grid-based parking maps. Points live in world-space, one unit per
//! grid cell.

#[macro_use]
extern crate anyhow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use crate::distance::Distance;
pub use crate::pt::{HashablePt2D, Pt2D};

mod distance;
mod pt;

/// Two points closer than this are considered the same.
pub const EPSILON_DIST: Distance = Distance::const_meters(0.0001);

/// Input coordinates beyond this, in either direction, are rejected by `Pt2D::checked_new`.
/// `HashablePt2D` could hold about 900 billion.
pub const MAX_COORDINATE: f64 = 1_000_000_000.0;

/// Reduce the precision of an f64. This helps ensure serialization is idempotent (everything is
/// exactly the same before and after saving/loading). Ideally we'd use some kind of proper
/// fixed-precision type instead of f64.
pub fn trim_f64(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Serializes a trimmed `f64` as a fixed-point `i64`.
pub fn serialize_f64<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
    // The range becomes 2**63 / 10,000 =~ 9 * 10**14. Anything past that would silently clamp,
    // so refuse it instead.
    // We MUST round here, the same as trim_f64. The unit test demonstrates why.
    let scaled = (x * 10_000.0).round();
    if !(scaled >= i64::MIN as f64 && scaled < i64::MAX as f64) {
        return Err(serde::ser::Error::custom(format!(
            "{} is out of range for fixed-point serialization",
            x
        )));
    }
    (scaled as i64).serialize(s)
}

/// Deserializes a trimmed `f64` from a fixed-point `i64`.
pub fn deserialize_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let x = <i64>::deserialize(d)?;
    Ok(x as f64 / 10_000.0)
}
