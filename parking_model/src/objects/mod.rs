//! The per-level map description consumed by the routing core. Everything here is immutable
//! input; the graph is derived from it.

pub mod corridor;
pub mod entrance;
pub mod exit;
pub mod level;
pub mod ramp;
pub mod slot;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use geom::Pt2D;

/// Grid points are written as `[x, y]` pairs in map files.
pub(crate) fn serialize_pts<S: Serializer>(pts: &[Pt2D], s: S) -> Result<S::Ok, S::Error> {
    pts.iter()
        .map(|pt| [pt.x(), pt.y()])
        .collect::<Vec<_>>()
        .serialize(s)
}

pub(crate) fn deserialize_pts<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Pt2D>, D::Error> {
    let raw = <Vec<[f64; 2]>>::deserialize(d)?;
    raw.into_iter()
        .map(|[x, y]| Pt2D::checked_new(x, y).map_err(serde::de::Error::custom))
        .collect()
}
