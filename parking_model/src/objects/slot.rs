use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Pt2D;

use crate::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotID(pub String);

impl fmt::Display for SlotID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Slot {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
    /// Promised to someone who hasn't parked yet
    Allocated,
}

/// A single parking space. In the routing graph, a slot is a sink: vehicles can drive into it
/// from the adjacent corridor, but never through it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub slot_id: SlotID,
    pub level: i32,
    pub x: f64,
    pub y: f64,
    pub status: SlotStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<String>,
}

impl Slot {
    pub fn pt(&self) -> Pt2D {
        Pt2D::new(self.x, self.y)
    }

    pub fn position(&self) -> Position {
        Position::new(self.level, self.pt())
    }
}
