use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Pt2D;

use crate::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntranceID(pub String);

impl fmt::Display for EntranceID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entrance {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntranceType {
    /// Vehicles enter the facility here
    Car,
    /// Pedestrian access into the building; not part of vehicle routing
    Building,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub entrance_id: EntranceID,
    pub level: i32,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub entrance_type: EntranceType,
}

impl Entrance {
    pub fn pt(&self) -> Pt2D {
        Pt2D::new(self.x, self.y)
    }

    pub fn position(&self) -> Position {
        Position::new(self.level, self.pt())
    }

    pub fn is_for_cars(&self) -> bool {
        self.entrance_type == EntranceType::Car
    }
}
