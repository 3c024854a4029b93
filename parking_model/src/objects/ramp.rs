use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Pt2D;

use crate::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RampID(pub String);

impl fmt::Display for RampID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ramp {}", self.0)
    }
}

/// Which way a ramp may be driven, in terms of level numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampDirection {
    Up,
    Down,
    Both,
}

impl Default for RampDirection {
    fn default() -> RampDirection {
        RampDirection::Both
    }
}

/// The only thing connecting different levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub ramp_id: RampID,
    pub level: i32,
    pub x: f64,
    pub y: f64,
    pub to_level: i32,
    pub to_x: f64,
    pub to_y: f64,
    #[serde(default)]
    pub direction: RampDirection,
}

impl Ramp {
    pub fn pt(&self) -> Pt2D {
        Pt2D::new(self.x, self.y)
    }

    pub fn to_pt(&self) -> Pt2D {
        Pt2D::new(self.to_x, self.to_y)
    }

    /// The end of the ramp on `level`.
    pub fn src(&self) -> Position {
        Position::new(self.level, self.pt())
    }

    /// The end of the ramp on `to_level`.
    pub fn dst(&self) -> Position {
        Position::new(self.to_level, self.to_pt())
    }

    /// Returns (can drive src -> dst, can drive dst -> src). A ramp between two ends on the same
    /// level has no up or down, so it's treated as two-way.
    pub fn allowed_directions(&self) -> (bool, bool) {
        if self.level == self.to_level {
            return (true, true);
        }
        let goes_up = self.to_level > self.level;
        match self.direction {
            RampDirection::Both => (true, true),
            RampDirection::Up => (goes_up, !goes_up),
            RampDirection::Down => (!goes_up, goes_up),
        }
    }
}
