use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Pt2D;

use crate::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExitID(pub String);

impl fmt::Display for ExitID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Exit {}", self.0)
    }
}

/// Where vehicles leave the facility. Like a slot, an exit is only ever the end of a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub exit_id: ExitID,
    pub level: i32,
    pub x: f64,
    pub y: f64,
}

impl Exit {
    pub fn pt(&self) -> Pt2D {
        Pt2D::new(self.x, self.y)
    }

    pub fn position(&self) -> Position {
        Position::new(self.level, self.pt())
    }
}
