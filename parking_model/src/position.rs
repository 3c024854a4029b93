use std::fmt;

use serde::{Deserialize, Serialize};

use geom::Pt2D;

/// Somewhere inside the facility: a level and a point on it. Callers resolve human-facing names
/// like "E1" into one of these before asking for routes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub level: i32,
    pub pt: Pt2D,
}

impl Position {
    pub fn new(level: i32, pt: Pt2D) -> Position {
        Position { level, pt }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "level {} at ({}, {})", self.level, self.pt.x(), self.pt.y())
    }
}
