use std::fmt;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use geom::{HashablePt2D, Pt2D};

use crate::Position;

/// A vertex of the routing graph. Identity is structural: two nodes are the same exactly when
/// the level and the quantized coordinates match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub level: i32,
    pub pt: HashablePt2D,
}

impl Node {
    pub fn new(level: i32, x: f64, y: f64) -> Node {
        Node {
            level,
            pt: HashablePt2D::new(x, y),
        }
    }

    pub fn from_pt(level: i32, pt: Pt2D) -> Node {
        Node {
            level,
            pt: pt.to_hashable(),
        }
    }

    pub fn x(&self) -> f64 {
        self.pt.x()
    }

    pub fn y(&self) -> f64 {
        self.pt.y()
    }

    pub fn to_pt2d(&self) -> Pt2D {
        self.pt.to_pt2d()
    }
}

impl From<Position> for Node {
    fn from(pos: Position) -> Node {
        Node::from_pt(pos.level, pos.pt)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.level, self.x(), self.y())
    }
}

/// Nodes are written as `[level, x, y]`.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut tuple = s.serialize_tuple(3)?;
        tuple.serialize_element(&self.level)?;
        tuple.serialize_element(&self.x())?;
        tuple.serialize_element(&self.y())?;
        tuple.end()
    }
}
