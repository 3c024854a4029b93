use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{trim_f64, Distance, EPSILON_DIST, MAX_COORDINATE};

/// This represents world-space in grid units. Depending on context, it may also be used as a
/// direction vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pt2D {
    x: f64,
    y: f64,
}

impl Pt2D {
    pub fn new(x: f64, y: f64) -> Pt2D {
        if !x.is_finite() || !y.is_finite() {
            panic!("Bad Pt2D {}, {}", x, y);
        }

        Pt2D {
            x: trim_f64(x),
            y: trim_f64(y),
        }
    }

    /// Like `new`, but for input that hasn't been validated yet. Also rejects coordinates
    /// further than `MAX_COORDINATE` from the origin along either axis.
    pub fn checked_new(x: f64, y: f64) -> Result<Pt2D> {
        if !x.is_finite() || !y.is_finite() {
            bail!("Point ({}, {}) isn't finite", x, y);
        }
        if x.abs() > MAX_COORDINATE || y.abs() > MAX_COORDINATE {
            bail!(
                "Point ({}, {}) is too far out; coordinates must be within {}",
                x,
                y,
                MAX_COORDINATE
            );
        }
        Ok(Pt2D::new(x, y))
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn dist_to(self, to: Pt2D) -> Distance {
        Distance::meters(self.raw_dist_to(to))
    }

    /// The Euclidean distance without trimming. `hypot` doesn't overflow for large but finite
    /// coordinates.
    pub fn raw_dist_to(self, to: Pt2D) -> f64 {
        (self.x - to.x).hypot(self.y - to.y)
    }

    /// Sum of the absolute differences along both axes.
    pub fn manhattan_dist_to(self, to: Pt2D) -> Distance {
        Distance::meters((self.x - to.x).abs() + (self.y - to.y).abs())
    }

    /// True if the two points are exactly one grid step apart along one axis.
    pub fn is_grid_adjacent(self, other: Pt2D) -> bool {
        (self.manhattan_dist_to(other) - Distance::meters(1.0)).abs() < EPSILON_DIST
    }

    /// The vector pointing from this point to another.
    pub fn vector_to(self, to: Pt2D) -> Pt2D {
        Pt2D::new(to.x - self.x, to.y - self.y)
    }

    /// Treating both points as vectors, returns the cosine of the angle between them, in
    /// [-1, 1]. If either is the zero vector, there's no direction to compare, so returns 0.
    pub fn cos_similarity(self, other: Pt2D) -> f64 {
        let len1 = (self.x * self.x + self.y * self.y).sqrt();
        let len2 = (other.x * other.x + other.y * other.y).sqrt();
        if len1 == 0.0 || len2 == 0.0 {
            return 0.0;
        }
        (self.x * other.x + self.y * other.y) / (len1 * len2)
    }

    pub fn to_hashable(self) -> HashablePt2D {
        HashablePt2D::from(self)
    }
}

impl fmt::Display for Pt2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pt2D({0}, {1})", self.x(), self.y())
    }
}

/// A point that can be hashed and compared exactly. Coordinates are quantized to the same
/// fixed precision as `trim_f64`, so two `Pt2D`s that print the same collapse to one key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HashablePt2D {
    x_fixed: i64,
    y_fixed: i64,
}

const FIXED_SCALE: f64 = 10_000.0;

impl HashablePt2D {
    pub fn new(x: f64, y: f64) -> HashablePt2D {
        HashablePt2D {
            x_fixed: (x * FIXED_SCALE).round() as i64,
            y_fixed: (y * FIXED_SCALE).round() as i64,
        }
    }

    pub fn x(&self) -> f64 {
        self.x_fixed as f64 / FIXED_SCALE
    }

    pub fn y(&self) -> f64 {
        self.y_fixed as f64 / FIXED_SCALE
    }

    pub fn to_pt2d(self) -> Pt2D {
        Pt2D::new(self.x(), self.y())
    }
}

impl From<Pt2D> for HashablePt2D {
    fn from(pt: Pt2D) -> Self {
        HashablePt2D::new(pt.x(), pt.y())
    }
}

impl fmt::Display for HashablePt2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
