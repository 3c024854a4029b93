use serde::{Deserialize, Serialize};

use geom::Pt2D;

use crate::objects::{deserialize_pts, serialize_pts};

/// Which way vehicles may drive along a corridor, relative to the order of its points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorridorDirection {
    Forward,
    Backward,
    Both,
}

impl Default for CorridorDirection {
    fn default() -> CorridorDirection {
        CorridorDirection::Both
    }
}

/// A polyline of grid points that vehicles can drive along. Consecutive points are expected to
/// be exactly one grid step apart; anything else is skipped when building the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    #[serde(serialize_with = "serialize_pts", deserialize_with = "deserialize_pts")]
    pub points: Vec<Pt2D>,
    #[serde(default)]
    pub direction: CorridorDirection,
}

impl Corridor {
    pub fn new(points: Vec<Pt2D>, direction: CorridorDirection) -> Corridor {
        Corridor { points, direction }
    }

    /// Each consecutive pair of points, in the order they were listed.
    pub fn steps(&self) -> impl Iterator<Item = (Pt2D, Pt2D)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Pairs of points that are more than one grid step apart, or aren't axis-aligned.
    pub fn broken_steps(&self) -> Vec<(Pt2D, Pt2D)> {
        self.steps()
            .filter(|(pt1, pt2)| !pt1.is_grid_adjacent(*pt2))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_corridor() {
        let corridor: Corridor =
            serde_json::from_str(r#"{"points": [[0, 0], [1, 0], [3, 0]], "direction": "forward"}"#)
                .unwrap();
        assert_eq!(corridor.direction, CorridorDirection::Forward);
        assert_eq!(corridor.steps().count(), 2);
        assert_eq!(
            corridor.broken_steps(),
            vec![(Pt2D::new(1.0, 0.0), Pt2D::new(3.0, 0.0))]
        );

        let implicit: Corridor = serde_json::from_str(r#"{"points": [[2, 2]]}"#).unwrap();
        assert_eq!(implicit.direction, CorridorDirection::Both);
        assert_eq!(implicit.steps().count(), 0);
    }
}
