use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use geom::{Distance, HashablePt2D, Pt2D};

use crate::objects::{deserialize_pts, serialize_pts};
use crate::{Corridor, Entrance, Exit, Ramp, Slot};

/// Cells a vehicle can't occupy. Only used to sanity check the corridors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    #[serde(serialize_with = "serialize_pts", deserialize_with = "deserialize_pts")]
    pub points: Vec<Pt2D>,
}

/// Everything on one floor of one building.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub building: String,
    pub level: i32,
    /// (rows, columns)
    pub grid_size: (usize, usize),
    #[serde(default)]
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub entrances: Vec<Entrance>,
    #[serde(default)]
    pub exits: Vec<Exit>,
    #[serde(default)]
    pub corridors: Vec<Corridor>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub ramps: Vec<Ramp>,
}

impl Level {
    /// An empty level, to be filled out by the caller.
    pub fn new(building: &str, level: i32, grid_size: (usize, usize)) -> Level {
        Level {
            building: building.to_string(),
            level,
            grid_size,
            slots: Vec::new(),
            entrances: Vec::new(),
            exits: Vec::new(),
            corridors: Vec::new(),
            walls: Vec::new(),
            ramps: Vec::new(),
        }
    }

    /// Every distinct corridor point on this level, in the order they're first listed.
    pub fn corridor_pts(&self) -> Vec<Pt2D> {
        let mut seen = BTreeSet::new();
        let mut pts = Vec::new();
        for corridor in &self.corridors {
            for pt in &corridor.points {
                if seen.insert(pt.to_hashable()) {
                    pts.push(*pt);
                }
            }
        }
        pts
    }

    /// Corridor points exactly one grid step away from `pt`, along one axis.
    pub fn adjacent_corridor_pts(&self, pt: Pt2D) -> Vec<Pt2D> {
        self.corridor_pts()
            .into_iter()
            .filter(|c| c.is_grid_adjacent(pt))
            .collect()
    }

    /// The corridor point closest to `pt`, no matter how far away. Ties go to whichever point is
    /// listed first.
    pub fn closest_corridor_pt(&self, pt: Pt2D) -> Option<(Pt2D, Distance)> {
        let mut best: Option<(Pt2D, Distance)> = None;
        for c in self.corridor_pts() {
            let dist = c.dist_to(pt);
            if best.map(|(_, d)| dist < d).unwrap_or(true) {
                best = Some((c, dist));
            }
        }
        best
    }

    pub fn is_corridor_pt(&self, pt: Pt2D) -> bool {
        let key = pt.to_hashable();
        self.corridors
            .iter()
            .any(|c| c.points.iter().any(|p| p.to_hashable() == key))
    }

    pub fn slot_at(&self, pt: Pt2D) -> Option<&Slot> {
        let key = pt.to_hashable();
        self.slots.iter().find(|s| s.pt().to_hashable() == key)
    }

    pub(crate) fn wall_cells(&self) -> BTreeSet<HashablePt2D> {
        self.walls
            .iter()
            .flat_map(|w| w.points.iter().map(|pt| pt.to_hashable()))
            .collect()
    }
}
