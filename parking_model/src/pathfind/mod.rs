use serde::{Deserialize, Serialize, Serializer};

use geom::Distance;

use crate::Node;

pub mod connector;
pub mod dijkstra;
pub mod graph;
pub mod node;
pub mod planner;

/// Tunable costs used when building the graph and searching it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingParams {
    /// The fixed weight of every ramp edge, no matter how far apart the two ends are.
    pub ramp_cost: f64,
    /// Added to the search cost whenever a route changes direction. Not a physical distance.
    pub turn_penalty: f64,
    /// Refuse to plan over a map where some slot can't be reached from any corridor.
    pub strict_slots: bool,
}

impl Default for RoutingParams {
    fn default() -> RoutingParams {
        RoutingParams {
            ramp_cost: 2.0,
            turn_penalty: 0.1,
            strict_slots: false,
        }
    }
}

impl RoutingParams {
    pub fn ramp_weight(&self) -> Distance {
        Distance::meters(self.ramp_cost)
    }
}

/// A route found through the graph. `distance` is the plain sum of edge weights; `cost` is what
/// the search actually minimized, which also includes turn penalties. Steps within a level are
/// costed at their exact length rather than the trimmed weight, so `cost` never undercuts the
/// geometry either.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathResult {
    pub nodes: Vec<Node>,
    #[serde(serialize_with = "serialize_distance")]
    pub distance: Distance,
    pub cost: f64,
}

impl PathResult {
    /// The number of nodes along the route, including both ends.
    pub fn num_points(&self) -> usize {
        self.nodes.len()
    }

    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    pub fn end(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    /// The search cost, or infinity when there's no route at all.
    pub fn cost_or_infinity(path: Option<&PathResult>) -> f64 {
        path.map(|p| p.cost).unwrap_or(f64::INFINITY)
    }

    /// True if the route passes between levels.
    pub fn changes_level(&self) -> bool {
        self.nodes.iter().any(|n| n.level != self.nodes[0].level)
    }
}

/// Results are written with plain numbers, not the compact form `Distance` uses in map files.
pub(crate) fn serialize_distance<S: Serializer>(d: &Distance, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.inner_meters())
}
