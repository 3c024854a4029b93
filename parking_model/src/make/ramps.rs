use parking_util::Timer;

use crate::{Graph, Node, ParkingMap, RoutingParams};

/// Ramps are the only edges between levels. Their weight is a fixed cost, not the distance
/// between the two ends.
pub fn add_ramp_edges(
    graph: &mut Graph,
    map: &ParkingMap,
    params: &RoutingParams,
    timer: &mut Timer,
) {
    for ramp in map.all_ramps() {
        if map.get_level(ramp.to_level).is_none() {
            timer.warn(format!(
                "{} leads to level {}, which doesn't exist",
                ramp.ramp_id, ramp.to_level
            ));
        }

        let src = Node::from(ramp.src());
        let dst = Node::from(ramp.dst());
        if src == dst {
            timer.warn(format!("{} starts and ends at the same place", ramp.ramp_id));
            continue;
        }

        let (forwards, backwards) = ramp.allowed_directions();
        if forwards {
            graph.add_edge(src, dst, params.ramp_weight());
        }
        if backwards {
            graph.add_edge(dst, src, params.ramp_weight());
        }
    }
}
