//! Turns a `ParkingMap` into a routing `Graph`. This never fails; anything geometrically odd is
//! reported through the `Timer` and the graph is left partly connected instead.

mod connections;
mod corridors;
mod ramps;

use parking_util::Timer;

use crate::{Graph, ParkingMap, RoutingParams};

pub fn build_graph(map: &ParkingMap, params: &RoutingParams, timer: &mut Timer) -> Graph {
    timer.start("build parking graph");
    let mut graph = Graph::new();

    timer.start("corridors");
    for level in &map.levels {
        corridors::add_corridor_edges(&mut graph, level, timer);
    }
    timer.stop("corridors");

    timer.start("entrances, exits, and slots");
    connections::connect_entrances_and_ramp_ends(&mut graph, map, timer);
    connections::connect_exits(&mut graph, map, timer);
    connections::connect_slots(&mut graph, map, timer);
    timer.stop("entrances, exits, and slots");

    timer.start("ramps");
    ramps::add_ramp_edges(&mut graph, map, params, timer);
    timer.stop("ramps");

    info!(
        "Parking graph for {} has {} nodes and {} edges",
        map.building_name().unwrap_or("unnamed building"),
        graph.num_nodes(),
        graph.num_edges()
    );
    timer.stop("build parking graph");
    graph
}
