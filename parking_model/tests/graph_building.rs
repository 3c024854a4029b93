mod common;

use geom::Distance;
use parking_model::{
    build_graph, CorridorDirection, EntranceType, Level, Node, ParkingMap, PathPlanner,
    RampDirection, RoutingParams, SlotStatus,
};
use parking_util::Timer;

use common::{corridor, entrance, exit, garage, ramp, slot};

fn build(map: &ParkingMap) -> parking_model::Graph {
    build_graph(map, &RoutingParams::default(), &mut Timer::throwaway())
}

#[test]
fn slots_and_exits_are_sinks() {
    let map = garage();
    let graph = build(&map);
    for s in map.all_slots() {
        let node = Node::from(s.position());
        assert!(graph.contains(node), "{} missing", s.slot_id);
        assert!(graph.neighbors(node).is_empty(), "{} has edges out", s.slot_id);
        assert_eq!(graph.incoming(node).len(), 1, "{}", s.slot_id);
    }
    for e in map.all_exits() {
        let node = Node::from(e.position());
        assert!(graph.neighbors(node).is_empty(), "{} has edges out", e.exit_id);
        assert_eq!(graph.incoming(node).len(), 1, "{}", e.exit_id);
    }
}

#[test]
fn entrances_and_ramps_are_two_way() {
    let map = garage();
    let graph = build(&map);
    let one = Distance::meters(1.0);

    let e1 = Node::new(1, 0.0, 1.0);
    assert_eq!(graph.neighbors(e1), vec![(Node::new(1, 0.0, 2.0), one)]);
    assert_eq!(graph.edge_weight(Node::new(1, 0.0, 2.0), e1), Some(one));

    // Building entrances aren't for cars
    assert!(!graph.contains(Node::new(2, 6.0, 1.0)));

    let bottom = Node::new(1, 3.0, 3.0);
    let top = Node::new(2, 3.0, 3.0);
    let ramp_cost = RoutingParams::default().ramp_weight();
    assert_eq!(
        graph.neighbors(bottom),
        vec![(Node::new(1, 3.0, 2.0), one), (top, ramp_cost)]
    );
    assert_eq!(
        graph.neighbors(top),
        vec![(Node::new(2, 3.0, 2.0), one), (bottom, ramp_cost)]
    );
}

#[test]
fn construction_is_deterministic() {
    let map = garage();
    let g1 = build(&map);
    let g2 = build(&map);
    let mut nodes1 = g1.all_nodes();
    let mut nodes2 = g2.all_nodes();
    nodes1.sort();
    nodes2.sort();
    assert_eq!(nodes1, nodes2);
    assert_eq!(g1.all_edges(), g2.all_edges());
    for node in nodes1 {
        assert_eq!(g1.neighbors(node), g2.neighbors(node));
    }
}

#[test]
fn gaps_in_corridors_are_never_bridged() {
    let mut level = Level::new("gappy", 1, (1, 6));
    level.corridors.push(corridor(
        &[(0.0, 0.0), (1.0, 0.0), (4.0, 0.0), (5.0, 0.0)],
        CorridorDirection::Both,
    ));
    let map = ParkingMap::new(vec![level]);
    let mut timer = Timer::throwaway();
    let graph = build_graph(&map, &RoutingParams::default(), &mut timer);

    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_edges(), 4);
    assert_eq!(graph.edge_weight(Node::new(1, 1.0, 0.0), Node::new(1, 4.0, 0.0)), None);
    assert_eq!(timer.warnings().len(), 1);
}

#[test]
fn unreachable_slots_are_kept_and_reported() {
    let mut level = Level::new("lonely", 1, (6, 6));
    level
        .corridors
        .push(corridor(&[(0.0, 0.0), (1.0, 0.0)], CorridorDirection::Both));
    // Diagonal from the corridor isn't good enough
    level.slots.push(slot("S1", 1, 2.0, 1.0, SlotStatus::Available));
    level.slots.push(slot("S2", 1, 5.0, 5.0, SlotStatus::Available));
    let map = ParkingMap::new(vec![level]);
    let mut timer = Timer::throwaway();
    let graph = build_graph(&map, &RoutingParams::default(), &mut timer);

    for node in [Node::new(1, 2.0, 1.0), Node::new(1, 5.0, 5.0)] {
        assert!(graph.contains(node));
        assert!(graph.incoming(node).is_empty());
        assert!(graph.neighbors(node).is_empty());
    }
    assert_eq!(timer.warnings().len(), 2);
    assert!(timer.warnings()[0].contains("S1"));

    let err = map.validate().unwrap_err().to_string();
    assert!(err.contains("S1") && err.contains("S2"), "{}", err);
}

#[test]
fn far_entrances_and_exits_fall_back_to_the_closest_corridor() {
    let mut level = Level::new("far", 1, (5, 5));
    level
        .corridors
        .push(corridor(&[(0.0, 0.0), (1.0, 0.0)], CorridorDirection::Both));
    level
        .entrances
        .push(entrance("E1", 1, 0.0, 3.0, EntranceType::Car));
    level.exits.push(exit("X1", 1, 4.0, 0.0));
    let map = ParkingMap::new(vec![level]);
    let mut timer = Timer::throwaway();
    let graph = build_graph(&map, &RoutingParams::default(), &mut timer);

    let e1 = Node::new(1, 0.0, 3.0);
    assert_eq!(
        graph.neighbors(e1),
        vec![(Node::new(1, 0.0, 0.0), Distance::meters(3.0))]
    );
    let x1 = Node::new(1, 4.0, 0.0);
    assert_eq!(
        graph.incoming(x1),
        vec![(Node::new(1, 1.0, 0.0), Distance::meters(3.0))]
    );
    assert!(graph.neighbors(x1).is_empty());
    assert_eq!(timer.warnings().len(), 2);
}

#[test]
fn entities_on_corridor_points_are_reported() {
    let mut level = Level::new("crowded", 1, (2, 3));
    level.corridors.push(corridor(
        &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
        CorridorDirection::Both,
    ));
    level
        .entrances
        .push(entrance("E1", 1, 0.0, 0.0, EntranceType::Car));
    level.slots.push(slot("S1", 1, 1.0, 0.0, SlotStatus::Available));
    level.slots.push(slot("S2", 1, 1.0, 1.0, SlotStatus::Available));
    level.exits.push(exit("X1", 1, 2.0, 0.0));
    let map = ParkingMap::new(vec![level]);
    let mut timer = Timer::throwaway();
    let graph = build_graph(&map, &RoutingParams::default(), &mut timer);

    // Each one just shares the corridor's node
    assert_eq!(graph.num_nodes(), 4);
    let warnings = timer.warnings();
    assert_eq!(warnings.len(), 3, "{:?}", warnings);
    for id in ["E1", "S1", "X1"] {
        assert!(warnings.iter().any(|w| w.contains(id)), "{} not reported", id);
    }

    // An entrance on a corridor is harmless, but slots and exits stop being sinks
    let problems = map.problems();
    assert_eq!(problems.len(), 2, "{:?}", problems);
    assert!(problems[0].contains("S1"));
    assert!(problems[1].contains("X1"));

    let strict = RoutingParams {
        strict_slots: true,
        ..Default::default()
    };
    assert!(PathPlanner::new(map.clone(), strict).is_err());
    assert!(PathPlanner::new(map, RoutingParams::default()).is_ok());
}

#[test]
fn one_way_ramps() {
    let mut levels = Vec::new();
    for number in [1, 2] {
        let mut level = Level::new("ramps", number, (3, 3));
        level
            .corridors
            .push(corridor(&[(0.0, 0.0), (1.0, 0.0)], CorridorDirection::Both));
        levels.push(level);
    }
    levels[0].ramps.push(ramp(
        "UP",
        (1, 1.0, 1.0),
        (2, 1.0, 1.0),
        RampDirection::Up,
    ));
    levels[1].ramps.push(ramp(
        "DOWN",
        (2, 0.0, 1.0),
        (1, 0.0, 1.0),
        RampDirection::Down,
    ));
    let map = ParkingMap::new(levels);
    let params = RoutingParams {
        ramp_cost: 1.0,
        ..Default::default()
    };
    let graph = build_graph(&map, &params, &mut Timer::throwaway());

    let ramp_weight = Distance::meters(1.0);
    assert_eq!(
        graph.edge_weight(Node::new(1, 1.0, 1.0), Node::new(2, 1.0, 1.0)),
        Some(ramp_weight)
    );
    assert_eq!(
        graph.edge_weight(Node::new(2, 1.0, 1.0), Node::new(1, 1.0, 1.0)),
        None
    );
    assert_eq!(
        graph.edge_weight(Node::new(2, 0.0, 1.0), Node::new(1, 0.0, 1.0)),
        Some(ramp_weight)
    );
    assert_eq!(
        graph.edge_weight(Node::new(1, 0.0, 1.0), Node::new(2, 0.0, 1.0)),
        None
    );
}
