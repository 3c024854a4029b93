use geom::{Distance, Pt2D};
use parking_util::Timer;

use crate::{Graph, Node, ParkingMap, Position};

/// How something off the corridor network gets attached to it.
enum Attachment {
    /// A corridor point one grid step away
    Adjacent(Pt2D),
    /// Nothing is adjacent, so use the closest corridor point, however far
    Fallback(Pt2D, Distance),
    /// The thing sits directly on a corridor point, so it's already part of the network
    Coincident,
    /// The level doesn't exist or has no corridors
    Nothing,
}

fn attach(map: &ParkingMap, pos: Position, allow_fallback: bool) -> Attachment {
    let level = match map.get_level(pos.level) {
        Some(l) => l,
        None => {
            return Attachment::Nothing;
        }
    };
    if level.is_corridor_pt(pos.pt) {
        return Attachment::Coincident;
    }
    if let Some(pt) = level.adjacent_corridor_pts(pos.pt).into_iter().next() {
        return Attachment::Adjacent(pt);
    }
    if allow_fallback {
        if let Some((pt, dist)) = level.closest_corridor_pt(pos.pt) {
            return Attachment::Fallback(pt, dist);
        }
    }
    Attachment::Nothing
}

/// Returns the corridor node to connect with, if any.
fn corridor_endpoint(
    map: &ParkingMap,
    pos: Position,
    label: String,
    timer: &mut Timer,
) -> Option<Node> {
    match attach(map, pos, true) {
        Attachment::Adjacent(pt) => Some(Node::from_pt(pos.level, pt)),
        Attachment::Fallback(pt, dist) => {
            timer.warn(format!(
                "{} at {} isn't next to any corridor; connecting it to {}, {} away",
                label, pos, pt, dist
            ));
            Some(Node::from_pt(pos.level, pt))
        }
        Attachment::Coincident => {
            timer.warn(format!(
                "{} at {} sits on a corridor point and shares its node",
                label, pos
            ));
            None
        }
        Attachment::Nothing => {
            timer.warn(format!(
                "{} at {} has no corridor on its level to connect to",
                label, pos
            ));
            None
        }
    }
}

/// Car entrances and both ends of every ramp behave like ordinary corridor points: connect each
/// to its nearest corridor point in both directions.
pub fn connect_entrances_and_ramp_ends(graph: &mut Graph, map: &ParkingMap, timer: &mut Timer) {
    let mut via_nodes: Vec<(Position, String)> = Vec::new();
    for entrance in map.all_entrances() {
        if entrance.is_for_cars() {
            via_nodes.push((entrance.position(), entrance.entrance_id.to_string()));
        }
    }
    for ramp in map.all_ramps() {
        via_nodes.push((ramp.src(), ramp.ramp_id.to_string()));
        via_nodes.push((ramp.dst(), ramp.ramp_id.to_string()));
    }

    for (pos, label) in via_nodes {
        let node = Node::from(pos);
        graph.add_node(node);
        if let Some(corridor) = corridor_endpoint(map, pos, label, timer) {
            let weight = corridor.to_pt2d().dist_to(pos.pt);
            graph.add_edge(node, corridor, weight);
            graph.add_edge(corridor, node, weight);
        }
    }
}

/// Exits can only be entered from the corridor, never left.
pub fn connect_exits(graph: &mut Graph, map: &ParkingMap, timer: &mut Timer) {
    for exit in map.all_exits() {
        let pos = exit.position();
        let node = Node::from(pos);
        graph.add_node(node);

        if let Attachment::Coincident = attach(map, pos, false) {
            timer.warn(format!(
                "{} at {} sits on a corridor, so routes can pass through it",
                exit.exit_id, pos
            ));
            continue;
        }
        if let Some(corridor) = corridor_endpoint(map, pos, exit.exit_id.to_string(), timer) {
            graph.add_edge(corridor, node, corridor.to_pt2d().dist_to(pos.pt));
        }
    }
}

/// Slots are sinks, entered only from a corridor point exactly one grid step away. A slot without
/// one stays in the graph, but nothing can ever reach it.
pub fn connect_slots(graph: &mut Graph, map: &ParkingMap, timer: &mut Timer) {
    for slot in map.all_slots() {
        let pos = slot.position();
        let node = Node::from(pos);
        graph.add_node(node);

        match attach(map, pos, false) {
            Attachment::Adjacent(pt) => {
                let corridor = Node::from_pt(pos.level, pt);
                graph.add_edge(corridor, node, pt.dist_to(pos.pt));
            }
            Attachment::Coincident => {
                timer.warn(format!(
                    "{} at {} sits on a corridor, so routes can pass through it",
                    slot.slot_id, pos
                ));
            }
            Attachment::Fallback(_, _) | Attachment::Nothing => {
                timer.warn(format!(
                    "{} at {} has no adjacent corridor point and will be unreachable",
                    slot.slot_id, pos
                ));
            }
        }
    }
}
