//! Splices arbitrary query points into the routing graph.

use crate::{Graph, Node, ParkingMap, VirtualEdges};

/// Makes `node` routable by adding virtual edges between it and the corridor network on its
/// level. Does nothing if the node is already known.
///
/// The node is linked to every corridor point exactly one grid step away, or if there are none,
/// to the single closest corridor point. If the node is where a slot is, it only gets an edge
/// from the corridor, so it stays a sink. Otherwise edges go both ways.
pub fn connect_node(graph: &Graph, overlay: &mut VirtualEdges, node: Node, map: &ParkingMap) {
    if graph.contains(node) || overlay.contains(node) {
        return;
    }
    overlay.add_node(node);

    let level = match map.get_level(node.level) {
        Some(l) => l,
        None => {
            warn!("Can't connect {}; level {} doesn't exist", node, node.level);
            return;
        }
    };
    let pt = node.to_pt2d();
    let is_slot = level.slot_at(pt).is_some();

    let mut targets = level.adjacent_corridor_pts(pt);
    if targets.is_empty() {
        match level.closest_corridor_pt(pt) {
            Some((closest, dist)) => {
                debug!(
                    "{} isn't next to any corridor; falling back to {}, {} away",
                    node, closest, dist
                );
                targets.push(closest);
            }
            None => {
                warn!("Can't connect {}; level {} has no corridors", node, node.level);
                return;
            }
        }
    }

    for corridor_pt in targets {
        let corridor = Node::from_pt(node.level, corridor_pt);
        let weight = corridor_pt.dist_to(pt);
        overlay.add_edge(corridor, node, weight);
        if !is_slot {
            overlay.add_edge(node, corridor, weight);
        }
    }
}
