//! A direction-aware Dijkstra over the routing graph.

use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;

use geom::Distance;
use parking_util::PriorityQueueItem;

use crate::{Node, PathResult, RoutingGraph, RoutingParams};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Step {
    node: Node,
    prev: Option<Node>,
    distance: Distance,
}

/// Finds the cheapest route from `start` to `end`. Both must already be in the graph; use
/// `connect_node` first for arbitrary points.
///
/// Two things differ from a textbook search:
///
/// - A node with no outgoing edges (a slot or an exit) is never expanded into, unless it's the
///   destination. Routes don't pass through parked cars or leave the building halfway.
/// - Changing direction costs `params.turn_penalty` extra, so among routes of the same length,
///   straighter ones win. Among neighbors, the ones continuing straight ahead are queued first,
///   so they also win exact ties.
///
/// Within a level, the cost of a step is never less than the untrimmed Euclidean distance
/// between its two nodes.
pub fn find_path(
    graph: &RoutingGraph,
    start: Node,
    end: Node,
    params: &RoutingParams,
) -> Option<PathResult> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    // The cost is paired with a counter, so equal costs pop in the order they were pushed.
    let mut queue: BinaryHeap<PriorityQueueItem<(OrderedFloat<f64>, usize), Step>> =
        BinaryHeap::new();
    let mut pushed = 0;
    queue.push(PriorityQueueItem {
        cost: (OrderedFloat(0.0), pushed),
        value: Step {
            node: start,
            prev: None,
            distance: Distance::ZERO,
        },
    });
    // Doubles as the visited set
    let mut backrefs: HashMap<Node, Option<Node>> = HashMap::new();

    while let Some(PriorityQueueItem {
        cost: (OrderedFloat(cost), _),
        value: current,
    }) = queue.pop()
    {
        if backrefs.contains_key(&current.node) {
            continue;
        }
        backrefs.insert(current.node, current.prev);

        if current.node == end {
            return Some(PathResult {
                nodes: trace_back(&backrefs, end),
                distance: current.distance,
                cost,
            });
        }

        let mut candidates: Vec<(Node, Distance)> = graph
            .neighbors(current.node)
            .into_iter()
            .filter(|(next, _)| {
                !backrefs.contains_key(next) && (*next == end || graph.out_degree(*next) > 0)
            })
            .collect();
        if let Some(prev) = current.prev {
            let heading = prev.to_pt2d().vector_to(current.node.to_pt2d());
            // Stable, so equally straight neighbors keep the graph's order
            candidates.sort_by(|(a, _), (b, _)| {
                let a_sim = heading.cos_similarity(current.node.to_pt2d().vector_to(a.to_pt2d()));
                let b_sim = heading.cos_similarity(current.node.to_pt2d().vector_to(b.to_pt2d()));
                b_sim.total_cmp(&a_sim)
            });
        }

        for (next, weight) in candidates {
            let mut edge_cost = weight.inner_meters();
            if next.level == current.node.level {
                // Weights are trimmed, so they can be a hair shorter than the real geometry
                edge_cost = edge_cost.max(current.node.to_pt2d().raw_dist_to(next.to_pt2d()));
            }
            if let Some(prev) = current.prev {
                if is_turn(prev, current.node, next) {
                    edge_cost += params.turn_penalty;
                }
            }
            pushed += 1;
            queue.push(PriorityQueueItem {
                cost: (OrderedFloat(cost + edge_cost), pushed),
                value: Step {
                    node: next,
                    prev: Some(current.node),
                    distance: current.distance + weight,
                },
            });
        }
    }

    None
}

/// A turn happens when neither coordinate stays fixed across three consecutive nodes.
fn is_turn(n1: Node, n2: Node, n3: Node) -> bool {
    let same_x = n1.pt.x() == n2.pt.x() && n2.pt.x() == n3.pt.x();
    let same_y = n1.pt.y() == n2.pt.y() && n2.pt.y() == n3.pt.y();
    !same_x && !same_y
}

fn trace_back(backrefs: &HashMap<Node, Option<Node>>, end: Node) -> Vec<Node> {
    let mut nodes = vec![end];
    let mut current = end;
    while let Some(Some(prev)) = backrefs.get(&current) {
        nodes.push(*prev);
        current = *prev;
    }
    nodes.reverse();
    nodes
}
