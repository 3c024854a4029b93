use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use geom::Distance;
use parking_util::Timer;

use crate::pathfind::serialize_distance;
use crate::{
    build_graph, connect_node, find_path, nearest, EntityFilter, EntranceID, ExitID, Graph,
    Node, ParkingMap, PathResult, Position, RoutingParams, SlotID, VirtualEdges,
};

/// The closest available slot by straight-line distance, and the route to it. `euclidean` and
/// `route.distance` generally differ; the slot was chosen by the former.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearestSlot {
    pub slot: SlotID,
    #[serde(serialize_with = "serialize_distance")]
    pub euclidean: Distance,
    /// None if the slot can't actually be reached
    pub route: Option<PathResult>,
}

/// The exit with the cheapest route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearestExit {
    pub exit: ExitID,
    pub route: PathResult,
}

/// Entering, parking, and leaving again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Journey {
    pub to_slot: NearestSlot,
    pub to_exit: Option<NearestExit>,
}

/// Answers routing questions about one map snapshot.
///
/// The graph is built once and never modified; it can be shared with other planners through
/// `with_graph`. Slot promotions are recorded as virtual edges owned by this planner, and they
/// stick around for every later query on it. So after `find_nearest_exit_to_slot`, routes may
/// start from that slot. Use a fresh planner (sharing the same graph is fine) to start from a
/// clean slate. Query points are only spliced in for the query that asked about them.
pub struct PathPlanner {
    map: Arc<ParkingMap>,
    graph: Arc<Graph>,
    overlay: VirtualEdges,
    params: RoutingParams,
}

impl PathPlanner {
    pub fn new(map: ParkingMap, params: RoutingParams) -> Result<PathPlanner> {
        if params.strict_slots {
            map.validate()?;
        }
        let mut timer = Timer::new("prepare path planner");
        let graph = build_graph(&map, &params, &mut timer);
        Ok(PathPlanner::with_graph(Arc::new(map), Arc::new(graph), params))
    }

    /// Reuse a graph that was already built from `map`.
    pub fn with_graph(
        map: Arc<ParkingMap>,
        graph: Arc<Graph>,
        params: RoutingParams,
    ) -> PathPlanner {
        PathPlanner {
            map,
            graph,
            overlay: VirtualEdges::new(),
            params,
        }
    }

    pub fn map(&self) -> &ParkingMap {
        &self.map
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn overlay(&self) -> &VirtualEdges {
        &self.overlay
    }

    pub fn params(&self) -> &RoutingParams {
        &self.params
    }

    /// Outgoing edges of a node, including any slot promotions on this planner.
    pub fn neighbors(&self, node: Node) -> Vec<(Node, Distance)> {
        self.graph.with_overlay(&self.overlay).neighbors(node)
    }

    /// Route between any two points. Points that aren't already in the graph are connected to
    /// nearby corridors for this query only; otherwise a later route could cut through them.
    pub fn find_path(&self, start: Position, end: Position) -> Option<PathResult> {
        let start = Node::from(start);
        let end = Node::from(end);
        let mut query = self.overlay.clone();
        connect_node(&self.graph, &mut query, start, &self.map);
        connect_node(&self.graph, &mut query, end, &self.map);
        find_path(&self.graph.with_overlay(&query), start, end, &self.params)
    }

    /// Picks the available slot closest to the entrance in a straight line on the same level,
    /// then routes to it. Returns None if there's no available slot on that level.
    pub fn find_nearest_slot_to_entrance(&self, id: &EntranceID) -> Result<Option<NearestSlot>> {
        let entrance = self.map.get_entrance(id)?.position();
        Ok(self.find_nearest_slot(entrance))
    }

    /// Like `find_nearest_slot_to_entrance`, but from anywhere.
    pub fn find_nearest_slot(&self, from: Position) -> Option<NearestSlot> {
        let (slot, euclidean) = nearest(
            from.pt,
            self.map.all_slots(),
            &EntityFilter::available_on_level(from.level),
        )?;
        let route = self.find_path(from, slot.position());
        if route.is_none() {
            warn!(
                "{} is the closest available slot to {}, but can't be reached",
                slot.slot_id, from
            );
        }
        Some(NearestSlot {
            slot: slot.slot_id.clone(),
            euclidean,
            route,
        })
    }

    /// Lets routes start from a slot by adding the reverse of every edge leading into it. This
    /// lasts for the lifetime of the planner.
    pub fn promote_slot(&mut self, id: &SlotID) -> Result<()> {
        let node = Node::from(self.map.get_slot(id)?.position());
        let incoming = self.graph.with_overlay(&self.overlay).incoming(node);
        if incoming.is_empty() {
            warn!("Promoting {}, but nothing leads into it", id);
        }
        for (from, weight) in incoming {
            self.overlay.add_edge(node, from, weight);
        }
        Ok(())
    }

    /// Promotes the slot, then finds the exit with the cheapest route from it. Returns None if no
    /// exit is reachable.
    pub fn find_nearest_exit_to_slot(&mut self, id: &SlotID) -> Result<Option<NearestExit>> {
        self.promote_slot(id)?;
        let slot = self.map.get_slot(id)?.position();
        Ok(self.find_nearest_exit(slot))
    }

    /// The exit with the cheapest route from anywhere, across all levels. Ties go to the exit
    /// listed first.
    pub fn find_nearest_exit(&self, from: Position) -> Option<NearestExit> {
        let mut best: Option<NearestExit> = None;
        for exit in self.map.all_exits() {
            if let Some(route) = self.find_path(from, exit.position()) {
                if best
                    .as_ref()
                    .map(|b| route.cost < b.route.cost)
                    .unwrap_or(true)
                {
                    best = Some(NearestExit {
                        exit: exit.exit_id.clone(),
                        route,
                    });
                }
            }
        }
        best
    }

    /// Routes from an entrance to the nearest available slot, then from that slot to the best
    /// exit. Returns None if there's no available slot near the entrance.
    pub fn plan_journey(&mut self, id: &EntranceID) -> Result<Option<Journey>> {
        let to_slot = match self.find_nearest_slot_to_entrance(id)? {
            Some(x) => x,
            None => {
                return Ok(None);
            }
        };
        let to_exit = if to_slot.route.is_some() {
            self.find_nearest_exit_to_slot(&to_slot.slot)?
        } else {
            None
        };
        Ok(Some(Journey { to_slot, to_exit }))
    }
}
