//! Routing inside multi-level parking facilities. A `ParkingMap` describes the corridors, slots,
//! entrances, exits, and ramps of each level. From that, a directed `Graph` is built once, and a
//! `PathPlanner` answers queries like "the closest free slot to this entrance" or "the best exit
//! from this slot".
//!
//! Slots and exits are sinks in the graph: routes can end there, but never pass through. A route
//! can only start from a slot after the planner explicitly promotes it with virtual edges.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod find_closest;
mod make;
mod map;
mod objects;
mod pathfind;
mod position;
mod validate;

pub use crate::find_closest::{nearest, nearest_n, EntityFilter, Locatable};
pub use crate::make::build_graph;
pub use crate::map::ParkingMap;
pub use crate::objects::corridor::{Corridor, CorridorDirection};
pub use crate::objects::entrance::{Entrance, EntranceID, EntranceType};
pub use crate::objects::exit::{Exit, ExitID};
pub use crate::objects::level::{Level, Wall};
pub use crate::objects::ramp::{Ramp, RampDirection, RampID};
pub use crate::objects::slot::{Slot, SlotID, SlotStatus};
pub use crate::pathfind::connector::connect_node;
pub use crate::pathfind::dijkstra::find_path;
pub use crate::pathfind::graph::{Graph, RoutingGraph, VirtualEdges};
pub use crate::pathfind::node::Node;
pub use crate::pathfind::planner::{Journey, NearestExit, NearestSlot, PathPlanner};
pub use crate::pathfind::{PathResult, RoutingParams};
pub use crate::position::Position;
