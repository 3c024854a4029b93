//! Command-line access to the parking pathfinder: load a map snapshot, then ask for routes
//! between entrances, slots, ramps, exits, or arbitrary points.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod point_spec;

use anyhow::Result;
use serde::Serialize;
use structopt::StructOpt;

use parking_model::{EntranceID, Node, ParkingMap, PathPlanner, PathResult, RoutingParams, SlotID};
use parking_util::Timer;

use crate::point_spec::PointSpec;

#[derive(StructOpt)]
#[structopt(name = "parking_cli", about = "Routes vehicles through a parking facility")]
enum Command {
    /// Find the cheapest route between two points
    Path {
        /// The path to a JSON map snapshot
        #[structopt(long)]
        map: String,
        /// Where to start: an ID like E1, S7, R1, X2, or level,x,y
        #[structopt(long)]
        from: String,
        /// Where to end, in the same format as --from
        #[structopt(long)]
        to: String,
        #[structopt(flatten)]
        routing: RoutingArgs,
    },
    /// Find the closest available slot. Starting from an entrance also routes to it.
    NearestSlot {
        /// The path to a JSON map snapshot
        #[structopt(long)]
        map: String,
        /// An entrance ID, or level,x,y
        #[structopt(long)]
        from: String,
        #[structopt(flatten)]
        routing: RoutingArgs,
    },
    /// Find the exit that's cheapest to reach
    NearestExit {
        /// The path to a JSON map snapshot
        #[structopt(long)]
        map: String,
        /// A slot ID, or level,x,y
        #[structopt(long)]
        from: String,
        #[structopt(flatten)]
        routing: RoutingArgs,
    },
    /// Plan entrance to slot, then slot to exit
    Journey {
        /// The path to a JSON map snapshot
        #[structopt(long)]
        map: String,
        /// The entrance ID to arrive through
        #[structopt(long)]
        entrance: String,
        #[structopt(flatten)]
        routing: RoutingArgs,
    },
    /// List problems with a map. Fails if there are any.
    Validate {
        /// The path to a JSON map snapshot
        #[structopt()]
        map: String,
    },
    /// Build the routing graph and summarize it
    DescribeGraph {
        /// The path to a JSON map snapshot
        #[structopt()]
        map: String,
        #[structopt(flatten)]
        routing: RoutingArgs,
    },
}

#[derive(StructOpt)]
struct RoutingArgs {
    /// A JSON file with routing parameters. The flags below override it.
    #[structopt(long)]
    params: Option<String>,
    /// The fixed cost of driving along a ramp between levels
    #[structopt(long)]
    ramp_cost: Option<f64>,
    /// Extra cost for every step that isn't straight ahead
    #[structopt(long)]
    turn_penalty: Option<f64>,
    /// Refuse maps with slots that can't be reached
    #[structopt(long)]
    strict: bool,
}

impl RoutingArgs {
    fn load(&self) -> Result<RoutingParams> {
        let mut params: RoutingParams = match self.params {
            Some(ref path) => parking_util::read_json(path)?,
            None => RoutingParams::default(),
        };
        if let Some(x) = self.ramp_cost {
            params.ramp_cost = x;
        }
        if let Some(x) = self.turn_penalty {
            params.turn_penalty = x;
        }
        if self.strict {
            params.strict_slots = true;
        }
        if !(params.ramp_cost.is_finite() && params.ramp_cost >= 0.0) {
            bail!("ramp cost {} must be a non-negative number", params.ramp_cost);
        }
        if !(params.turn_penalty.is_finite() && params.turn_penalty >= 0.0) {
            bail!(
                "turn penalty {} must be a non-negative number",
                params.turn_penalty
            );
        }
        Ok(params)
    }

    fn planner(&self, map: &str) -> Result<PathPlanner> {
        let params = self.load()?;
        PathPlanner::new(ParkingMap::load_json(map)?, params)
    }
}

/// What gets printed for one route. A missing route has an empty path and no distance or cost.
#[derive(Serialize)]
struct PathOutput {
    path: Vec<Node>,
    distance: Option<f64>,
    cost: Option<f64>,
    num_points: usize,
}

impl PathOutput {
    fn new(path: Option<&PathResult>) -> PathOutput {
        match path {
            Some(path) => PathOutput {
                path: path.nodes.clone(),
                distance: Some(path.distance.inner_meters()),
                cost: Some(path.cost),
                num_points: path.num_points(),
            },
            None => PathOutput {
                path: Vec::new(),
                distance: None,
                cost: None,
                num_points: 0,
            },
        }
    }
}

fn main() -> Result<()> {
    parking_util::logger::setup();

    match Command::from_args() {
        Command::Path {
            map,
            from,
            to,
            routing,
        } => find_path(&map, &from, &to, &routing),
        Command::NearestSlot { map, from, routing } => nearest_slot(&map, &from, &routing),
        Command::NearestExit { map, from, routing } => nearest_exit(&map, &from, &routing),
        Command::Journey {
            map,
            entrance,
            routing,
        } => journey(&map, &entrance, &routing),
        Command::Validate { map } => validate(&map),
        Command::DescribeGraph { map, routing } => describe_graph(&map, &routing),
    }
}

fn find_path(map: &str, from: &str, to: &str, routing: &RoutingArgs) -> Result<()> {
    let planner = routing.planner(map)?;
    let start = point_spec::resolve(from, planner.map())?;
    let end = point_spec::resolve(to, planner.map())?;
    let path = planner.find_path(start, end);
    match path {
        Some(ref path) => info!(
            "{} to {}: {} over {} points (cost {:.2})",
            start,
            end,
            path.distance,
            path.num_points(),
            path.cost
        ),
        None => warn!("No route from {} to {}", start, end),
    }
    println!("{}", parking_util::to_json(&PathOutput::new(path.as_ref()))?);
    Ok(())
}

fn nearest_slot(map: &str, from: &str, routing: &RoutingArgs) -> Result<()> {
    let planner = routing.planner(map)?;
    let found = match PointSpec::parse(from)? {
        PointSpec::Entrance(id) => {
            let id = canonical_entrance(planner.map(), &id)?;
            planner.find_nearest_slot_to_entrance(&id)?
        }
        spec => {
            let pos = spec.resolve(planner.map())?;
            planner.find_nearest_slot(pos)
        }
    };
    match found {
        Some(found) => println!("{}", parking_util::to_json(&found)?),
        None => println!("No available slot near {}", from),
    }
    Ok(())
}

fn nearest_exit(map: &str, from: &str, routing: &RoutingArgs) -> Result<()> {
    let mut planner = routing.planner(map)?;
    let found = match PointSpec::parse(from)? {
        PointSpec::Slot(id) => {
            let id = canonical_slot(planner.map(), &id)?;
            planner.find_nearest_exit_to_slot(&id)?
        }
        spec => {
            let pos = spec.resolve(planner.map())?;
            planner.find_nearest_exit(pos)
        }
    };
    match found {
        Some(found) => println!("{}", parking_util::to_json(&found)?),
        None => println!("No exit can be reached from {}", from),
    }
    Ok(())
}

fn journey(map: &str, entrance: &str, routing: &RoutingArgs) -> Result<()> {
    let mut planner = routing.planner(map)?;
    let id = match PointSpec::parse(entrance)? {
        PointSpec::Entrance(id) => canonical_entrance(planner.map(), &id)?,
        _ => bail!("{} isn't an entrance ID", entrance),
    };
    match planner.plan_journey(&id)? {
        Some(journey) => {
            if journey.to_exit.is_none() {
                warn!("Parked in {}, but no exit can be reached from it", journey.to_slot.slot);
            }
            println!("{}", parking_util::to_json(&journey)?);
        }
        None => println!("No available slot for a car arriving through {}", id),
    }
    Ok(())
}

fn validate(map: &str) -> Result<()> {
    let map = ParkingMap::load_json(map)?;
    let problems = map.problems();
    for problem in &problems {
        println!("{}", problem);
    }
    if problems.is_empty() {
        println!("No problems found");
    }
    map.validate()
}

fn describe_graph(map: &str, routing: &RoutingArgs) -> Result<()> {
    let params = routing.load()?;
    let map = ParkingMap::load_json(map)?;
    let mut timer = Timer::new("describe parking graph");
    let graph = parking_model::build_graph(&map, &params, &mut timer);
    println!(
        "{}: {} levels, {} nodes, {} edges, {} warnings",
        map.building_name().unwrap_or("unnamed building"),
        map.levels.len(),
        parking_util::prettyprint_usize(graph.num_nodes()),
        parking_util::prettyprint_usize(graph.num_edges()),
        timer.warnings().len()
    );
    Ok(())
}

// The planner's lookups are exact, so map whatever case the user typed to the real ID.
fn canonical_entrance(map: &ParkingMap, raw: &str) -> Result<EntranceID> {
    map.all_entrances()
        .find(|e| e.entrance_id.0.eq_ignore_ascii_case(raw))
        .map(|e| e.entrance_id.clone())
        .ok_or_else(|| anyhow!("no entrance called {}", raw))
}

fn canonical_slot(map: &ParkingMap, raw: &str) -> Result<SlotID> {
    map.all_slots()
        .find(|s| s.slot_id.0.eq_ignore_ascii_case(raw))
        .map(|s| s.slot_id.clone())
        .ok_or_else(|| anyhow!("no slot called {}", raw))
}
