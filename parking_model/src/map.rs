use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{Entrance, EntranceID, Exit, ExitID, Level, Ramp, Slot, SlotID};

/// One snapshot of a building's map, across all of its levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkingMap {
    pub levels: Vec<Level>,
}

impl ParkingMap {
    pub fn new(levels: Vec<Level>) -> ParkingMap {
        ParkingMap { levels }
    }

    pub fn load_json(path: &str) -> Result<ParkingMap> {
        let map: ParkingMap = parking_util::read_json(path)?;
        info!(
            "Loaded {} with {} levels and {} slots",
            path,
            map.levels.len(),
            map.all_slots().count()
        );
        Ok(map)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        parking_util::write_json(path, self)
    }

    pub fn building_name(&self) -> Option<&str> {
        self.levels.first().map(|l| l.building.as_str())
    }

    pub fn get_level(&self, level: i32) -> Option<&Level> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn all_slots(&self) -> impl Iterator<Item = &Slot> {
        self.levels.iter().flat_map(|l| l.slots.iter())
    }

    pub fn all_entrances(&self) -> impl Iterator<Item = &Entrance> {
        self.levels.iter().flat_map(|l| l.entrances.iter())
    }

    pub fn all_exits(&self) -> impl Iterator<Item = &Exit> {
        self.levels.iter().flat_map(|l| l.exits.iter())
    }

    pub fn all_ramps(&self) -> impl Iterator<Item = &Ramp> {
        self.levels.iter().flat_map(|l| l.ramps.iter())
    }

    pub fn get_slot(&self, id: &SlotID) -> Result<&Slot> {
        self.all_slots()
            .find(|s| &s.slot_id == id)
            .ok_or_else(|| anyhow!("{} doesn't exist", id))
    }

    pub fn get_entrance(&self, id: &EntranceID) -> Result<&Entrance> {
        self.all_entrances()
            .find(|e| &e.entrance_id == id)
            .ok_or_else(|| anyhow!("{} doesn't exist", id))
    }

    pub fn get_exit(&self, id: &ExitID) -> Result<&Exit> {
        self.all_exits()
            .find(|e| &e.exit_id == id)
            .ok_or_else(|| anyhow!("{} doesn't exist", id))
    }
}
