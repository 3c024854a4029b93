use std::collections::BTreeSet;

use anyhow::Result;

use crate::ParkingMap;

impl ParkingMap {
    /// Stricter than building a graph, which tolerates all of these. Lists every problem found.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut level_numbers = BTreeSet::new();
        for level in &self.levels {
            if !level_numbers.insert(level.level) {
                problems.push(format!("Level {} is listed twice", level.level));
            }
        }

        for level in &self.levels {
            let walls = level.wall_cells();
            for (idx, corridor) in level.corridors.iter().enumerate() {
                for (pt1, pt2) in corridor.broken_steps() {
                    problems.push(format!(
                        "Corridor #{} on level {} jumps from {} to {}",
                        idx, level.level, pt1, pt2
                    ));
                }
                for pt in &corridor.points {
                    if walls.contains(&pt.to_hashable()) {
                        problems.push(format!(
                            "Corridor #{} on level {} runs into a wall at {}",
                            idx, level.level, pt
                        ));
                    }
                }
            }

            for slot in &level.slots {
                if slot.level != level.level {
                    problems.push(format!(
                        "{} says it's on level {}, but is listed under level {}",
                        slot.slot_id, slot.level, level.level
                    ));
                }
                if level.is_corridor_pt(slot.pt()) {
                    problems.push(format!(
                        "{} at {} sits on a corridor, so routes could pass through it",
                        slot.slot_id,
                        slot.pt()
                    ));
                } else if level.adjacent_corridor_pts(slot.pt()).is_empty() {
                    problems.push(format!(
                        "{} at {} isn't next to any corridor",
                        slot.slot_id,
                        slot.pt()
                    ));
                }
            }
            for entrance in &level.entrances {
                if entrance.level != level.level {
                    problems.push(format!(
                        "{} says it's on level {}, but is listed under level {}",
                        entrance.entrance_id, entrance.level, level.level
                    ));
                }
            }
            for exit in &level.exits {
                if exit.level != level.level {
                    problems.push(format!(
                        "{} says it's on level {}, but is listed under level {}",
                        exit.exit_id, exit.level, level.level
                    ));
                }
                if level.is_corridor_pt(exit.pt()) {
                    problems.push(format!(
                        "{} at {} sits on a corridor, so routes could pass through it",
                        exit.exit_id,
                        exit.pt()
                    ));
                }
            }
            for ramp in &level.ramps {
                if ramp.level != level.level {
                    problems.push(format!(
                        "{} says it's on level {}, but is listed under level {}",
                        ramp.ramp_id, ramp.level, level.level
                    ));
                }
                if !level_numbers.contains(&ramp.to_level) {
                    problems.push(format!(
                        "{} leads to level {}, which doesn't exist",
                        ramp.ramp_id, ramp.to_level
                    ));
                }
            }
        }

        check_unique(
            self.all_slots().map(|s| s.slot_id.to_string()),
            &mut problems,
        );
        check_unique(
            self.all_entrances().map(|e| e.entrance_id.to_string()),
            &mut problems,
        );
        check_unique(
            self.all_exits().map(|e| e.exit_id.to_string()),
            &mut problems,
        );
        check_unique(
            self.all_ramps().map(|r| r.ramp_id.to_string()),
            &mut problems,
        );

        problems
    }

    pub fn validate(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }
        bail!(
            "{} problems with the map of {}:\n{}",
            problems.len(),
            self.building_name().unwrap_or("an unnamed building"),
            problems.join("\n")
        )
    }
}

fn check_unique<I: Iterator<Item = String>>(ids: I, problems: &mut Vec<String>) {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            problems.push(format!("{} is listed more than once", id));
        }
    }
}
