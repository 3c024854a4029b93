#![allow(dead_code)]

use geom::Pt2D;
use parking_model::{
    Corridor, CorridorDirection, Entrance, EntranceID, EntranceType, Exit, ExitID, Level,
    ParkingMap, Ramp, RampDirection, RampID, Slot, SlotID, SlotStatus,
};

pub fn corridor(pts: &[(f64, f64)], direction: CorridorDirection) -> Corridor {
    Corridor::new(
        pts.iter().map(|(x, y)| Pt2D::new(*x, *y)).collect(),
        direction,
    )
}

pub fn slot(id: &str, level: i32, x: f64, y: f64, status: SlotStatus) -> Slot {
    Slot {
        slot_id: SlotID(id.to_string()),
        level,
        x,
        y,
        status,
        vehicle_id: None,
        reserved_by: None,
    }
}

pub fn entrance(id: &str, level: i32, x: f64, y: f64, entrance_type: EntranceType) -> Entrance {
    Entrance {
        entrance_id: EntranceID(id.to_string()),
        level,
        x,
        y,
        entrance_type,
    }
}

pub fn exit(id: &str, level: i32, x: f64, y: f64) -> Exit {
    Exit {
        exit_id: ExitID(id.to_string()),
        level,
        x,
        y,
    }
}

pub fn ramp(id: &str, from: (i32, f64, f64), to: (i32, f64, f64), direction: RampDirection) -> Ramp {
    Ramp {
        ramp_id: RampID(id.to_string()),
        level: from.0,
        x: from.1,
        y: from.2,
        to_level: to.0,
        to_x: to.1,
        to_y: to.2,
        direction,
    }
}

/// One two-way corridor `[(0, 0), (1, 0)]` on level 1, with a slot just past the end.
pub fn tiny_map() -> ParkingMap {
    let mut level = Level::new("tiny", 1, (1, 3));
    level
        .corridors
        .push(corridor(&[(0.0, 0.0), (1.0, 0.0)], CorridorDirection::Both));
    level
        .slots
        .push(slot("S1", 1, 2.0, 0.0, SlotStatus::Available));
    ParkingMap::new(vec![level])
}

/// Two levels, each with a two-way corridor along y = 2 from x = 0 to 6, joined by a ramp at
/// (3, 3).
///
/// ```text
/// level 1            level 2
///   y=3  . . . R S . S    X2 . . R . . .
///   y=2  = = = = = = =    = = = = = = =
///   y=1  E . o S . . X1   . S . . . . B
///        0 1 2 3 4 5 6    0 1 2 3 4 5 6
/// ```
pub fn garage() -> ParkingMap {
    let mut level1 = Level::new("garage", 1, (5, 7));
    level1.corridors.push(corridor(
        &[
            (0.0, 2.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (3.0, 2.0),
            (4.0, 2.0),
            (5.0, 2.0),
            (6.0, 2.0),
        ],
        CorridorDirection::Both,
    ));
    level1
        .entrances
        .push(entrance("E1", 1, 0.0, 1.0, EntranceType::Car));
    level1.slots.push(slot("S1", 1, 2.0, 1.0, SlotStatus::Occupied));
    level1.slots.push(slot("S2", 1, 3.0, 1.0, SlotStatus::Available));
    level1.slots.push(slot("S3", 1, 4.0, 3.0, SlotStatus::Available));
    level1.slots.push(slot("S4", 1, 6.0, 3.0, SlotStatus::Available));
    level1.exits.push(exit("X1", 1, 6.0, 1.0));
    level1.ramps.push(ramp(
        "R1",
        (1, 3.0, 3.0),
        (2, 3.0, 3.0),
        RampDirection::Both,
    ));

    let mut level2 = Level::new("garage", 2, (5, 7));
    level2.corridors.push(corridor(
        &[
            (0.0, 2.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (3.0, 2.0),
            (4.0, 2.0),
            (5.0, 2.0),
            (6.0, 2.0),
        ],
        CorridorDirection::Both,
    ));
    level2.slots.push(slot("S5", 2, 1.0, 1.0, SlotStatus::Available));
    level2.exits.push(exit("X2", 2, 0.0, 3.0));
    level2
        .entrances
        .push(entrance("B1", 2, 6.0, 1.0, EntranceType::Building));

    ParkingMap::new(vec![level1, level2])
}
