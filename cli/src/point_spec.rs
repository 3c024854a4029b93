use anyhow::Result;

use geom::Pt2D;
use parking_model::{ParkingMap, Position};

/// How a user names a place on the command line: an entity ID like `E1`, `X2`, `R1`, `S7`, or
/// raw coordinates as `level,x,y`.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSpec {
    Entrance(String),
    Exit(String),
    Ramp(String),
    Slot(String),
    Coords(i32, f64, f64),
}

impl PointSpec {
    pub fn parse(raw: &str) -> Result<PointSpec> {
        let raw = raw.trim();
        if raw.contains(',') {
            let parts: Vec<&str> = raw.split(',').map(|x| x.trim()).collect();
            if parts.len() != 3 {
                bail!("{} should look like level,x,y", raw);
            }
            let level = parts[0]
                .parse::<i32>()
                .map_err(|err| anyhow!("bad level in {}: {}", raw, err))?;
            let x = parts[1]
                .parse::<f64>()
                .map_err(|err| anyhow!("bad x in {}: {}", raw, err))?;
            let y = parts[2]
                .parse::<f64>()
                .map_err(|err| anyhow!("bad y in {}: {}", raw, err))?;
            return Ok(PointSpec::Coords(level, x, y));
        }

        let id = raw.to_string();
        match raw.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('E') => Ok(PointSpec::Entrance(id)),
            Some('X') => Ok(PointSpec::Exit(id)),
            Some('R') => Ok(PointSpec::Ramp(id)),
            Some('S') => Ok(PointSpec::Slot(id)),
            _ => bail!(
                "don't know what {:?} is; use an ID like E1, X2, R1, S7, or level,x,y",
                raw
            ),
        }
    }

    /// IDs match case-insensitively, so `e1` finds entrance `E1`.
    pub fn resolve(&self, map: &ParkingMap) -> Result<Position> {
        match self {
            PointSpec::Entrance(id) => map
                .all_entrances()
                .find(|e| e.entrance_id.0.eq_ignore_ascii_case(id))
                .map(|e| e.position())
                .ok_or_else(|| anyhow!("no entrance called {}", id)),
            PointSpec::Exit(id) => map
                .all_exits()
                .find(|e| e.exit_id.0.eq_ignore_ascii_case(id))
                .map(|e| e.position())
                .ok_or_else(|| anyhow!("no exit called {}", id)),
            PointSpec::Ramp(id) => map
                .all_ramps()
                .find(|r| r.ramp_id.0.eq_ignore_ascii_case(id))
                .map(|r| r.src())
                .ok_or_else(|| anyhow!("no ramp called {}", id)),
            PointSpec::Slot(id) => map
                .all_slots()
                .find(|s| s.slot_id.0.eq_ignore_ascii_case(id))
                .map(|s| s.position())
                .ok_or_else(|| anyhow!("no slot called {}", id)),
            PointSpec::Coords(level, x, y) => {
                let pt = Pt2D::checked_new(*x, *y)?;
                Ok(Position::new(*level, pt))
            }
        }
    }
}

pub fn resolve(raw: &str, map: &ParkingMap) -> Result<Position> {
    PointSpec::parse(raw)?.resolve(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_model::{Entrance, EntranceID, EntranceType, Level, Ramp, RampDirection, RampID};

    fn map() -> ParkingMap {
        let mut level = Level::new("Garage", 1, (5, 5));
        level.entrances.push(Entrance {
            entrance_id: EntranceID("E1".to_string()),
            level: 1,
            x: 0.0,
            y: 1.0,
            entrance_type: EntranceType::Car,
        });
        level.ramps.push(Ramp {
            ramp_id: RampID("R1".to_string()),
            level: 1,
            x: 3.0,
            y: 3.0,
            to_level: 2,
            to_x: 3.0,
            to_y: 3.0,
            direction: RampDirection::Both,
        });
        ParkingMap::new(vec![level])
    }

    #[test]
    fn parse_specs() {
        assert_eq!(
            PointSpec::parse("E1").unwrap(),
            PointSpec::Entrance("E1".to_string())
        );
        assert_eq!(
            PointSpec::parse("x2").unwrap(),
            PointSpec::Exit("x2".to_string())
        );
        assert_eq!(
            PointSpec::parse(" 2, 1.5 ,3").unwrap(),
            PointSpec::Coords(2, 1.5, 3.0)
        );
        assert!(PointSpec::parse("1,2").is_err());
        assert!(PointSpec::parse("1,a,2").is_err());
        assert!(PointSpec::parse("Q9").is_err());
        assert!(PointSpec::parse("").is_err());
    }

    #[test]
    fn resolve_ignores_case() {
        let map = map();
        let pos = resolve("e1", &map).unwrap();
        assert_eq!(pos, Position::new(1, Pt2D::new(0.0, 1.0)));
        assert_eq!(
            resolve("R1", &map).unwrap(),
            Position::new(1, Pt2D::new(3.0, 3.0))
        );
        assert!(resolve("E9", &map).is_err());
        assert!(resolve("1,1e200,0", &map).is_err());
        assert!(resolve("S1", &map).is_err());
    }
}
