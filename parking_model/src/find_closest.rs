//! Straight-line nearest neighbor searches over slots, entrances, exits, and ramps. This ignores
//! the routing graph entirely; the closest thing as the crow flies may be a long drive away.

use geom::{Distance, Pt2D};

use crate::{Entrance, Exit, Position, Ramp, Slot, SlotStatus};

/// Anything with a place in the facility.
pub trait Locatable {
    fn position(&self) -> Position;

    /// Only slots have a status.
    fn slot_status(&self) -> Option<SlotStatus> {
        None
    }
}

impl Locatable for Slot {
    fn position(&self) -> Position {
        Slot::position(self)
    }

    fn slot_status(&self) -> Option<SlotStatus> {
        Some(self.status)
    }
}

impl Locatable for Entrance {
    fn position(&self) -> Position {
        Entrance::position(self)
    }
}

impl Locatable for Exit {
    fn position(&self) -> Position {
        Exit::position(self)
    }
}

impl Locatable for Ramp {
    fn position(&self) -> Position {
        self.src()
    }
}

/// Restricts which candidates are considered. The default filter accepts everything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntityFilter {
    pub level: Option<i32>,
    /// Candidates without a status never match this.
    pub status: Option<SlotStatus>,
}

impl EntityFilter {
    pub fn on_level(level: i32) -> EntityFilter {
        EntityFilter {
            level: Some(level),
            status: None,
        }
    }

    pub fn available_on_level(level: i32) -> EntityFilter {
        EntityFilter {
            level: Some(level),
            status: Some(SlotStatus::Available),
        }
    }

    pub fn matches<T: Locatable>(&self, entity: &T) -> bool {
        if let Some(level) = self.level {
            if entity.position().level != level {
                return false;
            }
        }
        if let Some(status) = self.status {
            if entity.slot_status() != Some(status) {
                return false;
            }
        }
        true
    }
}

/// The candidate closest to `target`, by Euclidean distance. Ties go to the first candidate.
pub fn nearest<'a, T: Locatable, I: IntoIterator<Item = &'a T>>(
    target: Pt2D,
    candidates: I,
    filter: &EntityFilter,
) -> Option<(&'a T, Distance)>
where
    T: 'a,
{
    let mut best: Option<(&'a T, Distance)> = None;
    for candidate in candidates {
        if !filter.matches(candidate) {
            continue;
        }
        let dist = candidate.position().pt.dist_to(target);
        if best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((candidate, dist));
        }
    }
    best
}

/// Up to `n` of the candidates closest to `target`, closest first. Ties keep the original order.
pub fn nearest_n<'a, T: Locatable, I: IntoIterator<Item = &'a T>>(
    target: Pt2D,
    candidates: I,
    filter: &EntityFilter,
    n: usize,
) -> Vec<(&'a T, Distance)>
where
    T: 'a,
{
    let mut matches: Vec<(&'a T, Distance)> = candidates
        .into_iter()
        .filter(|c| filter.matches(*c))
        .map(|c| (c, c.position().pt.dist_to(target)))
        .collect();
    matches.sort_by_key(|(_, dist)| *dist);
    matches.truncate(n);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlotID;

    fn slot(id: &str, level: i32, x: f64, y: f64, status: SlotStatus) -> Slot {
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

    fn slots() -> Vec<Slot> {
        vec![
            slot("S1", 1, 5.0, 5.0, SlotStatus::Available),
            slot("S2", 1, 1.0, 1.0, SlotStatus::Occupied),
            slot("S3", 2, 0.0, 1.0, SlotStatus::Available),
            slot("S4", 1, 3.0, 0.0, SlotStatus::Available),
            slot("S5", 1, 0.0, 3.0, SlotStatus::Allocated),
        ]
    }

    #[test]
    fn filters() {
        let slots = slots();
        let origin = Pt2D::new(0.0, 0.0);

        let (s, dist) = nearest(origin, &slots, &EntityFilter::default()).unwrap();
        assert_eq!(s.slot_id.0, "S3");
        assert_eq!(dist, Distance::meters(1.0));

        let (s, _) = nearest(origin, &slots, &EntityFilter::on_level(1)).unwrap();
        assert_eq!(s.slot_id.0, "S2");

        // S4 and S5 are equally far, but S5 isn't available
        let (s, dist) = nearest(origin, &slots, &EntityFilter::available_on_level(1)).unwrap();
        assert_eq!(s.slot_id.0, "S4");
        assert_eq!(dist, Distance::meters(3.0));

        assert!(nearest(origin, &slots, &EntityFilter::available_on_level(3)).is_none());
        assert!(nearest(origin, Vec::<&Slot>::new(), &EntityFilter::default()).is_none());
    }

    #[test]
    fn ties_go_to_the_first() {
        let slots = vec![
            slot("A", 1, 0.0, 2.0, SlotStatus::Available),
            slot("B", 1, 2.0, 0.0, SlotStatus::Available),
        ];
        let (s, _) = nearest(Pt2D::new(0.0, 0.0), &slots, &EntityFilter::default()).unwrap();
        assert_eq!(s.slot_id.0, "A");
    }

    #[test]
    fn several_nearest() {
        let slots = slots();
        let ids: Vec<&str> = nearest_n(Pt2D::new(0.0, 0.0), &slots, &EntityFilter::on_level(1), 3)
            .into_iter()
            .map(|(s, _)| s.slot_id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["S2", "S4", "S5"]);
    }

    #[test]
    fn status_filter_skips_other_entities() {
        let exits = vec![Exit {
            exit_id: crate::ExitID("X1".to_string()),
            level: 1,
            x: 0.0,
            y: 0.0,
        }];
        let filter = EntityFilter {
            level: None,
            status: Some(SlotStatus::Available),
        };
        assert!(nearest(Pt2D::new(0.0, 0.0), &exits, &filter).is_none());
        assert!(nearest(Pt2D::new(0.0, 0.0), &exits, &EntityFilter::default()).is_some());
    }
}
