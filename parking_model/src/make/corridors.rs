use parking_util::Timer;

use crate::{CorridorDirection, Graph, Level, Node};

/// Connect consecutive corridor points, following the corridor's direction. Steps that aren't a
/// single grid cell apart are skipped, never joined by a long edge.
pub fn add_corridor_edges(graph: &mut Graph, level: &Level, timer: &mut Timer) {
    for (idx, corridor) in level.corridors.iter().enumerate() {
        for pt in &corridor.points {
            graph.add_node(Node::from_pt(level.level, *pt));
        }

        for (pt1, pt2) in corridor.steps() {
            if !pt1.is_grid_adjacent(pt2) {
                timer.warn(format!(
                    "Corridor #{} on level {} jumps from {} to {}; skipping that step",
                    idx, level.level, pt1, pt2
                ));
                continue;
            }

            let n1 = Node::from_pt(level.level, pt1);
            let n2 = Node::from_pt(level.level, pt2);
            let weight = pt1.dist_to(pt2);
            match corridor.direction {
                CorridorDirection::Forward => {
                    graph.add_edge(n1, n2, weight);
                }
                CorridorDirection::Backward => {
                    graph.add_edge(n2, n1, weight);
                }
                CorridorDirection::Both => {
                    graph.add_edge(n1, n2, weight);
                    graph.add_edge(n2, n1, weight);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Corridor;
    use geom::{Distance, Pt2D};

    fn pts(raw: &[(f64, f64)]) -> Vec<Pt2D> {
        raw.iter().map(|(x, y)| Pt2D::new(*x, *y)).collect()
    }

    #[test]
    fn directions_and_gaps() {
        let mut level = Level::new("garage", 1, (5, 5));
        level.corridors.push(Corridor::new(
            pts(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (4.0, 0.0)]),
            CorridorDirection::Forward,
        ));
        level.corridors.push(Corridor::new(
            pts(&[(0.0, 2.0), (0.0, 3.0)]),
            CorridorDirection::Backward,
        ));
        level.corridors.push(Corridor::new(
            pts(&[(2.0, 2.0), (3.0, 3.0)]),
            CorridorDirection::Both,
        ));

        let mut graph = Graph::new();
        let mut timer = Timer::throwaway();
        add_corridor_edges(&mut graph, &level, &mut timer);

        let one = Distance::meters(1.0);
        assert_eq!(
            graph.all_edges(),
            vec![
                (Node::new(1, 0.0, 0.0), Node::new(1, 1.0, 0.0), one),
                (Node::new(1, 0.0, 3.0), Node::new(1, 0.0, 2.0), one),
                (Node::new(1, 3.0, 0.0), Node::new(1, 4.0, 0.0), one),
            ]
        );
        // Points on broken steps still exist, they're just not joined
        assert!(graph.contains(Node::new(1, 3.0, 3.0)));
        assert_eq!(timer.warnings().len(), 2);
    }
}
