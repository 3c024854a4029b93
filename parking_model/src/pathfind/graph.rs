use std::collections::BTreeMap;

use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

use geom::Distance;

use crate::Node;

/// The static routing graph for one map snapshot. Once built, nothing about a query mutates it,
/// so it can be shared between planners. Edges out of a node keep the order they were added in.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    graph: DiGraphMap<Node, Distance>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            graph: DiGraphMap::new(),
        }
    }

    /// Makes sure a node exists, even with no edges.
    pub fn add_node(&mut self, node: Node) {
        self.graph.add_node(node);
    }

    /// Adding the same edge twice just updates the weight.
    pub fn add_edge(&mut self, from: Node, to: Node, weight: Distance) {
        if from == to {
            return;
        }
        self.graph.add_edge(from, to, weight);
    }

    pub fn contains(&self, node: Node) -> bool {
        self.graph.contains_node(node)
    }

    pub fn neighbors(&self, node: Node) -> Vec<(Node, Distance)> {
        if !self.contains(node) {
            return Vec::new();
        }
        self.graph
            .edges(node)
            .map(|(_, to, weight)| (to, *weight))
            .collect()
    }

    /// Every node with an edge pointing into `node`, and the weight of that edge.
    pub fn incoming(&self, node: Node) -> Vec<(Node, Distance)> {
        if !self.contains(node) {
            return Vec::new();
        }
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .filter_map(|from| {
                self.graph
                    .edge_weight(from, node)
                    .map(|weight| (from, *weight))
            })
            .collect()
    }

    pub fn out_degree(&self, node: Node) -> usize {
        if !self.contains(node) {
            return 0;
        }
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .count()
    }

    pub fn edge_weight(&self, from: Node, to: Node) -> Option<Distance> {
        self.graph.edge_weight(from, to).cloned()
    }

    pub fn all_nodes(&self) -> Vec<Node> {
        self.graph.nodes().collect()
    }

    /// Sorted, so two graphs built from the same input compare equal.
    pub fn all_edges(&self) -> Vec<(Node, Node, Distance)> {
        let mut edges: Vec<(Node, Node, Distance)> = self
            .graph
            .all_edges()
            .map(|(from, to, weight)| (from, to, *weight))
            .collect();
        edges.sort();
        edges
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// View the graph with no extra edges.
    pub fn routing(&self) -> RoutingGraph {
        RoutingGraph {
            base: self,
            overlay: None,
        }
    }

    /// View the graph with some extra edges merged in.
    pub fn with_overlay<'a>(&'a self, overlay: &'a VirtualEdges) -> RoutingGraph<'a> {
        RoutingGraph {
            base: self,
            overlay: Some(overlay),
        }
    }
}

/// Extra nodes and edges layered on top of a `Graph` for the duration of some queries: query
/// points spliced in near corridors, and the reverse edges that let a route start from a slot.
/// The base graph stays untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VirtualEdges {
    outgoing: BTreeMap<Node, Vec<(Node, Distance)>>,
}

impl VirtualEdges {
    pub fn new() -> VirtualEdges {
        VirtualEdges::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.outgoing.entry(node).or_insert_with(Vec::new);
    }

    pub fn add_edge(&mut self, from: Node, to: Node, weight: Distance) {
        if from == to {
            return;
        }
        self.add_node(to);
        let edges = self.outgoing.entry(from).or_insert_with(Vec::new);
        if let Some(existing) = edges.iter_mut().find(|(n, _)| *n == to) {
            existing.1 = weight;
        } else {
            edges.push((to, weight));
        }
    }

    pub fn contains(&self, node: Node) -> bool {
        self.outgoing.contains_key(&node)
    }

    pub fn neighbors(&self, node: Node) -> &[(Node, Distance)] {
        self.outgoing
            .get(&node)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edges_into(&self, node: Node) -> Vec<(Node, Distance)> {
        let mut result = Vec::new();
        for (from, edges) in &self.outgoing {
            for (to, weight) in edges {
                if *to == node {
                    result.push((*from, *weight));
                }
            }
        }
        result
    }

    pub fn num_edges(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }
}

/// What the search actually walks: a base graph, plus optionally some virtual edges. Lookups
/// merge the two, with the base graph's edges first.
#[derive(Clone, Copy)]
pub struct RoutingGraph<'a> {
    base: &'a Graph,
    overlay: Option<&'a VirtualEdges>,
}

impl<'a> RoutingGraph<'a> {
    pub fn contains(&self, node: Node) -> bool {
        self.base.contains(node) || self.overlay.map(|o| o.contains(node)).unwrap_or(false)
    }

    pub fn neighbors(&self, node: Node) -> Vec<(Node, Distance)> {
        let mut result = self.base.neighbors(node);
        if let Some(overlay) = self.overlay {
            for (to, weight) in overlay.neighbors(node) {
                if !result.iter().any(|(n, _)| n == to) {
                    result.push((*to, *weight));
                }
            }
        }
        result
    }

    pub fn out_degree(&self, node: Node) -> usize {
        match self.overlay {
            Some(overlay) if overlay.contains(node) => self.neighbors(node).len(),
            _ => self.base.out_degree(node),
        }
    }

    pub fn incoming(&self, node: Node) -> Vec<(Node, Distance)> {
        let mut result = self.base.incoming(node);
        if let Some(overlay) = self.overlay {
            for (from, weight) in overlay.edges_into(node) {
                if !result.iter().any(|(n, _)| *n == from) {
                    result.push((from, weight));
                }
            }
        }
        result
    }
}
