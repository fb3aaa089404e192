use crate::graph_traits::LabeledGraph;
use petgraph::graph::Graph as PetGraph;
use petgraph::visit::EdgeRef;
use petgraph::Undirected;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An owned undirected labeled graph with attribute-carrying vertices and
/// edges and O(1) edge lookup.
#[derive(Debug, Clone)]
pub struct OwnedGraph<V, E> {
    vertices: Vec<V>,
    edges: HashMap<(usize, usize), E>,
}

impl<V, E> OwnedGraph<V, E> {
    pub fn new() -> OwnedGraph<V, E> {
        OwnedGraph {
            vertices: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, value: V) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(value);
        idx
    }

    /// Adds (or replaces) the undirected edge between two existing
    /// vertices.
    pub fn add_edge(&mut self, a: usize, b: usize, value: E) {
        assert!(
            a < self.vertices.len() && b < self.vertices.len(),
            "edge ({}, {}) references a vertex not in the graph",
            a,
            b
        );
        self.edges.insert(edge_key(a, b), value);
    }
}

impl<V, E> Default for OwnedGraph<V, E> {
    fn default() -> OwnedGraph<V, E> {
        OwnedGraph::new()
    }
}

impl<V: Clone, E: Clone> OwnedGraph<V, E> {
    pub fn from_petgraph(pg: &PetGraph<V, E, Undirected>) -> OwnedGraph<V, E> {
        let mut graph = OwnedGraph::new();
        for idx in pg.node_indices() {
            graph.add_vertex(pg[idx].clone());
        }
        for edge in pg.edge_references() {
            graph.add_edge(
                edge.source().index(),
                edge.target().index(),
                edge.weight().clone(),
            );
        }
        graph
    }
}

impl<V, E> LabeledGraph for OwnedGraph<V, E> {
    type VERTEX = V;
    type EDGE = E;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn vertex_value(&self, vertex_idx: usize) -> &V {
        &self.vertices[vertex_idx]
    }

    #[inline]
    fn edge_between(&self, a: usize, b: usize) -> Option<&E> {
        self.edges.get(&edge_key(a, b))
    }
}

/// Builds an [`OwnedGraph`] from caller-chosen vertex keys.
pub struct GraphBuilder<K: Ord, V, E> {
    // maps the caller's key to the vertex index in the graph.
    vertex_map: BTreeMap<K, usize>,
    graph: OwnedGraph<V, E>,
}

impl<K: Ord + Copy, V: Default, E> GraphBuilder<K, V, E> {
    pub fn new() -> GraphBuilder<K, V, E> {
        GraphBuilder {
            vertex_map: BTreeMap::new(),
            graph: OwnedGraph::new(),
        }
    }

    pub fn graph(self) -> OwnedGraph<V, E> {
        self.graph
    }

    /// Registers a vertex under a fresh key and returns its index. Panics
    /// on a duplicate key.
    pub fn add_vertex(&mut self, key: K, value: V) -> usize {
        match self.vertex_map.entry(key) {
            Entry::Vacant(e) => {
                let idx = self.graph.add_vertex(value);
                e.insert(idx);
                idx
            }
            Entry::Occupied(_) => {
                panic!("duplicate vertex key");
            }
        }
    }

    fn add_or_lookup_vertex(&mut self, key: K) -> usize {
        match self.vertex_map.entry(key) {
            Entry::Vacant(e) => {
                let idx = self.graph.add_vertex(V::default());
                e.insert(idx);
                idx
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Adds an undirected edge, creating default-valued endpoints for keys
    /// not seen before.
    pub fn add_edge(&mut self, a: K, b: K, value: E) {
        let source = self.add_or_lookup_vertex(a);
        let target = self.add_or_lookup_vertex(b);
        self.graph.add_edge(source, target, value);
    }
}

impl<K: Ord + Copy, V: Default, E> Default for GraphBuilder<K, V, E> {
    fn default() -> GraphBuilder<K, V, E> {
        GraphBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphBuilder, OwnedGraph};
    use crate::graph_traits::LabeledGraph;
    use petgraph::graph::Graph as PetGraph;

    #[test]
    fn edge_lookup_is_symmetric() {
        let mut g: OwnedGraph<(), f32> = OwnedGraph::new();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, 2.5);

        assert_eq!(Some(&2.5), g.edge_between(a, b));
        assert_eq!(Some(&2.5), g.edge_between(b, a));
        assert!(!g.has_edge(a, a));
        assert_eq!(1, g.num_edges());
    }

    #[test]
    fn builder_creates_endpoints_on_demand() {
        let mut b: GraphBuilder<usize, (), ()> = GraphBuilder::new();
        b.add_vertex(10, ());
        b.add_edge(10, 20, ());
        let g = b.graph();

        assert_eq!(2, g.num_vertices());
        assert!(g.has_edge(0, 1));
    }

    #[test]
    fn from_petgraph_copies_attributes() {
        let mut pg: PetGraph<f32, f32, _> = PetGraph::new_undirected();
        let a = pg.add_node(1.0);
        let b = pg.add_node(2.0);
        pg.add_edge(a, b, 0.5);

        let g = OwnedGraph::from_petgraph(&pg);
        assert_eq!(2, g.num_vertices());
        assert_eq!(&1.0, g.vertex_value(0));
        assert_eq!(Some(&0.5), g.edge_between(0, 1));
    }
}
