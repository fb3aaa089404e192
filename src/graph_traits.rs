//! Traits that represent an abstract labeled graph upon which the engines
//! operate.

/// Abstract representation of an undirected labeled graph.
///
/// Vertex identifiers are the indices `0..num_vertices()`; the order of
/// those indices is the graph's native vertex order. Edge existence lookup
/// is expected to be O(1).
pub trait LabeledGraph {
    type VERTEX;
    type EDGE;

    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    /// The attribute attached to the given vertex.
    fn vertex_value(&self, vertex_idx: usize) -> &Self::VERTEX;

    /// The attribute of the edge between `a` and `b`, if such an edge
    /// exists.
    fn edge_between(&self, a: usize, b: usize) -> Option<&Self::EDGE>;

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edge_between(a, b).is_some()
    }
}
