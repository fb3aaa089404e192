//! Induction of edge edit operations from a vertex assignment.

use crate::assignment::Assignment;
use crate::dissimilarity::EdgeDissimilarity;
use crate::graph_traits::LabeledGraph;

/// Tally of the edge edit operations induced by one vertex assignment.
/// Substitutions are measured by the edge agent; insertions and deletions
/// are only counted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeOperations {
    pub substituted_sum: f32,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Classifies every edge of both graphs against the assignment: an edge
/// spanning a matched vertex pair in both graphs is a substitution; every
/// other edge of the first graph is a deletion and every other edge of the
/// second graph an insertion (edges at unmatched vertices always fall
/// there).
pub fn induce_edge_operations<G, EA>(
    a: &G,
    b: &G,
    assignment: &Assignment,
    edge_agent: &EA,
) -> EdgeOperations
where
    G: LabeledGraph,
    EA: EdgeDissimilarity<G::EDGE>,
{
    let mut ops = EdgeOperations::default();
    let pairs = assignment.pairs();

    for (n, &(i1, j1)) in pairs.iter().enumerate() {
        for &(i2, j2) in &pairs[n + 1..] {
            if let (Some(edge_a), Some(edge_b)) = (a.edge_between(i1, i2), b.edge_between(j1, j2))
            {
                ops.substituted_sum += edge_agent.edge_diss(edge_a, edge_b);
                ops.substitutions += 1;
            }
        }
    }

    // Distinct matched pairs induce distinct edges on each side, so the
    // substitution count never exceeds either edge count.
    ops.deletions = a.num_edges() - ops.substitutions;
    ops.insertions = b.num_edges() - ops.substitutions;
    ops
}

#[cfg(test)]
mod tests {
    use super::induce_edge_operations;
    use crate::assignment::Assignment;
    use crate::dissimilarity::AbsDiff;
    use crate::graph::OwnedGraph;

    #[test]
    fn classifies_substitution_insertion_deletion() {
        // a: 0-1, 1-2    b: 0-1
        let mut a: OwnedGraph<f32, f32> = OwnedGraph::new();
        for v in [1.0, 2.0, 3.0] {
            a.add_vertex(v);
        }
        a.add_edge(0, 1, 5.0);
        a.add_edge(1, 2, 7.0);

        let mut b: OwnedGraph<f32, f32> = OwnedGraph::new();
        for v in [1.0, 2.0] {
            b.add_vertex(v);
        }
        b.add_edge(0, 1, 6.0);

        let assignment = Assignment::new(vec![(0, 0), (1, 1)]);
        let ops = induce_edge_operations(&a, &b, &assignment, &AbsDiff);

        assert_eq!(1, ops.substitutions);
        assert_eq!(1.0, ops.substituted_sum);
        assert_eq!(1, ops.deletions);
        assert_eq!(0, ops.insertions);
    }

    #[test]
    fn unmatched_vertices_orphan_their_edges() {
        let mut a: OwnedGraph<f32, f32> = OwnedGraph::new();
        a.add_vertex(1.0);
        a.add_vertex(2.0);
        a.add_edge(0, 1, 1.0);

        let b: OwnedGraph<f32, f32> = OwnedGraph::new();

        let ops = induce_edge_operations(&a, &b, &Assignment::new(Vec::new()), &AbsDiff);
        assert_eq!(0, ops.substitutions);
        assert_eq!(1, ops.deletions);
        assert_eq!(0, ops.insertions);
    }
}
