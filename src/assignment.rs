//! Vertex assignments and the greedy best-match-first scan.

use crate::dissimilarity::VertexDissimilarity;
use crate::graph_traits::LabeledGraph;

/// An injective partial mapping from the first graph's vertices to the
/// second graph's, with cardinality `min(|V1|, |V2|)`. Immutable once
/// built.
#[derive(Debug, Clone)]
pub struct Assignment {
    pairs: Vec<(usize, usize)>,
}

impl Assignment {
    pub fn new(pairs: Vec<(usize, usize)>) -> Assignment {
        debug_assert!(is_injective(&pairs));
        Assignment { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The matched `(g1_vertex, g2_vertex)` pairs.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

fn is_injective(pairs: &[(usize, usize)]) -> bool {
    for (i, &(a1, b1)) in pairs.iter().enumerate() {
        for &(a2, b2) in &pairs[i + 1..] {
            if a1 == a2 || b1 == b2 {
                return false;
            }
        }
    }
    true
}

/// Greedy first-fit matching: visits the first graph's vertices in `order`
/// and pairs each with the still-unmatched vertex of the second graph at
/// strictly smallest dissimilarity; on ties the first one encountered
/// wins. Returns the assignment together with the sum of the matched
/// dissimilarities.
pub fn best_match_first<G, VA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    order: &[usize],
) -> (Assignment, f32)
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
{
    let nb = b.num_vertices();
    let mut taken = vec![false; nb];
    let mut pairs = Vec::with_capacity(order.len().min(nb));
    let mut matched_sum = 0.0;

    for &i in order {
        let mut best: Option<(usize, f32)> = None;
        for j in 0..nb {
            if taken[j] {
                continue;
            }
            let diss = vertex_agent.vertex_diss(a.vertex_value(i), b.vertex_value(j));
            match best {
                Some((_, best_diss)) if diss < best_diss => best = Some((j, diss)),
                None => best = Some((j, diss)),
                _ => {}
            }
        }
        if let Some((j, diss)) = best {
            taken[j] = true;
            pairs.push((i, j));
            matched_sum += diss;
        }
    }

    (Assignment::new(pairs), matched_sum)
}
