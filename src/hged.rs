//! Optimal-assignment dissimilarity (HGED): the vertex matching is the
//! global minimum-cost assignment over the full vertex dissimilarity
//! matrix, combined by a normalized ratio blend.

use crate::cost::EditCost;
use crate::dissimilarity::{EdgeDissimilarity, VertexDissimilarity};
use crate::edge_ops::induce_edge_operations;
use crate::error::GedError;
use crate::graph_traits::LabeledGraph;
use crate::hungarian::{assignment_pairs, solve_assignment};
use crate::matrix::Matrix;
use closed01::Closed01;
use log::debug;

/// Blend parameters of the HGED combination formula, each in `[0, 1]`.
///
/// `alpha` trades the vertex count mismatch against everything else,
/// `beta` the matched vertex dissimilarities against the edge terms and
/// `gamma` the measured edge substitutions against the counted edge
/// insertions and deletions.
#[derive(Debug, Clone)]
pub struct HgedConfig {
    pub alpha: Closed01<f32>,
    pub beta: Closed01<f32>,
    pub gamma: Closed01<f32>,
}

impl Default for HgedConfig {
    fn default() -> HgedConfig {
        HgedConfig {
            alpha: Closed01::new(0.5),
            beta: Closed01::new(0.5),
            gamma: Closed01::new(0.5),
        }
    }
}

/// Optimal-assignment dissimilarity.
///
/// Both graphs must have at least one vertex; the matched-dissimilarity
/// average divides by `min(|V1|, |V2|)`.
pub fn hged<G, VA, EA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    edge_agent: &EA,
    config: &HgedConfig,
) -> Result<EditCost, GedError>
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    let n1 = a.num_vertices();
    let n2 = b.num_vertices();
    if n1 == 0 || n2 == 0 {
        return Err(GedError::EmptyGraph {
            left: n1,
            right: n2,
        });
    }

    // Full dissimilarity matrix, sentinel-padded square so the solver can
    // relegate surplus vertices to padding.
    let order = n1.max(n2);
    let mut costs = Matrix::new(order, order);
    for r in 0..order {
        for c in 0..order {
            *costs.at_mut(r, c) = if r < n1 && c < n2 {
                vertex_agent.vertex_diss(a.vertex_value(r), b.vertex_value(c))
            } else {
                f32::INFINITY
            };
        }
    }

    let mut work = costs.clone();
    solve_assignment(&mut work);
    let assignment = assignment_pairs(&work, n1, n2);
    let matched_sum: f32 = assignment
        .pairs()
        .iter()
        .map(|&(r, c)| costs.at(r, c))
        .sum();

    let ops = induce_edge_operations(a, b, &assignment, edge_agent);

    let min_order = n1.min(n2) as f32;
    let cnd = ((n1 + n2) as f32 - 2.0 * min_order) / (n1 + n2) as f32;
    let cn = matched_sum / min_order;
    let ce = if ops.substitutions > 0 {
        ops.substituted_sum / ops.substitutions as f32
    } else {
        0.0
    };
    let total_edges = a.num_edges() + b.num_edges();
    let ced = if total_edges > 0 {
        (ops.insertions + ops.deletions) as f32 / total_edges as f32
    } else {
        0.0
    };
    debug!(
        "hged components: cnd={} cn={} ce={} ced={}",
        cnd, cn, ce, ced
    );

    let alpha = config.alpha.get();
    let beta = config.beta.get();
    let gamma = config.gamma.get();

    let vertex_cost = alpha * cnd + (1.0 - alpha) * (1.0 - beta) * cn;
    let edge_cost = (1.0 - alpha) * beta * ((1.0 - gamma) * ce + gamma * ced);
    Ok(EditCost {
        total: vertex_cost + edge_cost,
        vertex_cost,
        edge_cost,
    })
}
