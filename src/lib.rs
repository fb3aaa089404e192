//! Graph edit distance dissimilarity between labeled graphs, approximated
//! by vertex matching.
//!
//! A dissimilarity is computed in three stages: obtain an injective
//! vertex [`Assignment`] between the two graphs, induce the edge edit
//! operations that assignment implies, and combine the vertex and edge
//! components into one scalar. The crate ships three engine families over
//! that pipeline:
//!
//! - [`bmf`] / [`sbmf`] / [`bmf_four_weight`]: a greedy best-match-first
//!   matching, optionally restarted under shuffled vertex orders, with a
//!   weighted-sum cost combination.
//! - [`hged`]: the optimal matching from a Hungarian/Munkres solver over
//!   the full vertex dissimilarity matrix, with a normalized ratio blend.
//!
//! Graphs are anything implementing [`LabeledGraph`]; vertex and edge
//! attributes are compared through [`VertexDissimilarity`] and
//! [`EdgeDissimilarity`] agents (plain closures work).

pub mod graph;
mod assignment;
mod bmf;
mod cost;
mod dissimilarity;
mod edge_ops;
mod error;
mod graph_traits;
mod hged;
mod hungarian;
mod matrix;

pub use {
    assignment::*, bmf::*, cost::*, dissimilarity::*, edge_ops::*, error::*, graph_traits::*,
    hged::*, hungarian::*, matrix::*,
};

impl AttributeWeight for f32 {
    fn attribute_weight(&self) -> f32 {
        *self
    }
}

/// Greedy best-match-first dissimilarity under the default configuration.
pub fn bmf_dissimilarity<G, VA, EA>(a: &G, b: &G, vertex_agent: &VA, edge_agent: &EA) -> EditCost
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    bmf(a, b, vertex_agent, edge_agent, &BmfConfig::default())
}

/// Optimal-assignment dissimilarity under the default configuration.
pub fn hged_dissimilarity<G, VA, EA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    edge_agent: &EA,
) -> Result<EditCost, GedError>
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    hged(a, b, vertex_agent, edge_agent, &HgedConfig::default())
}
