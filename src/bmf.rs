//! The best-match-first (BMF) engine family: the classic greedy engine,
//! its shuffled multi-restart variant (sBMF) and the four-weight variant.

use crate::assignment::best_match_first;
use crate::cost::EditCost;
use crate::dissimilarity::{EdgeDissimilarity, VertexDissimilarity};
use crate::edge_ops::induce_edge_operations;
use crate::graph_traits::LabeledGraph;
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration of the classic BMF engine: separate substitution,
/// insertion and deletion weights and constant insertion/deletion costs
/// for vertices and edges.
#[derive(Debug, Clone)]
pub struct BmfConfig {
    pub vertex_sub_weight: f32,
    pub vertex_ins_weight: f32,
    pub vertex_del_weight: f32,
    pub vertex_ins_cost: f32,
    pub vertex_del_cost: f32,
    pub edge_sub_weight: f32,
    pub edge_ins_weight: f32,
    pub edge_del_weight: f32,
    pub edge_ins_cost: f32,
    pub edge_del_cost: f32,
    /// Divides the combined total when set.
    pub normalization: Option<f32>,
}

impl Default for BmfConfig {
    fn default() -> BmfConfig {
        BmfConfig {
            vertex_sub_weight: 1.0,
            vertex_ins_weight: 1.0,
            vertex_del_weight: 1.0,
            vertex_ins_cost: 1.0,
            vertex_del_cost: 1.0,
            edge_sub_weight: 1.0,
            edge_ins_weight: 1.0,
            edge_del_weight: 1.0,
            edge_ins_cost: 1.0,
            edge_del_cost: 1.0,
            normalization: None,
        }
    }
}

/// Greedy dissimilarity visiting `a`'s vertices in native order.
pub fn bmf<G, VA, EA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    edge_agent: &EA,
    config: &BmfConfig,
) -> EditCost
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    let order: Vec<usize> = (0..a.num_vertices()).collect();
    bmf_with_order(a, b, vertex_agent, edge_agent, config, &order)
}

fn bmf_with_order<G, VA, EA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    edge_agent: &EA,
    config: &BmfConfig,
    order: &[usize],
) -> EditCost
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    let (assignment, matched_sum) = best_match_first(a, b, vertex_agent, order);
    let n1 = a.num_vertices();
    let n2 = b.num_vertices();

    // The larger graph decides whether the surplus vertices are deleted
    // from `a` or inserted from `b`.
    let mut vertex_cost = config.vertex_sub_weight * matched_sum;
    if n1 > n2 {
        vertex_cost += config.vertex_del_weight * (n1 - n2) as f32 * config.vertex_del_cost;
    } else {
        vertex_cost += config.vertex_ins_weight * (n2 - n1) as f32 * config.vertex_ins_cost;
    }

    let ops = induce_edge_operations(a, b, &assignment, edge_agent);
    let edge_cost = config.edge_sub_weight * ops.substituted_sum
        + config.edge_ins_weight * ops.insertions as f32 * config.edge_ins_cost
        + config.edge_del_weight * ops.deletions as f32 * config.edge_del_cost;

    EditCost::combined(vertex_cost, edge_cost, config.normalization)
}

/// Configuration of the shuffled multi-restart engine.
#[derive(Debug, Clone)]
pub struct SbmfConfig {
    pub bmf: BmfConfig,
    /// Number of shuffled repetitions.
    pub n_shuffles: usize,
    /// Fixed seed for reproducible runs; derived from process time when
    /// unset.
    pub seed: Option<u64>,
}

impl Default for SbmfConfig {
    fn default() -> SbmfConfig {
        SbmfConfig {
            bmf: BmfConfig::default(),
            n_shuffles: 5,
            seed: None,
        }
    }
}

/// Repeats the greedy pipeline under uniformly shuffled visiting orders of
/// `a`'s vertices and keeps the repetition with the minimum total.
pub fn sbmf<G, VA, EA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    edge_agent: &EA,
    config: &SbmfConfig,
) -> EditCost
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    let n1 = a.num_vertices();
    if n1 < 2 && b.num_vertices() < 2 {
        // Restart-invariant: there is only one visiting order.
        return bmf(a, b, vertex_agent, edge_agent, &config.bmf);
    }

    let seed = config.seed.unwrap_or_else(seed_from_time);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n1).collect();

    let mut best = None;
    for repetition in 0..config.n_shuffles.max(1) {
        order.shuffle(&mut rng);
        let cost = bmf_with_order(a, b, vertex_agent, edge_agent, &config.bmf, &order);
        debug!("sbmf repetition {}: total {}", repetition, cost.total);
        best = match best {
            Some(EditCost { total, .. }) if total <= cost.total => best,
            _ => Some(cost),
        };
    }
    best.unwrap_or_else(EditCost::zero)
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Configuration of the four-weight BMF variant: one combined
/// insertion/deletion weight and cost per kind, and an optional derivation
/// of the edge substitution weight from the other three weights.
#[derive(Debug, Clone)]
pub struct FourWeightBmfConfig {
    pub vertex_sub_weight: f32,
    pub vertex_insdel_weight: f32,
    pub edge_insdel_weight: f32,
    /// Used as-is unless `bounded` derives it from the other three.
    pub edge_sub_weight: f32,
    pub vertex_insdel_cost: f32,
    pub edge_insdel_cost: f32,
    /// Derive the edge substitution weight and assert all four weights
    /// into `[0, 1]`.
    pub bounded: bool,
    pub normalization: Option<f32>,
}

impl Default for FourWeightBmfConfig {
    fn default() -> FourWeightBmfConfig {
        FourWeightBmfConfig {
            vertex_sub_weight: 0.25,
            vertex_insdel_weight: 0.25,
            edge_insdel_weight: 0.25,
            edge_sub_weight: 0.25,
            vertex_insdel_cost: 1.0,
            edge_insdel_cost: 1.0,
            bounded: false,
            normalization: None,
        }
    }
}

impl FourWeightBmfConfig {
    /// The edge substitution weight actually applied by
    /// [`bmf_four_weight`].
    ///
    /// With `bounded` set, the weight is the residual left by the other
    /// three weights, affinely rescaled from `[1/4, 1]` to `[0, 1/4]`.
    /// The rescaling is kept verbatim for compatibility with the
    /// historical parameterization; it is not a simplex projection.
    pub fn effective_edge_sub_weight(&self) -> f32 {
        if self.bounded {
            let residual =
                1.0 - (self.edge_insdel_weight + self.vertex_insdel_weight + self.vertex_sub_weight);
            (residual - 0.25) / 0.75 * 0.25
        } else {
            self.edge_sub_weight
        }
    }
}

/// Greedy dissimilarity with the four-weight cost combination.
pub fn bmf_four_weight<G, VA, EA>(
    a: &G,
    b: &G,
    vertex_agent: &VA,
    edge_agent: &EA,
    config: &FourWeightBmfConfig,
) -> EditCost
where
    G: LabeledGraph,
    VA: VertexDissimilarity<G::VERTEX>,
    EA: EdgeDissimilarity<G::EDGE>,
{
    let edge_sub_weight = config.effective_edge_sub_weight();
    if config.bounded {
        let weights = [
            ("vertex substitution", config.vertex_sub_weight),
            ("vertex insertion/deletion", config.vertex_insdel_weight),
            ("edge insertion/deletion", config.edge_insdel_weight),
            ("edge substitution", edge_sub_weight),
        ];
        for (name, w) in weights {
            assert!(
                (0.0..=1.0).contains(&w),
                "{} weight out of [0, 1]: {}",
                name,
                w
            );
        }
    }

    let order: Vec<usize> = (0..a.num_vertices()).collect();
    let (assignment, matched_sum) = best_match_first(a, b, vertex_agent, order.as_slice());

    let n1 = a.num_vertices();
    let n2 = b.num_vertices();
    let surplus = n1.abs_diff(n2) as f32;
    let vertex_cost = config.vertex_sub_weight * matched_sum
        + config.vertex_insdel_weight * surplus * config.vertex_insdel_cost;

    let ops = induce_edge_operations(a, b, &assignment, edge_agent);
    let edge_cost = edge_sub_weight * ops.substituted_sum
        + config.edge_insdel_weight
            * (ops.insertions + ops.deletions) as f32
            * config.edge_insdel_cost;

    EditCost::combined(vertex_cost, edge_cost, config.normalization)
}
