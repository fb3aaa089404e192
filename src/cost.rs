/// Decomposed result of one dissimilarity computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditCost {
    /// The dissimilarity value, after any normalization.
    pub total: f32,
    pub vertex_cost: f32,
    pub edge_cost: f32,
}

impl EditCost {
    pub fn zero() -> EditCost {
        EditCost {
            total: 0.0,
            vertex_cost: 0.0,
            edge_cost: 0.0,
        }
    }

    /// Combines the two components; only the total is divided by the
    /// normalization constant when one is configured.
    pub(crate) fn combined(vertex_cost: f32, edge_cost: f32, normalization: Option<f32>) -> EditCost {
        let mut total = vertex_cost + edge_cost;
        if let Some(norm) = normalization {
            assert!(norm > 0.0, "normalization constant must be positive, got {}", norm);
            total /= norm;
        }
        EditCost {
            total,
            vertex_cost,
            edge_cost,
        }
    }
}
