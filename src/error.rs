use thiserror::Error;

/// Contract violations surfaced to the caller. Programmer errors (matrix
/// bounds, dimension mismatches) panic instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GedError {
    /// The optimal-assignment engine normalizes by `min(|V1|, |V2|)`,
    /// which is undefined when a graph has no vertices.
    #[error("both graphs must have at least one vertex (|V1| = {left}, |V2| = {right})")]
    EmptyGraph { left: usize, right: usize },
}
