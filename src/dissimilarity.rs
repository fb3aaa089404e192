/// Determines how distant two vertex attributes are. The returned value is
/// expected to be non-negative (not enforced); 0 means the attributes are
/// interchangeable.
pub trait VertexDissimilarity<V> {
    fn vertex_diss(&self, a: &V, b: &V) -> f32;
}

/// Determines how distant two edge attributes are. Same contract as
/// [`VertexDissimilarity`].
pub trait EdgeDissimilarity<E> {
    fn edge_diss(&self, a: &E, b: &E) -> f32;
}

impl<V, F> VertexDissimilarity<V> for F
where
    F: Fn(&V, &V) -> f32,
{
    fn vertex_diss(&self, a: &V, b: &V) -> f32 {
        self(a, b)
    }
}

impl<E, F> EdgeDissimilarity<E> for F
where
    F: Fn(&E, &E) -> f32,
{
    fn edge_diss(&self, a: &E, b: &E) -> f32 {
        self(a, b)
    }
}

/// Treats every pair of attributes as interchangeable.
#[derive(Debug)]
pub struct ZeroDissimilarity;

impl<V> VertexDissimilarity<V> for ZeroDissimilarity {
    fn vertex_diss(&self, _a: &V, _b: &V) -> f32 {
        0.0
    }
}

impl<E> EdgeDissimilarity<E> for ZeroDissimilarity {
    fn edge_diss(&self, _a: &E, _b: &E) -> f32 {
        0.0
    }
}

/// Projects an attribute to a scalar so [`AbsDiff`] can compare it.
pub trait AttributeWeight {
    fn attribute_weight(&self) -> f32;
}

/// Absolute difference of the scalar projections of two attributes.
#[derive(Debug)]
pub struct AbsDiff;

impl<V: AttributeWeight> VertexDissimilarity<V> for AbsDiff {
    fn vertex_diss(&self, a: &V, b: &V) -> f32 {
        (a.attribute_weight() - b.attribute_weight()).abs()
    }
}

impl<E: AttributeWeight> EdgeDissimilarity<E> for AbsDiff {
    fn edge_diss(&self, a: &E, b: &E) -> f32 {
        (a.attribute_weight() - b.attribute_weight()).abs()
    }
}
