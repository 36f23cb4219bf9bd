use crate::core::errors::ApiError;

/// Relevance score between a query embedding and a candidate embedding.
///
/// This is the raw elementwise product sum, not a normalized cosine; corpus
/// and query vectors come from the same embedding model, so magnitudes are
/// comparable. Accumulates in f64 to keep long sums stable.
pub fn dot_product(query: &[f32], candidate: &[f32]) -> Result<f64, ApiError> {
    if query.len() != candidate.len() {
        return Err(ApiError::DimensionMismatch {
            expected: query.len(),
            actual: candidate.len(),
        });
    }

    Ok(query
        .iter()
        .zip(candidate.iter())
        .map(|(a, b)| (*a as f64) * (*b as f64))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn dot_product_of_known_vectors() {
        let score = dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).expect("score");
        assert!(approx_eq(score, 32.0));
    }

    #[test]
    fn dot_product_is_commutative() {
        let a = [0.3, -1.2, 0.7, 2.0];
        let b = [1.1, 0.4, -0.9, 0.2];
        let left = dot_product(&a, &b).expect("score");
        let right = dot_product(&b, &a).expect("score");
        assert!(approx_eq(left, right));
    }

    #[test]
    fn negative_components_produce_negative_scores() {
        let score = dot_product(&[1.0, 0.0], &[-2.0, 0.0]).expect("score");
        assert!(approx_eq(score, -2.0));
    }

    #[test]
    fn mismatched_lengths_are_an_explicit_error() {
        let err = dot_product(&[1.0, 2.0], &[1.0]).expect_err("should fail");
        assert!(matches!(
            err,
            ApiError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }
}
