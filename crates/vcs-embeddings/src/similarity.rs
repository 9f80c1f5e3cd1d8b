//! Cosine similarity between embedding vectors.

use vcs_core::constants::SIMILARITY_EPSILON;
use vcs_core::errors::EmbeddingError;

/// Cosine similarity `(a·b) / (‖a‖‖b‖)`, accumulated in f64 and clamped to
/// `[-1, 1]`.
///
/// # Errors
/// `DimensionMismatch` when the lengths differ; `DegenerateVector` when
/// either vector is empty or has (near-)zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    validate_dimensions(b, a.len())?;
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    if mag_a.sqrt() < SIMILARITY_EPSILON {
        return Err(EmbeddingError::DegenerateVector {
            context: "left operand".to_string(),
        });
    }
    if mag_b.sqrt() < SIMILARITY_EPSILON {
        return Err(EmbeddingError::DegenerateVector {
            context: "right operand".to_string(),
        });
    }
    Ok((dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(-1.0, 1.0))
}

/// L2 norm in f64.
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt()
}

/// Whether a vector has no usable direction (empty or zero norm).
pub fn is_degenerate(v: &[f32]) -> bool {
    l2_norm(v) < SIMILARITY_EPSILON
}

/// Check an embedding against the expected dimensionality.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> Result<(), EmbeddingError> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        });
    }
    Ok(())
}
