//! Reference × generated similarity matrix construction.

use rayon::prelude::*;
use tracing::{debug, warn};
use vcs_core::errors::{EmbeddingError, VcsResult};
use vcs_core::models::{Chunk, SimilarityMatrix};
use vcs_embeddings::similarity::{cosine_similarity, is_degenerate};

/// Build `M[i][j] = cos(reference[i], generated[j])`.
///
/// Every chunk must share one dimensionality. A chunk with a zero-norm
/// embedding makes its whole row (reference) or column (generated)
/// undefined (`NaN`) instead of failing the evaluation.
///
/// # Errors
/// `DimensionMismatch` if any embedding differs in length from the first
/// reference embedding.
pub fn build_matrix(
    reference: &[Chunk],
    generated: &[Chunk],
    parallel: bool,
) -> VcsResult<SimilarityMatrix> {
    if reference.is_empty() || generated.is_empty() {
        return Ok(SimilarityMatrix::empty(reference.len(), generated.len()));
    }

    let dims = reference[0].dimensions();
    if let Some(bad) = reference.iter().chain(generated).find(|c| c.dimensions() != dims) {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dims,
            actual: bad.dimensions(),
        }
        .into());
    }

    let ref_degenerate: Vec<bool> = reference.iter().map(|c| is_degenerate(&c.embedding)).collect();
    let gen_degenerate: Vec<bool> = generated.iter().map(|c| is_degenerate(&c.embedding)).collect();
    let degenerate_rows = ref_degenerate.iter().filter(|d| **d).count();
    let degenerate_cols = gen_degenerate.iter().filter(|d| **d).count();
    if degenerate_rows + degenerate_cols > 0 {
        warn!(
            degenerate_rows,
            degenerate_cols, "zero-norm chunk embeddings excluded from alignment"
        );
    }

    let row = |i: usize| -> VcsResult<Vec<f64>> {
        generated
            .iter()
            .enumerate()
            .map(|(j, g)| {
                if ref_degenerate[i] || gen_degenerate[j] {
                    Ok(f64::NAN)
                } else {
                    Ok(cosine_similarity(&reference[i].embedding, &g.embedding)?)
                }
            })
            .collect()
    };

    let rows: Vec<Vec<f64>> = if parallel {
        (0..reference.len()).into_par_iter().map(row).collect::<VcsResult<_>>()?
    } else {
        (0..reference.len()).map(row).collect::<VcsResult<_>>()?
    };

    let matrix = SimilarityMatrix::new(
        reference.len(),
        generated.len(),
        rows.into_iter().flatten().collect(),
    )?;
    debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        dims,
        undefined = matrix.undefined_cells(),
        "similarity matrix built"
    );
    Ok(matrix)
}
