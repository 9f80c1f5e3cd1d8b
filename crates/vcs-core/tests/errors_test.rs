use vcs_core::errors::*;

#[test]
fn subsystem_errors_convert_into_vcs_error() {
    let e: VcsError = EmbeddingError::DimensionMismatch {
        expected: 3,
        actual: 2,
    }
    .into();
    assert!(matches!(e, VcsError::Embedding(_)));
    assert_eq!(e.error_code(), "DIMENSION_MISMATCH");

    let e: VcsError = AlignmentError::MatrixShape {
        expected: 4,
        actual: 3,
    }
    .into();
    assert_eq!(e.error_code(), "MATRIX_SHAPE");

    let e: VcsError = TextError::InvalidChunkSize { chunk_size: 0 }.into();
    assert_eq!(e.error_code(), "INVALID_CHUNK_SIZE");
}

#[test]
fn report_string_prefixes_code() {
    let e = EmbeddingError::DegenerateVector {
        context: "reference chunk 2".to_string(),
    };
    assert_eq!(
        e.report_string(),
        "[DEGENERATE_VECTOR] degenerate (zero-norm) vector: reference chunk 2"
    );
}

#[test]
fn display_messages_are_descriptive() {
    let e = EmbeddingError::DimensionMismatch {
        expected: 256,
        actual: 128,
    };
    assert_eq!(e.to_string(), "dimension mismatch: expected 256, got 128");

    let wrapped = VcsError::from(e);
    assert!(wrapped.to_string().starts_with("embedding error:"));
}
