use proptest::prelude::*;
use vcs_core::traits::IEmbeddingProvider;
use vcs_embeddings::similarity::is_degenerate;
use vcs_embeddings::{cosine_similarity, HashedTfIdf};

fn arb_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1usize..64).prop_flat_map(|n| {
        (
            prop::collection::vec(-10.0f32..10.0, n),
            prop::collection::vec(-10.0f32..10.0, n),
        )
    })
}

proptest! {
    #[test]
    fn cosine_bounded_and_symmetric((a, b) in arb_pair()) {
        prop_assume!(!is_degenerate(&a) && !is_degenerate(&b));
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert!((-1.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }
}

proptest! {
    #[test]
    fn hashed_embeddings_are_unit_or_zero(text in "[a-zA-Z ,.!?]{0,80}") {
        let v = HashedTfIdf::new(128).embed(&text).unwrap();
        prop_assert_eq!(v.len(), 128);
        let norm: f64 = v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
        prop_assert!(norm < 1e-9 || (norm - 1.0).abs() < 1e-4, "norm {}", norm);
    }
}
