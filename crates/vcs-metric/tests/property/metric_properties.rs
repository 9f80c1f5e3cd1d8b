use proptest::prelude::*;
use vcs_core::config::AlignmentConfig;
use vcs_core::models::{ScoreBundle, SimilarityMatrix};
use vcs_metric::alignment::Alignment;
use vcs_metric::score_matrix;
use vcs_metric::scoring::{combine, LocalAlignment, NarrativeAlignment};

fn arb_matrix() -> impl Strategy<Value = SimilarityMatrix> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1.0f64..=1.0, rows * cols)
            .prop_map(move |values| SimilarityMatrix::new(rows, cols, values).unwrap())
    })
}

fn arb_config() -> impl Strategy<Value = AlignmentConfig> {
    (0.05f64..0.95, 0.05f64..10.0, 0usize..3)
        .prop_map(|(cutoff, wc, lct)| AlignmentConfig::new(cutoff, wc, lct))
}

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

// ── Every reported score stays in [0, 1] ────────────────────────────────

proptest! {
    #[test]
    fn scores_bounded(matrix in arb_matrix(), config in arb_config(), sas in 0.0f64..=1.0) {
        let eval = score_matrix(matrix, sas, &config);
        let b = eval.bundle;
        for v in [b.sas, b.cas, b.nas, b.bp, eval.scaled_sas, eval.vad, eval.vcs] {
            prop_assert!(in_unit(v), "out of bounds: {:?}", eval);
        }
        let internals = eval.internals.unwrap();
        prop_assert!(in_unit(internals.metrics.nas.nas_d.precision.value));
        prop_assert!(in_unit(internals.metrics.nas.nas_d.recall.value));
        prop_assert!(in_unit(internals.metrics.cas.las.precision));
        prop_assert!(in_unit(internals.metrics.cas.las.recall));
    }
}

// ── Same input, same output ─────────────────────────────────────────────

proptest! {
    #[test]
    fn deterministic(matrix in arb_matrix(), config in arb_config(), sas in 0.0f64..=1.0) {
        let a = score_matrix(matrix.clone(), sas, &config);
        let b = score_matrix(matrix, sas, &config);
        prop_assert_eq!(a, b);
    }
}

// ── Fan-out does not change the result ──────────────────────────────────

proptest! {
    #[test]
    fn parallel_matches_sequential(matrix in arb_matrix(), config in arb_config()) {
        let parallel = Alignment::compute(&matrix, &config, true);
        let sequential = Alignment::compute(&matrix, &config, false);
        prop_assert_eq!(&parallel, &sequential);
        prop_assert_eq!(
            NarrativeAlignment::compute(&parallel, &config),
            NarrativeAlignment::compute(&sequential, &config)
        );
    }
}

// ── Precision over M is recall over Mᵀ ──────────────────────────────────

proptest! {
    #[test]
    fn transpose_swaps_directions(matrix in arb_matrix(), config in arb_config()) {
        let forward = Alignment::compute(&matrix, &config, false);
        let flipped = Alignment::compute(&matrix.transpose(), &config, false);

        let swap = |pairs: Vec<(usize, usize)>| -> Vec<(usize, usize)> {
            pairs.into_iter().map(|(r, g)| (g, r)).collect()
        };
        let pairs = |a: &vcs_metric::alignment::DirectionAlignment| -> Vec<(usize, usize)> {
            a.line.matches().iter().map(|m| (m.ref_index, m.gen_index)).collect()
        };
        prop_assert_eq!(pairs(&forward.precision), swap(pairs(&flipped.recall)));
        prop_assert_eq!(pairs(&forward.recall), swap(pairs(&flipped.precision)));

        let local = LocalAlignment::compute(&forward);
        let local_flipped = LocalAlignment::compute(&flipped);
        prop_assert!((local.precision - local_flipped.recall).abs() < 1e-12);
        prop_assert!((local.cas - local_flipped.cas).abs() < 1e-12);
    }
}

// ── Cascade gating ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sas_below_cas_complement_zeroes_cascade(
        cas in 0.0f64..=1.0,
        gap in 0.0f64..=1.0,
        nas in 0.0f64..=1.0,
        bp in 0.0f64..=1.0,
    ) {
        let sas = ((1.0 - cas) - gap).max(0.0);
        let c = combine(&ScoreBundle::new(sas, cas, nas, bp));
        prop_assert_eq!(c.scaled_sas, 0.0);
        prop_assert_eq!(c.vad, 0.0);
        prop_assert_eq!(c.vcs, 0.0);
    }
}

proptest! {
    #[test]
    fn cascade_never_increases(
        sas in 0.0f64..=1.0,
        cas in 0.01f64..=1.0,
        nas in 0.01f64..=1.0,
        bp in 0.01f64..=1.0,
    ) {
        let c = combine(&ScoreBundle::new(sas, cas, nas, bp));
        prop_assert!(c.scaled_sas <= sas + 1e-12);
        prop_assert!(c.vad <= c.scaled_sas.min(nas) + 1e-12);
        prop_assert!(c.vcs <= c.vad + 1e-12);
    }
}
