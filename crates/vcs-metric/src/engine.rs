//! VcsEngine: the main entry point for vcs-metric.
//!
//! Coordinates chunking, embedding, matrix construction, alignment,
//! scoring, and the gated cascade for one (reference, generated) pair or a
//! batch of them.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use vcs_core::config::{AlignmentConfig, VcsConfig};
use vcs_core::constants::VERSION;
use vcs_core::errors::{EmbeddingError, VcsResult};
use vcs_core::models::{Chunk, ScoreBundle, SimilarityMatrix};
use vcs_core::traits::IEmbeddingProvider;
use vcs_embeddings::{cosine_similarity, EmbeddingEngine};
use vcs_text::TextPreprocessor;

use crate::alignment::Alignment;
use crate::internals::{Internals, Scored, TextsReport};
use crate::scoring::{brevity_penalty, combine, LocalAlignment, NarrativeAlignment};
use crate::similarity::build_matrix;

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub bundle: ScoreBundle,
    pub scaled_sas: f64,
    pub vad: f64,
    pub vcs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internals: Option<Internals>,
}

impl Evaluation {
    pub fn to_json(&self) -> VcsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Score a precomputed similarity matrix (rows = reference chunks).
///
/// `sas` is the whole-text semantic similarity; it is clamped to `[0, 1]`.
/// An empty matrix scores zero everywhere.
pub fn score_matrix(matrix: SimilarityMatrix, sas: f64, config: &AlignmentConfig) -> Evaluation {
    let texts = TextsReport::counts_only(matrix.rows(), matrix.cols());
    let scored = score(matrix, sas, config, true);
    let internals = Internals::from_scored(config, texts, &scored);
    finish(scored, Some(internals))
}

fn score(matrix: SimilarityMatrix, sas: f64, config: &AlignmentConfig, parallel: bool) -> Scored {
    let alignment = Alignment::compute(&matrix, config, parallel);
    let local = LocalAlignment::compute(&alignment);
    let narrative = NarrativeAlignment::compute(&alignment, config);
    let bundle = if matrix.is_empty() {
        ScoreBundle::zero()
    } else {
        ScoreBundle::new(
            sas,
            local.cas,
            narrative.nas,
            brevity_penalty(matrix.cols(), matrix.rows()),
        )
    };
    let cascade = combine(&bundle);
    Scored {
        matrix,
        alignment,
        local,
        narrative,
        bundle,
        cascade,
    }
}

fn finish(scored: Scored, internals: Option<Internals>) -> Evaluation {
    Evaluation {
        bundle: scored.bundle,
        scaled_sas: scored.cascade.scaled_sas,
        vad: scored.cascade.vad,
        vcs: scored.cascade.vcs,
        internals,
    }
}

/// The VCS evaluation engine.
///
/// Holds the validated configuration, the text preprocessor, and the cached
/// embedding engine. Every evaluation is independent; the embedding cache
/// is the only shared state.
pub struct VcsEngine {
    config: VcsConfig,
    preprocessor: TextPreprocessor,
    embeddings: EmbeddingEngine,
}

impl VcsEngine {
    /// Create an engine over a caller-supplied embedding provider.
    ///
    /// # Errors
    /// `Config` if the configuration fails validation.
    pub fn new(config: VcsConfig, provider: Box<dyn IEmbeddingProvider>) -> VcsResult<Self> {
        config.validate()?;
        let embeddings = EmbeddingEngine::with_provider(provider, config.embedding.cache_capacity)
            .with_parallel(config.engine.parallel);
        Ok(Self::assemble(config, embeddings))
    }

    /// Create an engine whose provider is chosen from `config.embedding`.
    pub fn from_config(config: VcsConfig) -> VcsResult<Self> {
        config.validate()?;
        let embeddings =
            EmbeddingEngine::new(&config.embedding).with_parallel(config.engine.parallel);
        Ok(Self::assemble(config, embeddings))
    }

    /// Engine with compiled defaults and the offline hashed provider.
    pub fn with_defaults() -> VcsResult<Self> {
        Self::from_config(VcsConfig::default())
    }

    fn assemble(config: VcsConfig, embeddings: EmbeddingEngine) -> Self {
        info!(
            version = VERSION,
            chunk_size = config.alignment.chunk_size,
            cutoff = config.alignment.context_cutoff_value,
            window_control = config.alignment.context_window_control,
            lct = config.alignment.lct,
            provider = embeddings.name(),
            "VcsEngine initialized"
        );
        Self {
            preprocessor: TextPreprocessor::new(config.alignment.chunk_size),
            config,
            embeddings,
        }
    }

    pub fn config(&self) -> &VcsConfig {
        &self.config
    }

    pub fn embeddings(&self) -> &EmbeddingEngine {
        &self.embeddings
    }

    /// Replace the default rule-based preprocessor (e.g. with a neural
    /// segmenter).
    pub fn with_preprocessor(mut self, preprocessor: TextPreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Evaluate a generated text against a reference text.
    ///
    /// # Errors
    /// Text, embedding (including `DimensionMismatch`), or alignment errors.
    /// Empty texts are not errors: they score zero.
    pub fn evaluate(&self, reference: &str, generated: &str) -> VcsResult<Evaluation> {
        let ref_texts = self.preprocessor.chunks(reference)?;
        let gen_texts = self.preprocessor.chunks(generated)?;

        if ref_texts.is_empty() || gen_texts.is_empty() {
            debug!(
                reference_chunks = ref_texts.len(),
                generated_chunks = gen_texts.len(),
                "empty input, scoring zero"
            );
            let ref_embeddings = vec![Vec::new(); ref_texts.len()];
            let gen_embeddings = vec![Vec::new(); gen_texts.len()];
            return self.evaluate_texts(ref_texts, gen_texts, ref_embeddings, gen_embeddings, 0.0);
        }

        let ref_embeddings = self.embeddings.embed_batch(&ref_texts)?;
        let gen_embeddings = self.embeddings.embed_batch(&gen_texts)?;
        let sas = self.semantic_alignment(
            &self.preprocessor.normalize_document(reference),
            &self.preprocessor.normalize_document(generated),
        )?;

        self.evaluate_texts(ref_texts, gen_texts, ref_embeddings, gen_embeddings, sas)
    }

    fn evaluate_texts(
        &self,
        ref_texts: Vec<String>,
        gen_texts: Vec<String>,
        ref_embeddings: Vec<Vec<f32>>,
        gen_embeddings: Vec<Vec<f32>>,
        sas: f64,
    ) -> VcsResult<Evaluation> {
        let reference = Chunk::sequence(ref_texts, ref_embeddings);
        let generated = Chunk::sequence(gen_texts, gen_embeddings);
        self.evaluate_chunks(&reference, &generated, sas)
    }

    /// Evaluate pre-embedded chunks with a precomputed SAS.
    pub fn evaluate_chunks(
        &self,
        reference: &[Chunk],
        generated: &[Chunk],
        sas: f64,
    ) -> VcsResult<Evaluation> {
        let span = crate::evaluation_span!(reference.len(), generated.len());
        let _guard = span.enter();

        let parallel = self.config.engine.parallel;
        let matrix = build_matrix(reference, generated, parallel)?;
        let scored = score(matrix, sas, &self.config.alignment, parallel);

        let internals = self.config.engine.return_internals.then(|| {
            let texts = TextsReport::new(
                reference.iter().map(|c| c.text.clone()).collect(),
                generated.iter().map(|c| c.text.clone()).collect(),
            );
            Internals::from_scored(&self.config.alignment, texts, &scored)
        });

        let evaluation = finish(scored, internals);
        info!(
            sas = evaluation.bundle.sas,
            cas = evaluation.bundle.cas,
            nas = evaluation.bundle.nas,
            bp = evaluation.bundle.bp,
            vcs = evaluation.vcs,
            "evaluation complete"
        );
        Ok(evaluation)
    }

    /// SAS: cosine similarity of the whole-text embeddings, clamped to
    /// `[0, 1]`. A text with no usable embedding scores 0.
    pub fn semantic_alignment(&self, reference: &str, generated: &str) -> VcsResult<f64> {
        let a = self.embeddings.embed(reference)?;
        let b = self.embeddings.embed(generated)?;
        match cosine_similarity(&a, &b) {
            Ok(sim) => Ok(sim.clamp(0.0, 1.0)),
            Err(EmbeddingError::DegenerateVector { context }) => {
                warn!(%context, "degenerate document embedding, SAS set to 0");
                Ok(0.0)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Evaluate independent pairs, in parallel when enabled. Output order
    /// matches input order; one failing pair does not affect the others.
    pub fn evaluate_batch(&self, pairs: &[(String, String)]) -> Vec<VcsResult<Evaluation>> {
        let span = crate::batch_span!(pairs.len());
        let _guard = span.enter();
        if self.config.engine.parallel {
            pairs
                .par_iter()
                .map(|(r, g)| self.evaluate(r, g))
                .collect()
        } else {
            pairs.iter().map(|(r, g)| self.evaluate(r, g)).collect()
        }
    }
}

impl std::fmt::Debug for VcsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcsEngine")
            .field("config", &self.config)
            .field("preprocessor", &self.preprocessor)
            .field("embeddings", &self.embeddings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let engine = VcsEngine::with_defaults().unwrap();
        let text = "A fox crept into the barn. The hens woke up. The farmer came running.";
        let eval = engine.evaluate(text, text).unwrap();
        assert!((eval.vcs - 1.0).abs() < 1e-9, "{:?}", eval.bundle);
        let internals = eval.internals.unwrap();
        assert!(internals.alignment.precision.monotonic);
        assert!(internals.alignment.recall.monotonic);
    }

    #[test]
    fn empty_generated_scores_zero() {
        let engine = VcsEngine::with_defaults().unwrap();
        let eval = engine.evaluate("Something happened.", "").unwrap();
        assert_eq!(eval.bundle, ScoreBundle::zero());
        assert_eq!(eval.vcs, 0.0);
    }

    #[test]
    fn internals_can_be_disabled() {
        let mut config = VcsConfig::default();
        config.engine.return_internals = false;
        let engine = VcsEngine::from_config(config).unwrap();
        let eval = engine.evaluate("One. Two.", "One. Two.").unwrap();
        assert!(eval.internals.is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = VcsConfig::default();
        config.alignment.chunk_size = 0;
        assert!(VcsEngine::from_config(config).is_err());
    }
}
