//! Golden fixture loader for VCS tests and benchmarks.
//!
//! Typed deserialization of the JSON files under `test-fixtures/golden`
//! plus helpers for loading them from any crate in the workspace.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

pub const NINE_BY_NINE: &str = "golden/nine_by_nine_alignment.json";
pub const CASCADE: &str = "golden/cascade.json";
pub const STORY_PAIRS: &str = "golden/story_pairs.json";

fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("test-fixtures directory not found above {manifest_dir}");
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

// ── Alignment golden ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentFixture {
    pub description: String,
    /// Rows are reference chunks, columns generated chunks.
    pub matrix: Vec<Vec<f64>>,
    pub cases: Vec<AlignmentCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentCase {
    pub name: String,
    pub description: String,
    pub config: SelectionParams,
    pub sas: f64,
    pub expected: AlignmentExpectation,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SelectionParams {
    pub context_cutoff_value: f64,
    pub context_window_control: f64,
    pub lct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ExpectedMatch {
    pub ref_index: usize,
    pub gen_index: usize,
    pub similarity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentExpectation {
    pub precision_matches: Vec<ExpectedMatch>,
    pub recall_matches: Vec<ExpectedMatch>,
    pub precision_distances: Vec<Option<usize>>,
    pub recall_distances: Vec<Option<usize>>,
    pub precision_las: f64,
    pub recall_las: f64,
    pub cas: f64,
    pub precision_nas: f64,
    pub recall_nas: f64,
    pub nas: f64,
    pub bp: f64,
    pub scaled_sas: f64,
    pub vad: f64,
    pub vcs: f64,
}

pub fn nine_by_nine() -> AlignmentFixture {
    load_fixture(NINE_BY_NINE)
}

// ── Cascade golden ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct CascadeFixture {
    pub description: String,
    pub cases: Vec<CascadeCase>,
    pub harmonic: Vec<HarmonicCase>,
    pub brevity: Vec<BrevityCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CascadeCase {
    pub name: String,
    pub sas: f64,
    pub cas: f64,
    pub nas: f64,
    pub bp: f64,
    pub expected: CascadeExpectation,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CascadeExpectation {
    pub scaled_sas: f64,
    pub vad: f64,
    pub vcs: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HarmonicCase {
    pub a: f64,
    pub b: f64,
    pub expected: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BrevityCase {
    pub generated: usize,
    pub reference: usize,
    pub expected: f64,
}

pub fn cascade() -> CascadeFixture {
    load_fixture(CASCADE)
}

// ── Story pairs ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct StoryPair {
    pub name: String,
    pub reference: String,
    pub generated: String,
}

pub fn story_pairs() -> Vec<StoryPair> {
    load_fixture(STORY_PAIRS)
}
