use serde::{Deserialize, Serialize};

/// An ordered unit of text together with its embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// 0-based position within its sequence.
    pub index: usize,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Chunk {
    pub fn new(index: usize, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            index,
            text: text.into(),
            embedding,
        }
    }

    /// Dimensionality of the attached embedding.
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }

    /// Zip chunk texts with their embeddings, assigning sequential indices.
    ///
    /// Extra items on either side are dropped.
    pub fn sequence(texts: Vec<String>, embeddings: Vec<Vec<f32>>) -> Vec<Chunk> {
        texts
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(|(index, (text, embedding))| Chunk {
                index,
                text,
                embedding,
            })
            .collect()
    }
}
