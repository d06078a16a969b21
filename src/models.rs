//! Wire types for the learning endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /learn-german`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceInput {
    pub sentence: String,
}

/// One positionally paired source/target word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPair {
    pub english: String,
    pub german: String,
}

/// Response body for `POST /learn-german`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResponse {
    pub german_translation: String,
    pub vocabulary: Vec<VocabularyPair>,
    /// One tip, not a list.
    pub grammar_tips: String,
    /// One formatted example; the plural field name is part of the wire
    /// contract and must not be "fixed" into a list.
    pub example_sentences: String,
}
