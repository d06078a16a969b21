use std::sync::Arc;

use crate::models::VocabularyPair;

use super::random::{RandomSource, ThreadRngSource};

/// Pool of grammar tips; one is returned verbatim with every response.
pub const GRAMMAR_TIPS: [&str; 3] = [
    "In German, the verb usually comes in the second position.",
    "Nouns are capitalized in German.",
    "German word order may differ significantly from English.",
];

/// Static bilingual pairs appended to the per-request example pool.
const STATIC_EXAMPLES: [&str; 2] = [
    "EN: I speak German well. / DE: Ich spreche gut Deutsch.",
    "EN: She is learning German. / DE: Sie lernt Deutsch.",
];

/// Learning aids derived from one sentence/translation pair.
#[derive(Debug, Clone)]
pub struct LearningInsights {
    pub vocabulary: Vec<VocabularyPair>,
    pub grammar_tip: String,
    pub example_sentence: String,
}

/// Produces naive learning aids for a translated sentence. Stateless apart
/// from the injected random source; safe to share across requests.
pub struct InsightGenerator {
    random: Arc<dyn RandomSource>,
}

impl InsightGenerator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Build vocabulary pairs plus one grammar tip and one example sentence.
    ///
    /// Selection draws the tip first, then the example; scripted random
    /// sources rely on that order.
    pub fn generate(&self, sentence: &str, translation: &str) -> LearningInsights {
        let vocabulary = pair_vocabulary(sentence, translation);

        let grammar_tip = GRAMMAR_TIPS[self.random.pick_index(GRAMMAR_TIPS.len())].to_string();

        let examples = example_pool(sentence, translation);
        let example_sentence = examples[self.random.pick_index(examples.len())].clone();

        LearningInsights {
            vocabulary,
            grammar_tip,
            example_sentence,
        }
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngSource))
    }
}

/// Pair source and target tokens by position. All literal `.` characters are
/// removed from the translation before tokenizing; the shorter token list
/// caps the result. The pairing carries no linguistic alignment.
pub fn pair_vocabulary(sentence: &str, translation: &str) -> Vec<VocabularyPair> {
    let stripped = translation.replace('.', "");

    sentence
        .split_whitespace()
        .zip(stripped.split_whitespace())
        .map(|(english, german)| VocabularyPair {
            english: english.to_string(),
            german: german.to_string(),
        })
        .collect()
}

/// The four example candidates, in fixed order: two built from the current
/// request, then the two static pairs.
fn example_pool(sentence: &str, translation: &str) -> Vec<String> {
    let mut pool = vec![format!("EN: {}", sentence), format!("DE: {}", translation)];
    pool.extend(STATIC_EXAMPLES.iter().map(|s| s.to_string()));
    pool
}
