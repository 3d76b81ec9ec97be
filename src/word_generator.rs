use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    language::{sample_words, Difficulty, Language, WordSource},
    passage::Passage,
    session::DEFAULT_WORD_COUNT,
};

/// Configuration for passage generation
#[derive(Debug, Clone, PartialEq)]
pub struct WordGenConfig {
    pub number_of_words: usize,
    pub custom_prompt: Option<String>,
    pub seed: Option<u64>,
}

impl Default for WordGenConfig {
    fn default() -> Self {
        Self {
            number_of_words: DEFAULT_WORD_COUNT,
            custom_prompt: None,
            seed: None,
        }
    }
}

/// Builds a fresh passage for every attempt
#[derive(Debug)]
pub struct PassageGenerator {
    config: WordGenConfig,
    source: Box<dyn WordSource>,
    rng: StdRng,
}

impl PassageGenerator {
    pub fn new(config: WordGenConfig, source: Box<dyn WordSource>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            source,
            rng,
        }
    }

    /// Generate a passage for the language and difficulty.
    ///
    /// A custom prompt always wins. Otherwise words are sampled from the
    /// source pool; easy passages are lower-cased, hard ones keep their case.
    pub fn generate(&mut self, language: Language, difficulty: Difficulty) -> Passage {
        if let Some(ref custom_prompt) = self.config.custom_prompt {
            return Passage::from_text(custom_prompt);
        }

        let pool = self.source.fetch_words(language, difficulty);
        let words = sample_words(pool, self.config.number_of_words, &mut self.rng);
        let words = match difficulty {
            Difficulty::Easy => words.into_iter().map(|w| w.to_lowercase()).collect(),
            Difficulty::Hard => words,
        };

        debug!(
            "generated {} word passage for {language}/{difficulty} from a pool of {}",
            words.len(),
            pool.len()
        );
        Passage::new(words)
    }
}
