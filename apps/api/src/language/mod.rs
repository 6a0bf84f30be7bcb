//! Language model — tokenization, lemmatization and stop-word tagging.
//!
//! The model is built once at startup and shared read-only. The matcher
//! holds it as `Arc<dyn LanguageModel>` so tests can substitute a stub.

pub mod lemmatizer;
pub mod stop_words;
pub mod tokenizer;

use serde::Serialize;

pub use stop_words::StopWords;

/// One segment of analysed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_alpha: bool,
    pub is_stop: bool,
}

pub trait LanguageModel: Send + Sync {
    /// Segments `text` and annotates every token. Input casing is preserved.
    fn analyze(&self, text: &str) -> Vec<Token>;

    /// Identifies the model and its lexical resources, e.g. for `/health`.
    fn name(&self) -> &str;
}

/// Rule-based English model: UAX #29 segmentation, suffix lemmatizer and a
/// pinned stop-word list.
pub struct EnglishModel {
    stop_words: StopWords,
    name: String,
}

impl EnglishModel {
    pub fn new(stop_words: StopWords) -> Self {
        let name = format!("english-rules/{}", stop_words.version());
        Self { stop_words, name }
    }
}

impl Default for EnglishModel {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl LanguageModel for EnglishModel {
    fn analyze(&self, text: &str) -> Vec<Token> {
        tokenizer::segment(text)
            .map(|segment| {
                let lower = segment.to_lowercase();
                let is_alpha = tokenizer::is_alpha(segment);
                let lemma = if is_alpha {
                    lemmatizer::lemmatize(&lower)
                } else {
                    segment.to_string()
                };
                Token {
                    text: segment.to_string(),
                    lemma,
                    is_alpha,
                    is_stop: self.stop_words.contains(&lower),
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_annotates_tokens() {
        let model = EnglishModel::default();
        let tokens = model.analyze("looking for python developers!");

        let lemmas: Vec<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["look", "for", "python", "developer", "!"]);

        assert!(tokens[1].is_stop);
        assert!(!tokens[2].is_stop);
        assert!(!tokens[4].is_alpha);
    }

    #[test]
    fn test_name_includes_stop_word_version() {
        let model = EnglishModel::default();
        assert_eq!(model.name(), "english-rules/en-spacy-3.7");
    }

    #[test]
    fn test_custom_stop_words_apply() {
        let model = EnglishModel::new(StopWords::parse("python", "custom"));
        let tokens = model.analyze("python and rust");
        assert!(tokens[0].is_stop);
        assert!(!tokens[1].is_stop);
        assert_eq!(model.name(), "english-rules/custom");
    }
}
