use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Version tag of the built-in list. Scores depend on it, so tests pin it.
pub const STOP_WORDS_VERSION: &str = "en-spacy-3.7";

/// Alphabetic entries of the spaCy 3.7 English stop-word list.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "ca", "call", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "due", "during", "each", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "first", "five", "for", "former",
    "formerly", "forty", "four", "from", "front", "full", "further", "get", "give", "go", "had",
    "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly",
    "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding",
    "same", "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she",
    "should", "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "third", "this", "those",
    "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top",
    "toward", "towards", "twelve", "twenty", "two", "under", "unless", "until", "up", "upon",
    "us", "used", "using", "various", "very", "via", "was", "we", "well", "were", "what",
    "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

/// A set of words excluded from matching, tagged with where it came from.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
    version: String,
}

impl StopWords {
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| w.to_string()).collect(),
            version: STOP_WORDS_VERSION.to_string(),
        }
    }

    /// Parses one word per line. Blank lines and `#` comments are skipped;
    /// entries are lowercased.
    pub fn parse(source: &str, version: impl Into<String>) -> Self {
        let words = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self {
            words,
            version: version.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop-word list at {}", path.display()))?;
        Ok(Self::parse(&source, format!("file:{}", path.display())))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_list_covers_function_words() {
        let stop = StopWords::english();
        for w in ["the", "is", "and", "for", "with", "using"] {
            assert!(stop.contains(w), "{w} should be a stop word");
        }
        assert!(!stop.contains("python"));
        assert!(!stop.contains("developer"));
        assert!(!stop.contains("look"));
        assert_eq!(stop.version(), STOP_WORDS_VERSION);
    }

    #[test]
    fn test_english_list_has_no_duplicates() {
        assert_eq!(StopWords::english().len(), ENGLISH.len());
    }

    #[test]
    fn test_parse_skips_comments_and_lowercases() {
        let stop = StopWords::parse("# custom\nThe\n\n  AND  \n", "custom-1");
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert_eq!(stop.len(), 2);
        assert_eq!(stop.version(), "custom-1");
    }

    #[test]
    fn test_from_file_reads_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "looking\nfor").unwrap();
        let stop = StopWords::from_file(file.path()).unwrap();
        assert!(stop.contains("looking"));
        assert!(stop.version().starts_with("file:"));
    }

    #[test]
    fn test_from_missing_file_is_error() {
        assert!(StopWords::from_file(Path::new("/nonexistent/stop_words.txt")).is_err());
    }
}
