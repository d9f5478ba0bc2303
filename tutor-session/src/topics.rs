//! Topic tokenizer: split → lowercase → drop stop-words and short tokens.
//!
//! Also home to the light stemmer used for case-insensitive topic matching,
//! shared with memory-claim extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words, filler verbs, and temporal words that never form a topic.
const STOP_WORDS: &[&str] = &[
    // articles, pronouns, determiners
    "a", "an", "the", "this", "that", "these", "those", "it", "its", "i", "me", "my", "mine",
    "we", "us", "our", "ours", "you", "your", "yours", "he", "she", "they", "them", "their",
    "there", "here", "what", "which", "who", "whom", "whose", "some", "any", "all", "each",
    "every", "both", "few", "more", "most", "other", "such", "own", "same", "one",
    "i'm", "i've", "i'd", "i'll", "we're", "we've", "we'll", "you're", "you've", "you'll",
    "you'd", "it's", "that's", "let's", "don't", "didn't", "doesn't", "can't", "won't",
    // prepositions, conjunctions
    "about", "above", "after", "again", "against", "along", "also", "and", "around", "because",
    "before", "below", "between", "but", "by", "for", "from", "how", "if", "in", "into", "like",
    "nor", "not", "of", "off", "on", "once", "only", "or", "out", "over", "so", "than", "then",
    "through", "to", "too", "under", "until", "up", "very", "when", "where", "while", "why",
    "with", "without", "just", "yes", "no", "okay", "ok", "well", "really",
    // auxiliaries and filler verbs
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does", "doing", "done",
    "had", "has", "have", "having", "is", "may", "might", "must", "shall", "should", "was",
    "were", "will", "would", "get", "got", "go", "going", "went", "know", "let", "make",
    "need", "please", "say", "said", "see", "seem", "tell", "think", "thanks", "thank",
    "want", "use", "used", "using", "explain", "help", "understand", "looked", "look",
    "talked", "talk", "covered", "cover", "discussed", "discuss", "mentioned", "mention",
    "remember", "recall", "told", "work", "worked", "learn", "learned", "show",
    // temporal
    "today", "yesterday", "tomorrow", "earlier", "later", "previously", "recently", "ago",
    "last", "next", "time", "times", "session", "week", "now", "already", "still", "always",
    "never", "sometimes", "often",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Whether a lowercased word is a stop-word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// A lowercased word with its position in the original word sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub position: usize,
    /// Byte offset of the word in the source text.
    pub offset: usize,
}

/// Split text into lowercased words. Apostrophes inside words are kept.
pub fn words(text: &str) -> Vec<Word> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    let flush = |start: usize, end: usize, out: &mut Vec<Word>| {
        let raw = text[start..end].trim_matches('\'');
        if raw.is_empty() {
            return;
        }
        let lead = text[start..end].len() - text[start..end].trim_start_matches('\'').len();
        out.push(Word {
            text: raw.to_lowercase(),
            position: out.len(),
            offset: start + lead,
        });
    };

    for (idx, ch) in text.char_indices() {
        let is_word_char = ch.is_alphanumeric() || ch == '\'' || ch == '\u{2019}';
        match (is_word_char, start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                flush(s, idx, &mut out);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        flush(s, text.len(), &mut out);
    }

    // Normalize typographic apostrophes so "you’ll" hits the stop-word list.
    for w in &mut out {
        if w.text.contains('\u{2019}') {
            w.text = w.text.replace('\u{2019}', "'");
        }
    }
    out
}

/// Whether a word can carry a topic on its own.
pub fn is_content_word(word: &str, min_len: usize) -> bool {
    word.chars().count() >= min_len
        && !is_stop_word(word)
        && !word.chars().all(|c| c.is_ascii_digit())
}

/// Content words of `text`, preserving their original positions.
pub fn content_words(text: &str, min_len: usize) -> Vec<Word> {
    words(text)
        .into_iter()
        .filter(|w| is_content_word(&w.text, min_len))
        .collect()
}

/// Derive topic keys from text: every content word plus every run of
/// up to `max_ngram` adjacent content words.
pub fn extract_topics(text: &str, min_len: usize, max_ngram: usize) -> Vec<String> {
    let content = content_words(text, min_len);
    let mut topics: Vec<String> = content.iter().map(|w| w.text.clone()).collect();

    for n in 2..=max_ngram {
        for window in content.windows(n) {
            let adjacent = window
                .windows(2)
                .all(|pair| pair[1].position == pair[0].position + 1);
            if adjacent {
                let gram: Vec<&str> = window.iter().map(|w| w.text.as_str()).collect();
                topics.push(gram.join(" "));
            }
        }
    }
    topics
}

/// Strip common English inflections. Short words are returned unchanged.
pub fn stem(word: &str) -> String {
    let len = word.chars().count();
    if len > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if len > 5 && word.ends_with("ing") {
        return word[..word.len() - 3].to_string();
    }
    if len > 4 && (word.ends_with("ed") || word.ends_with("es")) {
        return word[..word.len() - 2].to_string();
    }
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Case-insensitive match between an index key and a query word: equal
/// stems, or one stem (at least four chars) starting the other. Letters in
/// the middle of a word never count, so "rate" does not match "integration".
pub fn term_matches(key: &str, query: &str) -> bool {
    let key = stem(&key.to_lowercase());
    let query = stem(&query.to_lowercase());
    if key == query {
        return true;
    }
    let (short, long) = if key.len() <= query.len() {
        (&key, &query)
    } else {
        (&query, &key)
    };
    short.len() >= 4 && long.starts_with(short.as_str())
}
