//! Sentence bounds and referent-topic extraction around a claim span.

use tutor_session::topics::{self, Word};

fn is_terminator(text: &str, idx: usize, ch: char) -> bool {
    match ch {
        '!' | '?' | '\n' => true,
        // Decimal points are not sentence ends.
        '.' => {
            let prev_digit = text[..idx].chars().next_back().is_some_and(|c| c.is_ascii_digit());
            let next_digit = text[idx + 1..].chars().next().is_some_and(|c| c.is_ascii_digit());
            !(prev_digit && next_digit)
        }
        _ => false,
    }
}

/// Byte range of the sentence containing `[start, end)`, including its
/// terminal punctuation but not surrounding whitespace.
pub fn sentence_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let sentence_start = text[..start]
        .char_indices()
        .rev()
        .find(|&(idx, ch)| is_terminator(text, idx, ch))
        .map(|(idx, ch)| idx + ch.len_utf8())
        .unwrap_or(0);
    let sentence_start = sentence_start
        + (text[sentence_start..start].len() - text[sentence_start..start].trim_start().len());

    let mut sentence_end = text.len();
    let mut chars = text[end..].char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        let idx = end + offset;
        if !is_terminator(text, idx, ch) {
            continue;
        }
        if ch == '\n' {
            sentence_end = idx;
            break;
        }
        sentence_end = idx + ch.len_utf8();
        while let Some(&(o, c)) = chars.peek() {
            if matches!(c, '.' | '!' | '?') {
                sentence_end = end + o + c.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        break;
    }
    (sentence_start, sentence_end)
}

/// Whether a clause break (`,` `;` `:` or a bracket) separates two words.
fn clause_break(text: &str, earlier: &Word, later: &Word) -> bool {
    text[earlier.offset..later.offset]
        .chars()
        .any(|c| matches!(c, ',' | ';' | ':' | '(' | ')' | '"'))
}

/// First run of content words in `text`, after any leading stop-words.
fn leading_run(text: &str, min_len: usize, max_words: usize) -> Vec<Word> {
    let mut run: Vec<Word> = Vec::new();
    for word in topics::words(text) {
        let content = topics::is_content_word(&word.text, min_len);
        match run.last() {
            None if !content => continue,
            Some(prev) if !content || clause_break(text, prev, &word) => break,
            _ => {}
        }
        run.push(word);
        if run.len() >= max_words {
            break;
        }
    }
    run
}

/// Last run of content words in `text`, ignoring trailing stop-words.
fn trailing_run(text: &str, min_len: usize, max_words: usize) -> Vec<Word> {
    let mut run: Vec<Word> = Vec::new();
    for word in topics::words(text).into_iter().rev() {
        let content = topics::is_content_word(&word.text, min_len);
        match run.last() {
            None if !content => continue,
            Some(next) if !content || clause_break(text, &word, next) => break,
            _ => {}
        }
        run.push(word);
        if run.len() >= max_words {
            break;
        }
    }
    run.reverse();
    run
}

/// Referent topic for a claim at `[start, end)`: the content words that
/// follow it in the same sentence, else the ones before it.
pub fn extract_topic(
    text: &str,
    start: usize,
    end: usize,
    min_len: usize,
    max_words: usize,
) -> Option<String> {
    if max_words == 0 {
        return None;
    }
    let (sentence_start, sentence_end) = sentence_bounds(text, start, end);
    let after = &text[end..sentence_end.max(end)];
    let mut run = leading_run(after, min_len, max_words);
    if run.is_empty() {
        run = trailing_run(&text[sentence_start..start], min_len, max_words);
    }
    if run.is_empty() {
        return None;
    }
    Some(
        run.iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
