//! Sentence and term tokenization
//!
//! Sentences are split on terminal punctuation with enough abbreviation
//! awareness that initials (`J. R. R. Tolkien`, `U.S.`) and common titles
//! (`Dr.`, `Mrs.`) do not end a sentence. A blank line always ends one.
//! Terms come from Unicode word segmentation, lower-cased.

use unicode_segmentation::UnicodeSegmentation;

/// Words that are followed by a period without ending the sentence.
///
/// Compared lower-cased, without the trailing period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "jr", "sr", "vs", "etc", "inc", "ltd", "corp", "lt", "sgt",
    "capt", "approx", "dept", "pp", "jan", "feb", "apr", "jul", "aug", "sept", "oct", "nov",
];

/// Abbreviations that are also ordinary words ("no", "co", "est", "dec").
///
/// Compared case-sensitively, so only the capitalized form is an abbreviation.
const CAPITALIZED_ABBREVIATIONS: &[&str] = &[
    "St", "Co", "Ed", "Est", "Mar", "Jun", "Sep", "Dec", "Fig", "Gen", "Col", "Rev", "Hon", "Mt",
    "Vol",
];

/// Abbreviations that only hold when a number follows ("No. 5")
const NUMERIC_ABBREVIATIONS: &[&str] = &["No", "Nos"];

const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Characters that may trail a terminator and still belong to the sentence
const CLOSERS: [char; 8] = ['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}'];

/// A sentence as it appears in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Trimmed sentence text
    pub text: String,
    /// Byte offset of the first character in the source
    pub start: usize,
    /// Byte offset one past the last character in the source
    pub end: usize,
}

/// Splits text into sentences and sentences into terms
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split raw text into ordered, non-empty sentences
    ///
    /// Empty or whitespace-only input yields an empty list.
    pub fn split_sentences(&self, text: &str) -> Vec<SentenceSpan> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut spans = Vec::new();
        let mut seg_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];

            if ch == '\n' {
                if let Some(after_blank) = blank_line_end(&chars, i) {
                    push_span(text, seg_start, pos, &mut spans);
                    seg_start = chars.get(after_blank).map_or(text.len(), |&(p, _)| p);
                    i = after_blank;
                    continue;
                }
                i += 1;
                continue;
            }

            if !TERMINALS.contains(&ch) {
                i += 1;
                continue;
            }

            // Swallow a run of terminators ("?!", "...") and any closing quotes
            let mut j = i + 1;
            while j < chars.len() && TERMINALS.contains(&chars[j].1) {
                j += 1;
            }
            let run_len = j - i;
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                j += 1;
            }

            let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
            if !at_boundary {
                // "3.14", "example.com", "a.m" keep going
                i = j;
                continue;
            }

            let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
            if ch == '.' && run_len == 1 && is_abbreviation(preceding_word(text, pos), &text[end..])
            {
                i = j;
                continue;
            }

            push_span(text, seg_start, end, &mut spans);
            seg_start = end;
            i = j;
        }

        push_span(text, seg_start, text.len(), &mut spans);
        spans
    }

    /// Split a sentence into lower-cased terms with punctuation stripped
    pub fn terms(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .map(|word| word.to_lowercase())
            .collect()
    }
}

/// If the newline at `i` starts a blank line, return the index of the first
/// character after the blank run.
fn blank_line_end(chars: &[(usize, char)], i: usize) -> Option<usize> {
    let mut j = i + 1;
    let mut newlines = 1;
    while j < chars.len() && chars[j].1.is_whitespace() {
        if chars[j].1 == '\n' {
            newlines += 1;
        }
        j += 1;
    }
    (newlines >= 2).then_some(j)
}

fn push_span(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    if start >= end {
        return;
    }
    let raw = &text[start..end];
    let trimmed_start = raw.trim_start();
    let lead = raw.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end();
    if trimmed.is_empty() {
        return;
    }
    spans.push(SentenceSpan {
        text: trimmed.to_string(),
        start: start + lead,
        end: start + lead + trimmed.len(),
    });
}

/// The whitespace-delimited word ending right before byte offset `pos`
fn preceding_word(text: &str, pos: usize) -> &str {
    let head = &text[..pos];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(p, c)| p + c.len_utf8());
    head[start..].trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// Whether `word` followed by a period and then `rest` continues the sentence
fn is_abbreviation(word: &str, rest: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    // Initials: "J", "U.S", "e.g", "i.e"
    if word
        .split('.')
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
    {
        return true;
    }

    if NUMERIC_ABBREVIATIONS.contains(&word) {
        return rest
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit());
    }

    if CAPITALIZED_ABBREVIATIONS.contains(&word) {
        return true;
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Tokenizer::new()
            .split_sentences(input)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            texts("The cat sat. The dog ran! Did it rain?"),
            vec!["The cat sat.", "The dog ran!", "Did it rain?"]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(texts("").is_empty());
        assert!(texts("   \n\t  ").is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(texts("just a fragment"), vec!["just a fragment"]);
    }

    #[test]
    fn test_titles_do_not_split() {
        assert_eq!(
            texts("Dr. Smith met Mrs. Jones. They talked."),
            vec!["Dr. Smith met Mrs. Jones.", "They talked."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            texts("J. R. R. Tolkien wrote books. He lived in the U.S. for a while."),
            vec![
                "J. R. R. Tolkien wrote books.",
                "He lived in the U.S. for a while."
            ]
        );
    }

    #[test]
    fn test_common_words_end_sentences() {
        assert_eq!(texts("They said no. We left."), vec!["They said no.", "We left."]);
        assert_eq!(
            texts("Prices went up by dec. Nobody cared. It was the best est. Fine."),
            vec!["Prices went up by dec.", "Nobody cared.", "It was the best est.", "Fine."]
        );
        // Single-letter words still read as initials
        assert_eq!(
            texts("They said no. We left early. The answer was B. It was late."),
            vec!["They said no.", "We left early.", "The answer was B. It was late."]
        );
    }

    #[test]
    fn test_capitalized_abbreviations_do_not_split() {
        assert_eq!(
            texts("Main St. is busy. Acme Co. sells anvils."),
            vec!["Main St. is busy.", "Acme Co. sells anvils."]
        );
    }

    #[test]
    fn test_number_abbreviation_needs_a_number() {
        assert_eq!(texts("See No. 5 on the list."), vec!["See No. 5 on the list."]);
        assert_eq!(
            texts("The answer was No. Nobody asked again."),
            vec!["The answer was No.", "Nobody asked again."]
        );
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        assert_eq!(
            texts("Pi is 3.14 roughly. Next."),
            vec!["Pi is 3.14 roughly.", "Next."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            texts("He said \"stop.\" Then he left."),
            vec!["He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_ellipsis_and_mixed_terminators() {
        assert_eq!(
            texts("Wait... Really?! Yes."),
            vec!["Wait...", "Really?!", "Yes."]
        );
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        assert_eq!(
            texts("A heading without a period\n\nBody text follows here."),
            vec!["A heading without a period", "Body text follows here."]
        );
    }

    #[test]
    fn test_single_newline_does_not_split() {
        assert_eq!(
            texts("A sentence wrapped\nacross two lines."),
            vec!["A sentence wrapped\nacross two lines."]
        );
    }

    #[test]
    fn test_offsets_point_into_source() {
        let input = "  First one.   Second one.  ";
        let spans = Tokenizer::new().split_sentences(input);
        assert_eq!(spans.len(), 2);
        for span in &spans {
            assert_eq!(&input[span.start..span.end], span.text);
        }
    }

    #[test]
    fn test_terms_lowercase_without_punctuation() {
        let terms = Tokenizer::new().terms("The Quick, brown fox -- jumps!");
        assert_eq!(terms, vec!["the", "quick", "brown", "fox", "jumps"]);
    }

    #[test]
    fn test_terms_unicode() {
        let terms = Tokenizer::new().terms("Ça va? Über café.");
        assert_eq!(terms, vec!["ça", "va", "über", "café"]);
    }
}
