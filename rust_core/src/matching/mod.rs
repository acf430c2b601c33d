//! Team Name Matching
//!
//! Text normalization shared by the alias index, the resolver and the
//! matchup parser. Everything is compared in normalized space: lower-cased,
//! punctuation stripped, whitespace collapsed.

pub mod alias_index;
pub mod resolver;

pub use alias_index::{AliasEntry, AliasForm, AliasHit, AliasIndex};
pub use resolver::{ResolveError, ResolverConfig, TeamResolver};

/// Characters that join word pieces when an alphanumeric follows ("3.5", "I'm").
const JOINERS: &[char] = &['.', '\'', '\u{2019}'];

/// Characters that end a clause. Structured patterns never cross a clause.
const CLAUSE_BREAKS: &[char] = &[',', ';', ':', '!', '?', '(', ')', '[', ']', '|', '\n'];

/// Words that are commonly written with a trailing period without ending a sentence.
const DOTTED_WORDS: &[&str] = &["vs", "v", "st", "ft", "mt", "la", "ny", "dc", "jr", "sr", "pts", "pt"];

/// A word (or the `@` symbol) in raw text, with its byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub raw: &'a str,
    pub norm: String,
    pub start: usize,
    pub end: usize,
    pub clause: usize,
}

impl Token<'_> {
    pub fn is_symbol(&self) -> bool {
        self.norm == "@"
    }

    pub fn is_numeric(&self) -> bool {
        self.norm.chars().next().map_or(false, |c| c.is_ascii_digit())
            && self.norm.chars().all(|c| c.is_ascii_digit())
    }

    /// True when every letter in the raw word is upper case ("KC", "LA").
    pub fn is_upper(&self) -> bool {
        let mut letters = self.raw.chars().filter(|c| c.is_alphabetic()).peekable();
        letters.peek().is_some() && letters.all(|c| c.is_uppercase())
    }
}

/// Split text into words with byte spans and clause numbers.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut clause = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c.is_alphanumeric() {
            let mut j = i + 1;
            while j < chars.len() {
                let next = chars[j].1;
                if next.is_alphanumeric() {
                    j += 1;
                } else if JOINERS.contains(&next)
                    && j + 1 < chars.len()
                    && chars[j + 1].1.is_alphanumeric()
                {
                    j += 2;
                } else {
                    break;
                }
            }

            let end = chars.get(j).map_or(text.len(), |(p, _)| *p);
            let raw = &text[pos..end];
            let norm: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();

            // A period right after a word ends the sentence unless the word is
            // routinely abbreviated ("vs.", "St.").
            let ends_sentence = chars.get(j).map_or(false, |(_, c)| *c == '.')
                && !DOTTED_WORDS.contains(&norm.as_str());

            tokens.push(Token {
                raw,
                norm,
                start: pos,
                end,
                clause,
            });

            if ends_sentence {
                clause += 1;
            }
            i = j;
            continue;
        }

        if c == '@' {
            tokens.push(Token {
                raw: &text[pos..pos + c.len_utf8()],
                norm: "@".to_string(),
                start: pos,
                end: pos + c.len_utf8(),
                clause,
            });
        } else if CLAUSE_BREAKS.contains(&c) {
            clause += 1;
        }
        i += 1;
    }

    tokens
}

/// Normalize a string for comparison
pub fn normalize(s: &str) -> String {
    tokenize(s)
        .into_iter()
        .filter(|t| !t.is_symbol())
        .map(|t| t.norm)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if text contains phrase as whole words (not substring of another word)
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let text_words: Vec<&str> = text.split_whitespace().collect();
    let phrase_words: Vec<&str> = phrase.split_whitespace().collect();

    if phrase_words.is_empty() {
        return false;
    }

    // Look for contiguous phrase match
    if phrase_words.len() > 1 {
        return text_words
            .windows(phrase_words.len())
            .any(|window| window == phrase_words.as_slice());
    }

    text_words.contains(&phrase_words[0])
}

/// Normalized edit similarity: 1 - levenshtein / max length.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b)
}

/// A fuzzy match is anchored when some word of the alias visibly starts a
/// word of the input: its first `prefix_len` characters, or the whole word
/// when it is shorter than that.
pub fn is_anchored(input: &str, alias: &str, prefix_len: usize) -> bool {
    let input_words: Vec<&str> = input.split_whitespace().collect();

    alias.split_whitespace().any(|word| {
        if word.chars().count() < prefix_len {
            return input_words.contains(&word);
        }
        let prefix: String = word.chars().take(prefix_len).collect();
        input_words.iter().any(|w| w.starts_with(&prefix))
    })
}
