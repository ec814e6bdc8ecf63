/*!
 * Number tokenizer.
 *
 * Finds candidate numbers in free text. The grammar is deliberately
 * permissive: a run of digits, optionally signed, with any separator glyph
 * of the side between digit runs. Whether those separators make sense is
 * decided later by the normalizer.
 */

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::policy::PolicySide;

/// ASCII digit class used in number patterns
const ASCII_DIGITS: &str = "0-9";

/// Arabic-Indic, Extended Arabic-Indic and Devanagari digits
const ALTERNATE_DIGITS: &str = r"\x{0660}-\x{0669}\x{06F0}-\x{06F9}\x{0966}-\x{096F}";

/// Hyphen-minus, plus and the Unicode minus sign
const SIGNS: &str = r"+\-\x{2212}";

/// A candidate number found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberToken {
    /// The matched text, sign included
    pub raw: String,
    /// Byte offset of the token in the text
    pub start: usize,
}

impl NumberToken {
    pub fn new(raw: impl Into<String>, start: usize) -> Self {
        Self {
            raw: raw.into(),
            start,
        }
    }
}

/// Scanner for one side of a separator policy
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compile the number pattern for a side
    pub fn new(side: &PolicySide, alternate_script: bool) -> Result<Self, regex::Error> {
        let digits = if alternate_script {
            format!("[{}{}]", ASCII_DIGITS, ALTERNATE_DIGITS)
        } else {
            format!("[{}]", ASCII_DIGITS)
        };

        let separators: Vec<String> = side.separators().iter().map(|s| regex::escape(s)).collect();

        let pattern = if separators.is_empty() {
            format!("[{}]?{}+", SIGNS, digits)
        } else {
            // Alternation is leftmost-first, so longer glyphs are listed first
            format!(
                "[{signs}]?{d}+(?:(?:{seps}){d}+)*",
                signs = SIGNS,
                d = digits,
                seps = separators.join("|")
            )
        };

        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Extract number tokens in order of appearance.
    ///
    /// `None` and empty text both yield no tokens.
    pub fn tokenize(&self, text: Option<&str>) -> Vec<NumberToken> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        let tokens: Vec<NumberToken> = self
            .pattern
            .find_iter(text)
            .map(|m| {
                let mut start = m.start();
                let mut raw = m.as_str();

                // A sign glued to a word or number is a hyphen, not a sign
                if let Some(first) = raw.chars().next().filter(|c| is_sign(*c)) {
                    let glued = text[..start]
                        .chars()
                        .next_back()
                        .is_some_and(|prev| prev.is_alphanumeric());
                    if glued {
                        start += first.len_utf8();
                        raw = &raw[first.len_utf8()..];
                    }
                }

                NumberToken::new(raw, start)
            })
            .collect();

        trace!("Tokenized {} number(s) from {:?}", tokens.len(), text);

        tokens
    }
}

/// Whether `c` is a sign that may prefix a number
pub fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-' | '\u{2212}')
}

/// Whether `c` is a digit, optionally including alternate scripts
pub fn is_digit(c: char, alternate_script: bool) -> bool {
    c.is_ascii_digit() || (alternate_script && alternate_digit_value(c).is_some())
}

/// Map any recognised digit to its ASCII form
pub fn to_ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    alternate_digit_value(c).and_then(|v| char::from_digit(v, 10))
}

fn alternate_digit_value(c: char) -> Option<u32> {
    match c {
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        '\u{0966}'..='\u{096F}' => Some(c as u32 - 0x0966),
        _ => None,
    }
}
