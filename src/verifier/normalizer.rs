/*!
 * Token normalizer.
 *
 * Turns a raw number token into a comparable value plus the structural
 * information needed to tell a content error from a formatting error:
 * the role each separator plays, the digit-group shape, and whether the
 * punctuation follows the side's conventions at all.
 *
 * The same literal can normalize to different values on the two sides of a
 * segment pair ("11,200" is eleven thousand two hundred or eleven point two),
 * which is where most diagnostics come from.
 */

use log::trace;
use serde::Serialize;

use super::policy::PolicySide;
use super::tokenizer::{self, NumberToken};

/// Number of digits in a regular thousands group
const THOUSANDS_GROUP_LEN: usize = 3;

/// Kind of separator following a digit group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeparatorKind {
    Thousands,
    Decimal,
    None,
}

/// Role assigned to one separator occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeparatorRole {
    /// Accepted thousands separator before a full group
    Thousands,
    /// Accepted decimal separator
    Decimal,
    /// Inner separator that is no valid thousands or decimal separator here
    InvalidThousands,
    /// Separator in decimal position whose glyph is not a decimal separator
    InvalidDecimal,
}

impl SeparatorRole {
    fn kind(&self) -> SeparatorKind {
        match self {
            SeparatorRole::Thousands | SeparatorRole::InvalidThousands => SeparatorKind::Thousands,
            SeparatorRole::Decimal | SeparatorRole::InvalidDecimal => SeparatorKind::Decimal,
        }
    }

    fn is_valid(&self) -> bool {
        matches!(self, SeparatorRole::Thousands | SeparatorRole::Decimal)
    }
}

/// One separator occurrence and the role it was given
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeparatorUse {
    pub glyph: String,
    pub role: SeparatorRole,
    /// Both roles accepted the glyph and the position decided
    pub ambiguous: bool,
}

/// A run of digits and the separator that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitGroup {
    pub digits: usize,
    pub separator: SeparatorKind,
}

/// Canonical signed decimal magnitude.
///
/// Leading integer zeros and trailing fraction zeros are dropped, and zero
/// carries no sign, so equal numbers compare equal whatever their spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NumericValue {
    negative: bool,
    integer: String,
    fraction: String,
}

impl NumericValue {
    /// Build from ASCII digit strings
    pub fn new(negative: bool, integer: &str, fraction: &str) -> Self {
        let integer = integer.trim_start_matches('0').to_string();
        let fraction = fraction.trim_end_matches('0').to_string();
        let negative = negative && !(integer.is_empty() && fraction.is_empty());
        Self {
            negative,
            integer,
            fraction,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl std::fmt::Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        if self.integer.is_empty() {
            write!(f, "0")?;
        } else {
            write!(f, "{}", self.integer)?;
        }
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

/// A token read under one side's separator policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedNumber {
    /// Comparable value, best effort when the token is malformed
    pub value: NumericValue,
    /// Digit-group shape
    pub groups: Vec<DigitGroup>,
    /// Separator occurrences in order
    pub separators: Vec<SeparatorUse>,
    /// The glyph in decimal position, if any, is a decimal separator of the side
    pub decimal_separator_valid: bool,
    /// Another separator follows the decimal separator
    pub separator_after_decimal: bool,
    /// Punctuation is consistent with the side's grouping conventions
    pub well_formed: bool,
    /// Raw text with digits mapped to ASCII and the sign unified
    pub sequence: String,
}

impl NormalizedNumber {
    /// The number carries a decimal separator that is valid for its side
    pub fn has_valid_decimal(&self) -> bool {
        self.separators
            .iter()
            .any(|s| s.role == SeparatorRole::Decimal)
            && self.decimal_separator_valid
    }

    /// Same group lengths and separator kinds
    pub fn same_shape(&self, other: &NormalizedNumber) -> bool {
        self.groups == other.groups
    }
}

/// Read a token under the separator roles of one side
pub fn normalize(token: &NumberToken, side: &PolicySide) -> NormalizedNumber {
    let mut chars = token.raw.chars().peekable();
    let negative = match chars.peek().copied() {
        Some(c) if tokenizer::is_sign(c) => {
            chars.next();
            c != '+'
        }
        _ => false,
    };

    // Alternate digit runs and separator runs
    let mut digit_groups: Vec<String> = vec![String::new()];
    let mut glyphs: Vec<String> = Vec::new();
    for c in chars {
        match tokenizer::to_ascii_digit(c) {
            Some(d) => {
                if digit_groups.len() == glyphs.len() {
                    digit_groups.push(String::new());
                }
                if let Some(group) = digit_groups.last_mut() {
                    group.push(d);
                }
            }
            None => {
                if glyphs.len() == digit_groups.len() {
                    if let Some(glyph) = glyphs.last_mut() {
                        glyph.push(c);
                    }
                } else {
                    glyphs.push(c.to_string());
                }
            }
        }
    }
    if digit_groups.len() == glyphs.len() {
        digit_groups.push(String::new());
    }

    let separators = assign_roles(&glyphs, &digit_groups, side);

    let decimal_at = separators
        .iter()
        .position(|s| s.role.kind() == SeparatorKind::Decimal);
    let separator_after_decimal = decimal_at.is_some_and(|i| i + 1 < separators.len());
    let decimal_separator_valid = !separators
        .iter()
        .any(|s| s.role == SeparatorRole::InvalidDecimal);

    let leading_group_ok = match separators.first() {
        Some(first) if first.role == SeparatorRole::Thousands => {
            (1..=THOUSANDS_GROUP_LEN).contains(&digit_groups[0].len())
        }
        _ => true,
    };
    let well_formed = separators.iter().all(|s| s.role.is_valid())
        && !separator_after_decimal
        && leading_group_ok
        && digit_groups.iter().all(|g| !g.is_empty());

    let (integer, fraction) = match decimal_at {
        Some(i) => (digit_groups[..=i].concat(), digit_groups[i + 1..].concat()),
        None => (digit_groups.concat(), String::new()),
    };
    let value = NumericValue::new(negative, &integer, &fraction);

    let groups = digit_groups
        .iter()
        .enumerate()
        .map(|(i, g)| DigitGroup {
            digits: g.len(),
            separator: separators
                .get(i)
                .map_or(SeparatorKind::None, |s| s.role.kind()),
        })
        .collect();

    let mut sequence = String::with_capacity(token.raw.len());
    if negative {
        sequence.push('-');
    }
    for (i, group) in digit_groups.iter().enumerate() {
        sequence.push_str(group);
        if let Some(glyph) = glyphs.get(i) {
            sequence.push_str(glyph);
        }
    }

    let number = NormalizedNumber {
        value,
        groups,
        separators,
        decimal_separator_valid,
        separator_after_decimal,
        well_formed,
        sequence,
    };

    trace!(
        "Normalized '{}' to {} (well_formed={}, decimal_valid={})",
        token.raw, number.value, number.well_formed, number.decimal_separator_valid
    );

    number
}

/// Decide the role of every separator, left to right.
///
/// `groups` always has exactly one more entry than `glyphs`.
fn assign_roles(glyphs: &[String], groups: &[String], side: &PolicySide) -> Vec<SeparatorUse> {
    let mut uses: Vec<SeparatorUse> = Vec::with_capacity(glyphs.len());
    let mut past_decimal = false;

    for (i, glyph) in glyphs.iter().enumerate() {
        let as_thousands = side.thousands.accepts(glyph);
        let as_decimal = side.decimal.accepts(glyph);
        let full_group = groups[i + 1].len() == THOUSANDS_GROUP_LEN;
        let is_last = i + 1 == glyphs.len();
        let mut ambiguous = false;

        let role = if past_decimal {
            // Everything right of the decimal point is reported, not re-read
            if as_decimal {
                SeparatorRole::Decimal
            } else if as_thousands {
                SeparatorRole::Thousands
            } else {
                SeparatorRole::InvalidThousands
            }
        } else if is_last {
            match (as_thousands, as_decimal) {
                (true, true) => {
                    ambiguous = true;
                    let mixed_glyphs = uses.iter().any(|u| u.glyph != *glyph);
                    if full_group && !mixed_glyphs {
                        SeparatorRole::Thousands
                    } else {
                        SeparatorRole::Decimal
                    }
                }
                (false, true) => SeparatorRole::Decimal,
                (_, false) if full_group => {
                    if as_thousands {
                        SeparatorRole::Thousands
                    } else {
                        SeparatorRole::InvalidThousands
                    }
                }
                (_, false) => SeparatorRole::InvalidDecimal,
            }
        } else if as_thousands && full_group {
            ambiguous = as_decimal;
            SeparatorRole::Thousands
        } else if as_decimal {
            SeparatorRole::Decimal
        } else {
            SeparatorRole::InvalidThousands
        };

        if role.kind() == SeparatorKind::Decimal {
            past_decimal = true;
        }

        uses.push(SeparatorUse {
            glyph: glyph.clone(),
            role,
            ambiguous,
        });
    }

    uses
}
