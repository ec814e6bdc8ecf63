/*!
 * Separator policy: which glyphs act as thousands and decimal separators
 * on each side of a segment pair.
 *
 * A policy is validated and compiled once, then shared read-only by every
 * comparison. Several glyphs may be valid for the same role at once; which
 * role a glyph plays inside a particular number is decided per token by
 * the normalizer.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

use super::tokenizer::{self, Tokenizer};

/// Side of a segment pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The original text
    Source,
    /// The translation
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

/// Glyphs accepted for one separator role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorSpec {
    /// Accept ","
    #[serde(default)]
    pub comma: bool,

    /// Accept "."
    #[serde(default)]
    pub period: bool,

    /// Accept a user-defined glyph (for example a space or a letter)
    #[serde(default)]
    pub custom: Option<String>,
}

impl SeparatorSpec {
    /// Create a spec with the standard glyphs only
    pub fn new(comma: bool, period: bool) -> Self {
        Self {
            comma,
            period,
            custom: None,
        }
    }

    /// Create a spec with an additional custom glyph
    pub fn with_custom(comma: bool, period: bool, custom: &str) -> Self {
        Self {
            comma,
            period,
            custom: Some(custom.to_string()),
        }
    }

    /// Custom glyph, with the empty string treated as absent
    pub fn custom_glyph(&self) -> Option<&str> {
        self.custom.as_deref().filter(|c| !c.is_empty())
    }

    /// All glyphs accepted by this spec
    pub fn glyphs(&self) -> Vec<&str> {
        let mut glyphs = Vec::with_capacity(3);
        if self.comma {
            glyphs.push(",");
        }
        if self.period {
            glyphs.push(".");
        }
        if let Some(custom) = self.custom_glyph() {
            if !glyphs.contains(&custom) {
                glyphs.push(custom);
            }
        }
        glyphs
    }

    /// Whether `glyph` is accepted for this role
    pub fn accepts(&self, glyph: &str) -> bool {
        match glyph {
            "," if self.comma => true,
            "." if self.period => true,
            _ => self.custom_glyph() == Some(glyph),
        }
    }

    /// True when no glyph is accepted
    pub fn is_empty(&self) -> bool {
        self.glyphs().is_empty()
    }
}

/// Whether reformatting a number for the target locale is acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalizationMode {
    /// Target numbers must be written exactly as in the source
    Disabled,
    /// Target numbers may follow the target convention
    #[default]
    Allowed,
    /// Compares like `Allowed`; building the policy also requires a decimal separator
    Required,
}

impl LocalizationMode {
    /// Whether a value-preserving change of separators is acceptable
    pub fn permits_reformatting(&self) -> bool {
        !matches!(self, LocalizationMode::Disabled)
    }
}

impl std::fmt::Display for LocalizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalizationMode::Disabled => write!(f, "disabled"),
            LocalizationMode::Allowed => write!(f, "allowed"),
            LocalizationMode::Required => write!(f, "required"),
        }
    }
}

/// Separator roles for one side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySide {
    /// Glyphs accepted as thousands separators
    #[serde(default)]
    pub thousands: SeparatorSpec,

    /// Glyphs accepted as decimal separators
    #[serde(default)]
    pub decimal: SeparatorSpec,
}

impl PolicySide {
    /// Create a side from its two specs
    pub fn new(thousands: SeparatorSpec, decimal: SeparatorSpec) -> Self {
        Self { thousands, decimal }
    }

    /// Every glyph that may appear inside a number on this side, longest first
    pub fn separators(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self.thousands.glyphs();
        for glyph in self.decimal.glyphs() {
            if !all.contains(&glyph) {
                all.push(glyph);
            }
        }
        all.sort_by(|a, b| b.len().cmp(&a.len()));
        all
    }

    fn validate(&self, side: Side) -> Result<(), PolicyError> {
        for custom in [self.thousands.custom_glyph(), self.decimal.custom_glyph()]
            .into_iter()
            .flatten()
        {
            if custom
                .chars()
                .any(|c| tokenizer::is_digit(c, true) || tokenizer::is_sign(c))
            {
                return Err(PolicyError::InvalidCustomSeparator {
                    side,
                    separator: custom.to_string(),
                });
            }
        }

        let thousands = self.thousands.glyphs();
        let decimal = self.decimal.glyphs();
        if thousands.len() == 1 && decimal.len() == 1 && thousands[0] == decimal[0] {
            return Err(PolicyError::AmbiguousSeparator {
                side,
                separator: thousands[0].to_string(),
            });
        }

        Ok(())
    }
}

/// Validated, immutable separator configuration for both sides
#[derive(Debug, Clone)]
pub struct SeparatorPolicy {
    source: PolicySide,
    target: PolicySide,
    localization_mode: LocalizationMode,
    alternate_script_enabled: bool,
    source_tokenizer: Tokenizer,
    target_tokenizer: Tokenizer,
}

impl SeparatorPolicy {
    /// Validate the configuration and compile the per-side tokenizers
    pub fn new(
        source: PolicySide,
        target: PolicySide,
        localization_mode: LocalizationMode,
        alternate_script_enabled: bool,
    ) -> Result<Self, PolicyError> {
        source.validate(Side::Source)?;
        target.validate(Side::Target)?;

        if localization_mode == LocalizationMode::Required
            && source.decimal.is_empty()
            && target.decimal.is_empty()
        {
            return Err(PolicyError::NothingToLocalize);
        }

        let source_tokenizer = Tokenizer::new(&source, alternate_script_enabled).map_err(|e| {
            PolicyError::Pattern {
                side: Side::Source,
                message: e.to_string(),
            }
        })?;
        let target_tokenizer = Tokenizer::new(&target, alternate_script_enabled).map_err(|e| {
            PolicyError::Pattern {
                side: Side::Target,
                message: e.to_string(),
            }
        })?;

        debug!(
            "Separator policy: source={:?}, target={:?}, localization={}, alternate_script={}",
            source.separators(),
            target.separators(),
            localization_mode,
            alternate_script_enabled
        );

        Ok(Self {
            source,
            target,
            localization_mode,
            alternate_script_enabled,
            source_tokenizer,
            target_tokenizer,
        })
    }

    /// Start a fluent builder with no separators and localization allowed
    pub fn builder() -> SeparatorPolicyBuilder {
        SeparatorPolicyBuilder::default()
    }

    /// Source side roles
    pub fn source(&self) -> &PolicySide {
        &self.source
    }

    /// Target side roles
    pub fn target(&self) -> &PolicySide {
        &self.target
    }

    /// Roles for the given side
    pub fn side(&self, side: Side) -> &PolicySide {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    /// Tokenizer compiled for the given side
    pub fn tokenizer(&self, side: Side) -> &Tokenizer {
        match side {
            Side::Source => &self.source_tokenizer,
            Side::Target => &self.target_tokenizer,
        }
    }

    pub fn localization_mode(&self) -> LocalizationMode {
        self.localization_mode
    }

    pub fn alternate_script_enabled(&self) -> bool {
        self.alternate_script_enabled
    }
}

/// Fluent construction of a [`SeparatorPolicy`]
#[derive(Debug, Clone, Default)]
pub struct SeparatorPolicyBuilder {
    source: PolicySide,
    target: PolicySide,
    localization_mode: LocalizationMode,
    alternate_script_enabled: bool,
}

impl SeparatorPolicyBuilder {
    pub fn require_localization(mut self) -> Self {
        self.localization_mode = LocalizationMode::Required;
        self
    }

    pub fn allow_localization(mut self) -> Self {
        self.localization_mode = LocalizationMode::Allowed;
        self
    }

    pub fn disable_localization(mut self) -> Self {
        self.localization_mode = LocalizationMode::Disabled;
        self
    }

    pub fn localization_mode(mut self, mode: LocalizationMode) -> Self {
        self.localization_mode = mode;
        self
    }

    pub fn source_thousands(self, comma: bool, period: bool) -> Self {
        self.source_thousands_spec(SeparatorSpec::new(comma, period))
    }

    pub fn source_thousands_custom(self, comma: bool, period: bool, custom: &str) -> Self {
        self.source_thousands_spec(SeparatorSpec::with_custom(comma, period, custom))
    }

    pub fn source_thousands_spec(mut self, spec: SeparatorSpec) -> Self {
        self.source.thousands = spec;
        self
    }

    pub fn source_decimal(self, comma: bool, period: bool) -> Self {
        self.source_decimal_spec(SeparatorSpec::new(comma, period))
    }

    pub fn source_decimal_custom(self, comma: bool, period: bool, custom: &str) -> Self {
        self.source_decimal_spec(SeparatorSpec::with_custom(comma, period, custom))
    }

    pub fn source_decimal_spec(mut self, spec: SeparatorSpec) -> Self {
        self.source.decimal = spec;
        self
    }

    pub fn target_thousands(self, comma: bool, period: bool) -> Self {
        self.target_thousands_spec(SeparatorSpec::new(comma, period))
    }

    pub fn target_thousands_custom(self, comma: bool, period: bool, custom: &str) -> Self {
        self.target_thousands_spec(SeparatorSpec::with_custom(comma, period, custom))
    }

    pub fn target_thousands_spec(mut self, spec: SeparatorSpec) -> Self {
        self.target.thousands = spec;
        self
    }

    pub fn target_decimal(self, comma: bool, period: bool) -> Self {
        self.target_decimal_spec(SeparatorSpec::new(comma, period))
    }

    pub fn target_decimal_custom(self, comma: bool, period: bool, custom: &str) -> Self {
        self.target_decimal_spec(SeparatorSpec::with_custom(comma, period, custom))
    }

    pub fn target_decimal_spec(mut self, spec: SeparatorSpec) -> Self {
        self.target.decimal = spec;
        self
    }

    /// Recognise Arabic-Indic and Devanagari digits
    pub fn alternate_script_digits(mut self, enabled: bool) -> Self {
        self.alternate_script_enabled = enabled;
        self
    }

    /// Validate and freeze the policy
    pub fn build(self) -> Result<SeparatorPolicy, PolicyError> {
        SeparatorPolicy::new(
            self.source,
            self.target,
            self.localization_mode,
            self.alternate_script_enabled,
        )
    }
}
