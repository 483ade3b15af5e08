//! Size-value language.
//!
//! Every sizing property of a [`LayoutSpec`](crate::style::LayoutSpec)
//! (`width`, `min_height`, `flex_basis`, ...) is a [`SizeValue`]. Values come
//! from numbers or from short strings:
//!
//! | Source             | Value                                  |
//! |--------------------|----------------------------------------|
//! | `120`, `"120"`, `"120px"` | [`SizeValue::Fixed`]            |
//! | `"50%"`            | [`SizeValue::Percent`]                 |
//! | `"10vw"`, `"25vh"` | [`SizeValue::Viewport`]                |
//! | `"calc(100% - 40px)"` | [`SizeValue::Calc`]                 |
//! | `"auto"` or absent | [`SizeValue::Auto`]                    |
//!
//! # Example
//!
//! ```
//! use scene_layout::context::Viewport;
//! use scene_layout::size::SizeValue;
//!
//! let viewport = Viewport::new(1280.0, 720.0);
//!
//! let half: SizeValue = "50%".parse().unwrap();
//! assert_eq!(half.resolve(Some(300.0), None, viewport), 150.0);
//!
//! let inset = SizeValue::parse("calc(100% - 40px)").unwrap();
//! assert_eq!(inset.resolve(Some(500.0), None, viewport), 460.0);
//! ```

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::context::Viewport;

/// Result of resolving a percentage or `auto` with nothing to resolve against.
pub const UNRESOLVED_FALLBACK: f32 = 100.0;

/// Result of resolving a percentage term inside `calc()` with no reference.
///
/// Not [`UNRESOLVED_FALLBACK`]: `calc(100% - 40px)` with no parent is `-40`,
/// never `60`.
pub const CALC_UNRESOLVED_PERCENT: f32 = 0.0;

/// Error returned when a size string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeParseError {
    /// Not a number, unit or keyword this language knows.
    #[error("unrecognised size value `{input}`")]
    Malformed {
        /// The offending string.
        input: String,
    },

    /// Percentages must be zero or positive.
    #[error("negative percentage `{input}` is not allowed")]
    NegativePercent {
        /// The offending string.
        input: String,
    },

    /// `calc(...)` that is not exactly `term op term`.
    #[error("invalid calc expression `{input}`")]
    InvalidCalc {
        /// The offending string.
        input: String,
    },
}

impl SizeParseError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input }
            | Self::NegativePercent { input }
            | Self::InvalidCalc { input } => input,
        }
    }
}

/// Which viewport extent a `vw`/`vh` value refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewportAxis {
    /// `vw`
    Width,
    /// `vh`
    Height,
}

impl ViewportAxis {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Width => "vw",
            Self::Height => "vh",
        }
    }
}

/// Binary operator of a `calc()` expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalcOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl CalcOp {
    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The operator's source character.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator. Division by zero yields zero.
    pub fn apply(self, left: f32, right: f32) -> f32 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div if right == 0.0 => 0.0,
            Self::Div => left / right,
        }
    }
}

/// One operand of a `calc()` expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CalcTerm {
    /// Pixels.
    Fixed(f32),
    /// Percentage of the reference extent.
    Percent(f32),
    /// Percentage of a viewport extent.
    Viewport(ViewportAxis, f32),
}

impl CalcTerm {
    fn resolve(self, reference: Option<f32>, viewport: Viewport) -> f32 {
        match self {
            Self::Fixed(value) => value,
            Self::Percent(percent) => {
                reference.map_or(CALC_UNRESOLVED_PERCENT, |r| r * percent / 100.0)
            }
            Self::Viewport(axis, value) => value / 100.0 * viewport.extent(axis),
        }
    }
}

impl fmt::Display for CalcTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}px"),
            Self::Percent(value) => write!(f, "{value}%"),
            Self::Viewport(axis, value) => write!(f, "{value}{}", axis.suffix()),
        }
    }
}

/// A parsed `calc(left op right)` expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalcExpr {
    /// Left operand.
    pub left: CalcTerm,
    /// Operator.
    pub op: CalcOp,
    /// Right operand.
    pub right: CalcTerm,
}

impl CalcExpr {
    /// Resolves both terms against the same reference and combines them.
    pub fn resolve(&self, reference: Option<f32>, viewport: Viewport) -> f32 {
        self.op.apply(
            self.left.resolve(reference, viewport),
            self.right.resolve(reference, viewport),
        )
    }

    fn has_percent(&self) -> bool {
        matches!(self.left, CalcTerm::Percent(_)) || matches!(self.right, CalcTerm::Percent(_))
    }

    fn max_percent(&self) -> f32 {
        let percent = |term: CalcTerm| match term {
            CalcTerm::Percent(value) => value,
            _ => 0.0,
        };
        percent(self.left).max(percent(self.right))
    }
}

/// A sizing value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSize", into = "RawSize"))]
pub enum SizeValue {
    /// Content-driven size.
    #[default]
    Auto,

    /// Absolute pixels. Negative values are accepted and read as zero by the
    /// layout algorithm.
    Fixed(f32),

    /// Percentage of the nearest known content-area on the same axis.
    Percent(f32),

    /// Percentage of a viewport extent.
    Viewport(ViewportAxis, f32),

    /// A single binary `calc()` expression.
    Calc(CalcExpr),
}

impl SizeValue {
    /// Shorthand for [`SizeValue::Fixed`].
    pub const fn px(value: f32) -> Self {
        Self::Fixed(value)
    }

    /// Shorthand for [`SizeValue::Percent`].
    pub const fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Shorthand for `Nvw`.
    pub const fn vw(value: f32) -> Self {
        Self::Viewport(ViewportAxis::Width, value)
    }

    /// Shorthand for `Nvh`.
    pub const fn vh(value: f32) -> Self {
        Self::Viewport(ViewportAxis::Height, value)
    }

    /// Parses a size string.
    ///
    /// Surrounding whitespace is ignored. Percentages above 100 are accepted
    /// and reported through a `warn` event.
    ///
    /// # Errors
    ///
    /// Returns [`SizeParseError`] naming the input when it is not a number,
    /// a known unit, `auto`, or a single-operator `calc()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scene_layout::size::{SizeParseError, SizeValue};
    ///
    /// assert_eq!(SizeValue::parse("auto"), Ok(SizeValue::Auto));
    /// assert_eq!(SizeValue::parse("120px"), Ok(SizeValue::Fixed(120.0)));
    /// assert!(matches!(
    ///     SizeValue::parse("-5%"),
    ///     Err(SizeParseError::NegativePercent { .. })
    /// ));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, SizeParseError> {
        let text = raw.trim();

        if text.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        let value = if text.starts_with("calc") {
            parse_calc(text).ok_or_else(|| SizeParseError::InvalidCalc {
                input: raw.to_owned(),
            })?
        } else {
            match parse_term(text) {
                Ok(CalcTerm::Fixed(value)) => Self::Fixed(value),
                Ok(CalcTerm::Percent(value)) => Self::Percent(value),
                Ok(CalcTerm::Viewport(axis, value)) => Self::Viewport(axis, value),
                Err(TermError::NegativePercent) => {
                    return Err(SizeParseError::NegativePercent {
                        input: raw.to_owned(),
                    })
                }
                Err(TermError::Malformed) => {
                    return Err(SizeParseError::Malformed {
                        input: raw.to_owned(),
                    })
                }
            }
        };

        if value.exceeds_full_percent() {
            tracing::warn!(input = raw, "percentage above 100% accepted");
        }

        Ok(value)
    }

    /// Converts an optional raw prop value. `None` means `auto`.
    ///
    /// # Errors
    ///
    /// Fails for unparseable strings and non-finite numbers.
    pub fn from_raw(raw: Option<&RawSize>) -> Result<Self, SizeParseError> {
        match raw {
            None => Ok(Self::Auto),
            Some(RawSize::Number(number)) => {
                // Layout runs in f32; prop numbers are pixel counts.
                #[allow(clippy::cast_possible_truncation)]
                let value = *number as f32;
                if value.is_finite() {
                    Ok(Self::Fixed(value))
                } else {
                    Err(SizeParseError::Malformed {
                        input: number.to_string(),
                    })
                }
            }
            Some(RawSize::Text(text)) => Self::parse(text),
        }
    }

    /// Resolves the value to pixels.
    ///
    /// - `reference`: extent of the percentage basis on this axis, if known.
    /// - `content`: content-driven size, if known.
    ///
    /// A lone percentage with no reference falls back to `content`, then to
    /// [`UNRESOLVED_FALLBACK`]; inside `calc()` an unresolved percentage is
    /// [`CALC_UNRESOLVED_PERCENT`].
    pub fn resolve(&self, reference: Option<f32>, content: Option<f32>, viewport: Viewport) -> f32 {
        match *self {
            Self::Auto => content.unwrap_or(UNRESOLVED_FALLBACK),
            Self::Fixed(value) => value,
            Self::Percent(percent) => match (reference, content) {
                (Some(reference), _) => reference * percent / 100.0,
                (None, Some(content)) => content,
                (None, None) => UNRESOLVED_FALLBACK,
            },
            Self::Viewport(axis, value) => value / 100.0 * viewport.extent(axis),
            Self::Calc(expr) => expr.resolve(reference, viewport),
        }
    }

    /// Resolves an explicit value against a known reference; `None` for `auto`.
    pub fn resolve_explicit(&self, reference: f32, viewport: Viewport) -> Option<f32> {
        self.is_explicit()
            .then(|| self.resolve(Some(reference), None, viewport))
    }

    /// `true` when the value cannot be resolved without a parent extent.
    pub fn requires_parent(&self) -> bool {
        match self {
            Self::Percent(_) => true,
            Self::Calc(expr) => expr.has_percent(),
            _ => false,
        }
    }

    /// `true` for every value except `auto`.
    pub const fn is_explicit(&self) -> bool {
        !self.is_auto()
    }

    /// `true` for `auto`.
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// `true` when a percentage above 100 appears in the value.
    pub fn exceeds_full_percent(&self) -> bool {
        match self {
            Self::Percent(value) => *value > 100.0,
            Self::Calc(expr) => expr.max_percent() > 100.0,
            _ => false,
        }
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(value) => write!(f, "{value}px"),
            Self::Percent(value) => write!(f, "{value}%"),
            Self::Viewport(axis, value) => write!(f, "{value}{}", axis.suffix()),
            Self::Calc(expr) => write!(
                f,
                "calc({} {} {})",
                expr.left,
                expr.op.symbol(),
                expr.right
            ),
        }
    }
}

impl FromStr for SizeValue {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<f32> for SizeValue {
    fn from(value: f32) -> Self {
        Self::Fixed(value)
    }
}

/// A size as it arrives from declarative props: a number or a string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawSize {
    /// A pixel count.
    Number(f64),
    /// A size string.
    Text(String),
}

impl TryFrom<RawSize> for SizeValue {
    type Error = SizeParseError;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        Self::from_raw(Some(&raw))
    }
}

impl From<SizeValue> for RawSize {
    fn from(value: SizeValue) -> Self {
        match value {
            SizeValue::Fixed(pixels) => Self::Number(f64::from(pixels)),
            other => Self::Text(other.to_string()),
        }
    }
}

enum TermError {
    Malformed,
    NegativePercent,
}

fn parse_number(text: &str) -> Option<f32> {
    if text.is_empty() {
        return None;
    }
    text.parse::<f32>().ok().filter(|value| value.is_finite())
}

fn parse_term(text: &str) -> Result<CalcTerm, TermError> {
    if let Some(number) = text.strip_suffix('%') {
        let value = parse_number(number).ok_or(TermError::Malformed)?;
        if value < 0.0 {
            return Err(TermError::NegativePercent);
        }
        return Ok(CalcTerm::Percent(value));
    }

    for axis in [ViewportAxis::Width, ViewportAxis::Height] {
        if let Some(number) = text.strip_suffix(axis.suffix()) {
            let value = parse_number(number).ok_or(TermError::Malformed)?;
            return Ok(CalcTerm::Viewport(axis, value));
        }
    }

    let number = text.strip_suffix("px").unwrap_or(text);
    parse_number(number)
        .map(CalcTerm::Fixed)
        .ok_or(TermError::Malformed)
}

/// Parses `calc(left op right)`.
///
/// The operator is the first `+ - * /` that follows a complete left operand,
/// so signs and exponents inside numbers are not mistaken for it.
fn parse_calc(text: &str) -> Option<SizeValue> {
    let inner = text
        .strip_prefix("calc")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .trim();

    for (index, symbol) in inner.char_indices() {
        let Some(op) = CalcOp::from_symbol(symbol) else {
            continue;
        };
        let (left, rest) = inner.split_at(index);
        let left = left.trim();
        let ends_operand = left
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '%' || c == '.');
        if !ends_operand {
            continue;
        }
        let Some(right) = rest.get(symbol.len_utf8()..) else {
            continue;
        };
        if let (Ok(left), Ok(right)) = (parse_term(left), parse_term(right.trim())) {
            return Some(SizeValue::Calc(CalcExpr { left, op, right }));
        }
    }

    None
}
