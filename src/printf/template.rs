// ============================================================================
// Format Template
// Single-directive printf template: parsing and rendering
// ============================================================================

use super::errors::{FormatError, FormatResult};
use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// Upper bound for width and precision
const MAX_FIELD: usize = 4096;

/// Precision used by `%f` when none is given
const DEFAULT_FLOAT_PRECISION: usize = 6;

type Chars<'a> = Peekable<CharIndices<'a>>;

// ============================================================================
// Directive
// ============================================================================

/// Supported conversion letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `%d` - integer, fraction truncated toward zero
    Decimal,
    /// `%x` - lowercase hexadecimal
    LowerHex,
    /// `%X` - uppercase hexadecimal
    UpperHex,
    /// `%f` - fixed-point decimal
    Float,
}

impl Conversion {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Conversion::Decimal),
            'x' => Some(Conversion::LowerHex),
            'X' => Some(Conversion::UpperHex),
            'f' => Some(Conversion::Float),
            _ => None,
        }
    }

    /// The conversion letter as written in a template.
    pub fn as_char(self) -> char {
        match self {
            Conversion::Decimal => 'd',
            Conversion::LowerHex => 'x',
            Conversion::UpperHex => 'X',
            Conversion::Float => 'f',
        }
    }
}

/// Directive flags (`-`, `+`, space, `0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    pub left_align: bool,
    pub force_sign: bool,
    pub space_sign: bool,
    pub zero_pad: bool,
}

/// One parsed `%[flags][width][.precision]conversion` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

impl Directive {
    /// Parse the directive whose `%` sits at `position`; `chars` starts right after it.
    fn parse(position: usize, chars: &mut Chars<'_>) -> FormatResult<Self> {
        let mut flags = Flags::default();
        while let Some((_, flag)) = chars.next_if(|&(_, c)| matches!(c, '-' | '+' | ' ' | '0')) {
            match flag {
                '-' => flags.left_align = true,
                '+' => flags.force_sign = true,
                ' ' => flags.space_sign = true,
                _ => flags.zero_pad = true,
            }
        }

        let width = parse_field(position, chars)?;
        let precision = match chars.next_if(|&(_, c)| c == '.') {
            Some(_) => Some(parse_field(position, chars)?.unwrap_or(0)),
            None => None,
        };

        let conversion = match chars.next() {
            Some((_, c)) => Conversion::from_char(c).ok_or(FormatError::UnknownConversion {
                position,
                conversion: c,
            })?,
            None => return Err(FormatError::IncompleteDirective { position }),
        };

        Ok(Self {
            flags,
            width,
            precision,
            conversion,
        })
    }

    /// Render `n` according to this directive.
    pub fn render(&self, n: f64) -> String {
        let (negative, body, finite) = if n.is_finite() {
            let (negative, digits) = self.digits(n);
            (negative, digits, true)
        } else {
            (n.is_sign_negative() && !n.is_nan(), self.non_finite(n), false)
        };

        let sign = if negative {
            "-"
        } else if self.flags.force_sign {
            "+"
        } else if self.flags.space_sign {
            " "
        } else {
            ""
        };

        let len = sign.len() + body.len();
        let width = self.width.unwrap_or(0);
        if len >= width {
            return format!("{}{}", sign, body);
        }

        let pad = width - len;
        if self.flags.left_align {
            format!("{}{}{}", sign, body, " ".repeat(pad))
        } else if finite && self.zero_pads() {
            format!("{}{}{}", sign, "0".repeat(pad), body)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, body)
        }
    }

    // A precision on integer conversions disables the `0` flag, as in C
    fn zero_pads(&self) -> bool {
        self.flags.zero_pad && (self.conversion == Conversion::Float || self.precision.is_none())
    }

    /// Sign and unsigned digits of a finite value.
    fn digits(&self, n: f64) -> (bool, String) {
        if self.conversion == Conversion::Float {
            let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
            return (n.is_sign_negative(), format!("{:.*}", precision, n.abs()));
        }

        // Saturates outside the i128 range
        let value = n.trunc() as i128;
        let magnitude = value.unsigned_abs();
        let digits = match self.conversion {
            Conversion::LowerHex => format!("{:x}", magnitude),
            Conversion::UpperHex => format!("{:X}", magnitude),
            _ => magnitude.to_string(),
        };

        let digits = match self.precision {
            Some(0) if magnitude == 0 => String::new(),
            Some(min) if digits.len() < min => format!("{:0>width$}", digits, width = min),
            _ => digits,
        };

        (value < 0, digits)
    }

    fn non_finite(&self, n: f64) -> String {
        let text = if n.is_nan() { "nan" } else { "inf" };
        if self.conversion == Conversion::UpperHex {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

fn parse_field(position: usize, chars: &mut Chars<'_>) -> FormatResult<Option<usize>> {
    let mut value: Option<usize> = None;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = (c as u8 - b'0') as usize;
        let next = value.unwrap_or(0) * 10 + digit;
        if next > MAX_FIELD {
            return Err(FormatError::FieldTooLarge { position });
        }
        value = Some(next);
    }
    Ok(value)
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.flags.left_align {
            f.write_str("-")?;
        }
        if self.flags.force_sign {
            f.write_str("+")?;
        }
        if self.flags.space_sign {
            f.write_str(" ")?;
        }
        if self.flags.zero_pad {
            f.write_str("0")?;
        }
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        write!(f, "{}", self.conversion.as_char())
    }
}

// ============================================================================
// Template
// ============================================================================

/// A parsed template: literal prefix, exactly one directive, literal suffix.
///
/// Parse once, then [`render`](Self::render) per value.
///
/// # Example
/// ```
/// use increment::printf::FormatTemplate;
///
/// let template = FormatTemplate::parse("item-%03d")?;
/// assert_eq!(template.render(7.0), "item-007");
/// assert_eq!(template.render(42.9), "item-042");
/// # Ok::<(), increment::printf::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatTemplate {
    prefix: String,
    directive: Directive,
    suffix: String,
}

impl FormatTemplate {
    /// Parse a template containing exactly one numeric directive.
    ///
    /// `%%` is a literal percent sign.
    ///
    /// # Errors
    /// - `MissingDirective` if there is no directive
    /// - `MultipleDirectives` if there is more than one
    /// - `UnknownConversion`, `IncompleteDirective`, `FieldTooLarge` for a
    ///   malformed directive
    pub fn parse(template: &str) -> FormatResult<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut directive = None;
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            let literal = if directive.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };

            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.next_if(|&(_, c)| c == '%').is_some() {
                literal.push('%');
                continue;
            }

            let parsed = Directive::parse(position, &mut chars)?;
            if directive.is_some() {
                return Err(FormatError::MultipleDirectives { position });
            }
            directive = Some(parsed);
        }

        let directive = directive.ok_or(FormatError::MissingDirective)?;
        Ok(Self {
            prefix,
            directive,
            suffix,
        })
    }

    /// The parsed directive.
    pub fn directive(&self) -> &Directive {
        &self.directive
    }

    /// Substitute `n` into the template.
    pub fn render(&self, n: f64) -> String {
        let body = self.directive.render(n);
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&body);
        out.push_str(&self.suffix);
        out
    }
}

impl FromStr for FormatTemplate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix.replace('%', "%%"),
            self.directive,
            self.suffix.replace('%', "%%")
        )
    }
}
