// ============================================================================
// Printf Module
// printf-style rendering of a single number into a template
// ============================================================================
//
// Recognized directives: %d, %x, %X, %f with optional flags (- + space 0),
// width and precision. Literal text around the directive passes through;
// %% is a literal percent sign.

mod errors;
mod template;

pub use errors::{FormatError, FormatResult};
pub use template::{Conversion, Directive, Flags, FormatTemplate};

/// Substitute `n` into the single directive of `template`.
///
/// # Errors
/// Returns a [`FormatError`] when the template does not hold exactly one
/// valid directive.
///
/// # Example
/// ```
/// use increment::printf::format;
///
/// assert_eq!(format("0x%02x", 10.0).unwrap(), "0x0a");
/// assert!(format("%d%d", 1.0).is_err());
/// ```
pub fn format(template: &str, n: f64) -> FormatResult<String> {
    Ok(FormatTemplate::parse(template)?.render(n))
}

/// Whether applying `template` to `1` produces something other than the
/// template text itself.
///
/// Advisory only. Strict parsing already rejects every template this flags,
/// so `false` means [`FormatTemplate::parse`] fails for the same text.
pub fn template_is_effective(template: &str) -> bool {
    match format(template, 1.0) {
        Ok(rendered) => rendered != template,
        Err(_) => false,
    }
}
