/// Formats a finite double as the display string of the calculator.
///
/// Three shapes are produced:
/// - scientific notation with six mantissa digits and a signed two-digit
///   exponent, for magnitudes at or above `1e10` and nonzero magnitudes
///   below `1e-4`;
/// - a plain integer, for integral values;
/// - a decimal with at most ten fractional digits and no trailing zeros,
///   for everything else.
///
/// The ten-digit rounding absorbs the usual floating point noise, so
/// `0.1 + 0.2` displays as `0.3`. Formatting is idempotent: feeding a
/// formatted string back through the engine yields the same string.
///
/// # Example
/// ```
/// use tally::engine::format::format_value;
///
/// assert_eq!(format_value(42.0), "42");
/// assert_eq!(format_value(0.1 + 0.2), "0.3");
/// assert_eq!(format_value(1.5e12), "1.500000E+12");
/// assert_eq!(format_value(1e-5), "1.000000E-05");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude >= 1e10 || (magnitude < 1e-4 && value != 0.0) {
        return format_scientific(value);
    }

    if value == value.trunc() {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.10}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats a double in normalized scientific notation.
fn format_scientific(value: f64) -> String {
    // "{:.6E}" prints the exponent bare ("E12"); the display wants it
    // signed and at least two digits wide ("E+12").
    let raw = format!("{value:.6E}");

    match raw.split_once('E') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);

            format!("{mantissa}E{exponent:+03}")
        },

        None => raw,
    }
}
