//! Lenient numeric parsing with C `atoi`/`atof` prefix semantics.
//!
//! Both parsers take the longest valid numeric prefix of the input and
//! ignore whatever follows it. Input with no valid prefix is zero, never an
//! error. This looseness is part of the CLI contract, so it is implemented
//! explicitly here instead of being left to whatever a conversion routine
//! happens to do.

/// Parse the longest decimal-integer prefix of `input`.
///
/// Skips leading ASCII whitespace, consumes an optional sign, then the
/// longest run of decimal digits. No digits means 0. A prefix that does not
/// fit `i64` clamps to `i64::MIN` / `i64::MAX` (`strtol` clamping).
#[must_use]
pub fn parse_int_lenient(input: &str) -> i64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut i = 0;
    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if i == digits_start {
        return 0;
    }

    s[..i]
        .parse()
        .unwrap_or_else(|_| if negative { i64::MIN } else { i64::MAX })
}

/// Parse the longest decimal floating-point prefix of `input`.
///
/// Skips leading ASCII whitespace, consumes an optional sign, then the
/// longest prefix matching `digits [. digits] [(e|E) [sign] digits]` where
/// either digit run around the point may be empty but not both. No such
/// prefix means 0.0. `strtod`'s hex-float and `inf`/`nan` spellings are not
/// recognized.
#[must_use]
pub fn parse_float_lenient(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        frac_digits = j - i - 1;
        // A bare "." (or sign-dot) is not a number; leave it unconsumed.
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows the marker.
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().unwrap_or(0.0)
}
