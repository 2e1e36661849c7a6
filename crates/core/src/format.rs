//! Display formatting shared by every result surface (conversions, orbits, calculator).
//!
//! Values at or above one million, or below one thousandth, switch to exponential
//! notation with three fractional digits (`1.235e+6`). Everything else is printed in
//! fixed notation with up to six fractional digits and `,` grouping of the integer part.

const EXPONENTIAL_ABOVE: f64 = 1.0e6;
const EXPONENTIAL_BELOW: f64 = 1.0e-3;
const EXPONENT_DIGITS: usize = 3;
const MAX_FRACTION_DIGITS: usize = 6;
// Longest exact decimal expansion of an f64 (subnormals), in significant digits.
const EXACT_SIGNIFICANT_DIGITS: usize = 767;

/// Format a computed value for display.
pub fn format(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = x.abs();
    if magnitude >= EXPONENTIAL_ABOVE || magnitude < EXPONENTIAL_BELOW {
        exponential(x, EXPONENT_DIGITS)
    } else {
        fixed(x, MAX_FRACTION_DIGITS)
    }
}

/// Render a raw entry buffer as typed, grouping the integer part and keeping the
/// fractional digits verbatim (`"1234.50"` becomes `"1,234.50"`).
pub fn display_entry(buffer: &str) -> String {
    let (int_part, frac_part) = match buffer.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (buffer, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let integer = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = digits.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        format!("{sign}{}", group_thousands(trimmed))
    } else {
        // results such as `NaN` or `inf` land in the buffer verbatim
        match buffer.parse::<f64>() {
            Ok(value) if !value.is_finite() => return format(value),
            _ => String::new(),
        }
    };

    match frac_part {
        Some(frac) => format!("{integer}.{frac}"),
        None => integer,
    }
}

/// Insert `,` separators every three digits, counting from the right.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn exponential(x: f64, digits: usize) -> String {
    // Exact expansion, so only the explicit rounding below applies.
    let raw = format!("{:.prec$e}", x.abs(), prec = EXACT_SIGNIFICANT_DIGITS);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or_default();
    let all_digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let mut kept = round_half_up(&all_digits, digits + 1);
    if kept.len() > digits + 1 {
        kept.truncate(digits + 1);
        exponent += 1;
    }

    let sign = if x.is_sign_negative() { "-" } else { "" };
    let (lead, rest) = kept.split_at(1);
    if rest.is_empty() {
        format!("{sign}{lead}e{exponent:+}")
    } else {
        format!("{sign}{lead}.{rest}e{exponent:+}")
    }
}

fn fixed(x: f64, max_fraction: usize) -> String {
    // Shortest round-trip digits, then half-up at the last kept place.
    let raw = format!("{}", x.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    let mut padded = frac_part.to_string();
    if padded.len() < max_fraction {
        padded.extend(std::iter::repeat_n('0', max_fraction - padded.len()));
    }
    let digits = format!("{int_part}{padded}");
    let keep = int_part.len() + max_fraction;
    let rounded = round_half_up(&digits, keep);
    let (int_part, frac) = rounded.split_at(rounded.len() - max_fraction);
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + 4);
    if x.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Keep the first `keep` digits of an unsigned digit string, rounding ties away from
/// zero. A carry out of the leading digit yields `keep + 1` digits.
fn round_half_up(digits: &str, keep: usize) -> String {
    let mut kept: Vec<u8> = digits.bytes().take(keep).collect();
    kept.resize(keep, b'0');
    let round_up = digits.as_bytes().get(keep).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }
    kept.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_plain() {
        assert_eq!(format(0.0), "0");
        assert_eq!(format(-0.0), "0");
    }

    #[test]
    fn large_and_tiny_values_are_exponential() {
        assert_eq!(format(1_234_567.0), "1.235e+6");
        assert_eq!(format(1.0e6), "1.000e+6");
        assert_eq!(format(0.0001), "1.000e-4");
        assert_eq!(format(-6.674e-11), "-6.674e-11");
        assert_eq!(format(5.972e24), "5.972e+24");
    }

    #[test]
    fn mid_range_values_are_fixed_and_grouped() {
        assert_eq!(format(42.5), "42.5");
        assert_eq!(format(1_234.5), "1,234.5");
        assert_eq!(format(999_999.0), "999,999");
        assert_eq!(format(-273.15), "-273.15");
        assert_eq!(format(0.001), "0.001");
        assert_eq!(format(1.0 / 3.0), "0.333333");
        assert_eq!(format(2.0), "2");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format(1_234_500.0), "1.235e+6");
        assert_eq!(format(1_000_500.0), "1.001e+6");
        assert_eq!(format(2_502_500.0), "2.503e+6");
        assert_eq!(format(-1_234_500.0), "-1.235e+6");
        assert_eq!(format(0.0078125), "0.007813");
        assert_eq!(format(-0.0078125), "-0.007813");
        assert_eq!(format(0.000_062_5), "6.250e-5");
    }

    #[test]
    fn rounding_carries_into_the_next_place() {
        assert_eq!(format(9_999_500.0), "1.000e+7");
        assert_eq!(format(999_999.999_999_5), "1,000,000");
        assert_eq!(format(0.999_999_5), "1");
        assert_eq!(format(1.000_000_4), "1");
    }

    #[test]
    fn non_finite_values_render() {
        assert_eq!(format(f64::NAN), "NaN");
        assert_eq!(format(f64::INFINITY), "Infinity");
        assert_eq!(format(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn entry_buffers_keep_typed_fraction() {
        assert_eq!(display_entry(""), "");
        assert_eq!(display_entry("."), ".");
        assert_eq!(display_entry("1234.50"), "1,234.50");
        assert_eq!(display_entry("-98765"), "-98,765");
        assert_eq!(display_entry("0.25"), "0.25");
        assert_eq!(display_entry("007"), "7");
        assert_eq!(display_entry("NaN"), "NaN");
        assert_eq!(display_entry("inf"), "Infinity");
    }
}
