//! Significant-digit formatting for summary text and labels

/// Formats a value to the given number of significant digits
///
/// Follows the conventions of C's `%g`: trailing zeros are stripped, and
/// exponent notation takes over when the decimal exponent falls below -4 or
/// reaches the digit count. Non-finite values print via the standard `f64`
/// formatting.
///
/// # Examples
///
/// ```rust
/// use unitcircle::diagram::format::sig;
///
/// assert_eq!(sig(0.7071067811865476, 6), "0.707107");
/// assert_eq!(sig(1.0000000000000002, 6), "1");
/// assert_eq!(sig(1.2246467991473532e-16, 6), "1.22465e-16");
/// ```
pub fn sig(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // Round via exponent notation first; rounding may bump the exponent
    // (e.g. 999999.5 at six digits becomes 1e6).
    let rounded = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = rounded
        .split_once('e')
        .expect("f64 exponent formatting always contains 'e'");
    let exp: i32 = exp.parse().expect("exponent is a valid integer");

    if exp < -4 || exp >= digits as i32 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        format!("{}e{}", mantissa, exp)
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        if fixed.contains('.') {
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            fixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_drop_the_point() {
        assert_eq!(sig(45.0, 6), "45");
        assert_eq!(sig(1.0, 6), "1");
        assert_eq!(sig(-360.0, 6), "-360");
    }

    #[test]
    fn test_six_digit_rounding() {
        assert_eq!(sig(0.7853981633974483, 6), "0.785398");
        assert_eq!(sig(0.7071067811865476, 6), "0.707107");
        assert_eq!(sig(3.141592653589793, 6), "3.14159");
    }

    #[test]
    fn test_three_digit_rounding() {
        assert_eq!(sig(1.0000000000000002, 3), "1");
        assert_eq!(sig(0.5773502691896257, 3), "0.577");
        assert_eq!(sig(-1.7320508075688772, 3), "-1.73");
    }

    #[test]
    fn test_small_values_use_exponent_notation() {
        assert_eq!(sig(1.2246467991473532e-16, 6), "1.22465e-16");
        assert_eq!(sig(1e-5, 6), "1e-5");
        assert_eq!(sig(0.0001, 6), "0.0001");
    }

    #[test]
    fn test_large_values_use_exponent_notation() {
        assert_eq!(sig(1234567.0, 6), "1.23457e6");
        assert_eq!(sig(999999.0, 6), "999999");
    }

    #[test]
    fn test_rounding_can_bump_the_exponent() {
        assert_eq!(sig(999999.5, 6), "1e6");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(sig(0.0, 6), "0");
        assert_eq!(sig(-0.0, 6), "0");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(sig(f64::NAN, 6), "NaN");
        assert_eq!(sig(f64::INFINITY, 6), "inf");
    }
}
