//! Form input primitives.

mod text_input;

pub use text_input::TextInput;

use rust_decimal::Decimal;

/// Parses a typed amount, enforcing the client-side validation rule:
/// it must be a number and it must be positive.
///
/// # Errors
///
/// Returns a human-readable message suitable for inline display.
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Amount is required.".to_string());
    }
    let amount: Decimal = trimmed
        .parse()
        .map_err(|_| "Amount must be a number.".to_string())?;
    if amount <= Decimal::ZERO {
        return Err("Amount must be positive.".to_string());
    }
    Ok(amount)
}

/// Validates a PAN (permanent account number): five letters, four
/// digits, one letter.
///
/// # Errors
///
/// Returns a human-readable message suitable for inline display.
pub fn validate_pan(raw: &str) -> Result<String, String> {
    let pan = raw.trim().to_ascii_uppercase();
    let chars: Vec<char> = pan.chars().collect();
    let well_formed = chars.len() == 10
        && chars[..5].iter().all(char::is_ascii_alphabetic)
        && chars[5..9].iter().all(char::is_ascii_digit)
        && chars[9].is_ascii_alphabetic();
    if well_formed {
        Ok(pan)
    } else {
        Err("PAN must be 5 letters, 4 digits, then a letter.".to_string())
    }
}

/// Validates an Aadhaar number: exactly twelve digits.
///
/// # Errors
///
/// Returns a human-readable message suitable for inline display.
pub fn validate_aadhaar(raw: &str) -> Result<String, String> {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err("Aadhaar must be exactly 12 digits.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn accepts_positive_amounts() {
        assert_eq!(parse_amount("500"), Ok(dec!(500)));
        assert_eq!(parse_amount(" 12.50 "), Ok(dec!(12.50)));
    }

    #[test]
    fn rejects_empty_zero_and_negative() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(parse_amount("five hundred").is_err());
    }

    #[test]
    fn validates_pan_shape() {
        assert_eq!(validate_pan("abcde1234f"), Ok("ABCDE1234F".to_string()));
        assert!(validate_pan("ABCDE12345").is_err());
        assert!(validate_pan("AB1234567F").is_err());
        assert!(validate_pan("short").is_err());
    }

    #[test]
    fn validates_aadhaar_digits() {
        assert_eq!(
            validate_aadhaar("1234 5678 9012"),
            Ok("123456789012".to_string())
        );
        assert!(validate_aadhaar("123456789").is_err());
        assert!(validate_aadhaar("12345678901a").is_err());
    }
}
