/// Renders a base-unit amount as a decimal string using `decimals` places.
///
/// The fractional part keeps at least one digit and drops trailing zeros, so
/// `1_000_000_000_000_000_000` with 18 decimals reads "1.0" and `6` reads
/// "0.000000000000000006". With zero decimals only the whole part is printed.
pub fn format_units(amount: u128, decimals: u8) -> String {
    let digits = amount.to_string();
    let places = decimals as usize;

    if places == 0 {
        return digits;
    }

    let (whole, fraction) = if digits.len() > places {
        let split = digits.len() - places;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = places))
    };

    let trimmed = fraction.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };

    format!("{}.{}", whole, fraction)
}
