// Phone normalization for user-entered numbers.
// Heuristic and Bulgaria-specific: anything without an explicit country
// code is assumed to be a local number. Ambiguous foreign numbers get
// misclassified; callers rely on the output format, so the rule order
// below must not change.

// Canonicalize a raw phone string to "+<digits>".
// None means the input has too few digits to be a phone number.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let has_plus = raw.trim().starts_with('+');

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 8 {
        return None;
    }

    let normalized = if has_plus {
        // already international, just strip formatting
        format!("+{}", digits)
    } else if digits.starts_with('0') {
        // local Bulgarian format: 0888... -> +359888...
        format!("+359{}", &digits[1..])
    } else if digits.starts_with("359") {
        // country code present, plus sign missing
        format!("+{}", digits)
    } else {
        // mobile number without its country code (8...), or best effort
        format!("+359{}", digits)
    };

    Some(normalized)
}
