//! Phone number masking for the strict phone policy
//!
//! Keystrokes are reduced to a digit stream, anchored to the country code and
//! regrouped as `+CCC D DD DDD DD`. Formatting runs before validation so the
//! validity flag always reflects what is on screen.

/// Country calling code every number is anchored to
pub const COUNTRY_CODE: &str = "370";

/// Country code plus eight national digits
const MAX_DIGITS: usize = 11;

/// Digit group sizes: country code, mobile prefix, then 2-3-2
const GROUPS: [usize; 5] = [3, 1, 2, 3, 2];

/// Format raw input into the canonical phone display.
///
/// Applying the formatter to its own output returns it unchanged.
pub fn format_phone(raw: &str) -> String {
    group_digits(&normalize_digits(raw))
}

/// Remove the last digit of a formatted number and reformat.
///
/// Plain character deletion would only strip a separator and the formatter
/// would put it straight back.
pub fn erase_digit(formatted: &str) -> String {
    let mut digits = normalize_digits(formatted);
    digits.pop();
    group_digits(&digits)
}

fn normalize_digits(raw: &str) -> String {
    let mut digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    // Still typing the country code itself
    if COUNTRY_CODE.starts_with(digits.as_str()) {
        return digits;
    }

    if !digits.starts_with(COUNTRY_CODE) {
        digits.insert_str(0, COUNTRY_CODE);
        digits.truncate(MAX_DIGITS);
    }
    digits
}

fn group_digits(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(digits.len() + GROUPS.len());
    out.push('+');
    let mut rest = digits;
    for (i, size) in GROUPS.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            out.push(' ');
        }
        let (head, tail) = rest.split_at((*size).min(rest.len()));
        out.push_str(head);
        rest = tail;
    }
    out
}
