/// Type keywords that open a declaration.
const DATA_TYPES: [&str; 3] = ["int", "float", "double"];

pub fn is_data_type(token: &str) -> bool {
    DATA_TYPES.contains(&token)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

/// Integer (`42`) or float (`4.2`) literal. Both halves of a float need digits.
pub fn is_literal(token: &str) -> bool {
    match token.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(token),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
