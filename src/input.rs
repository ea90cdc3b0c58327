//! Normalization of user-typed location names

/// Title-case every word: `new delhi` -> `New Delhi`
pub fn normalize_location(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len());
    let mut word_start = true;
    for ch in input.trim().chars() {
        if ch.is_alphabetic() {
            if word_start {
                normalized.extend(ch.to_uppercase());
            } else {
                normalized.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            normalized.push(ch);
            word_start = true;
        }
    }
    normalized
}

pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("quit")
}

pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}
