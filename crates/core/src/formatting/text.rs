/// Capitalizes the first letter of a string, leaving the rest unchanged.
/// The empty string maps to the empty string.
///
/// Uppercasing is Unicode-aware, so the result may be longer than the
/// input by a character (e.g. "ß").
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
