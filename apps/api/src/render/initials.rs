/// Display name used when none is known.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// Avatar initials: first character of each whitespace-separated token, uppercased,
/// at most two characters. A missing or blank name uses [`FALLBACK_DISPLAY_NAME`].
pub fn initials(name: Option<&str>) -> String {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_DISPLAY_NAME);

    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
