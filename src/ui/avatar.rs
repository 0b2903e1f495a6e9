//! Avatar label derivation for table rows.

/// Label shown in a row's avatar cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarLabel {
    /// No usable name; the render layer shows a generic person glyph.
    Fallback,
    /// One or two characters taken from the name.
    Monogram(String),
}

/// Derive the avatar label for a student name.
///
/// The name is trimmed first. An empty result yields the fallback marker, a
/// single-token name contributes its first character, and anything else
/// contributes the first and last characters of the trimmed text. Works on
/// chars, so multi-byte names never split.
pub fn avatar_label(name: &str) -> AvatarLabel {
    let trimmed = name.trim();
    let Some(first) = trimmed.chars().next() else {
        return AvatarLabel::Fallback;
    };

    if !trimmed.contains(char::is_whitespace) {
        return AvatarLabel::Monogram(first.to_string());
    }

    let last = trimmed.chars().last().unwrap_or(first);
    AvatarLabel::Monogram(format!("{first}{last}"))
}
