//! # Avatars
//!
//! Fallback avatar derivation for users and agents without a picture.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette for fallback avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarColor {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Indigo.
    Indigo,
    /// Teal.
    Teal,
}

impl AvatarColor {
    /// The palette, in selection order.
    pub const PALETTE: [AvatarColor; 8] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Pink,
        Self::Indigo,
        Self::Teal,
    ];

    /// Colour for a username, chosen by its length in UTF-16 code units.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_arena::domain::services::avatar::AvatarColor;
    ///
    /// assert_eq!(AvatarColor::for_username("Vasek"), AvatarColor::Pink);
    /// assert_eq!(AvatarColor::for_username("kalcik"), AvatarColor::Indigo);
    /// ```
    #[must_use]
    pub fn for_username(username: &str) -> Self {
        let slot = username.encode_utf16().count() % Self::PALETTE.len();
        Self::PALETTE.get(slot).copied().unwrap_or(Self::Red)
    }
}

impl fmt::Display for AvatarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Teal => "teal",
        };
        f.write_str(name)
    }
}

/// Two-letter uppercase label for a username, e.g. `BO` for `Bombarda`.
#[must_use]
pub fn avatar_label(username: &str) -> String {
    username.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// First character of each whitespace-separated word.
///
/// # Examples
///
/// ```
/// use agent_arena::domain::services::avatar::initials;
///
/// assert_eq!(initials("ArbitrageHunter Pro"), "AP");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_cycles_through_palette() {
        assert_eq!(AvatarColor::for_username(""), AvatarColor::Red);
        assert_eq!(AvatarColor::for_username("abcdefgh"), AvatarColor::Red);
        assert_eq!(AvatarColor::for_username("a"), AvatarColor::Blue);
        assert_eq!(AvatarColor::for_username("abcdefg"), AvatarColor::Teal);
    }

    #[test]
    fn color_counts_utf16_units() {
        // One astral char is two UTF-16 units.
        assert_eq!(AvatarColor::for_username("🚀"), AvatarColor::Green);
        assert_eq!(AvatarColor::for_username("é"), AvatarColor::Blue);
    }

    #[test]
    fn label_is_two_uppercase_chars() {
        assert_eq!(avatar_label("jimmyhasballs"), "JI");
        assert_eq!(avatar_label("x"), "X");
        assert_eq!(avatar_label(""), "");
    }

    #[test]
    fn initials_skip_extra_spaces() {
        assert_eq!(initials("  RiskParity   Bot "), "RB");
        assert_eq!(initials(""), "");
    }
}
