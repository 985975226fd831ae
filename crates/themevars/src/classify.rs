//! Theme classification of tokens by naming convention.
//!
//! A token is scoped to a theme when one of its path segments is a theme
//! marker: `light-mode` or `dark-mode`. The comparison is per segment, so
//! `light-modest` or `highlight-mode` never count.

use crate::token::{Token, TokenType};

/// A theme a token can be scoped to through its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMarker {
    Light,
    Dark,
}

impl ThemeMarker {
    /// The reserved path segment for this theme.
    pub fn segment(self) -> &'static str {
        match self {
            ThemeMarker::Light => "light-mode",
            ThemeMarker::Dark => "dark-mode",
        }
    }

    /// Returns `true` if `token` carries this marker and, when
    /// `allowed_types` is given, its type is one of them.
    pub fn matches(self, token: &Token, allowed_types: Option<&[TokenType]>) -> bool {
        let type_allowed = allowed_types.map_or(true, |types| types.contains(&token.token_type));
        type_allowed && token.path.contains_segment(self.segment())
    }
}

/// Tests whether `token` belongs to the light theme.
pub fn is_light_theme_token(token: &Token, allowed_types: Option<&[TokenType]>) -> bool {
    ThemeMarker::Light.matches(token, allowed_types)
}

/// Tests whether `token` belongs to the dark theme.
pub fn is_dark_theme_token(token: &Token, allowed_types: Option<&[TokenType]>) -> bool {
    ThemeMarker::Dark.matches(token, allowed_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenPath;

    fn token(dotted: &str, token_type: &str) -> Token {
        Token::new(TokenPath::parse(dotted).unwrap(), token_type, "#fff")
    }

    #[test]
    fn test_light_marker_without_type_restriction() {
        let t = token("color.brand.light-mode.primary", "dimension");
        assert!(is_light_theme_token(&t, None));
        assert!(!is_dark_theme_token(&t, None));
    }

    #[test]
    fn test_type_restriction_applies() {
        let allowed = [TokenType::Color, TokenType::Effect];
        assert!(is_dark_theme_token(
            &token("shadow.dark-mode.soft", "effect"),
            Some(&allowed)
        ));
        assert!(!is_dark_theme_token(
            &token("shadow.dark-mode.soft", "custom-shadow"),
            Some(&allowed)
        ));
    }

    #[test]
    fn test_marker_must_be_whole_segment() {
        assert!(!is_light_theme_token(&token("color.light-mode-x.a", "color"), None));
        assert!(!is_light_theme_token(&token("color.light.mode", "color"), None));
        assert!(!is_dark_theme_token(&token("color.darkmode.a", "color"), None));
    }

    #[test]
    fn test_empty_allowed_types_rejects_everything() {
        assert!(!is_light_theme_token(
            &token("color.light-mode.a", "color"),
            Some(&[])
        ));
    }

    #[test]
    fn test_marker_segments() {
        assert_eq!(ThemeMarker::Light.segment(), "light-mode");
        assert_eq!(ThemeMarker::Dark.segment(), "dark-mode");
    }
}
