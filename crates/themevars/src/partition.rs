//! Partitioning a dictionary into light, dark and theme-neutral groups.
//!
//! ```text
//! light = color/effect tokens with a `light-mode` segment
//! dark  = color/effect tokens with a `dark-mode` segment
//! rest  = color/custom-shadow tokens with neither marker
//! ```
//!
//! Each group is a stable filter over the dictionary. The `rest` check looks
//! at markers without any type restriction, so a `custom-shadow` token with
//! a `light-mode` segment lands nowhere. Theme-neutral `effect` tokens land
//! nowhere either.

use std::fmt;

use crate::classify::{is_dark_theme_token, is_light_theme_token};
use crate::token::{Dictionary, Token, TokenType};

const THEMED_TYPES: [TokenType; 2] = [TokenType::Color, TokenType::Effect];
const NEUTRAL_TYPES: [TokenType; 2] = [TokenType::Color, TokenType::CustomShadow];

/// One of the three output groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Light,
    Dark,
    Rest,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Light, Group::Dark, Group::Rest];

    /// The name word stripped from variable names rendered in this group.
    pub fn qualifier(self) -> &'static str {
        match self {
            Group::Light => "light",
            Group::Dark => "dark",
            Group::Rest => "desktop",
        }
    }

    /// Returns `true` if `token` belongs in this group.
    pub fn admits(self, token: &Token) -> bool {
        match self {
            Group::Light => is_light_theme_token(token, Some(&THEMED_TYPES)),
            Group::Dark => is_dark_theme_token(token, Some(&THEMED_TYPES)),
            Group::Rest => {
                NEUTRAL_TYPES.contains(&token.token_type)
                    && !is_dark_theme_token(token, None)
                    && !is_light_theme_token(token, None)
            }
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Group::Light => "light",
            Group::Dark => "dark",
            Group::Rest => "rest",
        })
    }
}

/// The three groups of a partitioned dictionary, borrowing its tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups<'a> {
    pub light: Vec<&'a Token>,
    pub dark: Vec<&'a Token>,
    pub rest: Vec<&'a Token>,
}

impl<'a> Groups<'a> {
    /// The tokens of one group, in dictionary order.
    pub fn get(&self, group: Group) -> &[&'a Token] {
        match group {
            Group::Light => &self.light,
            Group::Dark => &self.dark,
            Group::Rest => &self.rest,
        }
    }
}

/// Splits `dictionary` into its light, dark and rest groups.
pub fn partition(dictionary: &Dictionary) -> Groups<'_> {
    let select = |group: Group| {
        dictionary
            .iter()
            .filter(move |token| group.admits(token))
            .collect::<Vec<_>>()
    };

    let groups = Groups {
        light: select(Group::Light),
        dark: select(Group::Dark),
        rest: select(Group::Rest),
    };

    log::debug!(
        "partitioned {} tokens: light={} dark={} rest={}",
        dictionary.len(),
        groups.light.len(),
        groups.dark.len(),
        groups.rest.len()
    );

    groups
}
