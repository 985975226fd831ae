//! CSS variable names as ordered words.
//!
//! A [`VariableName`] is built from a token path by splitting every segment
//! into lowercase kebab words. Normalizing a name for a [`Group`] drops the
//! group's qualifier word (`light`, `dark` or `desktop`) wherever another
//! word follows it:
//!
//! ```text
//! color.brand.light-mode.primary  ->  color-brand-light-mode-primary
//! normalized for Group::Light     ->  color-brand-mode-primary
//! desktop.shadow.card             ->  desktop-shadow-card
//! normalized for Group::Rest      ->  shadow-card
//! ```
//!
//! Only whole words are ever dropped, and only from names. Values pass
//! through untouched.

use std::fmt;

use crate::partition::Group;
use crate::token::TokenPath;

/// A CSS custom property name, without the leading `--`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableName {
    words: Vec<String>,
}

impl VariableName {
    /// Builds the name for `path`, with `prefix` prepended when given.
    pub fn from_path(path: &TokenPath, prefix: Option<&str>) -> Self {
        let words = prefix
            .into_iter()
            .chain(path.segments().iter().map(String::as_str))
            .flat_map(kebab_words)
            .collect();
        Self { words }
    }

    /// Drops the qualifier word of `group` wherever it is not the last word.
    pub fn normalized(&self, group: Group) -> Self {
        let qualifier = group.qualifier();
        let last = self.words.len().saturating_sub(1);
        let words = self
            .words
            .iter()
            .enumerate()
            .filter(|(i, word)| *i == last || word.as_str() != qualifier)
            .map(|(_, word)| word.clone())
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join("-"))
    }
}

/// Splits one segment into lowercase words.
///
/// Breaks on any non-alphanumeric character, on lower-to-upper case changes
/// (`brandPrimary`), between letters and digits (`gray100`), and before the
/// last capital of an uppercase run that starts a new word (`XMLHttp`).
fn kebab_words(segment: &str) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }
        if let Some(&p) = i.checked_sub(1).and_then(|j| chars.get(j)) {
            let next = chars.get(i + 1).copied();
            let camel = p.is_lowercase() && c.is_uppercase();
            let acronym_end = p.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            let digit_edge =
                p.is_alphanumeric() && p.is_ascii_digit() != c.is_ascii_digit();
            if camel || acronym_end || digit_edge {
                flush(&mut words, &mut current);
            }
        }
        current.extend(c.to_lowercase());
    }
    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
