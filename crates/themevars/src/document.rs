//! Assembling the final stylesheet.
//!
//! The document always has five blocks, in this order, whether or not a
//! group has tokens:
//!
//! 1. `:root` with theme-neutral tokens
//! 2. `@media (prefers-color-scheme: light)` with light tokens
//! 3. `@media (prefers-color-scheme: dark)` with dark tokens
//! 4. `[data-theme="light"]` with light tokens
//! 5. `[data-theme="dark"]` with dark tokens

use crate::emit::Emitter;
use crate::header::FileHeader;
use crate::options::Options;
use crate::partition::{partition, Group};
use crate::token::Dictionary;

/// Generates the themed stylesheet for `dictionary`.
///
/// # Example
///
/// ```rust
/// use themevars::{format_css_vars, Dictionary, FileHeader, Options, Token, TokenPath};
///
/// let dictionary = Dictionary::new()
///     .with(Token::new(TokenPath::parse("color.surface").unwrap(), "color", "#000000"));
///
/// let css = format_css_vars(&dictionary, &Options::default(), &FileHeader::hidden());
/// assert!(css.starts_with(":root {\n--color-surface: #000000;\n}\n\n"));
/// ```
pub fn format_css_vars(dictionary: &Dictionary, options: &Options, header: &FileHeader) -> String {
    let groups = partition(dictionary);
    let emitter = Emitter::new(dictionary, options);
    let block = |group: Group| emitter.render(groups.get(group), group);

    let mut css = header.render();

    css.push_str(":root {\n");
    css.push_str(&block(Group::Rest));
    css.push_str("\n}\n\n");

    for group in [Group::Light, Group::Dark] {
        css.push_str(&format!("@media (prefers-color-scheme: {}) {{\n", group));
        css.push_str(" :root {\n");
        css.push_str(&block(group));
        css.push_str("\n }\n}\n\n");
    }

    for group in [Group::Light, Group::Dark] {
        css.push_str(&format!("[data-theme=\"{}\"] {{\n", group));
        css.push_str(&block(group));
        css.push_str("\n}\n");
        if group == Group::Light {
            css.push('\n');
        }
    }

    css
}

/// Like [`format_css_vars`], substituting default options when none are given.
pub fn format_css_vars_with(
    dictionary: &Dictionary,
    options: Option<&Options>,
    header: &FileHeader,
) -> String {
    match options {
        Some(options) => format_css_vars(dictionary, options, header),
        None => format_css_vars(dictionary, &Options::default(), header),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_DOCUMENT: &str = ":root {\n\n}\n\n\
@media (prefers-color-scheme: light) {\n :root {\n\n }\n}\n\n\
@media (prefers-color-scheme: dark) {\n :root {\n\n }\n}\n\n\
[data-theme=\"light\"] {\n\n}\n\n\
[data-theme=\"dark\"] {\n\n}\n";

    #[test]
    fn test_empty_dictionary_has_all_blocks() {
        let css = format_css_vars(&Dictionary::new(), &Options::default(), &FileHeader::hidden());
        assert_eq!(css, EMPTY_DOCUMENT);
    }

    #[test]
    fn test_header_is_prepended() {
        let css = format_css_vars(&Dictionary::new(), &Options::default(), &FileHeader::default());
        assert_eq!(
            css,
            format!("/**\n * Do not edit directly\n */\n\n{}", EMPTY_DOCUMENT)
        );
    }

    #[test]
    fn test_missing_options_use_defaults() {
        let dictionary = Dictionary::new();
        let header = FileHeader::hidden();
        assert_eq!(
            format_css_vars_with(&dictionary, None, &header),
            format_css_vars(&dictionary, &Options::default(), &header)
        );
    }
}
