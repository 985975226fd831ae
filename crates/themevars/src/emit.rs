//! Rendering a group of tokens as custom-property declarations.

use std::collections::HashSet;

use crate::name::VariableName;
use crate::options::Options;
use crate::partition::Group;
use crate::token::{Dictionary, Token, TokenPath};

/// Renders declaration blocks for tokens of one dictionary.
#[derive(Debug, Clone)]
pub struct Emitter<'a> {
    /// Paths declared by the dictionary, for dangling-reference checks.
    known: HashSet<&'a TokenPath>,
    options: &'a Options,
}

impl<'a> Emitter<'a> {
    pub fn new(dictionary: &'a Dictionary, options: &'a Options) -> Self {
        Self {
            known: dictionary.iter().map(|token| &token.path).collect(),
            options,
        }
    }

    /// Renders `tokens` as declarations named for `group`, one per line.
    ///
    /// Lines are joined with `\n`; the block has no trailing newline and an
    /// empty group renders as the empty string.
    pub fn render(&self, tokens: &[&Token], group: Group) -> String {
        tokens
            .iter()
            .map(|token| self.declaration(token, group))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A single declaration line, without line terminator.
    pub fn declaration(&self, token: &Token, group: Group) -> String {
        let formatting = &self.options.formatting;
        let name = self.variable_name(token, group);
        let value = self.value(token, group);

        let mut line = format!(
            "{}{}{}{} {}{}",
            formatting.indentation,
            formatting.property_prefix,
            name,
            formatting.separator,
            value,
            formatting.suffix
        );
        if formatting.comments {
            if let Some(comment) = &token.comment {
                line.push_str(&format!(" /* {} */", comment));
            }
        }
        line
    }

    fn variable_name(&self, token: &Token, group: Group) -> VariableName {
        VariableName::from_path(&token.path, self.options.prefix.as_deref()).normalized(group)
    }

    fn value(&self, token: &Token, group: Group) -> String {
        let reference = match (&token.reference, self.options.output_references) {
            (Some(reference), true) => reference,
            _ => return token.value.clone(),
        };

        if !self.known.contains(reference) {
            log::warn!(
                "token '{}' references '{}', which is not in the dictionary",
                token.path,
                reference
            );
        }

        let target = VariableName::from_path(reference, self.options.prefix.as_deref());
        format!(
            "var({}{})",
            self.options.formatting.property_prefix,
            target.normalized(group)
        )
    }
}
