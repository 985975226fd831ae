//! Generated-file header comment.

use serde::{Deserialize, Serialize};

/// The comment block placed above the generated stylesheet.
///
/// The generation time is supplied by the caller so that output stays a
/// pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileHeader {
    /// When `false`, no header is written at all.
    pub show: bool,
    pub messages: Vec<String>,
    pub generated_on: Option<String>,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            show: true,
            messages: vec!["Do not edit directly".to_string()],
            generated_on: None,
        }
    }
}

impl FileHeader {
    /// A header that renders as the empty string.
    pub fn hidden() -> Self {
        Self {
            show: false,
            ..Self::default()
        }
    }

    pub fn generated_on(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_on = Some(timestamp.into());
        self
    }

    pub fn message(mut self, line: impl Into<String>) -> Self {
        self.messages.push(line.into());
        self
    }

    /// Renders the header, including its trailing blank line.
    pub fn render(&self) -> String {
        if !self.show {
            return String::new();
        }

        let mut out = String::from("/**\n");
        for line in &self.messages {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
        if let Some(timestamp) = &self.generated_on {
            out.push_str(" * Generated on ");
            out.push_str(timestamp);
            out.push('\n');
        }
        out.push_str(" */\n\n");
        out
    }
}
